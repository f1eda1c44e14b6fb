use egui::Pos2;

use crate::capture::DragEvent;

/// What egui reported about the canvas pointer during one frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerSample {
    pub drag_started: bool,
    pub dragging: bool,
    pub drag_stopped: bool,
    /// Pointer position relative to the canvas origin
    pub position: Option<Pos2>,
}

impl PointerSample {
    /// Read a sample from the canvas response
    pub fn from_response(response: &egui::Response) -> Self {
        let origin = response.rect.min;
        Self {
            drag_started: response.drag_started(),
            dragging: response.dragged(),
            drag_stopped: response.drag_stopped(),
            position: response.interact_pointer_pos().map(|p| (p - origin).to_pos2()),
        }
    }
}

/// Converts per-frame egui pointer state into an ordered drag stream
#[derive(Debug, Default)]
pub struct InputHandler {
    in_drag: bool,
    last_position: Option<Pos2>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_drag(&self) -> bool {
        self.in_drag
    }

    /// Every drag this produces is `Start`, then any number of `Change`,
    /// then `End`. A drag that egui drops without a stop ends in `Abandon`.
    pub fn process(&mut self, sample: PointerSample) -> Vec<DragEvent> {
        let mut events = Vec::new();

        if sample.drag_started && !self.in_drag {
            if let Some(pos) = sample.position {
                events.push(DragEvent::Start(pos));
                self.in_drag = true;
                self.last_position = Some(pos);
            }
        } else if self.in_drag && sample.dragging {
            // egui reports a drag every frame the button is held, moved or not
            if let Some(pos) = sample.position.filter(|pos| Some(*pos) != self.last_position) {
                events.push(DragEvent::Change(pos));
                self.last_position = Some(pos);
            }
        }

        if self.in_drag && (sample.drag_stopped || !sample.dragging) {
            if let Some(pos) = sample.position.filter(|pos| Some(*pos) != self.last_position) {
                events.push(DragEvent::Change(pos));
            }
            events.push(if sample.drag_stopped {
                DragEvent::End
            } else {
                DragEvent::Abandon
            });
            self.in_drag = false;
            self.last_position = None;
        }

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    fn sample(
        started: bool,
        dragging: bool,
        stopped: bool,
        position: Option<Pos2>,
    ) -> PointerSample {
        PointerSample {
            drag_started: started,
            dragging,
            drag_stopped: stopped,
            position,
        }
    }

    #[test]
    fn test_full_drag_sequence() {
        let mut handler = InputHandler::new();

        let events = handler.process(sample(true, true, false, Some(pos2(0.0, 0.0))));
        assert_eq!(events, vec![DragEvent::Start(pos2(0.0, 0.0))]);
        assert!(handler.in_drag());

        let events = handler.process(sample(false, true, false, Some(pos2(10.0, 0.0))));
        assert_eq!(events, vec![DragEvent::Change(pos2(10.0, 0.0))]);

        let events = handler.process(sample(false, false, true, Some(pos2(10.0, 0.0))));
        assert_eq!(events, vec![DragEvent::End]);
        assert!(!handler.in_drag());
    }

    #[test]
    fn test_stationary_pointer_adds_no_points() {
        let mut handler = InputHandler::new();
        handler.process(sample(true, true, false, Some(pos2(3.0, 3.0))));

        let events = handler.process(sample(false, true, false, Some(pos2(3.0, 3.0))));
        assert!(events.is_empty());
    }

    #[test]
    fn test_tap_in_one_frame() {
        let mut handler = InputHandler::new();
        let events = handler.process(sample(true, true, true, Some(pos2(4.0, 2.0))));
        assert_eq!(events, vec![DragEvent::Start(pos2(4.0, 2.0)), DragEvent::End]);
    }

    #[test]
    fn test_lost_drag_is_abandoned() {
        let mut handler = InputHandler::new();
        handler.process(sample(true, true, false, Some(pos2(1.0, 1.0))));

        let events = handler.process(sample(false, false, false, None));
        assert_eq!(events, vec![DragEvent::Abandon]);
        assert!(!handler.in_drag());
    }

    #[test]
    fn test_idle_frames_are_silent() {
        let mut handler = InputHandler::new();
        assert!(handler.process(PointerSample::default()).is_empty());
        assert!(handler.process(sample(false, false, true, Some(pos2(1.0, 1.0)))).is_empty());
    }
}
