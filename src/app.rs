use egui::Color32;

use crate::capture::StrokeCapture;
use crate::error::DrawingResult;
use crate::event::RepaintOnChange;
use crate::input::{InputHandler, PointerSample};
use crate::model::DrawingModel;
use crate::panels;
use crate::renderer::Renderer;
use crate::style::StyleState;

/// Only the style controls survive a restart; the drawing itself is never persisted.
#[derive(Debug, Default)]
pub struct SketchApp {
    style: StyleState,
    model: DrawingModel,
    capture: StrokeCapture,
    input: InputHandler,
    renderer: Renderer,
}

impl SketchApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());

        let style: StyleState = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();
        log::info!("Starting with width {} and color {:?}", style.width(), style.color());

        let model = DrawingModel::new();
        model.subscribe(Box::new(RepaintOnChange::new(cc.egui_ctx.clone())));

        Self {
            style,
            model,
            capture: StrokeCapture::new(&style),
            input: InputHandler::new(),
            renderer: Renderer::default(),
        }
    }

    pub fn style(&self) -> &StyleState {
        &self.style
    }

    pub fn model(&self) -> &DrawingModel {
        &self.model
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn set_color(&mut self, color: Color32) {
        self.style.set_color(color);
        let result = self.capture.on_style_changed(&mut self.model, &self.style);
        report(result);
    }

    pub fn set_width(&mut self, width: f32) {
        let result = self
            .style
            .set_width(width)
            .and_then(|()| self.capture.on_style_changed(&mut self.model, &self.style));
        report(result);
    }

    pub fn clear(&mut self) {
        self.model.clear();
    }

    /// Feed this frame's pointer activity on the canvas into the capture
    pub fn handle_canvas(&mut self, response: &egui::Response) {
        self.handle_pointer(PointerSample::from_response(response));
    }

    fn handle_pointer(&mut self, sample: PointerSample) {
        for event in self.input.process(sample) {
            let result = self.capture.handle(&mut self.model, event, &self.style);
            report(result);
        }
    }
}

// Contract violations are logged, never shown to the user
fn report<T>(result: DrawingResult<T>) {
    if let Err(err) = result {
        log::warn!("Ignoring drawing error: {err}");
    }
}

impl eframe::App for SketchApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.style);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Bottom bar first so the canvas gets the remaining space
        panels::style_panel(self, ctx);
        panels::canvas_panel(self, ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    fn pointer(started: bool, dragging: bool, stopped: bool, x: f32, y: f32) -> PointerSample {
        PointerSample {
            drag_started: started,
            dragging,
            drag_stopped: stopped,
            position: Some(pos2(x, y)),
        }
    }

    #[test]
    fn test_canvas_drag_commits_stroke() {
        let mut app = SketchApp::default();

        app.handle_pointer(pointer(true, true, false, 0.0, 0.0));
        app.handle_pointer(pointer(false, true, false, 10.0, 0.0));
        app.handle_pointer(pointer(false, true, false, 10.0, 10.0));
        assert!(app.model().is_drawing());

        app.handle_pointer(pointer(false, false, true, 10.0, 10.0));

        assert_eq!(app.model().len(), 1);
        assert_eq!(
            app.model().committed_strokes()[0].points(),
            &[pos2(0.0, 0.0), pos2(10.0, 0.0), pos2(10.0, 10.0)]
        );
    }

    #[test]
    fn test_style_controls_reach_active_stroke() {
        let mut app = SketchApp::default();
        app.set_width(8.0);
        app.set_color(Color32::RED);

        app.handle_pointer(pointer(true, true, false, 1.0, 1.0));
        app.set_width(2.0);
        app.set_color(Color32::BLUE);

        let active = app.model().active_stroke().unwrap().style();
        assert_eq!(active.width(), 2.0);
        assert_eq!(active.color(), Color32::BLUE);

        app.handle_pointer(pointer(false, false, true, 1.0, 1.0));
        assert_eq!(app.model().committed_strokes()[0].style().width(), 2.0);
    }

    #[test]
    fn test_bad_width_is_ignored() {
        let mut app = SketchApp::default();
        app.set_width(6.0);
        app.set_width(-1.0);
        assert_eq!(app.style().width(), 6.0);
    }

    #[test]
    fn test_clear_keeps_stroke_in_progress() {
        let mut app = SketchApp::default();
        app.handle_pointer(pointer(true, true, true, 0.0, 0.0));
        app.handle_pointer(pointer(true, true, false, 5.0, 5.0));

        app.clear();
        assert!(app.model().is_empty());
        assert!(app.model().is_drawing());

        app.handle_pointer(pointer(false, false, true, 5.0, 5.0));
        assert_eq!(app.model().len(), 1);
    }

    #[test]
    fn test_lost_drag_still_commits() {
        let mut app = SketchApp::default();
        app.handle_pointer(pointer(true, true, false, 3.0, 3.0));
        app.handle_pointer(PointerSample::default());

        assert!(!app.model().is_drawing());
        assert_eq!(app.model().len(), 1);
    }
}
