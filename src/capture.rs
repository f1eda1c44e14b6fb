use egui::Pos2;
use log::{debug, warn};

use crate::error::{DrawingError, DrawingResult};
use crate::model::DrawingModel;
use crate::stroke::StrokeRef;
use crate::style::{StrokeStyle, StyleState};

/// One step of a single-pointer drag, in canvas-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragEvent {
    Start(Pos2),
    Change(Pos2),
    End,
    /// The host lost the gesture without a proper end
    Abandon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaptureState {
    #[default]
    Idle,
    Dragging,
}

impl CaptureState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Dragging => "dragging",
        }
    }
}

/// Turns a drag gesture stream into strokes on a [`DrawingModel`].
///
/// The first point is recorded at drag start, so a tap without movement
/// still commits a one-point stroke (a dot). While dragging, style changes
/// are applied to the stroke being drawn; while idle they only affect the
/// next stroke.
#[derive(Debug)]
pub struct StrokeCapture {
    state: CaptureState,
    next_style: StrokeStyle,
}

impl Default for StrokeCapture {
    fn default() -> Self {
        Self::new(&StyleState::default())
    }
}

impl StrokeCapture {
    pub fn new(style: &StyleState) -> Self {
        Self {
            state: CaptureState::Idle,
            next_style: style.current(),
        }
    }

    pub fn state(&self) -> CaptureState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.state == CaptureState::Dragging
    }

    /// Style the next stroke will start with, as of the last style change
    pub fn next_style(&self) -> StrokeStyle {
        self.next_style
    }

    /// Feed one drag event. Returns the stroke committed by an `End` or `Abandon`.
    pub fn handle(
        &mut self,
        model: &mut DrawingModel,
        event: DragEvent,
        style: &StyleState,
    ) -> DrawingResult<Option<StrokeRef>> {
        match event {
            DragEvent::Start(point) => self.on_drag_start(model, point, style).map(|()| None),
            DragEvent::Change(point) => self.on_drag_change(model, point).map(|()| None),
            DragEvent::End => Ok(self.on_drag_end(model, style)),
            DragEvent::Abandon => Ok(self.abandon(model, style)),
        }
    }

    pub fn on_drag_start(
        &mut self,
        model: &mut DrawingModel,
        point: Pos2,
        style: &StyleState,
    ) -> DrawingResult<()> {
        if self.state == CaptureState::Dragging {
            return Err(DrawingError::invalid_state("start a drag", self.state.name()));
        }

        self.next_style = style.current();
        model.begin_stroke(self.next_style)?;
        model.append_point(point)?;
        self.state = CaptureState::Dragging;
        Ok(())
    }

    pub fn on_drag_change(&mut self, model: &mut DrawingModel, point: Pos2) -> DrawingResult<()> {
        if self.state != CaptureState::Dragging {
            return Err(DrawingError::invalid_state("continue a drag", self.state.name()));
        }
        model.append_point(point)
    }

    /// Commit the active stroke with the style current at this instant.
    /// Ending while idle does nothing.
    pub fn on_drag_end(
        &mut self,
        model: &mut DrawingModel,
        style: &StyleState,
    ) -> Option<StrokeRef> {
        if self.state != CaptureState::Dragging {
            return None;
        }

        self.state = CaptureState::Idle;
        self.next_style = style.current();
        if let Err(err) = model.set_active_style(self.next_style) {
            warn!("Could not apply the final style: {err}");
        }
        let committed = model.end_stroke();
        if committed.is_none() {
            warn!("Drag ended but the model had no active stroke");
        }
        committed
    }

    /// The host lost the gesture (pointer left, window lost focus, ...).
    /// Treated as an ordinary end in the same frame.
    pub fn abandon(
        &mut self,
        model: &mut DrawingModel,
        style: &StyleState,
    ) -> Option<StrokeRef> {
        if self.is_dragging() {
            debug!("Drag abandoned by host, committing stroke");
        }
        self.on_drag_end(model, style)
    }

    /// Call after the user changed the color or width control
    pub fn on_style_changed(
        &mut self,
        model: &mut DrawingModel,
        style: &StyleState,
    ) -> DrawingResult<()> {
        self.next_style = style.current();
        match self.state {
            CaptureState::Dragging => model.set_active_style(self.next_style),
            CaptureState::Idle => Ok(()),
        }
    }
}
