use egui::Pos2;
use log::{debug, info};

use crate::error::{DrawingError, DrawingResult};
use crate::event::{EventBus, EventHandler, ModelEvent};
use crate::stroke::{ActiveStroke, Stroke, StrokeRef};
use crate::style::StrokeStyle;

/// Every stroke drawn this session, plus the one being drawn.
///
/// Committed strokes are kept in paint order (earliest first, so later
/// strokes sit on top). There is at most one active stroke; it stays out of
/// the committed list until [`DrawingModel::end_stroke`].
#[derive(Debug, Default)]
pub struct DrawingModel {
    committed: Vec<StrokeRef>,
    active: Option<ActiveStroke>,
    revision: u64,
    events: EventBus,
}

impl DrawingModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler that is told about every mutation
    pub fn subscribe(&self, handler: Box<dyn EventHandler>) {
        self.events.subscribe(handler);
    }

    /// Start a new active stroke with a copy of `style`
    pub fn begin_stroke(&mut self, style: StrokeStyle) -> DrawingResult<()> {
        if self.active.is_some() {
            return Err(DrawingError::invalid_state(
                "begin a stroke",
                "another stroke is active",
            ));
        }

        let stroke = ActiveStroke::new(style);
        let id = stroke.as_stroke().id();
        debug!("Stroke {} started (width {}, color {:?})", id, style.width(), style.color());

        self.active = Some(stroke);
        self.changed(ModelEvent::StrokeStarted { id });
        Ok(())
    }

    /// Append a point to the active stroke
    pub fn append_point(&mut self, point: Pos2) -> DrawingResult<()> {
        let Some(stroke) = self.active.as_mut() else {
            return Err(DrawingError::invalid_state("append a point", "no stroke is active"));
        };

        stroke.add_point(point);
        let event = ModelEvent::PointAppended {
            id: stroke.as_stroke().id(),
            point_count: stroke.points().len(),
        };
        self.changed(event);
        Ok(())
    }

    /// Replace the style of the active stroke
    pub fn set_active_style(&mut self, style: StrokeStyle) -> DrawingResult<()> {
        let Some(stroke) = self.active.as_mut() else {
            return Err(DrawingError::invalid_state(
                "restyle the active stroke",
                "no stroke is active",
            ));
        };

        if stroke.style() == style {
            return Ok(());
        }
        stroke.set_style(style);
        let id = stroke.as_stroke().id();
        self.changed(ModelEvent::StrokeRestyled { id });
        Ok(())
    }

    /// Freeze the active stroke and append it to the committed strokes.
    ///
    /// Does nothing and returns `None` when no stroke is active.
    pub fn end_stroke(&mut self) -> Option<StrokeRef> {
        let stroke = self.active.take()?.freeze();
        debug!("Stroke {} committed with {} points", stroke.id(), stroke.points().len());

        self.committed.push(StrokeRef::clone(&stroke));
        self.changed(ModelEvent::StrokeCommitted {
            id: stroke.id(),
            point_count: stroke.points().len(),
        });
        Some(stroke)
    }

    /// Drop every committed stroke. The active stroke, if any, is kept.
    pub fn clear(&mut self) {
        let removed = std::mem::take(&mut self.committed).len();
        info!("Cleared {} strokes", removed);
        self.changed(ModelEvent::Cleared { removed });
    }

    /// Strokes to paint, bottom to top: committed strokes in the order they
    /// were drawn, then the active stroke.
    pub fn visible_strokes(&self) -> impl Iterator<Item = &Stroke> + '_ {
        self.committed
            .iter()
            .map(|stroke| &**stroke)
            .chain(self.active.as_ref().map(ActiveStroke::as_stroke))
    }

    pub fn committed_strokes(&self) -> &[StrokeRef] {
        &self.committed
    }

    pub fn active_stroke(&self) -> Option<&Stroke> {
        self.active.as_ref().map(ActiveStroke::as_stroke)
    }

    pub fn is_drawing(&self) -> bool {
        self.active.is_some()
    }

    /// Number of committed strokes
    pub fn len(&self) -> usize {
        self.committed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.committed.is_empty()
    }

    /// Incremented on every mutation, for hosts that poll instead of subscribing
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn changed(&mut self, event: ModelEvent) {
        self.revision += 1;
        self.events.emit(event);
    }
}
