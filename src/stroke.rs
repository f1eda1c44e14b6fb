use egui::{Pos2, Rect};
use std::fmt;
use std::sync::Arc;

use crate::id_generator;
use crate::style::StrokeStyle;

/// Identifies a stroke for the lifetime of the process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StrokeId(pub(crate) u64);

impl fmt::Display for StrokeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// Immutable stroke, shared once committed
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    id: StrokeId,
    points: Vec<Pos2>,
    style: StrokeStyle,
}

// Committed strokes are shared read-only between the model and whoever renders them
pub type StrokeRef = Arc<Stroke>;

impl Stroke {
    /// Create a stroke from points that were already recorded
    pub fn new(style: StrokeStyle, points: Vec<Pos2>) -> Self {
        Self {
            id: id_generator::next_stroke_id(),
            points,
            style,
        }
    }

    pub fn id(&self) -> StrokeId {
        self.id
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn style(&self) -> StrokeStyle {
        self.style
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Area covered by the stroke, including half its width on every side
    pub fn bounds(&self) -> Rect {
        if self.points.is_empty() {
            return Rect::NOTHING;
        }
        Rect::from_points(&self.points).expand(self.style.width() / 2.0)
    }
}

/// The stroke under the pointer while a drag is in progress.
///
/// Points can only be appended. The style can be swapped for another value
/// until [`ActiveStroke::freeze`] turns it into a [`StrokeRef`].
#[derive(Debug)]
pub struct ActiveStroke {
    stroke: Stroke,
}

impl ActiveStroke {
    pub fn new(style: StrokeStyle) -> Self {
        Self {
            stroke: Stroke::new(style, Vec::new()),
        }
    }

    pub fn add_point(&mut self, point: Pos2) {
        self.stroke.points.push(point);
    }

    pub fn set_style(&mut self, style: StrokeStyle) {
        self.stroke.style = style;
    }

    /// Read-only view used for previews
    pub fn as_stroke(&self) -> &Stroke {
        &self.stroke
    }

    pub fn points(&self) -> &[Pos2] {
        self.stroke.points()
    }

    pub fn style(&self) -> StrokeStyle {
        self.stroke.style
    }

    /// Finish editing; the returned stroke can no longer change
    pub fn freeze(self) -> StrokeRef {
        let mut stroke = self.stroke;
        stroke.points.shrink_to_fit();
        Arc::new(stroke)
    }
}
