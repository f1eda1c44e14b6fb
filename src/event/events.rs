use crate::stroke::StrokeId;

/// Notification that the drawing model changed and should be repainted
#[derive(Debug, Clone, PartialEq)]
pub enum ModelEvent {
    StrokeStarted {
        id: StrokeId,
    },
    PointAppended {
        id: StrokeId,
        point_count: usize,
    },
    StrokeRestyled {
        id: StrokeId,
    },
    StrokeCommitted {
        id: StrokeId,
        point_count: usize,
    },
    Cleared {
        removed: usize,
    },
}
