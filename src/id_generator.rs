use std::sync::atomic::{AtomicU64, Ordering};

use crate::stroke::StrokeId;

// One counter for the whole process, so ids stay unique across canvases
static NEXT_STROKE_ID: AtomicU64 = AtomicU64::new(1);

pub(crate) fn next_stroke_id() -> StrokeId {
    StrokeId(NEXT_STROKE_ID.fetch_add(1, Ordering::Relaxed))
}
