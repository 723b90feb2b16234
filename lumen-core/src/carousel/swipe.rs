//! Horizontal swipe detection

/// Direction the content was dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Dragged towards the left edge; advances the carousel.
    Left,
    /// Dragged towards the right edge; retreats the carousel.
    Right,
}

/// Classify a drag from `start_x` to `end_x`. Travel must strictly exceed
/// `threshold` to count.
pub fn classify_swipe(
    start_x: f32,
    end_x: f32,
    threshold: f32,
) -> Option<SwipeDirection> {
    let travel = start_x - end_x;
    if travel.is_nan() || travel.abs() <= threshold {
        return None;
    }
    if travel > 0.0 {
        Some(SwipeDirection::Left)
    } else {
        Some(SwipeDirection::Right)
    }
}

/// Follows one pointer drag.
///
/// Hosts that report press/release without coordinates feed pointer moves
/// through [`SwipeTracker::moved`]; the last known position is used as the
/// press and release point.
#[derive(Debug, Clone, Default)]
pub struct SwipeTracker {
    last_x: Option<f32>,
    start_x: Option<f32>,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn moved(&mut self, x: f32) {
        self.last_x = Some(x);
    }

    /// Pointer went down. Uses `x` when given, else the last move.
    pub fn press(&mut self, x: Option<f32>) {
        if let Some(x) = x {
            self.last_x = Some(x);
        }
        self.start_x = self.last_x;
    }

    /// Pointer went up. Returns `(start_x, end_x)` for a completed drag.
    pub fn release(&mut self, x: Option<f32>) -> Option<(f32, f32)> {
        if let Some(x) = x {
            self.last_x = Some(x);
        }
        let start = self.start_x.take()?;
        let end = self.last_x?;
        Some((start, end))
    }

    /// Pointer left the surface mid-drag.
    pub fn cancel(&mut self) {
        self.start_x = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.start_x.is_some()
    }
}
