//! Horizontal swipe tracking between touch start and touch end.

#[cfg(test)]
#[path = "gesture_test.rs"]
mod gesture_test;

/// Which way a finished swipe moves the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moved right; show the previous slide.
    Back,
    /// Finger moved left (or not at all); show the next slide.
    Forward,
}

impl SwipeDirection {
    /// Index delta for this direction.
    #[must_use]
    pub fn step(self) -> isize {
        match self {
            Self::Back => -1,
            Self::Forward => 1,
        }
    }
}

/// Touch gesture in progress, if any.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SwipeState {
    /// No finger down.
    #[default]
    Idle,
    /// A finger went down at `start_x` and was last seen at `last_x`.
    Tracking { start_x: f64, last_x: f64 },
}

impl SwipeState {
    /// Start tracking at screen coordinate `x`.
    pub fn begin(&mut self, x: f64) {
        *self = Self::Tracking { start_x: x, last_x: x };
    }

    /// Record a move; returns the live delta from the start position.
    pub fn update(&mut self, x: f64) -> Option<f64> {
        match self {
            Self::Idle => None,
            Self::Tracking { start_x, last_x } => {
                *last_x = x;
                Some(x - *start_x)
            }
        }
    }

    /// Finish the gesture at `x` and return to idle.
    pub fn finish(&mut self, x: f64) -> Option<SwipeDirection> {
        let Self::Tracking { start_x, .. } = *self else {
            return None;
        };
        *self = Self::Idle;
        Some(if x > start_x { SwipeDirection::Back } else { SwipeDirection::Forward })
    }

    /// Abandon the gesture; returns whether one was in progress.
    pub fn cancel(&mut self) -> bool {
        let was_tracking = self.is_tracking();
        *self = Self::Idle;
        was_tracking
    }

    #[must_use]
    pub fn is_tracking(&self) -> bool {
        matches!(self, Self::Tracking { .. })
    }
}
