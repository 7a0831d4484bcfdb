//! Shared constants for the carousel crate.

// ── Class names ─────────────────────────────────────────────────

/// Pane class used when the config does not name one.
pub const DEFAULT_PANE_CLASS: &str = "purePane";

/// Marker class added to phantom clones of edge slides.
pub const CLONED_CLASS: &str = "cloned";

/// Marker class on the point that matches the current slide.
pub const ACTIVE_CLASS: &str = "active";

/// Tag name of the generated point elements.
pub const POINT_TAG: &str = "b";

// ── Timing ──────────────────────────────────────────────────────

/// Slide transition duration in seconds when the config omits it.
pub const DEFAULT_SLIDE_SPEED_SECS: f64 = 0.3;

/// Extra time the fallback settle timer waits past the transition duration.
///
/// `transitionend` normally settles first; the timer only covers transitions
/// that never fire (e.g. the offset did not change).
pub const SETTLE_GRACE_MS: u32 = 50;

/// Longest delay browsers honour for `setTimeout`/`setInterval`, in ms.
///
/// Larger delays overflow a signed 32-bit integer and fire immediately.
pub const MAX_TIMER_MS: u32 = 2_147_483_647;
