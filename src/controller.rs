//! Carousel behaviour, independent of the browser.
//!
//! [`CarouselCore`] owns every decision the widget makes: which slide is
//! current, when phantom clones come and go, where the pane sits, and when a
//! transition is allowed to settle. Each input returns a list of
//! [`Action`]s; the DOM layer in [`crate::dom`] applies them in order.
//! Keeping the core free of browser bindings lets the whole state machine be tested
//! natively.
//!
//! ## Settling
//!
//! Every transition gets a generation number. The host settles a
//! generation either on `transitionend` or when the fallback timer from
//! [`Action::ScheduleSettle`] fires, whichever comes first. Settling a
//! generation that is no longer pending does nothing, so overlapping input
//! always resolves to the newest transition.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::time::Duration;

use crate::config::CarouselConfig;
use crate::consts::SETTLE_GRACE_MS;
use crate::error::CarouselError;
use crate::gesture::SwipeState;
use crate::track::{EdgeChange, Metrics, Track, Wrap};

/// DOM work requested by the core, applied in order by the host.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Clone the last slide (tagged `cloned`) in front of slide 0.
    InsertLeadingPhantom,
    /// Remove the clone in front of slide 0.
    RemoveLeadingPhantom,
    /// Clone slide 0 (tagged `cloned`) after the last slide.
    AppendTrailingPhantom,
    /// Remove the clone after the last slide.
    RemoveTrailingPhantom,
    /// Set the pane's `left` in pixels.
    SetPaneLeft(f64),
    /// Set the pane's total width in pixels.
    SetPaneWidth(f64),
    /// Animate `transform` changes over the given duration.
    EnableTransition(Duration),
    /// Apply `transform` changes immediately.
    DisableTransition,
    /// Translate the pane horizontally by this many pixels.
    SetOffset(f64),
    /// Mark only this point as active.
    SetActivePoint(usize),
    /// Re-measure slides and feed the result back through [`CarouselCore::resize`].
    Remeasure,
    /// Call [`CarouselCore::settle`] with `generation` after `after` elapses.
    ScheduleSettle { generation: u64, after: Duration },
}

/// Testable carousel state machine.
#[derive(Debug, Clone)]
pub struct CarouselCore {
    pub config: CarouselConfig,
    pub track: Track,
    pub swipe: SwipeState,
    generation: u64,
    pending: Option<u64>,
}

impl CarouselCore {
    /// Core for `slide_count` slides.
    ///
    /// # Errors
    ///
    /// Returns [`CarouselError::NoSlides`] when `slide_count` is zero.
    pub fn new(config: CarouselConfig, slide_count: usize) -> Result<Self, CarouselError> {
        if slide_count == 0 {
            return Err(CarouselError::NoSlides { item_class: config.item_class });
        }
        Ok(Self {
            config,
            track: Track::new(slide_count),
            swipe: SwipeState::default(),
            generation: 0,
            pending: None,
        })
    }

    /// Initial point highlight and phantom setup.
    pub fn initialize(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        if self.config.has_points() {
            actions.push(Action::SetActivePoint(0));
        }
        actions.extend(self.manage_phantoms());
        actions
    }

    // --- Layout ---

    /// Sync phantom edges with the current index, then ask for a re-measure.
    pub fn manage_phantoms(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        for change in self.track.sync_phantoms() {
            match change {
                EdgeChange::InsertLeading => {
                    actions.push(Action::InsertLeadingPhantom);
                    actions.push(Action::SetPaneLeft(self.track.pane_left()));
                }
                EdgeChange::RemoveLeading => {
                    actions.push(Action::RemoveLeadingPhantom);
                    actions.push(Action::SetPaneLeft(0.0));
                }
                EdgeChange::AppendTrailing => actions.push(Action::AppendTrailingPhantom),
                EdgeChange::RemoveTrailing => actions.push(Action::RemoveTrailingPhantom),
            }
        }
        actions.push(Action::Remeasure);
        actions
    }

    /// Re-position the pane for fresh measurements, without animation.
    pub fn resize(&mut self, metrics: Metrics) -> Vec<Action> {
        self.track.set_metrics(metrics);
        let layout = self.track.layout();
        let mut actions = vec![Action::SetOffset(layout.offset)];
        if let Some(left) = layout.left {
            actions.push(Action::SetPaneLeft(left));
        }
        actions.push(Action::SetPaneWidth(layout.width));
        actions
    }

    // --- Navigation ---

    /// Animate to `target`, wrapping one step past either edge.
    pub fn scroll_to(&mut self, target: isize) -> Vec<Action> {
        let wrap = self.track.move_to(target);
        let current = self.track.current();
        if wrap != Wrap::None {
            log::debug!("carousel wrap {wrap:?} to slide {current}");
        }

        let mut actions = Vec::new();
        if self.config.has_points() {
            actions.push(Action::SetActivePoint(current));
        }
        actions.push(Action::EnableTransition(self.config.slide_speed));
        actions.push(Action::SetOffset(self.track.target_offset(wrap)));

        self.generation += 1;
        self.pending = Some(self.generation);
        actions.push(Action::ScheduleSettle {
            generation: self.generation,
            after: self.config.slide_speed + Duration::from_millis(u64::from(SETTLE_GRACE_MS)),
        });
        actions
    }

    /// Advance one slide.
    pub fn next(&mut self) -> Vec<Action> {
        self.scroll_to(self.current_signed() + 1)
    }

    /// Go back one slide.
    pub fn prev(&mut self) -> Vec<Action> {
        self.scroll_to(self.current_signed() - 1)
    }

    /// Jump to a real slide.
    ///
    /// # Errors
    ///
    /// Returns [`CarouselError::IndexOutOfRange`] when `index` is not a slide.
    pub fn go_to(&mut self, index: usize) -> Result<Vec<Action>, CarouselError> {
        let count = self.track.slide_count();
        let out_of_range = CarouselError::IndexOutOfRange { index, count };
        if index >= count {
            return Err(out_of_range);
        }
        let target = isize::try_from(index).map_err(|_| out_of_range)?;
        Ok(self.scroll_to(target))
    }

    // --- Input events ---

    /// The window was resized; re-measure and re-position.
    pub fn on_resize(&mut self) -> Vec<Action> {
        vec![Action::Remeasure]
    }

    /// A navigation point was clicked.
    pub fn on_point_click(&mut self, index: usize) -> Vec<Action> {
        self.go_to(index).unwrap_or_else(|err| {
            log::warn!("carousel point click ignored: {err}");
            Vec::new()
        })
    }

    /// The auto-advance interval fired.
    pub fn on_auto_tick(&mut self) -> Vec<Action> {
        self.next()
    }

    /// A finger went down at screen coordinate `x`.
    ///
    /// A transition still in flight is settled first so the drag starts from
    /// a consistent pane.
    pub fn on_touch_start(&mut self, x: f64) -> Vec<Action> {
        let mut actions = match self.pending {
            Some(generation) => self.settle(generation),
            None => Vec::new(),
        };
        self.swipe.begin(x);
        actions.push(Action::DisableTransition);
        actions
    }

    /// The finger moved; the pane follows it without easing.
    pub fn on_touch_move(&mut self, x: f64) -> Vec<Action> {
        match self.swipe.update(x) {
            Some(delta) => vec![Action::SetOffset(self.track.resting_offset() + delta)],
            None => Vec::new(),
        }
    }

    /// The finger lifted; step one slide in the swipe direction.
    pub fn on_touch_end(&mut self, x: f64) -> Vec<Action> {
        match self.swipe.finish(x) {
            Some(direction) => self.scroll_to(self.current_signed() + direction.step()),
            None => Vec::new(),
        }
    }

    /// The gesture ended without a usable position (`touchcancel`, or a
    /// `touchend` with no changed touches): drop it and snap back.
    pub fn on_touch_cancel(&mut self) -> Vec<Action> {
        if self.swipe.cancel() {
            vec![Action::SetOffset(self.track.resting_offset())]
        } else {
            Vec::new()
        }
    }

    // --- Settling ---

    /// Finish transition `generation`: swap phantoms back to real slides
    /// without animation.
    pub fn settle(&mut self, generation: u64) -> Vec<Action> {
        if self.pending != Some(generation) {
            log::debug!("carousel settle for stale generation {generation} ignored");
            return Vec::new();
        }
        self.pending = None;
        log::debug!("carousel settled at slide {}", self.track.current());

        let mut actions = vec![Action::DisableTransition];
        actions.extend(self.manage_phantoms());
        actions
    }

    /// The pane reported the end of its transform transition.
    pub fn on_transition_end(&mut self) -> Vec<Action> {
        match self.pending {
            Some(generation) => self.settle(generation),
            None => Vec::new(),
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.track.current()
    }

    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.track.slide_count()
    }

    /// Generation of the transition awaiting settlement, if any.
    #[must_use]
    pub fn pending_settle(&self) -> Option<u64> {
        self.pending
    }

    fn current_signed(&self) -> isize {
        isize::try_from(self.track.current()).unwrap_or(isize::MAX)
    }
}
