//! Virtual window over the slide strip.
//!
//! The pane holds the `N` real slides in order plus up to two phantom edges:
//! a clone of the last slide before slide 0 and a clone of slide 0 after the
//! last slide. `Track` keeps the logical side of that arrangement (current
//! index, which phantoms exist, the pane's left shift, measured widths) so
//! the DOM layer only has to mirror what it reports.
//!
//! Offsets are horizontal translations of the pane in CSS pixels; showing
//! slide `i` at rest means translating by `-i * host_width`.

#[cfg(test)]
#[path = "track_test.rs"]
mod track_test;

/// How a requested index was brought back into range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Wrap {
    /// The target was already a real index.
    #[default]
    None,
    /// The target was before slide 0; animate into the leading phantom.
    Prepend,
    /// The target was past the last slide; animate into the trailing phantom.
    Append,
}

/// Phantom clone presence at each edge of the pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Phantoms {
    /// Clone of the last slide sits before slide 0.
    pub leading: bool,
    /// Clone of slide 0 sits after the last slide.
    pub trailing: bool,
}

/// A change to the phantom edges the DOM has to mirror.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeChange {
    InsertLeading,
    RemoveLeading,
    AppendTrailing,
    RemoveTrailing,
}

/// Measured sizes, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Metrics {
    /// Visible width of the host element.
    pub host_width: f64,
    /// Rendered width of the first real slide.
    pub first_slide_width: f64,
}

/// Resting geometry of the pane for the current index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaneLayout {
    /// Translation that shows the current slide.
    pub offset: f64,
    /// Left shift hiding the leading phantom, when one exists.
    pub left: Option<f64>,
    /// Total pane width; phantoms overflow past it.
    pub width: f64,
}

#[derive(Debug, Clone)]
pub struct Track {
    slide_count: usize,
    current: usize,
    phantoms: Phantoms,
    pane_left: f64,
    metrics: Metrics,
}

impl Track {
    /// A track over `slide_count` real slides, positioned at slide 0.
    #[must_use]
    pub fn new(slide_count: usize) -> Self {
        Self {
            slide_count,
            current: 0,
            phantoms: Phantoms::default(),
            pane_left: 0.0,
            metrics: Metrics::default(),
        }
    }

    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn phantoms(&self) -> Phantoms {
        self.phantoms
    }

    #[must_use]
    pub fn pane_left(&self) -> f64 {
        self.pane_left
    }

    #[must_use]
    pub fn metrics(&self) -> Metrics {
        self.metrics
    }

    pub fn set_metrics(&mut self, metrics: Metrics) {
        self.metrics = metrics;
    }

    fn last_index(&self) -> usize {
        self.slide_count.saturating_sub(1)
    }

    /// Move to `target`, wrapping a step past either edge.
    ///
    /// Anything below zero lands on the last slide, anything at or past the
    /// slide count lands on slide 0.
    pub fn move_to(&mut self, target: isize) -> Wrap {
        let (index, wrap) = match usize::try_from(target) {
            Err(_) => (self.last_index(), Wrap::Prepend),
            Ok(t) if t >= self.slide_count => (0, Wrap::Append),
            Ok(t) => (t, Wrap::None),
        };
        self.current = index;
        wrap
    }

    /// Translation that shows the current slide at rest.
    #[must_use]
    pub fn resting_offset(&self) -> f64 {
        -(index_f64(self.current) * self.metrics.host_width)
    }

    /// Translation the transition animates towards.
    ///
    /// A prepend wrap undoes the pane's left shift to reveal the leading
    /// phantom; an append wrap slides one full slide past the last real one.
    #[must_use]
    pub fn target_offset(&self, wrap: Wrap) -> f64 {
        match wrap {
            Wrap::Prepend => -self.pane_left,
            Wrap::Append => -(index_f64(self.slide_count) * self.metrics.host_width),
            Wrap::None => self.resting_offset(),
        }
    }

    /// Bring the phantom edges in line with the current index.
    ///
    /// Slide 0 gets a leading phantom (and the pane shifts left by one slide
    /// to keep it off-screen); the last slide gets a trailing phantom. Any
    /// other index drops the matching phantom. With a single slide both
    /// edges apply at once.
    pub fn sync_phantoms(&mut self) -> Vec<EdgeChange> {
        let mut changes = Vec::new();

        if self.current == 0 {
            if !self.phantoms.leading {
                self.phantoms.leading = true;
                changes.push(EdgeChange::InsertLeading);
            }
            self.pane_left = -self.metrics.first_slide_width;
        } else if self.phantoms.leading {
            self.phantoms.leading = false;
            self.pane_left = 0.0;
            changes.push(EdgeChange::RemoveLeading);
        }

        if self.current == self.last_index() {
            if !self.phantoms.trailing {
                self.phantoms.trailing = true;
                changes.push(EdgeChange::AppendTrailing);
            }
        } else if self.phantoms.trailing {
            self.phantoms.trailing = false;
            changes.push(EdgeChange::RemoveTrailing);
        }

        changes
    }

    /// Resting pane geometry for the current measurements.
    pub fn layout(&mut self) -> PaneLayout {
        let left = if self.phantoms.leading {
            self.pane_left = -self.metrics.first_slide_width;
            Some(self.pane_left)
        } else {
            None
        };
        PaneLayout {
            offset: self.resting_offset(),
            left,
            width: self.metrics.host_width * index_f64(self.slide_count),
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn index_f64(index: usize) -> f64 {
    index as f64
}
