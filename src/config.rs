//! Carousel configuration as received from JavaScript, plus validation.
//!
//! [`RawConfig`] mirrors the JS object field for field; every field is
//! optional so a missing `itemClass` can be reported with a proper
//! [`CarouselError`] instead of a serde message. [`RawConfig::validate`]
//! applies defaults and yields the [`CarouselConfig`] the controller uses.
//!
//! Falsy numbers fall back to defaults: `slideSpeed: 0` means the default
//! speed, `autoInterval: 0` means no auto-advance.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use serde::Deserialize;

use crate::consts::{DEFAULT_PANE_CLASS, DEFAULT_SLIDE_SPEED_SECS, MAX_TIMER_MS, SETTLE_GRACE_MS};
use crate::error::CarouselError;

/// Unvalidated options, deserialized from the JS config object.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawConfig {
    pub item_class: Option<String>,
    pub pane_class: Option<String>,
    pub slide_speed: Option<f64>,
    pub auto_interval: Option<f64>,
    pub points_class: Option<String>,
}

/// Validated carousel options with defaults applied.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselConfig {
    /// Class identifying slide elements inside the host.
    pub item_class: String,
    /// Class put on the generated pane.
    pub pane_class: String,
    /// Duration of one slide transition.
    pub slide_speed: Duration,
    /// Auto-advance period; `None` disables the timer.
    pub auto_interval: Option<Duration>,
    /// Class for the points container; `None` disables dot navigation.
    pub points_class: Option<String>,
}

impl CarouselConfig {
    /// Config with the given item class and every other option defaulted.
    #[must_use]
    pub fn new(item_class: impl Into<String>) -> Self {
        Self {
            item_class: item_class.into(),
            pane_class: DEFAULT_PANE_CLASS.to_owned(),
            slide_speed: Duration::from_secs_f64(DEFAULT_SLIDE_SPEED_SECS),
            auto_interval: None,
            points_class: None,
        }
    }

    /// Whether dot navigation is enabled.
    #[must_use]
    pub fn has_points(&self) -> bool {
        self.points_class.is_some()
    }
}

impl RawConfig {
    /// Apply defaults and check the options.
    ///
    /// # Errors
    ///
    /// Returns [`CarouselError::MissingItemClass`] when `itemClass` is absent
    /// or empty, and [`CarouselError::InvalidDuration`] when a duration is
    /// negative, not finite, or longer than a browser timer can wait.
    pub fn validate(self) -> Result<CarouselConfig, CarouselError> {
        let item_class =
            non_empty(self.item_class).ok_or(CarouselError::MissingItemClass)?;
        let pane_class =
            non_empty(self.pane_class).unwrap_or_else(|| DEFAULT_PANE_CLASS.to_owned());
        let slide_speed = seconds("slideSpeed", self.slide_speed)?
            .unwrap_or_else(|| Duration::from_secs_f64(DEFAULT_SLIDE_SPEED_SECS));
        let auto_interval = seconds("autoInterval", self.auto_interval)?;

        Ok(CarouselConfig {
            item_class,
            pane_class,
            slide_speed,
            auto_interval,
            points_class: non_empty(self.points_class),
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// Longest accepted duration; the settle grace is added on top of
/// `slideSpeed`, so it is reserved here for both fields.
fn max_duration() -> Duration {
    Duration::from_millis(u64::from(MAX_TIMER_MS - SETTLE_GRACE_MS))
}

/// Parse an optional seconds value; zero and absent both map to `None`.
fn seconds(
    field: &'static str,
    value: Option<f64>,
) -> Result<Option<Duration>, CarouselError> {
    let Some(v) = value else {
        return Ok(None);
    };
    let invalid = CarouselError::InvalidDuration { field, value: v };
    if v < 0.0 {
        return Err(invalid);
    }
    if v <= 0.0 {
        return Ok(None);
    }
    match Duration::try_from_secs_f64(v) {
        Ok(duration) if duration <= max_duration() => Ok(Some(duration)),
        _ => Err(invalid),
    }
}
