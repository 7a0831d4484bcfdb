//! Error type shared by configuration, construction, and navigation.

use wasm_bindgen::JsValue;

/// Errors produced while building or driving a carousel.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CarouselError {
    /// The required `itemClass` option is absent or empty.
    #[error("option itemClass is not specified")]
    MissingItemClass,

    /// A duration option is negative, not finite, or too long for a browser timer.
    #[error("option {field} is not a usable duration in seconds (got {value})")]
    InvalidDuration { field: &'static str, value: f64 },

    /// The host element has no descendant carrying the item class.
    #[error("no elements with class `{item_class}` found in the host element")]
    NoSlides { item_class: String },

    /// A programmatic jump named a slide that does not exist.
    #[error("slide index {index} is out of range for {count} slides")]
    IndexOutOfRange { index: usize, count: usize },

    /// The JS config object could not be read.
    #[error("invalid config object: {0}")]
    Config(String),

    /// A DOM call failed.
    #[error("DOM operation failed: {0}")]
    Dom(String),
}

impl CarouselError {
    /// Wrap a thrown `JsValue` from a `web_sys` call.
    #[must_use]
    pub fn dom(err: &JsValue) -> Self {
        Self::Dom(err.as_string().unwrap_or_else(|| format!("{err:?}")))
    }
}

impl From<CarouselError> for JsValue {
    fn from(err: CarouselError) -> Self {
        js_sys::Error::new(&format!("Native Elements Carousel: {err}")).into()
    }
}
