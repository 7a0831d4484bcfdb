//! Touch-enabled slide carousel for the browser.
//!
//! This crate is compiled to WebAssembly. Given a host element whose
//! descendants carry an item class, it moves those slides into a sliding
//! pane, animates between them with CSS transforms, wraps around seamlessly
//! at both ends using phantom clones of the edge slides, and optionally adds
//! navigation dots and an auto-advance timer.
//!
//! ```javascript
//! import init, { Carousel, initLogging } from './carousel.js';
//!
//! await init();
//! initLogging('info');
//! const carousel = new Carousel(document.getElementById('gallery'), {
//!     itemClass: 'slide',
//!     pointsClass: 'dots',
//!     autoInterval: 5,
//! });
//! ```
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | Browser-free state machine [`controller::CarouselCore`] and its [`controller::Action`]s |
//! | [`track`] | Virtual window: current index, wrap kind, phantom edges, pane geometry |
//! | [`gesture`] | Touch swipe tracking |
//! | [`config`] | JS options and their validation |
//! | [`dom`] | Element building, measuring, and action application |
//! | [`web`] | `wasm_bindgen` exports: `Carousel`, `createCarousel`, `initLogging` |
//! | [`error`] | [`error::CarouselError`] |
//! | [`consts`] | Class names and timing defaults |

pub mod config;
pub mod consts;
pub mod controller;
pub mod dom;
pub mod error;
pub mod gesture;
pub mod track;
pub mod web;

pub use config::{CarouselConfig, RawConfig};
pub use controller::{Action, CarouselCore};
pub use error::CarouselError;
pub use web::{Carousel, create_carousel};
