//! `wasm_bindgen` surface: the `Carousel` class, the free factory, and the
//! listener/timer plumbing that feeds browser events into [`CarouselCore`].
//!
//! Shared state lives in an `Rc<RefCell<_>>`. Listener closures and the
//! auto-advance interval are stored inside that state and each holds a strong
//! handle to it, so the widget keeps running after the JS wrapper is freed or
//! garbage collected. Only [`Carousel::destroy`] breaks the cycle. The settle
//! timer holds a `Weak`, since it is always re-armed by a live dispatch.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use gloo_timers::callback::{Interval, Timeout};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Event, EventTarget, HtmlElement, TransitionEvent};

use crate::config::{CarouselConfig, RawConfig};
use crate::consts::MAX_TIMER_MS;
use crate::controller::{Action, CarouselCore};
use crate::dom::{self, DomView};
use crate::error::CarouselError;

/// Install the panic hook so Rust panics show up in the browser console.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// Route `log` records to the browser console.
///
/// `level` is one of `trace`, `debug`, `info`, `warn`, `error`.
///
/// # Errors
///
/// Fails when the level is unknown or a logger is already installed.
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging(level: &str) -> Result<(), JsValue> {
    let level: log::Level = level
        .parse()
        .map_err(|_| JsValue::from_str(&format!("unknown log level `{level}`")))?;
    console_log::init_with_level(level).map_err(|err| JsValue::from_str(&err.to_string()))
}

/// Factory with the same signature as the constructor, for non-module pages.
///
/// # Errors
///
/// See [`Carousel::new`].
#[wasm_bindgen(js_name = createCarousel)]
pub fn create_carousel(host: HtmlElement, config: JsValue) -> Result<Carousel, JsValue> {
    Carousel::new(host, config)
}

fn parse_config(config: &JsValue) -> Result<CarouselConfig, CarouselError> {
    let raw = if config.is_undefined() || config.is_null() {
        RawConfig::default()
    } else {
        serde_wasm_bindgen::from_value::<RawConfig>(config.clone())
            .map_err(|err| CarouselError::Config(err.to_string()))?
    };
    raw.validate()
}

// =============================================================
// Shared state
// =============================================================

struct Inner {
    core: CarouselCore,
    view: DomView,
    settle_timer: Option<Timeout>,
    /// Each callback owns a `Shared`; cleared by `destroy`.
    listeners: Vec<Listener>,
    auto: Option<Interval>,
}

type Shared = Rc<RefCell<Inner>>;

impl Inner {
    /// Apply actions in order, expanding re-measures and arming settle timers.
    fn run(
        &mut self,
        actions: Vec<Action>,
        weak: &Weak<RefCell<Inner>>,
    ) -> Result<(), CarouselError> {
        for action in actions {
            match action {
                Action::Remeasure => {
                    let metrics = self.view.measure()?;
                    let layout = self.core.resize(metrics);
                    self.run(layout, weak)?;
                }
                Action::ScheduleSettle { generation, after } => {
                    self.settle_timer = Some(settle_timer(weak.clone(), generation, after));
                }
                other => self.view.apply(&other)?,
            }
        }
        Ok(())
    }
}

/// Feed one input into the core and apply what it returns.
fn dispatch(
    shared: &Shared,
    input: impl FnOnce(&mut CarouselCore) -> Vec<Action>,
) -> Result<(), CarouselError> {
    let Ok(mut inner) = shared.try_borrow_mut() else {
        log::warn!("carousel busy; dropping re-entrant event");
        return Ok(());
    };
    let actions = input(&mut inner.core);
    inner.run(actions, &Rc::downgrade(shared))
}

/// [`dispatch`] for event callbacks, where errors can only be logged.
fn dispatch_logged(shared: &Shared, input: impl FnOnce(&mut CarouselCore) -> Vec<Action>) {
    if let Err(err) = dispatch(shared, input) {
        log::warn!("carousel: {err}");
    }
}

/// Browser timer delay for `duration`, capped at the largest delay a timer
/// honours.
fn millis(duration: Duration) -> u32 {
    u32::try_from(duration.as_millis()).map_or(MAX_TIMER_MS, |ms| ms.min(MAX_TIMER_MS))
}

fn settle_timer(weak: Weak<RefCell<Inner>>, generation: u64, after: Duration) -> Timeout {
    Timeout::new(millis(after), move || {
        if let Some(shared) = weak.upgrade() {
            dispatch_logged(&shared, |core| core.settle(generation));
        }
    })
}

/// Horizontal screen coordinate of the first entry in `changedTouches`.
///
/// Read by property rather than through `TouchEvent`, so any event carrying
/// a `changedTouches` list is accepted, including synthetic ones.
fn touch_x(event: &Event) -> Option<f64> {
    let touches = js_sys::Reflect::get(event, &JsValue::from_str("changedTouches"))
        .unwrap_or(JsValue::UNDEFINED);
    if !touches.is_object() {
        return None;
    }
    let touch = js_sys::Reflect::get_u32(&touches, 0).unwrap_or(JsValue::UNDEFINED);
    if !touch.is_object() {
        return None;
    }
    js_sys::Reflect::get(&touch, &JsValue::from_str("screenX"))
        .unwrap_or(JsValue::UNDEFINED)
        .as_f64()
}

// =============================================================
// Listeners
// =============================================================

/// A registered DOM listener; unregisters itself on drop.
struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn new(
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, CarouselError> {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(|err| CarouselError::dom(&err))?;
        Ok(Self { target: target.clone(), event, callback })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let callback = self.callback.as_ref().unchecked_ref();
        if let Err(err) = self.target.remove_event_listener_with_callback(self.event, callback) {
            log::warn!("carousel: failed to remove {} listener: {err:?}", self.event);
        }
    }
}

// =============================================================
// Carousel
// =============================================================

/// A carousel mounted on a host element.
///
/// The widget stays live until [`Carousel::destroy`] is called. Freeing the
/// JS wrapper (`free()`) or letting it be collected only drops this handle;
/// listeners and auto-advance keep running.
#[wasm_bindgen]
pub struct Carousel {
    inner: Shared,
}

#[wasm_bindgen]
impl Carousel {
    /// Mount a carousel on `host`.
    ///
    /// `config` takes `itemClass` (required), `paneClass`, `slideSpeed`
    /// (seconds), `autoInterval` (seconds, 0 disables) and `pointsClass`.
    ///
    /// # Errors
    ///
    /// Throws when `itemClass` is missing, a duration is invalid, the host has
    /// no matching slides, or the DOM rejects an update.
    #[wasm_bindgen(constructor)]
    pub fn new(host: HtmlElement, config: JsValue) -> Result<Carousel, JsValue> {
        let config = parse_config(&config)?;
        Ok(Self::mount(host, config)?)
    }

    /// Advance one slide.
    pub fn next(&self) {
        dispatch_logged(&self.inner, CarouselCore::next);
    }

    /// Go back one slide.
    pub fn prev(&self) {
        dispatch_logged(&self.inner, CarouselCore::prev);
    }

    /// Jump to slide `index`.
    ///
    /// # Errors
    ///
    /// Throws when `index` is out of range.
    #[wasm_bindgen(js_name = goTo)]
    pub fn go_to(&self, index: usize) -> Result<(), JsValue> {
        let mut result = Ok(());
        dispatch(&self.inner, |core| match core.go_to(index) {
            Ok(actions) => actions,
            Err(err) => {
                result = Err(err);
                Vec::new()
            }
        })?;
        Ok(result?)
    }

    #[wasm_bindgen(js_name = currentIndex)]
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.inner.borrow().core.current_index()
    }

    #[wasm_bindgen(js_name = slideCount)]
    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.inner.borrow().core.slide_count()
    }

    /// Unregister every listener and stop all timers. The DOM stays as is.
    pub fn destroy(&mut self) {
        // Moved out first so the callbacks' handles drop after the borrow ends.
        let (listeners, auto, settle_timer) = match self.inner.try_borrow_mut() {
            Ok(mut inner) => (
                std::mem::take(&mut inner.listeners),
                inner.auto.take(),
                inner.settle_timer.take(),
            ),
            Err(_) => {
                log::warn!("carousel busy; destroy skipped");
                return;
            }
        };
        drop((listeners, auto, settle_timer));
        log::info!("carousel destroyed");
    }
}

impl Carousel {
    /// Mount with an already validated config.
    ///
    /// # Errors
    ///
    /// Returns [`CarouselError::NoSlides`] when the host has no matching
    /// elements, or [`CarouselError::Dom`] when the DOM rejects an update.
    pub fn mount(host: HtmlElement, config: CarouselConfig) -> Result<Self, CarouselError> {
        let slides = dom::collect_by_class(&host, &config.item_class);
        let core = CarouselCore::new(config.clone(), slides.len())?;
        let view = DomView::mount(host, slides, &config)?;

        let inner = Rc::new(RefCell::new(Inner {
            core,
            view,
            settle_timer: None,
            listeners: Vec::new(),
            auto: None,
        }));
        dispatch(&inner, CarouselCore::initialize)?;

        let listeners = register_listeners(&inner)?;
        let auto = config.auto_interval.map(|period| {
            let shared = Rc::clone(&inner);
            Interval::new(millis(period), move || {
                dispatch_logged(&shared, CarouselCore::on_auto_tick);
            })
        });
        {
            let mut state = inner.borrow_mut();
            state.listeners = listeners;
            state.auto = auto;
        }

        log::info!(
            "carousel mounted: {} slides, points {}, auto-advance {:?}",
            inner.borrow().core.slide_count(),
            if config.has_points() { "on" } else { "off" },
            config.auto_interval,
        );
        Ok(Self { inner })
    }
}

fn register_listeners(inner: &Shared) -> Result<Vec<Listener>, CarouselError> {
    let window = web_sys::window().ok_or_else(|| CarouselError::Dom("no global window".into()))?;
    let (host, pane, points) = {
        let state = inner.borrow();
        (
            state.view.host().clone(),
            state.view.pane().clone(),
            state.view.point_items().to_vec(),
        )
    };

    let mut listeners = Vec::with_capacity(6 + points.len());

    let shared = Rc::clone(inner);
    listeners.push(Listener::new(&window, "resize", move |_| {
        dispatch_logged(&shared, CarouselCore::on_resize);
    })?);

    let shared = Rc::clone(inner);
    listeners.push(Listener::new(&host, "touchstart", move |event| {
        if let Some(x) = touch_x(&event) {
            dispatch_logged(&shared, |core| core.on_touch_start(x));
        }
    })?);

    let shared = Rc::clone(inner);
    listeners.push(Listener::new(&host, "touchmove", move |event| {
        if let Some(x) = touch_x(&event) {
            dispatch_logged(&shared, |core| core.on_touch_move(x));
        }
    })?);

    // A touch end without a readable position cannot pick a direction.
    let shared = Rc::clone(inner);
    listeners.push(Listener::new(&host, "touchend", move |event| match touch_x(&event) {
        Some(x) => dispatch_logged(&shared, |core| core.on_touch_end(x)),
        None => dispatch_logged(&shared, CarouselCore::on_touch_cancel),
    })?);

    let shared = Rc::clone(inner);
    listeners.push(Listener::new(&host, "touchcancel", move |_| {
        dispatch_logged(&shared, CarouselCore::on_touch_cancel);
    })?);

    let shared = Rc::clone(inner);
    let pane_target: EventTarget = pane.clone().into();
    listeners.push(Listener::new(&pane, "transitionend", move |event| {
        let from_pane = event.target().is_some_and(|target| target == pane_target);
        let is_transform = event
            .dyn_ref::<TransitionEvent>()
            .is_some_and(|t| t.property_name() == "transform");
        if from_pane && is_transform {
            dispatch_logged(&shared, CarouselCore::on_transition_end);
        }
    })?);

    for (index, point) in points.iter().enumerate() {
        let shared = Rc::clone(inner);
        listeners.push(Listener::new(point, "click", move |_| {
            dispatch_logged(&shared, |core| core.on_point_click(index));
        })?);
    }

    Ok(listeners)
}
