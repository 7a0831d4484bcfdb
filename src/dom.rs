//! Browser DOM side of the carousel.
//!
//! This is the only module that builds or mutates elements. [`DomView`]
//! owns the generated pane, the optional points container, and the phantom
//! clones, and mirrors each [`Action`] from the core onto them. Measurement
//! happens here too, since natural slide widths only exist in the rendered
//! page.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlCollection, HtmlElement, Node};

use crate::config::CarouselConfig;
use crate::consts::{ACTIVE_CLASS, CLONED_CLASS, POINT_TAG};
use crate::controller::Action;
use crate::error::CarouselError;
use crate::track::Metrics;

/// Copy a live `HtmlCollection` into an ordered, non-live list.
#[must_use]
pub fn collection_to_vec(collection: &HtmlCollection) -> Vec<HtmlElement> {
    let mut out = Vec::with_capacity(collection.length() as usize);
    for n in 0..collection.length() {
        if let Some(element) = collection.item(n)
            && let Ok(element) = element.dyn_into::<HtmlElement>()
        {
            out.push(element);
        }
    }
    out
}

/// Descendants of `root` carrying `class`, in document order.
#[must_use]
pub fn collect_by_class(root: &Element, class: &str) -> Vec<HtmlElement> {
    collection_to_vec(&root.get_elements_by_class_name(class))
}

fn dom_err(err: JsValue) -> CarouselError {
    CarouselError::dom(&err)
}

fn px(value: f64) -> String {
    format!("{value}px")
}

fn set_style(element: &HtmlElement, property: &str, value: &str) -> Result<(), CarouselError> {
    element.style().set_property(property, value).map_err(dom_err)
}

fn create_element(document: &Document, tag: &str) -> Result<HtmlElement, CarouselError> {
    document
        .create_element(tag)
        .map_err(dom_err)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| CarouselError::Dom(format!("<{tag}> is not an HTML element")))
}

/// Elements the carousel generated or adopted inside its host.
#[derive(Debug)]
pub struct DomView {
    host: HtmlElement,
    pane: HtmlElement,
    points: Option<HtmlElement>,
    slides: Vec<HtmlElement>,
    point_items: Vec<HtmlElement>,
    leading: Option<HtmlElement>,
    trailing: Option<HtmlElement>,
    item_class: String,
}

impl DomView {
    /// Build the pane (and points, when enabled) and move `slides` into it.
    ///
    /// # Errors
    ///
    /// Returns [`CarouselError::Dom`] when the host has no owner document or a
    /// DOM call fails.
    pub fn mount(
        host: HtmlElement,
        slides: Vec<HtmlElement>,
        config: &CarouselConfig,
    ) -> Result<Self, CarouselError> {
        let document = host
            .owner_document()
            .ok_or_else(|| CarouselError::Dom("host element has no owner document".into()))?;

        let pane = create_element(&document, "div")?;
        set_style(&pane, "position", "relative")?;
        pane.class_list().add_1(&config.pane_class).map_err(dom_err)?;
        host.append_child(&pane).map_err(dom_err)?;
        set_style(&host, "overflow", "hidden")?;

        let points = match &config.points_class {
            Some(_) => Some(create_element(&document, "div")?),
            None => None,
        };
        let mut point_items = Vec::new();

        for slide in &slides {
            slide.remove();
            pane.append_child(slide).map_err(dom_err)?;
            if let Some(points) = &points {
                let point = create_element(&document, POINT_TAG)?;
                points.append_child(&point).map_err(dom_err)?;
                point_items.push(point);
            }
        }

        if let (Some(points), Some(class)) = (&points, &config.points_class) {
            points.class_list().add_1(class).map_err(dom_err)?;
            host.append_child(points).map_err(dom_err)?;
        }

        Ok(Self {
            host,
            pane,
            points,
            slides,
            point_items,
            leading: None,
            trailing: None,
            item_class: config.item_class.clone(),
        })
    }

    #[must_use]
    pub fn host(&self) -> &HtmlElement {
        &self.host
    }

    #[must_use]
    pub fn pane(&self) -> &HtmlElement {
        &self.pane
    }

    /// Generated point elements, one per slide; empty when dots are off.
    #[must_use]
    pub fn point_items(&self) -> &[HtmlElement] {
        &self.point_items
    }

    /// Size every slide in the pane (phantoms included) to its natural
    /// width, then report host and first-slide widths.
    ///
    /// # Errors
    ///
    /// Returns [`CarouselError::Dom`] when a style update fails.
    pub fn measure(&self) -> Result<Metrics, CarouselError> {
        set_style(&self.pane, "width", "auto")?;
        for element in collect_by_class(&self.pane, &self.item_class) {
            set_style(&element, "width", "auto")?;
            set_style(&element, "float", "none")?;
            set_style(&element, "width", &px(f64::from(element.client_width())))?;
            set_style(&element, "float", "left")?;
        }
        let first_slide_width = self.slides.first().map_or(0, |s| s.client_width());
        Ok(Metrics {
            host_width: f64::from(self.host.client_width()),
            first_slide_width: f64::from(first_slide_width),
        })
    }

    /// Mirror one core action onto the DOM.
    ///
    /// `Remeasure` and `ScheduleSettle` need the shared carousel state and are
    /// handled by the caller; they are no-ops here.
    ///
    /// # Errors
    ///
    /// Returns [`CarouselError::Dom`] when a DOM call fails.
    pub fn apply(&mut self, action: &Action) -> Result<(), CarouselError> {
        match action {
            Action::InsertLeadingPhantom => {
                if let (Some(last), Some(first)) = (self.slides.last(), self.slides.first()) {
                    let clone = clone_slide(last)?;
                    let anchor: &Node = first;
                    self.pane.insert_before(&clone, Some(anchor)).map_err(dom_err)?;
                    self.leading = Some(clone);
                }
            }
            Action::RemoveLeadingPhantom => {
                if let Some(clone) = self.leading.take() {
                    clone.remove();
                }
            }
            Action::AppendTrailingPhantom => {
                if let Some(first) = self.slides.first() {
                    let clone = clone_slide(first)?;
                    self.pane.append_child(&clone).map_err(dom_err)?;
                    self.trailing = Some(clone);
                }
            }
            Action::RemoveTrailingPhantom => {
                if let Some(clone) = self.trailing.take() {
                    clone.remove();
                }
            }
            Action::SetPaneLeft(left) => set_style(&self.pane, "left", &px(*left))?,
            Action::SetPaneWidth(width) => set_style(&self.pane, "width", &px(*width))?,
            Action::EnableTransition(speed) => {
                let transition = format!("transform {}s", speed.as_secs_f64());
                set_style(&self.pane, "transition", &transition)?;
            }
            Action::DisableTransition => set_style(&self.pane, "transition", "none")?,
            Action::SetOffset(offset) => {
                set_style(&self.pane, "transform", &format!("translate({offset}px)"))?;
            }
            Action::SetActivePoint(index) => self.set_active_point(*index)?,
            Action::Remeasure | Action::ScheduleSettle { .. } => {}
        }
        Ok(())
    }

    fn set_active_point(&self, index: usize) -> Result<(), CarouselError> {
        for point in &self.point_items {
            point.class_list().remove_1(ACTIVE_CLASS).map_err(dom_err)?;
        }
        if let Some(point) = self.point_items.get(index) {
            point.class_list().add_1(ACTIVE_CLASS).map_err(dom_err)?;
        }
        Ok(())
    }

    /// Whether dot navigation was built.
    #[must_use]
    pub fn has_points(&self) -> bool {
        self.points.is_some()
    }
}

fn clone_slide(slide: &HtmlElement) -> Result<HtmlElement, CarouselError> {
    let clone = slide
        .clone_node_with_deep(true)
        .map_err(dom_err)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| CarouselError::Dom("cloned slide is not an HTML element".into()))?;
    clone.class_list().add_1(CLONED_CLASS).map_err(dom_err)?;
    Ok(clone)
}
