use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{
    window, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    ScrollToOptions,
};

pub fn inner_height() -> f64 {
    window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

pub fn inner_width() -> f64 {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

pub fn set_css_var(el: &Element, name: &str, value: &str) {
    if let Some(el) = el.dyn_ref::<HtmlElement>() {
        let _ = el.style().set_property(name, value);
    }
}

pub fn remove_css_var(el: &Element, name: &str) {
    if let Some(el) = el.dyn_ref::<HtmlElement>() {
        let _ = el.style().remove_property(name);
    }
}

/// Custom property as seen by the cascade, e.g. `--device-scale` or
/// `--device-w: 375px`.
pub fn computed_css_var(el: &Element, name: &str) -> Option<f64> {
    let raw = window()?
        .get_computed_style(el)
        .ok()??
        .get_property_value(name)
        .ok()?;
    parse_css_number(&raw)
}

/// Leading number of a CSS value with an optional `px` unit. Zero, empty
/// and non-finite values count as unset.
pub fn parse_css_number(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    let value: f64 = raw.strip_suffix("px").unwrap_or(raw).trim_end().parse().ok()?;
    (value.is_finite() && value != 0.0).then_some(value)
}

pub fn root_element() -> Option<Element> {
    window()?.document()?.document_element()
}

pub fn focus(el: &Element) {
    if let Some(el) = el.dyn_ref::<HtmlElement>() {
        let _ = el.focus();
    }
}

pub fn scroll_into_view_centered(el: &Element, behavior: ScrollBehavior) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(behavior);
    options.set_block(ScrollLogicalPosition::Center);
    el.scroll_into_view_with_scroll_into_view_options(&options);
}

pub fn scroll_to_bottom(el: &Element, behavior: ScrollBehavior) {
    let options = ScrollToOptions::new();
    options.set_top(el.scroll_height() as f64);
    options.set_behavior(behavior);
    el.scroll_to_with_scroll_to_options(&options);
}

pub fn scroll_into_view_nearest(el: &Element, behavior: ScrollBehavior) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(behavior);
    options.set_block(ScrollLogicalPosition::Nearest);
    el.scroll_into_view_with_scroll_into_view_options(&options);
}

/// An IntersectionObserver together with the closure it calls back into.
/// Dropping it disconnects the observer.
pub struct Observer {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(web_sys::js_sys::Array, IntersectionObserver)>,
}

impl Observer {
    pub fn new<F>(root_margin: &str, threshold: f64, mut on_entry: F) -> Option<Self>
    where
        F: FnMut(&IntersectionObserverEntry, &IntersectionObserver) + 'static,
    {
        let callback = Closure::wrap(Box::new(
            move |entries: web_sys::js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    on_entry(&entry, &observer);
                }
            },
        )
            as Box<dyn FnMut(web_sys::js_sys::Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_root_margin(root_margin);
        init.set_threshold(&wasm_bindgen::JsValue::from_f64(threshold));

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .ok()?;
        Some(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn observe(&self, target: &Element) {
        self.observer.observe(target);
    }
}

impl Drop for Observer {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_numbers_accept_plain_and_px_values() {
        assert_eq!(parse_css_number(" 0.742"), Some(0.742));
        assert_eq!(parse_css_number("390.00px"), Some(390.0));
        assert_eq!(parse_css_number(""), None);
        assert_eq!(parse_css_number("0"), None);
        assert_eq!(parse_css_number("auto"), None);
    }
}
