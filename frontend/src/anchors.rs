use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent, ScrollBehavior, ScrollToOptions};

use crate::chrome;

pub const SKIP_LINK_CLASS: &str = "skip-link";

/// The fragment selector of an in-page link, `None` for bare `#`/`#!`
/// and anything that leaves the page.
pub fn anchor_target(href: &str) -> Option<&str> {
    if !href.starts_with('#') || href == "#" || href == "#!" {
        return None;
    }
    Some(href)
}

pub fn scroll_target_top(rect_top: f64, scroll_y: f64, header_height: f64) -> f64 {
    rect_top + scroll_y - header_height
}

pub fn scroll_behavior(reduced_motion: bool) -> ScrollBehavior {
    if reduced_motion {
        ScrollBehavior::Auto
    } else {
        ScrollBehavior::Smooth
    }
}

/// Handles a document click. Returns true when it was an in-page anchor
/// that got scrolled to, so the caller can close the drawer.
pub fn handle_anchor_click(event: &MouseEvent, reduced_motion: bool) -> bool {
    let Some(anchor) = event
        .target()
        .and_then(|t| t.dyn_into::<Element>().ok())
        .and_then(|el| el.closest("a[href^=\"#\"]").ok().flatten())
    else {
        return false;
    };
    if anchor.class_list().contains(SKIP_LINK_CLASS) {
        return false;
    }

    let Some(href) = anchor.get_attribute("href") else {
        return false;
    };
    let Some(selector) = anchor_target(&href) else {
        return false;
    };

    let Some(window) = web_sys::window() else {
        return false;
    };
    let Some(document) = window.document() else {
        return false;
    };
    let Some(target) = document.query_selector(selector).ok().flatten() else {
        return false;
    };

    event.prevent_default();

    let header_height = document
        .query_selector(".header")
        .ok()
        .flatten()
        .and_then(|h| h.dyn_into::<web_sys::HtmlElement>().ok())
        .map(|h| h.offset_height() as f64);
    let top = scroll_target_top(
        target.get_bounding_client_rect().top(),
        window.scroll_y().unwrap_or(0.0),
        chrome::anchor_offset(header_height),
    );

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(scroll_behavior(reduced_motion));
    window.scroll_to_with_scroll_to_options(&options);

    if let Ok(history) = window.history() {
        let _ = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(selector));
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_real_fragments_are_followed() {
        assert_eq!(anchor_target("#contatti"), Some("#contatti"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("#!"), None);
        assert_eq!(anchor_target("/privacy"), None);
        assert_eq!(anchor_target("https://wa.me/39"), None);
    }

    #[test]
    fn target_is_offset_by_the_header() {
        assert_eq!(scroll_target_top(250.0, 1000.0, 72.0), 1178.0);
        assert_eq!(scroll_target_top(-40.0, 500.0, 84.0), 376.0);
    }
}
