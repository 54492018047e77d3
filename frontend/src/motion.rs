use web_sys::window;

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Motion preference, read once when the app mounts and shared through a
/// `ContextProvider` for the rest of the page's life.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Motion {
    pub reduced: bool,
}

impl Motion {
    pub fn detect() -> Self {
        let reduced = window()
            .and_then(|w| w.match_media(REDUCED_MOTION_QUERY).ok().flatten())
            .map(|mql| mql.matches())
            .unwrap_or(false);
        Self { reduced }
    }

    pub fn allows_animation(&self) -> bool {
        !self.reduced
    }
}

/// True when the browser can run IntersectionObserver-driven effects.
pub fn supports_intersection_observer() -> bool {
    window()
        .map(|w| window_has(&w, "IntersectionObserver"))
        .unwrap_or(false)
}

fn window_has(window: &web_sys::Window, name: &str) -> bool {
    use wasm_bindgen::JsValue;
    web_sys::js_sys::Reflect::has(window.as_ref(), &JsValue::from_str(name)).unwrap_or(false)
}
