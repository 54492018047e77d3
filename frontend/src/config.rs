// Thresholds are CSS pixels unless noted.
pub const HEADER_SCROLLED_AT: f64 = 10.0;
pub const FAB_VISIBLE_AT: f64 = 300.0;
pub const HEADER_HEIGHT_FALLBACK: f64 = 84.0;
pub const ANCHOR_OFFSET_FALLBACK: f64 = 72.0;

pub const WIDE_BREAKPOINT: f64 = 980.0;

// Fractions of the viewport height.
pub const FOCUS_LINE_COMPACT: f64 = 0.42;
pub const FOCUS_LINE_WIDE: f64 = 0.45;

// 0-indexed: the calendar toast shows from the third step on.
pub const TOAST_GATE_STEP: usize = 2;

pub const NAV_FOCUS_DELAY_MS: u32 = 100;
pub const STATUS_SCROLL_DELAY_MS: u32 = 100;

pub const SECTION_ROOT_MARGIN: &str = "-20% 0px -60% 0px";
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -100px 0px";
pub const REVEAL_THRESHOLD: f64 = 0.1;

pub const FORM_PLACEHOLDER_ID: &str = "YOUR_FORM_ID";

#[cfg(debug_assertions)]
pub fn get_form_endpoint() -> &'static str {
    match option_env!("SYNKRIS_FORM_ENDPOINT") {
        Some(url) => url,
        None => "http://localhost:3001/api/contact",
    }
}

#[cfg(not(debug_assertions))]
pub fn get_form_endpoint() -> &'static str {
    match option_env!("SYNKRIS_FORM_ENDPOINT") {
        Some(url) => url,
        None => "https://formspree.io/f/YOUR_FORM_ID",
    }
}

pub const WHATSAPP_URL: &str = "https://wa.me/390000000000?text=Ciao%20Synkris";
