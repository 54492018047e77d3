use crate::config;

pub fn header_is_scrolled(scroll_y: f64) -> bool {
    scroll_y > config::HEADER_SCROLLED_AT
}

pub fn fab_is_visible(scroll_y: f64) -> bool {
    scroll_y > config::FAB_VISIBLE_AT
}

/// Header height for the `--header-h` variable; an unmounted header
/// reports 0.
pub fn header_height_or_default(measured: Option<f64>) -> f64 {
    match measured {
        Some(h) if h > 0.0 => h,
        _ => config::HEADER_HEIGHT_FALLBACK,
    }
}

pub fn anchor_offset(measured: Option<f64>) -> f64 {
    match measured {
        Some(h) if h > 0.0 => h,
        _ => config::ANCHOR_OFFSET_FALLBACK,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_turns_solid_after_ten_pixels() {
        assert!(!header_is_scrolled(0.0));
        assert!(!header_is_scrolled(10.0));
        assert!(header_is_scrolled(10.5));
    }

    #[test]
    fn fab_waits_for_three_hundred_pixels() {
        assert!(!fab_is_visible(300.0));
        assert!(fab_is_visible(301.0));
    }

    #[test]
    fn missing_header_falls_back() {
        assert_eq!(header_height_or_default(None), 84.0);
        assert_eq!(header_height_or_default(Some(0.0)), 84.0);
        assert_eq!(header_height_or_default(Some(96.0)), 96.0);
        assert_eq!(anchor_offset(None), 72.0);
        assert_eq!(anchor_offset(Some(64.0)), 64.0);
    }
}
