use crate::config;

const STAGE_BUFFER: f64 = 12.0;
const EXIT_PAD_MIN: f64 = 420.0;
const EXIT_PAD_MAX: f64 = 1200.0;

const PHONE_TARGET_MIN: f64 = 420.0;
const PHONE_TARGET_MAX: f64 = 640.0;
const PHONE_MAX_WIDTH: f64 = 460.0;
const PHONE_SCALE_MIN: f64 = 0.58;
const PHONE_SCALE_MAX: f64 = 0.92;

pub const PHONE_BASE_WIDTH: f64 = 375.0;
pub const PHONE_BASE_HEIGHT: f64 = 812.0;

pub fn is_compact(viewport_width: f64) -> bool {
    viewport_width < config::WIDE_BREAKPOINT
}

/// Height of the sticky stage plus room for the device shadow.
pub fn stage_height(rect_height: f64) -> f64 {
    rect_height.ceil() + STAGE_BUFFER
}

/// Bottom padding that lets the sticky stage detach cleanly past the last step.
pub fn exit_pad(stage_height: f64) -> f64 {
    (stage_height * 0.9).round().clamp(EXIT_PAD_MIN, EXIT_PAD_MAX)
}

/// Unscaled device size, measured from the rendered mockup when the
/// measurement looks sane. Otherwise each side keeps `fallback`, normally
/// the current `--device-w`/`--device-h` values.
pub fn phone_base_dims(
    measured_width: f64,
    measured_height: f64,
    current_scale: f64,
    fallback: (f64, f64),
) -> (f64, f64) {
    let scale = if current_scale.is_finite() && current_scale > 0.0 {
        current_scale
    } else {
        1.0
    };
    let w = measured_width / scale;
    let h = measured_height / scale;

    let base_w = if w.is_finite() && w > 200.0 { w } else { fallback.0 };
    let base_h = if h.is_finite() && h > 400.0 { h } else { fallback.1 };
    (base_w, base_h)
}

/// Scale for the phone mockup on compact viewports so the steps below it
/// stay visible. `None` leaves the stylesheet value in place.
pub fn phone_scale(
    viewport_width: f64,
    viewport_height: f64,
    stage_width: f64,
    base_width: f64,
    base_height: f64,
) -> Option<f64> {
    if !is_compact(viewport_width) {
        return None;
    }

    let target_height = (viewport_height * 0.58).clamp(PHONE_TARGET_MIN, PHONE_TARGET_MAX);
    let scale_h = target_height / base_height;
    let scale_w = stage_width.min(PHONE_MAX_WIDTH) / base_width;

    Some(scale_h.min(scale_w).min(PHONE_SCALE_MAX).max(PHONE_SCALE_MIN))
}

/// Near the bottom of the section the sticky tabs would overlap the
/// detaching stage, so compact layouts switch them off there.
pub fn is_ending(section_bottom: f64, viewport_height: f64, compact: bool) -> bool {
    if !compact {
        return false;
    }
    let threshold = (viewport_height * 0.9).min(viewport_height - 80.0);
    section_bottom <= threshold
}

/// Ids of the scroll sentinels: one per step plus a tail that keeps the
/// last step active across the exit padding.
pub fn sentinel_steps(step_count: usize) -> Vec<usize> {
    if step_count == 0 {
        return Vec::new();
    }
    let mut ids: Vec<usize> = (0..step_count).collect();
    ids.push(step_count - 1);
    ids
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn stage_height_rounds_up_with_buffer() {
        assert!(close(stage_height(600.2), 613.0));
        assert!(close(stage_height(600.0), 612.0));
    }

    #[test]
    fn exit_pad_is_bounded() {
        assert!(close(exit_pad(300.0), 420.0));
        assert!(close(exit_pad(700.0), 630.0));
        assert!(close(exit_pad(2000.0), 1200.0));
    }

    #[test]
    fn base_dims_fall_back_on_bad_measurements() {
        let defaults = (PHONE_BASE_WIDTH, PHONE_BASE_HEIGHT);
        assert_eq!(phone_base_dims(0.0, 0.0, 1.0, defaults), defaults);
        assert_eq!(phone_base_dims(300.0, 650.0, 0.5, defaults), (600.0, 1300.0));
        assert_eq!(phone_base_dims(390.0, 844.0, f64::NAN, defaults), (390.0, 844.0));
    }

    #[test]
    fn base_dims_keep_previous_css_size_when_measurement_fails() {
        let from_css = (390.0, 844.0);
        assert_eq!(phone_base_dims(0.0, 0.0, 1.0, from_css), from_css);
        // one side measured, the other kept
        assert_eq!(phone_base_dims(410.0, 120.0, 1.0, from_css), (410.0, 844.0));
    }

    #[test]
    fn phone_scale_only_on_compact_viewports() {
        assert_eq!(phone_scale(1280.0, 900.0, 600.0, 375.0, 812.0), None);

        // 1000 * 0.58 = 580 px target height, narrower than the stage allows
        let scale = phone_scale(390.0, 1000.0, 390.0, 375.0, 812.0).unwrap();
        assert!(close(scale, 580.0 / 812.0));
    }

    #[test]
    fn phone_scale_is_clamped() {
        let tiny = phone_scale(320.0, 400.0, 120.0, 375.0, 812.0).unwrap();
        assert!(close(tiny, PHONE_SCALE_MIN));

        let roomy = phone_scale(900.0, 2000.0, 900.0, 300.0, 500.0).unwrap();
        assert!(close(roomy, PHONE_SCALE_MAX));
    }

    #[test]
    fn ending_state_is_compact_only() {
        assert!(!is_ending(100.0, 800.0, false));
        assert!(is_ending(700.0, 800.0, true));
        assert!(!is_ending(760.0, 800.0, true));
    }

    #[test]
    fn one_sentinel_per_step_plus_tail() {
        assert_eq!(sentinel_steps(4), vec![0, 1, 2, 3, 3]);
        assert!(sentinel_steps(0).is_empty());
    }
}
