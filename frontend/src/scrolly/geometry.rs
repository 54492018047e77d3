use crate::config;

/// Viewport-relative vertical extent of a step control or sentinel.
/// Re-read from layout on every sample, never cached across frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CandidateRegion {
    pub id: usize,
    pub top: f64,
    pub bottom: f64,
}

impl CandidateRegion {
    pub fn new(id: usize, top: f64, bottom: f64) -> Self {
        Self { id, top, bottom }
    }

    pub fn center(&self) -> f64 {
        self.top + (self.bottom - self.top) / 2.0
    }

    fn in_viewport(&self, viewport_height: f64) -> bool {
        !(self.bottom < 0.0 || self.top > viewport_height)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusLine {
    Compact,
    Wide,
}

impl FocusLine {
    pub fn for_width(viewport_width: f64) -> Self {
        if viewport_width < config::WIDE_BREAKPOINT {
            FocusLine::Compact
        } else {
            FocusLine::Wide
        }
    }

    pub fn fraction(self) -> f64 {
        match self {
            FocusLine::Compact => config::FOCUS_LINE_COMPACT,
            FocusLine::Wide => config::FOCUS_LINE_WIDE,
        }
    }

    pub fn focus_y(self, viewport_height: f64) -> f64 {
        viewport_height * self.fraction()
    }
}

/// Returns the id of the visible candidate whose center sits closest to
/// `focus_y`. The first candidate wins a tie. With nothing visible the
/// current step is kept.
pub fn pick_nearest(
    candidates: &[CandidateRegion],
    focus_y: f64,
    viewport_height: f64,
    current: usize,
) -> usize {
    let mut best = current;
    let mut best_dist = f64::INFINITY;

    for region in candidates {
        if !region.in_viewport(viewport_height) {
            continue;
        }
        let dist = (region.center() - focus_y).abs();
        if dist < best_dist {
            best_dist = dist;
            best = region.id;
        }
    }

    best
}
