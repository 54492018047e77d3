#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActivationSource {
    Ui,
    Scroll,
    Init,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActivationRequest {
    pub target: isize,
    pub source: ActivationSource,
    pub progressive: Option<bool>,
}

impl ActivationRequest {
    pub fn new(target: isize, source: ActivationSource) -> Self {
        Self { target, source, progressive: None }
    }

    pub fn with_progressive(mut self, progressive: bool) -> Self {
        self.progressive = Some(progressive);
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    /// The request went through (scroll samples on the current step do not).
    pub applied: bool,
    /// The active index moved.
    pub changed: bool,
    pub previous: usize,
    pub current: usize,
}

/// Single source of truth for the active step of the demo.
/// `current` always lies in `0..count`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepState {
    current: usize,
    count: usize,
}

impl StepState {
    /// `None` when there are no steps: the tracker stays inert.
    pub fn new(count: usize) -> Option<Self> {
        if count == 0 {
            return None;
        }
        Some(Self { current: 0, count })
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn last(&self) -> usize {
        self.count - 1
    }

    pub fn clamp_index(&self, n: isize) -> usize {
        if n <= 0 {
            0
        } else {
            (n as usize).min(self.last())
        }
    }

    /// Out-of-range targets are clamped, never rejected. A scroll sample
    /// that lands on the current step is dropped; every other source
    /// reapplies even when the value does not change.
    pub fn set_active(&mut self, request: &ActivationRequest) -> Transition {
        let target = self.clamp_index(request.target);

        if request.source == ActivationSource::Scroll && target == self.current {
            return Transition {
                applied: false,
                changed: false,
                previous: self.current,
                current: self.current,
            };
        }

        let previous = self.current;
        self.current = target;

        Transition {
            applied: true,
            changed: previous != target,
            previous,
            current: target,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_sequence_is_inert() {
        assert!(StepState::new(0).is_none());
        assert_eq!(StepState::new(3).map(|s| s.current()), Some(0));
    }

    #[test]
    fn clamp_stays_in_bounds_and_is_idempotent() {
        let state = StepState::new(4).unwrap();
        for n in [-100, -1, 0, 1, 2, 3, 4, 17, isize::MAX, isize::MIN] {
            let once = state.clamp_index(n);
            assert!(once < state.count());
            assert_eq!(state.clamp_index(once as isize), once);
        }
        assert_eq!(state.clamp_index(-3), 0);
        assert_eq!(state.clamp_index(9), 3);
    }

    #[test]
    fn scroll_sample_on_current_step_is_a_no_op() {
        let mut state = StepState::new(5).unwrap();
        state.set_active(&ActivationRequest::new(2, ActivationSource::Ui));

        let result = state.set_active(&ActivationRequest::new(2, ActivationSource::Scroll));
        assert_eq!(
            result,
            Transition { applied: false, changed: false, previous: 2, current: 2 }
        );
        assert_eq!(state.current(), 2);
    }

    #[test]
    fn ui_and_init_reassert_the_same_step() {
        let mut state = StepState::new(3).unwrap();
        let init = state.set_active(&ActivationRequest::new(0, ActivationSource::Init));
        assert_eq!(init, Transition { applied: true, changed: false, previous: 0, current: 0 });

        let again = state.set_active(&ActivationRequest::new(0, ActivationSource::Ui));
        assert!(again.applied);
        assert!(!again.changed);
        assert_eq!(state.current(), 0);
    }

    #[test]
    fn out_of_range_targets_are_clamped() {
        let mut state = StepState::new(3).unwrap();
        let forward = state.set_active(&ActivationRequest::new(10, ActivationSource::Ui));
        assert_eq!(forward, Transition { applied: true, changed: true, previous: 0, current: 2 });

        let back = state.set_active(&ActivationRequest::new(-5, ActivationSource::Scroll));
        assert_eq!(back, Transition { applied: true, changed: true, previous: 2, current: 0 });
    }

    #[test]
    fn clamped_scroll_target_equal_to_current_is_dropped() {
        let mut state = StepState::new(3).unwrap();
        state.set_active(&ActivationRequest::new(2, ActivationSource::Ui));
        let result = state.set_active(&ActivationRequest::new(8, ActivationSource::Scroll));
        assert!(!result.applied);
        assert!(!result.changed);
    }
}
