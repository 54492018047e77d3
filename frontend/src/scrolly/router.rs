use log::debug;

use crate::scrolly::geometry::{pick_nearest, CandidateRegion};
use crate::scrolly::projection::{panel_effect, PanelEffect, Projection, Projector};
use crate::scrolly::state::{ActivationRequest, ActivationSource, StepState, Transition};

/// Side effects the binding layer has to carry out after a dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    ScrollRegionIntoView(usize),
    ScrollPanelToBottom,
    FocusTab(usize),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dispatch {
    pub transition: Transition,
    pub projection: Projection,
    pub effects: Vec<Effect>,
}

/// Merges clicks, keyboard, prev/next controls and scroll sampling into
/// the single `StepState::set_active` call.
pub struct ActivationRouter {
    state: StepState,
    projector: Projector,
    reduced_motion: bool,
    sample_pending: bool,
}

impl ActivationRouter {
    pub fn new(count: usize, reduced_motion: bool, projector: Projector) -> Option<Self> {
        let state = StepState::new(count)?;
        Some(Self {
            state,
            projector,
            reduced_motion,
            sample_pending: false,
        })
    }

    pub fn current(&self) -> usize {
        self.state.current()
    }

    pub fn count(&self) -> usize {
        self.state.count()
    }

    /// Messages reveal step by step and scroll drives the active step;
    /// reduced motion turns both off together.
    pub fn progressive(&self) -> bool {
        !self.reduced_motion
    }

    pub fn init(&mut self) -> Option<Dispatch> {
        let request =
            ActivationRequest::new(0, ActivationSource::Init).with_progressive(self.progressive());
        let mut dispatch = self.apply(&request)?;
        if self.reduced_motion {
            dispatch.effects.push(Effect::ScrollPanelToBottom);
        }
        Some(dispatch)
    }

    /// Click (or Enter/Space) on a step control. Always drives the viewport
    /// to the matching region.
    pub fn activate(&mut self, index: usize) -> Option<Dispatch> {
        let target = isize::try_from(index).unwrap_or(isize::MAX);
        let mut dispatch = self.apply(&ActivationRequest::new(target, ActivationSource::Ui))?;
        dispatch
            .effects
            .push(Effect::ScrollRegionIntoView(dispatch.transition.current));
        Some(dispatch)
    }

    pub fn step(&mut self, delta: isize) -> Option<Dispatch> {
        let current = isize::try_from(self.current()).unwrap_or(isize::MAX);
        let target = self.state.clamp_index(current.saturating_add(delta));
        self.activate(target)
    }

    /// Arrow keys, Home and End move focus between step controls without
    /// activating anything.
    pub fn roving_key(&self, key: &str, focused: usize) -> Option<Effect> {
        let last = self.state.last();
        let focused = focused.min(last);
        let next = match key {
            "ArrowRight" | "ArrowDown" => (focused + 1).min(last),
            "ArrowLeft" | "ArrowUp" => focused.saturating_sub(1),
            "Home" => 0,
            "End" => last,
            _ => return None,
        };
        Some(Effect::FocusTab(next))
    }

    pub fn commit_key(&mut self, key: &str, index: usize) -> Option<Dispatch> {
        match key {
            "Enter" | " " => self.activate(index),
            _ => None,
        }
    }

    /// Returns true when the caller has to schedule a frame callback.
    /// Requests made while one is pending collapse into it.
    pub fn request_sample(&mut self) -> bool {
        if !self.progressive() || self.sample_pending {
            return false;
        }
        self.sample_pending = true;
        true
    }

    pub fn run_sample(
        &mut self,
        section_visible: bool,
        candidates: &[CandidateRegion],
        focus_y: f64,
        viewport_height: f64,
    ) -> Option<Dispatch> {
        self.sample_pending = false;
        if !self.progressive() || !section_visible {
            return None;
        }

        let nearest = pick_nearest(candidates, focus_y, viewport_height, self.current());
        let target = self
            .state
            .clamp_index(isize::try_from(nearest).unwrap_or(isize::MAX));
        let request = ActivationRequest::new(target as isize, ActivationSource::Scroll)
            .with_progressive(true);
        self.apply(&request)
    }

    fn apply(&mut self, request: &ActivationRequest) -> Option<Dispatch> {
        let transition = self.state.set_active(request);
        if !transition.applied {
            return None;
        }

        let progressive = request.progressive.unwrap_or_else(|| self.progressive());
        debug!(
            "scrolly step {} -> {} ({:?}, progressive: {})",
            transition.previous, transition.current, request.source, progressive
        );

        let projection = self
            .projector
            .project(transition.current, progressive, self.count());
        let effects = match panel_effect(&transition, progressive) {
            Some(PanelEffect::ScrollToBottom) => vec![Effect::ScrollPanelToBottom],
            None => Vec::new(),
        };

        Some(Dispatch {
            transition,
            projection,
            effects,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scrolly::projection::MessageSpec;
    use pretty_assertions::assert_eq;

    fn router(count: usize, reduced_motion: bool) -> ActivationRouter {
        let messages = [0, 0, 1, 2, 2, 3]
            .into_iter()
            .map(|show_from| MessageSpec { show_from })
            .collect();
        ActivationRouter::new(count, reduced_motion, Projector::new(messages)).unwrap()
    }

    fn region(id: usize, center: f64) -> CandidateRegion {
        CandidateRegion::new(id, center - 30.0, center + 30.0)
    }

    #[test]
    fn no_steps_means_no_router() {
        assert!(ActivationRouter::new(0, false, Projector::new(Vec::new())).is_none());
    }

    #[test]
    fn walkthrough_with_next_button() {
        let mut r = router(4, false);

        let init = r.init().unwrap();
        assert_eq!(init.transition.current, 0);
        assert_eq!(init.projection.label, "1/4 step");
        assert_eq!(
            init.projection.messages,
            vec![true, true, false, false, false, false]
        );
        assert!(!init.projection.toast_visible);
        assert!(init.projection.prev_disabled);
        assert!(!init.projection.next_disabled);

        let mut last = None;
        for _ in 0..3 {
            last = r.step(1);
        }
        let last = last.unwrap();
        assert_eq!(r.current(), 3);
        assert_eq!(last.projection.label, "4/4 step");
        assert!(last.projection.next_disabled);
        assert!(last.projection.toast_visible);
        assert_eq!(
            last.effects,
            vec![Effect::ScrollPanelToBottom, Effect::ScrollRegionIntoView(3)]
        );
    }

    #[test]
    fn next_at_the_end_reasserts_last_step() {
        let mut r = router(2, false);
        r.init();
        r.step(1);
        let again = r.step(1).unwrap();
        assert_eq!(again.transition.previous, 1);
        assert_eq!(again.transition.current, 1);
        assert!(again.effects.contains(&Effect::ScrollRegionIntoView(1)));
    }

    #[test]
    fn going_back_does_not_scroll_the_chat() {
        let mut r = router(4, false);
        r.init();
        r.activate(3);
        let back = r.step(-1).unwrap();
        assert_eq!(back.transition.current, 2);
        assert_eq!(back.effects, vec![Effect::ScrollRegionIntoView(2)]);
    }

    #[test]
    fn reduced_motion_shows_everything_and_never_samples() {
        let mut r = router(4, true);
        let init = r.init().unwrap();
        assert!(init.projection.messages.iter().all(|v| *v));
        assert!(init.projection.toast_visible);
        assert_eq!(init.effects, vec![Effect::ScrollPanelToBottom]);

        assert!(!r.request_sample());
        assert!(r
            .run_sample(true, &[region(2, 300.0)], 300.0, 800.0)
            .is_none());
        assert_eq!(r.current(), 0);

        let clicked = r.activate(1).unwrap();
        assert!(clicked.projection.messages.iter().all(|v| *v));
        assert_eq!(clicked.effects, vec![Effect::ScrollRegionIntoView(1)]);
    }

    #[test]
    fn sampling_is_coalesced_per_frame() {
        let mut r = router(3, false);
        r.init();
        assert!(r.request_sample());
        assert!(!r.request_sample());
        assert!(!r.request_sample());

        r.run_sample(true, &[], 300.0, 800.0);
        assert!(r.request_sample());
    }

    #[test]
    fn scroll_sample_activates_nearest_step_once() {
        let mut r = router(3, false);
        r.init();
        let candidates = [region(0, 100.0), region(1, 330.0), region(2, 700.0)];

        let moved = r.run_sample(true, &candidates, 336.0, 800.0).unwrap();
        assert_eq!(moved.transition.current, 1);
        assert_eq!(moved.effects, vec![Effect::ScrollPanelToBottom]);

        assert!(r.run_sample(true, &candidates, 336.0, 800.0).is_none());
    }

    #[test]
    fn hidden_section_is_not_sampled() {
        let mut r = router(3, false);
        r.init();
        assert!(r
            .run_sample(false, &[region(2, 336.0)], 336.0, 800.0)
            .is_none());
        assert_eq!(r.current(), 0);
    }

    #[test]
    fn tail_sentinel_id_is_clamped() {
        let mut r = router(3, false);
        r.init();
        let moved = r.run_sample(true, &[region(7, 300.0)], 300.0, 800.0).unwrap();
        assert_eq!(moved.transition.current, 2);
    }

    #[test]
    fn arrows_move_focus_not_activation() {
        let r = router(4, false);
        assert_eq!(r.roving_key("ArrowRight", 1), Some(Effect::FocusTab(2)));
        assert_eq!(r.roving_key("ArrowDown", 3), Some(Effect::FocusTab(3)));
        assert_eq!(r.roving_key("ArrowLeft", 0), Some(Effect::FocusTab(0)));
        assert_eq!(r.roving_key("ArrowUp", 2), Some(Effect::FocusTab(1)));
        assert_eq!(r.roving_key("Home", 2), Some(Effect::FocusTab(0)));
        assert_eq!(r.roving_key("End", 0), Some(Effect::FocusTab(3)));
        assert_eq!(r.roving_key("Tab", 0), None);
        assert_eq!(r.current(), 0);
    }

    #[test]
    fn enter_and_space_promote_focused_step() {
        let mut r = router(4, false);
        r.init();
        assert!(r.commit_key("a", 2).is_none());
        assert_eq!(r.current(), 0);

        let entered = r.commit_key("Enter", 2).unwrap();
        assert_eq!(entered.transition.current, 2);
        let spaced = r.commit_key(" ", 1).unwrap();
        assert_eq!(spaced.transition.current, 1);
    }
}
