use crate::config;
use crate::scrolly::state::Transition;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MessageSpec {
    pub show_from: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TabProjection {
    pub selected: bool,
    pub tab_index: i32,
}

/// Everything the demo renders for one active step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Projection {
    pub tabs: Vec<TabProjection>,
    pub messages: Vec<bool>,
    pub toast_visible: bool,
    pub prev_disabled: bool,
    pub next_disabled: bool,
    pub label: String,
    pub labelled_by: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelEffect {
    ScrollToBottom,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Projector {
    messages: Vec<MessageSpec>,
    toast_gate: usize,
}

impl Projector {
    pub fn new(messages: Vec<MessageSpec>) -> Self {
        Self {
            messages,
            toast_gate: config::TOAST_GATE_STEP,
        }
    }

    pub fn with_toast_gate(mut self, toast_gate: usize) -> Self {
        self.toast_gate = toast_gate;
        self
    }

    pub fn project(&self, active: usize, progressive: bool, step_count: usize) -> Projection {
        let tabs = (0..step_count)
            .map(|i| {
                let selected = i == active;
                TabProjection {
                    selected,
                    tab_index: if selected { 0 } else { -1 },
                }
            })
            .collect();

        let messages = self
            .messages
            .iter()
            .map(|m| !progressive || active >= m.show_from)
            .collect();

        Projection {
            tabs,
            messages,
            toast_visible: !progressive || active >= self.toast_gate,
            prev_disabled: active == 0,
            next_disabled: active + 1 >= step_count,
            label: format!("{}/{} step", active + 1, step_count),
            labelled_by: active,
        }
    }
}

/// Forward or stationary moves keep the chat pinned to its latest message.
pub fn panel_effect(transition: &Transition, progressive: bool) -> Option<PanelEffect> {
    if progressive && transition.current >= transition.previous {
        Some(PanelEffect::ScrollToBottom)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn projector() -> Projector {
        Projector::new(
            [0, 0, 1, 2, 3]
                .into_iter()
                .map(|show_from| MessageSpec { show_from })
                .collect(),
        )
    }

    #[test]
    fn messages_follow_the_active_step_both_ways() {
        let p = projector();
        let visible_at = |active| p.project(active, true, 4).messages;

        assert_eq!(visible_at(0), vec![true, true, false, false, false]);
        assert_eq!(visible_at(1), vec![true, true, true, false, false]);
        assert_eq!(visible_at(2), vec![true, true, true, true, false]);
        // stepping back hides the threshold-2 message again
        assert_eq!(visible_at(1), vec![true, true, true, false, false]);
    }

    #[test]
    fn non_progressive_shows_everything() {
        let projection = projector().project(0, false, 4);
        assert!(projection.messages.iter().all(|v| *v));
        assert!(projection.toast_visible);
    }

    #[test]
    fn toast_is_gated_behind_third_step() {
        let p = projector();
        assert!(!p.project(1, true, 4).toast_visible);
        assert!(p.project(2, true, 4).toast_visible);
        assert!(p.project(3, true, 4).toast_visible);
        for active in 0..4 {
            assert!(p.project(active, false, 4).toast_visible);
        }
    }

    #[test]
    fn toast_gate_is_configurable() {
        let p = projector().with_toast_gate(0);
        assert!(p.project(0, true, 4).toast_visible);
    }

    #[test]
    fn control_bounds() {
        let p = projector();
        let first = p.project(0, true, 5);
        assert!(first.prev_disabled);
        assert!(!first.next_disabled);

        let last = p.project(4, true, 5);
        assert!(!last.prev_disabled);
        assert!(last.next_disabled);

        let single = p.project(0, true, 1);
        assert!(single.prev_disabled && single.next_disabled);
    }

    #[test]
    fn tabs_use_roving_tab_index() {
        let projection = projector().project(2, true, 4);
        let indices: Vec<i32> = projection.tabs.iter().map(|t| t.tab_index).collect();
        assert_eq!(indices, vec![-1, -1, 0, -1]);
        assert_eq!(projection.tabs.iter().filter(|t| t.selected).count(), 1);
        assert_eq!(projection.labelled_by, 2);
        assert_eq!(projection.label, "3/4 step");
    }

    #[test]
    fn projection_is_deterministic() {
        let p = projector();
        assert_eq!(p.project(2, true, 4), p.project(2, true, 4));
    }

    #[test]
    fn chat_scrolls_only_when_not_going_back() {
        let forward = Transition { applied: true, changed: true, previous: 1, current: 2 };
        let stay = Transition { applied: true, changed: false, previous: 2, current: 2 };
        let back = Transition { applied: true, changed: true, previous: 2, current: 1 };

        assert_eq!(panel_effect(&forward, true), Some(PanelEffect::ScrollToBottom));
        assert_eq!(panel_effect(&stay, true), Some(PanelEffect::ScrollToBottom));
        assert_eq!(panel_effect(&back, true), None);
        assert_eq!(panel_effect(&forward, false), None);
    }
}
