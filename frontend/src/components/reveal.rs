use web_sys::Element;
use yew::prelude::*;

use crate::config;
use crate::dom::Observer;
use crate::motion::{supports_intersection_observer, Motion};

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Fades its children in the first time they scroll into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let motion = use_context::<Motion>().unwrap_or_default();
    let node = use_node_ref();
    let visible = use_state(|| motion.reduced || !supports_intersection_observer());

    {
        let node = node.clone();
        let is_visible = *visible;
        let visible = visible.clone();
        use_effect_with_deps(
            move |already_visible| {
                let mut observer = None;
                if !*already_visible {
                    if let Some(el) = node.cast::<Element>() {
                        observer = Observer::new(
                            config::REVEAL_ROOT_MARGIN,
                            config::REVEAL_THRESHOLD,
                            move |entry, obs| {
                                if entry.is_intersecting() {
                                    visible.set(true);
                                    obs.unobserve(&entry.target());
                                }
                            },
                        );
                        if let Some(observer) = &observer {
                            observer.observe(&el);
                        }
                    }
                }
                move || drop(observer)
            },
            is_visible,
        );
    }

    html! {
        <div
            ref={node}
            data-reveal=""
            class={classes!("reveal", props.class.clone(), (*visible).then(|| "is-visible"))}
        >
            { for props.children.iter() }
        </div>
    }
}
