use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlElement, KeyboardEvent, MouseEvent, Node};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::anchors;
use crate::chrome;
use crate::config;
use crate::dom::{self, Observer};
use crate::motion::{supports_intersection_observer, Motion};

pub const NAV_LINKS: [(&str, &str); 4] = [
    ("#come-funziona", "Come funziona"),
    ("#vantaggi", "Vantaggi"),
    ("#faq", "FAQ"),
    ("#contatti", "Contatti"),
];

fn sync_header_height(header: &NodeRef) {
    let measured = header
        .cast::<HtmlElement>()
        .map(|h| h.offset_height() as f64);
    let height = chrome::header_height_or_default(measured);
    if let Some(root) = dom::root_element() {
        dom::set_css_var(&root, "--header-h", &format!("{}px", height));
    }
}

fn contains(node: &NodeRef, target: &Option<Node>) -> bool {
    match (node.get(), target) {
        (Some(node), Some(target)) => node.contains(Some(target)),
        _ => false,
    }
}

#[function_component(Header)]
pub fn header() -> Html {
    let motion = use_context::<Motion>().unwrap_or_default();
    let header_ref = use_node_ref();
    let nav_ref = use_node_ref();
    let toggle_ref = use_node_ref();

    let is_scrolled = use_state(|| chrome::header_is_scrolled(dom::scroll_y()));
    let menu_open = use_state(|| false);
    let active_link = use_state(|| None::<String>);

    {
        let header_ref = header_ref.clone();
        use_effect_with_deps(
            move |_| {
                sync_header_height(&header_ref);
                || ()
            },
            (),
        );
    }

    {
        let is_scrolled = is_scrolled.clone();
        use_event_with_window("scroll", move |_: Event| {
            is_scrolled.set(chrome::header_is_scrolled(dom::scroll_y()));
        });
    }

    {
        let header_ref = header_ref.clone();
        use_event_with_window("resize", move |_: Event| {
            sync_header_height(&header_ref);
        });
    }

    {
        let menu_open = menu_open.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" && *menu_open {
                menu_open.set(false);
            }
        });
    }

    {
        let menu_open = menu_open.clone();
        let nav_ref = nav_ref.clone();
        let toggle_ref = toggle_ref.clone();
        let reduced = motion.reduced;
        use_event_with_window("click", move |e: MouseEvent| {
            if anchors::handle_anchor_click(&e, reduced) {
                menu_open.set(false);
                return;
            }
            if !*menu_open {
                return;
            }
            let target = e.target().and_then(|t| t.dyn_into::<Node>().ok());
            if !contains(&nav_ref, &target) && !contains(&toggle_ref, &target) {
                menu_open.set(false);
            }
        });
    }

    // Focus the first link once the drawer has started sliding in.
    {
        let nav_ref = nav_ref.clone();
        use_effect_with_deps(
            move |open| {
                let timeout = open.then(|| {
                    Timeout::new(config::NAV_FOCUS_DELAY_MS, move || {
                        if let Some(first) = nav_ref
                            .cast::<Element>()
                            .and_then(|nav| nav.query_selector("a").ok().flatten())
                        {
                            dom::focus(&first);
                        }
                    })
                });
                move || drop(timeout)
            },
            *menu_open,
        );
    }

    {
        let active_link = active_link.clone();
        use_effect_with_deps(
            move |allows_animation| {
                let mut observer = None;
                if *allows_animation && supports_intersection_observer() {
                    let sections: Vec<(Element, &'static str)> = web_sys::window()
                        .and_then(|w| w.document())
                        .map(|doc| {
                            NAV_LINKS
                                .iter()
                                .filter_map(|(href, _)| {
                                    let section = doc.query_selector(href).ok().flatten()?;
                                    Some((section, *href))
                                })
                                .collect()
                        })
                        .unwrap_or_default();

                    if !sections.is_empty() {
                        let lookup = sections.clone();
                        observer = Observer::new(
                            config::SECTION_ROOT_MARGIN,
                            0.0,
                            move |entry, _| {
                                if !entry.is_intersecting() {
                                    return;
                                }
                                let target = entry.target();
                                if let Some((_, href)) =
                                    lookup.iter().find(|(section, _)| *section == target)
                                {
                                    active_link.set(Some(href.to_string()));
                                }
                            },
                        );
                        if let Some(observer) = &observer {
                            for (section, _) in &sections {
                                observer.observe(section);
                            }
                        }
                    }
                }
                move || drop(observer)
            },
            motion.allows_animation(),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    html! {
        <header ref={header_ref} class={classes!("header", (*is_scrolled).then(|| "is-scrolled"))}>
            <a class="skip-link" href="#main">{"Vai al contenuto"}</a>
            <div class="header__inner">
                <a href="#top" class="header__logo">{"Synkris"}</a>

                <button
                    ref={toggle_ref}
                    id="navToggle"
                    class="nav-toggle"
                    aria-controls="siteNav"
                    aria-expanded={(*menu_open).to_string()}
                    aria-label="Apri il menu"
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>

                <nav ref={nav_ref} id="siteNav" class={classes!("site-nav", (*menu_open).then(|| "is-open"))}>
                    { for NAV_LINKS.iter().map(|(href, label)| {
                        let is_active = active_link.as_deref() == Some(*href);
                        html! {
                            <a
                                href={*href}
                                class={classes!("site-nav__link", is_active.then(|| "is-active"))}
                                onclick={close_menu.clone()}
                            >
                                {*label}
                            </a>
                        }
                    }) }
                    <a href="#contatti" class="site-nav__cta" onclick={close_menu.clone()}>{"Richiedi una demo"}</a>
                </nav>
            </div>
            <div
                id="navOverlay"
                class={classes!("nav-overlay", (*menu_open).then(|| "is-visible"))}
                onclick={close_menu}
            ></div>
        </header>
    }
}
