use web_sys::Event;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::chrome;
use crate::config;
use crate::dom;

#[function_component(WhatsAppFab)]
pub fn whatsapp_fab() -> Html {
    let visible = use_state(|| chrome::fab_is_visible(dom::scroll_y()));

    {
        let visible = visible.clone();
        use_event_with_window("scroll", move |_: Event| {
            let show = chrome::fab_is_visible(dom::scroll_y());
            if show != *visible {
                visible.set(show);
            }
        });
    }

    html! {
        <a
            class={classes!("wa-fab", (*visible).then(|| "is-visible"))}
            href={config::WHATSAPP_URL}
            target="_blank"
            rel="noopener"
            aria-label="Scrivici su WhatsApp"
        >
            <span class="wa-fab__icon" aria-hidden="true">{"💬"}</span>
            <span class="wa-fab__label">{"Scrivici"}</span>
        </a>
    }
}
