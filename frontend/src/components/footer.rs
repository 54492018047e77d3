use chrono::{Datelike, Local};
use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();

    html! {
        <footer class="footer">
            <div class="footer__inner">
                <span class="footer__brand">{"Synkris"}</span>
                <p class="footer__tagline">{"Assistente WhatsApp per saloni. Fatto con cura in Italia."}</p>
                <p class="footer__legal">
                    {"© "}<span id="year">{year}</span>{" Synkris. Tutti i diritti riservati."}
                </p>
            </div>
        </footer>
    }
}
