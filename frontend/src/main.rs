use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod anchors;
mod chrome;
mod config;
mod dom;
mod motion;

mod contact {
    pub mod form;
    pub mod submit;
}
mod scrolly {
    pub mod geometry;
    pub mod layout;
    pub mod projection;
    pub mod router;
    pub mod state;
}
mod components {
    pub mod contact_form;
    pub mod faq;
    pub mod footer;
    pub mod header;
    pub mod reveal;
    pub mod scrolly_demo;
    pub mod whatsapp_fab;
}
mod pages {
    pub mod landing;
}

use components::header::Header;
use motion::Motion;
use pages::landing::Landing;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing /> }
        }
        Route::NotFound => {
            info!("Unknown path, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    // Sampled once; the preference is fixed for the page's lifetime.
    let motion = use_state(Motion::detect);
    if motion.reduced {
        info!("Reduced motion requested, scroll-driven effects are off");
    }

    html! {
        <ContextProvider<Motion> context={*motion}>
            <BrowserRouter>
                <Header />
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<Motion>>
    }
}

fn print_banner() {
    gloo_console::log!(
        "%cSynkris%c\n💜 Assistente WhatsApp per saloni\nFatto con cura in Italia",
        "font-size: 24px; font-weight: bold; background: linear-gradient(135deg, #7c3aed 0%, #a78bfa 100%); -webkit-background-clip: text; -webkit-text-fill-color: transparent;",
        "font-size: 14px; color: #a78bfa; margin-top: 8px;"
    );
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    print_banner();
    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
