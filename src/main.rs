use log::info;
use stylist::css;
use stylist::yew::Global;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod dom;
mod error;
mod metadata;
mod relay;
mod content {
    pub mod projects;
    pub mod site;
}
mod state {
    pub mod catalog;
    pub mod contact;
    pub mod page;
    pub mod reveal;
    pub mod scroll_spy;
    pub mod typewriter;
}
mod components {
    pub mod animated_section;
    pub mod contact_form;
    pub mod footer;
    pub mod nav;
    pub mod project_detail;
    pub mod project_grid;
    pub mod scroll_top;
    pub mod social;
    pub mod typed_role;
}
mod pages {
    pub mod home;
    pub mod not_found;
    pub mod sections;
}

use pages::{home::Home, not_found::NotFound};

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
            html! { <Home /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Global css={css!(r#"
                html {
                    scroll-behavior: smooth;
                }
                .reveal {
                    opacity: 0;
                    transform: translateY(2rem);
                    transition: opacity 0.8s ease-out, transform 0.8s ease-out;
                }
                .reveal.revealed {
                    opacity: 1;
                    transform: translateY(0);
                }
            "#)} />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    if let Err(err) = console_log::init_with_level(config::log_level()) {
        gloo_console::error!("error initializing log", err.to_string());
    }

    match web_sys::window().and_then(|w| w.document()) {
        Some(document) => metadata::SITE.apply(&document),
        None => log::warn!("no document available, skipping head metadata"),
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
