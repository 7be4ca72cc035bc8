use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod error;
mod i18n;
mod motion;
mod submission;
mod theme;
mod components {
    pub mod about;
    pub mod contact;
    pub mod footer;
    pub mod header;
    pub mod hero;
    pub mod portfolio;
    pub mod services;
}
mod pages {
    pub mod home;
}

use i18n::LocaleProvider;
use motion::MotionProvider;
use pages::home::Home;
use theme::Theme;

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
            info!("Unknown path, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <MotionProvider>
            <LocaleProvider>
                <Theme />
                <BrowserRouter>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </LocaleProvider>
        </MotionProvider>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
