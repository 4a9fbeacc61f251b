use log::{debug, info};
use wasm_bindgen::prelude::*;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::common_toast::ToastProvider;

pub mod api;
pub mod components;
pub mod config;
pub mod pages {
    pub mod not_found;
    pub mod team_settings;
}

use pages::{not_found::NotFound, team_settings::TeamSettingsPage};


#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/settings/teams/:team_id")]
    TeamSettings { team_id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component(App)]
fn app() -> Html {
    debug!("App component rendering");
    html! {
        <ToastProvider>
            <BrowserRouter>
                <main class="flex-1">
                    <Switch<Route> render={switch} />
                </main>
            </BrowserRouter>
        </ToastProvider>
    }
}

fn switch(route: Route) -> Html {
    debug!("Route switch: {:?}", route);
    match route {
        Route::TeamSettings { team_id } => html! { <TeamSettingsPage {team_id} /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[wasm_bindgen]
pub async fn run_app() -> Result<(), JsValue> {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    console_error_panic_hook::set_once();
    info!("Logger and panic hook initialized");

    info!("Mounting application to body");
    yew::Renderer::<App>::new().render();
    Ok(())
}

// Entry point called by Trunk
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    wasm_bindgen_futures::spawn_local(async {
        if let Err(e) = run_app().await {
            log::error!("Failed to run app: {:?}", e);
        }
    });
    Ok(())
}
