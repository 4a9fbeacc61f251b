use crate::api::teams::get_team;
use crate::components::team::TeamSettings;
use crate::config::Config;
use log::{debug, error};
use shared::TeamDto;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TeamSettingsPageProps {
    pub team_id: String,
}

/// Loads the team and hosts the settings form. A successful update bumps
/// `reload`, which refetches the (already invalidated) record.
#[function_component(TeamSettingsPage)]
pub fn team_settings_page(props: &TeamSettingsPageProps) -> Html {
    let team = use_state(|| None::<TeamDto>);
    let load_error = use_state(|| None::<String>);
    let reload = use_state(|| 0u32);

    {
        let team = team.clone();
        let load_error = load_error.clone();
        use_effect_with((props.team_id.clone(), *reload), move |(team_id, _)| {
            let team_id = team_id.clone();
            spawn_local(async move {
                match get_team(&team_id).await {
                    Ok(loaded) => {
                        load_error.set(None);
                        team.set(Some(loaded));
                    }
                    Err(e) => {
                        error!("Failed to load team {}: {}", team_id, e);
                        load_error.set(Some(e));
                    }
                }
            });
            || ()
        });
    }

    let on_updated = {
        let reload = reload.clone();
        Callback::from(move |team_id: String| {
            debug!("Team {} updated, refetching", team_id);
            reload.set(*reload + 1);
        })
    };

    html! {
        <div class="max-w-4xl mx-auto px-4 py-8">
            <h1 class="text-2xl font-bold text-gray-900">{"Team settings"}</h1>
            if let Some(message) = (*load_error).as_ref() {
                <div class="mt-4 p-4 bg-yellow-50 border border-yellow-300 text-yellow-800 rounded">
                    {message}
                </div>
            } else if team.is_none() {
                <p class="mt-4 text-sm text-gray-500">{"Loading team..."}</p>
            }
            <TeamSettings
                team={(*team).clone()}
                website_url={Config::website_url()}
                app_name={Config::app_name()}
                {on_updated}
            />
        </div>
    }
}
