use crate::api::teams::{invalidate_team, HttpTeamClient};
use crate::components::common_toast::{Toast, ToastContext};
use crate::components::team::image_uploader::ImageUploader;
use crate::components::team::setting_input_container::SettingInputContainer;
use crate::config::team_url_prefix;
use log::{debug, warn};
use shared::{
    BannerState, TeamDto, TeamFormValues, TeamSettingsController, UpdateNotifier,
    TEAM_UPDATED_MESSAGE,
};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

/// Banner plus the number of updates still waiting on the server
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SettingsState {
    pub banner: BannerState,
    pub in_flight: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SettingsAction {
    Started,
    Finished,
    Succeeded,
    Failed(String),
}

impl Reducible for SettingsState {
    type Action = SettingsAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            SettingsAction::Started => Rc::new(Self {
                in_flight: self.in_flight + 1,
                ..(*self).clone()
            }),
            SettingsAction::Finished => Rc::new(Self {
                in_flight: self.in_flight.saturating_sub(1),
                ..(*self).clone()
            }),
            SettingsAction::Succeeded => Rc::new(Self {
                banner: BannerState::clean(),
                ..(*self).clone()
            }),
            SettingsAction::Failed(message) => Rc::new(Self {
                banner: BannerState::failed(message),
                ..(*self).clone()
            }),
        }
    }
}

/// Routes controller results into the form's banner, the toast stack and the
/// host page's refresh callback
struct FormNotifier {
    state: UseReducerDispatcher<SettingsState>,
    toasts: Option<ToastContext>,
    on_updated: Callback<String>,
}

impl UpdateNotifier for FormNotifier {
    fn team_updated(&self, team_id: &str) {
        invalidate_team(team_id);
        self.on_updated.emit(team_id.to_string());
        match &self.toasts {
            Some(toasts) => toasts.add_toast.emit(Toast::success(TEAM_UPDATED_MESSAGE)),
            None => warn!("No toast context; dropping success notification"),
        }
        self.state.dispatch(SettingsAction::Succeeded);
    }

    fn update_failed(&self, message: &str) {
        self.state.dispatch(SettingsAction::Failed(message.to_string()));
    }
}

#[derive(Properties, PartialEq)]
pub struct TeamSettingsProps {
    /// `None` while the team is loading; submitting is disabled
    pub team: Option<TeamDto>,
    /// Rendered in front of the slug input
    pub website_url: AttrValue,
    pub app_name: AttrValue,
    /// Fired with the team id after the server accepts an update
    #[prop_or_default]
    pub on_updated: Callback<String>,
}

#[function_component(TeamSettings)]
pub fn team_settings(props: &TeamSettingsProps) -> Html {
    let toasts = use_context::<ToastContext>();
    let state = use_reducer(SettingsState::default);

    let name = use_state(String::new);
    let slug = use_state(String::new);
    let bio = use_state(String::new);
    let hide_branding = use_state(|| false);

    // Seed the inputs from the first record and again only when the team id
    // changes. Refetches of the same team keep whatever the user has typed.
    {
        let name = name.clone();
        let slug = slug.clone();
        let bio = bio.clone();
        let hide_branding = hide_branding.clone();
        let team = props.team.clone();
        use_effect_with(props.team.as_ref().map(|t| t.id.clone()), move |_| {
            if let Some(team) = &team {
                debug!("Loading form values from team {}", team.id);
                let values = TeamFormValues::from(team);
                name.set(values.name);
                slug.set(values.slug);
                bio.set(values.bio);
                hide_branding.set(values.hide_branding);
            }
            || ()
        });
    }

    let controller = {
        let dispatcher = state.dispatcher();
        let toasts = toasts.clone();
        let on_updated = props.on_updated.clone();
        move || {
            TeamSettingsController::new(
                HttpTeamClient,
                FormNotifier {
                    state: dispatcher.clone(),
                    toasts: toasts.clone(),
                    on_updated: on_updated.clone(),
                },
            )
        }
    };

    let on_submit = {
        let team = props.team.clone();
        let dispatcher = state.dispatcher();
        let controller = controller.clone();
        let (name, slug, bio, hide_branding) = (name.clone(), slug.clone(), bio.clone(), hide_branding.clone());
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let form = TeamFormValues {
                name: (*name).clone(),
                slug: (*slug).clone(),
                bio: (*bio).clone(),
                hide_branding: *hide_branding,
            };
            let team = team.clone();
            let dispatcher = dispatcher.clone();
            let controller = controller();

            dispatcher.dispatch(SettingsAction::Started);
            spawn_local(async move {
                controller.submit(team.as_ref(), &form).await;
                dispatcher.dispatch(SettingsAction::Finished);
            });
        })
    };

    let update_logo = {
        let team = props.team.clone();
        let dispatcher = state.dispatcher();
        let controller = controller.clone();
        Callback::from(move |new_logo: String| {
            if team.is_none() {
                return;
            }
            let team = team.clone();
            let dispatcher = dispatcher.clone();
            let controller = controller();

            dispatcher.dispatch(SettingsAction::Started);
            spawn_local(async move {
                controller.update_logo(team.as_ref(), &new_logo).await;
                dispatcher.dispatch(SettingsAction::Finished);
            });
        })
    };

    let remove_logo = update_logo.reform(|_: MouseEvent| String::new());

    let on_slug_input = {
        let slug = slug.clone();
        Callback::from(move |e: InputEvent| slug.set(e.target_unchecked_into::<HtmlInputElement>().value()))
    };
    let on_name_input = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| name.set(e.target_unchecked_into::<HtmlInputElement>().value()))
    };
    let on_bio_input = {
        let bio = bio.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(area) = e.target().and_then(|t| t.dyn_into::<HtmlTextAreaElement>().ok()) {
                bio.set(area.value());
            }
        })
    };
    let on_branding_change = {
        let hide_branding = hide_branding.clone();
        Callback::from(move |e: Event| hide_branding.set(e.target_unchecked_into::<HtmlInputElement>().checked()))
    };

    let has_logo = props.team.as_ref().is_some_and(TeamDto::has_logo);
    // The preview follows the confirmed record only
    let logo_src = props
        .team
        .as_ref()
        .and_then(|t| t.logo.clone())
        .filter(|l| !l.is_empty())
        .map(AttrValue::from);
    let no_team = props.team.is_none();
    let saving = state.in_flight > 0;

    html! {
        <div class="divide-y divide-gray-200 lg:col-span-9">
            if state.banner.has_errors {
                <div role="alert" class="mb-4 p-4 bg-red-100 border border-red-400 text-red-700 rounded">
                    {&state.banner.error_message}
                </div>
            }
            <form class="divide-y divide-gray-200 lg:col-span-9" onsubmit={on_submit}>
                <div class="py-6 space-y-6">
                    <SettingInputContainer icon="🔗" label="Team URL" html_for="team-url">
                        <div class="flex">
                            <span class="inline-flex items-center rounded-l-sm border border-r-0 border-gray-300 bg-gray-50 px-3 text-sm text-gray-500">
                                {team_url_prefix(&props.website_url)}
                            </span>
                            <input
                                id="team-url"
                                type="text"
                                value={(*slug).clone()}
                                oninput={on_slug_input}
                                class="block w-full rounded-r-sm border border-gray-300 px-3 py-2 text-sm"
                            />
                        </div>
                    </SettingInputContainer>
                    <SettingInputContainer icon="#" label="Team Name" html_for="name">
                        <input
                            id="name"
                            name="name"
                            type="text"
                            placeholder="Your team name"
                            required={true}
                            value={(*name).clone()}
                            oninput={on_name_input}
                            class="mt-1 block w-full rounded-sm border border-gray-300 px-3 py-2 text-sm"
                        />
                    </SettingInputContainer>
                    <hr />
                    <SettingInputContainer icon="ℹ" label="About" html_for="about">
                        <textarea
                            id="about"
                            name="about"
                            rows="3"
                            value={(*bio).clone()}
                            oninput={on_bio_input}
                            class="mt-1 block w-full rounded-sm border-gray-300 text-sm"
                        />
                        <p class="mt-2 text-sm text-gray-500">
                            {"A few sentences about your team. This will appear on your team's URL page."}
                        </p>
                    </SettingInputContainer>
                    <SettingInputContainer icon="🖼" label="Logo" html_for="logo-upload">
                        <div class="mt-1 flex">
                            <ImageUploader
                                id="logo-upload"
                                button_msg={if has_logo { "Edit logo" } else { "Upload a logo" }}
                                image_src={logo_src}
                                on_change={update_logo}
                            />
                            if has_logo {
                                <button
                                    type="button"
                                    onclick={remove_logo}
                                    class="ml-1 py-1 px-2 text-xs rounded-sm border border-gray-300 bg-white text-gray-700 hover:bg-gray-50"
                                >
                                    {"Remove logo"}
                                </button>
                            }
                        </div>
                    </SettingInputContainer>
                    <hr />
                    <div class="relative flex items-start">
                        <div class="flex h-5 items-center">
                            <input
                                id="hide-branding"
                                name="hide-branding"
                                type="checkbox"
                                checked={*hide_branding}
                                onchange={on_branding_change}
                                class="h-4 w-4 rounded-sm border-gray-300 text-neutral-900"
                            />
                        </div>
                        <div class="ml-3 text-sm">
                            <label for="hide-branding" class="font-medium text-gray-700">
                                {format!("Disable {} branding", props.app_name)}
                            </label>
                            <p class="text-gray-500">
                                {format!("Hides all {} branding from your public pages.", props.app_name)}
                            </p>
                        </div>
                    </div>
                </div>
                <div class="flex justify-end py-4">
                    <button
                        type="submit"
                        disabled={no_team}
                        class="px-4 py-2 bg-neutral-900 text-white rounded hover:bg-neutral-700 disabled:opacity-50 transition-colors"
                    >
                        {if saving { "Saving..." } else { "Save" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
