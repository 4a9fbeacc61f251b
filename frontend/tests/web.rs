//! Browser tests: `wasm-pack test --headless --firefox frontend`

#![cfg(target_arch = "wasm32")]

use std::time::Duration;
use team_frontend::components::team::team_settings::{TeamSettings, TeamSettingsProps};
use shared::TeamDto;
use wasm_bindgen_test::*;
use wasm_bindgen::JsCast;
use yew::platform::time::sleep;
use yew::{AppHandle, Callback};

wasm_bindgen_test_configure!(run_in_browser);

fn props(team: Option<TeamDto>) -> TeamSettingsProps {
    TeamSettingsProps {
        team,
        website_url: "https://example.com".into(),
        app_name: "Bogie".into(),
        on_updated: Callback::noop(),
    }
}

fn mount_with_handle(team: Option<TeamDto>) -> (web_sys::Element, AppHandle<TeamSettings>) {
    let document = gloo::utils::document();
    let root = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&root).unwrap();

    let handle = yew::Renderer::<TeamSettings>::with_root_and_props(root.clone(), props(team)).render();
    (root, handle)
}

fn mount(team: Option<TeamDto>) -> web_sys::Element {
    mount_with_handle(team).0
}

fn alpha_team() -> TeamDto {
    TeamDto {
        id: "t1".to_string(),
        name: "Alpha".to_string(),
        slug: "alpha".to_string(),
        ..Default::default()
    }
}

fn input(root: &web_sys::Element, selector: &str) -> web_sys::HtmlInputElement {
    root.query_selector(selector).unwrap().unwrap().unchecked_into()
}

fn type_into(field: &web_sys::HtmlInputElement, value: &str) {
    field.set_value(value);
    let init = web_sys::EventInit::new();
    init.set_bubbles(true);
    let event = web_sys::Event::new_with_event_init_dict("input", &init).unwrap();
    field.dispatch_event(&event).unwrap();
}

fn logo_preview(root: &web_sys::Element) -> Option<String> {
    root.query_selector("img").unwrap().and_then(|img| img.get_attribute("src"))
}

#[wasm_bindgen_test]
async fn save_is_disabled_until_a_team_is_loaded() {
    let root = mount(None);
    sleep(Duration::from_millis(20)).await;

    let save = root.query_selector("button[type=submit]").unwrap().unwrap();
    assert!(save.has_attribute("disabled"));
    assert!(root.query_selector("[role=alert]").unwrap().is_none());
}

#[wasm_bindgen_test]
async fn form_shows_slug_prefix_and_logo_controls() {
    let team = TeamDto {
        id: "t1".to_string(),
        name: "Alpha".to_string(),
        slug: "alpha".to_string(),
        logo: Some("data:image/png;base64,AAAA".to_string()),
        ..Default::default()
    };
    let root = mount(Some(team));
    sleep(Duration::from_millis(20)).await;

    let text = root.text_content().unwrap_or_default();
    assert!(text.contains("https://example.com/team/"));
    assert!(text.contains("Edit logo"));
    assert!(text.contains("Remove logo"));
    assert!(text.contains("Disable Bogie branding"));
}

#[wasm_bindgen_test]
async fn refetched_record_keeps_unsaved_edits() {
    let (root, mut handle) = mount_with_handle(Some(alpha_team()));
    sleep(Duration::from_millis(20)).await;

    let name = input(&root, "#name");
    assert_eq!(name.value(), "Alpha");
    type_into(&name, "Beta");
    sleep(Duration::from_millis(20)).await;

    // Same team comes back from the server with a new logo
    handle.update(props(Some(TeamDto {
        logo: Some("data:image/png;base64,NEW".to_string()),
        ..alpha_team()
    })));
    sleep(Duration::from_millis(20)).await;

    assert_eq!(input(&root, "#name").value(), "Beta");
    assert_eq!(input(&root, "#team-url").value(), "alpha");
    assert_eq!(logo_preview(&root).as_deref(), Some("data:image/png;base64,NEW"));
}

#[wasm_bindgen_test]
async fn switching_teams_reseeds_the_form() {
    let (root, mut handle) = mount_with_handle(Some(alpha_team()));
    sleep(Duration::from_millis(20)).await;
    type_into(&input(&root, "#name"), "Draft");
    sleep(Duration::from_millis(20)).await;

    handle.update(props(Some(TeamDto {
        id: "t2".to_string(),
        name: "Gamma".to_string(),
        slug: "gamma".to_string(),
        ..Default::default()
    })));
    sleep(Duration::from_millis(20)).await;

    assert_eq!(input(&root, "#name").value(), "Gamma");
    assert_eq!(input(&root, "#team-url").value(), "gamma");
}

#[wasm_bindgen_test]
async fn logo_preview_follows_the_loaded_record() {
    let team = TeamDto {
        logo: Some("data:image/png;base64,AAAA".to_string()),
        ..alpha_team()
    };
    let (root, mut handle) = mount_with_handle(Some(team));
    sleep(Duration::from_millis(20)).await;

    assert_eq!(logo_preview(&root).as_deref(), Some("data:image/png;base64,AAAA"));

    // Record without a logo, e.g. after a confirmed removal
    handle.update(props(Some(alpha_team())));
    sleep(Duration::from_millis(20)).await;

    assert_eq!(logo_preview(&root), None);
    assert!(!root.text_content().unwrap_or_default().contains("Remove logo"));
}
