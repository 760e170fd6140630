//! End-to-end browsing sessions driven through the public API.

use country_browser::infrastructure::api::interpret_response;
use country_browser::storage::JsonPreferenceStore;
use country_browser::worker::{PreferenceWorker, WorkerMessage, WorkerResponse};
use country_browser::{handle_event, initialize, Action, AppState, Config, DataStatus, Event};

const BODY: &str = r#"[
    {"flags": {"svg": "https://flagcdn.com/pe.svg"}, "name": {"common": "Peru"},
     "population": 33000000, "region": "Americas", "capital": ["Lima"]},
    {"flags": {"svg": "https://flagcdn.com/fr.svg"}, "name": {"common": "France"},
     "population": 67000000, "region": "Europe", "capital": ["Paris"]},
    {"flags": {"svg": "https://flagcdn.com/aq.svg"}, "name": {"common": "Antarctica"},
     "population": 1000, "region": "Antarctic"}
]"#;

fn granted_session() -> (AppState, Vec<Action>) {
    let mut state = initialize(&Config::default());
    let (_, actions) = handle_event(&mut state, &Event::PermissionsResult { granted: true }).unwrap();
    (state, actions)
}

fn deliver(state: &mut AppState, status: u16, body: &[u8]) {
    handle_event(state, &Event::CountriesFetched(interpret_response(status, body))).unwrap();
}

fn visible(state: &AppState) -> Vec<&str> {
    state.visible_countries().map(|c| c.name.as_str()).collect()
}

fn search(state: &mut AppState, text: &str) {
    handle_event(state, &Event::StartSearch).unwrap();
    for c in text.chars() {
        handle_event(state, &Event::Char(c)).unwrap();
    }
    handle_event(state, &Event::FocusResults).unwrap();
}

fn pick_region(state: &mut AppState, region: &str) {
    handle_event(state, &Event::ToggleRegionList).unwrap();
    while state.regions.get(state.region_cursor) != Some(region) {
        handle_event(state, &Event::KeyDown).unwrap();
    }
    handle_event(state, &Event::SelectRegion).unwrap();
}

#[test]
fn grant_requests_dataset_and_stored_theme() {
    let (_, actions) = granted_session();

    assert_eq!(
        actions,
        vec![
            Action::FetchCountries { url: Config::default().endpoint },
            Action::PostToWorker(WorkerMessage::load_theme()),
        ]
    );
}

#[test]
fn denied_access_still_restores_theme() {
    let mut state = initialize(&Config::default());

    let (_, actions) = handle_event(&mut state, &Event::PermissionsResult { granted: false }).unwrap();

    assert_eq!(actions, vec![Action::PostToWorker(WorkerMessage::load_theme())]);
}

#[test]
fn default_endpoint_requests_only_needed_fields() {
    assert_eq!(
        Config::default().endpoint,
        "https://restcountries.com/v3.1/all?fields=flags,name,population,region,capital"
    );
}

#[test]
fn world_search_then_region_lock() {
    let (mut state, _) = granted_session();
    deliver(&mut state, 200, BODY.as_bytes());
    assert_eq!(state.data_status, DataStatus::Loaded);
    assert_eq!(visible(&state), ["Peru", "France", "Antarctica"]);

    search(&mut state, "PER");
    assert_eq!(visible(&state), ["Peru"]);
    assert_eq!(state.region_label, "Americas");

    handle_event(&mut state, &Event::ExitSearch).unwrap();
    pick_region(&mut state, "Europe");
    assert_eq!(visible(&state), ["France"]);
    assert_eq!(state.region_label, "Europe");

    search(&mut state, "per");
    assert!(visible(&state).is_empty());

    handle_event(&mut state, &Event::ExitSearch).unwrap();
    assert_eq!(visible(&state), ["France"]);
}

#[test]
fn missing_capital_is_rendered_as_placeholder() {
    let (mut state, _) = granted_session();
    deliver(&mut state, 200, BODY.as_bytes());

    let vm = state.compute_viewmodel(40, 120);
    let antarctica = vm
        .display_items
        .iter()
        .find(|item| item.row.name == "Antarctica")
        .unwrap();

    assert_eq!(antarctica.row.capital, "No capital");
}

#[test]
fn failed_fetch_leaves_empty_browser() {
    let (mut state, _) = granted_session();
    deliver(&mut state, 500, b"");

    assert_eq!(state.data_status, DataStatus::Unavailable);
    assert!(state.countries.is_empty());

    let vm = state.compute_viewmodel(40, 120);
    assert!(vm.data_ready);
    assert!(vm.empty_state.is_none());
    assert!(vm.display_items.is_empty());
}

#[test]
fn malformed_body_is_treated_as_failure() {
    let (mut state, _) = granted_session();
    deliver(&mut state, 200, b"{\"status\": 404}");

    assert_eq!(state.data_status, DataStatus::Unavailable);
}

#[test]
fn dark_theme_survives_reload_within_two_hours() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preferences.json");
    let now = 1_700_000_000;

    let (mut state, _) = granted_session();
    let (_, actions) = handle_event(&mut state, &Event::ToggleTheme).unwrap();
    assert!(state.dark_mode);
    let Some(Action::PostToWorker(save)) = actions.into_iter().next() else {
        panic!("toggle should persist the theme");
    };

    {
        let store = JsonPreferenceStore::new(path.clone()).unwrap();
        let mut worker = PreferenceWorker::with_store(Box::new(store));
        let saved = worker.handle_message_at(save, now);
        assert!(matches!(saved, WorkerResponse::ThemeSaved { dark: true, .. }));
    }

    let store = JsonPreferenceStore::new(path).unwrap();
    let mut worker = PreferenceWorker::with_store(Box::new(store));
    let loaded = worker.handle_message_at(WorkerMessage::load_theme(), now + 60 * 60);
    let expired = worker.handle_message_at(WorkerMessage::load_theme(), now + 3 * 60 * 60);

    let (mut reloaded, _) = granted_session();
    handle_event(&mut reloaded, &Event::WorkerResponse(loaded)).unwrap();
    assert!(reloaded.dark_mode);
    assert_eq!(reloaded.compute_viewmodel(40, 120).header.theme_marker, "dark");

    assert_eq!(expired, WorkerResponse::ThemeLoaded { dark: false });
}
