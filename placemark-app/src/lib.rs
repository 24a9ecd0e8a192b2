use anyhow::anyhow;
use leptos::{wasm_bindgen::JsValue, *};
use leptos_router::*;

use placemark_boundary as boundary;
use placemark_core::pagination::{ListState, Ticket};
use placemark_frontend_api::{self as api, GroupApi, PlaceApi};

mod pages;
use pages::*;

mod components;
use components::*;

const DEFAULT_API_URL: &str = "/api";

/// Base URL of the REST API, resolved at build time.
const API_URL: &str = match option_env!("PLACEMARK_API_URL") {
    Some(url) => url,
    None => DEFAULT_API_URL,
};

#[component]
#[must_use]
pub fn App() -> impl IntoView {
    // -- init API -- //

    log::debug!("Use API at {API_URL}");
    let place_api = PlaceApi::new(API_URL);
    let group_api = GroupApi::new(API_URL);

    view! {
      <Router>
        <NavBar />
        <main>
          <Routes>
            <Route
              path=Page::Home.path()
              view=Home
            />
            <Route
              path=Page::Places.path()
              view=move || view! { <Places place_api /> }
            />
            <Route
              path=Page::NewPlace.path()
              view=move || view! { <PlaceCreate place_api /> }
            />
            <Route
              path=Page::NearSearch.path()
              view=move || view! { <NearSearch place_api /> }
            />
            <Route
              path=format!("{}/:id", Page::Places.path())
              view=move || view! { <PlaceDetail place_api /> }
            />
            <Route
              path=Page::Groups.path()
              view=move || view! { <Groups group_api /> }
            />
            <Route
              path=Page::NewGroup.path()
              view=move || view! { <GroupCreate group_api /> }
            />
            <Route
              path=format!("{}/:id", Page::Groups.path())
              view=move || view! { <GroupDetail group_api place_api /> }
            />
            <Route
              path=Page::Map.path()
              view=Map
            />
          </Routes>
        </main>
      </Router>
    }
}

/// Turns a failed flow into a message for the user.
fn error_message(context: &str, err: &api::Error) -> String {
    log::warn!("{context}: {err}");
    err.user_message()
}

/// Commits a fetched page unless a newer fetch has been started meanwhile.
fn commit_page<T>(
    state: RwSignal<ListState<T>>,
    ticket: Ticket,
    result: Result<boundary::Page<T>, String>,
)
where
    T: 'static,
{
    let committed = state
        .try_update(|s| s.finish_fetch(ticket, result))
        .unwrap_or_default();
    if !committed {
        log::debug!("Discard result of a superseded fetch");
    }
}

fn confirm(message: &str) -> anyhow::Result<bool> {
    window().confirm_with_message(message).map_err(js_error)
}

/// Asks the user before a destructive operation.
fn confirmed(message: &str) -> bool {
    confirm(message).unwrap_or_else(|err| {
        log::warn!("Unable to ask for confirmation: {err}");
        false
    })
}

fn js_error(err: JsValue) -> anyhow::Error {
    anyhow!(err
        .as_string()
        .unwrap_or_else(|| "unknown JS error".to_string()))
}
