use leptos::*;
use leptos_router::*;

use placemark_boundary::{Place, PlaceCategory};
use placemark_core::pagination::ListState;
use placemark_frontend_api::{PlaceApi, PlaceQuery};

use crate::{commit_page, components::*, confirmed, error_message, place_path, Page};

#[component]
pub fn Places(place_api: PlaceApi) -> impl IntoView {
    // -- signals -- //

    let state = create_rw_signal(ListState::<Place>::default());
    let category = create_rw_signal(None::<PlaceCategory>);
    let reload = create_trigger();

    // -- memos -- //

    let navigation = create_memo(move |_| state.with(ListState::navigation));

    // -- effects -- //

    create_effect(move |_| {
        reload.track();
        navigation.track();
        let query = PlaceQuery {
            page: Some(state.with_untracked(ListState::page)),
            size: None,
            category: category.get(),
        };
        let Some(ticket) = state.try_update(ListState::start_fetch) else {
            return;
        };
        spawn_local(async move {
            let result = place_api
                .list(&query)
                .await
                .map_err(|err| error_message("Unable to fetch places", &err));
            commit_page(state, ticket, result);
        });
    });

    // -- actions -- //

    let delete_place = create_action(move |id: &String| {
        let id = id.clone();
        async move {
            match place_api.remove(&id).await {
                Ok(()) => {
                    log::info!("Deleted place {id}");
                    reload.notify();
                }
                Err(err) => {
                    let msg = error_message("Unable to delete place", &err);
                    state.update(|s| s.fail(msg));
                }
            }
        }
    });

    // -- callbacks -- //

    let on_category = move |selected: Option<PlaceCategory>| {
        batch(|| {
            state.update(ListState::reset_page);
            category.set(selected);
        });
    };

    let on_delete = move |id: String| {
        if confirmed("Delete this place?") {
            delete_place.dispatch(id);
        }
    };

    view! {
      <section>
        <div class="container p-6 mx-auto">
          <div class="mb-6 flex items-center justify-between">
            <h2 class="text-2xl font-bold text-gray-900">"Places"</h2>
            <A href=Page::NewPlace.path() class="font-semibold".to_string()>"New place"</A>
          </div>
          <CategoryFilter selected = category.into() on_change = on_category />
          <PlaceList state on_delete />
          <Pager state />
        </div>
      </section>
    }
}

/// Renders the held page of a place list.
#[component]
pub fn PlaceList<F>(state: RwSignal<ListState<Place>>, on_delete: F) -> impl IntoView
where
    F: Fn(String) + 'static + Copy,
{
    let error = move || state.with(|s| s.error().map(ToString::to_string));
    let loading = move || state.with(ListState::is_loading);
    let places = move || state.with(|s| s.current().map(|p| p.content.clone()));

    view! {
      { move || error().map(|message| view! { <ErrorNotice message /> }) }
      { move || loading().then(|| view! { <Loading /> }) }
      { move || match places() {
          Some(places) if places.is_empty() => view! {
            <p class="text-gray-500">"No places could be found."</p>
          }.into_view(),
          Some(places) => view! {
            <ul role="list" class="divide-y divide-gray-100">
              {
                places
                  .into_iter()
                  .map(|place| view! { <PlaceListItem place on_delete /> })
                  .collect_view()
              }
            </ul>
          }.into_view(),
          None => ().into_view(),
        }
      }
    }
}

#[component]
fn PlaceListItem<F>(place: Place, on_delete: F) -> impl IntoView
where
    F: Fn(String) + 'static + Copy,
{
    let Place {
        id,
        name,
        category,
        latitude,
        longitude,
        visit_radius_meters,
        ..
    } = place;

    view! {
      <li class="flex items-center justify-between gap-x-6 py-5">
        <div class="min-w-0">
          <div class="flex items-start gap-x-3">
            <p class="text-sm font-semibold leading-6 text-gray-900">
              <A href=place_path(&id)>{ name }</A>
            </p>
            <p class="rounded-md whitespace-nowrap mt-0.5 px-1.5 py-0.5 text-xs font-medium ring-1 ring-inset text-gray-600 bg-gray-50 ring-gray-500/10">
              { category.as_str() }
            </p>
          </div>
          <p class="mt-1 text-xs leading-5 text-gray-500">
            { format!("{latitude:.5} / {longitude:.5}") }
            " · "
            { format!("{visit_radius_meters} m") }
          </p>
        </div>
        <div class="flex flex-none items-center gap-x-4">
          <button
            class="rounded-md bg-white px-2.5 py-1.5 text-sm font-semibold text-gray-900 shadow-sm ring-1 ring-inset ring-gray-300 hover:bg-gray-50"
            on:click = move |_| on_delete(id.clone())
          >
            "delete"
          </button>
        </div>
      </li>
    }
}
