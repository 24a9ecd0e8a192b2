use leptos::{ev, *};

use placemark_boundary::Place;
use placemark_core::{
    pagination::ListState,
    validate::{NearForm, NearSearch as Search, Validate},
};
use placemark_frontend_api::{NearQuery, PlaceApi};

use crate::{commit_page, components::*, confirmed, error_message, PlaceList};

#[component]
pub fn NearSearch(place_api: PlaceApi) -> impl IntoView {
    // -- signals -- //

    let form = create_rw_signal(NearForm::default());
    let (invalid, set_invalid) = create_signal(None::<String>);
    let search = create_rw_signal(None::<Search>);
    let state = create_rw_signal(ListState::<Place>::default());
    let reload = create_trigger();

    // -- memos -- //

    let navigation = create_memo(move |_| state.with(ListState::navigation));

    // -- effects -- //

    create_effect(move |_| {
        reload.track();
        navigation.track();
        let page = state.with_untracked(ListState::page);
        let Some(Search {
            lat,
            lon,
            radius_meters,
            category,
        }) = search.get()
        else {
            return;
        };
        let query = NearQuery {
            category,
            page: Some(page),
            ..NearQuery::new(lat, lon, radius_meters)
        };
        let Some(ticket) = state.try_update(ListState::start_fetch) else {
            return;
        };
        spawn_local(async move {
            let result = place_api
                .near(&query)
                .await
                .map_err(|err| error_message("Unable to search nearby places", &err));
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

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        match form.with(NearForm::validate) {
            Ok(valid) => {
                set_invalid.set(None);
                batch(|| {
                    state.update(ListState::clear);
                    search.set(Some(valid));
                });
            }
            Err(err) => {
                set_invalid.set(Some(err.to_string()));
            }
        }
    };

    let on_delete = move |id: String| {
        if confirmed("Delete this place?") {
            delete_place.dispatch(id);
        }
    };

    view! {
      <section>
        <div class="container p-6 mx-auto">
          <h2 class="mb-6 text-2xl font-bold text-gray-900">"Nearby places"</h2>
          <form class="mb-6 grid grid-cols-1 gap-x-4 sm:grid-cols-4" on:submit=on_submit>
            <Field
              label = "Latitude"
              input_type = "number"
              value = move || form.with(|f| f.lat.clone())
              on_input = move |v| form.update(|f| f.lat = v)
            />
            <Field
              label = "Longitude"
              input_type = "number"
              value = move || form.with(|f| f.lon.clone())
              on_input = move |v| form.update(|f| f.lon = v)
            />
            <Field
              label = "Radius (m)"
              input_type = "number"
              value = move || form.with(|f| f.radius_meters.clone())
              on_input = move |v| form.update(|f| f.radius_meters = v)
            />
            <label class="mb-4 block">
              <span class="mb-1 block text-sm font-medium text-gray-700">"Category"</span>
              <CategorySelect
                selected = Signal::derive(move || form.with(|f| f.category))
                on_change = move |category| form.update(|f| f.category = category)
                allow_all = true
              />
            </label>
            <div>
              <button
                type="submit"
                class="inline-block px-6 py-2.5 font-medium text-xs leading-tight uppercase rounded shadow-md bg-gray-100 hover:bg-gray-900 hover:text-white"
              >
                "Search"
              </button>
            </div>
          </form>
          { move || invalid.get().map(|message| view! { <ErrorNotice message /> }) }
          <Show when = move || search.with(Option::is_some)>
            <PlaceList state on_delete />
            <Pager state />
          </Show>
        </div>
      </section>
    }
}
