use leptos::{ev, *};
use leptos_router::*;

use placemark_boundary::{Place, PlaceGroup};
use placemark_core::validate;
use placemark_frontend_api::{GroupApi, PlaceApi, PlaceQuery};

use crate::{components::*, confirmed, error_message, place_path, Page};

/// Number of places offered by the membership picker.
const PLACE_CHOICES: u32 = 100;

#[derive(Debug, Clone)]
enum Membership {
    Add(String),
    Remove(String),
}

#[allow(clippy::too_many_lines)]
#[component]
pub fn GroupDetail(group_api: GroupApi, place_api: PlaceApi) -> impl IntoView {
    // -- signals -- //

    let params = use_params_map();
    let group_id = create_memo(move |_| params.with(|p| p.get("id").cloned()));
    let group = create_rw_signal(None::<PlaceGroup>);
    let (error, set_error) = create_signal(None::<String>);
    let (place_id, set_place_id) = create_signal(String::new());

    // -- actions -- //

    let fetch_group = create_action(move |id: &String| {
        let id = id.to_owned();
        async move {
            match group_api.get(&id).await {
                Ok(g) => {
                    group.set(Some(g));
                    set_error.set(None);
                }
                Err(err) => {
                    group.set(None);
                    set_error.set(Some(error_message("Unable to fetch group", &err)));
                }
            }
        }
    });

    let fetch_places = create_action(move |()| async move {
        let query = PlaceQuery {
            size: Some(PLACE_CHOICES),
            ..Default::default()
        };
        match place_api.list(&query).await {
            Ok(page) => page.content,
            Err(err) => {
                log::warn!("Unable to fetch places to choose from: {err}");
                vec![]
            }
        }
    });

    let update_membership = create_action(move |membership: &Membership| {
        let membership = membership.clone();
        async move {
            let Some(id) = group_id.get_untracked() else {
                return;
            };
            let result = match &membership {
                Membership::Add(place_id) => group_api.add_place(&id, place_id).await,
                Membership::Remove(place_id) => group_api.remove_place(&id, place_id).await,
            };
            match result {
                Ok(g) => {
                    log::info!("Updated members of group {id}: {membership:?}");
                    group.set(Some(g));
                    set_place_id.set(String::new());
                    set_error.set(None);
                }
                Err(err) => {
                    set_error.set(Some(error_message("Unable to update group", &err)));
                }
            }
        }
    });

    let navigate = use_navigate();
    let delete_group = create_action(move |id: &String| {
        let id = id.to_owned();
        let navigate = navigate.clone();
        async move {
            match group_api.remove(&id).await {
                Ok(()) => {
                    log::info!("Deleted group {id}");
                    navigate(Page::Groups.path(), NavigateOptions::default());
                }
                Err(err) => {
                    set_error.set(Some(error_message("Unable to delete group", &err)));
                }
            }
        }
    });

    fetch_places.dispatch(());

    // -- effects -- //

    create_effect(move |_| {
        if let Some(id) = group_id.get() {
            fetch_group.dispatch(id);
        }
    });

    // -- callbacks -- //

    let on_add = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        match place_id.with(|id| validate::place_id(id)) {
            Ok(id) => update_membership.dispatch(Membership::Add(id)),
            Err(invalid) => set_error.set(Some(invalid.to_string())),
        }
    };

    let on_remove = move |id: String| {
        update_membership.dispatch(Membership::Remove(id));
    };

    let on_refresh = move |_: ev::MouseEvent| {
        if let Some(id) = group_id.get_untracked() {
            fetch_group.dispatch(id);
        }
    };

    let on_delete = move |_: ev::MouseEvent| {
        if let Some(id) = group_id.get_untracked() {
            if confirmed("Delete this group?") {
                delete_group.dispatch(id);
            }
        }
    };

    let places = Signal::derive(move || fetch_places.value().get().unwrap_or_default());
    let busy = Signal::derive(move || update_membership.pending().get());

    view! {
      <section>
        <div class="container p-6 mx-auto max-w-2xl">
          { move || error.get().map(|message| view! { <ErrorNotice message /> }) }
          { move || fetch_group.pending().get().then(|| view! { <Loading /> }) }
          { move || group.get().map(|group| view! { <GroupProfile group places on_remove /> }) }
          <form class="mt-8" on:submit=on_add>
            <h3 class="mb-4 text-base font-semibold text-gray-900">"Add a place"</h3>
            <label class="mb-4 block">
              <span class="mb-1 block text-sm font-medium text-gray-700">"Choose a place"</span>
              <select
                class="rounded border border-gray-300 bg-white px-3 py-1.5 text-sm text-gray-700"
                prop:value = move || place_id.get()
                prop:disabled = move || busy.get()
                on:change = move |ev| set_place_id.set(event_target_value(&ev))
              >
                <option value="">"-"</option>
                { move || places
                    .get()
                    .into_iter()
                    .map(|place| view! { <option value=place.id>{ place.name }</option> })
                    .collect_view()
                }
              </select>
            </label>
            <Field
              label = "or enter a place ID"
              value = move || place_id.get()
              on_input = move |v| set_place_id.set(v)
              disabled = busy
            />
            <button
              type="submit"
              class="inline-block px-6 py-2.5 font-medium text-xs leading-tight uppercase rounded shadow-md bg-gray-100 hover:bg-gray-900 hover:text-white"
              prop:disabled = move || busy.get()
            >
              "Add"
            </button>
          </form>
          <div class="mt-8 flex gap-x-4">
            <A href=Page::Groups.path() class="font-semibold".to_string()>"Back to groups"</A>
            <button
              class="rounded-md bg-white px-2.5 py-1.5 text-sm font-semibold text-gray-900 shadow-sm ring-1 ring-inset ring-gray-300 hover:bg-gray-50"
              on:click = on_refresh
            >
              "Refresh"
            </button>
            <button
              class="rounded-md bg-white px-2.5 py-1.5 text-sm font-semibold text-red-700 shadow-sm ring-1 ring-inset ring-gray-300 hover:bg-gray-50"
              on:click = on_delete
            >
              "Delete"
            </button>
          </div>
        </div>
      </section>
    }
}

#[component]
fn GroupProfile<F>(group: PlaceGroup, places: Signal<Vec<Place>>, on_remove: F) -> impl IntoView
where
    F: Fn(String) + 'static + Copy,
{
    let PlaceGroup {
        name,
        description,
        place_ids,
        created_at,
        updated_at,
        ..
    } = group;

    // Members are listed by id, names are only known for the loaded choices.
    let place_name = move |id: &str| {
        places.with(|places| {
            places
                .iter()
                .find(|p| p.id == id)
                .map(|p| p.name.clone())
        })
    };

    view! {
      <div>
        <h2 class="text-3xl font-bold tracking-tight text-gray-900">{ name }</h2>
        { description.map(|d| view! { <p class="mt-4 text-gray-500">{ d }</p> }) }
        <p class="mt-2 text-xs text-gray-500">
          "Created " <Timestamp raw = created_at />
          " · updated " <Timestamp raw = updated_at />
        </p>
        <h3 class="mt-8 mb-2 text-base font-semibold text-gray-900">"Places"</h3>
        {
          if place_ids.is_empty() {
            view! { <p class="text-gray-500">"This group has no places yet."</p> }.into_view()
          } else {
            view! {
              <ul role="list" class="divide-y divide-gray-100">
                {
                  place_ids
                    .into_iter()
                    .map(|id| {
                      let href = place_path(&id);
                      let remove_id = id.clone();
                      let label = move || place_name(&id).unwrap_or_else(|| id.clone());
                      view! {
                        <li class="flex items-center justify-between py-3">
                          <A href=href>{ label }</A>
                          <button
                            class="rounded-md bg-white px-2.5 py-1.5 text-sm font-semibold text-gray-900 shadow-sm ring-1 ring-inset ring-gray-300 hover:bg-gray-50"
                            on:click = move |_| on_remove(remove_id.clone())
                          >
                            "remove"
                          </button>
                        </li>
                      }
                    })
                    .collect_view()
                }
              </ul>
            }.into_view()
          }
        }
      </div>
    }
}
