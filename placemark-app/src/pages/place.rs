use leptos::{ev, *};
use leptos_router::*;

use placemark_boundary::{NewPlace, Place};
use placemark_core::validate::{PlaceForm, Validate};
use placemark_frontend_api::PlaceApi;

use crate::{components::*, confirmed, error_message, group_path, place_path, Page};

#[component]
pub fn PlaceCreate(place_api: PlaceApi) -> impl IntoView {
    // -- signals -- //

    let form = create_rw_signal(PlaceForm::default());
    let (error, set_error) = create_signal(None::<String>);
    let (wait_for_response, set_wait_for_response) = create_signal(false);

    // -- actions -- //

    let navigate = use_navigate();
    let create_place = create_action(move |place: &NewPlace| {
        let place = place.clone();
        let navigate = navigate.clone();
        async move {
            set_wait_for_response.set(true);
            let result = place_api.create(&place).await;
            set_wait_for_response.set(false);
            match result {
                Ok(place) => {
                    log::info!("Created place {}", place.id);
                    navigate(&place_path(&place.id), NavigateOptions::default());
                }
                Err(err) => {
                    set_error.set(Some(error_message("Unable to create place", &err)));
                }
            }
        }
    });

    // -- callbacks -- //

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        match form.with(PlaceForm::validate) {
            Ok(place) => {
                set_error.set(None);
                create_place.dispatch(place);
            }
            Err(invalid) => {
                set_error.set(Some(invalid.to_string()));
            }
        }
    };

    let disabled = Signal::derive(move || wait_for_response.get());

    view! {
      <section>
        <div class="container p-6 mx-auto max-w-xl">
          <h2 class="mb-6 text-2xl font-bold text-gray-900">"New place"</h2>
          <form on:submit=on_submit>
            { move || error.get().map(|message| view! { <ErrorNotice message /> }) }
            <Field
              label = "Name"
              value = move || form.with(|f| f.name.clone())
              on_input = move |v| form.update(|f| f.name = v)
              disabled
            />
            <Field
              label = "Description"
              multiline = true
              value = move || form.with(|f| f.description.clone())
              on_input = move |v| form.update(|f| f.description = v)
              disabled
            />
            <label class="mb-4 block">
              <span class="mb-1 block text-sm font-medium text-gray-700">"Category"</span>
              <CategorySelect
                selected = Signal::derive(move || Some(form.with(|f| f.category)))
                on_change = move |category| {
                  if let Some(category) = category {
                    form.update(|f| f.category = category);
                  }
                }
                disabled
              />
            </label>
            <Field
              label = "Latitude"
              input_type = "number"
              value = move || form.with(|f| f.latitude.clone())
              on_input = move |v| form.update(|f| f.latitude = v)
              disabled
            />
            <Field
              label = "Longitude"
              input_type = "number"
              value = move || form.with(|f| f.longitude.clone())
              on_input = move |v| form.update(|f| f.longitude = v)
              disabled
            />
            <Field
              label = "Visit radius (m)"
              input_type = "number"
              value = move || form.with(|f| f.visit_radius_meters.clone())
              on_input = move |v| form.update(|f| f.visit_radius_meters = v)
              disabled
            />
            <button
              type="submit"
              class="inline-block px-6 py-2.5 font-medium text-xs leading-tight uppercase rounded shadow-md bg-gray-100 hover:bg-gray-900 hover:text-white"
              prop:disabled = move || disabled.get()
            >
              "Create"
            </button>
          </form>
        </div>
      </section>
    }
}

#[component]
pub fn PlaceDetail(place_api: PlaceApi) -> impl IntoView {
    // -- signals -- //

    let params = use_params_map();
    let place = create_rw_signal(None::<Place>);
    let (error, set_error) = create_signal(None::<String>);

    // -- actions -- //

    let fetch_place = create_action(move |id: &String| {
        let id = id.to_owned();
        async move {
            match place_api.get(&id).await {
                Ok(p) => {
                    place.set(Some(p));
                    set_error.set(None);
                }
                Err(err) => {
                    place.set(None);
                    set_error.set(Some(error_message("Unable to fetch place", &err)));
                }
            }
        }
    });

    let navigate = use_navigate();
    let delete_place = create_action(move |id: &String| {
        let id = id.to_owned();
        let navigate = navigate.clone();
        async move {
            match place_api.remove(&id).await {
                Ok(()) => {
                    log::info!("Deleted place {id}");
                    navigate(Page::Places.path(), NavigateOptions::default());
                }
                Err(err) => {
                    set_error.set(Some(error_message("Unable to delete place", &err)));
                }
            }
        }
    });

    // -- effects -- //

    create_effect(move |_| {
        if let Some(id) = params.with(|p| p.get("id").cloned()) {
            fetch_place.dispatch(id);
        }
    });

    // -- callbacks -- //

    let on_delete = move |id: String| {
        if confirmed("Delete this place?") {
            delete_place.dispatch(id);
        }
    };

    view! {
      <section>
        <div class="container p-6 mx-auto">
          { move || error.get().map(|message| view! { <ErrorNotice message /> }) }
          { move || fetch_place.pending().get().then(|| view! { <Loading /> }) }
          { move || place.get().map(|place| view! { <PlaceProfile place on_delete /> }) }
        </div>
      </section>
    }
}

#[component]
fn PlaceProfile<F>(place: Place, on_delete: F) -> impl IntoView
where
    F: Fn(String) + 'static + Copy,
{
    let Place {
        id,
        name,
        description,
        category,
        latitude,
        longitude,
        visit_radius_meters,
        group_ids,
        created_at,
        updated_at,
    } = place;

    view! {
      <div class="mx-auto max-w-2xl">
        <h2 class="text-3xl font-bold tracking-tight text-gray-900">{ name }</h2>
        { description.map(|d| view! { <p class="mt-4 text-gray-500">{ d }</p> }) }
        <dl class="mt-8 grid grid-cols-1 gap-x-6 gap-y-6 sm:grid-cols-2">
          <div class="border-t border-gray-200 pt-4">
            <dt class="font-medium text-gray-900">"Category"</dt>
            <dd class="mt-2 text-sm text-gray-500">{ category.as_str() }</dd>
          </div>
          <div class="border-t border-gray-200 pt-4">
            <dt class="font-medium text-gray-900">"Position"</dt>
            <dd class="mt-2 text-sm text-gray-500">{ format!("{latitude} / {longitude}") }</dd>
          </div>
          <div class="border-t border-gray-200 pt-4">
            <dt class="font-medium text-gray-900">"Visit radius"</dt>
            <dd class="mt-2 text-sm text-gray-500">{ format!("{visit_radius_meters} m") }</dd>
          </div>
          <div class="border-t border-gray-200 pt-4">
            <dt class="font-medium text-gray-900">"Groups"</dt>
            <dd class="mt-2 text-sm text-gray-500">
              {
                if group_ids.is_empty() {
                  view! { "none" }.into_view()
                } else {
                  group_ids
                    .into_iter()
                    .map(|id| view! { <A href=group_path(&id) class="mr-2".to_string()>{ id }</A> })
                    .collect_view()
                }
              }
            </dd>
          </div>
          <div class="border-t border-gray-200 pt-4">
            <dt class="font-medium text-gray-900">"Created"</dt>
            <dd class="mt-2 text-sm text-gray-500"><Timestamp raw = created_at /></dd>
          </div>
          <div class="border-t border-gray-200 pt-4">
            <dt class="font-medium text-gray-900">"Updated"</dt>
            <dd class="mt-2 text-sm text-gray-500"><Timestamp raw = updated_at /></dd>
          </div>
        </dl>
        <div class="mt-8 flex gap-x-4">
          <A href=Page::Places.path() class="font-semibold".to_string()>"Back to places"</A>
          <button
            class="rounded-md bg-white px-2.5 py-1.5 text-sm font-semibold text-red-700 shadow-sm ring-1 ring-inset ring-gray-300 hover:bg-gray-50"
            on:click = move |_| on_delete(id.clone())
          >
            "Delete"
          </button>
        </div>
      </div>
    }
}
