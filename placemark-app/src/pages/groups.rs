use leptos::{ev, *};
use leptos_router::*;

use placemark_boundary::{NewPlaceGroup, PlaceGroup};
use placemark_core::{
    pagination::ListState,
    validate::{GroupForm, Validate},
};
use placemark_frontend_api::{GroupApi, GroupQuery};

use crate::{commit_page, components::*, confirmed, error_message, group_path, Page};

#[component]
pub fn Groups(group_api: GroupApi) -> impl IntoView {
    // -- signals -- //

    let state = create_rw_signal(ListState::<PlaceGroup>::default());
    let reload = create_trigger();

    // -- memos -- //

    let navigation = create_memo(move |_| state.with(ListState::navigation));

    // -- effects -- //

    create_effect(move |_| {
        reload.track();
        navigation.track();
        let query = GroupQuery {
            page: Some(state.with_untracked(ListState::page)),
            size: None,
        };
        let Some(ticket) = state.try_update(ListState::start_fetch) else {
            return;
        };
        spawn_local(async move {
            let result = group_api
                .list(&query)
                .await
                .map_err(|err| error_message("Unable to fetch groups", &err));
            commit_page(state, ticket, result);
        });
    });

    // -- actions -- //

    let delete_group = create_action(move |id: &String| {
        let id = id.clone();
        async move {
            match group_api.remove(&id).await {
                Ok(()) => {
                    log::info!("Deleted group {id}");
                    reload.notify();
                }
                Err(err) => {
                    let msg = error_message("Unable to delete group", &err);
                    state.update(|s| s.fail(msg));
                }
            }
        }
    });

    // -- callbacks -- //

    let on_delete = move |id: String| {
        if confirmed("Delete this group?") {
            delete_group.dispatch(id);
        }
    };

    let groups = move || state.with(|s| s.current().map(|p| p.content.clone()));

    view! {
      <section>
        <div class="container p-6 mx-auto">
          <div class="mb-6 flex items-center justify-between">
            <h2 class="text-2xl font-bold text-gray-900">"Groups"</h2>
            <A href=Page::NewGroup.path() class="font-semibold".to_string()>"New group"</A>
          </div>
          { move || state.with(|s| s.error().map(ToString::to_string)).map(|message| view! { <ErrorNotice message /> }) }
          { move || state.with(ListState::is_loading).then(|| view! { <Loading /> }) }
          { move || match groups() {
              Some(groups) if groups.is_empty() => view! {
                <p class="text-gray-500">"No groups could be found."</p>
              }.into_view(),
              Some(groups) => view! {
                <ul role="list" class="divide-y divide-gray-100">
                  {
                    groups
                      .into_iter()
                      .map(|group| view! { <GroupListItem group on_delete /> })
                      .collect_view()
                  }
                </ul>
              }.into_view(),
              None => ().into_view(),
            }
          }
          <Pager state />
        </div>
      </section>
    }
}

#[component]
fn GroupListItem<F>(group: PlaceGroup, on_delete: F) -> impl IntoView
where
    F: Fn(String) + 'static + Copy,
{
    let PlaceGroup {
        id,
        name,
        description,
        place_ids,
        ..
    } = group;
    let count = place_ids.len();

    view! {
      <li class="flex items-center justify-between gap-x-6 py-5">
        <div class="min-w-0">
          <p class="text-sm font-semibold leading-6 text-gray-900">
            <A href=group_path(&id)>{ name }</A>
          </p>
          <p class="mt-1 text-xs leading-5 text-gray-500">
            { format!("{count} places") }
            { description.map(|d| format!(" · {d}")) }
          </p>
        </div>
        <button
          class="rounded-md bg-white px-2.5 py-1.5 text-sm font-semibold text-red-700 shadow-sm ring-1 ring-inset ring-gray-300 hover:bg-gray-50"
          on:click = move |_| on_delete(id.clone())
        >
          "delete"
        </button>
      </li>
    }
}

#[component]
pub fn GroupCreate(group_api: GroupApi) -> impl IntoView {
    // -- signals -- //

    let form = create_rw_signal(GroupForm::default());
    let (error, set_error) = create_signal(None::<String>);
    let (wait_for_response, set_wait_for_response) = create_signal(false);

    // -- actions -- //

    let navigate = use_navigate();
    let create_group = create_action(move |group: &NewPlaceGroup| {
        let group = group.clone();
        let navigate = navigate.clone();
        async move {
            set_wait_for_response.set(true);
            let result = group_api.create(&group).await;
            set_wait_for_response.set(false);
            match result {
                Ok(group) => {
                    log::info!("Created group {}", group.id);
                    navigate(&group_path(&group.id), NavigateOptions::default());
                }
                Err(err) => {
                    set_error.set(Some(error_message("Unable to create group", &err)));
                }
            }
        }
    });

    // -- callbacks -- //

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        match form.with(GroupForm::validate) {
            Ok(group) => {
                set_error.set(None);
                create_group.dispatch(group);
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
          <h2 class="mb-6 text-2xl font-bold text-gray-900">"New group"</h2>
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
