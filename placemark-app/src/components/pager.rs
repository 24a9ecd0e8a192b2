use leptos::*;

use placemark_core::pagination::ListState;

/// Previous/next navigation of a paged list.
///
/// Moving to another page changes the page index of the list state
/// which in turn triggers a new fetch in the owning view.
#[component]
pub fn Pager<T>(state: RwSignal<ListState<T>>) -> impl IntoView
where
    T: 'static,
{
    let summary = move || {
        state.with(|s| {
            s.current().map(|page| {
                format!(
                    "Page {} of {} ({} total)",
                    page.number + 1,
                    page.total_pages.max(1),
                    page.total_elements
                )
            })
        })
    };
    let previous_disabled = move || {
        state.with(|s| s.is_loading() || s.page() == 0 || s.current().is_none_or(|p| p.first))
    };
    let next_disabled =
        move || state.with(|s| s.is_loading() || s.current().is_none_or(|p| p.last));

    view! {
      <div class="mt-4 flex items-center justify-between">
        <button
          class="rounded-md bg-white px-2.5 py-1.5 text-sm font-semibold text-gray-900 shadow-sm ring-1 ring-inset ring-gray-300 hover:bg-gray-50 disabled:opacity-50"
          prop:disabled = previous_disabled
          on:click = move |_| state.update(|s| {
            s.previous_page();
          })
        >
          "Previous"
        </button>
        <p class="text-sm text-gray-500">{ summary }</p>
        <button
          class="rounded-md bg-white px-2.5 py-1.5 text-sm font-semibold text-gray-900 shadow-sm ring-1 ring-inset ring-gray-300 hover:bg-gray-50 disabled:opacity-50"
          prop:disabled = next_disabled
          on:click = move |_| state.update(|s| {
            s.next_page();
          })
        >
          "Next"
        </button>
      </div>
    }
}
