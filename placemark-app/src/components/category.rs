use leptos::*;

use placemark_boundary::PlaceCategory;

const CHIP: &str = "rounded-full px-3 py-1 text-xs font-medium ring-1 ring-inset";
const CHIP_ACTIVE: &str = "bg-gray-900 text-white ring-gray-900";
const CHIP_INACTIVE: &str = "bg-white text-gray-700 ring-gray-300 hover:bg-gray-50";

fn chip_class(active: bool) -> String {
    let state = if active { CHIP_ACTIVE } else { CHIP_INACTIVE };
    format!("{CHIP} {state}")
}

/// Category filter rendered as chips and a select box.
///
/// `None` means "all categories".
#[component]
pub fn CategoryFilter<F>(selected: Signal<Option<PlaceCategory>>, on_change: F) -> impl IntoView
where
    F: Fn(Option<PlaceCategory>) + 'static + Copy,
{
    view! {
      <div class="mb-4 flex flex-wrap items-center gap-2">
        <button
          class = move || chip_class(selected.get().is_none())
          on:click = move |_| on_change(None)
        >
          "All"
        </button>
        {
          PlaceCategory::ALL
            .into_iter()
            .map(move |category| view! {
              <button
                class = move || chip_class(selected.get() == Some(category))
                on:click = move |_| on_change(Some(category))
              >
                { category.as_str() }
              </button>
            })
            .collect_view()
        }
        <CategorySelect
          selected
          on_change
          allow_all = true
        />
      </div>
    }
}

#[component]
pub fn CategorySelect<F>(
    selected: Signal<Option<PlaceCategory>>,
    on_change: F,
    #[prop(optional)] allow_all: bool,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
) -> impl IntoView
where
    F: Fn(Option<PlaceCategory>) + 'static + Copy,
{
    view! {
      <select
        class="rounded border border-gray-300 bg-white px-3 py-1.5 text-sm text-gray-700"
        prop:value = move || selected.get().map(PlaceCategory::as_str).unwrap_or_default()
        prop:disabled = move || disabled.get()
        on:change = move |ev| {
          let value = event_target_value(&ev);
          on_change(value.parse().ok());
        }
      >
        { allow_all.then(|| view! { <option value="">"All categories"</option> }) }
        {
          PlaceCategory::ALL
            .into_iter()
            .map(|category| view! {
              <option value=category.as_str()>{ category.as_str() }</option>
            })
            .collect_view()
        }
      </select>
    }
}
