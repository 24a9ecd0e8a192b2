use leptos::*;

#[component]
pub fn ErrorNotice(message: String) -> impl IntoView {
    view! {
      <p role="alert" class="mb-4 rounded bg-red-50 p-3 text-red-700">{ message }</p>
    }
}

#[component]
pub fn Loading(#[prop(default = "Loading ...")] label: &'static str) -> impl IntoView {
    view! { <p class="mb-4 text-gray-500">{ label }</p> }
}

/// Human readable server timestamp.
#[component]
pub fn Timestamp(raw: String) -> impl IntoView {
    let formatted = placemark_core::timestamp::format_timestamp(&raw);
    view! { <time datetime=raw>{ formatted }</time> }
}
