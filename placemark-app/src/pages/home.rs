use leptos::*;
use leptos_router::*;

use crate::Page;

#[component]
pub fn Home() -> impl IntoView {
    view! {
      <section>
        <div class="container p-6 mx-auto">
          <h1 class="text-3xl font-bold tracking-tight text-gray-900">"Placemark"</h1>
          <p class="mt-4 text-gray-500">
            "Collect places worth visiting and organize them in groups."
          </p>
          <div class="mt-8 flex gap-x-4">
            <A href=Page::Places.path() class="font-semibold".to_string()>"Browse places"</A>
            <A href=Page::NearSearch.path() class="font-semibold".to_string()>"Find nearby"</A>
            <A href=Page::Groups.path() class="font-semibold".to_string()>"Groups"</A>
          </div>
        </div>
      </section>
    }
}
