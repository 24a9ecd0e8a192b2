use leptos::*;

// TODO: render places on a tile map once a map component is available.
#[component]
pub fn Map() -> impl IntoView {
    view! {
      <section>
        <div class="container p-6 mx-auto">
          <h2 class="text-2xl font-bold text-gray-900">"Map"</h2>
          <p class="mt-4 text-gray-500">"The map view is not available yet."</p>
        </div>
      </section>
    }
}
