use leptos::*;

/// Labeled text input bound to a piece of raw form state.
#[component]
pub fn Field<G, S>(
    label: &'static str,
    value: G,
    on_input: S,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] multiline: bool,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
) -> impl IntoView
where
    G: Fn() -> String + 'static,
    S: Fn(String) + 'static,
{
    let class = "form-control block w-full px-3 py-1.5 text-base font-normal text-gray-700 bg-white border border-solid border-gray-300 rounded focus:border-gray-600 focus:outline-none";
    let input = if multiline {
        view! {
          <textarea
            class=class
            rows="4"
            prop:value = value
            prop:disabled = move || disabled.get()
            on:input = move |ev| on_input(event_target_value(&ev))
          ></textarea>
        }
        .into_view()
    } else {
        view! {
          <input
            type=input_type
            class=class
            prop:value = value
            prop:disabled = move || disabled.get()
            on:input = move |ev| on_input(event_target_value(&ev))
          />
        }
        .into_view()
    };
    view! {
      <label class="mb-4 block">
        <span class="mb-1 block text-sm font-medium text-gray-700">{ label }</span>
        { input }
      </label>
    }
}
