//! Form Fields
//!
//! Labelled inputs bound to string signals, with an inline error line.

use leptos::*;
use loansewa_core::validation::ValidationErrors;

#[component]
pub fn TextField(
    label: &'static str,
    value: RwSignal<String>,
    #[prop(default = "text")]
    input_type: &'static str,
    #[prop(default = "")]
    placeholder: &'static str,
    #[prop(into, optional)]
    error: MaybeSignal<Option<String>>,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm font-medium text-gray-700 mb-1">{label}</label>
            <input
                type=input_type
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                class="w-full rounded-lg border border-gray-300 px-4 py-2
                       focus:border-indigo-500 focus:outline-none"
            />
            {move || error.get().map(|msg| view! {
                <p class="mt-1 text-xs text-red-600">{msg}</p>
            })}
        </div>
    }
}

#[component]
pub fn SelectField(
    label: &'static str,
    value: RwSignal<String>,
    options: &'static [&'static str],
    #[prop(into, optional)]
    error: MaybeSignal<Option<String>>,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm font-medium text-gray-700 mb-1">{label}</label>
            <select
                on:change=move |ev| value.set(event_target_value(&ev))
                class="w-full rounded-lg border border-gray-300 px-4 py-2 bg-white
                       focus:border-indigo-500 focus:outline-none"
            >
                {options.iter().map(|option| {
                    let option = *option;
                    view! {
                        <option value=option selected=move || value.get() == option>{option}</option>
                    }
                }).collect_view()}
            </select>
            {move || error.get().map(|msg| view! {
                <p class="mt-1 text-xs text-red-600">{msg}</p>
            })}
        </div>
    }
}

/// Form-level error banner (e.g. the API's `detail`)
#[component]
pub fn FormError(message: RwSignal<Option<String>>) -> impl IntoView {
    move || {
        message.get().map(|msg| view! {
            <div class="rounded-lg bg-red-50 border border-red-200 px-4 py-3 text-sm text-red-700">
                {msg}
            </div>
        })
    }
}

/// Inline error for one field of a validated form
pub fn field_error(errors: RwSignal<ValidationErrors>, field: &'static str) -> Signal<Option<String>> {
    Signal::derive(move || errors.with(|e| e.for_field(field).map(str::to_string)))
}
