use leptos::*;

const FIELD_CLASSES: &str = "mt-1 w-full rounded-md border border-gray-300 px-3 py-2 focus:outline-none focus:ring-2 focus:ring-blue-500";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

#[component]
pub fn TextInput(
    #[prop(into)] label: String,
    value: RwSignal<String>,
    #[prop(optional, into)] input_type: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
) -> impl IntoView {
    let input_type = input_type.unwrap_or_else(|| "text".to_string());
    view! {
        <label class="block text-sm mb-3">
            <span class="text-gray-700 font-medium">{label}</span>
            <input
                type=input_type
                class=FIELD_CLASSES
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </label>
    }
}

/// Native date control; the bound value is the `YYYY-MM-DD` string the browser reports.
#[component]
pub fn DateInput(#[prop(into)] label: String, value: RwSignal<String>) -> impl IntoView {
    view! { <TextInput label=label value=value input_type="date" /> }
}

#[component]
pub fn TextArea(
    #[prop(into)] label: String,
    value: RwSignal<String>,
    #[prop(default = 3)] rows: u32,
    #[prop(optional, into)] placeholder: Option<String>,
) -> impl IntoView {
    view! {
        <label class="block text-sm mb-3">
            <span class="text-gray-700 font-medium">{label}</span>
            <textarea
                rows=rows
                class=FIELD_CLASSES
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            ></textarea>
        </label>
    }
}

/// Select with a leading empty option; choosing it sets the value back to "".
#[component]
pub fn SelectInput(
    #[prop(into)] label: String,
    value: RwSignal<String>,
    #[prop(into)] options: Signal<Vec<SelectOption>>,
    #[prop(into)] placeholder: String,
) -> impl IntoView {
    view! {
        <label class="block text-sm mb-3">
            <span class="text-gray-700 font-medium">{label}</span>
            <select
                class=FIELD_CLASSES
                prop:value=move || value.get()
                on:change=move |ev| value.set(event_target_value(&ev))
            >
                <option value="">{placeholder}</option>
                {move || {
                    options
                        .get()
                        .into_iter()
                        .map(|option| {
                            let selected = value.get_untracked() == option.value;
                            view! {
                                <option value=option.value selected=selected>
                                    {option.label}
                                </option>
                            }
                        })
                        .collect_view()
                }}
            </select>
        </label>
    }
}
