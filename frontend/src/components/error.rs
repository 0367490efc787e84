use crate::api::{ApiError, ErrorKind};
use leptos::*;

fn error_heading(error: &ApiError) -> &'static str {
    match error.kind() {
        ErrorKind::Request => "The backend rejected the request",
        ErrorKind::Network => "The backend could not be reached",
        ErrorKind::Validation => "Some fields need attention",
        ErrorKind::Unknown => "Something went wrong",
    }
}

#[component]
pub fn InlineErrorMessage(#[prop(into)] error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div class="bg-red-50 border border-red-200 text-red-700 px-4 py-3 rounded space-y-1 my-2">
                <div class="font-bold">{move || error.get().map(|e| error_heading(&e)).unwrap_or_default()}</div>
                <div class="text-sm">{move || error.get().map(|e| e.error).unwrap_or_default()}</div>
                {move || {
                    error
                        .get()
                        .and_then(|e| e.status())
                        .map(|status| view! { <div class="text-xs opacity-75">{format!("Status: {}", status)}</div> })
                }}
            </div>
        </Show>
    }
}
