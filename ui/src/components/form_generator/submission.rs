use formgen::form::FormValues;
use leptos::prelude::*;

/// Shows the values of the last successful submit until dismissed
#[component]
pub fn SubmissionPanel(values: RwSignal<Option<FormValues>>) -> impl IntoView {
    move || {
        values.get().map(|submitted| {
            let body = submitted
                .to_pretty_json()
                .unwrap_or_else(|e| format!("Could not display values: {}", e));
            view! {
                <div class="mt-4 p-3 border border-green-300 bg-green-50 rounded-md">
                    <div class="flex justify-between items-center mb-2">
                        <span class="text-sm font-medium text-green-800">"Form submitted:"</span>
                        <button
                            type="button"
                            class="text-xs px-2 py-1 bg-white hover:bg-gray-100 text-gray-600 rounded border"
                            on:click=move |_| values.set(None)
                        >
                            "Close"
                        </button>
                    </div>
                    <pre class="text-xs font-mono whitespace-pre-wrap">{body}</pre>
                </div>
            }
        })
    }
}
