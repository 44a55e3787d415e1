//! Main Form Generator Component

use formgen::config::Settings;
use formgen::form::{FormPlan, FormState, FormValues};
use formgen::schema::SchemaStore;
use leptos::prelude::*;

use super::fields::FieldView;
use super::submission::SubmissionPanel;
use crate::components::json_editor::JsonEditor;

// ============================================================================
// Form Handle
// ============================================================================

/// Form state plus the plan its rules come from. Copied into every field
/// view so inputs can read and write their bound value.
#[derive(Clone, Copy)]
pub struct FormHandle {
    form: RwSignal<FormState>,
    plan: RwSignal<FormPlan>,
}

impl FormHandle {
    /// Tracked read of a field's value
    pub fn value(&self, id: &str) -> String {
        self.form.with(|f| f.value(id).to_string())
    }

    /// Tracked read of a field's current error
    pub fn error(&self, id: &str) -> Option<String> {
        self.form.with(|f| f.error(id).map(String::from))
    }

    pub fn set(&self, id: &str, value: String) {
        let plan = self.plan;
        self.form
            .update(|f| plan.with_untracked(|p| f.set_value(p, id, value)));
    }
}

// ============================================================================
// Main Component
// ============================================================================

/// Schema editor and live form preview
#[component]
pub fn FormGenerator(settings: Settings) -> impl IntoView {
    let form_settings = StoredValue::new(settings.form.clone());
    let rows = settings.editor.rows;
    let indent = settings.editor.indent;

    let store = RwSignal::new(SchemaStore::new(settings.editor.clone()));
    let draft = RwSignal::new(store.with_untracked(|s| s.text().to_string()));
    let plan = RwSignal::new(store.with_untracked(|s| {
        form_settings.with_value(|fs| FormPlan::build(s.current(), fs))
    }));
    let form = RwSignal::new(FormState::new(settings.form.validation_mode));
    let submitted = RwSignal::new(Option::<FormValues>::None);
    let handle = FormHandle { form, plan };

    // Re-run the renderer against the committed schema
    let rebuild = move || {
        let next = store.with_untracked(|s| {
            form_settings.with_value(|fs| FormPlan::build(s.current(), fs))
        });
        for warning in &next.warnings {
            log::warn!("{}", warning);
        }
        form.update(|f| f.sync_plan(&next));
        plan.set(next);
    };

    let on_edit = Callback::new(move |text: String| {
        draft.set(text.clone());
        let committed = store
            .try_update(|s| s.apply_edit(&text).is_ok())
            .unwrap_or(false);
        if committed {
            rebuild();
        }
    });

    let on_format = Callback::new(move |_: ()| {
        let formatted = store.try_update(|s| s.format().map(str::to_string));
        match formatted {
            Some(Ok(text)) => draft.set(text),
            Some(Err(e)) => log::warn!("Format skipped: {}", e),
            None => {}
        }
    });

    let on_reset = Callback::new(move |_: ()| {
        store.update(|s| s.reset());
        draft.set(store.with_untracked(|s| s.text().to_string()));
        form.update(|f| f.reset());
        submitted.set(None);
        rebuild();
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let outcome = plan.with_untracked(|p| form.try_update(|f| f.submit(p)));
        match outcome {
            Some(Ok(values)) => {
                log::info!("Form submitted with {} value(s)", values.len());
                submitted.set(Some(values));
            }
            Some(Err(blocked)) => log::debug!("{}", blocked),
            None => {}
        }
    };

    let error = Signal::derive(move || store.with(|s| s.error()));
    let error_location = Signal::derive(move || store.with(|s| s.error_location()));

    view! {
        <div class="flex space-x-4">
            // Left: JSON editor
            <div class="flex-1 p-4 border rounded-md bg-white">
                <h2 class="text-xl mb-4">"JSON Schema Editor"</h2>
                <JsonEditor
                    value=draft
                    on_input=on_edit
                    error=error
                    error_location=error_location
                    rows=rows
                    indent=indent
                    on_format=on_format
                    on_reset=on_reset
                />
            </div>

            // Right: form preview
            <div class="flex-1 p-4 border rounded-md bg-white">
                {move || plan.with(|p| view! {
                    <h2 class="text-xl mb-4">{p.title.clone()}</h2>
                    <p class="mb-4">{p.description.clone()}</p>
                    {(!p.warnings.is_empty()).then(|| view! {
                        <ul class="mb-4 p-3 text-sm text-amber-800 bg-amber-50 border border-amber-300 rounded">
                            {p.warnings.iter().map(|w| view! { <li>{w.to_string()}</li> }).collect_view()}
                        </ul>
                    })}
                    <form class="space-y-4" novalidate=true on:submit=on_submit>
                        {p.fields.iter().cloned().map(|field| view! {
                            <FieldView field=field handle=handle />
                        }).collect_view()}
                        <button
                            type="submit"
                            class="bg-blue-500 text-white p-2 rounded-md hover:bg-blue-600"
                        >
                            {p.submit_label.clone()}
                        </button>
                    </form>
                })}
                <SubmissionPanel values=submitted />
            </div>
        </div>
    }
}
