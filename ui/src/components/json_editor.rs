//! Schema JSON Editor Component
//!
//! A textarea with:
//! - Syntax highlighting overlay
//! - Line numbers
//! - Tab indentation
//! - Format and Reset actions
//!
//! The editor owns only its text buffer. Every keystroke is handed to
//! `on_input`; whether the text is accepted is decided by the caller, which
//! feeds the outcome back through `error`.

use formgen::editor::{count_lines, highlight_json, splice_utf16};
use leptos::html;
use leptos::prelude::*;
use leptos::web_sys;

#[component]
pub fn JsonEditor(
    /// Editor buffer; may hold text that did not parse
    value: RwSignal<String>,
    /// Called with the full text after every edit
    #[prop(into)]
    on_input: Callback<String>,
    /// Message for the error indicator
    #[prop(into)]
    error: Signal<Option<String>>,
    /// Position of a syntax error, shown as a hint
    #[prop(into)]
    error_location: Signal<Option<(usize, usize)>>,
    /// Minimum number of visible rows
    #[prop(default = 24)]
    rows: u32,
    /// Spaces inserted by Tab
    #[prop(default = 2)]
    indent: usize,
    #[prop(optional)]
    on_format: Option<Callback<()>>,
    #[prop(optional)]
    on_reset: Option<Callback<()>>,
) -> impl IntoView {
    let highlight_ref = NodeRef::<html::Pre>::new();
    let gutter_ref = NodeRef::<html::Div>::new();

    let handle_input = move |ev: web_sys::Event| {
        on_input.run(event_target_value(&ev));
    };

    let handle_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() != "Tab" {
            return;
        }
        ev.prevent_default();
        let textarea = event_target::<web_sys::HtmlTextAreaElement>(&ev);

        let start = textarea.selection_start().ok().flatten().unwrap_or(0) as usize;
        let end = textarea.selection_end().ok().flatten().unwrap_or(0) as usize;
        let (new_value, caret) = splice_utf16(&textarea.value(), start, end, &" ".repeat(indent));

        textarea.set_value(&new_value);
        let _ = textarea.set_selection_start(Some(caret as u32));
        let _ = textarea.set_selection_end(Some(caret as u32));

        on_input.run(new_value);
    };

    // Keep the overlay and gutter aligned with the textarea
    let handle_scroll = move |ev: web_sys::Event| {
        let textarea = event_target::<web_sys::HtmlTextAreaElement>(&ev);
        if let Some(highlight) = highlight_ref.get() {
            highlight.set_scroll_top(textarea.scroll_top());
            highlight.set_scroll_left(textarea.scroll_left());
        }
        if let Some(gutter) = gutter_ref.get() {
            gutter.set_scroll_top(textarea.scroll_top());
        }
    };

    view! {
        <div class="json-editor-container">
            <div class="flex justify-end items-center gap-2 mb-1">
                {on_format.map(|format| view! {
                    <button
                        type="button"
                        class="text-xs px-2 py-1 bg-gray-100 hover:bg-gray-200 text-gray-600 rounded transition-colors"
                        on:click=move |_| format.run(())
                        disabled=move || error.get().is_some()
                    >
                        "Format"
                    </button>
                })}
                {on_reset.map(|reset| view! {
                    <button
                        type="button"
                        class="text-xs px-2 py-1 bg-gray-100 hover:bg-gray-200 text-gray-600 rounded transition-colors"
                        on:click=move |_| reset.run(())
                    >
                        "Reset"
                    </button>
                })}
            </div>

            <div class="json-editor-wrapper">
                <div class="json-line-numbers" aria-hidden="true" node_ref=gutter_ref>
                    {move || {
                        let lines = count_lines(&value.get()).max(rows as usize);
                        (1..=lines)
                            .map(|n| view! { <div class="json-line-number">{n}</div> })
                            .collect_view()
                    }}
                </div>

                <div class="json-editor-area">
                    <pre
                        class="json-highlight"
                        aria-hidden="true"
                        node_ref=highlight_ref
                        inner_html=move || highlight_json(&value.get())
                    />

                    <textarea
                        class="json-textarea"
                        rows=rows
                        spellcheck="false"
                        autocomplete="off"
                        prop:value=move || value.get()
                        on:input=handle_input
                        on:keydown=handle_keydown
                        on:scroll=handle_scroll
                    />
                </div>
            </div>

            {move || error.get().map(|message| {
                let hint = error_location
                    .get()
                    .map(|(line, column)| format!(" (line {}, column {})", line, column))
                    .unwrap_or_default();
                view! {
                    <div class="text-red-500 mt-2 text-sm">
                        {message}
                        <span class="text-xs text-red-400">{hint}</span>
                    </div>
                }
            })}
        </div>
    }
}
