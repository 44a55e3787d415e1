//! Field Renderers
//!
//! One component per widget kind. All of them bind to the form state through
//! a [`FormHandle`] and show the field's current error underneath.

use formgen::form::{FieldWidget, InputType, RenderedField};
use formgen::schema::SelectOption;
use leptos::prelude::*;

use super::generator::FormHandle;

fn control_class(has_error: bool) -> &'static str {
    if has_error {
        "border border-red-500 p-2 rounded w-full"
    } else {
        "border p-2 rounded w-full"
    }
}

// ============================================================================
// Field Wrapper
// ============================================================================

/// Label, control and error message for one rendered field
#[component]
pub fn FieldView(field: RenderedField, handle: FormHandle) -> impl IntoView {
    let RenderedField {
        id,
        label,
        required,
        widget,
        ..
    } = field;

    let control = match widget {
        FieldWidget::SingleLine {
            input_type,
            placeholder,
        } => view! {
            <SingleLineInput id=id.clone() input_type=input_type placeholder=placeholder handle=handle />
        }
        .into_any(),
        FieldWidget::Dropdown { entries } => view! {
            <Dropdown id=id.clone() entries=entries handle=handle />
        }
        .into_any(),
        FieldWidget::RadioGroup { name, options } => view! {
            <RadioGroup name=name options=options handle=handle />
        }
        .into_any(),
        FieldWidget::MultiLine { placeholder } => view! {
            <MultiLineInput id=id.clone() placeholder=placeholder handle=handle />
        }
        .into_any(),
    };

    let error_id = id.clone();

    view! {
        <div class="mb-4">
            <label for=id class="font-medium block mb-1">
                {label}
                {required.then(|| view! { <span class="text-red-500">"*"</span> })}
            </label>
            {control}
            {move || handle.error(&error_id).map(|message| view! {
                <span class="text-red-500 text-sm">{message}</span>
            })}
        </div>
    }
}

// ============================================================================
// Single-line Input (text, email)
// ============================================================================

#[component]
fn SingleLineInput(
    id: String,
    input_type: InputType,
    placeholder: Option<String>,
    handle: FormHandle,
) -> impl IntoView {
    let value_id = id.clone();
    let error_id = id.clone();
    let input_id = id.clone();
    let keyboard_hint = match input_type {
        InputType::Email => "email",
        InputType::Text => "text",
    };

    view! {
        <input
            id=id.clone()
            name=id
            type=input_type.as_str()
            inputmode=keyboard_hint
            placeholder=placeholder.unwrap_or_default()
            class=move || control_class(handle.error(&error_id).is_some())
            prop:value=move || handle.value(&value_id)
            on:input=move |ev| handle.set(&input_id, event_target_value(&ev))
        />
    }
}

// ============================================================================
// Drop-down (select)
// ============================================================================

#[component]
fn Dropdown(id: String, entries: Vec<SelectOption>, handle: FormHandle) -> impl IntoView {
    let error_id = id.clone();
    let change_id = id.clone();

    view! {
        <select
            id=id.clone()
            name=id.clone()
            class=move || control_class(handle.error(&error_id).is_some())
            on:change=move |ev| handle.set(&change_id, event_target_value(&ev))
        >
            {entries.into_iter().map(|entry| {
                let option_id = id.clone();
                let value = entry.value.clone();
                view! {
                    <option
                        value=entry.value
                        prop:selected=move || handle.value(&option_id) == value
                    >
                        {entry.label}
                    </option>
                }
            }).collect_view()}
        </select>
    }
}

// ============================================================================
// Radio Group
// ============================================================================

#[component]
fn RadioGroup(name: String, options: Vec<SelectOption>, handle: FormHandle) -> impl IntoView {
    view! {
        <div class="flex space-x-4">
            {options.into_iter().map(|option| {
                let checked_name = name.clone();
                let change_name = name.clone();
                let checked_value = option.value.clone();
                let change_value = option.value.clone();
                view! {
                    <label class="flex items-center space-x-2">
                        <input
                            type="radio"
                            name=name.clone()
                            value=option.value
                            prop:checked=move || handle.value(&checked_name) == checked_value
                            on:change=move |_| handle.set(&change_name, change_value.clone())
                        />
                        <span>{option.label}</span>
                    </label>
                }
            }).collect_view()}
        </div>
    }
}

// ============================================================================
// Multi-line Input (textarea)
// ============================================================================

#[component]
fn MultiLineInput(id: String, placeholder: Option<String>, handle: FormHandle) -> impl IntoView {
    let value_id = id.clone();
    let error_id = id.clone();
    let input_id = id.clone();

    view! {
        <textarea
            id=id.clone()
            name=id
            placeholder=placeholder.unwrap_or_default()
            class=move || control_class(handle.error(&error_id).is_some())
            prop:value=move || handle.value(&value_id)
            on:input=move |ev| handle.set(&input_id, event_target_value(&ev))
        />
    }
}
