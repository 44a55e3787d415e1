//! Field dispatch
//!
//! Maps each descriptor to the widget the preview renders for it. `text` and
//! `email` share a single-line input, `select` gets a drop-down headed by an
//! empty entry, `radio` one control per option, `textarea` a multi-line
//! input. Any other type renders nothing.

use crate::config::FormSettings;
use crate::error::SchemaError;
use crate::form::rules::FieldRule;
use crate::schema::{FieldDescriptor, FieldKind, Schema, SelectOption};

/// `type` attribute of a single-line input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputType {
    Text,
    Email,
}

impl InputType {
    pub fn as_str(self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Email => "email",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldWidget {
    SingleLine {
        input_type: InputType,
        placeholder: Option<String>,
    },
    /// Entries include the leading empty "no selection" choice
    Dropdown { entries: Vec<SelectOption> },
    /// Controls share `name` so only one can be checked
    RadioGroup {
        name: String,
        options: Vec<SelectOption>,
    },
    MultiLine { placeholder: Option<String> },
}

/// Pick the widget for `field`, or `None` for an unsupported type
pub fn render_field(field: &FieldDescriptor, settings: &FormSettings) -> Option<FieldWidget> {
    let widget = match &field.kind {
        FieldKind::Text | FieldKind::Email => FieldWidget::SingleLine {
            input_type: if field.kind == FieldKind::Email {
                InputType::Email
            } else {
                InputType::Text
            },
            placeholder: field.placeholder.clone(),
        },
        FieldKind::Select => {
            let mut entries = Vec::with_capacity(field.options().len() + 1);
            entries.push(SelectOption::new("", settings.select_placeholder.as_str()));
            entries.extend(field.options().iter().cloned());
            FieldWidget::Dropdown { entries }
        }
        FieldKind::Radio => FieldWidget::RadioGroup {
            name: field.id.clone(),
            options: field.options().to_vec(),
        },
        FieldKind::Textarea => FieldWidget::MultiLine {
            placeholder: field.placeholder.clone(),
        },
        FieldKind::Unsupported(kind) => {
            tracing::trace!(field = %field.id, kind = %kind, "field type not rendered");
            return None;
        }
    };
    Some(widget)
}

/// A field that made it into the preview, with its bound rule
#[derive(Debug, Clone)]
pub struct RenderedField {
    pub id: String,
    pub label: String,
    pub required: bool,
    pub widget: FieldWidget,
    pub rule: FieldRule,
}

/// Everything the preview pane needs for one schema snapshot
#[derive(Debug, Clone)]
pub struct FormPlan {
    pub title: String,
    pub description: String,
    pub fields: Vec<RenderedField>,
    pub submit_label: String,
    /// Patterns that did not compile, in field order
    pub warnings: Vec<SchemaError>,
}

impl FormPlan {
    pub fn build(schema: &Schema, settings: &FormSettings) -> Self {
        let mut fields = Vec::with_capacity(schema.fields.len());
        let mut warnings = Vec::new();

        for descriptor in &schema.fields {
            let Some(widget) = render_field(descriptor, settings) else {
                continue;
            };
            let rule = FieldRule::for_field(descriptor, &settings.required_message);
            warnings.extend(rule.warning().cloned());
            fields.push(RenderedField {
                id: descriptor.id.clone(),
                label: descriptor.label.clone(),
                required: descriptor.required,
                widget,
                rule,
            });
        }

        Self {
            title: schema.form_title.clone(),
            description: schema.form_description.clone(),
            fields,
            submit_label: settings.submit_label.clone(),
            warnings,
        }
    }

    pub fn field(&self, id: &str) -> Option<&RenderedField> {
        self.fields.iter().find(|f| f.id == id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> FormSettings {
        FormSettings::default()
    }

    #[test]
    fn test_text_and_email_share_single_line() {
        let text = FieldDescriptor::new("a", FieldKind::Text, "A").with_placeholder("type here");
        let email = FieldDescriptor::new("b", FieldKind::Email, "B");

        assert_eq!(
            render_field(&text, &settings()),
            Some(FieldWidget::SingleLine {
                input_type: InputType::Text,
                placeholder: Some("type here".to_string()),
            })
        );
        assert_eq!(
            render_field(&email, &settings()),
            Some(FieldWidget::SingleLine {
                input_type: InputType::Email,
                placeholder: None,
            })
        );
    }

    #[test]
    fn test_select_gets_empty_leading_entry() {
        let field = FieldDescriptor::new("size", FieldKind::Select, "Size")
            .with_options(&[("s", "Small"), ("l", "Large")]);

        let Some(FieldWidget::Dropdown { entries }) = render_field(&field, &settings()) else {
            panic!("expected a dropdown");
        };
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0], SelectOption::new("", "Select an option"));
        assert_eq!(entries[2].value, "l");
    }

    #[test]
    fn test_radio_is_grouped_by_id() {
        let field = FieldDescriptor::new("industry", FieldKind::Radio, "Industry")
            .with_options(&[("tech", "Technology"), ("retail", "Retail")]);

        match render_field(&field, &settings()) {
            Some(FieldWidget::RadioGroup { name, options }) => {
                assert_eq!(name, "industry");
                assert_eq!(options.len(), 2);
            }
            other => panic!("expected a radio group, got {:?}", other),
        }
    }

    #[test]
    fn test_unsupported_renders_nothing() {
        let field = FieldDescriptor::new("due", FieldKind::Unsupported("date".into()), "Due");
        assert_eq!(render_field(&field, &settings()), None);
    }

    #[test]
    fn test_plan_keeps_order_and_skips_unsupported() {
        let mut schema = Schema::default_survey();
        schema.fields[2].kind = FieldKind::Unsupported("date".into());

        let plan = FormPlan::build(&schema, &settings());
        let ids: Vec<&str> = plan.ids().collect();

        assert_eq!(ids, vec!["name", "email", "industry", "comments"]);
        assert_eq!(plan.title, "Project Requirements Survey");
        assert!(plan.field("name").unwrap().rule.is_required());
        assert!(!plan.field("comments").unwrap().rule.is_required());
        assert!(plan.warnings.is_empty());
    }

    #[test]
    fn test_plan_collects_pattern_warnings() {
        let schema = Schema {
            fields: vec![
                FieldDescriptor::new("zip", FieldKind::Text, "Zip").with_validation("[0-9", "bad"),
                FieldDescriptor::new("mail", FieldKind::Email, "Mail").with_validation("(?<=@)x", "ok"),
            ],
            ..Default::default()
        };

        let plan = FormPlan::build(&schema, &settings());

        assert_eq!(plan.fields.len(), 2);
        assert_eq!(plan.warnings.len(), 1);
        assert!(matches!(
            &plan.warnings[0],
            SchemaError::InvalidPattern { field, .. } if field == "zip"
        ));
        assert!(plan.field("mail").unwrap().rule.has_pattern());
    }
}
