//! Form schema model
//!
//! A schema is the JSON document edited in the left pane: a title, a
//! description and an ordered list of field descriptors. Field order is
//! display order.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;
use std::fmt;

use crate::error::{SchemaError, SchemaResult};

pub mod store;

pub use store::SchemaStore;

/// Source of [`Schema::default_survey`]
pub const DEFAULT_SCHEMA_JSON: &str = include_str!("default_schema.json");

// ============================================================================
// Schema
// ============================================================================

/// The whole form document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    #[serde(default)]
    pub form_title: String,
    #[serde(default)]
    pub form_description: String,
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
}

impl Schema {
    /// Interpret an already-parsed JSON value as a schema
    pub fn from_value(value: Value) -> SchemaResult<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Acceptance checks run before a schema is committed: rendered fields
    /// must have unique ids. Fields of an unsupported type never reach the
    /// form, so their ids are not compared.
    pub fn check(&self) -> SchemaResult<()> {
        let mut seen = HashSet::new();
        for field in self.fields.iter().filter(|f| f.kind.is_supported()) {
            if !seen.insert(field.id.as_str()) {
                return Err(SchemaError::DuplicateFieldId(field.id.clone()));
            }
        }
        Ok(())
    }

    /// Built-in project requirements survey shown before any edit
    pub fn default_survey() -> Self {
        serde_json::from_str(DEFAULT_SCHEMA_JSON).unwrap_or_else(|e| {
            tracing::error!(error = %e, "embedded default schema is unreadable");
            Self::default()
        })
    }
}

// ============================================================================
// Field Descriptor
// ============================================================================

/// One entry of `fields`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: FieldKind,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<SelectOption>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<ValidationSpec>,
}

impl FieldDescriptor {
    pub fn new(id: impl Into<String>, kind: FieldKind, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            label: label.into(),
            required: false,
            placeholder: None,
            options: None,
            validation: None,
        }
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_options(mut self, options: &[(&str, &str)]) -> Self {
        self.options = Some(
            options
                .iter()
                .map(|(value, label)| SelectOption::new(*value, *label))
                .collect(),
        );
        self
    }

    pub fn with_validation(mut self, pattern: impl Into<String>, message: impl Into<String>) -> Self {
        self.validation = Some(ValidationSpec {
            pattern: Some(pattern.into()),
            message: Some(message.into()),
        });
        self
    }

    /// Options in display order; empty when none are configured
    pub fn options(&self) -> &[SelectOption] {
        self.options.as_deref().unwrap_or_default()
    }

    /// Configured pattern, treating an empty string as absent
    pub fn pattern(&self) -> Option<&str> {
        self.validation
            .as_ref()
            .and_then(|v| v.pattern.as_deref())
            .filter(|p| !p.is_empty())
    }
}

/// A `{value, label}` pair for select and radio fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
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

/// Pattern rule attached to a text or email field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

// ============================================================================
// Field Kind
// ============================================================================

/// The `type` of a field. Unknown strings are kept verbatim so the document
/// round-trips, and render nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldKind {
    Text,
    Email,
    Select,
    Radio,
    Textarea,
    Unsupported(String),
}

impl FieldKind {
    pub fn as_str(&self) -> &str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Email => "email",
            FieldKind::Select => "select",
            FieldKind::Radio => "radio",
            FieldKind::Textarea => "textarea",
            FieldKind::Unsupported(other) => other,
        }
    }

    /// Only single-line inputs consult `validation.pattern`
    pub fn uses_pattern(&self) -> bool {
        matches!(self, FieldKind::Text | FieldKind::Email)
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, FieldKind::Unsupported(_))
    }
}

impl From<String> for FieldKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "text" => FieldKind::Text,
            "email" => FieldKind::Email,
            "select" => FieldKind::Select,
            "radio" => FieldKind::Radio,
            "textarea" => FieldKind::Textarea,
            _ => FieldKind::Unsupported(value),
        }
    }
}

impl From<FieldKind> for String {
    fn from(kind: FieldKind) -> Self {
        match kind {
            FieldKind::Unsupported(other) => other,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
