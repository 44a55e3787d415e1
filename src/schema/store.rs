//! Schema Store
//!
//! Keeps the committed schema next to the exact text it was parsed from.
//! Edits are all-or-nothing: a rejected edit leaves both untouched and only
//! sets the error indicator.

use serde_json::Value;

use crate::config::EditorSettings;
use crate::editor::{format_json, pretty_print};
use crate::error::{SchemaError, SchemaResult};
use crate::schema::Schema;

#[derive(Debug, Clone)]
pub struct SchemaStore {
    schema: Schema,
    text: String,
    error: Option<SchemaError>,
    revision: u64,
    settings: EditorSettings,
}

impl SchemaStore {
    /// Store seeded with the built-in survey
    pub fn new(settings: EditorSettings) -> Self {
        Self::with_schema(Schema::default_survey(), settings)
    }

    /// Store seeded with `schema`, pretty-printed as the initial text
    pub fn with_schema(schema: Schema, settings: EditorSettings) -> Self {
        let text = pretty_print(&schema, settings.indent).unwrap_or_default();
        Self {
            schema,
            text,
            error: None,
            revision: 0,
            settings,
        }
    }

    /// Parse `raw_text` and commit it on success.
    ///
    /// On failure the committed schema and text are kept and the error
    /// indicator is set; the same error is returned.
    pub fn apply_edit(&mut self, raw_text: &str) -> SchemaResult<()> {
        match self.parse(raw_text) {
            Ok(schema) => {
                self.schema = schema;
                self.text = raw_text.to_string();
                self.error = None;
                self.revision += 1;
                tracing::debug!(
                    revision = self.revision,
                    fields = self.schema.fields.len(),
                    "schema edit committed"
                );
                Ok(())
            }
            Err(err) => {
                tracing::debug!(error = %err, location = ?err.location(), "schema edit rejected");
                self.error = Some(err.clone());
                Err(err)
            }
        }
    }

    fn parse(&self, raw_text: &str) -> SchemaResult<Schema> {
        let value: Value = serde_json::from_str(raw_text)
            .map_err(|e| SchemaError::syntax(self.settings.parse_error_message.as_str(), &e))?;
        let schema = Schema::from_value(value)?;
        schema.check()?;
        Ok(schema)
    }

    /// Latest committed schema, never a rejected candidate
    pub fn current(&self) -> &Schema {
        &self.schema
    }

    /// Text the current schema was parsed from
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Message for the error indicator, if the last edit was rejected
    pub fn error(&self) -> Option<String> {
        self.error.as_ref().map(|e| e.to_string())
    }

    /// Line and column of the last syntax error
    pub fn error_location(&self) -> Option<(usize, usize)> {
        self.error.as_ref().and_then(SchemaError::location)
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// Number of committed edits since creation
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Restore the built-in survey
    pub fn reset(&mut self) {
        let revision = self.revision + 1;
        *self = Self::new(self.settings.clone());
        self.revision = revision;
        tracing::info!(revision, "schema reset to default");
    }

    /// Re-indent the committed text and return it. The schema itself does
    /// not change. While the last edit is rejected the pending error is
    /// returned instead, so the editor's draft is not replaced.
    pub fn format(&mut self) -> SchemaResult<&str> {
        if let Some(err) = &self.error {
            return Err(err.clone());
        }
        let formatted = format_json(&self.text, self.settings.indent)?;
        if formatted != self.text {
            self.text = formatted;
            self.revision += 1;
        }
        Ok(&self.text)
    }
}

impl Default for SchemaStore {
    fn default() -> Self {
        Self::new(EditorSettings::default())
    }
}
