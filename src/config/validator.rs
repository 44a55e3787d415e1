use thiserror::Error;

use crate::config::{EditorSettings, FormSettings, Settings};

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

pub struct SettingsValidator;

impl SettingsValidator {
    pub fn validate(settings: &Settings) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = Self::validate_form(&settings.form) {
            errors.extend(e);
        }

        if let Err(e) = Self::validate_editor(&settings.editor) {
            errors.extend(e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_form(form: &FormSettings) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if form.required_message.trim().is_empty() {
            errors.push(ValidationError::MissingField("form.required_message".to_string()));
        }

        if form.submit_label.trim().is_empty() {
            errors.push(ValidationError::MissingField("form.submit_label".to_string()));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_editor(editor: &EditorSettings) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if editor.parse_error_message.trim().is_empty() {
            errors.push(ValidationError::MissingField(
                "editor.parse_error_message".to_string(),
            ));
        }

        if editor.rows == 0 {
            errors.push(ValidationError::InvalidValue {
                field: "editor.rows".to_string(),
                reason: "Rows must be greater than 0".to_string(),
            });
        }

        if editor.indent == 0 || editor.indent > 8 {
            errors.push(ValidationError::InvalidValue {
                field: "editor.indent".to_string(),
                reason: "Indent must be between 1 and 8".to_string(),
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
