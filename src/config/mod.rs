use config::{builder::DefaultState, Config, ConfigBuilder, File, FileFormat};
use serde::{Deserialize, Serialize};

pub mod validator;

pub const DEFAULT_REQUIRED_MESSAGE: &str = "This field is required";
pub const DEFAULT_SELECT_PLACEHOLDER: &str = "Select an option";
pub const DEFAULT_PARSE_ERROR_MESSAGE: &str = "Invalid JSON format.";

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub form: FormSettings,
    #[serde(default)]
    pub editor: EditorSettings,
}

/// When field errors become visible
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    /// Errors appear after the first submit attempt, then track every change
    #[default]
    OnSubmit,
    /// Errors track every change from the start
    OnChange,
}

/// Settings for the generated form preview
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FormSettings {
    #[serde(default)]
    pub validation_mode: ValidationMode,
    #[serde(default = "default_required_message")]
    pub required_message: String,
    /// Label of the implicit empty entry in drop-downs
    #[serde(default = "default_select_placeholder")]
    pub select_placeholder: String,
    #[serde(default = "default_submit_label")]
    pub submit_label: String,
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            validation_mode: ValidationMode::default(),
            required_message: default_required_message(),
            select_placeholder: default_select_placeholder(),
            submit_label: default_submit_label(),
        }
    }
}

/// Settings for the schema text editor
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct EditorSettings {
    /// Fixed message shown next to the editor when the text does not parse
    #[serde(default = "default_parse_error_message")]
    pub parse_error_message: String,
    #[serde(default = "default_editor_rows")]
    pub rows: u32,
    /// Spaces per indentation level for formatting and Tab
    #[serde(default = "default_editor_indent")]
    pub indent: usize,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            parse_error_message: default_parse_error_message(),
            rows: default_editor_rows(),
            indent: default_editor_indent(),
        }
    }
}

fn default_required_message() -> String {
    DEFAULT_REQUIRED_MESSAGE.to_string()
}

fn default_select_placeholder() -> String {
    DEFAULT_SELECT_PLACEHOLDER.to_string()
}

fn default_submit_label() -> String {
    "Submit".to_string()
}

fn default_parse_error_message() -> String {
    DEFAULT_PARSE_ERROR_MESSAGE.to_string()
}

fn default_editor_rows() -> u32 {
    24
}

fn default_editor_indent() -> usize {
    2
}

impl Settings {
    /// Settings built from defaults only
    pub fn new() -> Result<Self, anyhow::Error> {
        let s = Self::builder()?.build()?;
        Self::finish(s.try_deserialize()?)
    }

    /// Defaults overlaid with an in-memory TOML document
    pub fn from_toml(source: &str) -> Result<Self, anyhow::Error> {
        let s = Self::builder()?
            .add_source(File::from_str(source, FileFormat::Toml))
            .build()?;
        Self::finish(s.try_deserialize()?)
    }

    fn builder() -> Result<ConfigBuilder<DefaultState>, anyhow::Error> {
        let builder = Config::builder()
            .set_default("form.validation_mode", "on_submit")?
            .set_default("form.required_message", DEFAULT_REQUIRED_MESSAGE)?
            .set_default("form.select_placeholder", DEFAULT_SELECT_PLACEHOLDER)?
            .set_default("form.submit_label", "Submit")?
            .set_default("editor.parse_error_message", DEFAULT_PARSE_ERROR_MESSAGE)?
            .set_default("editor.rows", 24)?
            .set_default("editor.indent", 2)?;
        Ok(builder)
    }

    fn finish(settings: Settings) -> Result<Self, anyhow::Error> {
        validator::SettingsValidator::validate(&settings).map_err(|errors| {
            let error_messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            anyhow::anyhow!(
                "Configuration validation failed:\n{}",
                error_messages.join("\n")
            )
        })?;

        tracing::debug!(
            validation_mode = ?settings.form.validation_mode,
            "settings loaded"
        );
        Ok(settings)
    }
}
