use formgen::config::{Settings, ValidationMode};

#[test]
fn test_full_override_document() -> anyhow::Result<()> {
    let settings = Settings::from_toml(
        r#"
[form]
validation_mode = "on_change"
required_message = "Pflichtfeld"
select_placeholder = "-- bitte wählen --"
submit_label = "Senden"

[editor]
parse_error_message = "Ungültiges JSON."
rows = 30
indent = 4
"#,
    )?;

    assert_eq!(settings.form.validation_mode, ValidationMode::OnChange);
    assert_eq!(settings.form.required_message, "Pflichtfeld");
    assert_eq!(settings.form.select_placeholder, "-- bitte wählen --");
    assert_eq!(settings.form.submit_label, "Senden");
    assert_eq!(settings.editor.parse_error_message, "Ungültiges JSON.");
    assert_eq!(settings.editor.rows, 30);
    assert_eq!(settings.editor.indent, 4);
    Ok(())
}

#[test]
fn test_validation_errors_are_joined() {
    let err = Settings::from_toml(
        r#"
[form]
submit_label = ""

[editor]
indent = 0
"#,
    )
    .unwrap_err();

    let message = err.to_string();
    assert!(message.starts_with("Configuration validation failed:"));
    assert!(message.contains("form.submit_label"));
    assert!(message.contains("editor.indent"));
}

#[test]
fn test_unknown_validation_mode_fails() {
    let result = Settings::from_toml("[form]\nvalidation_mode = \"on_blur\"\n");
    assert!(result.is_err());
}

#[test]
fn test_malformed_toml_fails() {
    assert!(Settings::from_toml("[form\nrows = ").is_err());
}
