use formgen::config::{Settings, ValidationMode};
use formgen::form::{FieldWidget, FormPlan, FormState};
use formgen::schema::SchemaStore;

fn default_session() -> anyhow::Result<(Settings, SchemaStore, FormPlan, FormState)> {
    let settings = Settings::new()?;
    let store = SchemaStore::new(settings.editor.clone());
    let plan = FormPlan::build(store.current(), &settings.form);
    let state = FormState::new(settings.form.validation_mode);
    Ok((settings, store, plan, state))
}

#[test]
fn test_default_schema_end_to_end() -> anyhow::Result<()> {
    let (_, _, plan, mut state) = default_session()?;

    let ids: Vec<&str> = plan.ids().collect();
    assert_eq!(ids, vec!["name", "email", "companySize", "industry", "comments"]);
    assert!(matches!(plan.fields[2].widget, FieldWidget::Dropdown { .. }));
    assert!(matches!(plan.fields[3].widget, FieldWidget::RadioGroup { .. }));
    assert!(matches!(plan.fields[4].widget, FieldWidget::MultiLine { .. }));

    state.set_value(&plan, "name", "Alice");
    state.set_value(&plan, "email", "a@b.com");
    state.set_value(&plan, "companySize", "1-50");
    state.set_value(&plan, "industry", "tech");
    state.set_value(&plan, "comments", "");

    let values = state.submit(&plan)?;
    let pairs: Vec<(&str, &str)> = values.iter().collect();
    assert_eq!(
        pairs,
        vec![
            ("name", "Alice"),
            ("email", "a@b.com"),
            ("companySize", "1-50"),
            ("industry", "tech"),
            ("comments", ""),
        ]
    );
    Ok(())
}

#[test]
fn test_empty_submit_marks_every_required_field() -> anyhow::Result<()> {
    let (_, _, plan, mut state) = default_session()?;

    let blocked = state.submit(&plan).unwrap_err();
    assert_eq!(blocked.failing, vec!["name", "email", "companySize", "industry"]);
    for id in &blocked.failing {
        assert_eq!(state.error(id), Some("This field is required"));
    }
    assert!(state.error("comments").is_none());
    assert_eq!(state.submit_count(), 0);
    Ok(())
}

#[test]
fn test_invalid_email_blocks_then_recovers() -> anyhow::Result<()> {
    let (_, _, plan, mut state) = default_session()?;
    state.set_value(&plan, "name", "Alice");
    state.set_value(&plan, "email", "not-an-email");
    state.set_value(&plan, "companySize", "51-200");
    state.set_value(&plan, "industry", "finance");

    let blocked = state.submit(&plan).unwrap_err();
    assert_eq!(blocked.failing, vec!["email"]);
    assert_eq!(state.error("email"), Some("Please enter a valid email address"));

    state.set_value(&plan, "email", "alice@corp.io");
    assert!(state.error("email").is_none());
    assert!(state.submit(&plan).is_ok());
    Ok(())
}

#[test]
fn test_unsupported_type_is_omitted_after_edit() -> anyhow::Result<()> {
    let (settings, mut store, _, mut state) = default_session()?;

    let edited = store.text().replacen("\"type\": \"textarea\"", "\"type\": \"date\"", 1);
    store.apply_edit(&edited)?;

    let plan = FormPlan::build(store.current(), &settings.form);
    state.sync_plan(&plan);

    assert_eq!(store.current().fields.len(), 5);
    assert_eq!(plan.fields.len(), 4);
    assert!(plan.field("comments").is_none());
    Ok(())
}

#[test]
fn test_schema_edit_keeps_values_of_surviving_fields() -> anyhow::Result<()> {
    let (settings, mut store, plan, mut state) = default_session()?;
    state.set_value(&plan, "name", "Alice");
    state.set_value(&plan, "industry", "tech");

    store.apply_edit(
        r#"{
  "formTitle": "Short",
  "formDescription": "",
  "fields": [
    { "id": "name", "type": "text", "label": "Name", "required": true }
  ]
}"#,
    )?;
    let plan = FormPlan::build(store.current(), &settings.form);
    state.sync_plan(&plan);

    let values = state.submit(&plan)?;
    assert_eq!(values.len(), 1);
    assert_eq!(values.get("name"), Some("Alice"));
    Ok(())
}

#[test]
fn test_on_change_mode_from_settings() -> anyhow::Result<()> {
    let settings = Settings::from_toml("[form]\nvalidation_mode = \"on_change\"\n")?;
    let store = SchemaStore::new(settings.editor.clone());
    let plan = FormPlan::build(store.current(), &settings.form);
    let mut state = FormState::new(settings.form.validation_mode);

    assert_eq!(settings.form.validation_mode, ValidationMode::OnChange);
    state.set_value(&plan, "email", "x");
    assert_eq!(state.error("email"), Some("Please enter a valid email address"));
    Ok(())
}

#[test]
fn test_lookahead_pattern_gates_submit() -> anyhow::Result<()> {
    let (settings, mut store, _, mut state) = default_session()?;

    store.apply_edit(
        r#"{
  "formTitle": "Account",
  "formDescription": "",
  "fields": [
    {
      "id": "password",
      "type": "text",
      "label": "Password",
      "required": true,
      "validation": { "pattern": "^(?=.*\\d).{8,}$", "message": "Use 8+ characters with a digit" }
    }
  ]
}"#,
    )?;
    let plan = FormPlan::build(store.current(), &settings.form);
    state.sync_plan(&plan);
    assert!(plan.warnings.is_empty());

    state.set_value(&plan, "password", "letmeinnow");
    assert!(state.submit(&plan).is_err());
    assert_eq!(state.error("password"), Some("Use 8+ characters with a digit"));

    state.set_value(&plan, "password", "letmein42");
    assert!(state.error("password").is_none());
    let values = state.submit(&plan)?;
    assert_eq!(values.get("password"), Some("letmein42"));
    Ok(())
}

#[test]
fn test_uncompilable_pattern_commits_with_warning() -> anyhow::Result<()> {
    let (settings, mut store, _, mut state) = default_session()?;

    store.apply_edit(
        r#"{
  "formTitle": "Codes",
  "formDescription": "",
  "fields": [
    { "id": "code", "type": "text", "label": "Code", "required": true,
      "validation": { "pattern": "([A-Z", "message": "never shown" } }
  ]
}"#,
    )?;
    let plan = FormPlan::build(store.current(), &settings.form);
    state.sync_plan(&plan);

    assert!(!store.has_error());
    assert_eq!(store.current().form_title, "Codes");
    assert_eq!(plan.warnings.len(), 1);
    assert!(plan.warnings[0].to_string().starts_with("Invalid pattern for field 'code'"));

    state.set_value(&plan, "code", "anything");
    assert!(state.submit(&plan).is_ok());
    Ok(())
}
