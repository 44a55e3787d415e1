//! Form state container
//!
//! Owns the bound value and current error of every field. Errors are never
//! set directly: they are the result of re-running the field's rule after a
//! change or a submit attempt.

use std::collections::HashMap;

use crate::config::ValidationMode;
use crate::error::SubmitBlocked;
use crate::form::values::FormValues;
use crate::form::widget::FormPlan;

#[derive(Debug, Clone, Default)]
pub struct FormState {
    mode: ValidationMode,
    values: HashMap<String, String>,
    errors: HashMap<String, String>,
    submit_attempted: bool,
    submit_count: u32,
}

impl FormState {
    pub fn new(mode: ValidationMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Bound value of `id`; unset fields read as empty
    pub fn value(&self, id: &str) -> &str {
        self.values.get(id).map(String::as_str).unwrap_or("")
    }

    pub fn error(&self, id: &str) -> Option<&str> {
        self.errors.get(id).map(String::as_str)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Successful submissions so far
    pub fn submit_count(&self) -> u32 {
        self.submit_count
    }

    fn shows_errors(&self) -> bool {
        self.submit_attempted || self.mode == ValidationMode::OnChange
    }

    /// Store a new value for `id` and re-evaluate its rule
    pub fn set_value(&mut self, plan: &FormPlan, id: &str, value: impl Into<String>) {
        self.values.insert(id.to_string(), value.into());

        if self.shows_errors() {
            self.revalidate(plan, id);
        }
    }

    fn revalidate(&mut self, plan: &FormPlan, id: &str) {
        let Some(field) = plan.field(id) else {
            self.errors.remove(id);
            return;
        };
        match field.rule.validate(self.value(id)) {
            Ok(()) => {
                self.errors.remove(id);
            }
            Err(message) => {
                self.errors.insert(id.to_string(), message);
            }
        }
    }

    /// Follow a schema change: values of fields that are still rendered are
    /// kept, everything else is dropped, and existing errors are re-evaluated
    /// against the new rules.
    pub fn sync_plan(&mut self, plan: &FormPlan) {
        self.values.retain(|id, _| plan.field(id).is_some());

        let with_errors: Vec<String> = self.errors.keys().cloned().collect();
        for id in with_errors {
            self.revalidate(plan, &id);
        }
    }

    /// Validate every rendered field. Values are returned only when all of
    /// them pass; otherwise every failing field gets its message.
    pub fn submit(&mut self, plan: &FormPlan) -> Result<FormValues, SubmitBlocked> {
        self.submit_attempted = true;
        self.errors.clear();

        let mut values = FormValues::new();
        let mut failing = Vec::new();

        for field in &plan.fields {
            let value = self.value(&field.id).to_string();
            if let Err(message) = field.rule.validate(&value) {
                failing.push(field.id.clone());
                self.errors.insert(field.id.clone(), message);
            }
            values.push(field.id.as_str(), value);
        }

        if failing.is_empty() {
            self.submit_count += 1;
            tracing::info!(fields = values.len(), "form submitted");
            Ok(values)
        } else {
            tracing::debug!(failing = ?failing, "submission blocked");
            Err(SubmitBlocked { failing })
        }
    }

    /// Clear values, errors and the submit flag
    pub fn reset(&mut self) {
        *self = Self::new(self.mode);
    }
}
