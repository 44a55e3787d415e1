//! Form Renderer
//!
//! Turns a schema snapshot into a [`FormPlan`] (one widget and one rule per
//! supported field) and keeps the user's input in a [`FormState`].

pub mod rules;
pub mod state;
pub mod values;
pub mod widget;

pub use rules::{FieldRule, ValidationResult};
pub use state::FormState;
pub use values::FormValues;
pub use widget::{render_field, FieldWidget, FormPlan, InputType, RenderedField};
