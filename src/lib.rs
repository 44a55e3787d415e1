//! # formgen - Schema-Driven Form Generator
//!
//! Core of a two-pane web tool: a JSON schema is edited on one side and a
//! form generated from it is previewed on the other. This crate holds
//! everything that does not touch the DOM, so it can be tested natively; the
//! `ui` workspace member renders it with Leptos.
//!
//! ## Pieces
//!
//! - **Schema Store**: parse-check-commit of edited schema text
//! - **Form Renderer**: field dispatch, validation rules and form state
//! - **Editor helpers**: JSON tokenizing and formatting for the editor pane
//! - **Config**: layered settings for messages and validation timing
//!
//! ```rust
//! use formgen::config::Settings;
//! use formgen::form::{FormPlan, FormState};
//! use formgen::schema::SchemaStore;
//!
//! let settings = Settings::new()?;
//! let mut store = SchemaStore::new(settings.editor.clone());
//! assert!(store.apply_edit("{ not json").is_err());
//!
//! let plan = FormPlan::build(store.current(), &settings.form);
//! let mut state = FormState::new(settings.form.validation_mode);
//! state.set_value(&plan, "name", "Alice");
//! assert!(state.submit(&plan).is_err());
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod config;
pub mod editor;
pub mod error;
pub mod form;
pub mod schema;

pub use error::{SchemaError, SchemaResult, SubmitBlocked};
