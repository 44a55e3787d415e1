pub mod form_generator;
pub mod json_editor;
