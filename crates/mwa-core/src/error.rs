use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown field: {0}")]
    UnknownField(String),

    #[error("field '{0}' holds a list; use toggle_list_field")]
    NotScalar(&'static str),

    #[error("field '{0}' holds a single value; use set_field")]
    NotList(&'static str),

    #[error("'{value}' is not a declared option for '{field}'")]
    UndeclaredOption { field: &'static str, value: String },
}
