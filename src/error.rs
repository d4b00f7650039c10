use gloo_utils::errors::JsError;
use wasm_bindgen::JsValue;

#[derive(thiserror::Error, Debug)]
pub enum PageError {
    #[error("window is not available")]
    NoWindow,

    #[error("document is not available")]
    NoDocument,

    #[error("#{id} is not a {expected}")]
    WrongElement { id: String, expected: &'static str },

    #[error("form field {name:?} not found in #{form}")]
    MissingField { form: String, name: String },

    #[error("invalid page config")]
    Config(#[source] serde_json::Error),

    #[error("{0}")]
    Js(String),
}

impl From<JsValue> for PageError {
    fn from(value: JsValue) -> Self {
        match JsError::try_from(value) {
            Ok(error) => Self::Js(error.to_string()),
            Err(not_error) => Self::Js(not_error.to_string()),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginError {
    #[error("username is empty")]
    EmptyUsername,

    #[error("password is empty")]
    EmptyPassword,

    #[error("username and password are empty")]
    EmptyBoth,
}

pub type Result<T, E = PageError> = std::result::Result<T, E>;

/// Renders an error followed by its sources, `outer: inner: ...`.
pub fn error_chain(error: &dyn std::error::Error) -> String {
    let mut rendered = error.to_string();
    let mut source = error.source();
    while let Some(inner) = source {
        rendered.push_str(": ");
        rendered.push_str(&inner.to_string());
        source = inner.source();
    }
    rendered
}
