use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failure while building a page tree.
///
/// Render errors are what an [`ErrorBoundary`](crate::boundary::ErrorBoundary)
/// isolates. Without a boundary they abort the mount.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A component asked the [`Scope`](crate::Scope) for a value no provider supplied.
    #[error("no `{0}` was provided to this scope")]
    MissingContext(&'static str),

    /// A data island the page needs is not present in the host document.
    #[error("page data `{island}` is missing")]
    MissingData { island: String },

    /// A data island exists but could not be decoded.
    #[error("page data `{island}` is invalid: {source}")]
    InvalidData {
        island: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{0}")]
    Failed(String),
}

impl RenderError {
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }
}

/// A browser API call failed.
#[derive(Debug, Error)]
#[error("DOM operation failed: {message}")]
pub struct DomError {
    message: String,
}

impl DomError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Wrap an exception thrown by a DOM binding.
    pub(crate) fn js(context: &str, value: JsValue) -> Self {
        Self::new(format!("{context}: {value:?}"))
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[derive(Debug, Error)]
pub enum MountError {
    #[error(transparent)]
    Dom(#[from] DomError),

    #[error("anchor `{0}` already has a mounted tree")]
    AlreadyMounted(String),

    #[error("rendering failed: {0}")]
    Render(#[from] RenderError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}
