/// Errors from calls into the browser host.
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    /// A browser API call rejected.
    #[error("{call} failed: {message}")]
    Call { call: &'static str, message: String },

    /// The browser returned something we could not decode.
    #[error("failed to parse {what}: {message}")]
    Decode { what: &'static str, message: String },

    #[error("failed to serialize {what}: {message}")]
    Encode { what: &'static str, message: String },
}

impl HostError {
    pub fn call(call: &'static str, message: impl Into<String>) -> Self {
        HostError::Call {
            call,
            message: message.into(),
        }
    }
}
