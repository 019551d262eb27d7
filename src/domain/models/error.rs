use thiserror::Error;

/// Failures of a chat send, from the local quota gate through to the API.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChatError {
    #[error("free requests are used up")]
    QuotaExceeded,
    #[error("file uploads are not available on the free plan")]
    UploadNotAllowed,
    #[error("a request for chat {0} is still in progress")]
    SendInProgress(String),
    #[error("no chat found for id {0}")]
    UnknownSession(String),
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("the API reported an error: {0}")]
    Logic(String),
    #[error("malformed API response: {0}")]
    MalformedResponse(String),
}
