use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The gateway answered 404 for a resource (or its parent) addressed by id.
    #[error("{resource} not found for the id: {id}")]
    NotFound { resource: &'static str, id: String },
    /// Any status other than the one the operation declares as success.
    #[error("fail sending {operation} command to Kong: {status}")]
    UnexpectedStatus { operation: String, status: String },
    #[error("fail reading response from Kong: {0}")]
    BodyRead(#[source] reqwest::Error),
    #[error("fail decoding response from Kong: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("fail connecting to Kong: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("fail encoding request payload: {0}")]
    Encode(#[source] serde_json::Error),
    /// A flag value that cannot be turned into a request.
    #[error("{0}")]
    InvalidArgument(String),
    #[error("fail writing output: {0}")]
    Output(#[from] std::io::Error),
}

impl Error {
    /// Short category label used when printing the error on the CLI
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "Not Found",
            Self::UnexpectedStatus { .. } => "Request Failed",
            Self::BodyRead(_) => "Response Error",
            Self::Decode(_) => "Decode Error",
            Self::Transport(_) => "Connection Error",
            Self::Encode(_) => "Encode Error",
            Self::InvalidArgument(_) => "Invalid Argument",
            Self::Output(_) => "Output Error",
        }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}
