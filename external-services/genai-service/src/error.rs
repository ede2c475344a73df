use error_common::ServiceError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenAiError {
    #[error("Missing GEMINI_API_KEY environment variable")]
    MissingCredential,

    #[error("Generation request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Generation service returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Generation service returned no candidates")]
    EmptyResponse,
}

pub type GenAiResult<T> = Result<T, GenAiError>;

impl From<GenAiError> for ServiceError {
    fn from(err: GenAiError) -> Self {
        match err {
            GenAiError::MissingCredential => ServiceError::Config(err.to_string()),
            other => ServiceError::Upstream(other.to_string()),
        }
    }
}
