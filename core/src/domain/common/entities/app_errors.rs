use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("No image provided")]
    MissingImage,

    #[error("{0}")]
    ExternalServiceError(String),

    #[error("Malformed analysis response: {0}")]
    MalformedResponse(String),

    #[error("Internal server error")]
    InternalServerError,
}
