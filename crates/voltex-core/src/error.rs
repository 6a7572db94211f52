use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The song asset is not valid JSON or does not match the song schema.
    #[error("Schema violation in {origin}: {message}")]
    SchemaViolation { origin: String, message: String },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Archive error: {0}")]
    Archive(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn schema(origin: impl Into<String>, message: impl Into<String>) -> Self {
        Error::SchemaViolation {
            origin: origin.into(),
            message: message.into(),
        }
    }

    pub fn is_schema_violation(&self) -> bool {
        matches!(self, Error::SchemaViolation { .. })
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(e: zip::result::ZipError) -> Self {
        match e {
            zip::result::ZipError::Io(io) => Error::Io(io),
            other => Error::Archive(other.to_string()),
        }
    }
}
