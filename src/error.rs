use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures loading external record or form fixtures.
///
/// Field validation failures are not errors in this sense: they are ordinary
/// data (see [`crate::form::FieldErrors`]) and render inline on the form.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
