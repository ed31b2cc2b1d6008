use std::error::Error;
use thiserror::Error;

/// Result alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Error raised by storage backends regardless of the underlying database.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backend could not serve the request.
    #[error("{backend} storage unavailable: {message}")]
    Unavailable {
        /// Backend name, e.g. `"MongoDB"`.
        backend: &'static str,
        /// Human-readable failure description.
        message: String,
        /// Backend error.
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },
}

impl StorageError {
    /// Wrap a backend failure, keeping its message for logs and HTTP bodies.
    pub fn unavailable(
        backend: &'static str,
        message: String,
        source: impl Error + Send + Sync + 'static,
    ) -> Self {
        StorageError::Unavailable {
            backend,
            message,
            source: Box::new(source),
        }
    }
}
