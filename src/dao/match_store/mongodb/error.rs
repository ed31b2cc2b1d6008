use mongodb::error::Error as MongoError;
use thiserror::Error;
use uuid::Uuid;

/// Result alias for MongoDB operations.
pub type MongoResult<T> = std::result::Result<T, MongoDaoError>;

/// Failures of the MongoDB backend, converted into [`crate::dao::storage::StorageError`].
#[derive(Debug, Error)]
pub enum MongoDaoError {
    /// Connection string rejected by the driver.
    #[error("failed to parse MongoDB connection URI `{uri}`")]
    InvalidUri {
        /// Offending URI.
        uri: String,
        /// Underlying error.
        #[source]
        source: MongoError,
    },
    /// Client could not be built from the parsed options.
    #[error("failed to build MongoDB client from options")]
    ClientConstruction {
        /// Underlying error.
        #[source]
        source: MongoError,
    },
    /// Database never answered while connecting.
    #[error("MongoDB ping failed during initial connection after {attempts} attempt(s)")]
    InitialPing {
        /// Pings sent before giving up.
        attempts: u32,
        /// Underlying error.
        #[source]
        source: MongoError,
    },
    /// Health ping of an established connection failed.
    #[error("MongoDB ping health check failed")]
    HealthPing {
        /// Underlying error.
        #[source]
        source: MongoError,
    },
    /// Index creation failed.
    #[error("failed to ensure index `{index}` on collection `{collection}`")]
    EnsureIndex {
        /// Collection name.
        collection: &'static str,
        /// Index name.
        index: &'static str,
        /// Underlying error.
        #[source]
        source: MongoError,
    },
    /// Insert of a finished match failed.
    #[error("failed to save match `{id}`")]
    SaveMatch {
        /// Match id.
        id: Uuid,
        /// Underlying error.
        #[source]
        source: MongoError,
    },
    /// History query failed.
    #[error("failed to list matches of user `{user_id}`")]
    ListMatches {
        /// Queried user.
        user_id: String,
        /// Underlying error.
        #[source]
        source: MongoError,
    },
    /// Stored `_id` is not a UUID.
    #[error("stored match document `{id}` has an invalid identifier")]
    InvalidDocumentId {
        /// Raw stored id.
        id: String,
        /// Underlying error.
        #[source]
        source: uuid::Error,
    },
}
