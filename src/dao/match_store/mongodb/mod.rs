mod config;
mod connection;
mod error;
mod models;
/// [`MongoMatchStore`] and its trait implementation.
pub mod store;

pub use config::{ConnectRetry, MongoConfig};
pub use error::MongoDaoError;
pub use store::MongoMatchStore;

use crate::dao::storage::StorageError;

impl From<MongoDaoError> for StorageError {
    fn from(err: MongoDaoError) -> Self {
        StorageError::unavailable("MongoDB", err.to_string(), err)
    }
}
