/// In-process backend.
pub mod memory;
/// MongoDB backend.
#[cfg(feature = "mongo-store")]
pub mod mongodb;

use crate::dao::models::MatchEntity;
use crate::dao::storage::StorageResult;
use futures::future::BoxFuture;

/// Abstraction over the persistence layer for finished matches.
///
/// Records are append-only: a match is written once when it finishes and
/// never updated afterwards.
pub trait MatchStore: Send + Sync {
    /// Append a finished match.
    fn save_match(&self, record: MatchEntity) -> BoxFuture<'static, StorageResult<()>>;
    /// Most recent matches of `user_id`, newest first, at most `limit` entries.
    fn recent_matches(
        &self,
        user_id: String,
        limit: usize,
    ) -> BoxFuture<'static, StorageResult<Vec<MatchEntity>>>;
    /// Every match of `user_id`, in no particular order.
    fn all_matches(&self, user_id: String) -> BoxFuture<'static, StorageResult<Vec<MatchEntity>>>;
    /// Check that the backend answers.
    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>>;
    /// Re-establish the backend connection in place.
    fn try_reconnect(&self) -> BoxFuture<'static, StorageResult<()>>;
}
