//! Process-local [`MatchStore`] used for development and tests. Records are
//! lost when the process exits.

use std::sync::Arc;

use futures::future::BoxFuture;
use tokio::sync::RwLock;

use crate::dao::{match_store::MatchStore, models::MatchEntity, storage::StorageResult};

/// [`MatchStore`] keeping records in a shared vector.
#[derive(Clone, Default)]
pub struct InMemoryMatchStore {
    records: Arc<RwLock<Vec<MatchEntity>>>,
}

impl InMemoryMatchStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records, across all users.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    async fn user_matches(&self, user_id: &str) -> Vec<MatchEntity> {
        let guard = self.records.read().await;
        guard
            .iter()
            .filter(|record| record.user_id == user_id)
            .cloned()
            .collect()
    }
}

impl MatchStore for InMemoryMatchStore {
    fn save_match(&self, record: MatchEntity) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move {
            store.records.write().await.push(record);
            Ok(())
        })
    }

    fn recent_matches(
        &self,
        user_id: String,
        limit: usize,
    ) -> BoxFuture<'static, StorageResult<Vec<MatchEntity>>> {
        let store = self.clone();
        Box::pin(async move {
            let mut matches = store.user_matches(&user_id).await;
            // Stable sort keeps insertion order for identical timestamps; reverse it too.
            matches.reverse();
            matches.sort_by(|a, b| b.date.cmp(&a.date));
            matches.truncate(limit);
            Ok(matches)
        })
    }

    fn all_matches(&self, user_id: String) -> BoxFuture<'static, StorageResult<Vec<MatchEntity>>> {
        let store = self.clone();
        Box::pin(async move { Ok(store.user_matches(&user_id).await) })
    }

    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>> {
        Box::pin(async { Ok(()) })
    }

    fn try_reconnect(&self) -> BoxFuture<'static, StorageResult<()>> {
        Box::pin(async { Ok(()) })
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, SystemTime};

    use indexmap::IndexMap;
    use uuid::Uuid;

    use super::*;
    use crate::dao::models::{MatchTypeEntity, WinnerEntity};

    fn record(user_id: &str, name: &str, date: SystemTime) -> MatchEntity {
        MatchEntity {
            id: Uuid::new_v4(),
            user_id: user_id.into(),
            match_type: MatchTypeEntity::OneVOne,
            players: Vec::new(),
            winner: WinnerEntity {
                name: name.into(),
                is_draw: false,
            },
            final_scores: IndexMap::new(),
            date,
        }
    }

    #[tokio::test]
    async fn recent_matches_are_newest_first_and_scoped_to_user() {
        let store = InMemoryMatchStore::new();
        let start = SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000);

        for (offset, name) in [(0, "first"), (20, "third"), (10, "second")] {
            store
                .save_match(record("alice", name, start + Duration::from_secs(offset)))
                .await
                .unwrap();
        }
        store.save_match(record("bob", "other", start)).await.unwrap();

        let recent = store.recent_matches("alice".into(), 2).await.unwrap();
        let names: Vec<_> = recent.iter().map(|r| r.winner.name.as_str()).collect();
        assert_eq!(names, ["third", "second"]);

        assert_eq!(store.all_matches("bob".into()).await.unwrap().len(), 1);
        assert_eq!(store.len().await, 4);
    }
}
