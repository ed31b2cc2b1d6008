use std::sync::Arc;

use futures::{TryStreamExt, future::BoxFuture};
use mongodb::{Client, Collection, Database, bson::doc, options::IndexOptions};
use tokio::sync::RwLock;

use super::{
    config::MongoConfig,
    connection::open_archive,
    error::{MongoDaoError, MongoResult},
    models::MongoMatchDocument,
};
use crate::dao::{match_store::MatchStore, models::MatchEntity, storage::StorageResult};

const MATCH_COLLECTION_NAME: &str = "matches";

/// MongoDB-backed [`MatchStore`] implementation.
#[derive(Clone)]
pub struct MongoMatchStore {
    inner: Arc<MongoInner>,
}

struct MongoInner {
    state: RwLock<MongoState>,
    config: MongoConfig,
}

struct MongoState {
    client: Client,
    database: Database,
}

impl MongoInner {
    async fn ping(&self) -> MongoResult<()> {
        let database = {
            let guard = self.state.read().await;
            guard.database.clone()
        };

        database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|source| MongoDaoError::HealthPing { source })?;
        Ok(())
    }

    async fn reconnect(&self) -> MongoResult<()> {
        let (client, database) = open_archive(&self.config).await?;
        let mut guard = self.state.write().await;
        guard.client = client;
        guard.database = database;
        Ok(())
    }
}

impl MongoMatchStore {
    /// Establish a connection to MongoDB and ensure indexes are present.
    pub async fn connect(config: MongoConfig) -> MongoResult<Self> {
        let (client, database) = open_archive(&config).await?;

        let inner = Arc::new(MongoInner {
            state: RwLock::new(MongoState { client, database }),
            config,
        });

        let store = Self { inner };
        store.ensure_indexes().await?;
        Ok(store)
    }

    async fn ensure_indexes(&self) -> MongoResult<()> {
        let collection = self.collection().await;
        let index = mongodb::IndexModel::builder()
            .keys(doc! {"userId": 1, "date": -1})
            .options(
                IndexOptions::builder()
                    .name(Some("match_user_date_idx".to_owned()))
                    .build(),
            )
            .build();

        collection
            .create_index(index)
            .await
            .map_err(|source| MongoDaoError::EnsureIndex {
                collection: MATCH_COLLECTION_NAME,
                index: "userId,date",
                source,
            })?;

        Ok(())
    }

    async fn collection(&self) -> Collection<MongoMatchDocument> {
        let guard = self.inner.state.read().await;
        guard
            .database
            .collection::<MongoMatchDocument>(MATCH_COLLECTION_NAME)
    }

    async fn save_match(&self, record: MatchEntity) -> MongoResult<()> {
        let id = record.id;
        let document: MongoMatchDocument = record.into();
        let collection = self.collection().await;
        collection
            .insert_one(&document)
            .await
            .map_err(|source| MongoDaoError::SaveMatch { id, source })?;

        Ok(())
    }

    async fn find_matches(
        &self,
        user_id: String,
        limit: Option<usize>,
    ) -> MongoResult<Vec<MatchEntity>> {
        let collection = self.collection().await;

        let mut query = collection
            .find(doc! { "userId": user_id.as_str() })
            .sort(doc! { "date": -1 });
        if let Some(limit) = limit {
            query = query.limit(i64::try_from(limit).unwrap_or(i64::MAX));
        }

        let documents: Vec<MongoMatchDocument> = query
            .await
            .map_err(|source| MongoDaoError::ListMatches {
                user_id: user_id.clone(),
                source,
            })?
            .try_collect()
            .await
            .map_err(|source| MongoDaoError::ListMatches {
                user_id: user_id.clone(),
                source,
            })?;

        documents.into_iter().map(TryInto::try_into).collect()
    }
}

impl MatchStore for MongoMatchStore {
    fn save_match(&self, record: MatchEntity) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move { store.save_match(record).await.map_err(Into::into) })
    }

    fn recent_matches(
        &self,
        user_id: String,
        limit: usize,
    ) -> BoxFuture<'static, StorageResult<Vec<MatchEntity>>> {
        let store = self.clone();
        Box::pin(async move {
            store
                .find_matches(user_id, Some(limit))
                .await
                .map_err(Into::into)
        })
    }

    fn all_matches(&self, user_id: String) -> BoxFuture<'static, StorageResult<Vec<MatchEntity>>> {
        let store = self.clone();
        Box::pin(async move { store.find_matches(user_id, None).await.map_err(Into::into) })
    }

    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move { store.inner.ping().await.map_err(Into::into) })
    }

    fn try_reconnect(&self) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move { store.inner.reconnect().await.map_err(Into::into) })
    }
}
