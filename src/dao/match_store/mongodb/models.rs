use indexmap::IndexMap;
use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::MongoDaoError;
use crate::dao::models::{MatchEntity, MatchTypeEntity, PlayerEntity, WinnerEntity};

/// Document layout of the `matches` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MongoMatchDocument {
    #[serde(rename = "_id")]
    id: String,
    user_id: String,
    match_type: MatchTypeEntity,
    players: Vec<PlayerEntity>,
    winner: WinnerEntity,
    final_scores: IndexMap<String, i64>,
    date: DateTime,
}

impl From<MatchEntity> for MongoMatchDocument {
    fn from(value: MatchEntity) -> Self {
        Self {
            id: value.id.to_string(),
            user_id: value.user_id,
            match_type: value.match_type,
            players: value.players,
            winner: value.winner,
            final_scores: value.final_scores,
            date: DateTime::from_system_time(value.date),
        }
    }
}

impl TryFrom<MongoMatchDocument> for MatchEntity {
    type Error = MongoDaoError;

    fn try_from(value: MongoMatchDocument) -> Result<Self, Self::Error> {
        let id = Uuid::parse_str(&value.id).map_err(|source| MongoDaoError::InvalidDocumentId {
            id: value.id.clone(),
            source,
        })?;

        Ok(Self {
            id,
            user_id: value.user_id,
            match_type: value.match_type,
            players: value.players,
            winner: value.winner,
            final_scores: value.final_scores,
            date: value.date.to_system_time(),
        })
    }
}
