use indexmap::IndexMap;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    dao::models::{MatchEntity, PlayerEntity},
    dto::{format_system_time, setup::MatchModeDto},
    services::history_service::MatchStats,
};

/// Participant line of a stored match.
#[derive(Debug, Serialize, ToSchema)]
pub struct HistoryPlayer {
    /// Display name.
    pub name: String,
    /// Individual score; 0 for 2v2 members.
    pub score: i64,
    /// Team number (1 or 2) in 2v2.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<u8>,
}

impl From<PlayerEntity> for HistoryPlayer {
    fn from(value: PlayerEntity) -> Self {
        Self {
            name: value.name,
            score: value.score,
            team: value.team,
        }
    }
}

/// One finished match, as listed in the user's history.
#[derive(Debug, Serialize, ToSchema)]
pub struct MatchHistoryItem {
    /// Match id.
    pub id: Uuid,
    /// Ruleset played.
    pub match_type: MatchModeDto,
    /// Participants in id order.
    pub players: Vec<HistoryPlayer>,
    /// Winner name, or the tied names joined with `" & "`.
    pub winner: String,
    /// Whether the match ended level on top.
    pub is_draw: bool,
    /// Final score per display name, in participant order.
    #[schema(value_type = Object)]
    pub final_scores: IndexMap<String, i64>,
    /// RFC 3339 finish time.
    pub date: String,
}

impl From<MatchEntity> for MatchHistoryItem {
    fn from(value: MatchEntity) -> Self {
        Self {
            id: value.id,
            match_type: value.match_type.into(),
            players: value.players.into_iter().map(Into::into).collect(),
            winner: value.winner.name,
            is_draw: value.winner.is_draw,
            final_scores: value.final_scores,
            date: format_system_time(value.date),
        }
    }
}

/// Aggregates over every match the user has finished.
#[derive(Debug, Serialize, ToSchema)]
pub struct MatchStatsResponse {
    /// Finished matches on record.
    pub matches_played: usize,
    /// Matches that ended with a single winner.
    pub matches_won: usize,
    /// Matches where several entities shared the top score.
    pub draws: usize,
    /// Sum of every final score across all matches.
    pub total_points: i64,
    /// Highest single final score, never below 0.
    pub highest_break: i64,
}

impl From<MatchStats> for MatchStatsResponse {
    fn from(value: MatchStats) -> Self {
        Self {
            matches_played: value.matches_played,
            matches_won: value.matches_won,
            draws: value.draws,
            total_points: value.total_points,
            highest_break: value.highest_break,
        }
    }
}
