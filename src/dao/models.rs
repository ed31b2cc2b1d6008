use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::time::SystemTime;
use uuid::Uuid;

/// Ruleset of a stored match, serialized with the names used by the clients.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum MatchTypeEntity {
    /// Head to head.
    #[serde(rename = "1v1")]
    OneVOne,
    /// Two teams of two.
    #[serde(rename = "2v2")]
    TwoVTwo,
    /// 2 to 6 individual players.
    #[serde(rename = "century")]
    Century,
}

/// Participant line of a finished match.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerEntity {
    /// Display name used during the match.
    pub name: String,
    /// Final individual score (always 0 for 2v2 members, whose team holds the score).
    pub score: i64,
    /// Team number (1 or 2), only present for 2v2 matches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<u8>,
}

/// Winner designation of a finished match.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WinnerEntity {
    /// Winner name, or the tied names joined with `" & "`.
    pub name: String,
    /// Whether the match ended level on top.
    #[serde(default)]
    pub is_draw: bool,
}

/// Immutable record of a finished match, appended once per match.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MatchEntity {
    /// Identifier of the live session that produced this record.
    pub id: Uuid,
    /// Opaque identity of the authenticated user who scored the match.
    pub user_id: String,
    /// Ruleset the match was played with.
    pub match_type: MatchTypeEntity,
    /// Every participant, in setup order.
    pub players: Vec<PlayerEntity>,
    /// Winner or draw designation.
    pub winner: WinnerEntity,
    /// Final score per display name (team label in 2v2), as plain integers.
    pub final_scores: IndexMap<String, i64>,
    /// Server-assigned time at which the match was finished.
    pub date: SystemTime,
}
