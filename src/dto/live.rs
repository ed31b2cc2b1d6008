//! Payloads of the live scoring routes.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    dto::{format_system_time, setup::MatchModeDto},
    error::ServiceError,
    state::{
        outcome::{EntityKey, Outcome},
        scoring::{Board, EventTarget, ScoringEvent, TeamId},
        session::LiveMatch,
    },
};

/// Entity targeted by a scoring event or by the active marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EventTargetDto {
    /// Individually scored player (1v1, Century), by 0-based id.
    Player {
        /// Participant id.
        id: usize,
    },
    /// 2v2 team, numbered 1 or 2.
    Team {
        /// Team number.
        id: u8,
    },
}

impl TryFrom<EventTargetDto> for EventTarget {
    type Error = ServiceError;

    fn try_from(value: EventTargetDto) -> Result<Self, Self::Error> {
        match value {
            EventTargetDto::Player { id } => Ok(EventTarget::Player(id)),
            EventTargetDto::Team { id } => TeamId::from_number(id)
                .map(EventTarget::Team)
                .ok_or_else(|| ServiceError::InvalidInput(format!("unknown team {id}"))),
        }
    }
}

impl From<EventTarget> for EventTargetDto {
    fn from(value: EventTarget) -> Self {
        match value {
            EventTarget::Player(id) => EventTargetDto::Player { id },
            EventTarget::Team(team) => EventTargetDto::Team { id: team.number() },
        }
    }
}

impl From<EntityKey> for EventTargetDto {
    fn from(value: EntityKey) -> Self {
        match value {
            EntityKey::Participant(id) => EventTargetDto::Player { id },
            EntityKey::Team(team) => EventTargetDto::Team { id: team.number() },
        }
    }
}

/// A point or foul applied to one entity.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ScoreEventRequest {
    /// Scored entity.
    pub target: EventTargetDto,
    /// Signed value from the mode's point or foul vocabulary.
    pub delta: i32,
}

/// Move the active marker to another entity.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ActiveTargetRequest {
    /// Entity that is now at the table.
    pub target: EventTargetDto,
}

/// Participant row of the live scoreboard.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ParticipantView {
    /// 0-based participant id.
    pub id: usize,
    /// Display name.
    pub name: String,
    /// Individual score; absent in 2v2 where only team totals are kept.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<i64>,
    /// Team number (1 or 2) in 2v2.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<u8>,
}

/// Team row of a 2v2 scoreboard.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TeamView {
    /// Team number, 1 or 2.
    pub id: u8,
    /// `"Team 1"` or `"Team 2"`.
    pub name: String,
    /// Team total.
    pub score: i64,
}

/// Last applied event, as exposed to clients.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ScoreEventView {
    /// Scored entity.
    pub target: EventTargetDto,
    /// Applied value.
    pub delta: i32,
}

impl From<ScoringEvent> for ScoreEventView {
    fn from(value: ScoringEvent) -> Self {
        Self {
            target: value.target.into(),
            delta: value.delta,
        }
    }
}

/// Full state of a live match.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ScoreboardResponse {
    /// Live match id used in the route paths.
    pub id: Uuid,
    /// Ruleset in play.
    pub mode: MatchModeDto,
    /// RFC 3339 start time.
    pub started_at: String,
    /// Participants in id order.
    pub players: Vec<ParticipantView>,
    /// Team totals; empty unless the mode is 2v2.
    pub teams: Vec<TeamView>,
    /// Entity currently at the table.
    pub active: EventTargetDto,
    /// Number of events that can be undone.
    pub history_len: usize,
    /// Whether undo would revert anything.
    pub can_undo: bool,
    /// Most recent event still in the history.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_event: Option<ScoreEventView>,
    /// Point buttons offered for this mode.
    pub point_values: Vec<i32>,
    /// Foul buttons offered for this mode.
    pub foul_values: Vec<i32>,
}

impl From<&LiveMatch> for ScoreboardResponse {
    fn from(live: &LiveMatch) -> Self {
        let engine = &live.engine;
        let (players, teams) = match engine.board() {
            Board::OneVOne { players } => (
                players
                    .iter()
                    .map(|p| ParticipantView {
                        id: p.id,
                        name: p.name.clone(),
                        score: Some(p.score),
                        team: None,
                    })
                    .collect(),
                Vec::new(),
            ),
            Board::Century { players } => (
                players
                    .iter()
                    .map(|p| ParticipantView {
                        id: p.id,
                        name: p.name.clone(),
                        score: Some(p.score),
                        team: None,
                    })
                    .collect(),
                Vec::new(),
            ),
            Board::TwoVTwo { members, teams } => (
                members
                    .iter()
                    .map(|m| ParticipantView {
                        id: m.id,
                        name: m.name.clone(),
                        score: None,
                        team: Some(m.team.number()),
                    })
                    .collect(),
                TeamId::ALL
                    .iter()
                    .map(|team| TeamView {
                        id: team.number(),
                        name: team.label(),
                        score: teams.get(*team),
                    })
                    .collect(),
            ),
        };
        let mode = engine.mode();

        Self {
            id: live.id,
            mode: mode.into(),
            started_at: format_system_time(live.started_at),
            players,
            teams,
            active: engine.active().into(),
            history_len: engine.history().len(),
            can_undo: engine.can_undo(),
            last_event: engine.history().last().map(|entry| entry.event.into()),
            point_values: mode.point_values().to_vec(),
            foul_values: mode.foul_values().to_vec(),
        }
    }
}

/// Result of an undo request.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UndoResponse {
    /// Event that was reverted; absent when the history was already empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub undone: Option<ScoreEventView>,
    /// State after the undo.
    pub scoreboard: ScoreboardResponse,
}

/// Final score line of one scored entity.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FinalScoreView {
    /// Scored entity.
    pub target: EventTargetDto,
    /// Display name, suffixed when it repeats an earlier one.
    pub name: String,
    /// Final total.
    pub score: i64,
}

/// Verdict returned when a match is finished.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct OutcomeResponse {
    /// Id of the finished match.
    pub match_id: Uuid,
    /// Ruleset played.
    pub mode: MatchModeDto,
    /// Winner name, or the tied names joined with `" & "`.
    pub winner: String,
    /// Whether several entities share the top score.
    pub is_draw: bool,
    /// Highest final score.
    pub top_score: i64,
    /// Every scored entity in id order.
    pub final_scores: Vec<FinalScoreView>,
}

impl OutcomeResponse {
    /// Build the response for match `match_id` played under `mode`.
    pub fn new(match_id: Uuid, mode: MatchModeDto, outcome: Outcome) -> Self {
        Self {
            match_id,
            mode,
            winner: outcome.winner.name,
            is_draw: outcome.winner.is_draw,
            top_score: outcome.top_score,
            final_scores: outcome
                .final_scores
                .into_iter()
                .map(|entry| FinalScoreView {
                    target: entry.key.into(),
                    name: entry.name,
                    score: entry.score,
                })
                .collect(),
        }
    }
}
