//! Live match sessions and their conversion into persisted records once finished.

use std::time::{Instant, SystemTime};

use uuid::Uuid;

use crate::{
    dao::models::{MatchEntity, MatchTypeEntity, PlayerEntity, WinnerEntity},
    state::{
        outcome::Outcome,
        scoring::{Board, MatchEngine, MatchMode, MatchSetup, Score, TeamId},
    },
};

/// A match being scored. Owned exclusively by the user who set it up.
#[derive(Debug, Clone)]
pub struct LiveMatch {
    /// Server-assigned identifier, reused for the persisted record.
    pub id: Uuid,
    /// Opaque identity of the authenticated user scoring the match.
    pub owner: String,
    /// When setup completed.
    pub started_at: SystemTime,
    /// Last time the owner read or changed the match; drives idle eviction.
    pub last_activity: Instant,
    /// Scoring state.
    pub engine: MatchEngine,
}

/// Participant line of a finished match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerResult {
    /// Display name.
    pub name: String,
    /// Individual score; 0 for 2v2 members since only team totals are kept.
    pub score: Score,
    /// Team affiliation in 2v2.
    pub team: Option<TeamId>,
}

/// A match after the final whistle. No further events can be applied.
#[derive(Debug, Clone)]
pub struct FinishedMatch {
    /// Identifier of the live session.
    pub id: Uuid,
    /// Owner of the live session.
    pub owner: String,
    /// Ruleset played.
    pub mode: MatchMode,
    /// Every participant in id order.
    pub players: Vec<PlayerResult>,
    /// Verdict computed at finish.
    pub outcome: Outcome,
    /// When the match was finished.
    pub finished_at: SystemTime,
}

impl LiveMatch {
    /// Start scoring a new match for `owner`.
    pub fn new(owner: impl Into<String>, setup: &MatchSetup) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner: owner.into(),
            started_at: SystemTime::now(),
            last_activity: Instant::now(),
            engine: MatchEngine::initialize(setup),
        }
    }

    /// End the match, consuming the live state.
    pub fn finish(self) -> FinishedMatch {
        let outcome = self.engine.outcome();
        let players = match self.engine.board() {
            Board::OneVOne { players } => players
                .iter()
                .map(|player| PlayerResult {
                    name: player.name.clone(),
                    score: player.score,
                    team: None,
                })
                .collect(),
            Board::Century { players } => players
                .iter()
                .map(|player| PlayerResult {
                    name: player.name.clone(),
                    score: player.score,
                    team: None,
                })
                .collect(),
            Board::TwoVTwo { members, .. } => members
                .iter()
                .map(|member| PlayerResult {
                    name: member.name.clone(),
                    score: 0,
                    team: Some(member.team),
                })
                .collect(),
        };

        FinishedMatch {
            id: self.id,
            owner: self.owner,
            mode: self.engine.mode(),
            players,
            outcome,
            finished_at: SystemTime::now(),
        }
    }
}

impl From<MatchMode> for MatchTypeEntity {
    fn from(value: MatchMode) -> Self {
        match value {
            MatchMode::OneVOne => MatchTypeEntity::OneVOne,
            MatchMode::TwoVTwo => MatchTypeEntity::TwoVTwo,
            MatchMode::Century => MatchTypeEntity::Century,
        }
    }
}

impl From<PlayerResult> for PlayerEntity {
    fn from(value: PlayerResult) -> Self {
        Self {
            name: value.name,
            score: value.score,
            team: value.team.map(TeamId::number),
        }
    }
}

impl From<FinishedMatch> for MatchEntity {
    fn from(value: FinishedMatch) -> Self {
        let final_scores = value.outcome.final_scores_by_name();
        Self {
            id: value.id,
            user_id: value.owner,
            match_type: value.mode.into(),
            players: value.players.into_iter().map(Into::into).collect(),
            winner: WinnerEntity {
                name: value.outcome.winner.name,
                is_draw: value.outcome.winner.is_draw,
            },
            final_scores,
            date: value.finished_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::scoring::EventTarget;

    #[test]
    fn finished_two_v_two_record_keeps_team_layout() {
        let mut live = LiveMatch::new(
            "user-1",
            &MatchSetup::new(MatchMode::TwoVTwo).with_name("player1", "Steve"),
        );
        live.engine.apply(EventTarget::Team(TeamId::Two), 6).unwrap();
        let id = live.id;

        let record: MatchEntity = live.finish().into();

        assert_eq!(record.id, id);
        assert_eq!(record.user_id, "user-1");
        assert_eq!(record.match_type, MatchTypeEntity::TwoVTwo);
        let teams: Vec<_> = record.players.iter().map(|p| p.team).collect();
        assert_eq!(teams, [Some(1), Some(1), Some(2), Some(2)]);
        assert_eq!(record.players[0].name, "Steve");
        assert!(record.players.iter().all(|p| p.score == 0));
        assert_eq!(
            record.winner,
            WinnerEntity {
                name: "Team 2".into(),
                is_draw: false
            }
        );
        assert_eq!(record.final_scores.get("Team 2"), Some(&6));
    }

    #[test]
    fn record_serializes_with_the_shared_field_names() {
        let mut live = LiveMatch::new(
            "user-2",
            &MatchSetup::new(MatchMode::Century).with_participant_count(2),
        );
        live.engine.apply(EventTarget::Player(1), 10).unwrap();

        let record: MatchEntity = live.finish().into();
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["matchType"], "century");
        assert_eq!(json["winner"]["name"], "Player 2");
        assert_eq!(json["winner"]["isDraw"], false);
        assert_eq!(json["finalScores"]["Player 2"], 10);
        assert!(json["players"][0].get("team").is_none());
    }

    #[test]
    fn persisted_winner_name_is_a_key_of_the_final_scores() {
        let mut live = LiveMatch::new(
            "user-3",
            &MatchSetup::new(MatchMode::Century)
                .with_participant_count(2)
                .with_name("0", "Sam")
                .with_name("1", "Sam"),
        );
        live.engine.apply(EventTarget::Player(1), 7).unwrap();

        let record: MatchEntity = live.finish().into();

        assert_eq!(record.winner.name, "Sam (2)");
        assert_eq!(record.final_scores.get(&record.winner.name), Some(&7));
        let names: Vec<_> = record.players.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Sam", "Sam"]);
    }
}
