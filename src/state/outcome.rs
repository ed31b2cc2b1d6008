//! End-of-match verdict computed from the current scoreboard.

use std::collections::HashSet;

use indexmap::IndexMap;

use super::scoring::{Board, MatchEngine, ParticipantId, Player, Score, TeamId};

/// Separator used when several entities share the win.
const DRAW_SEPARATOR: &str = " & ";

/// Stable identity of an entry in the final scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKey {
    /// Individually scored participant.
    Participant(ParticipantId),
    /// 2v2 team aggregate.
    Team(TeamId),
}

/// Final score of one scored entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalScore {
    /// Identity of the entity.
    pub key: EntityKey,
    /// Display name (`"Team 1"` for teams), suffixed when another entry shares it.
    pub name: String,
    /// Score at finish time.
    pub score: Score,
}

/// Winner designation: a single name, or the joined names of everyone tied on top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Winner {
    /// Winner name, or tied names joined with `" & "`.
    pub name: String,
    /// True when more than one entity shares the top score.
    pub is_draw: bool,
}

/// Terminal result of a match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Winner or draw designation.
    pub winner: Winner,
    /// One entry per scored entity, in id order.
    pub final_scores: Vec<FinalScore>,
    /// Highest final score, i.e. the winning (or drawing) score.
    pub top_score: Score,
}

impl Outcome {
    fn from_final_scores(mut final_scores: Vec<FinalScore>) -> Self {
        disambiguate_names(&mut final_scores);

        let top_score = final_scores
            .iter()
            .map(|entry| entry.score)
            .max()
            .unwrap_or_default();
        let leaders: Vec<&str> = final_scores
            .iter()
            .filter(|entry| entry.score == top_score)
            .map(|entry| entry.name.as_str())
            .collect();

        let winner = Winner {
            name: leaders.join(DRAW_SEPARATOR),
            is_draw: leaders.len() > 1,
        };

        Self {
            winner,
            final_scores,
            top_score,
        }
    }

    /// Project the final scores onto their (unique) display names.
    pub fn final_scores_by_name(&self) -> IndexMap<String, Score> {
        self.final_scores
            .iter()
            .map(|entry| (entry.name.clone(), entry.score))
            .collect()
    }
}

/// Names are not unique in Century matches: a repeated name gets a `" (2)"`,
/// `" (3)"`, ... suffix so every entry, and the winner, maps to one score.
fn disambiguate_names(final_scores: &mut [FinalScore]) {
    let mut taken = HashSet::with_capacity(final_scores.len());
    for entry in final_scores.iter_mut() {
        let mut name = entry.name.clone();
        let mut occurrence = 1;
        while taken.contains(&name) {
            occurrence += 1;
            name = format!("{} ({occurrence})", entry.name);
        }
        taken.insert(name.clone());
        entry.name = name;
    }
}

impl MatchEngine {
    /// Compute the match verdict from the current scores.
    ///
    /// Pure: the board is not modified, so repeated calls return the same outcome.
    pub fn outcome(&self) -> Outcome {
        let final_scores = match self.board() {
            Board::OneVOne { players } => players.iter().map(player_score).collect(),
            Board::Century { players } => players.iter().map(player_score).collect(),
            Board::TwoVTwo { teams, .. } => TeamId::ALL
                .iter()
                .map(|team| FinalScore {
                    key: EntityKey::Team(*team),
                    name: team.label(),
                    score: teams.get(*team),
                })
                .collect(),
        };

        Outcome::from_final_scores(final_scores)
    }
}

fn player_score(player: &Player) -> FinalScore {
    FinalScore {
        key: EntityKey::Participant(player.id),
        name: player.name.clone(),
        score: player.score,
    }
}
