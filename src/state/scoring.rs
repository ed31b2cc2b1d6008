//! Live scoring engine for a single match: mode-shaped scoreboard, event
//! application and the snapshot-based undo log.

use std::{collections::HashMap, fmt};

use thiserror::Error;

/// Stable 0-based identifier assigned to a participant at setup, in input order.
pub type ParticipantId = usize;

/// Running score of a participant or team. Fouls can drive it negative.
pub type Score = i64;

/// Number of Century players used when setup does not provide a usable count.
pub const DEFAULT_CENTURY_PLAYERS: usize = 2;

const STANDARD_POINTS: &[i32] = &[1, 2, 3, 4, 5, 6, 7];
const STANDARD_FOULS: &[i32] = &[-4, -5, -6, -7];
const CENTURY_BALLS: &[i32] = &[10, 2, 3, 4, 5, 6, 7];
const CENTURY_FOULS: &[i32] = &[-4, -5, -6, -7, -10];

/// Scoring ruleset selected at setup. Immutable once the match starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchMode {
    /// Two players scoring individually.
    OneVOne,
    /// Two teams of two players; the team score is canonical.
    TwoVTwo,
    /// Multi-player practice where every player races to the highest score.
    Century,
}

impl MatchMode {
    /// Wire name shared with the persistence record (`"1v1"`, `"2v2"`, `"century"`).
    pub fn as_str(self) -> &'static str {
        match self {
            MatchMode::OneVOne => "1v1",
            MatchMode::TwoVTwo => "2v2",
            MatchMode::Century => "century",
        }
    }

    /// Positive values offered as scoring buttons for this mode.
    pub fn point_values(self) -> &'static [i32] {
        match self {
            MatchMode::Century => CENTURY_BALLS,
            MatchMode::OneVOne | MatchMode::TwoVTwo => STANDARD_POINTS,
        }
    }

    /// Negative values offered as foul buttons for this mode.
    pub fn foul_values(self) -> &'static [i32] {
        match self {
            MatchMode::Century => CENTURY_FOULS,
            MatchMode::OneVOne | MatchMode::TwoVTwo => STANDARD_FOULS,
        }
    }

    /// Whether `delta` belongs to the point or foul vocabulary of this mode.
    pub fn allows_delta(self, delta: i32) -> bool {
        self.point_values().contains(&delta) || self.foul_values().contains(&delta)
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the two sides of a 2v2 match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TeamId {
    /// Participants 0 and 1.
    One,
    /// Participants 2 and 3.
    Two,
}

impl TeamId {
    /// Both teams in display order.
    pub const ALL: [TeamId; 2] = [TeamId::One, TeamId::Two];

    /// Numeric identifier (1 or 2) used on the wire and in storage.
    pub fn number(self) -> u8 {
        match self {
            TeamId::One => 1,
            TeamId::Two => 2,
        }
    }

    /// Parse a numeric team identifier.
    pub fn from_number(value: u8) -> Option<Self> {
        match value {
            1 => Some(TeamId::One),
            2 => Some(TeamId::Two),
            _ => None,
        }
    }

    /// Display label, e.g. `"Team 1"`.
    pub fn label(self) -> String {
        format!("Team {}", self.number())
    }
}

/// Identifies what a scoring event (or the active marker) points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventTarget {
    /// A single participant (1v1 and Century).
    Player(ParticipantId),
    /// A team aggregate (2v2).
    Team(TeamId),
}

impl fmt::Display for EventTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventTarget::Player(id) => write!(f, "participant {id}"),
            EventTarget::Team(team) => write!(f, "team {}", team.number()),
        }
    }
}

/// Individually scored participant (1v1 and Century).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Stable identifier assigned at setup.
    pub id: ParticipantId,
    /// Display name, never blank.
    pub name: String,
    /// Running score.
    pub score: Score,
}

/// Member of a 2v2 team. Members carry no score of their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamMember {
    /// Stable identifier assigned at setup.
    pub id: ParticipantId,
    /// Display name, never blank.
    pub name: String,
    /// Side this member plays for.
    pub team: TeamId,
}

/// Running score of both 2v2 teams.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TeamScores {
    team_one: Score,
    team_two: Score,
}

impl TeamScores {
    /// Current score of `team`.
    pub fn get(&self, team: TeamId) -> Score {
        match team {
            TeamId::One => self.team_one,
            TeamId::Two => self.team_two,
        }
    }

    fn get_mut(&mut self, team: TeamId) -> &mut Score {
        match team {
            TeamId::One => &mut self.team_one,
            TeamId::Two => &mut self.team_two,
        }
    }
}

/// Complete score state, shaped by the match mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Board {
    /// Exactly two players.
    OneVOne {
        /// Players 0 and 1.
        players: [Player; 2],
    },
    /// Four members split into two teams, scored per team.
    TwoVTwo {
        /// Members 0..=3; 0 and 1 play for team 1, 2 and 3 for team 2.
        members: [TeamMember; 4],
        /// Canonical team scores.
        teams: TeamScores,
    },
    /// Any number of players.
    Century {
        /// Players in id order.
        players: Vec<Player>,
    },
}

impl Board {
    /// Mode this board was built for.
    pub fn mode(&self) -> MatchMode {
        match self {
            Board::OneVOne { .. } => MatchMode::OneVOne,
            Board::TwoVTwo { .. } => MatchMode::TwoVTwo,
            Board::Century { .. } => MatchMode::Century,
        }
    }

    /// Number of participants (players or team members).
    pub fn participant_count(&self) -> usize {
        match self {
            Board::OneVOne { players } => players.len(),
            Board::TwoVTwo { members, .. } => members.len(),
            Board::Century { players } => players.len(),
        }
    }

    /// Current score of `target`, if it is part of this board.
    pub fn score_of(&self, target: EventTarget) -> Option<Score> {
        match (self, target) {
            (Board::OneVOne { players }, EventTarget::Player(id)) => {
                players.get(id).map(|player| player.score)
            }
            (Board::Century { players }, EventTarget::Player(id)) => {
                players.get(id).map(|player| player.score)
            }
            (Board::TwoVTwo { teams, .. }, EventTarget::Team(team)) => Some(teams.get(team)),
            _ => None,
        }
    }

    fn check_target(&self, target: EventTarget) -> Result<(), ScoringError> {
        match (self, target) {
            (Board::TwoVTwo { .. }, EventTarget::Team(_)) => Ok(()),
            (Board::OneVOne { .. } | Board::Century { .. }, EventTarget::Player(id)) => {
                let count = self.participant_count();
                if id < count {
                    Ok(())
                } else {
                    Err(ScoringError::UnknownParticipant { id, count })
                }
            }
            (board, target) => Err(ScoringError::TargetMismatch {
                mode: board.mode(),
                target,
            }),
        }
    }

    fn score_mut(&mut self, target: EventTarget) -> Result<&mut Score, ScoringError> {
        let mode = self.mode();
        let count = self.participant_count();
        match (self, target) {
            (Board::OneVOne { players }, EventTarget::Player(id)) => players
                .get_mut(id)
                .map(|player| &mut player.score)
                .ok_or(ScoringError::UnknownParticipant { id, count }),
            (Board::Century { players }, EventTarget::Player(id)) => players
                .get_mut(id)
                .map(|player| &mut player.score)
                .ok_or(ScoringError::UnknownParticipant { id, count }),
            (Board::TwoVTwo { teams, .. }, EventTarget::Team(team)) => Ok(teams.get_mut(team)),
            (_, target) => Err(ScoringError::TargetMismatch { mode, target }),
        }
    }

    fn first_target(&self) -> EventTarget {
        match self {
            Board::TwoVTwo { .. } => EventTarget::Team(TeamId::One),
            Board::OneVOne { .. } | Board::Century { .. } => EventTarget::Player(0),
        }
    }
}

/// Atomic score change requested by the scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringEvent {
    /// Entity whose score changes.
    pub target: EventTarget,
    /// Signed number of points added to the target.
    pub delta: i32,
}

/// Undo log entry: the board exactly as it was before `event` was applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    /// Full pre-event score state.
    pub before: Board,
    /// Event applied on top of `before`.
    pub event: ScoringEvent,
}

/// Rejected scoring request. The engine state is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    /// Participant id outside the roster established at setup.
    #[error("participant {id} is not part of this match ({count} participants)")]
    UnknownParticipant {
        /// Requested participant.
        id: ParticipantId,
        /// Size of the roster.
        count: usize,
    },
    /// Target kind does not exist in this mode (e.g. a team in a Century match).
    #[error("{target} cannot be scored in a {mode} match")]
    TargetMismatch {
        /// Mode of the match.
        mode: MatchMode,
        /// Rejected target.
        target: EventTarget,
    },
}

/// Input gathered by the setup step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSetup {
    /// Selected ruleset.
    pub mode: MatchMode,
    /// Requested number of Century players. Ignored by the fixed-size modes.
    pub participant_count: Option<usize>,
    /// Names keyed by position: `"0"`, `"1"`, ... for Century, `"player1"`..`"player4"` otherwise.
    pub names: HashMap<String, String>,
}

impl MatchSetup {
    /// Setup without any custom name.
    pub fn new(mode: MatchMode) -> Self {
        Self {
            mode,
            participant_count: None,
            names: HashMap::new(),
        }
    }

    /// Builder-style helper attaching a name to a positional key.
    pub fn with_name(mut self, key: impl Into<String>, name: impl Into<String>) -> Self {
        self.names.insert(key.into(), name.into());
        self
    }

    /// Builder-style helper setting the Century player count.
    pub fn with_participant_count(mut self, count: usize) -> Self {
        self.participant_count = Some(count);
        self
    }

    /// Positional key under which the name of participant `index` is expected.
    pub fn name_key(mode: MatchMode, index: usize) -> String {
        match mode {
            MatchMode::Century => index.to_string(),
            MatchMode::OneVOne | MatchMode::TwoVTwo => format!("player{}", index + 1),
        }
    }

    /// Placeholder used when the name of participant `index` is blank.
    pub fn placeholder_name(mode: MatchMode, index: usize) -> String {
        match mode {
            MatchMode::Century | MatchMode::OneVOne => format!("Player {}", index + 1),
            MatchMode::TwoVTwo => format!("Team {} Player {}", index / 2 + 1, index % 2 + 1),
        }
    }

    fn resolved_name(&self, index: usize) -> String {
        self.names
            .get(&Self::name_key(self.mode, index))
            .map(|name| name.trim())
            .filter(|name| !name.is_empty())
            .map(str::to_owned)
            .unwrap_or_else(|| Self::placeholder_name(self.mode, index))
    }

    /// Number of Century players this setup yields: the requested count, or
    /// [`DEFAULT_CENTURY_PLAYERS`] when it is missing or 0.
    pub fn century_count(&self) -> usize {
        self.participant_count
            .filter(|count| *count > 0)
            .unwrap_or(DEFAULT_CENTURY_PLAYERS)
    }

    fn player(&self, id: ParticipantId) -> Player {
        Player {
            id,
            name: self.resolved_name(id),
            score: 0,
        }
    }

    fn member(&self, id: ParticipantId) -> TeamMember {
        TeamMember {
            id,
            name: self.resolved_name(id),
            team: if id < 2 { TeamId::One } else { TeamId::Two },
        }
    }
}

/// In-memory scoring state of one live match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchEngine {
    board: Board,
    history: Vec<HistoryEntry>,
    active: EventTarget,
}

impl MatchEngine {
    /// Build a fresh engine from setup input. Never fails: blank names and
    /// unusable counts fall back to defaults.
    pub fn initialize(setup: &MatchSetup) -> Self {
        let board = match setup.mode {
            MatchMode::OneVOne => Board::OneVOne {
                players: [setup.player(0), setup.player(1)],
            },
            MatchMode::TwoVTwo => Board::TwoVTwo {
                members: [
                    setup.member(0),
                    setup.member(1),
                    setup.member(2),
                    setup.member(3),
                ],
                teams: TeamScores::default(),
            },
            MatchMode::Century => Board::Century {
                players: (0..setup.century_count())
                    .map(|id| setup.player(id))
                    .collect(),
            },
        };
        let active = board.first_target();

        Self {
            board,
            history: Vec::new(),
            active,
        }
    }

    /// Mode of the match.
    pub fn mode(&self) -> MatchMode {
        self.board.mode()
    }

    /// Current score state.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Entity currently highlighted by the scorer.
    pub fn active(&self) -> EventTarget {
        self.active
    }

    /// Undo log, oldest entry first.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Whether [`MatchEngine::undo`] would change anything.
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Add `delta` to the score of `target`, recording the previous state for undo.
    ///
    /// Any integer is accepted; restricting deltas to the mode vocabulary is the
    /// caller's concern. Returns the target's new score.
    pub fn apply(&mut self, target: EventTarget, delta: i32) -> Result<Score, ScoringError> {
        let before = self.board.clone();
        let score = self.board.score_mut(target)?;
        *score += Score::from(delta);
        let updated = *score;

        self.history.push(HistoryEntry {
            before,
            event: ScoringEvent { target, delta },
        });

        Ok(updated)
    }

    /// Restore the board captured by the most recent event and drop that entry.
    ///
    /// Returns the undone event, or `None` when there is nothing to undo.
    pub fn undo(&mut self) -> Option<ScoringEvent> {
        let entry = self.history.pop()?;
        self.board = entry.before;
        Some(entry.event)
    }

    /// Move the active marker. Has no effect on scores or history.
    pub fn set_active(&mut self, target: EventTarget) -> Result<(), ScoringError> {
        self.board.check_target(target)?;
        self.active = target;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn century(count: usize) -> MatchEngine {
        MatchEngine::initialize(&MatchSetup::new(MatchMode::Century).with_participant_count(count))
    }

    fn scores(engine: &MatchEngine) -> Vec<Score> {
        match engine.board() {
            Board::OneVOne { players } => players.iter().map(|p| p.score).collect(),
            Board::Century { players } => players.iter().map(|p| p.score).collect(),
            Board::TwoVTwo { teams, .. } => TeamId::ALL.iter().map(|t| teams.get(*t)).collect(),
        }
    }

    #[test]
    fn century_builds_requested_players_with_placeholders() {
        let setup = MatchSetup::new(MatchMode::Century)
            .with_participant_count(4)
            .with_name("1", "  Ronnie ")
            .with_name("2", "   ");
        let engine = MatchEngine::initialize(&setup);

        let Board::Century { players } = engine.board() else {
            panic!("expected century board");
        };
        let names: Vec<_> = players.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Player 1", "Ronnie", "Player 3", "Player 4"]);
        assert!(players.iter().enumerate().all(|(i, p)| p.id == i && p.score == 0));
        assert_eq!(engine.active(), EventTarget::Player(0));
        assert!(!engine.can_undo());
    }

    #[test]
    fn century_without_count_defaults_to_two_players() {
        let engine = MatchEngine::initialize(&MatchSetup::new(MatchMode::Century));
        assert_eq!(engine.board().participant_count(), 2);

        let engine = century(0);
        assert_eq!(engine.board().participant_count(), 2);
    }

    #[test]
    fn century_count_matches_the_built_roster() {
        for requested in [None, Some(0), Some(1), Some(5)] {
            let mut setup = MatchSetup::new(MatchMode::Century);
            setup.participant_count = requested;
            let engine = MatchEngine::initialize(&setup);
            assert_eq!(setup.century_count(), engine.board().participant_count());
        }
    }

    #[test]
    fn century_has_no_upper_bound() {
        let engine = century(12);
        assert_eq!(engine.board().participant_count(), 12);
    }

    #[test]
    fn one_v_one_uses_player_keys() {
        let setup = MatchSetup::new(MatchMode::OneVOne)
            .with_participant_count(5)
            .with_name("player2", "Judd");
        let engine = MatchEngine::initialize(&setup);

        let Board::OneVOne { players } = engine.board() else {
            panic!("expected 1v1 board");
        };
        assert_eq!(players[0].name, "Player 1");
        assert_eq!(players[1].name, "Judd");
    }

    #[test]
    fn two_v_two_assigns_teams_by_position() {
        let setup = MatchSetup::new(MatchMode::TwoVTwo).with_name("player3", "Mark");
        let engine = MatchEngine::initialize(&setup);

        let Board::TwoVTwo { members, teams } = engine.board() else {
            panic!("expected 2v2 board");
        };
        let layout: Vec<_> = members
            .iter()
            .map(|m| (m.id, m.name.as_str(), m.team))
            .collect();
        assert_eq!(
            layout,
            [
                (0, "Team 1 Player 1", TeamId::One),
                (1, "Team 1 Player 2", TeamId::One),
                (2, "Mark", TeamId::Two),
                (3, "Team 2 Player 2", TeamId::Two),
            ]
        );
        assert_eq!(*teams, TeamScores::default());
        assert_eq!(engine.active(), EventTarget::Team(TeamId::One));
    }

    #[test]
    fn apply_adds_delta_and_allows_negative_scores() {
        let mut engine = century(2);
        assert_eq!(engine.apply(EventTarget::Player(1), 7), Ok(7));
        assert_eq!(engine.apply(EventTarget::Player(0), -10), Ok(-10));
        assert_eq!(scores(&engine), [-10, 7]);
        assert_eq!(engine.history().len(), 2);
    }

    #[test]
    fn apply_accepts_values_outside_the_vocabulary() {
        let mut engine = MatchEngine::initialize(&MatchSetup::new(MatchMode::OneVOne));
        assert!(!MatchMode::OneVOne.allows_delta(147));
        assert_eq!(engine.apply(EventTarget::Player(0), 147), Ok(147));
    }

    #[test]
    fn team_events_update_the_team_aggregate() {
        let mut engine = MatchEngine::initialize(&MatchSetup::new(MatchMode::TwoVTwo));
        engine.apply(EventTarget::Team(TeamId::Two), 5).unwrap();
        engine.apply(EventTarget::Team(TeamId::Two), -4).unwrap();
        assert_eq!(scores(&engine), [0, 1]);
    }

    #[test]
    fn invalid_targets_leave_state_untouched() {
        let mut engine = century(3);
        let before = engine.clone();

        assert_eq!(
            engine.apply(EventTarget::Player(3), 5),
            Err(ScoringError::UnknownParticipant { id: 3, count: 3 })
        );
        assert_eq!(
            engine.apply(EventTarget::Team(TeamId::One), 5),
            Err(ScoringError::TargetMismatch {
                mode: MatchMode::Century,
                target: EventTarget::Team(TeamId::One),
            })
        );
        assert_eq!(engine, before);

        let mut doubles = MatchEngine::initialize(&MatchSetup::new(MatchMode::TwoVTwo));
        assert!(matches!(
            doubles.apply(EventTarget::Player(0), 1),
            Err(ScoringError::TargetMismatch { .. })
        ));
        assert!(doubles.history().is_empty());
    }

    #[test]
    fn apply_then_undo_restores_identical_state() {
        let mut engine = century(3);
        engine.apply(EventTarget::Player(2), 4).unwrap();
        engine.set_active(EventTarget::Player(1)).unwrap();
        let before = engine.clone();

        engine.apply(EventTarget::Player(1), -7).unwrap();
        let undone = engine.undo();

        assert_eq!(
            undone,
            Some(ScoringEvent {
                target: EventTarget::Player(1),
                delta: -7
            })
        );
        assert_eq!(engine, before);
    }

    #[test]
    fn undoing_everything_returns_to_zero() {
        let mut engine = MatchEngine::initialize(&MatchSetup::new(MatchMode::TwoVTwo));
        let events = [
            (TeamId::One, 7),
            (TeamId::Two, 3),
            (TeamId::One, -4),
            (TeamId::Two, 6),
            (TeamId::Two, -7),
        ];
        for (team, delta) in events {
            engine.apply(EventTarget::Team(team), delta).unwrap();
        }

        for _ in 0..events.len() {
            assert!(engine.undo().is_some());
        }
        assert_eq!(scores(&engine), [0, 0]);
        assert!(!engine.can_undo());
    }

    #[test]
    fn history_length_tracks_applies_minus_undos() {
        let mut engine = century(4);
        for round in 0..9 {
            engine.apply(EventTarget::Player(round % 4), 2).unwrap();
        }
        for _ in 0..4 {
            engine.undo();
        }
        assert_eq!(engine.history().len(), 5);
        assert_eq!(scores(&engine).iter().sum::<Score>(), 10);
    }

    #[test]
    fn undo_on_empty_history_is_a_noop() {
        let mut engine = century(2);
        let before = engine.clone();
        assert_eq!(engine.undo(), None);
        assert_eq!(engine, before);
    }

    #[test]
    fn set_active_validates_target_without_touching_scores() {
        let mut engine = MatchEngine::initialize(&MatchSetup::new(MatchMode::TwoVTwo));
        engine.set_active(EventTarget::Team(TeamId::Two)).unwrap();
        assert_eq!(engine.active(), EventTarget::Team(TeamId::Two));
        assert!(engine.history().is_empty());

        assert!(engine.set_active(EventTarget::Player(2)).is_err());
        assert_eq!(engine.active(), EventTarget::Team(TeamId::Two));
    }

    #[test]
    fn vocabulary_depends_on_mode() {
        assert!(MatchMode::Century.allows_delta(10));
        assert!(MatchMode::Century.allows_delta(-10));
        assert!(!MatchMode::Century.allows_delta(1));
        assert!(MatchMode::OneVOne.allows_delta(1));
        assert!(!MatchMode::TwoVTwo.allows_delta(-10));
        assert!(!MatchMode::TwoVTwo.allows_delta(0));
    }

    #[test]
    fn team_numbers_round_trip() {
        for team in TeamId::ALL {
            assert_eq!(TeamId::from_number(team.number()), Some(team));
        }
        assert_eq!(TeamId::from_number(3), None);
        assert_eq!(TeamId::Two.label(), "Team 2");
    }
}

#[cfg(test)]
mod proptests {
    use proptest::prelude::*;

    use super::*;

    fn century_events() -> impl Strategy<Value = (usize, Vec<(usize, i32)>)> {
        (1usize..8).prop_flat_map(|players| {
            (
                Just(players),
                prop::collection::vec((0..players, -10i32..=10), 0..40),
            )
        })
    }

    proptest! {
        /// Undoing every event restores the freshly initialized board.
        #[test]
        fn prop_full_undo_restores_initial_board((players, events) in century_events()) {
            let mut engine = MatchEngine::initialize(
                &MatchSetup::new(MatchMode::Century).with_participant_count(players),
            );
            let initial = engine.board().clone();

            for (id, delta) in &events {
                engine.apply(EventTarget::Player(*id), *delta).unwrap();
            }
            prop_assert_eq!(engine.history().len(), events.len());

            while engine.undo().is_some() {}
            prop_assert_eq!(engine.board(), &initial);
        }

        /// Scores always equal the sum of the deltas applied to them.
        #[test]
        fn prop_scores_are_sum_of_deltas((players, events) in century_events()) {
            let mut engine = MatchEngine::initialize(
                &MatchSetup::new(MatchMode::Century).with_participant_count(players),
            );
            let mut expected = vec![0 as Score; players];

            for (id, delta) in &events {
                engine.apply(EventTarget::Player(*id), *delta).unwrap();
                expected[*id] += Score::from(*delta);
            }

            for (id, score) in expected.iter().enumerate() {
                prop_assert_eq!(engine.board().score_of(EventTarget::Player(id)), Some(*score));
            }
        }
    }
}
