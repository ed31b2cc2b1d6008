use std::time::Duration;

use tokio::{task::JoinHandle, time::timeout};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::{
    dto::{
        live::{
            ActiveTargetRequest, OutcomeResponse, ScoreEventRequest, ScoreboardResponse,
            UndoResponse,
        },
        setup::MatchSetupRequest,
    },
    error::ServiceError,
    state::{
        SharedState,
        scoring::{EventTarget, MatchMode, MatchSetup},
        session::{FinishedMatch, LiveMatch},
    },
};

/// Upper bound on how long a finished match may wait for the storage backend.
const PERSIST_TIMEOUT: Duration = Duration::from_secs(10);

/// What happened to a finished match on its way to storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistStatus {
    /// Record written.
    Saved,
    /// No storage backend installed (degraded mode); nothing was written.
    Skipped,
    /// The backend rejected the write or did not answer in time.
    Failed(String),
}

/// Outcome of a finish request plus the detached persistence task.
///
/// Handlers return `outcome` immediately; `persistence` is only awaited by tests.
#[derive(Debug)]
pub struct MatchFinish {
    /// Verdict sent back to the scorer.
    pub outcome: OutcomeResponse,
    /// Detached task recording the match.
    pub persistence: JoinHandle<PersistStatus>,
}

/// Complete setup and register a new live match for `owner`.
pub fn start_match(
    state: &SharedState,
    owner: &str,
    request: MatchSetupRequest,
) -> Result<ScoreboardResponse, ServiceError> {
    let setup = MatchSetup::from(request);
    if setup.mode == MatchMode::Century {
        let count = setup.century_count();
        let bounds = state.config().century_players();
        if !bounds.contains(&count) {
            return Err(ServiceError::InvalidInput(format!(
                "century matches take between {} and {} players (got {count})",
                bounds.start(),
                bounds.end()
            )));
        }
    }

    let live = LiveMatch::new(owner, &setup);
    let view = ScoreboardResponse::from(&live);
    info!(
        match_id = %live.id,
        mode = %setup.mode,
        participants = live.engine.board().participant_count(),
        "match started"
    );
    state.insert_live_match(live);

    Ok(view)
}

/// Current state of a live match.
pub fn scoreboard(
    state: &SharedState,
    owner: &str,
    id: Uuid,
) -> Result<ScoreboardResponse, ServiceError> {
    state.with_live_match(id, owner, |live| Ok(ScoreboardResponse::from(&*live)))
}

/// Apply a point or foul. The delta must belong to the vocabulary of the match mode.
pub fn record_event(
    state: &SharedState,
    owner: &str,
    id: Uuid,
    request: ScoreEventRequest,
) -> Result<ScoreboardResponse, ServiceError> {
    let target = EventTarget::try_from(request.target)?;
    let delta = request.delta;

    state.with_live_match(id, owner, |live| {
        let mode = live.engine.mode();
        if !mode.allows_delta(delta) {
            return Err(ServiceError::InvalidInput(format!(
                "{delta} is neither a point nor a foul value in {mode} matches"
            )));
        }

        let score = live.engine.apply(target, delta)?;
        debug!(match_id = %id, %target, delta, score, "score event applied");
        Ok(ScoreboardResponse::from(&*live))
    })
}

/// Revert the most recent event. An empty history leaves the match untouched.
pub fn undo(state: &SharedState, owner: &str, id: Uuid) -> Result<UndoResponse, ServiceError> {
    state.with_live_match(id, owner, |live| {
        let undone = live.engine.undo();
        match &undone {
            Some(event) => debug!(
                match_id = %id,
                target = %event.target,
                delta = event.delta,
                "score event undone"
            ),
            None => debug!(match_id = %id, "undo requested with empty history"),
        }

        Ok(UndoResponse {
            undone: undone.map(Into::into),
            scoreboard: ScoreboardResponse::from(&*live),
        })
    })
}

/// Move the active marker.
pub fn set_active(
    state: &SharedState,
    owner: &str,
    id: Uuid,
    request: ActiveTargetRequest,
) -> Result<ScoreboardResponse, ServiceError> {
    let target = EventTarget::try_from(request.target)?;
    state.with_live_match(id, owner, |live| {
        live.engine.set_active(target)?;
        Ok(ScoreboardResponse::from(&*live))
    })
}

/// Discard a live match without recording it.
pub fn abandon(state: &SharedState, owner: &str, id: Uuid) -> Result<(), ServiceError> {
    let live = state.take_live_match(id, owner)?;
    info!(
        match_id = %id,
        events = live.engine.history().len(),
        "match abandoned"
    );
    Ok(())
}

/// End a live match, compute its outcome and hand the record to storage.
///
/// The session is removed before anything else, so a second finish reports
/// [`ServiceError::NoMatchConfigured`]. Storage failures never reach the caller.
pub fn finish_match(
    state: &SharedState,
    owner: &str,
    id: Uuid,
) -> Result<MatchFinish, ServiceError> {
    let finished = state.take_live_match(id, owner)?.finish();
    let outcome = OutcomeResponse::new(
        finished.id,
        finished.mode.into(),
        finished.outcome.clone(),
    );
    info!(
        match_id = %id,
        mode = %finished.mode,
        winner = %outcome.winner,
        is_draw = outcome.is_draw,
        top_score = outcome.top_score,
        "match finished"
    );

    let persistence = tokio::spawn(persist_finished_match(state.clone(), finished));

    Ok(MatchFinish {
        outcome,
        persistence,
    })
}

async fn persist_finished_match(state: SharedState, finished: FinishedMatch) -> PersistStatus {
    let match_id = finished.id;
    let Ok(store) = state.require_match_store().await else {
        warn!(%match_id, "storage unavailable (degraded mode); finished match not recorded");
        return PersistStatus::Skipped;
    };

    match timeout(PERSIST_TIMEOUT, store.save_match(finished.into())).await {
        Ok(Ok(())) => {
            info!(%match_id, "finished match recorded");
            PersistStatus::Saved
        }
        Ok(Err(err)) => {
            warn!(%match_id, error = %err, "failed to record finished match");
            PersistStatus::Failed(err.to_string())
        }
        Err(_) => {
            warn!(
                %match_id,
                timeout_secs = PERSIST_TIMEOUT.as_secs(),
                "recording finished match timed out"
            );
            PersistStatus::Failed(format!(
                "storage did not answer within {}s",
                PERSIST_TIMEOUT.as_secs()
            ))
        }
    }
}
