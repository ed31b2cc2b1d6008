use crate::{
    dao::models::MatchEntity,
    dto::history::{MatchHistoryItem, MatchStatsResponse},
    error::ServiceError,
    state::SharedState,
};

/// Reduction of a user's stored matches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchStats {
    /// Number of records folded.
    pub matches_played: usize,
    /// Records with a single winner.
    pub matches_won: usize,
    /// Records ending in a draw.
    pub draws: usize,
    /// Sum of every final score.
    pub total_points: i64,
    /// Highest final score, floored at 0.
    pub highest_break: i64,
}

impl MatchStats {
    /// Fold `matches` into aggregate counters.
    ///
    /// Every match without a draw counts as won: the records do not say which
    /// participant was the user.
    pub fn from_matches<'a>(matches: impl IntoIterator<Item = &'a MatchEntity>) -> Self {
        matches.into_iter().fold(Self::default(), |mut stats, record| {
            stats.matches_played += 1;
            if record.winner.is_draw {
                stats.draws += 1;
            } else {
                stats.matches_won += 1;
            }
            for score in record.final_scores.values() {
                stats.total_points += score;
                stats.highest_break = stats.highest_break.max(*score);
            }
            stats
        })
    }
}

/// Most recent finished matches of `user_id`, newest first.
pub async fn recent_matches(
    state: &SharedState,
    user_id: &str,
) -> Result<Vec<MatchHistoryItem>, ServiceError> {
    let store = state.require_match_store().await?;
    let limit = state.config().history_limit();
    let records = store.recent_matches(user_id.to_owned(), limit).await?;
    Ok(records.into_iter().map(MatchHistoryItem::from).collect())
}

/// Aggregate statistics over every finished match of `user_id`.
pub async fn stats(state: &SharedState, user_id: &str) -> Result<MatchStatsResponse, ServiceError> {
    let store = state.require_match_store().await?;
    let records = store.all_matches(user_id.to_owned()).await?;
    Ok(MatchStats::from_matches(&records).into())
}

#[cfg(test)]
mod tests {
    use std::time::SystemTime;

    use indexmap::IndexMap;
    use uuid::Uuid;

    use super::*;
    use crate::dao::models::{MatchTypeEntity, WinnerEntity};

    fn record(scores: &[(&str, i64)], is_draw: bool) -> MatchEntity {
        MatchEntity {
            id: Uuid::new_v4(),
            user_id: "u".into(),
            match_type: MatchTypeEntity::Century,
            players: Vec::new(),
            winner: WinnerEntity {
                name: "whoever".into(),
                is_draw,
            },
            final_scores: scores
                .iter()
                .map(|(name, score)| (name.to_string(), *score))
                .collect::<IndexMap<_, _>>(),
            date: SystemTime::now(),
        }
    }

    #[test]
    fn stats_count_draws_and_sum_points() {
        let records = [
            record(&[("A", 40), ("B", 12)], false),
            record(&[("A", 8), ("B", 8)], true),
            record(&[("A", -4), ("B", 0)], false),
        ];

        let stats = MatchStats::from_matches(&records);

        assert_eq!(
            stats,
            MatchStats {
                matches_played: 3,
                matches_won: 2,
                draws: 1,
                total_points: 64,
                highest_break: 40,
            }
        );
    }

    #[test]
    fn highest_break_never_goes_below_zero() {
        let records = [record(&[("A", -7), ("B", -11)], false)];
        let stats = MatchStats::from_matches(&records);
        assert_eq!(stats.highest_break, 0);
        assert_eq!(stats.total_points, -18);
    }

    #[test]
    fn no_matches_yields_zeroes() {
        assert_eq!(MatchStats::from_matches(&Vec::<MatchEntity>::new()), MatchStats::default());
    }
}
