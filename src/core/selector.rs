//! Picks the chats that go into a review sample.

use crate::api::ChatSource;
use crate::errors::{AppError, AppResult};
use crate::models::ChatSummary;
use crate::ui::messages::info;
use chrono::NaiveDate;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::index;

/// Query `source` for the date range, drop unanswered and practice chats,
/// and draw `sample_size` ids without replacement.
pub fn select(
    source: &dyn ChatSource,
    range: (NaiveDate, NaiveDate),
    sample_size: usize,
    seed: u64,
) -> AppResult<Vec<i64>> {
    let (from, to) = range;
    let summaries = source.list_chats(from, to)?;
    let candidates = eligible_ids(&summaries);

    info(format!(
        "{} chats between {} and {}, {} eligible",
        summaries.len(),
        from,
        to,
        candidates.len()
    ));

    sample_ids(&candidates, sample_size, seed)
}

/// Ids of answered, non-practice chats, in listing order.
pub fn eligible_ids(summaries: &[ChatSummary]) -> Vec<i64> {
    summaries
        .iter()
        .filter(|s| s.is_answered() && !s.is_practice())
        .map(|s| s.id)
        .collect()
}

/// Deterministic sample of `n` ids for a given `seed`.
pub fn sample_ids(ids: &[i64], n: usize, seed: u64) -> AppResult<Vec<i64>> {
    if n > ids.len() {
        return Err(AppError::InsufficientData {
            requested: n,
            available: ids.len(),
        });
    }

    let mut rng = StdRng::seed_from_u64(seed);
    Ok(index::sample(&mut rng, ids.len(), n)
        .into_iter()
        .map(|i| ids[i])
        .collect())
}
