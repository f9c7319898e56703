//! Transfer selection: the earliest bus a rider can actually make.

use chrono::{DateTime, Utc};

use crate::domain::{Departure, add_minutes};

/// Pick the earliest departure leaving at least `min_buffer_mins` after
/// `not_before`.
///
/// The threshold is inclusive: a bus leaving exactly at
/// `not_before + min_buffer_mins` is feasible. Effective times are compared,
/// so a late-running bus whose estimate clears the threshold counts even if
/// its timetabled time doesn't. Among equally early candidates the first in
/// input order wins.
///
/// Returns `None` when no candidate clears the threshold.
pub fn select_next_feasible<'a, I>(
    candidates: I,
    not_before: DateTime<Utc>,
    min_buffer_mins: i64,
) -> Option<&'a Departure>
where
    I: IntoIterator<Item = &'a Departure>,
{
    let threshold = add_minutes(not_before, min_buffer_mins);
    candidates
        .into_iter()
        .filter(|d| d.effective_time() >= threshold)
        // min_by_key keeps the first of equal minima
        .min_by_key(|d| d.effective_time())
}
