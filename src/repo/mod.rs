//! Read-only repository access over the corpus store.
//!
//! | Module | Role |
//! |--------|------|
//! | [`surahs`] | Surah list (category filter, canonical or chronological order) and single-surah lookup |
//! | [`verses`] | Paginated verse list with on-demand relations, single-verse lookup by key |
//!
//! Every operation here is a read. Not-found is an `Ok(None)` outcome, never
//! an error; only storage faults surface as
//! [`StoreError`](crate::store::StoreError). Result order is always
//! deterministic: both surah sort keys are unique, and verses order by
//! `(surah_id, verse_number)`, which is unique by schema.

pub mod surahs;
pub mod verses;

/// `?,?,?` placeholder list for a dynamic `IN (...)` clause.
///
/// `count` must be nonzero; callers skip the query entirely for empty id
/// sets.
pub(crate) fn repeat_vars(count: usize) -> String {
    debug_assert!(count > 0);
    let mut vars = "?,".repeat(count);
    vars.pop();
    vars
}
