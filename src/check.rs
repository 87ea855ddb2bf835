//! Corpus verification.
//!
//! `tanzil check` inspects a seeded database and reports how complete and
//! internally consistent it is:
//!
//! - row counts per table, against the expected 114 surahs and 6236 verses
//! - surahs that have no verses at all (expected with the built-in sample
//!   data; a full corpus import should leave none)
//! - stored chronology columns that disagree with the revelation-order table
//! - verse keys that disagree with their own surah and verse numbers
//!
//! Consistency faults fail the command. An incomplete verse corpus does not:
//! the surah table must always be whole, the verse text may be partial.

use crate::chronology::{self, RevelationType, SURAH_COUNT};
use crate::store::{Counts, Store, StoreError};

/// Verse count of the complete corpus.
pub const FULL_VERSE_COUNT: i64 = 6236;

/// What `check` found.
#[derive(Debug)]
pub struct CheckReport {
    pub counts: Counts,
    /// Transliterated names of surahs with no verses, canonical order.
    pub empty_surahs: Vec<String>,
    /// Surah ids whose stored order or category disagrees with the
    /// revelation-order table.
    pub chronology_mismatches: Vec<u16>,
    /// Verses whose stored key disagrees with their surah and verse numbers.
    pub key_mismatches: i64,
}

impl CheckReport {
    /// True when the stored rows contradict the revelation-order table or
    /// themselves, or the surah table is not whole.
    pub fn has_faults(&self) -> bool {
        self.counts.surahs != i64::from(SURAH_COUNT)
            || !self.chronology_mismatches.is_empty()
            || self.key_mismatches != 0
    }
}

/// Inspect `store` and gather a [`CheckReport`].
pub fn run(store: &Store) -> Result<CheckReport, StoreError> {
    Ok(CheckReport {
        counts: store.counts()?,
        empty_surahs: empty_surahs(store)?,
        chronology_mismatches: chronology_mismatches(store)?,
        key_mismatches: key_mismatches(store)?,
    })
}

fn empty_surahs(store: &Store) -> Result<Vec<String>, StoreError> {
    let mut stmt = store.conn().prepare(
        "SELECT s.name_transliteration
         FROM surahs s LEFT JOIN verses v ON v.surah_id = s.id
         WHERE v.id IS NULL
         ORDER BY s.id ASC",
    )?;
    let names = stmt
        .query_map([], |row| row.get(0))?
        .collect::<Result<Vec<String>, _>>()?;
    Ok(names)
}

fn chronology_mismatches(store: &Store) -> Result<Vec<u16>, StoreError> {
    let mut stmt = store
        .conn()
        .prepare("SELECT id, chronological_order, revelation_type FROM surahs ORDER BY id ASC")?;
    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, u16>(0)?,
            row.get::<_, u16>(1)?,
            row.get::<_, RevelationType>(2)?,
        ))
    })?;

    let mut mismatched = Vec::new();
    for row in rows {
        let (id, order, category) = row?;
        match chronology::entry_for_surah(id) {
            Some(entry) if entry.order == order && entry.revelation_type == category => {}
            _ => mismatched.push(id),
        }
    }
    Ok(mismatched)
}

fn key_mismatches(store: &Store) -> Result<i64, StoreError> {
    Ok(store.conn().query_row(
        "SELECT count(*) FROM verses
         WHERE verse_key != surah_id || ':' || verse_number",
        [],
        |row| row.get(0),
    )?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use rusqlite::params;

    #[test]
    fn seeded_database_passes_clean() {
        let mut store = Store::open_in_memory().unwrap();
        seed::run(&mut store).unwrap();

        let report = run(&store).unwrap();
        assert!(!report.has_faults());
        assert_eq!(report.counts.surahs, 114);
        assert_eq!(report.counts.verses, 12);
        assert!(report.chronology_mismatches.is_empty());
        assert_eq!(report.key_mismatches, 0);
        // Only the two sample surahs have verses.
        assert_eq!(report.empty_surahs.len(), 112);
        assert_eq!(report.empty_surahs[0], "Al-Baqarah");
    }

    #[test]
    fn empty_database_counts_as_faulty() {
        let store = Store::open_in_memory().unwrap();
        let report = run(&store).unwrap();
        assert!(report.has_faults());
        assert_eq!(report.counts.surahs, 0);
        assert!(report.empty_surahs.is_empty());
    }

    #[test]
    fn detects_disagreement_with_the_revelation_order_table() {
        let store = Store::open_in_memory().unwrap();
        // Al-Fatihah belongs at chronological position 5, not 1.
        store
            .conn()
            .execute(
                "INSERT INTO surahs (id, name, name_transliteration, name_translation,
                                     revelation_type, chronological_order, verses_count)
                 VALUES (1, 'الفاتحة', 'Al-Fatihah', 'The Opening', 'Meccan', 1, 7)",
                [],
            )
            .unwrap();

        let report = run(&store).unwrap();
        assert_eq!(report.chronology_mismatches, vec![1]);
        assert!(report.has_faults());
    }

    #[test]
    fn detects_category_disagreement() {
        let store = Store::open_in_memory().unwrap();
        // Al-Baqarah is Medinan; position 87 alone does not make the row right.
        store
            .conn()
            .execute(
                "INSERT INTO surahs (id, name, name_transliteration, name_translation,
                                     revelation_type, chronological_order, verses_count)
                 VALUES (2, 'البقرة', 'Al-Baqarah', 'The Cow', 'Meccan', 87, 286)",
                [],
            )
            .unwrap();

        let report = run(&store).unwrap();
        assert_eq!(report.chronology_mismatches, vec![2]);
    }

    #[test]
    fn detects_verse_keys_that_disagree_with_their_columns() {
        let store = Store::open_in_memory().unwrap();
        store
            .conn()
            .execute(
                "INSERT INTO surahs (id, name, name_transliteration, name_translation,
                                     revelation_type, chronological_order, verses_count)
                 VALUES (1, 'الفاتحة', 'Al-Fatihah', 'The Opening', 'Meccan', 5, 7)",
                [],
            )
            .unwrap();
        store
            .conn()
            .execute(
                "INSERT INTO verses (surah_id, verse_number, verse_key, text_arabic,
                                     text_uthmani, text_simple, juz_number, hizb_number,
                                     page_number)
                 VALUES (?1, ?2, ?3, 'a', 'u', 's', 1, 1, 1)",
                params![1, 1, "1:2"],
            )
            .unwrap();

        let report = run(&store).unwrap();
        assert_eq!(report.key_mismatches, 1);
        assert!(report.has_faults());
    }
}
