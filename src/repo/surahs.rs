//! Surah retrieval.
//!
//! Two shapes come out of this module: bare [`Surah`] rows for the list
//! operation, and [`SurahWithVerses`] for the detail operation, where every
//! verse carries its full relation set (translations, tafsirs, context).
//!
//! List ordering is driven by the validated query: canonical order sorts by
//! id, chronological order by the `chronological_order` column. Both keys
//! are unique, so the result order is total.

use rusqlite::{OptionalExtension, params};

use crate::params::{SortOrder, SurahListQuery};
use crate::repo::verses;
use crate::store::{Store, StoreError};
use crate::types::{Surah, SurahWithVerses};

pub(crate) const COLUMNS: &str = "id, name, name_transliteration, name_translation, \
     revelation_type, chronological_order, verses_count, description";

pub(crate) fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Surah> {
    Ok(Surah {
        id: row.get(0)?,
        name: row.get(1)?,
        name_transliteration: row.get(2)?,
        name_translation: row.get(3)?,
        revelation_type: row.get(4)?,
        chronological_order: row.get(5)?,
        verses_count: row.get(6)?,
        description: row.get(7)?,
    })
}

/// All surahs matching the query, in its requested order.
pub fn list(store: &Store, query: &SurahListQuery) -> Result<Vec<Surah>, StoreError> {
    let order_column = match query.sort {
        SortOrder::Standard => "id",
        SortOrder::Chronological => "chronological_order",
    };
    let filter = match query.revelation_type {
        Some(_) => " WHERE revelation_type = ?1",
        None => "",
    };
    let sql = format!("SELECT {COLUMNS} FROM surahs{filter} ORDER BY {order_column} ASC");
    let mut stmt = store.conn().prepare(&sql)?;
    let rows = match query.revelation_type {
        Some(category) => stmt.query_map(params![category], from_row)?,
        None => stmt.query_map([], from_row)?,
    };
    Ok(rows.collect::<Result<Vec<_>, _>>()?)
}

/// A single surah row, without verses.
pub fn get(store: &Store, id: u16) -> Result<Option<Surah>, StoreError> {
    let sql = format!("SELECT {COLUMNS} FROM surahs WHERE id = ?1");
    Ok(store
        .conn()
        .query_row(&sql, params![id], from_row)
        .optional()?)
}

/// A surah with all of its verses, ordered by verse number, each verse
/// carrying every relation.
pub fn get_with_verses(store: &Store, id: u16) -> Result<Option<SurahWithVerses>, StoreError> {
    let Some(surah) = get(store, id)? else {
        return Ok(None);
    };
    let verses = verses::for_surah(store, id)?;
    Ok(Some(SurahWithVerses { surah, verses }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chronology::RevelationType;
    use crate::test_helpers::fixture_store;

    fn all(sort: SortOrder) -> SurahListQuery {
        SurahListQuery {
            sort,
            revelation_type: None,
        }
    }

    #[test]
    fn list_standard_orders_by_canonical_id() {
        let store = fixture_store();
        let surahs = list(&store, &all(SortOrder::Standard)).unwrap();
        let ids: Vec<u16> = surahs.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2, 96]);
    }

    #[test]
    fn list_chronological_orders_by_revelation_sequence() {
        let store = fixture_store();
        let surahs = list(&store, &all(SortOrder::Chronological)).unwrap();
        let ids: Vec<u16> = surahs.iter().map(|s| s.id).collect();
        // Surah 96 was revealed first, then 1 (order 5), then 2 (order 87).
        assert_eq!(ids, vec![96, 1, 2]);
        let orders: Vec<u16> = surahs.iter().map(|s| s.chronological_order).collect();
        assert!(orders.is_sorted());
    }

    #[test]
    fn list_filters_by_revelation_category() {
        let store = fixture_store();
        let meccan = list(
            &store,
            &SurahListQuery {
                sort: SortOrder::Standard,
                revelation_type: Some(RevelationType::Meccan),
            },
        )
        .unwrap();
        assert_eq!(meccan.iter().map(|s| s.id).collect::<Vec<_>>(), vec![1, 96]);

        let medinan = list(
            &store,
            &SurahListQuery {
                sort: SortOrder::Standard,
                revelation_type: Some(RevelationType::Medinan),
            },
        )
        .unwrap();
        assert_eq!(medinan.iter().map(|s| s.id).collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn get_returns_full_row() {
        let store = fixture_store();
        let surah = get(&store, 1).unwrap().unwrap();
        assert_eq!(surah.name_transliteration, "Al-Fatihah");
        assert_eq!(surah.chronological_order, 5);
        assert_eq!(surah.revelation_type, RevelationType::Meccan);
    }

    #[test]
    fn get_absent_surah_is_none_not_error() {
        let store = fixture_store();
        assert!(get(&store, 50).unwrap().is_none());
    }

    #[test]
    fn detail_carries_ordered_verses_with_all_relations() {
        let store = fixture_store();
        let detail = get_with_verses(&store, 1).unwrap().unwrap();
        assert_eq!(detail.surah.id, 1);
        assert_eq!(detail.verses.len(), 7);

        let numbers: Vec<u16> = detail.verses.iter().map(|v| v.verse.verse_number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5, 6, 7]);

        let first = &detail.verses[0];
        assert_eq!(first.translations.as_ref().unwrap().len(), 2);
        assert_eq!(first.tafsirs.as_ref().unwrap().len(), 1);
        assert!(first.revelation_context.as_ref().unwrap().is_some());
        // Verses inside a surah detail do not repeat their owner.
        assert!(first.surah.is_none());

        // A verse without stored relations still reports them, as empty.
        let third = &detail.verses[2];
        assert_eq!(third.translations.as_ref().unwrap().len(), 0);
        assert!(third.revelation_context.as_ref().unwrap().is_none());
    }

    #[test]
    fn detail_absent_surah_is_none() {
        let store = fixture_store();
        assert!(get_with_verses(&store, 114).unwrap().is_none());
    }
}
