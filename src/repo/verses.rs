//! Verse retrieval.
//!
//! The list operation pages through verses in reading order: `(surah_id,
//! verse_number)` ascending, a stable global order that spans surah
//! boundaries when no surah filter is applied. The total count is computed
//! under the same filter as the page, so pagination metadata always
//! describes the filtered set.
//!
//! Related records load in one follow-up query per requested relation,
//! keyed by the page's verse ids, then attach in memory. The owning surah
//! is always attached to list items and single-verse lookups; only the
//! surah detail path leaves it off (the owner is the enclosing object
//! there).

use std::collections::{BTreeSet, HashMap};

use rusqlite::{Connection, OptionalExtension, params, params_from_iter};

use crate::params::{IncludeFlags, VerseListQuery};
use crate::repo::{repeat_vars, surahs};
use crate::store::{Store, StoreError};
use crate::types::{RevelationContext, Surah, Tafsir, Translation, Verse, VerseWithRelations};

pub(crate) const COLUMNS: &str = "id, surah_id, verse_number, verse_key, text_arabic, \
     text_uthmani, text_simple, juz_number, hizb_number, page_number";

fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Verse> {
    Ok(Verse {
        id: row.get(0)?,
        surah_id: row.get(1)?,
        verse_number: row.get(2)?,
        verse_key: row.get(3)?,
        text_arabic: row.get(4)?,
        text_uthmani: row.get(5)?,
        text_simple: row.get(6)?,
        juz_number: row.get(7)?,
        hizb_number: row.get(8)?,
        page_number: row.get(9)?,
    })
}

/// One page of verses plus the total row count under the same filter.
///
/// A page beyond the end of the result set is empty, not an error.
pub fn list(
    store: &Store,
    query: &VerseListQuery,
) -> Result<(Vec<VerseWithRelations>, i64), StoreError> {
    let conn = store.conn();

    let page = match query.surah_id {
        Some(surah_id) => {
            let sql = format!(
                "SELECT {COLUMNS} FROM verses WHERE surah_id = ?1 \
                 ORDER BY surah_id ASC, verse_number ASC LIMIT ?2 OFFSET ?3"
            );
            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt.query_map(params![surah_id, query.limit, query.offset()], from_row)?;
            rows.collect::<Result<Vec<_>, _>>()?
        }
        None => {
            let sql = format!(
                "SELECT {COLUMNS} FROM verses \
                 ORDER BY surah_id ASC, verse_number ASC LIMIT ?1 OFFSET ?2"
            );
            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt.query_map(params![query.limit, query.offset()], from_row)?;
            rows.collect::<Result<Vec<_>, _>>()?
        }
    };

    let total = count(conn, query.surah_id)?;
    let owners = owners_for(conn, &page)?;
    let mut relations = relations_for(conn, &page, query.include)?;

    let items = page
        .into_iter()
        .map(|verse| {
            let surah = owners.get(&verse.surah_id).cloned();
            relations.attach(verse, surah)
        })
        .collect();
    Ok((items, total))
}

/// A single verse by its `"surah:verse"` key, with every relation and the
/// owning surah attached.
pub fn get_by_key(
    store: &Store,
    verse_key: &str,
) -> Result<Option<VerseWithRelations>, StoreError> {
    let conn = store.conn();
    let sql = format!("SELECT {COLUMNS} FROM verses WHERE verse_key = ?1");
    let Some(verse) = conn
        .query_row(&sql, params![verse_key], from_row)
        .optional()?
    else {
        return Ok(None);
    };

    let surah = surahs::get(store, verse.surah_id)?;
    let mut relations = relations_for(conn, std::slice::from_ref(&verse), IncludeFlags::all())?;
    Ok(Some(relations.attach(verse, surah)))
}

/// All verses of one surah in verse-number order, each with the full
/// relation set and no owner attached. Backs the surah detail operation.
pub(crate) fn for_surah(
    store: &Store,
    surah_id: u16,
) -> Result<Vec<VerseWithRelations>, StoreError> {
    let conn = store.conn();
    let sql = format!("SELECT {COLUMNS} FROM verses WHERE surah_id = ?1 ORDER BY verse_number ASC");
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params![surah_id], from_row)?;
    let verses = rows.collect::<Result<Vec<_>, _>>()?;

    let mut relations = relations_for(conn, &verses, IncludeFlags::all())?;
    Ok(verses
        .into_iter()
        .map(|verse| relations.attach(verse, None))
        .collect())
}

fn count(conn: &Connection, surah_id: Option<u16>) -> Result<i64, StoreError> {
    let total = match surah_id {
        Some(id) => conn.query_row(
            "SELECT count(*) FROM verses WHERE surah_id = ?1",
            params![id],
            |row| row.get(0),
        )?,
        None => conn.query_row("SELECT count(*) FROM verses", [], |row| row.get(0))?,
    };
    Ok(total)
}

/// Owning surahs for a page of verses, keyed by surah id.
fn owners_for(conn: &Connection, page: &[Verse]) -> Result<HashMap<u16, Surah>, StoreError> {
    let ids: BTreeSet<u16> = page.iter().map(|v| v.surah_id).collect();
    if ids.is_empty() {
        return Ok(HashMap::new());
    }
    let sql = format!(
        "SELECT {columns} FROM surahs WHERE id IN ({vars})",
        columns = surahs::COLUMNS,
        vars = repeat_vars(ids.len()),
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params_from_iter(ids.iter()), surahs::from_row)?;
    let mut owners = HashMap::new();
    for row in rows {
        let surah: Surah = row?;
        owners.insert(surah.id, surah);
    }
    Ok(owners)
}

/// Requested related records for a set of verses, keyed by verse id.
///
/// Relations that were not requested are never queried.
struct Relations {
    include: IncludeFlags,
    translations: HashMap<i64, Vec<Translation>>,
    tafsirs: HashMap<i64, Vec<Tafsir>>,
    contexts: HashMap<i64, RevelationContext>,
}

impl Relations {
    /// Move this verse's share of the loaded relations onto it.
    ///
    /// A requested relation with no rows attaches as empty (or absent
    /// context), never as an omitted field.
    fn attach(&mut self, verse: Verse, surah: Option<Surah>) -> VerseWithRelations {
        let id = verse.id;
        VerseWithRelations {
            verse,
            surah,
            translations: self
                .include
                .translations
                .then(|| self.translations.remove(&id).unwrap_or_default()),
            tafsirs: self
                .include
                .tafsir
                .then(|| self.tafsirs.remove(&id).unwrap_or_default()),
            revelation_context: self.include.context.then(|| self.contexts.remove(&id)),
        }
    }
}

fn relations_for(
    conn: &Connection,
    verses: &[Verse],
    include: IncludeFlags,
) -> Result<Relations, StoreError> {
    let mut relations = Relations {
        include,
        translations: HashMap::new(),
        tafsirs: HashMap::new(),
        contexts: HashMap::new(),
    };
    let ids: Vec<i64> = verses.iter().map(|v| v.id).collect();
    if ids.is_empty() {
        return Ok(relations);
    }
    let vars = repeat_vars(ids.len());

    if include.translations {
        let sql = format!(
            "SELECT id, verse_id, language, translator, text FROM translations \
             WHERE verse_id IN ({vars}) ORDER BY id ASC"
        );
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map(params_from_iter(ids.iter()), |row| {
            Ok(Translation {
                id: row.get(0)?,
                verse_id: row.get(1)?,
                language: row.get(2)?,
                translator: row.get(3)?,
                text: row.get(4)?,
            })
        })?;
        for row in rows {
            let translation: Translation = row?;
            relations
                .translations
                .entry(translation.verse_id)
                .or_default()
                .push(translation);
        }
    }

    if include.tafsir {
        let sql = format!(
            "SELECT id, verse_id, source, language, text FROM tafsirs \
             WHERE verse_id IN ({vars}) ORDER BY id ASC"
        );
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map(params_from_iter(ids.iter()), |row| {
            Ok(Tafsir {
                id: row.get(0)?,
                verse_id: row.get(1)?,
                source: row.get(2)?,
                language: row.get(3)?,
                text: row.get(4)?,
            })
        })?;
        for row in rows {
            let tafsir: Tafsir = row?;
            relations
                .tafsirs
                .entry(tafsir.verse_id)
                .or_default()
                .push(tafsir);
        }
    }

    if include.context {
        let sql = format!(
            "SELECT id, verse_id, occasion, historical_date, location, related_events, sources \
             FROM revelation_contexts WHERE verse_id IN ({vars})"
        );
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map(params_from_iter(ids.iter()), |row| {
            Ok(RevelationContext {
                id: row.get(0)?,
                verse_id: row.get(1)?,
                occasion: row.get(2)?,
                historical_date: row.get(3)?,
                location: row.get(4)?,
                related_events: row.get(5)?,
                sources: row.get(6)?,
            })
        })?;
        for row in rows {
            let context: RevelationContext = row?;
            // verse_id is unique in the table, so insert never collides.
            relations.contexts.insert(context.verse_id, context);
        }
    }

    Ok(relations)
}
