//! Database seeding.
//!
//! `tanzil seed` rebuilds the corpus from built-in data: the full
//! 114-surah catalog of [`catalog`], joined at insert time with the
//! revelation-order table, plus the demonstration verses of [`sample`]
//! together with their translations, tafsir summaries, and revelation
//! contexts.
//!
//! The whole rebuild runs inside one transaction. A failed run rolls
//! back and leaves the previous database contents untouched.

mod catalog;
mod sample;

use rusqlite::{Transaction, params};
use thiserror::Error;

use crate::chronology;
use crate::store::Store;

const TRANSLATOR: &str = "Sahih International";
const TAFSIR_SOURCE: &str = "Summary";
const CONTEXT_SOURCES: &str = "Sahih al-Bukhari, Sahih Muslim";

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("surah {0} has no entry in the revelation-order table")]
    MissingChronology(u16),
}

/// Replace the database contents with the built-in catalog and samples.
pub fn run(store: &mut Store) -> Result<(), SeedError> {
    let tx = store.conn_mut().transaction()?;

    // Children first, so the foreign keys stay satisfied.
    for table in [
        "revelation_contexts",
        "tafsirs",
        "translations",
        "verses",
        "surahs",
    ] {
        tx.execute(&format!("DELETE FROM {table}"), [])?;
    }

    insert_surahs(&tx)?;
    insert_sample_verses(&tx)?;

    tx.commit()?;
    Ok(())
}

fn insert_surahs(tx: &Transaction<'_>) -> Result<(), SeedError> {
    let mut stmt = tx.prepare(
        "INSERT INTO surahs (id, name, name_transliteration, name_translation,
                             revelation_type, chronological_order, verses_count, description)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
    )?;
    for surah in &catalog::CATALOG {
        let entry = chronology::entry_for_surah(surah.id)
            .ok_or(SeedError::MissingChronology(surah.id))?;
        stmt.execute(params![
            surah.id,
            surah.name,
            surah.transliteration,
            surah.translation,
            entry.revelation_type,
            entry.order,
            surah.verses_count,
            catalog::description_for(surah.id),
        ])?;
    }
    Ok(())
}

fn insert_sample_verses(tx: &Transaction<'_>) -> Result<(), SeedError> {
    let mut verse_stmt = tx.prepare(
        "INSERT INTO verses (surah_id, verse_number, verse_key, text_arabic,
                             text_uthmani, text_simple, juz_number, hizb_number, page_number)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
    )?;
    for verse in &sample::SAMPLE_VERSES {
        let verse_key = format!("{}:{}", verse.surah_id, verse.verse_number);
        verse_stmt.execute(params![
            verse.surah_id,
            verse.verse_number,
            verse_key,
            verse.text_arabic,
            verse.text_uthmani,
            verse.text_simple,
            verse.juz_number,
            verse.hizb_number,
            verse.page_number,
        ])?;
        let verse_id = tx.last_insert_rowid();

        tx.execute(
            "INSERT INTO translations (verse_id, language, translator, text)
             VALUES (?1, 'en', ?2, ?3)",
            params![verse_id, TRANSLATOR, verse.translation],
        )?;
        tx.execute(
            "INSERT INTO tafsirs (verse_id, source, language, text)
             VALUES (?1, ?2, 'en', ?3)",
            params![verse_id, TAFSIR_SOURCE, verse.tafsir],
        )?;

        if let Some(occasion) = verse.occasion {
            tx.execute(
                "INSERT INTO revelation_contexts
                     (verse_id, occasion, historical_date, location, sources)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    verse_id,
                    occasion,
                    historical_date(verse.surah_id),
                    location(verse.surah_id),
                    CONTEXT_SOURCES
                ],
            )?;
        }
    }
    Ok(())
}

fn location(surah_id: u16) -> &'static str {
    if surah_id == 96 {
        "Cave of Hira, Mecca"
    } else {
        "Mecca"
    }
}

fn historical_date(surah_id: u16) -> &'static str {
    if surah_id == 96 {
        "610 CE (First Revelation)"
    } else {
        "Early Meccan Period"
    }
}
