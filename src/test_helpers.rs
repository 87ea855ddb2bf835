//! Shared test utilities for the tanzil test suite.
//!
//! Provides a small deterministic fixture corpus, lookup helpers that panic
//! with a clear message on miss, and envelope assertions for API replies.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let store = fixture_store();
//! let surahs = repo::surahs::list(&store, &query).unwrap();
//!
//! let fatihah = find_surah(&surahs, 1);
//! assert_eq!(fatihah.chronological_order, 5);
//! ```

use rusqlite::params;

use crate::api::Reply;
use crate::store::Store;
use crate::types::{Surah, VerseWithRelations};

// =========================================================================
// Fixture corpus
// =========================================================================

/// Build an in-memory store holding the fixture corpus:
///
/// | Surah | Category | Chronological order | Verses |
/// |-------|----------|---------------------|--------|
/// | 1 (Al-Fatihah) | Meccan | 5 | 7 |
/// | 2 (Al-Baqarah) | Medinan | 87 | 3 |
/// | 96 (Al-Alaq) | Meccan | 1 | 5 |
///
/// Verse 1:1 carries two translations, one tafsir, and a revelation
/// context; 1:2 carries one translation; 96:1 carries one of each. Every
/// other verse has no relations, so "requested but empty" paths get
/// exercised too. Verse ids run 1..=15 in reading order.
pub fn fixture_store() -> Store {
    let store = Store::open_in_memory().unwrap();
    let conn = store.conn();

    let surahs = [
        (1, "الفاتحة", "Al-Fatihah", "The Opening", "Meccan", 5, 7),
        (2, "البقرة", "Al-Baqarah", "The Cow", "Medinan", 87, 3),
        (96, "العلق", "Al-Alaq", "The Clot", "Meccan", 1, 5),
    ];
    for (id, name, transliteration, gloss, category, order, verses) in surahs {
        conn.execute(
            "INSERT INTO surahs (id, name, name_transliteration, name_translation,
                                 revelation_type, chronological_order, verses_count)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![id, name, transliteration, gloss, category, order, verses],
        )
        .unwrap();
    }

    let mut verse_id = 0i64;
    for (surah_id, count) in [(1, 7), (2, 3), (96, 5)] {
        for number in 1..=count {
            verse_id += 1;
            conn.execute(
                "INSERT INTO verses (id, surah_id, verse_number, verse_key, text_arabic,
                                     text_uthmani, text_simple, juz_number, hizb_number,
                                     page_number)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
                params![
                    verse_id,
                    surah_id,
                    number,
                    format!("{surah_id}:{number}"),
                    format!("نص {surah_id}:{number}"),
                    format!("نص {surah_id}:{number}"),
                    format!("nass {surah_id}:{number}"),
                    1,
                    1,
                    1,
                ],
            )
            .unwrap();
        }
    }

    // Verse id 1 is "1:1", id 2 is "1:2", id 11 is "96:1".
    let translations = [
        (1, "en", "Saheeh International", "In the name of Allah, the Entirely Merciful"),
        (1, "en", "Pickthall", "In the name of Allah, the Beneficent"),
        (2, "en", "Saheeh International", "All praise is due to Allah"),
        (11, "en", "Saheeh International", "Recite in the name of your Lord"),
    ];
    for (verse, language, translator, text) in translations {
        conn.execute(
            "INSERT INTO translations (verse_id, language, translator, text)
             VALUES (?1, ?2, ?3, ?4)",
            params![verse, language, translator, text],
        )
        .unwrap();
    }

    let tafsirs = [
        (1, "Ibn Kathir", "en", "The basmala opens every surah but one."),
        (11, "Ibn Kathir", "en", "The first words revealed at Hira."),
    ];
    for (verse, source, language, text) in tafsirs {
        conn.execute(
            "INSERT INTO tafsirs (verse_id, source, language, text)
             VALUES (?1, ?2, ?3, ?4)",
            params![verse, source, language, text],
        )
        .unwrap();
    }

    let contexts = [
        (1, "Revealed as the opening of the Quran", Some("Mecca"), "Ibn Kathir"),
        (11, "The first revelation in the cave of Hira", Some("Cave of Hira"), "Sahih al-Bukhari"),
    ];
    for (verse, occasion, location, sources) in contexts {
        conn.execute(
            "INSERT INTO revelation_contexts (verse_id, occasion, location, sources)
             VALUES (?1, ?2, ?3, ?4)",
            params![verse, occasion, location, sources],
        )
        .unwrap();
    }

    store
}

// =========================================================================
// Result lookups — panics with a clear message on miss
// =========================================================================

/// Find a surah by id in a result list. Panics if not found.
pub fn find_surah(surahs: &[Surah], id: u16) -> &Surah {
    surahs.iter().find(|s| s.id == id).unwrap_or_else(|| {
        let ids: Vec<u16> = surahs.iter().map(|s| s.id).collect();
        panic!("surah {id} not found. Available: {ids:?}")
    })
}

/// Find a verse item by key in a result list. Panics if not found.
pub fn find_verse<'a>(items: &'a [VerseWithRelations], key: &str) -> &'a VerseWithRelations {
    items
        .iter()
        .find(|v| v.verse.verse_key == key)
        .unwrap_or_else(|| {
            let keys: Vec<&str> = items.iter().map(|v| v.verse.verse_key.as_str()).collect();
            panic!("verse '{key}' not found. Available: {keys:?}")
        })
}

// =========================================================================
// Bulk extractors
// =========================================================================

/// All surah ids in result order.
pub fn surah_ids(surahs: &[Surah]) -> Vec<u16> {
    surahs.iter().map(|s| s.id).collect()
}

/// All verse keys in result order.
pub fn verse_keys(items: &[VerseWithRelations]) -> Vec<&str> {
    items.iter().map(|v| v.verse.verse_key.as_str()).collect()
}

// =========================================================================
// Envelope assertions
// =========================================================================

/// Assert a 200 success envelope and hand back its `data` field.
pub fn expect_data(reply: &Reply) -> &serde_json::Value {
    assert_eq!(reply.status, 200, "unexpected status, body: {}", reply.body);
    assert_eq!(reply.body["success"], true, "body: {}", reply.body);
    &reply.body["data"]
}

/// Assert a failure envelope with the given status and hand back its
/// `error` message.
pub fn expect_error(reply: &Reply, status: u16) -> String {
    assert_eq!(reply.status, status, "unexpected status, body: {}", reply.body);
    assert_eq!(reply.body["success"], false, "body: {}", reply.body);
    reply.body["error"]
        .as_str()
        .expect("error must be a string")
        .to_string()
}
