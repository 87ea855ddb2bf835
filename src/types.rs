//! Shared domain records used across the store, repository, and assembly
//! layers.
//!
//! These types define the JSON wire shape of every response body, so their
//! serde attributes are part of the public contract:
//!
//! - All field names serialize in camelCase (`surahId`, `verseKey`).
//! - Optional scalar fields (`description`, `historicalDate`, …) serialize
//!   as explicit `null` when absent.
//! - Relation collections on [`VerseWithRelations`] are omitted entirely
//!   when they were not requested, present (possibly empty) when they were.

use serde::{Deserialize, Serialize};

use crate::chronology::RevelationType;

/// One of the 114 chapters of the Quran.
///
/// The id is the canonical (Mushaf) chapter number, 1–114. The
/// `chronological_order` column mirrors the static revelation-order table
/// and carries the same bijection guarantee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Surah {
    /// Canonical chapter number, 1–114.
    pub id: u16,
    /// Arabic name (e.g. "الفاتحة").
    pub name: String,
    /// Romanized name (e.g. "Al-Fatihah").
    pub name_transliteration: String,
    /// English meaning of the name (e.g. "The Opening").
    pub name_translation: String,
    pub revelation_type: RevelationType,
    /// Position in the revelation sequence, 1–114.
    pub chronological_order: u16,
    /// Number of verses the chapter contains.
    pub verses_count: u16,
    pub description: Option<String>,
}

/// A single verse as stored, without any related records.
///
/// `verse_key` is the `"surah:verse"` composite (e.g. `"2:255"`) and is
/// unique across the corpus. The three text columns carry the same verse in
/// different orthographies; juz, hizb, and page locate it within the
/// traditional reading divisions and the standard Mushaf layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verse {
    pub id: i64,
    pub surah_id: u16,
    /// Verse number within its surah, starting at 1.
    pub verse_number: u16,
    pub verse_key: String,
    pub text_arabic: String,
    /// Uthmani script with full diacritics.
    pub text_uthmani: String,
    /// Simplified script without diacritics.
    pub text_simple: String,
    pub juz_number: u16,
    pub hizb_number: u16,
    pub page_number: u16,
}

/// A translation of one verse into another language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Translation {
    pub id: i64,
    pub verse_id: i64,
    /// ISO-style language code (e.g. "en").
    pub language: String,
    pub translator: String,
    pub text: String,
}

/// A scholarly commentary (tafsir) excerpt attached to one verse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tafsir {
    pub id: i64,
    pub verse_id: i64,
    /// Commentary work the excerpt is drawn from (e.g. "Ibn Kathir").
    pub source: String,
    pub language: String,
    pub text: String,
}

/// Circumstances-of-revelation (asbab al-nuzul) record for one verse.
///
/// At most one per verse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevelationContext {
    pub id: i64,
    pub verse_id: i64,
    pub occasion: String,
    pub historical_date: Option<String>,
    pub location: Option<String>,
    pub related_events: Option<String>,
    /// Citation list for the account.
    pub sources: String,
}

/// A verse together with whichever related records were requested.
///
/// Serialization follows include-on-demand semantics: a relation field that
/// is `None` is left out of the JSON object entirely, while a requested but
/// empty relation appears as `[]`. `revelation_context` is doubly optional
/// because a requested context can still be missing for the verse, in which
/// case it serializes as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerseWithRelations {
    #[serde(flatten)]
    pub verse: Verse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surah: Option<Surah>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translations: Option<Vec<Translation>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tafsirs: Option<Vec<Tafsir>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revelation_context: Option<Option<RevelationContext>>,
}

impl VerseWithRelations {
    /// A bare verse with no relations attached (and none serialized).
    pub fn bare(verse: Verse) -> Self {
        VerseWithRelations {
            verse,
            surah: None,
            translations: None,
            tafsirs: None,
            revelation_context: None,
        }
    }
}

/// A surah together with all of its verses, each fully expanded.
///
/// Used by the surah detail operation, which always includes every relation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurahWithVerses {
    #[serde(flatten)]
    pub surah: Surah,
    pub verses: Vec<VerseWithRelations>,
}
