//! Query parameter validation.
//!
//! Every inbound request crosses this boundary before any storage access:
//! raw string-valued parameters go in, a well-typed defaulted query comes
//! out, or the whole request is rejected with one aggregated error naming
//! every violated field. There is no partial parse: a request with three
//! bad fields reports all three.
//!
//! ## Parameter vocabulary
//!
//! Surah list: `sortBy` ("standard" | "chronological", default "standard")
//! and `revelationType` ("all" | "Meccan" | "Medinan", default "all", where
//! "all" means no filter).
//!
//! Verse list: `surahId` (1–114, optional), `page` (≥1, default 1), `limit`
//! (1 up to the configured maximum, default from configuration), and three
//! independent inclusion flags `translations`, `tafsir`, `context`. The
//! flags parse the literal string "true" as true; anything else, including
//! absence, is false and never an error.
//!
//! Path identifiers (surah id, verse key) are validated by the plain
//! parsers at the bottom; their rejection wording belongs to the API
//! boundary, not to this module.

use thiserror::Error;

use crate::chronology::{RevelationType, SURAH_COUNT};
use crate::config::Limits;

// ============================================================================
// Aggregated failure
// ============================================================================

/// Every parameter violation found in one validation pass.
///
/// Renders as `"field: reason"` pairs joined by `", "`, in field declaration
/// order, e.g. `"surahId: expected an integer between 1 and 114, page:
/// expected an integer of at least 1"`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", self.details())]
pub struct InvalidParams {
    items: Vec<String>,
}

impl InvalidParams {
    fn new() -> Self {
        InvalidParams { items: Vec::new() }
    }

    fn push(&mut self, field: &str, message: &str) {
        self.items.push(format!("{field}: {message}"));
    }

    /// The aggregated `"field: reason, field: reason"` string.
    pub fn details(&self) -> String {
        self.items.join(", ")
    }

    fn finish<T>(self, value: T) -> Result<T, InvalidParams> {
        if self.items.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

// ============================================================================
// Surah list
// ============================================================================

/// Result ordering for the surah list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Canonical (Mushaf) order: ascending surah id.
    #[default]
    Standard,
    /// Revelation sequence: ascending chronological order.
    Chronological,
}

impl SortOrder {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "standard" => Some(SortOrder::Standard),
            "chronological" => Some(SortOrder::Chronological),
            _ => None,
        }
    }
}

/// Raw surah-list parameters as they arrived, each possibly absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct SurahListParams<'a> {
    pub sort_by: Option<&'a str>,
    pub revelation_type: Option<&'a str>,
}

/// Validated surah-list query. `revelation_type` of `None` means no filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurahListQuery {
    pub sort: SortOrder,
    pub revelation_type: Option<RevelationType>,
}

impl SurahListParams<'_> {
    pub fn validate(&self) -> Result<SurahListQuery, InvalidParams> {
        let mut errors = InvalidParams::new();

        let sort = match self.sort_by {
            None => SortOrder::Standard,
            Some(raw) => SortOrder::parse(raw).unwrap_or_else(|| {
                errors.push("sortBy", "expected 'standard' or 'chronological'");
                SortOrder::Standard
            }),
        };

        // "all" is the explicit spelling of the default: no filter.
        let revelation_type = match self.revelation_type {
            None | Some("all") => None,
            Some(raw) => match RevelationType::parse(raw) {
                Some(t) => Some(t),
                None => {
                    errors.push("revelationType", "expected 'all', 'Meccan', or 'Medinan'");
                    None
                }
            },
        };

        errors.finish(SurahListQuery {
            sort,
            revelation_type,
        })
    }
}

// ============================================================================
// Verse list
// ============================================================================

/// Raw verse-list parameters as they arrived, each possibly absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct VerseListParams<'a> {
    pub surah_id: Option<&'a str>,
    pub page: Option<&'a str>,
    pub limit: Option<&'a str>,
    pub translations: Option<&'a str>,
    pub tafsir: Option<&'a str>,
    pub context: Option<&'a str>,
}

/// Which related collections a verse query should populate.
///
/// The three flags are orthogonal: any combination is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IncludeFlags {
    pub translations: bool,
    pub tafsir: bool,
    pub context: bool,
}

impl IncludeFlags {
    /// Every relation requested, as the single-verse lookup always does.
    pub fn all() -> Self {
        IncludeFlags {
            translations: true,
            tafsir: true,
            context: true,
        }
    }
}

/// Validated verse-list query. `surah_id` of `None` means all surahs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerseListQuery {
    pub surah_id: Option<u16>,
    pub page: u32,
    pub limit: u32,
    pub include: IncludeFlags,
}

impl VerseListQuery {
    /// Rows to skip before the requested page: `(page - 1) * limit`.
    pub fn offset(&self) -> i64 {
        (i64::from(self.page) - 1) * i64::from(self.limit)
    }
}

impl VerseListParams<'_> {
    pub fn validate(&self, limits: &Limits) -> Result<VerseListQuery, InvalidParams> {
        let mut errors = InvalidParams::new();

        let surah_id = match self.surah_id {
            None => None,
            Some(raw) => match int_in_range(raw, 1, u32::from(SURAH_COUNT)) {
                Some(n) => Some(n as u16),
                None => {
                    errors.push("surahId", "expected an integer between 1 and 114");
                    None
                }
            },
        };

        let page = match self.page {
            None => 1,
            Some(raw) => match int_in_range(raw, 1, u32::MAX) {
                Some(n) => n,
                None => {
                    errors.push("page", "expected an integer of at least 1");
                    1
                }
            },
        };

        let limit = match self.limit {
            None => limits.default_limit,
            Some(raw) => match int_in_range(raw, 1, limits.max_limit) {
                Some(n) => n,
                None => {
                    errors.push(
                        "limit",
                        &format!("expected an integer between 1 and {}", limits.max_limit),
                    );
                    limits.default_limit
                }
            },
        };

        let include = IncludeFlags {
            translations: flag(self.translations),
            tafsir: flag(self.tafsir),
            context: flag(self.context),
        };

        errors.finish(VerseListQuery {
            surah_id,
            page,
            limit,
            include,
        })
    }
}

/// Strictly-parsed decimal integer within `min..=max`. Rejects signs other
/// than an optional `+`, fractional parts, and surrounding whitespace.
fn int_in_range(raw: &str, min: u32, max: u32) -> Option<u32> {
    raw.parse::<u32>().ok().filter(|n| (min..=max).contains(n))
}

/// Inclusion flags accept exactly the literal "true"; everything else,
/// absence included, reads as false.
fn flag(raw: Option<&str>) -> bool {
    matches!(raw, Some("true"))
}

// ============================================================================
// Path identifiers
// ============================================================================

/// Parse a surah id path segment: a strict integer in 1–114.
pub fn parse_surah_id(raw: &str) -> Option<u16> {
    int_in_range(raw, 1, u32::from(SURAH_COUNT)).map(|n| n as u16)
}

/// Whether `s` is a well-formed verse key: one or more ASCII digits, a
/// single colon, one or more ASCII digits, nothing else.
///
/// This checks shape only. A well-formed key that matches no stored verse
/// is a not-found outcome, not a validation failure.
pub fn is_verse_key(s: &str) -> bool {
    match s.split_once(':') {
        Some((surah, verse)) => {
            !surah.is_empty()
                && !verse.is_empty()
                && surah.bytes().all(|b| b.is_ascii_digit())
                && verse.bytes().all(|b| b.is_ascii_digit())
        }
        None => false,
    }
}
