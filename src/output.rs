//! CLI output formatting.
//!
//! # Output Format
//!
//! ## Query commands
//!
//! `surahs`, `surah`, `verses`, and `verse` print the JSON reply body to
//! stdout, pretty-printed unless the config turns `output.pretty` off:
//!
//! ```text
//! {
//!   "success": true,
//!   "data": [ ... ],
//!   "count": 114
//! }
//! ```
//!
//! ## Seed
//!
//! ```text
//! Seeded 114 surahs
//! Seeded 12 verses (12 translations, 12 tafsirs, 2 revelation contexts)
//! ```
//!
//! ## Check
//!
//! ```text
//! Surahs: 114 / 114
//! Verses: 12 / 6236
//! Translations: 12
//! Tafsirs: 12
//! Revelation contexts: 2
//! Surahs with no verses: 112
//!     e.g. Al-Baqarah, Aal-E-Imran, An-Nisa, Al-Ma'idah, Al-An'am
//! Chronology mismatches: 0
//! Verse key mismatches: 0
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `String` or
//! `Vec<String>`) for testability and a `print_*` wrapper that writes to
//! stdout. Format functions are pure — no I/O, no side effects.

use crate::api::Reply;
use crate::check::{CheckReport, FULL_VERSE_COUNT};
use crate::chronology::SURAH_COUNT;
use crate::store::Counts;

// ============================================================================
// Query replies
// ============================================================================

/// Render a reply body as JSON text.
pub fn format_reply(reply: &Reply, pretty: bool) -> String {
    if pretty {
        format!("{:#}", reply.body)
    } else {
        reply.body.to_string()
    }
}

/// Print a reply body to stdout.
pub fn print_reply(reply: &Reply, pretty: bool) {
    println!("{}", format_reply(reply, pretty));
}

// ============================================================================
// Seed summary
// ============================================================================

/// Format the post-seed row counts.
pub fn format_seed_summary(counts: &Counts) -> Vec<String> {
    vec![
        format!("Seeded {} surahs", counts.surahs),
        format!(
            "Seeded {} verses ({} translations, {} tafsirs, {} revelation contexts)",
            counts.verses, counts.translations, counts.tafsirs, counts.revelation_contexts
        ),
    ]
}

/// Print the seed summary to stdout.
pub fn print_seed_summary(counts: &Counts) {
    for line in format_seed_summary(counts) {
        println!("{}", line);
    }
}

// ============================================================================
// Check report
// ============================================================================

/// Format a verification report, counts first, then the consistency checks.
///
/// Lists at most five empty surahs; a sample-seeded database would
/// otherwise print 112 names.
pub fn format_check_report(report: &CheckReport) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(format!(
        "Surahs: {} / {}",
        report.counts.surahs, SURAH_COUNT
    ));
    lines.push(format!(
        "Verses: {} / {}",
        report.counts.verses, FULL_VERSE_COUNT
    ));
    lines.push(format!("Translations: {}", report.counts.translations));
    lines.push(format!("Tafsirs: {}", report.counts.tafsirs));
    lines.push(format!(
        "Revelation contexts: {}",
        report.counts.revelation_contexts
    ));

    lines.push(format!(
        "Surahs with no verses: {}",
        report.empty_surahs.len()
    ));
    if !report.empty_surahs.is_empty() {
        let sample: Vec<&str> = report
            .empty_surahs
            .iter()
            .take(5)
            .map(String::as_str)
            .collect();
        lines.push(format!("    e.g. {}", sample.join(", ")));
    }

    if report.chronology_mismatches.is_empty() {
        lines.push("Chronology mismatches: 0".to_string());
    } else {
        let ids: Vec<String> = report
            .chronology_mismatches
            .iter()
            .map(u16::to_string)
            .collect();
        lines.push(format!(
            "Chronology mismatches: {} (surahs {})",
            report.chronology_mismatches.len(),
            ids.join(", ")
        ));
    }

    lines.push(format!("Verse key mismatches: {}", report.key_mismatches));

    lines
}

/// Print the verification report to stdout.
pub fn print_check_report(report: &CheckReport) {
    for line in format_check_report(report) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================
