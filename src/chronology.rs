//! Chronological revelation order of the 114 surahs.
//!
//! The Quran is printed in canonical (Mushaf) order, which is not the order
//! in which the surahs were revealed. This module carries the
//! scholarly-consensus revelation sequence as a fixed table: a bijection
//! between canonical surah number (1–114) and chronological order (1–114),
//! each entry tagged with its revelation category (Meccan or Medinan) and an
//! approximate period label.
//!
//! ## Invariants
//!
//! - The table has exactly 114 entries; every canonical number and every
//!   chronological order appears exactly once (total bijection).
//! - 86 entries are Meccan (orders 1–86), 28 Medinan (orders 87–114) — the
//!   fixed historical partition around the Hijra.
//!
//! The table is immutable static data. Accessors are pure functions; there
//! is no mutation path. The seed loader bakes `order` and `revelation_type`
//! into stored surah rows from this table, and the `check` command verifies
//! the stored rows still agree with it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of surahs in the Quran. Canonical ids and chronological orders
/// both range over 1..=SURAH_COUNT.
pub const SURAH_COUNT: u16 = 114;

/// Revelation category of a surah: before (Meccan) or after (Medinan) the
/// Hijra.
///
/// Serialized with the capitalized names the query contract uses
/// (`revelationType=Meccan|Medinan`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevelationType {
    Meccan,
    Medinan,
}

impl RevelationType {
    /// The exact string the API contract uses for this category.
    pub fn as_str(self) -> &'static str {
        match self {
            RevelationType::Meccan => "Meccan",
            RevelationType::Medinan => "Medinan",
        }
    }

    /// Parse the exact contract string. Case-sensitive: `"meccan"` is not
    /// a valid category.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Meccan" => Some(RevelationType::Meccan),
            "Medinan" => Some(RevelationType::Medinan),
            _ => None,
        }
    }
}

impl fmt::Display for RevelationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the revelation-order table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChronologyEntry {
    /// Canonical surah number (Mushaf order), 1–114.
    pub surah: u16,
    /// Chronological revelation order, 1–114.
    pub order: u16,
    /// Meccan or Medinan.
    pub revelation_type: RevelationType,
    /// Approximate period label ("Early Meccan", "Late Medinan", …).
    pub period: &'static str,
}

const fn e(
    surah: u16,
    order: u16,
    revelation_type: RevelationType,
    period: &'static str,
) -> ChronologyEntry {
    ChronologyEntry {
        surah,
        order,
        revelation_type,
        period,
    }
}

use RevelationType::{Meccan, Medinan};

/// All 114 surahs in chronological revelation order.
pub const REVELATION_ORDER: [ChronologyEntry; 114] = [
    // Meccan surahs (86, revealed before the Hijra)
    e(96, 1, Meccan, "First revelation"),
    e(68, 2, Meccan, "Early Meccan"),
    e(73, 3, Meccan, "Early Meccan"),
    e(74, 4, Meccan, "Early Meccan"),
    e(1, 5, Meccan, "Early Meccan"),
    e(111, 6, Meccan, "Early Meccan"),
    e(81, 7, Meccan, "Early Meccan"),
    e(87, 8, Meccan, "Early Meccan"),
    e(92, 9, Meccan, "Early Meccan"),
    e(89, 10, Meccan, "Early Meccan"),
    e(93, 11, Meccan, "Early Meccan"),
    e(94, 12, Meccan, "Early Meccan"),
    e(103, 13, Meccan, "Early Meccan"),
    e(100, 14, Meccan, "Early Meccan"),
    e(108, 15, Meccan, "Early Meccan"),
    e(102, 16, Meccan, "Early Meccan"),
    e(107, 17, Meccan, "Early Meccan"),
    e(109, 18, Meccan, "Early Meccan"),
    e(105, 19, Meccan, "Early Meccan"),
    e(113, 20, Meccan, "Early Meccan"),
    e(114, 21, Meccan, "Early Meccan"),
    e(112, 22, Meccan, "Early Meccan"),
    e(53, 23, Meccan, "Early Meccan"),
    e(80, 24, Meccan, "Early Meccan"),
    e(97, 25, Meccan, "Early Meccan"),
    e(91, 26, Meccan, "Early Meccan"),
    e(85, 27, Meccan, "Early Meccan"),
    e(95, 28, Meccan, "Early Meccan"),
    e(106, 29, Meccan, "Early Meccan"),
    e(101, 30, Meccan, "Early Meccan"),
    e(75, 31, Meccan, "Early Meccan"),
    e(104, 32, Meccan, "Early Meccan"),
    e(77, 33, Meccan, "Middle Meccan"),
    e(50, 34, Meccan, "Middle Meccan"),
    e(90, 35, Meccan, "Middle Meccan"),
    e(86, 36, Meccan, "Middle Meccan"),
    e(54, 37, Meccan, "Middle Meccan"),
    e(38, 38, Meccan, "Middle Meccan"),
    e(7, 39, Meccan, "Middle Meccan"),
    e(72, 40, Meccan, "Middle Meccan"),
    e(36, 41, Meccan, "Middle Meccan"),
    e(25, 42, Meccan, "Middle Meccan"),
    e(35, 43, Meccan, "Middle Meccan"),
    e(19, 44, Meccan, "Middle Meccan"),
    e(20, 45, Meccan, "Middle Meccan"),
    e(56, 46, Meccan, "Middle Meccan"),
    e(26, 47, Meccan, "Middle Meccan"),
    e(27, 48, Meccan, "Middle Meccan"),
    e(28, 49, Meccan, "Middle Meccan"),
    e(17, 50, Meccan, "Late Meccan"),
    e(10, 51, Meccan, "Late Meccan"),
    e(11, 52, Meccan, "Late Meccan"),
    e(12, 53, Meccan, "Late Meccan"),
    e(15, 54, Meccan, "Late Meccan"),
    e(6, 55, Meccan, "Late Meccan"),
    e(37, 56, Meccan, "Late Meccan"),
    e(31, 57, Meccan, "Late Meccan"),
    e(34, 58, Meccan, "Late Meccan"),
    e(39, 59, Meccan, "Late Meccan"),
    e(40, 60, Meccan, "Late Meccan"),
    e(41, 61, Meccan, "Late Meccan"),
    e(42, 62, Meccan, "Late Meccan"),
    e(43, 63, Meccan, "Late Meccan"),
    e(44, 64, Meccan, "Late Meccan"),
    e(45, 65, Meccan, "Late Meccan"),
    e(46, 66, Meccan, "Late Meccan"),
    e(51, 67, Meccan, "Late Meccan"),
    e(88, 68, Meccan, "Late Meccan"),
    e(18, 69, Meccan, "Late Meccan"),
    e(16, 70, Meccan, "Late Meccan"),
    e(71, 71, Meccan, "Late Meccan"),
    e(14, 72, Meccan, "Late Meccan"),
    e(21, 73, Meccan, "Late Meccan"),
    e(23, 74, Meccan, "Late Meccan"),
    e(32, 75, Meccan, "Late Meccan"),
    e(52, 76, Meccan, "Late Meccan"),
    e(67, 77, Meccan, "Late Meccan"),
    e(69, 78, Meccan, "Late Meccan"),
    e(70, 79, Meccan, "Late Meccan"),
    e(78, 80, Meccan, "Late Meccan"),
    e(79, 81, Meccan, "Late Meccan"),
    e(82, 82, Meccan, "Late Meccan"),
    e(84, 83, Meccan, "Late Meccan"),
    e(30, 84, Meccan, "Late Meccan"),
    e(29, 85, Meccan, "Late Meccan"),
    e(83, 86, Meccan, "Late Meccan"),
    // Medinan surahs (28, revealed after the Hijra)
    e(2, 87, Medinan, "Early Medinan"),
    e(8, 88, Medinan, "Early Medinan"),
    e(3, 89, Medinan, "Early Medinan"),
    e(33, 90, Medinan, "Middle Medinan"),
    e(60, 91, Medinan, "Middle Medinan"),
    e(4, 92, Medinan, "Middle Medinan"),
    e(99, 93, Medinan, "Middle Medinan"),
    e(57, 94, Medinan, "Middle Medinan"),
    e(47, 95, Medinan, "Middle Medinan"),
    e(13, 96, Medinan, "Middle Medinan"),
    e(55, 97, Medinan, "Middle Medinan"),
    e(76, 98, Medinan, "Middle Medinan"),
    e(65, 99, Medinan, "Middle Medinan"),
    e(98, 100, Medinan, "Middle Medinan"),
    e(59, 101, Medinan, "Middle Medinan"),
    e(24, 102, Medinan, "Middle Medinan"),
    e(22, 103, Medinan, "Middle Medinan"),
    e(63, 104, Medinan, "Middle Medinan"),
    e(58, 105, Medinan, "Middle Medinan"),
    e(49, 106, Medinan, "Late Medinan"),
    e(66, 107, Medinan, "Late Medinan"),
    e(64, 108, Medinan, "Late Medinan"),
    e(61, 109, Medinan, "Late Medinan"),
    e(62, 110, Medinan, "Late Medinan"),
    e(48, 111, Medinan, "Late Medinan"),
    e(5, 112, Medinan, "Late Medinan"),
    e(9, 113, Medinan, "Late Medinan"),
    e(110, 114, Medinan, "Last revelation"),
];

/// Chronological order of a canonical surah number.
///
/// Falls back to the canonical number itself when no entry exists. The table
/// is total over 1–114, so the fallback is unreachable for valid input; it
/// is preserved as documented compatibility behavior, nothing more.
pub fn chronological_order(surah: u16) -> u16 {
    entry_for_surah(surah).map(|e| e.order).unwrap_or(surah)
}

/// Table entry for a canonical surah number, if present.
pub fn entry_for_surah(surah: u16) -> Option<&'static ChronologyEntry> {
    REVELATION_ORDER.iter().find(|e| e.surah == surah)
}

/// Table entry for a chronological order, if present. The entry carries the
/// canonical number plus category and period annotations.
pub fn entry_for_order(order: u16) -> Option<&'static ChronologyEntry> {
    REVELATION_ORDER.iter().find(|e| e.order == order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn table_has_exactly_114_entries() {
        assert_eq!(REVELATION_ORDER.len(), 114);
    }

    #[test]
    fn surah_numbers_are_a_permutation_of_1_to_114() {
        let surahs: HashSet<u16> = REVELATION_ORDER.iter().map(|e| e.surah).collect();
        assert_eq!(surahs.len(), 114);
        assert_eq!(surahs.iter().min(), Some(&1));
        assert_eq!(surahs.iter().max(), Some(&114));
    }

    #[test]
    fn orders_are_a_permutation_of_1_to_114() {
        let orders: HashSet<u16> = REVELATION_ORDER.iter().map(|e| e.order).collect();
        assert_eq!(orders.len(), 114);
        for order in 1..=114 {
            assert!(orders.contains(&order), "order {order} unassigned");
        }
    }

    #[test]
    fn partition_is_86_meccan_28_medinan() {
        let meccan = REVELATION_ORDER
            .iter()
            .filter(|e| e.revelation_type == RevelationType::Meccan)
            .count();
        assert_eq!(meccan, 86);
        assert_eq!(114 - meccan, 28);
    }

    #[test]
    fn meccan_orders_precede_medinan_orders() {
        // Orders 1-86 are Meccan, 87-114 Medinan.
        for entry in &REVELATION_ORDER {
            let expected = if entry.order <= 86 {
                RevelationType::Meccan
            } else {
                RevelationType::Medinan
            };
            assert_eq!(
                entry.revelation_type, expected,
                "surah {} at order {}",
                entry.surah, entry.order
            );
        }
    }

    #[test]
    fn first_revelation_is_surah_96() {
        let first = entry_for_order(1).unwrap();
        assert_eq!(first.surah, 96);
        assert_eq!(first.period, "First revelation");
    }

    #[test]
    fn last_revelation_is_surah_110() {
        let last = entry_for_order(114).unwrap();
        assert_eq!(last.surah, 110);
        assert_eq!(last.revelation_type, RevelationType::Medinan);
        assert_eq!(last.period, "Last revelation");
    }

    #[test]
    fn al_fatihah_is_fifth_revealed() {
        assert_eq!(chronological_order(1), 5);
    }

    #[test]
    fn fallback_returns_input_for_unknown_surah() {
        // Unreachable for valid ids; preserved for compatibility.
        assert_eq!(chronological_order(0), 0);
        assert_eq!(chronological_order(200), 200);
    }

    #[test]
    fn entry_for_order_absent_outside_range() {
        assert_eq!(entry_for_order(0), None);
        assert_eq!(entry_for_order(115), None);
    }

    #[test]
    fn round_trip_surah_to_order_and_back() {
        for surah in 1..=114 {
            let order = chronological_order(surah);
            let back = entry_for_order(order).unwrap();
            assert_eq!(back.surah, surah);
        }
    }

    #[test]
    fn revelation_type_parse_is_case_sensitive() {
        assert_eq!(RevelationType::parse("Meccan"), Some(RevelationType::Meccan));
        assert_eq!(RevelationType::parse("Medinan"), Some(RevelationType::Medinan));
        assert_eq!(RevelationType::parse("meccan"), None);
        assert_eq!(RevelationType::parse("all"), None);
        assert_eq!(RevelationType::parse(""), None);
    }

    #[test]
    fn revelation_type_display_matches_contract() {
        assert_eq!(RevelationType::Meccan.to_string(), "Meccan");
        assert_eq!(RevelationType::Medinan.to_string(), "Medinan");
    }
}
