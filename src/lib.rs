//! # Tanzil
//!
//! A Quran corpus in a local SQLite database, queryable in canonical
//! (Mushaf) or chronological (revelation) order. Surahs carry their
//! position in both orders; verses carry translations, tafsir summaries,
//! and revelation contexts that are attached only when a query asks for
//! them.
//!
//! # Architecture: Validate, Query, Envelope
//!
//! Every query command runs the same straight-line pipeline:
//!
//! ```text
//! raw parameters → params    (validate, aggregate violations)
//!                → repo      (SQL over the store)
//!                → response  (success / pagination / failure envelopes)
//!                → Reply     (HTTP-shaped status + JSON body)
//! ```
//!
//! This separation exists for three reasons:
//!
//! - **Contract stability**: replies are shaped exactly like a web API
//!   (status codes, envelopes, error strings), so the CLI output can be
//!   diffed against what a server in front of the same database returns.
//! - **Testability**: validation, data access, and envelope assembly are
//!   each pure enough to test alone; [`api`] tests then cover the seams.
//! - **Error discipline**: invalid input is rejected in one place with
//!   every violation reported at once, and database faults surface as
//!   opaque 500 replies while the detail goes to stderr.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`chronology`] | Fixed revelation-order table: canonical number to chronological order, Meccan/Medinan category, period labels |
//! | [`types`] | Stored entities and their reply serialization (`Surah`, `Verse`, related material) |
//! | [`params`] | Query-parameter validation with aggregated violation details |
//! | [`store`] | SQLite bootstrap: schema, open modes, shared error type |
//! | [`repo`] | Surah and verse queries, include-on-demand relation loading |
//! | [`response`] | JSON envelopes: success, count, pagination, failure |
//! | [`api`] | The four query operations, raw input to [`api::Reply`] |
//! | [`seed`] | Database rebuild from the built-in catalog and sample verses |
//! | [`check`] | Completeness and consistency verification |
//! | [`config`] | `config.toml` loading, defaults, validation |
//! | [`output`] | CLI formatting for replies, seed summaries, check reports |
//!
//! # Design Decisions
//!
//! ## Chronology as Code
//!
//! The revelation-order table lives in [`chronology`] as a const array,
//! not as authoritative database rows. The seed loader bakes order and
//! category into stored surahs from the table, and `check` verifies the
//! stored rows still agree with it. Changing the scholarly sequence is a
//! reviewed code change, never a data migration, and every query sorts by
//! a plain indexed column.
//!
//! ## Include-on-Demand Relations
//!
//! Verse queries attach translations, tafsir, and context only when the
//! caller asks. The reply distinguishes "not requested" (field absent)
//! from "requested, none exist" (empty array, or `null` for the
//! single-row context). Serialization in [`types`] encodes this with
//! nested `Option`s so the distinction survives into the JSON contract.
//!
//! ## Aggregated Validation
//!
//! A query with three bad parameters reports all three violations in one
//! 400 reply, joined in field order, rather than failing on the first.
//! Callers fix their request in one round trip. The exact message per
//! field is part of the contract and tested verbatim.
//!
//! ## Read-Only Queries
//!
//! Query commands open the database with SQLite's read-only flag and
//! refuse to touch a missing file, so a typo in the database path cannot
//! silently create an empty corpus. Only `seed` opens writable, and it
//! rebuilds inside a single transaction.

pub mod api;
pub mod check;
pub mod chronology;
pub mod config;
pub mod output;
pub mod params;
pub mod repo;
pub mod response;
pub mod seed;
pub mod store;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
