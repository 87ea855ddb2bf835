//! The four read operations behind the public contract.
//!
//! Each operation takes raw parameter strings, validates them, consults the
//! repository, and assembles a [`Reply`]: an HTTP-style status code plus a
//! JSON envelope body. Keeping the operations as plain functions makes them
//! embeddable: the CLI drives them directly, and a server front end could
//! route to them unchanged.
//!
//! ## Status mapping
//!
//! | Outcome | Status | Envelope |
//! |---------|--------|----------|
//! | success | 200 | `success: true` plus operation-specific extras |
//! | parameter violation | 400 | `error` (+ `details` for query params) |
//! | no matching record | 404 | domain-specific `error` |
//! | storage fault | 500 | generic `error`; the fault goes to stderr only |
//!
//! Validation terminates a request before any storage access. Not-found is
//! a first-class outcome, distinguished from faults. A storage fault fails
//! the one request, never the process, and its cause is never exposed to
//! the caller.

use serde_json::Value;

use crate::config::Limits;
use crate::params::{self, SurahListParams, VerseListParams};
use crate::repo;
use crate::response::{self, Pagination};
use crate::store::{Store, StoreError};

/// Status code plus JSON envelope, ready for any transport.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub status: u16,
    pub body: Value,
}

impl Reply {
    fn ok(body: Value) -> Self {
        Reply { status: 200, body }
    }

    fn bad_request(body: Value) -> Self {
        Reply { status: 400, body }
    }

    fn not_found(body: Value) -> Self {
        Reply { status: 404, body }
    }

    fn internal(body: Value) -> Self {
        Reply { status: 500, body }
    }
}

/// List surahs, optionally filtered by revelation category, in canonical or
/// chronological order. Success envelopes carry a `count` field.
pub fn surah_list(store: &Store, raw: SurahListParams<'_>) -> Reply {
    let query = match raw.validate() {
        Ok(query) => query,
        Err(err) => return invalid_query(&err.details()),
    };
    match repo::surahs::list(store, &query) {
        Ok(surahs) => Reply::ok(response::success_with_count(&surahs)),
        Err(err) => fault("fetching surahs", "Failed to fetch surahs", &err),
    }
}

/// A single surah with all of its verses fully expanded.
pub fn surah_detail(store: &Store, raw_id: &str) -> Reply {
    let Some(id) = params::parse_surah_id(raw_id) else {
        return Reply::bad_request(response::failure(
            "Invalid surah ID. Must be between 1 and 114.",
        ));
    };
    match repo::surahs::get_with_verses(store, id) {
        Ok(Some(detail)) => Reply::ok(response::success(&detail)),
        Ok(None) => Reply::not_found(response::failure("Surah not found")),
        Err(err) => fault("fetching surah", "Failed to fetch surah", &err),
    }
}

/// One page of verses with pagination metadata and on-demand relations.
pub fn verse_list(store: &Store, raw: VerseListParams<'_>, limits: &Limits) -> Reply {
    let query = match raw.validate(limits) {
        Ok(query) => query,
        Err(err) => return invalid_query(&err.details()),
    };
    match repo::verses::list(store, &query) {
        Ok((items, total)) => {
            let pagination = Pagination::new(query.page, query.limit, total);
            Reply::ok(response::success_with_pagination(&items, pagination))
        }
        Err(err) => fault("fetching verses", "Failed to fetch verses", &err),
    }
}

/// A single verse by `"surah:verse"` key, with every relation attached.
pub fn verse_detail(store: &Store, verse_key: &str) -> Reply {
    if !params::is_verse_key(verse_key) {
        return Reply::bad_request(response::failure(
            "Invalid verse key format. Use format like '1:1' or '2:255'",
        ));
    }
    match repo::verses::get_by_key(store, verse_key) {
        Ok(Some(item)) => Reply::ok(response::success(&item)),
        Ok(None) => Reply::not_found(response::failure("Verse not found")),
        Err(err) => fault("fetching verse", "Failed to fetch verse", &err),
    }
}

fn invalid_query(details: &str) -> Reply {
    Reply::bad_request(response::failure_with_details(
        "Invalid query parameters",
        details,
    ))
}

/// Log the underlying fault for operators; callers only see the generic
/// message.
fn fault(context: &str, public_message: &str, err: &StoreError) -> Reply {
    eprintln!("Error {context}: {err}");
    Reply::internal(response::failure(public_message))
}
