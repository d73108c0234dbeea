/*
SPDX-License-Identifier: MPL-2.0
*/

//! The citation composer, per NBR 10520:2023.
//!
//! Precedence, first match wins:
//!
//! 1. Legislation with a jurisdiction and a year (or a publication date):
//!    `(JURISDICTION, YEAR)`.
//! 2. A resolved citation author and a year: `(AUTHOR, YEAR)`.
//! 3. A resolved citation author alone: `(AUTHOR)`.
//! 4. A chapter with a book year: `(AUTHOR, BOOKYEAR)` — AUTHOR may be the
//!    empty string here.
//! 5. Otherwise the placeholder.

use super::CITATION_PLACEHOLDER;
use crate::names::resolve_citation_author;
use abnt_core::{ReferenceRecord, ReferenceType};

/// Compose the parenthetical in-text citation for a record.
pub fn compose_citation(record: &ReferenceRecord) -> String {
    let author = resolve_citation_author(record);

    if record.r#type == ReferenceType::Legislation
        && !record.jurisdiction.is_empty()
        && (!record.year.is_empty() || !record.publication_date.is_empty())
    {
        let year = if !record.year.is_empty() {
            record.year.as_str()
        } else {
            trailing_token(&record.publication_date)
        };
        return format!("({}, {})", record.jurisdiction, year);
    }

    if !author.is_empty() && !record.year.is_empty() {
        format!("({}, {})", author, record.year)
    } else if !author.is_empty() {
        format!("({})", author)
    } else if record.r#type == ReferenceType::Chapter && !record.book_year.is_empty() {
        format!("({}, {})", author, record.book_year)
    } else {
        CITATION_PLACEHOLDER.to_string()
    }
}

/// The substring after the last space, or the whole string when there is
/// none. A crude year extraction from dates like `"11 jan. 2002"` —
/// intentional truncation, not a date parser.
fn trailing_token(date: &str) -> &str {
    match date.rsplit_once(' ') {
        Some((_, token)) => token,
        None => date,
    }
}
