/*
SPDX-License-Identifier: MPL-2.0
*/

//! Composition of formatted references and citations.
//!
//! Both composers are pure functions over a [`ReferenceRecord`]: the
//! reference composer dispatches on the record's type to a fixed template
//! that appends labeled segments only when the backing field is non-empty
//! (an omitted field never leaves a dangling separator), and the citation
//! composer derives the parenthetical from the resolved citation author and
//! a year. Calling either twice on an unmodified record yields identical
//! output.

mod citation;
mod reference;

pub use citation::compose_citation;
pub use reference::compose_reference;

use crate::render::{OutputFormat, Segments};
use abnt_core::ReferenceRecord;
use serde::{Deserialize, Serialize};

/// Shown when no reference type has been selected.
pub const REFERENCE_PLACEHOLDER: &str =
    "Selecione um tipo de referência e preencha os campos.";

/// Shown when the fields required for a citation are absent.
pub const CITATION_PLACEHOLDER: &str = "Preencha os campos para gerar a citação.";

/// A composed entry before rendering: the reference as a segment list (so
/// the emphasized title substring is still explicit) plus the citation,
/// which never carries emphasis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedEntry {
    pub reference: Segments,
    pub citation: String,
}

/// The two output strings for one record, in a concrete format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedResult {
    pub reference: String,
    pub citation: String,
}

/// Compose a record into its reference segments and citation string.
pub fn compose(record: &ReferenceRecord) -> ComposedEntry {
    ComposedEntry {
        reference: compose_reference(record),
        citation: compose_citation(record),
    }
}

/// Compose and render a record in one step.
///
/// This is the collaborator interface a form layer invokes on every field
/// change; it is synchronous, stateless, and idempotent.
pub fn format<F: OutputFormat>(record: &ReferenceRecord, fmt: &F) -> FormattedResult {
    let entry = compose(record);
    FormattedResult {
        reference: entry.reference.render(fmt),
        citation: entry.citation,
    }
}
