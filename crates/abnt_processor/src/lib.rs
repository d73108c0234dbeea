/*
SPDX-License-Identifier: MPL-2.0
*/

//! ABNT Processor
//!
//! This crate is the formatting engine: it takes a [`ReferenceRecord`]
//! (`abnt_core`) and produces the full NBR 6023:2018 reference and the
//! NBR 10520:2023 in-text citation for it. The engine is a pure,
//! synchronous computation — no I/O, no state, no failure modes beyond the
//! two placeholder strings.
//!
//! # Example
//!
//! ```rust
//! use abnt_core::ReferenceRecord;
//! use abnt_processor::{format, render::PlainText};
//!
//! let record = ReferenceRecord {
//!     author: "Silva, João".to_string(),
//!     title: "Exemplo".to_string(),
//!     year: "2020".to_string(),
//!     ..Default::default()
//! };
//!
//! let result = format(&record, &PlainText);
//! assert_eq!(result.reference, "SILVA, João. EXEMPLO. 2020.");
//! assert_eq!(result.citation, "(Silva, 2020)");
//! ```

pub mod compose;
pub mod error;
pub mod export;
pub mod io;
pub mod names;
pub mod render;

pub use compose::{
    compose, compose_citation, compose_reference, format, ComposedEntry, FormattedResult,
    CITATION_PLACEHOLDER, REFERENCE_PLACEHOLDER,
};
pub use error::ProcessorError;
pub use export::export_plain;
pub use render::{Html, OutputFormat, PlainText, Segment, Segments};

// Re-export the data model for convenience
pub use abnt_core::{ReferenceRecord, ReferenceType};
