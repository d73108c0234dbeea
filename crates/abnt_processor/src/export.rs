/*
SPDX-License-Identifier: MPL-2.0
*/

//! Plain-text export of a saved reference list.
//!
//! The export strips emphasis (it renders through [`PlainText`]) and
//! numbers the entries, each followed by its citation. The field text the
//! composers produced is preserved byte for byte.

use crate::compose::ComposedEntry;
use crate::render::PlainText;
use std::fmt::Write;

/// The document header line.
pub const EXPORT_HEADER: &str = "Referências Bibliográficas (ABNT NBR 6023:2018)";

/// Render a list of composed entries as a numbered plain-text document.
pub fn export_plain(entries: &[ComposedEntry]) -> String {
    let plain = PlainText;
    let mut output = format!("{}\n\n", EXPORT_HEADER);
    for (i, entry) in entries.iter().enumerate() {
        let _ = writeln!(&mut output, "{}. {}", i + 1, entry.reference.render(&plain));
        let _ = writeln!(&mut output, "   Citação: {}\n", entry.citation);
    }
    output
}
