/*
SPDX-License-Identifier: MPL-2.0
*/

//! Rendering of composed reference entries.
//!
//! The composers build a [`Segments`] list rather than a final string, so
//! the emphasized title substring stays explicit until an [`OutputFormat`]
//! renders it. Plain text drops the emphasis; HTML wraps it in `<b>`.

pub mod format;
pub mod html;
pub mod plain;

pub use format::OutputFormat;
pub use html::Html;
pub use plain::PlainText;

/// One piece of a composed reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text, including its surrounding punctuation.
    Text(String),
    /// A segment carrying the standard's strong emphasis (the uppercased
    /// title or periodical name).
    Strong(String),
}

/// An ordered list of segments making up one reference entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Segments(Vec<Segment>);

impl Segments {
    pub fn new() -> Self {
        Segments(Vec::new())
    }

    /// Append literal text.
    pub fn text(&mut self, s: impl Into<String>) {
        self.0.push(Segment::Text(s.into()));
    }

    /// Append an emphasized segment.
    pub fn strong(&mut self, s: impl Into<String>) {
        self.0.push(Segment::Strong(s.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.0.iter()
    }

    /// The emphasized substrings, in order. Empty for entries with no
    /// emphasized title (legislation, placeholder).
    pub fn emphasized(&self) -> Vec<&str> {
        self.0
            .iter()
            .filter_map(|s| match s {
                Segment::Strong(t) => Some(t.as_str()),
                Segment::Text(_) => None,
            })
            .collect()
    }

    /// Render the entry through an output format.
    pub fn render<F: OutputFormat>(&self, fmt: &F) -> String {
        let parts = self
            .0
            .iter()
            .map(|segment| match segment {
                Segment::Text(t) => fmt.text(t),
                Segment::Strong(t) => fmt.strong(fmt.text(t)),
            })
            .collect();
        fmt.finish(fmt.join(parts, ""))
    }

    /// Shorthand for rendering with [`PlainText`].
    pub fn plain(&self) -> String {
        self.render(&PlainText)
    }
}
