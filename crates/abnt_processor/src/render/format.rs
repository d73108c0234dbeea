/*
SPDX-License-Identifier: MPL-2.0
*/

//! Output format trait for pluggable renderers.

/// Trait for defining how composed segments are rendered into a specific
/// output format.
///
/// The composer only decides *which* substring carries the standard's
/// emphasis; how that emphasis appears (bold tags, nothing at all) is the
/// format's concern.
pub trait OutputFormat: Default + Clone {
    /// The type used for intermediate rendered content.
    ///
    /// For simple text formats this is usually `String`.
    type Output;

    /// Convert a raw string into the format's output type.
    fn text(&self, s: &str) -> Self::Output;

    /// Render content with strong emphasis (typically bold).
    fn strong(&self, content: Self::Output) -> Self::Output;

    /// Join multiple outputs into a single output using a delimiter.
    fn join(&self, items: Vec<Self::Output>, delimiter: &str) -> Self::Output;

    /// Convert the intermediate output into the final result string.
    ///
    /// Called exactly once at the end of rendering an entry.
    fn finish(&self, output: Self::Output) -> String;
}
