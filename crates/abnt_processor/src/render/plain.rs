/*
SPDX-License-Identifier: MPL-2.0
*/

//! Plain text output format.
//!
//! Emphasis is dropped entirely: this is the format the plain-text export
//! uses, which must preserve the exact field text with no markup around it.

use super::format::OutputFormat;

#[derive(Default, Clone)]
pub struct PlainText;

impl OutputFormat for PlainText {
    type Output = String;

    fn text(&self, s: &str) -> Self::Output {
        s.to_string()
    }

    fn strong(&self, content: Self::Output) -> Self::Output {
        content
    }

    fn join(&self, items: Vec<Self::Output>, delimiter: &str) -> Self::Output {
        items.join(delimiter)
    }

    fn finish(&self, output: Self::Output) -> String {
        output
    }
}
