/*
SPDX-License-Identifier: MPL-2.0
*/

//! HTML output format.

use super::format::OutputFormat;

#[derive(Default, Clone)]
pub struct Html;

impl OutputFormat for Html {
    type Output = String;

    fn text(&self, s: &str) -> Self::Output {
        // Raw Unicode, no escaping.
        s.to_string()
    }

    fn strong(&self, content: Self::Output) -> Self::Output {
        if content.is_empty() {
            return content;
        }
        format!("<b>{}</b>", content)
    }

    fn join(&self, items: Vec<Self::Output>, delimiter: &str) -> Self::Output {
        items.join(delimiter)
    }

    fn finish(&self, output: Self::Output) -> String {
        output
    }
}
