/*
SPDX-License-Identifier: MPL-2.0
*/

//! A reference record is one bibliographic item: a book, article, web page,
//! video, legislation, academic work, book chapter, or image.
//!
//! The model is deliberately flat and stringly typed: every field is a
//! `String`, and the empty string means "not filled in". The record is what
//! a form layer mutates on every keystroke, so absence never needs a
//! null/undefined distinction — a missing field and a cleared field are the
//! same thing. The selected [`ReferenceType`] decides which fields are
//! semantically meaningful; the rest are ignored by the composers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of source being referenced.
///
/// Determines which composition rule runs and which fields matter.
/// `tcc`, `dissertation` and `thesis` share one academic-work rule.
#[derive(Debug, Default, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum ReferenceType {
    #[default]
    Book,
    Article,
    Website,
    Tcc,
    Dissertation,
    Thesis,
    Youtube,
    Legislation,
    Chapter,
    Image,
    /// Any unrecognized wire value. Composing a record with this type
    /// yields the fixed placeholder strings.
    #[serde(other)]
    Unspecified,
}

impl ReferenceType {
    /// The three academic-work types share a single composition rule.
    pub fn is_academic(&self) -> bool {
        matches!(
            self,
            ReferenceType::Tcc | ReferenceType::Dissertation | ReferenceType::Thesis
        )
    }
}

impl fmt::Display for ReferenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReferenceType::Book => "book",
            ReferenceType::Article => "article",
            ReferenceType::Website => "website",
            ReferenceType::Tcc => "tcc",
            ReferenceType::Dissertation => "dissertation",
            ReferenceType::Thesis => "thesis",
            ReferenceType::Youtube => "youtube",
            ReferenceType::Legislation => "legislation",
            ReferenceType::Chapter => "chapter",
            ReferenceType::Image => "image",
            ReferenceType::Unspecified => "unspecified",
        };
        write!(f, "{}", name)
    }
}

/// One bibliographic record, as entered in the form layer.
///
/// Wire names are camelCase. `author` holds zero or more names separated by
/// `;`. A name containing a comma is taken as already inverted
/// ("Surname, Given"); otherwise the last whitespace token is the surname —
/// entity names with no internal structure degrade to last-word-as-surname.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct ReferenceRecord {
    pub r#type: ReferenceType,

    // Common fields
    pub author: String,
    pub title: String,
    pub subtitle: String,
    pub year: String,

    // Book
    pub edition: String,
    pub place: String,
    pub publisher: String,

    // Article
    pub periodical_title: String,
    pub volume: String,
    pub number: String,
    pub pages: String,

    // Online access
    pub available_at: String,
    pub access_date: String,

    // Academic work (tcc, dissertation, thesis)
    pub institution: String,
    pub course_program: String,
    pub document_type: String,
    pub pages_or_volumes: String,

    // Video
    pub video_duration: String,
    pub platform_producer: String,

    // Legislation
    pub jurisdiction: String,
    pub legislation_type: String,
    pub legislation_number: String,
    pub legislation_date: String,
    pub ementa: String,
    pub publication_vehicle: String,
    pub publication_location: String,
    pub publication_volume_number: String,
    pub publication_pages: String,
    pub publication_date: String,

    // Chapter (part of a book)
    pub book_author: String,
    pub book_title: String,
    pub book_subtitle: String,
    pub book_edition: String,
    pub book_place: String,
    pub book_publisher: String,
    pub book_year: String,
    pub chapter_pages: String,
    pub book_organizer: String,

    // Image
    pub image_type: String,
    pub image_dimensions: String,
    pub image_location: String,
}

impl ReferenceRecord {
    /// A fresh record as the form layer starts it: type `book`, everything
    /// else empty.
    pub fn new(r#type: ReferenceType) -> Self {
        ReferenceRecord {
            r#type,
            ..Default::default()
        }
    }
}
