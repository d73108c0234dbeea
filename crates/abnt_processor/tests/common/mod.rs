/*
SPDX-License-Identifier: MPL-2.0
*/

//! Record builders shared by the integration tests.

#![allow(dead_code)]

use abnt_core::{ReferenceRecord, ReferenceType};

pub fn make_book(author: &str, title: &str, year: &str) -> ReferenceRecord {
    ReferenceRecord {
        r#type: ReferenceType::Book,
        author: author.to_string(),
        title: title.to_string(),
        year: year.to_string(),
        ..Default::default()
    }
}

pub fn make_article(author: &str, title: &str, periodical: &str, year: &str) -> ReferenceRecord {
    ReferenceRecord {
        r#type: ReferenceType::Article,
        author: author.to_string(),
        title: title.to_string(),
        periodical_title: periodical.to_string(),
        year: year.to_string(),
        ..Default::default()
    }
}

pub fn make_website(title: &str, year: &str, url: &str, accessed: &str) -> ReferenceRecord {
    ReferenceRecord {
        r#type: ReferenceType::Website,
        title: title.to_string(),
        year: year.to_string(),
        available_at: url.to_string(),
        access_date: accessed.to_string(),
        ..Default::default()
    }
}

pub fn make_legislation(jurisdiction: &str, publication_date: &str) -> ReferenceRecord {
    ReferenceRecord {
        r#type: ReferenceType::Legislation,
        jurisdiction: jurisdiction.to_string(),
        publication_date: publication_date.to_string(),
        ..Default::default()
    }
}

pub fn make_chapter(author: &str, title: &str, book_title: &str) -> ReferenceRecord {
    ReferenceRecord {
        r#type: ReferenceType::Chapter,
        author: author.to_string(),
        title: title.to_string(),
        book_title: book_title.to_string(),
        ..Default::default()
    }
}
