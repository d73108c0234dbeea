/*
SPDX-License-Identifier: MPL-2.0
*/

//! Author-name formatting and multi-author resolution.
//!
//! NBR 6023 wants the inverted "SURNAME, Given Name" form in references;
//! NBR 10520 wants the bare surname, original case, in citations. Both are
//! derived from the same free-text name by one shared rule: a comma marks an
//! already-inverted name, otherwise the last whitespace token is the
//! surname. No person/entity distinction is ever supplied as input, so an
//! institution name degrades to last-word-as-surname.

use abnt_core::{ReferenceRecord, ReferenceType};

/// Split a raw author field on `;`, dropping blanks.
pub fn split_authors(raw: &str) -> Vec<&str> {
    raw.split(';').map(str::trim).filter(|a| !a.is_empty()).collect()
}

/// Split one name into (surname, given name).
fn split_name(name: &str) -> (String, String) {
    if let Some((family, given)) = name.split_once(',') {
        return (family.trim().to_string(), given.trim().to_string());
    }
    let mut parts: Vec<&str> = name.split_whitespace().collect();
    match parts.pop() {
        Some(last) => (last.to_string(), parts.join(" ")),
        None => (String::new(), String::new()),
    }
}

/// The inverted reference form: `"SURNAME, Given Name"`.
///
/// A single-token name yields `"SURNAME, "` with an empty given-name
/// segment. Blank input yields the empty string.
pub fn reference_form(name: &str) -> String {
    let (family, given) = split_name(name);
    if family.is_empty() && given.is_empty() {
        return String::new();
    }
    format!("{}, {}", family.to_uppercase(), given)
}

/// The citation form: the bare surname, original case preserved.
pub fn citation_form(name: &str) -> String {
    split_name(name).0
}

/// Join a list of names in reference form with `"; "`.
///
/// The caller appends the terminating `". "` so the list composes with the
/// rest of the entry.
pub fn reference_author_list(authors: &[&str]) -> String {
    authors.iter().map(|a| reference_form(a)).collect::<Vec<_>>().join("; ")
}

/// Apply the NBR 10520 author-count collapsing rule to a citation
/// author-list: one name as-is, two or three joined with `"; "`, more than
/// three as the first surname plus `" et al."`.
pub fn citation_author_list(authors: &[&str]) -> String {
    match authors.len() {
        0 => String::new(),
        1 => citation_form(authors[0]),
        2 | 3 => authors.iter().map(|a| citation_form(a)).collect::<Vec<_>>().join("; "),
        _ => format!("{} et al.", citation_form(authors[0])),
    }
}

/// Resolve the citation author for a record, by precedence:
///
/// 1. A non-empty author list, collapsed per the author-count rule.
/// 2. For `website`, `youtube` and `image`: the first word of the title.
/// 3. For `legislation`: the jurisdiction, verbatim.
/// 4. For `chapter`: the book author-list, falling back to the first word
///    of the book title.
/// 5. Otherwise empty — the citation becomes a placeholder.
///
/// The order encodes which surrogate identifies a work when no personal
/// author exists, and must not be reordered.
pub fn resolve_citation_author(record: &ReferenceRecord) -> String {
    let authors = split_authors(&record.author);
    if !authors.is_empty() {
        return citation_author_list(&authors);
    }
    match record.r#type {
        ReferenceType::Website | ReferenceType::Youtube | ReferenceType::Image => {
            first_word(&record.title).to_string()
        }
        ReferenceType::Legislation => record.jurisdiction.clone(),
        ReferenceType::Chapter => {
            let book_authors = split_authors(&record.book_author);
            if !book_authors.is_empty() {
                citation_author_list(&book_authors)
            } else {
                first_word(&record.book_title).to_string()
            }
        }
        _ => String::new(),
    }
}

fn first_word(text: &str) -> &str {
    text.split_whitespace().next().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_form_inverted_input() {
        assert_eq!(reference_form("Silva, João"), "SILVA, João");
        assert_eq!(reference_form("Oliveira, Maria Clara"), "OLIVEIRA, Maria Clara");
    }

    #[test]
    fn test_reference_form_natural_order() {
        assert_eq!(reference_form("João Silva"), "SILVA, João");
        assert_eq!(reference_form("Maria Clara de Souza"), "SOUZA, Maria Clara de");
    }

    #[test]
    fn test_reference_form_single_token() {
        assert_eq!(reference_form("Silva"), "SILVA, ");
    }

    #[test]
    fn test_reference_form_entity_degrades_to_last_word() {
        assert_eq!(
            reference_form("Organização Mundial da Saúde"),
            "SAÚDE, Organização Mundial da"
        );
    }

    #[test]
    fn test_citation_form_keeps_original_case() {
        assert_eq!(citation_form("Silva, João"), "Silva");
        assert_eq!(citation_form("João Silva"), "Silva");
        assert_eq!(citation_form("joão silva"), "silva");
    }

    #[test]
    fn test_split_authors_trims_and_drops_blanks() {
        assert_eq!(
            split_authors("Silva, João; ; Santos, Maria ;"),
            vec!["Silva, João", "Santos, Maria"]
        );
        assert!(split_authors("").is_empty());
        assert!(split_authors(" ; ").is_empty());
    }

    #[test]
    fn test_citation_list_three_authors_all_listed() {
        let authors = vec!["Silva, João", "Santos, Maria", "Lima, Pedro"];
        assert_eq!(citation_author_list(&authors), "Silva; Santos; Lima");
    }

    #[test]
    fn test_citation_list_four_authors_et_al() {
        let authors = vec!["Silva, João", "Santos, Maria", "Lima, Pedro", "Costa, Ana"];
        assert_eq!(citation_author_list(&authors), "Silva et al.");
    }

    #[test]
    fn test_resolve_website_falls_back_to_title_word() {
        let record = ReferenceRecord {
            r#type: ReferenceType::Website,
            title: "Panorama do saneamento básico".to_string(),
            ..Default::default()
        };
        assert_eq!(resolve_citation_author(&record), "Panorama");
    }

    #[test]
    fn test_resolve_legislation_uses_jurisdiction_verbatim() {
        let record = ReferenceRecord {
            r#type: ReferenceType::Legislation,
            jurisdiction: "São Paulo (Estado)".to_string(),
            ..Default::default()
        };
        assert_eq!(resolve_citation_author(&record), "São Paulo (Estado)");
    }

    #[test]
    fn test_resolve_chapter_prefers_book_author() {
        let record = ReferenceRecord {
            r#type: ReferenceType::Chapter,
            book_author: "Silva, Pedro; Santos, Ana".to_string(),
            book_title: "Urbanismo no Brasil".to_string(),
            ..Default::default()
        };
        assert_eq!(resolve_citation_author(&record), "Silva; Santos");
    }

    #[test]
    fn test_resolve_chapter_falls_back_to_book_title() {
        let record = ReferenceRecord {
            r#type: ReferenceType::Chapter,
            book_title: "Urbanismo no Brasil".to_string(),
            ..Default::default()
        };
        assert_eq!(resolve_citation_author(&record), "Urbanismo");
    }

    #[test]
    fn test_resolve_chapter_author_wins_over_book_author() {
        let record = ReferenceRecord {
            r#type: ReferenceType::Chapter,
            author: "Lima, Rafael".to_string(),
            book_author: "Silva, Pedro".to_string(),
            ..Default::default()
        };
        assert_eq!(resolve_citation_author(&record), "Lima");
    }

    #[test]
    fn test_resolve_book_without_author_is_empty() {
        let record = ReferenceRecord {
            title: "Exemplo".to_string(),
            ..Default::default()
        };
        assert_eq!(resolve_citation_author(&record), "");
    }
}
