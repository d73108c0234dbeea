/*
SPDX-License-Identifier: MPL-2.0
*/

//! The reference composer: one fixed template per reference type,
//! per NBR 6023:2018.
//!
//! Every template is an ordered list of conditional segments. A segment is
//! emitted only when its backing field is non-empty, and each segment
//! carries its own leading separator, so omitting a field can never leave
//! an orphaned colon or comma behind.

use super::REFERENCE_PLACEHOLDER;
use crate::names::{reference_author_list, split_authors};
use crate::render::Segments;
use abnt_core::{ReferenceRecord, ReferenceType};

/// Compose the full reference for a record, dispatching on its type.
pub fn compose_reference(record: &ReferenceRecord) -> Segments {
    match record.r#type {
        ReferenceType::Book => book(record),
        ReferenceType::Article => article(record),
        ReferenceType::Website => website(record),
        ReferenceType::Tcc | ReferenceType::Dissertation | ReferenceType::Thesis => {
            academic(record)
        }
        ReferenceType::Youtube => youtube(record),
        ReferenceType::Legislation => legislation(record),
        ReferenceType::Chapter => chapter(record),
        ReferenceType::Image => image(record),
        ReferenceType::Unspecified => {
            let mut out = Segments::new();
            out.text(REFERENCE_PLACEHOLDER);
            out
        }
    }
}

/// Append the author-list prefix (`"NAME₁; NAME₂. "`) when any author is
/// present.
fn push_authors(out: &mut Segments, raw: &str) {
    let authors = split_authors(raw);
    if !authors.is_empty() {
        out.text(format!("{}. ", reference_author_list(&authors)));
    }
}

// SOBRENOME, Nome. TÍTULO: subtítulo. Edição. Local: Editora, ano.
fn book(record: &ReferenceRecord) -> Segments {
    let mut out = Segments::new();
    push_authors(&mut out, &record.author);
    out.strong(record.title.to_uppercase());
    if !record.subtitle.is_empty() {
        out.text(format!(": {}.", record.subtitle));
    } else {
        out.text(".");
    }
    if !record.edition.is_empty() {
        out.text(format!(" {}. ed.", record.edition));
    }
    if !record.place.is_empty() {
        out.text(format!(" {}:", record.place));
    }
    if !record.publisher.is_empty() {
        out.text(format!(" {},", record.publisher));
    }
    if !record.year.is_empty() {
        out.text(format!(" {}.", record.year));
    }
    out
}

// SOBRENOME, Nome. Título do artigo. PERIÓDICO, local, v., n., p., ano.
fn article(record: &ReferenceRecord) -> Segments {
    let mut out = Segments::new();
    push_authors(&mut out, &record.author);
    out.text(format!("{}. ", record.title));
    if !record.periodical_title.is_empty() {
        out.strong(record.periodical_title.to_uppercase());
        out.text(", ");
    }
    if !record.place.is_empty() {
        out.text(format!("{}, ", record.place));
    }
    if !record.volume.is_empty() {
        out.text(format!("v. {}, ", record.volume));
    }
    if !record.number.is_empty() {
        out.text(format!("n. {}, ", record.number));
    }
    if !record.pages.is_empty() {
        out.text(format!("p. {}, ", record.pages));
    }
    if !record.year.is_empty() {
        out.text(format!("{}.", record.year));
    }
    out
}

// AUTOR. TÍTULO. Ano. Disponível em: URL. Acesso em: data.
fn website(record: &ReferenceRecord) -> Segments {
    let mut out = Segments::new();
    push_authors(&mut out, &record.author);
    out.strong(record.title.to_uppercase());
    out.text(". ");
    if !record.year.is_empty() {
        out.text(format!("{}. ", record.year));
    }
    if !record.available_at.is_empty() {
        out.text(format!("Disponível em: {}. ", record.available_at));
    }
    if !record.access_date.is_empty() {
        out.text(format!("Acesso em: {}.", record.access_date));
    }
    out
}

// SOBRENOME, Nome. TÍTULO: subtítulo. Ano. Folhas. Tipo (Programa) –
// Instituição, Local, ano.
//
// The year appears twice, once after the title and once at the end,
// matching the standard's date-of-defense convention.
fn academic(record: &ReferenceRecord) -> Segments {
    let mut out = Segments::new();
    push_authors(&mut out, &record.author);
    out.strong(record.title.to_uppercase());
    if !record.subtitle.is_empty() {
        out.text(format!(": {}.", record.subtitle));
    } else {
        out.text(".");
    }
    if !record.year.is_empty() {
        out.text(format!(" {}.", record.year));
    }
    if !record.pages_or_volumes.is_empty() {
        out.text(format!(" {}.", record.pages_or_volumes));
    }
    if !record.document_type.is_empty() {
        let mut segment = format!(" {}", record.document_type);
        if !record.course_program.is_empty() {
            segment.push_str(&format!(" ({})", record.course_program));
        }
        segment.push_str(" –");
        out.text(segment);
    }
    if !record.institution.is_empty() {
        out.text(format!(" {},", record.institution));
    }
    if !record.place.is_empty() {
        out.text(format!(" {},", record.place));
    }
    if !record.year.is_empty() {
        out.text(format!(" {}.", record.year));
    }
    out
}

// AUTOR (ou CANAL). TÍTULO [Vídeo online]. Local: Produtora, ano. Duração.
// Disponível em: URL. Acesso em: data.
fn youtube(record: &ReferenceRecord) -> Segments {
    let mut out = Segments::new();
    let authors = split_authors(&record.author);
    if !authors.is_empty() {
        out.text(format!("{}. ", reference_author_list(&authors)));
    } else if !record.platform_producer.is_empty() {
        // The channel stands in for the author.
        out.text(format!("{}. ", record.platform_producer.to_uppercase()));
    }
    out.strong(record.title.to_uppercase());
    out.text(" [Vídeo online]. ");
    if !record.place.is_empty() {
        out.text(format!("{}: ", record.place));
    }
    if !record.platform_producer.is_empty() && authors.is_empty() {
        out.text(format!("{}, ", record.platform_producer));
    }
    if !record.year.is_empty() {
        out.text(format!("{}. ", record.year));
    }
    if !record.video_duration.is_empty() {
        out.text(format!("{}. ", record.video_duration));
    }
    if !record.available_at.is_empty() {
        out.text(format!("Disponível em: {}. ", record.available_at));
    }
    if !record.access_date.is_empty() {
        out.text(format!("Acesso em: {}.", record.access_date));
    }
    out
}

// JURISDIÇÃO. [Epígrafe]. Ementa. Dados da publicação.
fn legislation(record: &ReferenceRecord) -> Segments {
    let mut out = Segments::new();
    if !record.jurisdiction.is_empty() {
        out.text(format!("{}. ", record.jurisdiction.to_uppercase()));
    }
    let has_type = !record.legislation_type.is_empty();
    let has_number = !record.legislation_number.is_empty();
    let has_date = !record.legislation_date.is_empty();
    if has_type && has_number && has_date {
        out.text(format!(
            "[{} {}, de {}]. ",
            record.legislation_type, record.legislation_number, record.legislation_date
        ));
    } else if has_type && has_number {
        out.text(format!(
            "[{} {}]. ",
            record.legislation_type, record.legislation_number
        ));
    } else if has_type {
        out.text(format!("[{}]. ", record.legislation_type));
    }
    if !record.ementa.is_empty() {
        out.text(format!("{}. ", record.ementa));
    }
    if !record.publication_vehicle.is_empty() {
        out.text(format!("{}: ", record.publication_vehicle));
    }
    if !record.publication_location.is_empty() {
        out.text(format!("{}, ", record.publication_location));
    }
    if !record.publication_volume_number.is_empty() {
        out.text(format!("{}, ", record.publication_volume_number));
    }
    if !record.publication_pages.is_empty() {
        out.text(format!("p. {}, ", record.publication_pages));
    }
    if !record.publication_date.is_empty() {
        out.text(format!("{}.", record.publication_date));
    }
    if !record.available_at.is_empty() {
        out.text(format!(" Disponível em: {}.", record.available_at));
    }
    if !record.access_date.is_empty() {
        out.text(format!(" Acesso em: {}.", record.access_date));
    }
    out
}

// AUTOR DA PARTE. Título da parte. In: AUTOR DA OBRA (ou ORGANIZADOR
// (org.)). TÍTULO DA OBRA: subtítulo. Edição. Local: Editora, ano. p. x-y.
fn chapter(record: &ReferenceRecord) -> Segments {
    let mut out = Segments::new();
    push_authors(&mut out, &record.author);
    out.text(format!("{}. ", record.title));
    if !record.subtitle.is_empty() {
        out.text(format!(": {}. ", record.subtitle));
    }
    out.text("In: ");

    let book_authors = split_authors(&record.book_author);
    if !book_authors.is_empty() {
        out.text(format!("{}. ", reference_author_list(&book_authors)));
    } else if !record.book_organizer.is_empty() {
        out.text(format!("{} (org.). ", record.book_organizer.to_uppercase()));
    }

    out.strong(record.book_title.to_uppercase());
    if !record.book_subtitle.is_empty() {
        out.text(format!(": {}.", record.book_subtitle));
    } else {
        out.text(".");
    }
    if !record.book_edition.is_empty() {
        out.text(format!(" {}. ed.", record.book_edition));
    }
    if !record.book_place.is_empty() {
        out.text(format!(" {}:", record.book_place));
    }
    if !record.book_publisher.is_empty() {
        out.text(format!(" {},", record.book_publisher));
    }
    if !record.book_year.is_empty() {
        out.text(format!(" {}.", record.book_year));
    }
    if !record.chapter_pages.is_empty() {
        out.text(format!(" p. {}.", record.chapter_pages));
    }
    if !record.available_at.is_empty() {
        out.text(format!(" Disponível em: {}.", record.available_at));
    }
    if !record.access_date.is_empty() {
        out.text(format!(" Acesso em: {}.", record.access_date));
    }
    out
}

// AUTOR. TÍTULO (ou [SEM TÍTULO]). Data. Tipo. Dimensões. Localização.
fn image(record: &ReferenceRecord) -> Segments {
    let mut out = Segments::new();
    push_authors(&mut out, &record.author);
    if !record.title.is_empty() {
        out.strong(record.title.to_uppercase());
    } else {
        out.strong("[SEM TÍTULO]");
    }
    out.text(". ");
    if !record.year.is_empty() {
        out.text(format!("{}. ", record.year));
    }
    if !record.image_type.is_empty() {
        out.text(format!("{}. ", record.image_type));
    }
    if !record.image_dimensions.is_empty() {
        out.text(format!("{}. ", record.image_dimensions));
    }
    if !record.image_location.is_empty() {
        out.text(format!("{}.", record.image_location));
    }
    // No leading space before the URL segment here; the location segment
    // ends with a bare period.
    if !record.available_at.is_empty() {
        out.text(format!("Disponível em: {}.", record.available_at));
    }
    if !record.access_date.is_empty() {
        out.text(format!(" Acesso em: {}.", record.access_date));
    }
    out
}
