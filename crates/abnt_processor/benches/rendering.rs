use abnt_core::{ReferenceRecord, ReferenceType};
use abnt_processor::{compose_citation, format, Html};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_rendering(c: &mut Criterion) {
    let book = ReferenceRecord {
        author: "Silva, João; Santos, Maria".to_string(),
        title: "Marketing digital".to_string(),
        subtitle: "uma introdução".to_string(),
        edition: "2".to_string(),
        place: "São Paulo".to_string(),
        publisher: "Atlas".to_string(),
        year: "2021".to_string(),
        ..Default::default()
    };

    let legislation = ReferenceRecord {
        r#type: ReferenceType::Legislation,
        jurisdiction: "Brasil".to_string(),
        legislation_type: "Lei".to_string(),
        legislation_number: "nº 10.406".to_string(),
        legislation_date: "10 de janeiro de 2002".to_string(),
        ementa: "Institui o Código Civil".to_string(),
        publication_vehicle: "Diário Oficial da União".to_string(),
        publication_location: "Brasília, DF".to_string(),
        publication_date: "11 jan. 2002".to_string(),
        ..Default::default()
    };

    c.bench_function("Format Reference (book, HTML)", |b| {
        b.iter(|| format(black_box(&book), &Html))
    });

    c.bench_function("Format Reference (legislation, HTML)", |b| {
        b.iter(|| format(black_box(&legislation), &Html))
    });

    c.bench_function("Compose Citation (book)", |b| {
        b.iter(|| compose_citation(black_box(&book)))
    });
}

criterion_group!(benches, bench_rendering);
criterion_main!(benches);
