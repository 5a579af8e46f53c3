use criterion::{criterion_group, criterion_main, Criterion};
use siraj_core::{resolve, Assistant, Catalog, CatalogEntry, NameExtractor, DEFAULT_THRESHOLD};
use std::hint::black_box;

const WORDS: [&str; 8] = ["الديوان", "البيك", "النخلة", "الريف", "السلطان", "الشرق", "البحر", "الواحة"];
const KINDS: [&str; 4] = ["مطعم", "مقهى", "مطبخ", "بيت"];

fn catalog(rows: usize) -> Catalog {
    (0..rows)
        .map(|i| {
            let name = format!("{} {} {}", KINDS[i % KINDS.len()], WORDS[i % WORDS.len()], i);
            CatalogEntry::new(name, format!("المخرج {}", i % 12))
        })
        .collect()
}

fn bench_resolve(c: &mut Criterion) {
    let catalog = catalog(3_000);

    c.bench_function("resolve_3000", |b| {
        b.iter(|| resolve(black_box("مطعم السلطان"), black_box(&catalog)))
    });

    let assistant = Assistant::new(&catalog, NameExtractor::default(), DEFAULT_THRESHOLD);
    c.bench_function("reply_3000", |b| {
        b.iter(|| assistant.reply(black_box("خذني إلى مقهى الواحة")))
    });
}

criterion_group!(benches, bench_resolve);
criterion_main!(benches);
