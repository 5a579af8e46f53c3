//! Basic usage example for siraj-rs
//!
//! This example demonstrates how to:
//! - Build a catalog in memory (or load one from CSV)
//! - Extract a destination from an utterance
//! - Fuzzy-resolve it and look up the route
//! - Let the assistant render the spoken reply

use siraj_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== Siraj Basic Usage Example ===\n");

    // Load the catalog: from CSV_PATH if set, otherwise a small built-in one
    let catalog = match std::env::var("CSV_PATH") {
        Ok(path) => Catalog::load_from_path(path, &ColumnSpec::default())?,
        Err(_) => Catalog::from_entries(vec![
            CatalogEntry::new("مطعم الديوان", "اخرج من البوابة 2 ثم يسار ثم يمين"),
            CatalogEntry::new("مطعم البيك", "الطابق الأرضي بجانب السلم الكهربائي"),
            CatalogEntry::new("مقهى النخلة", "بجانب المخرج الشمالي"),
        ]),
    };
    let stats = catalog.stats();
    println!("✓ Catalog loaded: {} entries ({} with routes)\n", stats.entries, stats.with_route);

    // Example 1: Step by step
    println!("--- Example 1: Extract, resolve, look up ---");
    let utterance = "خذني إلى مطعم الديون";
    let extractor = NameExtractor::default();
    let query = extractor.extract(utterance);
    println!("Utterance: {utterance}");
    println!("Extracted: {query}");
    let hit = resolve(query, &catalog);
    println!("Match: {:?} (score {})", hit.matched_name, hit.score);
    if let Some(name) = hit.matched_name.as_deref() {
        println!("Route: {}", catalog.lookup(name));
    }
    println!();

    // Example 2: Top candidates
    println!("--- Example 2: Top candidates for a vague query ---");
    for (i, c) in resolve_top("مطعم", &catalog, 3).iter().enumerate() {
        println!("{}. {} ({})", i + 1, c.name, c.score);
    }
    println!();

    // Example 3: The assistant does it all
    println!("--- Example 3: Spoken replies ---");
    let assistant = Assistant::new(&catalog, extractor, DEFAULT_THRESHOLD);
    for utterance in ["كيف أروح الى مقهى النخلة؟", "أريد مطعم غير موجود"] {
        println!("> {utterance}");
        println!("< {}", assistant.reply(utterance));
    }

    Ok(())
}
