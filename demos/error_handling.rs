//! Error handling example for siraj-rs
//!
//! Load-time errors are fatal; query-time errors become apologies.

use siraj_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== Siraj Error Handling Example ===\n");

    // Example 1: Handling catalog load errors
    println!("--- Example 1: Loading a catalog that does not exist ---");
    match Catalog::load_from_path("does-not-exist.csv", &ColumnSpec::default()) {
        Ok(catalog) => println!("✓ Loaded {} entries", catalog.len()),
        Err(e) => {
            eprintln!("✗ Failed to load catalog: {e}");
            println!("  data-load error (fatal in the assistant): {}", e.is_data_load());
        }
    }
    println!();

    // Example 2: Malformed header
    println!("--- Example 2: Catalog without a route column ---");
    let data = "Name,Station\nمطعم الديوان,العليا\n";
    if let Err(e) = Catalog::from_reader(data.as_bytes(), &ColumnSpec::default()) {
        println!("  {e}");
    }
    println!();

    // Example 3: Recoverable query errors
    println!("--- Example 3: Query errors ---");
    let catalog = Catalog::from_entries(vec![
        CatalogEntry::new("مطعم الديوان", "يسار ثم يمين"),
        CatalogEntry::new("مطعم البيك", ""),
    ]);
    let assistant = Assistant::new(&catalog, NameExtractor::default(), DEFAULT_THRESHOLD);
    for utterance in ["خذني إلى", "أريد مطعم غير موجود", "إلى مطعم البيك"] {
        match assistant.answer(utterance) {
            Ok(result) => println!("  {utterance} -> {}", result.route),
            Err(err) => {
                println!("  {utterance} -> {err}");
                println!("    spoken: {}", assistant.messages().render_error(&err));
            }
        }
    }

    Ok(())
}
