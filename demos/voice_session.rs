//! Wake-word session example for siraj-rs
//!
//! Feeds a scripted list of transcripts through a [`Session`] using the text
//! adapters in place of real speech services.

use siraj_rs::prelude::*;

fn main() -> Result<()> {
    let catalog = Catalog::from_entries(vec![
        CatalogEntry::new("مطعم الديوان", "يسار ثم يمين"),
        CatalogEntry::new("مقهى النخلة", "بجانب المخرج الشمالي"),
    ]);
    let assistant = Assistant::new(&catalog, NameExtractor::default(), DEFAULT_THRESHOLD);
    let mut session = Session::new(assistant, "سراج");
    let (mut stt, mut tts) = (TextTranscriber, TextSynthesizer);

    println!("{}", session.greeting());
    let script = [
        "مرحبا",
        "يا سراج",
        "خذني إلى مطعم الديوان",
        "سراج",
        "وين مطعم السمك",
    ];
    for line in script {
        println!("> {line}  [{:?}]", session.state());
        if let Some(audio) = session.run_turn(line.as_bytes(), &mut stt, &mut tts)? {
            print!("< {}", String::from_utf8_lossy(&audio));
        }
    }
    println!("{}", session.farewell());
    Ok(())
}
