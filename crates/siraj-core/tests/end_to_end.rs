//! Utterance-to-reply scenarios through the public API.

use siraj_core::prelude::*;

fn diwan() -> Catalog {
    Catalog::from_entries(vec![CatalogEntry::new("مطعم الديوان", "يسار ثم يمين")])
}

#[test]
fn known_restaurant_gets_its_route() {
    let catalog = diwan();
    let extractor = NameExtractor::default();

    let query = extractor.extract("خذني إلى مطعم الديوان");
    assert_eq!(query, "مطعم الديوان");

    let hit = resolve(query, &catalog);
    assert_eq!(hit.matched_name.as_deref(), Some("مطعم الديوان"));
    assert_eq!(hit.score, 100);

    assert_eq!(catalog.lookup("مطعم الديوان"), "يسار ثم يمين");

    let reply = Assistant::new(&catalog, extractor, DEFAULT_THRESHOLD).reply("خذني إلى مطعم الديوان");
    assert!(reply.contains("مطعم الديوان"));
    assert!(reply.contains("يسار ثم يمين"));
}

#[test]
fn unknown_restaurant_gets_an_apology() {
    let catalog = diwan();
    let assistant = Assistant::new(&catalog, NameExtractor::default(), DEFAULT_THRESHOLD);

    let hit = resolve("أريد مطعم غير موجود", &catalog);
    assert!(hit.score < 60);

    let reply = assistant.reply("أريد مطعم غير موجود");
    assert_eq!(reply, Messages::default().not_understood);
    assert!(!reply.contains("يسار ثم يمين"));
}

#[test]
fn repeated_queries_are_identical() {
    let catalog = diwan();
    let first = (resolve("الديوان", &catalog), catalog.lookup("مطعم الديوان").to_owned());
    let second = (resolve("الديوان", &catalog), catalog.lookup("مطعم الديوان").to_owned());
    assert_eq!(first, second);
}

#[test]
fn catalog_is_shared_across_threads() {
    let catalog = std::sync::Arc::new(diwan());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let catalog = std::sync::Arc::clone(&catalog);
            std::thread::spawn(move || {
                let assistant = Assistant::new(&catalog, NameExtractor::default(), DEFAULT_THRESHOLD);
                assistant.answer("إلى الديوان").map(|r| r.route)
            })
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap().unwrap(), "يسار ثم يمين");
    }
}

#[test]
fn voice_session_over_text_adapters() {
    let catalog = diwan();
    let assistant = Assistant::new(&catalog, NameExtractor::default(), DEFAULT_THRESHOLD);
    let mut session = Session::new(assistant, "سراج");
    let (mut stt, mut tts) = (TextTranscriber, TextSynthesizer);

    let silent = session.run_turn("ما هذا".as_bytes(), &mut stt, &mut tts).unwrap();
    assert!(silent.is_none());

    let prompt = session.run_turn("سراج".as_bytes(), &mut stt, &mut tts).unwrap().unwrap();
    assert_eq!(String::from_utf8(prompt).unwrap().trim_end(), Messages::default().prompt);

    let reply = session
        .run_turn("خذني إلى مطعم الديوان".as_bytes(), &mut stt, &mut tts)
        .unwrap()
        .unwrap();
    assert!(String::from_utf8(reply).unwrap().contains("يسار ثم يمين"));
    assert_eq!(session.state(), SessionState::AwaitingWake);
}

#[test]
fn every_display_name_resolves_to_itself() {
    // Pairs that fold to the same key, and names that fold to nothing.
    let catalog = Catalog::from_entries(vec![
        CatalogEntry::new("مطعم الديوان", "يسار ثم يمين"),
        CatalogEntry::new("مطعم الدِّيوان", "الطابق الثاني"),
        CatalogEntry::new("AL BAIK", "البوابة 1"),
        CatalogEntry::new("Al Baik", "البوابة 2"),
        CatalogEntry::new("مقهى النخلة", "المخرج الشمالي"),
        CatalogEntry::new("مقهى النخله", "المخرج الجنوبي"),
        CatalogEntry::new("☕", "بجانب السلم"),
        CatalogEntry::new("!!", "عند المصعد"),
    ]);

    for entry in catalog.entries() {
        let hit = resolve(&entry.display_name, &catalog);
        assert_eq!(
            hit.matched_name.as_deref(),
            Some(entry.display_name.as_str()),
            "query {:?}",
            entry.display_name
        );
        assert_eq!(hit.score, 100, "query {:?}", entry.display_name);
        assert_eq!(catalog.lookup(&entry.display_name), entry.route);
    }
}
