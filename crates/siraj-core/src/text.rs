// crates/siraj-core/src/text.rs

//! Text normalization shared by the scorer and the wake-word check.

/// Fold a string into the key used for fuzzy comparison.
///
/// This performs:
/// 1\) Lowercasing
/// 2\) Arabic orthographic folding: harakat and tatweel are dropped, the alef
///    variants (`أ إ آ ٱ`) become `ا`, `ة` becomes `ه` and `ى` becomes `ي`
/// 3\) Transliteration of other non-ASCII letters to ASCII via `deunicode`
///    (e.g. `Café` -> `cafe`)
/// 4\) Every non-alphanumeric character becomes a space, runs of spaces
///    collapse and the result is trimmed
///
/// # Examples
///
/// ```rust
/// use siraj_core::text::fold_key;
///
/// assert_eq!(fold_key("  مَطْعَم   الدِّيوان! "), "مطعم الديوان");
/// assert_eq!(fold_key("أحمد"), fold_key("احمد"));
/// assert_eq!(fold_key("Café-Bar"), "cafe bar");
/// ```
pub fn fold_key(s: &str) -> String {
    let mut folded = String::with_capacity(s.len());
    for c in s.chars() {
        if is_arabic_mark(c) {
            continue;
        }
        let c = fold_arabic_letter(c);
        if c.is_ascii() || is_arabic_block(c) {
            push_lower(&mut folded, c);
        } else if c.is_alphanumeric() {
            match deunicode::deunicode_char(c) {
                Some(ascii) => ascii.chars().for_each(|a| push_lower(&mut folded, a)),
                None => push_lower(&mut folded, c),
            }
        } else {
            folded.push(' ');
        }
    }
    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Splits a string into its folded tokens.
pub fn tokens(s: &str) -> Vec<String> {
    fold_key(s).split(' ').filter(|t| !t.is_empty()).map(str::to_owned).collect()
}

/// Compares two strings after [`fold_key`].
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}

fn push_lower(out: &mut String, c: char) {
    if c.is_alphanumeric() {
        out.extend(c.to_lowercase());
    } else {
        out.push(' ');
    }
}

fn is_arabic_block(c: char) -> bool {
    ('\u{0600}'..='\u{06FF}').contains(&c)
}

// Harakat, superscript alef and tatweel.
fn is_arabic_mark(c: char) -> bool {
    matches!(c, '\u{064B}'..='\u{0652}' | '\u{0670}' | '\u{0640}')
}

fn fold_arabic_letter(c: char) -> char {
    match c {
        'أ' | 'إ' | 'آ' | 'ٱ' => 'ا',
        'ة' => 'ه',
        'ى' => 'ي',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_arabic_variants() {
        assert_eq!(fold_key("مكتبة"), "مكتبه");
        assert_eq!(fold_key("إلى"), "الي");
        assert_eq!(fold_key("مطعـــم"), "مطعم");
    }

    #[test]
    fn punctuation_becomes_separator() {
        assert_eq!(fold_key("مطعم؟ الديوان،"), "مطعم الديوان");
        assert_eq!(fold_key("!!!"), "");
        assert_eq!(fold_key(""), "");
    }

    #[test]
    fn latin_is_lowercased_and_transliterated() {
        assert_eq!(fold_key("CAFÉ  Zürich"), "cafe zurich");
        assert!(equals_folded("Straße", "strasse"));
    }

    #[test]
    fn tokens_split_folded_words() {
        assert_eq!(tokens(" خذني  إلى البيت "), vec!["خذني", "الي", "البيت"]);
        assert!(tokens("   ").is_empty());
    }
}
