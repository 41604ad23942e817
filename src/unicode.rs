// src/unicode.rs
// Character classes and fixed code points used by the Arabic/Persian stages.

/// ZERO WIDTH NON-JOINER – breaks the joining of two adjacent letters.
pub const ZWNJ: char = '\u{200C}';

/// ARABIC LETTER LAM.
pub const LAM: char = '\u{0644}';

/// The divine name (alef, lam, lam, heh). Its lam-lam pair must keep the
/// traditional ligature, so it is never split.
pub const DIVINE_NAME: &str = "\u{0627}\u{0644}\u{0644}\u{0647}";

/// Arabic combining vowel and Quranic annotation marks.
///
/// - U+064B..=U+065F: tanween, harakat, shadda, sukun, maddah, hamza marks
/// - U+0670: superscript alef
/// - U+06D6..=U+06ED: Quranic pause and annotation signs
#[inline(always)]
pub const fn is_arabic_diacritic(c: char) -> bool {
    let cp = c as u32;

    // Early exit: everything outside the Arabic block
    if cp < 0x064B || cp > 0x06ED {
        return false;
    }

    matches!(cp,
        0x064B..=0x065F |
        0x0670 |
        0x06D6..=0x06ED
    )
}

#[inline]
pub fn contains_arabic_diacritics(text: &str) -> bool {
    // Arabic lives entirely outside ASCII
    !text.is_ascii() && text.chars().any(is_arabic_diacritic)
}

/// Orthographic variant → canonical Persian-style letter.
///
/// Alef variants fold to plain alef, hamza carriers fold to their bare letter,
/// Arabic yeh/kaf fold to Persian yeh/kaf, teh marbuta folds to heh.
pub static ARABIC_LETTER_FOLDS: phf::Map<char, char> = phf::phf_map! {
    '\u{0623}' => '\u{0627}', // أ alef with hamza above
    '\u{0625}' => '\u{0627}', // إ alef with hamza below
    '\u{0622}' => '\u{0627}', // آ alef with madda
    '\u{0671}' => '\u{0627}', // ٱ alef wasla
    '\u{0624}' => '\u{0648}', // ؤ waw with hamza
    '\u{0626}' => '\u{06CC}', // ئ yeh with hamza → Persian yeh
    '\u{064A}' => '\u{06CC}', // ي Arabic yeh → Persian yeh
    '\u{0643}' => '\u{06A9}', // ك Arabic kaf → Persian kaf
    '\u{0629}' => '\u{0647}', // ة teh marbuta → heh
};

#[inline(always)]
pub fn fold_arabic_letter(c: char) -> Option<char> {
    // Every source letter sits in U+0622..=U+0671
    if (c as u32) < 0x0622 || (c as u32) > 0x0671 {
        return None;
    }
    ARABIC_LETTER_FOLDS.get(&c).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diacritic_ranges() {
        assert!(is_arabic_diacritic('\u{064E}')); // fatha
        assert!(is_arabic_diacritic('\u{0651}')); // shadda
        assert!(is_arabic_diacritic('\u{0670}')); // superscript alef
        assert!(is_arabic_diacritic('\u{06D6}'));
        assert!(is_arabic_diacritic('\u{06ED}'));
        assert!(!is_arabic_diacritic('\u{0627}')); // alef
        assert!(!is_arabic_diacritic('\u{06EE}'));
        assert!(!is_arabic_diacritic('a'));
    }

    #[test]
    fn letter_folds() {
        assert_eq!(fold_arabic_letter('أ'), Some('ا'));
        assert_eq!(fold_arabic_letter('ٱ'), Some('ا'));
        assert_eq!(fold_arabic_letter('ي'), Some('ی'));
        assert_eq!(fold_arabic_letter('ك'), Some('ک'));
        assert_eq!(fold_arabic_letter('ة'), Some('ه'));
        assert_eq!(fold_arabic_letter('ا'), None);
        assert_eq!(fold_arabic_letter('ی'), None);
        assert_eq!(fold_arabic_letter('x'), None);
    }

    #[test]
    fn fold_targets_are_never_sources() {
        for target in ARABIC_LETTER_FOLDS.values() {
            assert!(fold_arabic_letter(*target).is_none(), "{target} folds again");
        }
    }

    #[test]
    fn divine_name_letters() {
        let chars: Vec<char> = DIVINE_NAME.chars().collect();
        assert_eq!(chars.len(), 4);
        assert_eq!(chars[1], LAM);
        assert_eq!(chars[2], LAM);
        assert_eq!(DIVINE_NAME, "الله");
    }
}
