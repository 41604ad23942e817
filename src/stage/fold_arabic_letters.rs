//! src/stage/fold_arabic_letters.rs
//!
//! Folds Arabic orthographic variants onto one canonical Persian-keyboard form,
//! so a query typed on a Farsi layout finds Arabic-script text.

use crate::{
    stage::{CharMapper, Stage, any_char_changes, map_chars},
    unicode::fold_arabic_letter,
};
use std::borrow::Cow;

/// Applies, as one pass (the source and target sets are disjoint, so the
/// order of the individual rules cannot be observed):
///
/// | from | to |
/// |---|---|
/// | أ إ آ ٱ | ا |
/// | ؤ | و |
/// | ئ ي | ی |
/// | ك | ک |
/// | ة | ه |
///
/// Strictly 1→1, so string length in chars is preserved.
#[derive(Debug, Default, Clone, Copy)]
pub struct FoldArabicLetters;

impl Stage for FoldArabicLetters {
    fn name(&self) -> &'static str {
        "fold_arabic_letters"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> bool {
        !text.is_ascii() && any_char_changes(text, self)
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        if text.is_ascii() {
            return text;
        }
        map_chars(text, self)
    }
}

impl CharMapper for FoldArabicLetters {
    #[inline(always)]
    fn map(&self, c: char) -> Option<char> {
        Some(fold_arabic_letter(c).unwrap_or(c))
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_teh_marbuta_inside_persian_word() {
        let stage = FoldArabicLetters;
        let input = "تکبیرة";
        // teh marbuta still folds even inside Persian words
        assert!(stage.needs_apply(input));
        assert_eq!(stage.apply(Cow::Borrowed(input)), "تکبیره");

        let clean = "قیام و قرات";
        assert!(!stage.needs_apply(clean));
        assert!(matches!(stage.apply(Cow::Borrowed(clean)), Cow::Borrowed(_)));
    }

    #[test]
    fn test_yeh_with_hamza_folds_in_persian_word() {
        let stage = FoldArabicLetters;
        let input = "قیام و قرائت";
        assert!(stage.needs_apply(input));
        assert_eq!(stage.apply(Cow::Borrowed(input)), "قیام و قرایت");
    }

    #[test]
    fn test_length_preserved() {
        let stage = FoldArabicLetters;
        let input = "أإآٱؤئيكة";
        let out = stage.apply(Cow::Borrowed(input));
        assert_eq!(out.chars().count(), input.chars().count());
        assert_eq!(out, "ااااوییکه");
    }

    #[test]
    fn test_latin_untouched() {
        let stage = FoldArabicLetters;
        assert!(!stage.needs_apply("Salah"));
    }
}
