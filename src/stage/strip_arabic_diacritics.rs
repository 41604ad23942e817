//! src/stage/strip_arabic_diacritics.rs
//!
//! Removes Arabic vowel marks (harakat, tanween, shadda, sukun), the
//! superscript alef and Quranic annotation signs.

use crate::{
    stage::{CharMapper, Stage, map_chars},
    unicode::{contains_arabic_diacritics, is_arabic_diacritic},
};
use std::borrow::Cow;

/// Drops every code point in U+064B..=U+065F, U+0670 and U+06D6..=U+06ED.
///
/// Runs first in every Arabic-script profile: the letter folds that follow
/// must see bare letters, and a mark sitting between two lams must not hide
/// the pair from the ligature breaker.
///
/// Zero-copy on ASCII and on already-bare text. Idempotent.
#[derive(Debug, Default, Clone, Copy)]
pub struct StripArabicDiacritics;

impl Stage for StripArabicDiacritics {
    fn name(&self) -> &'static str {
        "strip_arabic_diacritics"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> bool {
        contains_arabic_diacritics(text)
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        if text.is_ascii() {
            return text;
        }
        map_chars(text, self)
    }
}

impl CharMapper for StripArabicDiacritics {
    #[inline(always)]
    fn map(&self, c: char) -> Option<char> {
        if is_arabic_diacritic(c) { None } else { Some(c) }
    }
}

#[cfg(test)]
mod contract_tests {
    use super::*;
    use crate::{assert_stage_contract, testing::stage_contract::StageTestConfig};

    impl StageTestConfig for StripArabicDiacritics {
        fn samples() -> &'static [&'static str] {
            &[
                "مَرْحَبًا",
                "بِسْمِ اللَّهِ الرَّحْمَٰنِ الرَّحِيمِ",
                "كتاب",
                "mixed مَ text",
                "",
            ]
        }

        fn should_transform() -> &'static [(&'static str, &'static str)] {
            &[
                ("مَرْحَبًا", "مرحبا"),
                ("الرَّحْمَٰنِ", "الرحمن"),
                ("ذَٰلِكَ", "ذلك"),
            ]
        }
    }

    #[test]
    fn universal_contract_compliance() {
        assert_stage_contract!(StripArabicDiacritics);
    }
}
