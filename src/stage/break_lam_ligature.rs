//! src/stage/break_lam_ligature.rs
//!
//! Display-only stage: stops two adjacent lams from rendering as one joined
//! glyph by putting a ZERO WIDTH NON-JOINER between them.

use crate::{
    stage::Stage,
    unicode::{DIVINE_NAME, LAM, ZWNJ},
};
use smallvec::SmallVec;
use std::borrow::Cow;

/// Inserts U+200C between every pair of adjacent lams, except inside the
/// divine name `الله`, which is copied through verbatim.
///
/// A run of three or more lams gets a joiner between *every* pair, so the
/// output never contains two adjacent lams outside the divine name and the
/// stage is idempotent.
///
/// Must run after diacritic stripping: `اللَّه` only becomes the protected
/// sequence once its marks are gone.
#[derive(Debug, Default, Clone, Copy)]
pub struct BreakLamLigature;

/// Byte offsets (into `text`) where a ZWNJ must be inserted.
fn break_points(text: &str) -> SmallVec<[usize; 8]> {
    let mut points = SmallVec::new();
    let mut i = 0;

    while i < text.len() {
        let rest = &text[i..];
        if rest.starts_with(DIVINE_NAME) {
            i += DIVINE_NAME.len();
            continue;
        }

        let mut chars = rest.chars();
        let Some(c) = chars.next() else { break };
        // The divine name starts with alef, so a lam that follows a lam can
        // never be the start of a protected sequence.
        if c == LAM && chars.next() == Some(LAM) {
            points.push(i + LAM.len_utf8());
        }
        i += c.len_utf8();
    }

    points
}

impl Stage for BreakLamLigature {
    fn name(&self) -> &'static str {
        "break_lam_ligature"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> bool {
        // Cheapest possible rejection: no lam-lam byte pair at all
        if !text.contains("\u{0644}\u{0644}") {
            return false;
        }
        !break_points(text).is_empty()
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        let points = break_points(&text);
        if points.is_empty() {
            return text;
        }

        let mut out = String::with_capacity(text.len() + points.len() * ZWNJ.len_utf8());
        let mut last = 0;
        for p in points {
            out.push_str(&text[last..p]);
            out.push(ZWNJ);
            last = p;
        }
        out.push_str(&text[last..]);
        Cow::Owned(out)
    }
}

#[cfg(test)]
mod contract_tests {
    use super::*;
    use crate::{assert_stage_contract, testing::stage_contract::StageTestConfig};

    impl StageTestConfig for BreakLamLigature {
        fn samples() -> &'static [&'static str] {
            &[
                "الله",
                "للذکر",
                "سبحان الله والحمد لله",
                "کلالة",
                "للل",
                "ل\u{200C}ل",
                "",
            ]
        }

        fn should_pass_through() -> &'static [&'static str] {
            &["hello", "الله", "والله", "بسم الله", "ل\u{200C}ل", ""]
        }

        fn should_transform() -> &'static [(&'static str, &'static str)] {
            &[
                ("للذکر", "ل\u{200C}لذکر"),
                ("لله", "ل\u{200C}له"),
                ("للل", "ل\u{200C}ل\u{200C}ل"),
                ("الله لله", "الله ل\u{200C}له"),
            ]
        }
    }

    #[test]
    fn universal_contract_compliance() {
        assert_stage_contract!(BreakLamLigature);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_divine_name_survives_in_word_list() {
        let stage = BreakLamLigature;
        let input = "سبحان الله والحمد لله ولا اله الا الله والله اکبر";
        let out = stage.apply(Cow::Borrowed(input));
        assert_eq!(out.matches(DIVINE_NAME).count(), 3);
        assert!(!out.contains("ا\u{0644}\u{200C}\u{0644}ه"));
        // only the bare "لله" was split
        assert_eq!(out.matches(ZWNJ).count(), 1);
    }

    #[test]
    fn test_divine_name_inside_longer_word() {
        let stage = BreakLamLigature;
        // "اللهم" keeps its protected prefix
        let input = "اللهم";
        assert!(!stage.needs_apply(input));
        assert_eq!(stage.apply(Cow::Borrowed(input)), input);
    }

    #[test]
    fn test_no_lams_is_borrowed() {
        let stage = BreakLamLigature;
        let input = "رکوع و سجود";
        assert!(!stage.needs_apply(input));
        assert!(matches!(stage.apply(Cow::Borrowed(input)), Cow::Borrowed(_)));
    }

    #[test]
    fn test_break_points_are_byte_offsets() {
        // "ل" is two bytes; the joiner goes right after the first lam
        assert_eq!(break_points("لل").as_slice(), &[2]);
        assert_eq!(break_points("aلل").as_slice(), &[3]);
        assert!(break_points("الله").is_empty());
    }
}
