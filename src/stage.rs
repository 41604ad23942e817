//! Core normalization stage abstraction.
//!
//! A stage is one ordered rewrite of a string. Every stage has two entry
//! points:
//!
//! * `needs_apply(&self, text)` – a cheap, exact pre-check. Returning `false`
//!   means `apply` would leave the text unchanged, so the pipeline skips it
//!   and the caller keeps its borrowed `&str`.
//! * `apply(&self, Cow<str>)` – the transformation itself. It must return the
//!   input `Cow` untouched when there is nothing to do.
//!
//! Stages that are plain one-char-to-at-most-one-char mappings also implement
//! [`CharMapper`] and share [`map_chars`], which copies the untouched prefix
//! once and then maps the tail in a single pass.
//!
//! Stages never fail. All inputs, including empty and pure-whitespace
//! strings, have a defined result.

pub mod break_lam_ligature;
pub mod fold_arabic_letters;
pub mod fold_phonetic_digraphs;
pub mod fold_transliterations;
pub mod lower_case;
pub(crate) mod rewrite;
pub mod strip_arabic_diacritics;
pub mod strip_zwnj;

use std::borrow::Cow;

/// A single normalisation step.
pub trait Stage: Send + Sync {
    /// Human-readable name – used in logs and test failures.
    fn name(&self) -> &'static str;

    /// Fast pre-check. Returning `false` skips the whole stage.
    fn needs_apply(&self, text: &str) -> bool;

    /// Allocation-aware transformation. Must always be correct.
    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str>;
}

/// Pure character mapping.
pub trait CharMapper: Send + Sync {
    /// Map a single Unicode scalar value.
    /// Return `None` if the character should be **removed**.
    fn map(&self, c: char) -> Option<char>;

    #[inline(always)]
    fn changes(&self, c: char) -> bool {
        self.map(c) != Some(c)
    }
}

/// Does `mapper` change anything in `text`?
#[inline]
pub(crate) fn any_char_changes(text: &str, mapper: &dyn CharMapper) -> bool {
    text.chars().any(|c| mapper.changes(c))
}

/// Shared `apply` body for [`CharMapper`] stages. Zero-copy when no character
/// changes.
pub(crate) fn map_chars<'a>(text: Cow<'a, str>, mapper: &dyn CharMapper) -> Cow<'a, str> {
    let Some((first, _)) = text.char_indices().find(|&(_, c)| mapper.changes(c)) else {
        return text;
    };

    let mut out = String::with_capacity(text.len());
    out.push_str(&text[..first]);
    out.extend(text[first..].chars().filter_map(|c| mapper.map(c)));
    Cow::Owned(out)
}

pub use break_lam_ligature::BreakLamLigature;
pub use fold_arabic_letters::FoldArabicLetters;
pub use fold_phonetic_digraphs::FoldPhoneticDigraphs;
pub use fold_transliterations::FoldTransliterations;
pub use lower_case::LowerCase;
pub use strip_arabic_diacritics::StripArabicDiacritics;
pub use strip_zwnj::StripZwnj;
