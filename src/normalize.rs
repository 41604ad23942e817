//! Borrowing front doors to the preset profiles.
//!
//! Every function returns `Cow::Borrowed` when the input is already in the
//! requested form.
use crate::profile::preset;
use std::borrow::Cow;

/// Display form of right-to-left text (diacritics stripped, letters folded,
/// lam pairs broken outside the divine name). Idempotent.
#[inline]
pub fn normalize(text: &str) -> Cow<'_, str> {
    preset::display().normalize(text)
}

/// Comparison form of right-to-left text. Same folds as [`normalize`] but
/// never contains U+200C.
#[inline]
pub fn normalize_for_search(text: &str) -> Cow<'_, str> {
    preset::search().normalize(text)
}

/// Lower-cased transliteration with vowel/consonant digraphs and known
/// multi-spelling terms folded.
#[inline]
pub fn phonetic_normalize(text: &str) -> Cow<'_, str> {
    preset::phonetic().normalize(text)
}

/// Lower-cased comparison form of Latin text.
#[inline]
pub fn fold_case(text: &str) -> Cow<'_, str> {
    preset::latin().normalize(text)
}

/// Does the phonetic form of `text` contain the phonetic form of `query`?
///
/// A query that folds away to nothing (`"''"`) matches nothing.
pub fn phonetic_match(text: &str, query: &str) -> bool {
    let query = phonetic_normalize(query);
    !query.is_empty() && phonetic_normalize(text).contains(query.as_ref())
}

/// Symmetric equivalence: equal phonetic forms, or one contains the other.
pub fn phonetic_equivalent(a: &str, b: &str) -> bool {
    let (a, b) = (phonetic_normalize(a), phonetic_normalize(b));
    if a.is_empty() || b.is_empty() {
        return a == b;
    }
    a == b || a.contains(b.as_ref()) || b.contains(a.as_ref())
}
