use crate::{
    stage::{CharMapper, Stage, map_chars},
    unicode::ZWNJ,
};
use memchr::memmem;
use std::borrow::Cow;

/// Removes every ZERO WIDTH NON-JOINER.
///
/// Comparison-only: two strings that differ only in ligature breaks must
/// compare equal, so the search profile strips what the display profile
/// inserts.
#[derive(Debug, Default, Clone, Copy)]
pub struct StripZwnj;

const ZWNJ_UTF8: &[u8] = "\u{200C}".as_bytes();

impl Stage for StripZwnj {
    fn name(&self) -> &'static str {
        "strip_zwnj"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> bool {
        memmem::find(text.as_bytes(), ZWNJ_UTF8).is_some()
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        map_chars(text, self)
    }
}

impl CharMapper for StripZwnj {
    #[inline(always)]
    fn map(&self, c: char) -> Option<char> {
        (c != ZWNJ).then_some(c)
    }
}
