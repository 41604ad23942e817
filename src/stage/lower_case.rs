use crate::stage::Stage;
use std::borrow::Cow;

/// Unicode lower-casing. Zero copy if the text is already lower case.
///
/// Uses `str::to_lowercase`, so context-dependent mappings (final sigma) are
/// honoured. The result may be longer than the input in chars (`İ` → `i̇`).
#[derive(Debug, Default, Clone, Copy)]
pub struct LowerCase;

#[inline(always)]
fn changes_on_lowercase(c: char) -> bool {
    let mut lower = c.to_lowercase();
    lower.next() != Some(c) || lower.next().is_some()
}

impl Stage for LowerCase {
    fn name(&self) -> &'static str {
        "lower_case"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> bool {
        if text.is_ascii() {
            return text.bytes().any(|b| b.is_ascii_uppercase());
        }
        text.chars().any(changes_on_lowercase)
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        if !self.needs_apply(&text) {
            return text;
        }
        Cow::Owned(text.to_lowercase())
    }
}
