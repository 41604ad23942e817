// Ordered multi-pattern string rewriting shared by the phonetic stages.
//
// A rule behaves like a global regex replace of `alt1|alt2|...`: scan left to
// right, at each position take the first alternative (in table order) that
// matches, emit the replacement, resume right after the matched text.
use std::borrow::Cow;

#[derive(Debug, Clone, Copy)]
pub(crate) struct RewriteRule {
    pub from: &'static [&'static str],
    pub to: &'static str,
}

impl RewriteRule {
    /// Leftmost match at or after byte `from`: (start, matched alternative).
    fn find_at(&self, text: &str, from: usize) -> Option<(usize, &'static str)> {
        text[from..].char_indices().find_map(|(i, _)| {
            let rest = &text[from + i..];
            self.from
                .iter()
                .find(|alt| rest.starts_with(**alt))
                .map(|alt| (from + i, *alt))
        })
    }

    /// Non-overlapping matches, left to right.
    fn matches(self, text: &str) -> impl Iterator<Item = (usize, &'static str)> + '_ {
        let mut pos = 0;
        std::iter::from_fn(move || {
            let (start, alt) = self.find_at(text, pos)?;
            pos = start + alt.len();
            Some((start, alt))
        })
    }

    /// Would applying this rule change `text`? Identity matches
    /// (`salat` → `salat`) do not count.
    #[inline]
    pub fn changes(&self, text: &str) -> bool {
        self.matches(text).any(|(_, alt)| alt != self.to)
    }

    pub fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        if !self.changes(&text) {
            return text;
        }

        let mut out = String::with_capacity(text.len());
        let mut last = 0;
        for (start, alt) in self.matches(&text) {
            out.push_str(&text[last..start]);
            out.push_str(self.to);
            last = start + alt.len();
        }
        out.push_str(&text[last..]);
        Cow::Owned(out)
    }
}

/// Does any rule in the ordered list change `text`?
///
/// Only the first changing rule matters: every rule before it left the text
/// untouched, so checking each rule against the unmodified input is exact.
#[inline]
pub(crate) fn any_rule_changes(rules: &[RewriteRule], text: &str) -> bool {
    rules.iter().any(|r| r.changes(text))
}

pub(crate) fn apply_rules<'a>(rules: &[RewriteRule], mut text: Cow<'a, str>) -> Cow<'a, str> {
    for rule in rules {
        text = rule.apply(text);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    const VOWELS: RewriteRule = RewriteRule {
        from: &["aa", "ah", "a'"],
        to: "a",
    };

    #[test]
    fn leftmost_first_alternative_wins() {
        // "aah": "aa" at 0 wins over "ah" at 1
        assert_eq!(VOWELS.apply(Cow::Borrowed("aah")), "ah");
        assert_eq!(VOWELS.apply(Cow::Borrowed("salah")), "sala");
    }

    #[test]
    fn non_overlapping() {
        assert_eq!(VOWELS.apply(Cow::Borrowed("aaaa")), "aa");
        assert_eq!(VOWELS.apply(Cow::Borrowed("aaa")), "aa");
    }

    #[test]
    fn identity_match_is_not_a_change() {
        const SALAT: RewriteRule = RewriteRule {
            from: &["salat", "salah"],
            to: "salat",
        };
        let input = "salat";
        assert!(!SALAT.changes(input));
        assert!(matches!(SALAT.apply(Cow::Borrowed(input)), Cow::Borrowed(_)));
        assert_eq!(SALAT.apply(Cow::Borrowed("salah salat")), "salat salat");
    }

    #[test]
    fn multibyte_text_is_safe() {
        assert_eq!(VOWELS.apply(Cow::Borrowed("é aa ü")), "é a ü");
    }

    #[test]
    fn empty_replacement_removes() {
        const APOS: RewriteRule = RewriteRule { from: &["'"], to: "" };
        assert_eq!(APOS.apply(Cow::Borrowed("qur'an")), "quran");
    }
}
