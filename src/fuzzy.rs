//! Typo tolerance: word-level edit distance and the match locator.
use crate::{context::Context, normalize::fold_case};
use memchr::memmem;

/// Half-open `[start, end)` range of **character** offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[inline(always)]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    #[inline(always)]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Levenshtein distance over Unicode scalar values.
#[inline]
pub fn edit_distance(a: &str, b: &str) -> usize {
    strsim::levenshtein(a, b)
}

/// Does any whitespace-separated word of `text` fuzzily match `query`?
///
/// Words shorter than two chars are ignored. A word matches when it contains
/// the query, is contained by it, or is within the allowed edit distance
/// (tightened to 1 for queries of four chars or fewer).
#[inline]
pub fn fuzzy_match_words(text: &str, query: &str, max_distance: usize) -> bool {
    fuzzy_match_words_with(text, query, max_distance, &Context::default())
}

pub fn fuzzy_match_words_with(text: &str, query: &str, max_distance: usize, ctx: &Context) -> bool {
    let text = fold_case(text);
    let query = fold_case(query);
    let query_chars = query.chars().count();
    let allowed = ctx.allowed_distance(query_chars, max_distance);

    text.split_whitespace().any(|word| {
        let word_chars = word.chars().count();
        if word_chars < ctx.min_word_chars {
            return false;
        }
        if word.contains(query.as_ref()) || query.contains(word) {
            return true;
        }
        // distance is at least the length difference
        word_chars.abs_diff(query_chars) <= allowed && edit_distance(word, &query) <= allowed
    })
}

/// Whitespace-separated words with the char offset each one starts at.
///
/// Offsets come from the real text, so runs of mixed whitespace do not shift
/// later words.
#[derive(Debug, Clone)]
pub struct Words<'a> {
    text: &'a str,
    byte: usize,
    chars: usize,
}

impl<'a> Words<'a> {
    #[inline]
    pub fn new(text: &'a str) -> Self {
        Self { text, byte: 0, chars: 0 }
    }
}

impl<'a> Iterator for Words<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let text = self.text;
        let rest = &text[self.byte..];
        let mut chars = self.chars;
        // (byte offset into rest, char offset into text)
        let mut word_start: Option<(usize, usize)> = None;

        for (i, c) in rest.char_indices() {
            if c.is_whitespace() {
                if let Some((b, ch)) = word_start {
                    self.byte += i;
                    self.chars = chars;
                    return Some((ch, &rest[b..i]));
                }
            } else if word_start.is_none() {
                word_start = Some((i, chars));
            }
            chars += 1;
        }

        self.byte = text.len();
        self.chars = chars;
        word_start.map(|(b, ch)| (ch, &rest[b..]))
    }
}

/// Locate the first word that contains `query` (case-insensitively) or is
/// within the length-adjusted edit distance of it.
///
/// A containing word yields the span of the query inside it; a fuzzy word
/// yields the span of the whole word. Offsets are chars into `text`.
#[inline]
pub fn find_fuzzy_match_position(text: &str, query: &str) -> Option<Span> {
    find_fuzzy_match_position_with(text, query, &Context::default())
}

pub fn find_fuzzy_match_position_with(text: &str, query: &str, ctx: &Context) -> Option<Span> {
    let query = fold_case(query);
    if query.is_empty() {
        return None;
    }
    let query_chars = query.chars().count();
    let allowed = ctx.allowed_distance(query_chars, ctx.max_distance);
    let finder = memmem::Finder::new(query.as_bytes());

    for (start, word) in Words::new(text) {
        let lower = fold_case(word);
        if let Some(byte) = finder.find(lower.as_bytes()) {
            let at = start + lower[..byte].chars().count();
            return Some(Span::new(at, at + query_chars));
        }
        if edit_distance(&lower, &query) <= allowed {
            return Some(Span::new(start, start + word.chars().count()));
        }
    }
    None
}
