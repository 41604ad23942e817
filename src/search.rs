//! The fault-tolerant predicate and the highlighter for a single field.
//!
//! Both take the query as typed; it is trimmed before any length check.
//! Lengths are in chars.
use crate::{
    context::{Context, Script},
    fuzzy::{Span, find_fuzzy_match_position_with, fuzzy_match_words_with},
    highlight::{Highlight, MatchStrategy},
    normalize::{fold_case, normalize_for_search, phonetic_match, phonetic_normalize},
};
use memchr::memmem;
use smallvec::SmallVec;
use tracing::trace;

/// Does `query` match `text`? First success wins:
///
/// 1. case-insensitive substring
/// 2. right-to-left only: substring after [`normalize_for_search`]
/// 3. Latin only, 3+ chars: phonetic containment
/// 4. 3+ chars: fuzzy word match
///
/// Queries under two chars never match.
#[inline]
pub fn fault_tolerant_match(text: &str, query: &str, script: Script) -> bool {
    fault_tolerant_match_with(text, query, script, &Context::default())
}

pub fn fault_tolerant_match_with(text: &str, query: &str, script: Script, ctx: &Context) -> bool {
    let query = query.trim();
    let query_chars = query.chars().count();
    if query_chars < ctx.min_query_chars {
        return false;
    }

    if fold_case(text).contains(fold_case(query).as_ref()) {
        return true;
    }

    let long_enough = query_chars >= ctx.fuzzy_min_query_chars;
    match script {
        Script::RightToLeft => {
            let query = normalize_for_search(query);
            if !query.is_empty() && normalize_for_search(text).contains(query.as_ref()) {
                return true;
            }
        }
        Script::Latin => {
            if long_enough && phonetic_match(text, query) {
                return true;
            }
        }
    }

    long_enough && fuzzy_match_words_with(text, query, ctx.max_distance, ctx)
}

/// Split `text` into plain and emphasized runs for `query`.
///
/// Strategies are tried in order and the first that finds anything decides
/// the result: every exact occurrence of the normalized query, then (Latin,
/// 3+ chars) one phonetic span, then (3+ chars) one fuzzy span. Exact and
/// phonetic spans are computed on normalized text and applied to `text`
/// as-is, so they drift when normalization changes the length.
#[inline]
pub fn highlight_text<'a>(text: &'a str, query: &str, script: Script) -> Highlight<'a> {
    highlight_text_with(text, query, script, &Context::default())
}

pub fn highlight_text_with<'a>(
    text: &'a str,
    query: &str,
    script: Script,
    ctx: &Context,
) -> Highlight<'a> {
    let query = query.trim();
    let query_chars = query.chars().count();
    if query_chars < ctx.min_query_chars {
        return Highlight::plain(text);
    }

    let highlight = choose_highlight(text, query, query_chars, script, ctx);
    trace!(strategy = %highlight.strategy(), query, "highlighted field");
    highlight
}

fn choose_highlight<'a>(
    text: &'a str,
    query: &str,
    query_chars: usize,
    script: Script,
    ctx: &Context,
) -> Highlight<'a> {
    let (norm_text, norm_query) = match script {
        Script::RightToLeft => (normalize_for_search(text), normalize_for_search(query)),
        Script::Latin => (fold_case(text), fold_case(query)),
    };
    let spans = exact_spans(&norm_text, &norm_query);
    if !spans.is_empty() {
        return Highlight::from_spans(text, spans, MatchStrategy::Exact);
    }

    if query_chars < ctx.fuzzy_min_query_chars {
        return Highlight::plain(text);
    }

    if !script.is_rtl()
        && let Some(span) = phonetic_span(text, query, query_chars, ctx)
    {
        return Highlight::from_spans(text, [span], MatchStrategy::Phonetic);
    }

    match find_fuzzy_match_position_with(text, query, ctx) {
        Some(span) => Highlight::from_spans(text, [span], MatchStrategy::Fuzzy),
        None => Highlight::plain(text),
    }
}

/// Char spans of every non-overlapping occurrence of `needle`, left to right.
fn exact_spans(haystack: &str, needle: &str) -> SmallVec<[Span; 4]> {
    let mut spans = SmallVec::new();
    if needle.is_empty() {
        return spans;
    }

    let needle_chars = needle.chars().count();
    let (mut byte, mut chars) = (0, 0);
    for pos in memmem::find_iter(haystack.as_bytes(), needle.as_bytes()) {
        chars += haystack[byte..pos].chars().count();
        spans.push(Span::new(chars, chars + needle_chars));
        byte = pos + needle.len();
        chars += needle_chars;
    }
    spans
}

/// Where the query lands in phonetic space, rescaled linearly to `text`
/// and widened by the slack. Approximate on purpose.
fn phonetic_span(text: &str, query: &str, query_chars: usize, ctx: &Context) -> Option<Span> {
    let phonetic_query = phonetic_normalize(query);
    if phonetic_query.is_empty() {
        return None;
    }
    let phonetic_text = phonetic_normalize(text);
    let byte = memmem::find(phonetic_text.as_bytes(), phonetic_query.as_bytes())?;

    let phonetic_index = phonetic_text[..byte].chars().count();
    let phonetic_len = phonetic_text.chars().count();
    let text_chars = text.chars().count();

    let start = phonetic_index * text_chars / phonetic_len;
    let end = (start + query_chars + ctx.phonetic_slack).min(text_chars);
    Some(Span::new(start, end))
}

/// Case-sensitive raw substring, for locator labels like `4:9`.
#[inline]
pub fn literal_match(text: &str, query: &str) -> bool {
    let query = query.trim();
    !query.is_empty() && memmem::find(text.as_bytes(), query.as_bytes()).is_some()
}

/// Every raw occurrence of the trimmed query, case-sensitive.
pub fn highlight_literal<'a>(text: &'a str, query: &str) -> Highlight<'a> {
    let spans = exact_spans(text, query.trim());
    Highlight::from_spans(text, spans, MatchStrategy::Exact)
}
