// src/context.rs
// Every tunable constant of the matching core lives here.
// Tiny and Copy so it can be passed by reference into every hot path.

/// Writing system of a field. Selects diacritic-aware normalization for
/// Arabic/Persian text and transliteration heuristics for Latin text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Script {
    RightToLeft,
    #[default]
    Latin,
}

impl Script {
    #[inline(always)]
    pub const fn is_rtl(self) -> bool {
        matches!(self, Script::RightToLeft)
    }
}

impl From<bool> for Script {
    /// `true` means right-to-left.
    #[inline]
    fn from(is_rtl: bool) -> Self {
        if is_rtl {
            Script::RightToLeft
        } else {
            Script::Latin
        }
    }
}

/// Thresholds used by the predicate, the fuzzy matcher and the highlighter.
///
/// Lengths are counted in Unicode scalar values, never bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Context {
    /// Trimmed queries shorter than this never match and never highlight.
    pub min_query_chars: usize,
    /// Phonetic and fuzzy paths only run for queries at least this long.
    pub fuzzy_min_query_chars: usize,
    /// Default edit-distance budget for word matching.
    pub max_distance: usize,
    /// Queries of at most this many chars use `short_query_distance` instead.
    pub short_query_chars: usize,
    /// Edit-distance budget for those short queries.
    pub short_query_distance: usize,
    /// Words shorter than this are skipped by the word matcher.
    pub min_word_chars: usize,
    /// Extra chars added to an approximate phonetic highlight.
    pub phonetic_slack: usize,
}

impl Default for Context {
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    #[inline(always)]
    pub const fn new() -> Self {
        Self {
            min_query_chars: 2,
            fuzzy_min_query_chars: 3,
            max_distance: 2,
            short_query_chars: 4,
            short_query_distance: 1,
            min_word_chars: 2,
            phonetic_slack: 3,
        }
    }

    /// Edit distance allowed for a query of `query_chars` characters when the
    /// caller asks for `max_distance`. Short queries are fragile, so they are
    /// tightened regardless of what the caller asked for.
    #[inline]
    pub const fn allowed_distance(&self, query_chars: usize, max_distance: usize) -> usize {
        if query_chars <= self.short_query_chars {
            self.short_query_distance
        } else {
            max_distance
        }
    }
}
