pub mod context;
pub mod corpus;
pub mod fuzzy;
pub mod highlight;
pub mod normalize;
pub mod process;
pub mod profile;
pub mod search;
pub mod searcher;
pub mod stage;
pub mod unicode;

#[cfg(test)]
pub(crate) mod testing;

pub use context::{Context, Script};
pub use corpus::{Corpus, CorpusError, Field, MatchMode, Record};
pub use fuzzy::{
    Span, edit_distance, find_fuzzy_match_position, find_fuzzy_match_position_with,
    fuzzy_match_words, fuzzy_match_words_with,
};
pub use highlight::{Highlight, MatchStrategy, Segment};
pub use normalize::{
    fold_case, normalize, normalize_for_search, phonetic_equivalent, phonetic_match,
    phonetic_normalize,
};
pub use profile::{Profile, preset};
pub use search::{
    fault_tolerant_match, fault_tolerant_match_with, highlight_literal, highlight_text,
    highlight_text_with, literal_match,
};
pub use searcher::{FieldHit, Group, Hit, SearchResults, Searcher, SearcherBuilder};

#[cfg(test)]
mod tests {
    include!("tests/unit.rs");
    include!("tests/integration.rs");
    include!("tests/proptest.rs");
}
