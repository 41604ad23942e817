use crate::stage::{
    Stage,
    rewrite::{RewriteRule, any_rule_changes, apply_rules},
};
use std::borrow::Cow;

/// Closed list of prayer vocabulary with several common romanizations.
/// Each row folds every listed spelling onto the first one.
static TERM_RULES: &[RewriteRule] = &[
    RewriteRule { from: &["salat", "salah", "salaat"], to: "salat" },
    RewriteRule { from: &["ruku", "rukoo", "rukou"], to: "ruku" },
    RewriteRule { from: &["sujud", "sujood", "sajda", "sajdah"], to: "sujud" },
    RewriteRule { from: &["quran", "kuran", "qoran"], to: "quran" },
    RewriteRule { from: &["takbir", "takbeer"], to: "takbir" },
    RewriteRule { from: &["fatiha", "fatihah", "fateha"], to: "fatiha" },
];

/// Folds known multi-spelling terms to one canonical spelling.
///
/// Runs after [`FoldPhoneticDigraphs`](crate::stage::FoldPhoneticDigraphs), so
/// most rows only ever see their already-folded form; the longer spellings
/// are kept so the stage is also usable on its own.
#[derive(Debug, Default, Clone, Copy)]
pub struct FoldTransliterations;

impl Stage for FoldTransliterations {
    fn name(&self) -> &'static str {
        "fold_transliterations"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> bool {
        any_rule_changes(TERM_RULES, text)
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        apply_rules(TERM_RULES, text)
    }
}
