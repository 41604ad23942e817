//! stage/fold_phonetic_digraphs.rs – **Latin transliteration folding (lossy)**
//! * Long / doubled vowels collapse: `oo|ou|uu` → `u`, `ee|ei|ii` → `i`, `aa|ah|a'` → `a`
//! * Arabic consonant digraphs collapse: `kh` → `k`, `gh` → `g`, `sh` → `s`,
//!   `th` → `t`, `dh` → `d`, `q` → `k`
//! * Apostrophes and backticks (ayn/hamza marks) are dropped
//!
//! Expects lower-cased input; the phonetic profile runs `LowerCase` first.
//! Not idempotent on runs of repeated vowels (`aaa` → `aa` → `a`), which is
//! fine: it is applied exactly once to both sides of a comparison.
use crate::stage::{
    Stage,
    rewrite::{RewriteRule, any_rule_changes, apply_rules},
};
use std::borrow::Cow;

/// Applied in order; later rules see the output of earlier ones.
static DIGRAPH_RULES: &[RewriteRule] = &[
    // Vowels
    RewriteRule { from: &["oo", "ou", "uu"], to: "u" },
    RewriteRule { from: &["ee", "ei", "ii"], to: "i" },
    RewriteRule { from: &["aa", "ah", "a'"], to: "a" },
    // Consonants
    RewriteRule { from: &["kh"], to: "k" },
    RewriteRule { from: &["gh"], to: "g" },
    RewriteRule { from: &["sh"], to: "s" },
    RewriteRule { from: &["th"], to: "t" },
    RewriteRule { from: &["dh"], to: "d" },
    RewriteRule { from: &["q"], to: "k" },
    // Ayn / hamza marks
    RewriteRule { from: &["'"], to: "" },
    RewriteRule { from: &["`"], to: "" },
];

#[derive(Debug, Default, Clone, Copy)]
pub struct FoldPhoneticDigraphs;

impl Stage for FoldPhoneticDigraphs {
    fn name(&self) -> &'static str {
        "fold_phonetic_digraphs"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> bool {
        any_rule_changes(DIGRAPH_RULES, text)
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        apply_rules(DIGRAPH_RULES, text)
    }
}

#[cfg(test)]
mod contract_tests {
    use super::*;
    use crate::{assert_stage_contract, testing::stage_contract::StageTestConfig};

    impl StageTestConfig for FoldPhoneticDigraphs {
        fn samples() -> &'static [&'static str] {
            &["sujood", "takbeer", "fatihah", "qiblah", "khushu", "qur'an", "nmz", ""]
        }

        fn should_pass_through() -> &'static [&'static str] {
            &["nmz", "ruku", "sujud", "test123", ""]
        }

        fn should_transform() -> &'static [(&'static str, &'static str)] {
            &[
                ("sujood", "sujud"),
                ("takbeer", "takbir"),
                ("fatihah", "fatiha"),
                ("qiblah", "kibla"),
                ("khushu", "kusu"),
                ("qur'an", "kuran"),
                ("dhikr", "dikr"),
                ("maghrib", "magrib"),
            ]
        }

        fn idempotent() -> bool {
            false
        }
    }

    #[test]
    fn universal_contract_compliance() {
        assert_stage_contract!(FoldPhoneticDigraphs);
    }
}
