//! Ready-made profiles. Each call builds a zero-sized pipeline, so there is
//! nothing to cache.
use crate::{
    process::Process,
    profile::Profile,
    stage::{
        BreakLamLigature, FoldArabicLetters, FoldPhoneticDigraphs, FoldTransliterations,
        LowerCase, StripArabicDiacritics, StripZwnj,
    },
};

/// Canonical right-to-left text for display: marks stripped, letters folded,
/// lam pairs kept from joining (the divine name excepted).
pub fn display() -> Profile<impl Process> {
    Profile::builder("display")
        .add_stage(StripArabicDiacritics)
        .add_stage(FoldArabicLetters)
        .add_stage(BreakLamLigature)
        .build()
}

/// Comparison form of right-to-left text. Never shown to a reader.
pub fn search() -> Profile<impl Process> {
    Profile::builder("search")
        .add_stage(StripArabicDiacritics)
        .add_stage(FoldArabicLetters)
        .add_stage(StripZwnj)
        .build()
}

/// Transliteration folding for Latin text.
pub fn phonetic() -> Profile<impl Process> {
    Profile::builder("phonetic")
        .add_stage(LowerCase)
        .add_stage(FoldPhoneticDigraphs)
        .add_stage(FoldTransliterations)
        .build()
}

pub fn latin() -> Profile<impl Process> {
    Profile::builder("latin").add_stage(LowerCase).build()
}
