use crate::stage::Stage;
use std::borrow::Cow;

/// Trait that stages implement to opt into the universal test suite.
pub trait StageTestConfig: Stage + Sized {
    /// General test samples (may or may not trigger changes).
    fn samples() -> &'static [&'static str] {
        &["Hello World 123", "نماز", "TEST", ""]
    }

    /// Samples that must pass through unchanged and without allocation.
    fn should_pass_through() -> &'static [&'static str] {
        &["hello", "world", "test123", ""]
    }

    /// Input/output pairs that verify correct transformations.
    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[]
    }

    /// Most stages are; the phonetic digraph fold is the exception.
    fn idempotent() -> bool {
        true
    }
}

/// Assert that a stage satisfies the universal stage contracts:
///
/// 1. `zero_copy_when_no_changes` → no allocation when input == output
/// 2. `transforms_as_expected` → declared input/output pairs hold
/// 3. `stage_is_idempotent` → applying twice yields same result as once
/// 4. `needs_apply_is_accurate` → correctly predicts whether apply() would change text
/// 5. `handles_empty_string` → graceful on edge cases
/// 6. `no_panic_on_mixed_scripts` → survives pathological real-world input
#[macro_export]
macro_rules! assert_stage_contract {
    ($stage:expr) => {
        $crate::testing::stage_contract::zero_copy_when_no_changes($stage);
        $crate::testing::stage_contract::transforms_as_expected($stage);
        $crate::testing::stage_contract::stage_is_idempotent($stage);
        $crate::testing::stage_contract::needs_apply_is_accurate($stage);
        $crate::testing::stage_contract::handles_empty_string($stage);
        $crate::testing::stage_contract::no_panic_on_mixed_scripts($stage);
    };
}

pub fn zero_copy_when_no_changes<S: StageTestConfig>(stage: S) {
    for &input in S::samples() {
        let mut text = Cow::Borrowed(input);
        if stage.needs_apply(&text) {
            text = stage.apply(text);
        } else {
            assert_eq!(input as *const str, text.as_ref() as *const str);
        }

        // Second pass of an idempotent stage must never allocate again
        if S::idempotent() {
            let old_ptr = text.as_ref() as *const str;
            if stage.needs_apply(&text) {
                text = stage.apply(text);
            }
            assert_eq!(
                old_ptr,
                text.as_ref() as *const str,
                "zero-copy violated on second pass of `{}` (input: `{input}`)",
                stage.name()
            );
        }
    }

    for &pass_through in S::should_pass_through() {
        assert!(
            !stage.needs_apply(pass_through),
            "`{}` wants to touch pass-through sample `{pass_through}`",
            stage.name()
        );
        let text = stage.apply(Cow::Borrowed(pass_through));
        assert_eq!(text.as_ref(), pass_through);
        assert!(
            matches!(text, Cow::Borrowed(s) if std::ptr::eq(s, pass_through)),
            "zero-copy violated on pass-through sample `{pass_through}`"
        );
    }
}

pub fn transforms_as_expected<S: StageTestConfig>(stage: S) {
    for &(input, expected) in S::should_transform() {
        assert!(stage.needs_apply(input), "`{}` skipped `{input}`", stage.name());
        let out = stage.apply(Cow::Borrowed(input));
        assert_eq!(out.as_ref(), expected, "`{}` on `{input}`", stage.name());
    }
}

pub fn stage_is_idempotent<S: StageTestConfig>(stage: S) {
    if !S::idempotent() {
        return;
    }
    let inputs = S::samples()
        .iter()
        .copied()
        .chain(S::should_transform().iter().map(|(i, _)| *i));
    for input in inputs {
        let once = stage.apply(Cow::Borrowed(input));
        let twice = stage.apply(once.clone());
        assert_eq!(once, twice, "`{}` not idempotent on `{input}`", stage.name());
    }
}

pub fn needs_apply_is_accurate<S: StageTestConfig>(stage: S) {
    let inputs = S::samples()
        .iter()
        .chain(S::should_pass_through())
        .copied()
        .chain(S::should_transform().iter().map(|(i, _)| *i));
    for input in inputs {
        check_accuracy(&stage, input);
    }
}

fn check_accuracy<S: Stage>(stage: &S, input: &str) {
    let predicted = stage.needs_apply(input);
    // Owned input so stages that always allocate are not penalised
    let output = stage.apply(Cow::Owned(input.to_owned()));
    let actually_changes = output != input;
    assert_eq!(
        predicted,
        actually_changes,
        "needs_apply() mismatch for stage `{}` on `{input}`\n\
         predicted: {predicted}\n\
         actual   : {actually_changes} (output = {output:?})",
        stage.name(),
    );
}

pub fn handles_empty_string<S: StageTestConfig>(stage: S) {
    assert!(!stage.needs_apply(""));
    assert_eq!(stage.apply(Cow::Borrowed("")).as_ref(), "");
}

pub fn no_panic_on_mixed_scripts<S: StageTestConfig>(stage: S) {
    for input in [
        "Hello 世界 русский Türkçe العربية",
        "بِسْمِ اللَّهِ ll لل qur'an",
        "\u{200C}\u{0644}\u{0651}\u{0644}",
        "👍🏽 a\u{0301} ي",
    ] {
        let _ = stage.apply(Cow::Borrowed(input));
        let _ = stage.needs_apply(input);
    }
}
