pub mod preset;

use crate::{
    process::{ChainedProcess, EmptyProcess, Process},
    stage::Stage,
};
use std::borrow::Cow;

/// A named, fixed sequence of stages.
pub struct Profile<P: Process> {
    name: &'static str,
    pipeline: P,
}

impl<P: Process> Profile<P> {
    #[inline(always)]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline(always)]
    pub fn run<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        self.pipeline.process(text)
    }

    /// Borrowed convenience: zero-copy when no stage changes `text`.
    #[inline(always)]
    pub fn normalize<'a>(&self, text: &'a str) -> Cow<'a, str> {
        self.run(Cow::Borrowed(text))
    }

    pub fn stage_names(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        self.pipeline.stage_names(&mut names);
        names
    }
}

impl Profile<EmptyProcess> {
    pub fn builder(name: &'static str) -> ProfileBuilder<EmptyProcess> {
        ProfileBuilder::new(name)
    }
}

pub struct ProfileBuilder<P: Process> {
    name: &'static str,
    current: P,
}

impl ProfileBuilder<EmptyProcess> {
    pub fn new(name: &'static str) -> Self {
        Self { name, current: EmptyProcess }
    }
}

impl<P: Process> ProfileBuilder<P> {
    pub fn add_stage<S: Stage + 'static>(self, stage: S) -> ProfileBuilder<ChainedProcess<S, P>> {
        ProfileBuilder {
            name: self.name,
            current: ChainedProcess { stage, previous: self.current },
        }
    }

    pub fn build(self) -> Profile<P> {
        Profile { name: self.name, pipeline: self.current }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stage::{LowerCase, StripZwnj};

    #[test]
    fn builder_keeps_stage_order() {
        let profile = Profile::builder("custom")
            .add_stage(StripZwnj)
            .add_stage(LowerCase)
            .build();
        assert_eq!(profile.name(), "custom");
        assert_eq!(profile.stage_names(), ["strip_zwnj", "lower_case"]);
        assert_eq!(profile.normalize("Ru\u{200C}KU"), "ruku");
    }

    #[test]
    fn empty_profile_borrows() {
        let profile = Profile::builder("none").build();
        assert!(matches!(profile.normalize("x"), Cow::Borrowed("x")));
    }
}
