//! Process abstraction
//! ChainedProcess is monomorphised – the compiler knows the concrete
//! type of every stage and inlines the whole chain into one call.
use crate::stage::Stage;
use std::borrow::Cow;

pub trait Process: Send + Sync {
    fn process<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str>;

    /// Stage names, first to last.
    fn stage_names(&self, out: &mut Vec<&'static str>);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct EmptyProcess;

impl Process for EmptyProcess {
    #[inline(always)]
    fn process<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        text
    }

    fn stage_names(&self, _out: &mut Vec<&'static str>) {}
}

#[derive(Debug, Clone, Copy)]
pub struct ChainedProcess<S: Stage, P: Process> {
    pub stage: S,
    pub previous: P,
}

impl<S: Stage, P: Process> Process for ChainedProcess<S, P> {
    #[inline(always)]
    fn process<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        let current = self.previous.process(text);
        if !self.stage.needs_apply(&current) {
            return current;
        }
        self.stage.apply(current)
    }

    fn stage_names(&self, out: &mut Vec<&'static str>) {
        self.previous.stage_names(out);
        out.push(self.stage.name());
    }
}
