//! Short-circuiting per-frame update chain
//!
//! A chain is an explicit ordered list of named stages. Running it calls
//! each stage in turn and stops at the first one returning `false`; later
//! stages do not run. Stages are never discovered automatically, a
//! capability that wants a say in the frame is spliced in by name.

/// Stage function: `true` to continue, `false` to halt
pub type Stage<T> = fn(&mut T) -> bool;

/// Result of running a chain with tracing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainOutcome {
    /// Every stage returned `true`
    Completed,
    /// A stage returned `false`
    Halted {
        /// Name of the halting stage
        stage: &'static str,
        /// Position of the halting stage
        index: usize,
    },
}

/// Per-frame state of an object after its update chain ran
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// A stage before the Core stage halted; Core did not run
    Skipped,
    /// Core ran and it, or a stage after it, halted
    CoreChecked,
    /// Every stage passed; the object takes part in the rest of the frame
    Ready,
}

/// Ordered list of update stages
pub struct UpdateChain<T> {
    stages: Vec<(&'static str, Stage<T>)>,
}

impl<T> UpdateChain<T> {
    /// Create an empty chain; an empty chain always completes
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Append a stage
    pub fn then(mut self, name: &'static str, stage: Stage<T>) -> Self {
        self.stages.push((name, stage));
        self
    }

    /// Insert a stage before the named one; `false` if `anchor` is absent
    pub fn insert_before(&mut self, anchor: &str, name: &'static str, stage: Stage<T>) -> bool {
        match self.position(anchor) {
            Some(index) => {
                self.stages.insert(index, (name, stage));
                true
            }
            None => false,
        }
    }

    /// Insert a stage after the named one; `false` if `anchor` is absent
    pub fn insert_after(&mut self, anchor: &str, name: &'static str, stage: Stage<T>) -> bool {
        match self.position(anchor) {
            Some(index) => {
                self.stages.insert(index + 1, (name, stage));
                true
            }
            None => false,
        }
    }

    /// Remove a stage by name
    pub fn remove(&mut self, name: &str) -> bool {
        match self.position(name) {
            Some(index) => {
                self.stages.remove(index);
                true
            }
            None => false,
        }
    }

    /// Position of a stage
    pub fn position(&self, name: &str) -> Option<usize> {
        self.stages.iter().position(|(existing, _)| *existing == name)
    }

    /// Run every stage in order, stopping at the first `false`
    pub fn run(&self, target: &mut T) -> bool {
        self.stages.iter().all(|(_, stage)| stage(target))
    }

    /// Like [`UpdateChain::run`], reporting which stage halted
    pub fn run_traced(&self, target: &mut T) -> ChainOutcome {
        for (index, (name, stage)) in self.stages.iter().enumerate() {
            if !stage(target) {
                log::trace!("Update chain halted at '{}'", name);
                return ChainOutcome::Halted { stage: *name, index };
            }
        }
        ChainOutcome::Completed
    }

    /// Stage names in order
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|(name, _)| *name).collect()
    }

    /// Stages in order
    pub fn stages(&self) -> impl Iterator<Item = (&'static str, Stage<T>)> + '_ {
        self.stages.iter().copied()
    }

    /// Number of stages
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Whether the chain has no stages
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

impl<T> Default for UpdateChain<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for UpdateChain<T> {
    fn clone(&self) -> Self {
        Self {
            stages: self.stages.clone(),
        }
    }
}

impl<T> std::fmt::Debug for UpdateChain<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.stages.iter().map(|(name, _)| name)).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        pass_first: bool,
        pass_second: bool,
        calls: Vec<&'static str>,
    }

    fn first(recorder: &mut Recorder) -> bool {
        recorder.calls.push("first");
        recorder.pass_first
    }

    fn second(recorder: &mut Recorder) -> bool {
        recorder.calls.push("second");
        recorder.pass_second
    }

    fn extra(recorder: &mut Recorder) -> bool {
        recorder.calls.push("extra");
        true
    }

    fn chain() -> UpdateChain<Recorder> {
        UpdateChain::new().then("first", first).then("second", second)
    }

    #[test]
    fn test_halt_skips_later_stages() {
        let mut recorder = Recorder { pass_first: false, pass_second: true, ..Default::default() };
        assert!(!chain().run(&mut recorder));
        assert_eq!(recorder.calls, vec!["first"]);
    }

    #[test]
    fn test_true_only_when_every_stage_passes() {
        for (a, b) in [(true, true), (true, false), (false, true), (false, false)] {
            let mut recorder = Recorder { pass_first: a, pass_second: b, ..Default::default() };
            assert_eq!(chain().run(&mut recorder), a && b);
        }
    }

    #[test]
    fn test_traced_outcome() {
        let mut recorder = Recorder { pass_first: true, pass_second: false, ..Default::default() };
        assert_eq!(
            chain().run_traced(&mut recorder),
            ChainOutcome::Halted { stage: "second", index: 1 }
        );

        let mut recorder = Recorder { pass_first: true, pass_second: true, ..Default::default() };
        assert_eq!(chain().run_traced(&mut recorder), ChainOutcome::Completed);
    }

    #[test]
    fn test_splicing() {
        let mut chain = chain();
        assert!(chain.insert_before("second", "extra", extra));
        assert_eq!(chain.stage_names(), vec!["first", "extra", "second"]);
        assert!(!chain.insert_after("missing", "extra", extra));

        let mut recorder = Recorder { pass_first: true, pass_second: true, ..Default::default() };
        assert!(chain.run(&mut recorder));
        assert_eq!(recorder.calls, vec!["first", "extra", "second"]);

        assert!(chain.remove("extra"));
        assert_eq!(chain.len(), 2);
    }

    #[test]
    fn test_empty_chain_completes() {
        let mut recorder = Recorder::default();
        assert!(UpdateChain::<Recorder>::new().run(&mut recorder));
    }
}
