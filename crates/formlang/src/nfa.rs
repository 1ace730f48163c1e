//! Non-deterministic finite automaton runtime and design.

use crate::rulebook::NfaRulebook;
use crate::state::State;
use std::collections::HashSet;
use std::sync::Arc;

/// A running NFA over a set of possible current states.
///
/// The stored set is raw; the epsilon closure is recomputed on every read of
/// [`Nfa::current_states`] rather than cached, since the raw set changes with
/// each character while the free-move rules never do.
#[derive(Debug)]
pub struct Nfa<'a, S: State> {
    current_states: HashSet<S>,
    accept_states: &'a HashSet<S>,
    rulebook: &'a NfaRulebook<S>,
}

impl<'a, S: State> Nfa<'a, S> {
    pub fn new(
        current_states: HashSet<S>,
        accept_states: &'a HashSet<S>,
        rulebook: &'a NfaRulebook<S>,
    ) -> Self {
        Self {
            current_states,
            accept_states,
            rulebook,
        }
    }

    /// The epsilon closure of the raw current set.
    pub fn current_states(&self) -> HashSet<S> {
        self.rulebook.follow_free_moves(self.current_states.clone())
    }

    pub fn accepting(&self) -> bool {
        !self.current_states().is_disjoint(self.accept_states)
    }

    /// Close under free moves, then follow `character`. The closure of the
    /// resulting set happens lazily on the next read.
    pub fn read_character(&mut self, character: char) {
        self.current_states = self
            .rulebook
            .next_states(&self.current_states(), Some(character));
    }

    pub fn read_string(&mut self, input: &str) {
        for character in input.chars() {
            self.read_character(character);
        }
    }
}

/// An immutable NFA blueprint: start state, accept states, and a shared
/// rulebook.
#[derive(Debug, Clone)]
pub struct NfaDesign<S> {
    start_state: S,
    accept_states: HashSet<S>,
    rulebook: Arc<NfaRulebook<S>>,
}

impl<S: State> NfaDesign<S> {
    pub fn new(start_state: S, accept_states: HashSet<S>, rulebook: Arc<NfaRulebook<S>>) -> Self {
        Self {
            start_state,
            accept_states,
            rulebook,
        }
    }

    pub fn start_state(&self) -> &S {
        &self.start_state
    }

    pub fn accept_states(&self) -> &HashSet<S> {
        &self.accept_states
    }

    pub fn rulebook(&self) -> &Arc<NfaRulebook<S>> {
        &self.rulebook
    }

    /// A fresh runtime at the design's start state.
    pub fn to_nfa(&self) -> Nfa<'_, S> {
        self.to_nfa_from(HashSet::from([self.start_state.clone()]))
    }

    /// A fresh runtime at an arbitrary state set. Subset construction uses
    /// this to probe candidate DFA states.
    pub fn to_nfa_from(&self, current_states: HashSet<S>) -> Nfa<'_, S> {
        Nfa::new(current_states, &self.accept_states, &self.rulebook)
    }

    pub fn accepts(&self, input: &str) -> bool {
        let mut nfa = self.to_nfa();
        nfa.read_string(input);
        nfa.accepting()
    }
}
