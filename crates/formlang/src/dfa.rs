//! Deterministic finite automaton runtime and design.

use crate::error::FaError;
use crate::rulebook::DfaRulebook;
use crate::state::State;
use std::collections::HashSet;
use std::sync::Arc;

/// A running DFA: the current state plus borrowed references to the accept
/// set and rulebook of the design that stamped it out. Short-lived, one per
/// acceptance query.
#[derive(Debug)]
pub struct Dfa<'a, S: State> {
    current_state: S,
    accept_states: &'a HashSet<S>,
    rulebook: &'a DfaRulebook<S>,
}

impl<'a, S: State> Dfa<'a, S> {
    pub fn new(
        current_state: S,
        accept_states: &'a HashSet<S>,
        rulebook: &'a DfaRulebook<S>,
    ) -> Self {
        Self {
            current_state,
            accept_states,
            rulebook,
        }
    }

    pub fn accepting(&self) -> bool {
        self.accept_states.contains(&self.current_state)
    }

    /// Advance on one input symbol. Fails with `NoTransition` if the
    /// rulebook is partial at the current state.
    pub fn read_character(&mut self, character: char) -> Result<(), FaError> {
        self.current_state = self.rulebook.next_state(&self.current_state, character)?;
        Ok(())
    }

    /// Advance over every character in order. A failed read leaves the
    /// input partially consumed and is fatal to the whole call.
    pub fn read_string(&mut self, input: &str) -> Result<(), FaError> {
        for character in input.chars() {
            self.read_character(character)?;
        }
        Ok(())
    }
}

/// An immutable DFA blueprint: start state, accept states, and a shared
/// rulebook. Stamps out a fresh runtime per query.
#[derive(Debug, Clone)]
pub struct DfaDesign<S> {
    start_state: S,
    accept_states: HashSet<S>,
    rulebook: Arc<DfaRulebook<S>>,
}

impl<S: State> DfaDesign<S> {
    pub fn new(start_state: S, accept_states: HashSet<S>, rulebook: Arc<DfaRulebook<S>>) -> Self {
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

    pub fn rulebook(&self) -> &Arc<DfaRulebook<S>> {
        &self.rulebook
    }

    pub fn to_dfa(&self) -> Dfa<'_, S> {
        Dfa::new(
            self.start_state.clone(),
            &self.accept_states,
            &self.rulebook,
        )
    }

    /// Whole-string acceptance. `NoTransition` means the input strayed
    /// outside the rulebook's coverage, not a rejection.
    pub fn accepts(&self, input: &str) -> Result<bool, FaError> {
        let mut dfa = self.to_dfa();
        dfa.read_string(input)?;
        Ok(dfa.accepting())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::FaRule;

    fn rulebook() -> DfaRulebook<u32> {
        DfaRulebook::new(vec![
            FaRule::new(1, Some('a'), 2),
            FaRule::new(1, Some('b'), 1),
            FaRule::new(2, Some('a'), 2),
            FaRule::new(2, Some('b'), 3),
            FaRule::new(3, Some('a'), 3),
            FaRule::new(3, Some('b'), 3),
        ])
    }

    #[test]
    fn test_accepting() {
        let rulebook = rulebook();
        let accept_13 = HashSet::from([1, 3]);
        let accept_3 = HashSet::from([3]);

        assert!(Dfa::new(1, &accept_13, &rulebook).accepting());
        assert!(!Dfa::new(1, &accept_3, &rulebook).accepting());
    }

    #[test]
    fn test_read_character() {
        let rulebook = rulebook();
        let accept = HashSet::from([3]);
        let mut dfa = Dfa::new(1, &accept, &rulebook);

        dfa.read_character('b').unwrap();
        for _ in 0..3 {
            dfa.read_character('a').unwrap();
        }
        assert!(!dfa.accepting());

        dfa.read_character('b').unwrap();
        assert!(dfa.accepting());
    }

    #[test]
    fn test_read_string() {
        let rulebook = rulebook();
        let accept = HashSet::from([3]);
        let mut dfa = Dfa::new(1, &accept, &rulebook);

        dfa.read_string("baaab").unwrap();
        assert!(dfa.accepting());
    }

    #[test]
    fn test_design_accepts() {
        let design = DfaDesign::new(1, HashSet::from([3]), Arc::new(rulebook()));

        assert_eq!(design.accepts("a"), Ok(false));
        assert_eq!(design.accepts("baa"), Ok(false));
        assert_eq!(design.accepts("baba"), Ok(true));
    }

    #[test]
    fn test_partial_rulebook_is_fatal() {
        let rulebook = DfaRulebook::new(vec![FaRule::new(1u32, Some('a'), 2)]);
        let design = DfaDesign::new(1, HashSet::from([2]), Arc::new(rulebook));

        assert_eq!(design.accepts("a"), Ok(true));
        assert!(matches!(
            design.accepts("ab"),
            Err(FaError::NoTransition { .. })
        ));
    }
}
