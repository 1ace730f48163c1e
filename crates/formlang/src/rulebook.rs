//! Ordered rule collections queried by `(state, symbol)`.
//!
//! Rulebooks are built once and never mutated; every runtime and design
//! stamped from one shares it read-only.

use crate::error::FaError;
use crate::rule::FaRule;
use crate::state::State;
use crate::symbol::{EPSILON, Symbol};
use std::collections::{BTreeSet, HashSet};

/// A rulebook for deterministic automata: at most one applicable rule is
/// expected per `(state, symbol)` pair.
#[derive(Debug, Clone)]
pub struct DfaRulebook<S> {
    rules: Vec<FaRule<S>>,
}

impl<S: State> DfaRulebook<S> {
    pub fn new(rules: Vec<FaRule<S>>) -> Self {
        Self { rules }
    }

    /// The unique rule for `(state, symbol)`, or `NoTransition` if the
    /// automaton is partial there. With an ambiguous rulebook the first
    /// matching rule wins; see [`DfaRulebook::validate`].
    pub fn rule_for(&self, state: &S, symbol: char) -> Result<&FaRule<S>, FaError> {
        self.rules
            .iter()
            .find(|rule| rule.applies_to(state, Some(symbol)))
            .ok_or_else(|| FaError::NoTransition {
                state: format!("{state:?}"),
                symbol,
            })
    }

    /// Follow the unique rule for `(state, symbol)`.
    pub fn next_state(&self, state: &S, symbol: char) -> Result<S, FaError> {
        Ok(self.rule_for(state, symbol)?.follow().clone())
    }

    /// Opt-in design-time check that the rulebook really is deterministic:
    /// no free moves, and at most one rule per `(state, symbol)` pair.
    pub fn validate(&self) -> Result<(), FaError> {
        for (index, rule) in self.rules.iter().enumerate() {
            let Some(symbol) = rule.symbol() else {
                return Err(FaError::MalformedRulebook {
                    detail: format!("free move {rule} in a deterministic rulebook"),
                });
            };
            if self.rules[..index]
                .iter()
                .any(|earlier| earlier.applies_to(rule.state(), rule.symbol()))
            {
                return Err(FaError::MalformedRulebook {
                    detail: format!(
                        "more than one rule for state {:?} on input {symbol:?}",
                        rule.state()
                    ),
                });
            }
        }
        Ok(())
    }
}

/// A rulebook for non-deterministic automata: zero or more rules per
/// `(state, symbol)` pair, plus epsilon (free move) rules.
#[derive(Debug, Clone)]
pub struct NfaRulebook<S> {
    rules: Vec<FaRule<S>>,
}

impl<S: State> NfaRulebook<S> {
    pub fn new(rules: Vec<FaRule<S>>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[FaRule<S>] {
        &self.rules
    }

    /// Union of `follow()` over every rule matching `(state, symbol)` for
    /// each state in `states`. `EPSILON` queries pure free moves.
    pub fn next_states(&self, states: &HashSet<S>, symbol: Symbol) -> HashSet<S> {
        states
            .iter()
            .flat_map(|state| self.follow_rules_for(state, symbol))
            .collect()
    }

    fn follow_rules_for<'a>(&'a self, state: &'a S, symbol: Symbol) -> impl Iterator<Item = S> {
        self.rules
            .iter()
            .filter(move |rule| rule.applies_to(state, symbol))
            .map(|rule| rule.follow().clone())
    }

    /// The epsilon closure: the smallest superset of `states` closed under
    /// free moves. Iterative fixpoint; the set only grows and the state
    /// universe is finite, so this terminates.
    pub fn follow_free_moves(&self, states: HashSet<S>) -> HashSet<S> {
        let mut closed = states;
        loop {
            let reached = self.next_states(&closed, EPSILON);
            let before = closed.len();
            closed.extend(reached);
            if closed.len() == before {
                return closed;
            }
        }
    }

    /// All non-epsilon symbols appearing in any rule, in a stable order.
    pub fn alphabet(&self) -> BTreeSet<char> {
        self.rules.iter().filter_map(|rule| rule.symbol()).collect()
    }
}
