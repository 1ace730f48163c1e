//! Subset construction: converting an NFA design into an equivalent DFA
//! design whose states are epsilon-closed sets of NFA states.

use crate::dfa::DfaDesign;
use crate::nfa::NfaDesign;
use crate::rule::FaRule;
use crate::rulebook::DfaRulebook;
use crate::state::{StateId, StateSet};
use indexmap::IndexSet;
use std::collections::{HashSet, VecDeque};
use std::sync::Arc;

/// Discovers the reachable DFA state space of an NFA design by probing
/// short-lived NFA runtimes, one candidate state set at a time.
#[derive(Debug)]
pub struct NfaSimulation<'a> {
    design: &'a NfaDesign<StateId>,
}

impl<'a> NfaSimulation<'a> {
    pub fn new(design: &'a NfaDesign<StateId>) -> Self {
        Self { design }
    }

    /// The DFA state reached from `states` on `symbol`: instantiate an NFA
    /// there, read one character, take its (epsilon-closed) current states.
    pub fn next_state(&self, states: &StateSet, symbol: char) -> StateSet {
        let mut nfa = self.design.to_nfa_from(states.iter().collect());
        nfa.read_character(symbol);
        nfa.current_states().into_iter().collect()
    }

    /// One outgoing rule per alphabet symbol. Symbols with no reachable
    /// target produce a rule into the empty set, which is discovered as an
    /// ordinary sink state, so the emitted DFA is total over the alphabet.
    pub fn rules_for(&self, states: &StateSet) -> Vec<FaRule<StateSet>> {
        self.design
            .rulebook()
            .alphabet()
            .into_iter()
            .map(|symbol| {
                FaRule::new(states.clone(), Some(symbol), self.next_state(states, symbol))
            })
            .collect()
    }

    /// Work-list closure over the reachable state sets, deduplicated by set
    /// value. Terminates: there are at most 2^n candidate sets.
    pub fn discover_states_and_rules(
        &self,
        start: &StateSet,
    ) -> (IndexSet<StateSet>, Vec<FaRule<StateSet>>) {
        let mut discovered = IndexSet::new();
        discovered.insert(start.clone());

        let mut rules = Vec::new();
        let mut worklist = VecDeque::from([start.clone()]);

        while let Some(states) = worklist.pop_front() {
            for rule in self.rules_for(&states) {
                let target = rule.follow().clone();
                if discovered.insert(target.clone()) {
                    worklist.push_back(target);
                }
                rules.push(rule);
            }
        }

        (discovered, rules)
    }

    /// The equivalent DFA design. Its start state is the closure of the NFA
    /// start state; a discovered set accepts iff it contains an NFA accept
    /// state. By construction the rulebook has exactly one rule per
    /// `(discovered state, alphabet symbol)` pair.
    pub fn to_dfa_design(&self) -> DfaDesign<StateSet> {
        let start: StateSet = self.design.to_nfa().current_states().into_iter().collect();
        let (discovered, rules) = self.discover_states_and_rules(&start);

        let nfa_accept_states: StateSet =
            self.design.accept_states().iter().copied().collect();
        let accept_states: HashSet<StateSet> = discovered
            .iter()
            .filter(|states| states.intersects(&nfa_accept_states))
            .cloned()
            .collect();

        DfaDesign::new(start, accept_states, Arc::new(DfaRulebook::new(rules)))
    }
}
