//! Regular-expression syntax trees and their Thompson-style compilation
//! into NFA designs.

use crate::nfa::NfaDesign;
use crate::rule::FaRule;
use crate::rulebook::NfaRulebook;
use crate::state::StateId;
use crate::symbol::EPSILON;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

static NEXT_STATE: AtomicU32 = AtomicU32::new(0);

/// Draw a state identity never handed out before, so independent
/// compilations of the same pattern never alias states.
fn fresh_state() -> StateId {
    NEXT_STATE.fetch_add(1, Ordering::Relaxed)
}

/// An immutable regular-expression syntax tree.
///
/// Patterns are built as ASTs, not parsed from text. Each variant compiles
/// itself into a disjoint fresh sub-automaton wired with free moves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pattern {
    /// Matches only the empty string.
    Empty,
    /// Matches exactly one character.
    Literal(char),
    /// Matches the left pattern followed by the right.
    Concatenate(Box<Pattern>, Box<Pattern>),
    /// Matches either pattern.
    Choose(Box<Pattern>, Box<Pattern>),
    /// Matches zero or more repetitions of the inner pattern.
    Repeat(Box<Pattern>),
}

impl Pattern {
    pub fn literal(character: char) -> Self {
        Pattern::Literal(character)
    }

    pub fn concatenate(first: Pattern, second: Pattern) -> Self {
        Pattern::Concatenate(Box::new(first), Box::new(second))
    }

    pub fn choose(first: Pattern, second: Pattern) -> Self {
        Pattern::Choose(Box::new(first), Box::new(second))
    }

    pub fn repeat(inner: Pattern) -> Self {
        Pattern::Repeat(Box::new(inner))
    }

    /// Display bracketing strength; irrelevant to matching semantics.
    pub fn precedence(&self) -> u8 {
        match self {
            Pattern::Empty | Pattern::Literal(_) => 3,
            Pattern::Repeat(_) => 2,
            Pattern::Concatenate(_, _) => 1,
            Pattern::Choose(_, _) => 0,
        }
    }

    fn bracket(&self, required_precedence: u8) -> String {
        if self.precedence() < required_precedence {
            format!("({self})")
        } else {
            self.to_string()
        }
    }

    /// Whole-string matching. Compiles to a fresh NFA on every call.
    pub fn matches(&self, input: &str) -> bool {
        self.to_nfa_design().accepts(input)
    }

    /// Compile into an NFA design with fresh state identities.
    ///
    /// Pure and referentially transparent: two compilations of the same
    /// pattern yield structurally equivalent, state-disjoint designs.
    pub fn to_nfa_design(&self) -> NfaDesign<StateId> {
        match self {
            Pattern::Empty => {
                let start_state = fresh_state();
                NfaDesign::new(
                    start_state,
                    HashSet::from([start_state]),
                    Arc::new(NfaRulebook::new(Vec::new())),
                )
            }
            Pattern::Literal(character) => {
                let start_state = fresh_state();
                let accept_state = fresh_state();
                let rulebook = NfaRulebook::new(vec![FaRule::new(
                    start_state,
                    Some(*character),
                    accept_state,
                )]);
                NfaDesign::new(
                    start_state,
                    HashSet::from([accept_state]),
                    Arc::new(rulebook),
                )
            }
            Pattern::Concatenate(first, second) => {
                let first = first.to_nfa_design();
                let second = second.to_nfa_design();

                let mut rules = first.rulebook().rules().to_vec();
                rules.extend_from_slice(second.rulebook().rules());
                for state in first.accept_states() {
                    rules.push(FaRule::new(*state, EPSILON, *second.start_state()));
                }

                NfaDesign::new(
                    *first.start_state(),
                    second.accept_states().clone(),
                    Arc::new(NfaRulebook::new(rules)),
                )
            }
            Pattern::Choose(first, second) => {
                let first = first.to_nfa_design();
                let second = second.to_nfa_design();
                let start_state = fresh_state();

                let mut rules = first.rulebook().rules().to_vec();
                rules.extend_from_slice(second.rulebook().rules());
                rules.push(FaRule::new(start_state, EPSILON, *first.start_state()));
                rules.push(FaRule::new(start_state, EPSILON, *second.start_state()));

                let accept_states = first
                    .accept_states()
                    .union(second.accept_states())
                    .copied()
                    .collect();

                NfaDesign::new(start_state, accept_states, Arc::new(NfaRulebook::new(rules)))
            }
            Pattern::Repeat(inner) => {
                let inner = inner.to_nfa_design();
                let start_state = fresh_state();

                let mut rules = inner.rulebook().rules().to_vec();
                rules.push(FaRule::new(start_state, EPSILON, *inner.start_state()));
                for state in inner.accept_states() {
                    rules.push(FaRule::new(*state, EPSILON, *inner.start_state()));
                }

                let mut accept_states = inner.accept_states().clone();
                accept_states.insert(start_state);

                NfaDesign::new(start_state, accept_states, Arc::new(NfaRulebook::new(rules)))
            }
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Empty => Ok(()),
            Pattern::Literal(character) => write!(f, "{character}"),
            Pattern::Concatenate(first, second) => {
                write!(
                    f,
                    "{}{}",
                    first.bracket(self.precedence()),
                    second.bracket(self.precedence())
                )
            }
            Pattern::Choose(first, second) => {
                write!(
                    f,
                    "{}|{}",
                    first.bracket(self.precedence()),
                    second.bracket(self.precedence())
                )
            }
            Pattern::Repeat(inner) => write!(f, "{}*", inner.bracket(self.precedence())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_bracketing() {
        let pattern = Pattern::repeat(Pattern::choose(
            Pattern::concatenate(Pattern::literal('a'), Pattern::literal('b')),
            Pattern::literal('a'),
        ));
        assert_eq!(pattern.to_string(), "(ab|a)*");

        let pattern = Pattern::choose(
            Pattern::concatenate(Pattern::literal('a'), Pattern::literal('b')),
            Pattern::literal('c'),
        );
        assert_eq!(pattern.to_string(), "ab|c");
    }

    #[test]
    fn test_empty() {
        assert!(Pattern::Empty.matches(""));
        assert!(!Pattern::Empty.matches("a"));
    }

    #[test]
    fn test_literal() {
        let pattern = Pattern::literal('a');
        assert!(!pattern.matches(""));
        assert!(pattern.matches("a"));
        assert!(!pattern.matches("b"));
        assert!(!pattern.matches("aa"));
    }

    #[test]
    fn test_concatenate() {
        let pattern = Pattern::concatenate(Pattern::literal('a'), Pattern::literal('b'));
        assert!(!pattern.matches("a"));
        assert!(pattern.matches("ab"));
        assert!(!pattern.matches("abc"));

        let pattern = Pattern::concatenate(
            Pattern::literal('a'),
            Pattern::concatenate(Pattern::literal('b'), Pattern::literal('c')),
        );
        assert!(!pattern.matches("ab"));
        assert!(pattern.matches("abc"));
    }

    #[test]
    fn test_choose() {
        let pattern = Pattern::choose(Pattern::literal('a'), Pattern::literal('b'));
        assert!(pattern.matches("a"));
        assert!(pattern.matches("b"));
        assert!(!pattern.matches("c"));
    }

    #[test]
    fn test_repeat() {
        let pattern = Pattern::repeat(Pattern::literal('a'));
        assert!(pattern.matches(""));
        assert!(pattern.matches("a"));
        assert!(pattern.matches("aaaa"));
        assert!(!pattern.matches("b"));
    }

    #[test]
    fn test_repeat_of_optional() {
        // (a(|b))* from the original exercises.
        let pattern = Pattern::repeat(Pattern::concatenate(
            Pattern::literal('a'),
            Pattern::choose(Pattern::Empty, Pattern::literal('b')),
        ));

        for accepted in ["", "a", "ab", "aba", "abab", "abaab"] {
            assert!(pattern.matches(accepted), "should match {accepted:?}");
        }
        assert!(!pattern.matches("abba"));
    }

    #[test]
    fn test_compilations_never_alias_states() {
        let pattern = Pattern::repeat(Pattern::literal('a'));
        let first = pattern.to_nfa_design();
        let second = pattern.to_nfa_design();

        assert_ne!(first.start_state(), second.start_state());
        assert!(first.accept_states().is_disjoint(second.accept_states()));
    }
}
