//! A single labeled transition.

use crate::state::State;
use crate::symbol::Symbol;
use std::fmt;

/// One transition `(state, symbol, next_state)`.
///
/// A `None` symbol is an epsilon (free) move; those belong in NFA rulebooks
/// only. Rules are immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaRule<S> {
    state: S,
    symbol: Symbol,
    next_state: S,
}

impl<S: State> FaRule<S> {
    pub fn new(state: S, symbol: Symbol, next_state: S) -> Self {
        Self {
            state,
            symbol,
            next_state,
        }
    }

    /// Does this rule fire for the given `(state, symbol)` query?
    pub fn applies_to(&self, state: &S, symbol: Symbol) -> bool {
        self.state == *state && self.symbol == symbol
    }

    /// The state this rule transitions into.
    pub fn follow(&self) -> &S {
        &self.next_state
    }

    /// The state this rule fires from.
    pub fn state(&self) -> &S {
        &self.state
    }

    /// The symbol this rule consumes, `None` for a free move.
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }
}

impl<S: State> fmt::Display for FaRule<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.symbol {
            Some(c) => write!(f, "{:?} --{}--> {:?}", self.state, c, self.next_state),
            None => write!(f, "{:?} --\u{3b5}--> {:?}", self.state, self.next_state),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::EPSILON;

    #[test]
    fn test_applies_to() {
        let rule = FaRule::new(1u32, Some('a'), 2);

        assert!(rule.applies_to(&1, Some('a')));
        assert!(!rule.applies_to(&1, Some('b')));
        assert!(!rule.applies_to(&2, Some('a')));
        assert!(!rule.applies_to(&1, EPSILON));
    }

    #[test]
    fn test_follow() {
        let rule = FaRule::new(1u32, Some('a'), 2);
        assert_eq!(*rule.follow(), 2);
    }

    #[test]
    fn test_display() {
        assert_eq!(FaRule::new(1u32, Some('a'), 2).to_string(), "1 --a--> 2");
        assert_eq!(FaRule::new(1u32, EPSILON, 2).to_string(), "1 --\u{3b5}--> 2");
    }
}
