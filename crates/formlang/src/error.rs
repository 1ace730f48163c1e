//! Error types for automaton construction and execution.

use thiserror::Error;

/// Failures surfaced by the automaton engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FaError {
    /// A deterministic rulebook has no rule for a `(state, symbol)` pair.
    /// Automata may be partial; a miss is fatal to the current read.
    #[error("no transition from state {state} on input {symbol:?}")]
    NoTransition { state: String, symbol: char },

    /// A deterministic rulebook is ambiguous or contains free moves.
    /// Only reported by explicit validation, never during lookup.
    #[error("malformed deterministic rulebook: {detail}")]
    MalformedRulebook { detail: String },
}
