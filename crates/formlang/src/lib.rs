//! Finite-automaton engine and regular-expression compiler.
//!
//! This crate provides:
//! - Rule/rulebook abstractions for deterministic and non-deterministic
//!   automata over arbitrary hashable state types
//! - Epsilon closure computation
//! - A regular-expression syntax tree compiled to NFAs by Thompson
//!   construction
//! - Subset construction (NFA to DFA conversion)
//!
//! Rulebooks and designs are immutable once built and safe to share across
//! threads; runtimes are short-lived, one per acceptance query.

mod dfa;
mod error;
mod nfa;
mod pattern;
mod rule;
mod rulebook;
mod simulation;
mod state;
mod symbol;

pub use dfa::{Dfa, DfaDesign};
pub use error::FaError;
pub use nfa::{Nfa, NfaDesign};
pub use pattern::Pattern;
pub use rule::FaRule;
pub use rulebook::{DfaRulebook, NfaRulebook};
pub use simulation::NfaSimulation;
pub use state::{State, StateId, StateSet};
pub use symbol::{EPSILON, Symbol, is_epsilon};
