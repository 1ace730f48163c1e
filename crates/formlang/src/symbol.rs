//! Symbol types for automaton transitions.

/// An input symbol on a transition.
/// `None` marks an epsilon (free) move, valid only in NFA rulebooks.
pub type Symbol = Option<char>;

/// The epsilon (free move) marker.
pub const EPSILON: Symbol = None;

/// Check if a symbol is an epsilon move.
#[inline]
pub fn is_epsilon(symbol: Symbol) -> bool {
    symbol.is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epsilon() {
        assert!(is_epsilon(EPSILON));
        assert!(!is_epsilon(Some('a')));
    }
}
