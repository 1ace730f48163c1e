//! State types for automata.

use fixedbitset::FixedBitSet;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Any equality-comparable, hashable value can name an automaton node.
///
/// Rulebook lookup and subset-construction deduplication both rely on
/// structural equality and a hash consistent with it.
pub trait State: Clone + Eq + Hash + fmt::Debug {}

impl<T: Clone + Eq + Hash + fmt::Debug> State for T {}

/// A dense state identifier, used by the pattern compiler and by
/// subset construction.
pub type StateId = u32;

/// A set of dense states backed by a bit set.
///
/// `StateSet` doubles as a DFA *state* during subset construction, so its
/// equality and hash are structural over the member ids: two sets holding the
/// same states compare equal even when their backing bit sets were grown to
/// different capacities.
#[derive(Clone)]
pub struct StateSet {
    bits: FixedBitSet,
}

impl StateSet {
    /// Create an empty state set.
    pub fn new() -> Self {
        Self {
            bits: FixedBitSet::new(),
        }
    }

    /// Create an empty state set with room for `capacity` states.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bits: FixedBitSet::with_capacity(capacity),
        }
    }

    /// Create a state set containing a single state.
    pub fn singleton(state: StateId) -> Self {
        let mut set = Self::new();
        set.insert(state);
        set
    }

    /// Insert a state, growing the backing storage if needed.
    pub fn insert(&mut self, state: StateId) {
        let idx = state as usize;
        if idx >= self.bits.len() {
            self.bits.grow(idx + 1);
        }
        self.bits.insert(idx);
    }

    /// Check if the set contains a state.
    pub fn contains(&self, state: StateId) -> bool {
        let idx = state as usize;
        idx < self.bits.len() && self.bits.contains(idx)
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.bits.is_clear()
    }

    /// Get the number of states in the set.
    pub fn len(&self) -> usize {
        self.bits.count_ones(..)
    }

    /// Iterate over all states in the set, in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = StateId> + '_ {
        self.bits.ones().map(|i| i as StateId)
    }

    /// Union another set into this one in place.
    pub fn union_with(&mut self, other: &StateSet) {
        if other.bits.len() > self.bits.len() {
            self.bits.grow(other.bits.len());
        }
        self.bits.union_with(&other.bits);
    }

    /// Check whether any member of `other` is also a member of this set.
    pub fn intersects(&self, other: &StateSet) -> bool {
        self.bits.intersection(&other.bits).next().is_some()
    }

    /// Canonical representation as a sorted vec.
    pub fn to_vec(&self) -> Vec<StateId> {
        self.iter().collect()
    }
}

impl Default for StateSet {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for StateSet {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl Eq for StateSet {}

impl Hash for StateSet {
    fn hash<H: Hasher>(&self, hasher: &mut H) {
        for state in self.iter() {
            state.hash(hasher);
        }
    }
}

impl fmt::Debug for StateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<StateId> for StateSet {
    fn from_iter<I: IntoIterator<Item = StateId>>(iter: I) -> Self {
        let mut set = Self::new();
        for state in iter {
            set.insert(state);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(set: &StateSet) -> u64 {
        let mut hasher = DefaultHasher::new();
        set.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_state_set_basic() {
        let mut set = StateSet::new();
        assert!(set.is_empty());

        set.insert(3);
        set.insert(7);
        assert!(!set.is_empty());
        assert_eq!(set.len(), 2);
        assert!(set.contains(3));
        assert!(set.contains(7));
        assert!(!set.contains(5));
    }

    #[test]
    fn test_state_set_union() {
        let mut set1 = StateSet::from_iter([1, 3]);
        let set2 = StateSet::from_iter([2, 3]);

        set1.union_with(&set2);
        assert_eq!(set1.to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn test_state_set_intersects() {
        let set1 = StateSet::from_iter([1, 3, 5]);
        let set2 = StateSet::from_iter([2, 5]);
        let set3 = StateSet::from_iter([0, 2]);

        assert!(set1.intersects(&set2));
        assert!(!set1.intersects(&set3));
    }

    #[test]
    fn test_equality_ignores_capacity() {
        let small = StateSet::from_iter([1, 2]);
        let mut large = StateSet::with_capacity(1024);
        large.insert(2);
        large.insert(1);

        assert_eq!(small, large);
        assert_eq!(hash_of(&small), hash_of(&large));
    }

    #[test]
    fn test_singleton() {
        let set = StateSet::singleton(5);
        assert_eq!(set.len(), 1);
        assert!(set.contains(5));
    }
}
