// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! State vectors: conjunctions of signed state flags.

use core::fmt;
use core::iter::FromIterator;

use smallvec::SmallVec;

use crate::state::{StateFlag, StateSet};

/// Flags stored inline before spilling to the heap.
///
/// The edit-text table never uses more than three flags per vector.
const INLINE_FLAGS: usize = 3;

/// An ordered conjunction of [`StateFlag`]s.
///
/// A vector matches a [`StateSet`] when every flag holds. Aspects that are not
/// mentioned are wildcards, so the empty vector matches unconditionally and
/// serves as an explicit default.
///
/// A vector never names the same aspect twice with opposite polarity; this is
/// checked with a debug assertion on construction.
///
/// ```rust
/// use understory_state_list::{StateFlag, StateId, StateSet, StateVector};
///
/// let v = StateVector::from_slice(&[!StateFlag::WINDOW_FOCUSED, StateFlag::ENABLED]);
///
/// assert!(v.matches(&StateSet::from_ids([StateId::ENABLED])));
/// assert!(!v.matches(&StateSet::from_ids([StateId::ENABLED, StateId::WINDOW_FOCUSED])));
/// assert!(StateVector::new().matches(&StateSet::default()));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct StateVector {
    flags: SmallVec<[StateFlag; INLINE_FLAGS]>,
}

impl StateVector {
    /// Creates the empty, unconditional vector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a vector from flags in priority order.
    ///
    /// # Panics (debug only)
    ///
    /// Panics in debug builds if two flags conflict.
    #[must_use]
    pub fn from_slice(flags: &[StateFlag]) -> Self {
        let flags = SmallVec::from_slice(flags);
        debug_assert!(
            is_consistent(&flags),
            "state vector names an aspect with both polarities"
        );
        Self { flags }
    }

    /// A vector holding exactly one flag.
    #[must_use]
    pub fn single(flag: StateFlag) -> Self {
        Self::from_slice(&[flag])
    }

    /// Returns `true` if this vector has no flags and so matches anything.
    #[must_use]
    #[inline]
    pub fn is_unconditional(&self) -> bool {
        self.flags.is_empty()
    }

    /// Returns the number of flags.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// Returns `true` if this vector has no flags.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Returns the flags in order.
    #[must_use]
    #[inline]
    pub fn flags(&self) -> &[StateFlag] {
        &self.flags
    }

    /// Returns `true` if every flag holds for `states`.
    #[must_use]
    pub fn matches(&self, states: &StateSet) -> bool {
        self.flags.iter().all(|flag| flag.holds(states))
    }

    /// Returns `true` if no aspect appears with both polarities.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        is_consistent(&self.flags)
    }
}

impl FromIterator<StateFlag> for StateVector {
    fn from_iter<I: IntoIterator<Item = StateFlag>>(iter: I) -> Self {
        let flags: SmallVec<[StateFlag; INLINE_FLAGS]> = iter.into_iter().collect();
        debug_assert!(
            is_consistent(&flags),
            "state vector names an aspect with both polarities"
        );
        Self { flags }
    }
}

impl From<StateFlag> for StateVector {
    fn from(flag: StateFlag) -> Self {
        Self::single(flag)
    }
}

impl fmt::Display for StateVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, flag) in self.flags.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(flag, f)?;
        }
        f.write_str("]")
    }
}

// Vectors are tiny, a quadratic scan beats sorting a copy.
fn is_consistent(flags: &[StateFlag]) -> bool {
    flags
        .iter()
        .enumerate()
        .all(|(i, a)| flags[i + 1..].iter().all(|b| !a.conflicts_with(*b)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::StateId;
    use alloc::string::ToString;

    #[test]
    fn unmentioned_aspects_are_wildcards() {
        let v = StateVector::from_slice(&[StateFlag::ENABLED, StateFlag::MULTILINE]);
        let states = StateSet::from_ids([
            StateId::ENABLED,
            StateId::MULTILINE,
            StateId::FOCUSED,
            StateId::WINDOW_FOCUSED,
        ]);
        assert!(v.matches(&states));
        assert!(!v.matches(&StateSet::from_ids([StateId::ENABLED])));
    }

    #[test]
    fn negated_flags_require_absence() {
        let v = StateVector::from_slice(&[
            !StateFlag::WINDOW_FOCUSED,
            !StateFlag::ENABLED,
            !StateFlag::MULTILINE,
        ]);
        assert!(v.matches(&StateSet::default()));
        assert!(v.matches(&StateSet::from_ids([StateId::FOCUSED])));
        assert!(!v.matches(&StateSet::from_ids([StateId::MULTILINE])));
    }

    #[test]
    fn empty_vector_is_unconditional() {
        let v = StateVector::new();
        assert!(v.is_unconditional());
        assert!(v.matches(&StateSet::default()));
        assert!(v.matches(&StateSet::from_ids([StateId::ENABLED, StateId(99)])));
    }

    #[test]
    fn consistency_detects_conflicts() {
        let ok = StateVector::from_slice(&[StateFlag::FOCUSED, StateFlag::ENABLED]);
        assert!(ok.is_consistent());
        // Repeating a flag with the same polarity is redundant, not conflicting.
        let dup = StateVector::from_slice(&[StateFlag::FOCUSED, StateFlag::FOCUSED]);
        assert!(dup.is_consistent());
        assert!(!is_consistent(&[StateFlag::FOCUSED, !StateFlag::FOCUSED]));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "both polarities")]
    fn conflicting_flags_panic_in_debug() {
        let _ = StateVector::from_slice(&[StateFlag::ENABLED, !StateFlag::ENABLED]);
    }

    #[test]
    fn display_lists_flags_in_order() {
        let v: StateVector = [!StateFlag::FOCUSED, StateFlag::ENABLED]
            .into_iter()
            .collect();
        assert_eq!(v.to_string(), "[!focused, enabled]");
        assert_eq!(StateVector::new().to_string(), "[]");
    }
}
