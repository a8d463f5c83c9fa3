// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Priority-ordered state vector lists and their builder.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::slice;

use crate::state::{StateFlag, StateSet};
use crate::vector::StateVector;

/// An immutable, priority-ordered list of [`StateVector`]s.
///
/// Earlier vectors win. A consumer scans the list front to back and picks the
/// resource bound to the first vector that matches the widget's live state;
/// see [`StateList::select`]. Use [`StateListBuilder`] to construct lists.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct StateList {
    vectors: Box<[StateVector]>,
}

impl StateList {
    /// Returns the number of vectors.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    /// Returns `true` if the list has no vectors.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Returns the vectors, highest priority first.
    #[must_use]
    #[inline]
    pub fn as_slice(&self) -> &[StateVector] {
        &self.vectors
    }

    /// Returns the vector at `index`.
    #[must_use]
    #[inline]
    pub fn get(&self, index: usize) -> Option<&StateVector> {
        self.vectors.get(index)
    }

    /// Returns the highest-priority vector.
    #[must_use]
    #[inline]
    pub fn first(&self) -> Option<&StateVector> {
        self.vectors.first()
    }

    /// Returns the lowest-priority vector.
    #[must_use]
    #[inline]
    pub fn last(&self) -> Option<&StateVector> {
        self.vectors.last()
    }

    /// Iterates vectors from highest to lowest priority.
    pub fn iter(&self) -> slice::Iter<'_, StateVector> {
        self.vectors.iter()
    }

    /// Returns the index of the first vector matching `states`.
    ///
    /// This is the first-match-wins scan performed by resource selection.
    ///
    /// ```rust
    /// use understory_state_list::{StateFlag, StateId, StateListBuilder, StateSet};
    ///
    /// let list = StateListBuilder::new()
    ///     .push([StateFlag::FOCUSED, StateFlag::ENABLED])
    ///     .push([StateFlag::ENABLED])
    ///     .build();
    ///
    /// let enabled = StateSet::from_ids([StateId::ENABLED]);
    /// assert_eq!(list.select(&enabled), Some(1));
    /// assert_eq!(list.select(&StateSet::default()), None);
    /// ```
    #[must_use]
    pub fn select(&self, states: &StateSet) -> Option<usize> {
        self.vectors.iter().position(|v| v.matches(states))
    }

    /// Returns the first vector matching `states`.
    #[must_use]
    pub fn select_vector(&self, states: &StateSet) -> Option<&StateVector> {
        self.select(states).map(|idx| &self.vectors[idx])
    }
}

impl<'a> IntoIterator for &'a StateList {
    type Item = &'a StateVector;
    type IntoIter = slice::Iter<'a, StateVector>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Builder for [`StateList`].
///
/// Priority is construction order: each push appends a vector that ranks
/// below everything already pushed.
#[derive(Clone, Debug, Default)]
pub struct StateListBuilder {
    vectors: Vec<StateVector>,
}

impl StateListBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty builder with room for `capacity` vectors.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vectors: Vec::with_capacity(capacity),
        }
    }

    /// Appends a vector built from `flags`.
    #[must_use]
    pub fn push(mut self, flags: impl IntoIterator<Item = StateFlag>) -> Self {
        self.vectors.push(flags.into_iter().collect());
        self
    }

    /// Appends an already-built vector.
    #[must_use]
    pub fn push_vector(mut self, vector: StateVector) -> Self {
        self.vectors.push(vector);
        self
    }

    /// Appends each vector of `list` not already present, keeping the
    /// earlier, higher-priority copy of any duplicate.
    #[must_use]
    pub fn extend_unique(mut self, list: &StateList) -> Self {
        for vector in list {
            if !self.vectors.contains(vector) {
                self.vectors.push(vector.clone());
            }
        }
        self
    }

    /// Returns the number of vectors pushed so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    /// Returns `true` if nothing has been pushed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Freezes the builder into a [`StateList`].
    #[must_use]
    pub fn build(self) -> StateList {
        StateList {
            vectors: self.vectors.into_boxed_slice(),
        }
    }
}
