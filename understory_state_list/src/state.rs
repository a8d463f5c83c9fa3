// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! State identifiers, signed state flags, and live state sets.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;
use core::iter::FromIterator;
use core::ops::Not;

/// A stable identifier for a boolean widget-state aspect (e.g. `enabled`).
///
/// The built-in constants cover the aspects an edit-text cares about. IDs are
/// otherwise application-defined and intentionally unbounded; values below
/// [`StateId::FIRST_CUSTOM`] are reserved.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StateId(pub u32);

impl StateId {
    /// Sentinel for "no specific pseudo-state was requested".
    ///
    /// Expanding this produces the widget's default ladder.
    pub const DEFAULT: Self = Self(0);
    /// The widget accepts input.
    pub const ENABLED: Self = Self(1);
    /// The widget holds keyboard focus.
    pub const FOCUSED: Self = Self(2);
    /// The widget edits more than one line.
    pub const MULTILINE: Self = Self(3);
    /// The widget is activated (e.g. the current item of a group).
    pub const ACTIVATED: Self = Self(4);
    /// The window containing the widget has focus.
    pub const WINDOW_FOCUSED: Self = Self(5);

    /// First ID available to applications.
    pub const FIRST_CUSTOM: Self = Self(16);

    /// Returns the lowercase name of a built-in aspect.
    #[must_use]
    pub const fn name(self) -> Option<&'static str> {
        match self {
            Self::DEFAULT => Some("default"),
            Self::ENABLED => Some("enabled"),
            Self::FOCUSED => Some("focused"),
            Self::MULTILINE => Some("multiline"),
            Self::ACTIVATED => Some("activated"),
            Self::WINDOW_FOCUSED => Some("window_focused"),
            _ => None,
        }
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "state({})", self.0),
        }
    }
}

/// A [`StateId`] with a polarity.
///
/// A positive flag requires the aspect to be present; a negated flag requires
/// it to be absent. Use `!flag` to flip polarity.
///
/// ```rust
/// use understory_state_list::{StateFlag, StateId};
///
/// let unfocused = !StateFlag::WINDOW_FOCUSED;
/// assert_eq!(unfocused.id(), StateId::WINDOW_FOCUSED);
/// assert!(unfocused.is_negated());
/// assert_eq!(!unfocused, StateFlag::WINDOW_FOCUSED);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StateFlag {
    id: StateId,
    negated: bool,
}

impl StateFlag {
    /// Positive [`StateId::DEFAULT`].
    pub const DEFAULT: Self = Self::present(StateId::DEFAULT);
    /// Positive [`StateId::ENABLED`].
    pub const ENABLED: Self = Self::present(StateId::ENABLED);
    /// Positive [`StateId::FOCUSED`].
    pub const FOCUSED: Self = Self::present(StateId::FOCUSED);
    /// Positive [`StateId::MULTILINE`].
    pub const MULTILINE: Self = Self::present(StateId::MULTILINE);
    /// Positive [`StateId::ACTIVATED`].
    pub const ACTIVATED: Self = Self::present(StateId::ACTIVATED);
    /// Positive [`StateId::WINDOW_FOCUSED`].
    pub const WINDOW_FOCUSED: Self = Self::present(StateId::WINDOW_FOCUSED);

    /// A flag requiring `id` to be present.
    #[must_use]
    pub const fn present(id: StateId) -> Self {
        Self { id, negated: false }
    }

    /// A flag requiring `id` to be absent.
    #[must_use]
    pub const fn absent(id: StateId) -> Self {
        Self { id, negated: true }
    }

    /// The aspect this flag constrains.
    #[must_use]
    #[inline]
    pub const fn id(self) -> StateId {
        self.id
    }

    /// Returns `true` if this flag requires the aspect to be absent.
    #[must_use]
    #[inline]
    pub const fn is_negated(self) -> bool {
        self.negated
    }

    /// Returns `true` if `states` satisfies this flag.
    #[must_use]
    #[inline]
    pub fn holds(self, states: &StateSet) -> bool {
        states.contains(self.id) != self.negated
    }

    /// Returns `true` if both flags name the same aspect with opposite polarity.
    #[must_use]
    pub const fn conflicts_with(self, other: Self) -> bool {
        self.id.0 == other.id.0 && self.negated != other.negated
    }
}

impl Not for StateFlag {
    type Output = Self;

    fn not(self) -> Self {
        Self {
            id: self.id,
            negated: !self.negated,
        }
    }
}

impl From<StateId> for StateFlag {
    fn from(id: StateId) -> Self {
        Self::present(id)
    }
}

impl fmt::Display for StateFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negated {
            f.write_str("!")?;
        }
        fmt::Display::fmt(&self.id, f)
    }
}

/// The live state of a widget: the set of aspects that are currently true.
///
/// Stored sorted and deduplicated, like the selector ID sets in
/// `understory_style`. Aspects not in the set are false.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct StateSet(Box<[StateId]>);

impl StateSet {
    /// Constructs a set from an iterator, sorting and deduplicating.
    #[must_use]
    pub fn from_ids(iter: impl IntoIterator<Item = StateId>) -> Self {
        let mut ids: Vec<StateId> = iter.into_iter().collect();
        ids.sort_unstable();
        ids.dedup();
        Self(ids.into_boxed_slice())
    }

    /// Returns `true` if no aspect is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of aspects that are set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns the set as a sorted slice.
    #[must_use]
    pub fn as_slice(&self) -> &[StateId] {
        &self.0
    }

    /// Returns `true` if `id` is currently set.
    #[must_use]
    pub fn contains(&self, id: StateId) -> bool {
        self.0.binary_search(&id).is_ok()
    }
}

impl FromIterator<StateId> for StateSet {
    fn from_iter<I: IntoIterator<Item = StateId>>(iter: I) -> Self {
        Self::from_ids(iter)
    }
}
