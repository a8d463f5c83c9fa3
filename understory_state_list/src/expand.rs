// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Expansion of a single pivot flag into an edit-text state list.
//!
//! A styling engine usually hands over one pseudo-state at a time (say,
//! `multiline`). The platform, however, selects drawables by matching full
//! state combinations, and a bare `[multiline]` entry cannot tell a focused
//! window from an unfocused one. [`expand`] fills in the combinations an
//! edit-text distinguishes, ranked most specific first, and always finishes
//! with the bare pivot so the single-flag meaning still applies last.

use crate::list::{StateList, StateListBuilder};
use crate::state::{StateFlag, StateId};
use crate::vector::StateVector;

const ENABLED: StateFlag = StateFlag::ENABLED;
const FOCUSED: StateFlag = StateFlag::FOCUSED;
const MULTILINE: StateFlag = StateFlag::MULTILINE;
const ACTIVATED: StateFlag = StateFlag::ACTIVATED;
const WINDOW_FOCUSED: StateFlag = StateFlag::WINDOW_FOCUSED;
const NOT_ENABLED: StateFlag = StateFlag::absent(StateId::ENABLED);
const NOT_FOCUSED: StateFlag = StateFlag::absent(StateId::FOCUSED);
const NOT_MULTILINE: StateFlag = StateFlag::absent(StateId::MULTILINE);
const NOT_WINDOW_FOCUSED: StateFlag = StateFlag::absent(StateId::WINDOW_FOCUSED);

type Case = &'static [&'static [StateFlag]];

const ACTIVATED_CASE: Case = &[&[ENABLED, ACTIVATED, MULTILINE]];

// `[enabled, activated, multiline]` from the activated case is the more
// unique match; callers merging both rank activated first.
const MULTILINE_CASE: Case = &[
    &[NOT_WINDOW_FOCUSED, ENABLED, MULTILINE],
    &[WINDOW_FOCUSED, ENABLED, MULTILINE],
    &[ENABLED, MULTILINE],
    &[FOCUSED, MULTILINE],
];

const ENABLED_CASE: Case = &[&[FOCUSED, ENABLED], &[NOT_FOCUSED, ENABLED]];

const FOCUSED_CASE: Case = &[&[FOCUSED, ENABLED]];

// Mirrors the platform's stock edit-text ladder and ends in the empty vector,
// so a widget always has a match. More specific pseudo rules take over when
// they are ranked ahead of this list.
const DEFAULT_CASE: Case = &[
    &[ENABLED, MULTILINE],
    &[NOT_WINDOW_FOCUSED, NOT_ENABLED, NOT_MULTILINE],
    &[NOT_WINDOW_FOCUSED, NOT_ENABLED],
    &[NOT_FOCUSED, ENABLED],
    &[FOCUSED, ENABLED],
    &[ENABLED],
    &[FOCUSED],
    &[],
];

/// Returns the vectors ranked ahead of `[pivot]` for an edit-text.
///
/// Only positive pivots are recognized; anything else has no special case.
fn specific_vectors(pivot: StateFlag) -> Case {
    if pivot.is_negated() {
        return &[];
    }
    match pivot.id() {
        StateId::ACTIVATED => ACTIVATED_CASE,
        StateId::MULTILINE => MULTILINE_CASE,
        StateId::ENABLED => ENABLED_CASE,
        StateId::FOCUSED => FOCUSED_CASE,
        StateId::DEFAULT => DEFAULT_CASE,
        _ => &[],
    }
}

/// Expands `pivot` into a priority-ordered edit-text state list.
///
/// The result is never empty: its last vector is always exactly `[pivot]`,
/// preceded by whatever combinations the pivot implies. Unrecognized pivots
/// produce just `[pivot]`.
///
/// ```rust
/// use understory_state_list::{StateFlag, StateVector, expand};
///
/// let list = expand(StateFlag::ENABLED);
/// assert_eq!(list.len(), 3);
/// assert_eq!(list.get(0).unwrap().flags(), &[StateFlag::FOCUSED, StateFlag::ENABLED]);
/// assert_eq!(list.get(1).unwrap().flags(), &[!StateFlag::FOCUSED, StateFlag::ENABLED]);
/// assert_eq!(list.last(), Some(&StateVector::single(StateFlag::ENABLED)));
/// ```
#[must_use]
pub fn expand(pivot: StateFlag) -> StateList {
    let case = specific_vectors(pivot);
    case.iter()
        .fold(
            StateListBuilder::with_capacity(case.len() + 1),
            |builder, flags| builder.push_vector(StateVector::from_slice(flags)),
        )
        .push_vector(StateVector::single(pivot))
        .build()
}

/// Expands several pivots into one list, in the order given.
///
/// Each pivot's expansion is appended after the previous ones; a vector that
/// already appeared keeps its earlier rank. Pass pivots highest priority
/// first (for example `activated` before `multiline`). An empty input is
/// treated as [`StateFlag::DEFAULT`].
///
/// ```rust
/// use understory_state_list::{StateFlag, StateId, StateSet, expand_all};
///
/// let list = expand_all([StateFlag::ACTIVATED, StateFlag::MULTILINE]);
/// let live = StateSet::from_ids([StateId::ENABLED, StateId::ACTIVATED, StateId::MULTILINE]);
/// assert_eq!(list.select(&live), Some(0));
/// ```
#[must_use]
pub fn expand_all(pivots: impl IntoIterator<Item = StateFlag>) -> StateList {
    let builder = pivots
        .into_iter()
        .fold(StateListBuilder::new(), |builder, pivot| {
            builder.extend_unique(&expand(pivot))
        });
    if builder.is_empty() {
        expand(StateFlag::DEFAULT)
    } else {
        builder.build()
    }
}
