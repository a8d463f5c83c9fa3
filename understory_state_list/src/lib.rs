// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_state_list --heading-base-level=0

//! Understory State List: priority-ordered drawable state lists for edit-text widgets.
//!
//! Widget platforms pick a visual resource by scanning an ordered list of
//! *state vectors* and taking the first one that matches the widget's live
//! boolean state (enabled, focused, multiline, ...). A styling engine, on the
//! other hand, typically supplies one pseudo-state at a time. This crate
//! bridges the two: given a single pivot flag, it produces the full,
//! correctly ranked list of vectors a hand-written state table would contain.
//!
//! ## Core Concepts
//!
//! - [`StateId`] names a boolean aspect; [`StateFlag`] adds polarity, so
//!   `!StateFlag::WINDOW_FOCUSED` requires the window to be *unfocused*.
//! - [`StateVector`] is a conjunction of flags. Unmentioned aspects are
//!   wildcards and the empty vector matches anything.
//! - [`StateList`] ranks vectors, highest priority first.
//!   [`StateList::select`] performs the first-match-wins scan.
//! - [`expand`] turns one pivot into a list, always ending in `[pivot]`.
//!
//! ```rust
//! use understory_state_list::{StateFlag, StateId, StateSet, StateVector, expand};
//!
//! let list = expand(StateFlag::MULTILINE);
//! assert_eq!(list.len(), 5);
//! assert_eq!(list.last(), Some(&StateVector::single(StateFlag::MULTILINE)));
//!
//! // An enabled multiline field in a background window picks the first vector.
//! let live = StateSet::from_ids([StateId::ENABLED, StateId::MULTILINE]);
//! assert_eq!(list.select(&live), Some(0));
//!
//! // Once the window gains focus, the second one wins instead.
//! let live = StateSet::from_ids([StateId::ENABLED, StateId::MULTILINE, StateId::WINDOW_FOCUSED]);
//! assert_eq!(list.select(&live), Some(1));
//! ```
//!
//! ## Style Adapters
//!
//! [`StyleAdapter`] is the per-widget hook a style layer calls.
//! [`EditTextStyleAdapter`] answers for the `edit-text` element by delegating
//! to [`expand`]; other widgets can rely on the default, which keeps the pivot
//! alone.
//!
//! ## Combining Pseudo-States
//!
//! [`expand`] never ranks one pivot against another. When several
//! pseudo-states apply at once, [`expand_all`] concatenates their lists in
//! the order given and drops repeated vectors, so callers decide precedence by
//! ordering their pivots.
//!
//! ## Features
//!
//! - `std` (enabled by default): Currently has no effect.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod adapter;
mod expand;
mod list;
mod state;
mod vector;

pub use adapter::{EditTextStyleAdapter, StyleAdapter};
pub use expand::{expand, expand_all};
pub use list::{StateList, StateListBuilder};
pub use state::{StateFlag, StateId, StateSet};
pub use vector::StateVector;
