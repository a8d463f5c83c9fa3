// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Style adapters: per-widget hooks consulted by the style layer.

use crate::expand::expand;
use crate::list::{StateList, StateListBuilder};
use crate::state::StateFlag;

/// Widget-specific knowledge the style layer needs to build state lists.
pub trait StyleAdapter {
    /// The element name selectors use for this widget kind.
    fn element_name(&self) -> &'static str;

    /// Expands a single pseudo-state into a priority-ordered state list.
    ///
    /// The default keeps the pseudo-state as is: the list is exactly
    /// `[pivot]`. Implementations must return a non-empty list ending in
    /// `[pivot]`.
    fn additional_states(&self, pivot: StateFlag) -> StateList {
        StateListBuilder::with_capacity(1).push([pivot]).build()
    }
}

/// The adapter for single- and multi-line text input fields.
///
/// Stateless; use [`EditTextStyleAdapter::shared`] or construct one freely.
///
/// ```rust
/// use understory_state_list::{EditTextStyleAdapter, StateFlag, StyleAdapter};
///
/// let adapter = EditTextStyleAdapter::shared();
/// assert_eq!(adapter.element_name(), "edit-text");
/// assert_eq!(adapter.additional_states(StateFlag::MULTILINE).len(), 5);
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct EditTextStyleAdapter;

static EDIT_TEXT: EditTextStyleAdapter = EditTextStyleAdapter;

impl EditTextStyleAdapter {
    /// Element name matched by `edit-text` selectors.
    pub const ELEMENT_NAME: &'static str = "edit-text";

    /// Returns the process-wide adapter instance.
    #[must_use]
    pub fn shared() -> &'static Self {
        &EDIT_TEXT
    }
}

impl StyleAdapter for EditTextStyleAdapter {
    fn element_name(&self) -> &'static str {
        Self::ELEMENT_NAME
    }

    fn additional_states(&self, pivot: StateFlag) -> StateList {
        expand(pivot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::StateId;
    use crate::vector::StateVector;

    #[derive(Debug)]
    struct Plain;

    impl StyleAdapter for Plain {
        fn element_name(&self) -> &'static str {
            "view"
        }
    }

    #[test]
    fn default_adapter_keeps_pivot_only() {
        let list = Plain.additional_states(StateFlag::MULTILINE);
        assert_eq!(list.len(), 1);
        assert_eq!(list.last(), Some(&StateVector::single(StateFlag::MULTILINE)));
    }

    #[test]
    fn edit_text_delegates_to_expand() {
        let adapter = EditTextStyleAdapter::shared();
        for id in [
            StateId::DEFAULT,
            StateId::ENABLED,
            StateId::FOCUSED,
            StateId::MULTILINE,
            StateId::ACTIVATED,
            StateId(123),
        ] {
            let pivot = StateFlag::present(id);
            assert_eq!(adapter.additional_states(pivot), expand(pivot));
        }
    }

    #[test]
    fn shared_instance_is_stable() {
        assert!(core::ptr::eq(
            EditTextStyleAdapter::shared(),
            EditTextStyleAdapter::shared()
        ));
        assert_eq!(EditTextStyleAdapter.element_name(), "edit-text");
    }

    #[test]
    fn adapters_work_as_trait_objects() {
        let adapters: [&dyn StyleAdapter; 2] = [&Plain, EditTextStyleAdapter::shared()];
        let lens: [usize; 2] = adapters.map(|a| a.additional_states(StateFlag::FOCUSED).len());
        assert_eq!(lens, [1, 2]);
    }
}
