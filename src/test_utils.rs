// SPDX-License-Identifier: MPL-2.0
//! Shared test double for the document port.
//!
//! [`MemoryDocument`] is a minimal in-memory [`Document`] used by the unit
//! and integration tests (and available to embedders for their own tests).
//! It stores triggers in insertion order, which stands in for document
//! encounter order.

use crate::domain::trigger::{Trigger, TriggerId};
use crate::port::document::Document;

/// In-memory document holding a flat, ordered list of trigger elements.
///
/// Selector matching is not modeled: every stored trigger is considered to
/// match whatever selector is queried, since the core treats the selector
/// as an opaque string for the adapter to interpret.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    triggers: Vec<Trigger>,
    next_id: u64,
}

impl MemoryDocument {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a trigger element and returns its id.
    pub fn add_trigger(
        &mut self,
        group: Option<&str>,
        href: Option<&str>,
        source_override: Option<&str>,
    ) -> TriggerId {
        let id = TriggerId::new(self.next_id);
        self.next_id += 1;
        self.triggers.push(Trigger::new(
            id,
            group.map(str::to_string),
            href.map(str::to_string),
            source_override.map(str::to_string),
        ));
        id
    }

    /// Removes a trigger element, simulating its removal from the page.
    pub fn remove_trigger(&mut self, id: TriggerId) {
        self.triggers.retain(|trigger| trigger.id() != id);
    }
}

impl Document for MemoryDocument {
    fn select(&self, _selector: &str) -> Vec<Trigger> {
        self.triggers.clone()
    }

    fn group_members(&self, _attribute: &str, name: &str) -> Vec<Trigger> {
        self.triggers
            .iter()
            .filter(|trigger| trigger.group_name() == Some(name))
            .cloned()
            .collect()
    }

    fn find(&self, id: TriggerId) -> Option<Trigger> {
        self.triggers
            .iter()
            .find(|trigger| trigger.id() == id)
            .cloned()
    }
}
