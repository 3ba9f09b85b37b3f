// SPDX-License-Identifier: MPL-2.0
//! Trigger discovery and exactly-once binding.
//!
//! A [`TriggerRegistry`] scans the document for elements matching the
//! configured selector and tracks which of them already have an activation
//! handler attached. Scans are re-run whenever the document mutates, and may
//! therefore return previously seen triggers any number of times; the
//! registry guarantees each trigger is reported for binding exactly once.

use crate::domain::trigger::{Trigger, TriggerId};
use crate::port::document::Document;
use std::collections::HashSet;

/// Tracks which triggers have been bound across repeated scans.
#[derive(Debug, Clone, Default)]
pub struct TriggerRegistry {
    bound: HashSet<TriggerId>,
}

impl TriggerRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Scans the document for triggers matching `selector` and returns the
    /// ones not seen before, marking them bound.
    ///
    /// Re-scanning is idempotent: a trigger already marked bound is skipped
    /// silently. Finding zero triggers is not an error and yields an empty
    /// list.
    pub fn scan<D: Document>(&mut self, document: &D, selector: &str) -> Vec<Trigger> {
        document
            .select(selector)
            .into_iter()
            .filter(|trigger| self.bound.insert(trigger.id()))
            .collect()
    }

    /// Whether a trigger has already been bound.
    #[must_use]
    pub fn is_bound(&self, id: TriggerId) -> bool {
        self.bound.contains(&id)
    }

    /// Number of triggers bound so far.
    #[must_use]
    pub fn bound_count(&self) -> usize {
        self.bound.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults;
    use crate::test_utils::MemoryDocument;

    #[test]
    fn first_scan_binds_every_match() {
        let mut document = MemoryDocument::new();
        let a = document.add_trigger(None, Some("a.jpg"), None);
        let b = document.add_trigger(Some("g"), Some("b.jpg"), None);

        let mut registry = TriggerRegistry::new();
        let bound = registry.scan(&document, defaults::SELECTOR);

        assert_eq!(
            bound.iter().map(Trigger::id).collect::<Vec<_>>(),
            vec![a, b]
        );
        assert!(registry.is_bound(a));
        assert!(registry.is_bound(b));
    }

    #[test]
    fn rescanning_the_same_document_binds_nothing() {
        let mut document = MemoryDocument::new();
        document.add_trigger(None, Some("a.jpg"), None);

        let mut registry = TriggerRegistry::new();
        assert_eq!(registry.scan(&document, defaults::SELECTOR).len(), 1);
        assert!(registry.scan(&document, defaults::SELECTOR).is_empty());
        assert!(registry.scan(&document, defaults::SELECTOR).is_empty());
        assert_eq!(registry.bound_count(), 1);
    }

    #[test]
    fn scan_after_mutation_binds_only_new_triggers() {
        let mut document = MemoryDocument::new();
        let a = document.add_trigger(None, Some("a.jpg"), None);

        let mut registry = TriggerRegistry::new();
        registry.scan(&document, defaults::SELECTOR);

        let b = document.add_trigger(None, Some("b.jpg"), None);
        let bound = registry.scan(&document, defaults::SELECTOR);

        assert_eq!(bound.iter().map(Trigger::id).collect::<Vec<_>>(), vec![b]);
        assert!(registry.is_bound(a));
        assert_eq!(registry.bound_count(), 2);
    }

    #[test]
    fn empty_document_scan_is_not_an_error() {
        let document = MemoryDocument::new();
        let mut registry = TriggerRegistry::new();
        assert!(registry.scan(&document, defaults::SELECTOR).is_empty());
        assert_eq!(registry.bound_count(), 0);
    }
}
