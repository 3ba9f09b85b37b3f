// SPDX-License-Identifier: MPL-2.0
//! Document query port.
//!
//! The [`Document`] trait is the core's read-only window onto the embedding
//! application's element tree. Adapters answer three queries: "which
//! elements match the trigger selector", "which elements share this group
//! name", and "what does this trigger look like right now". Every answer is
//! a fresh snapshot - the core never caches query results across document
//! mutations.

use crate::domain::trigger::{Trigger, TriggerId};

/// Read-only access to trigger elements in the embedder's document.
///
/// # Ordering
///
/// Both query methods must return triggers in document encounter order;
/// group navigation order is defined by it.
///
/// # Re-entrancy
///
/// Implementations must tolerate being queried from within a
/// document-mutated notification, since observer callbacks may themselves
/// insert triggers.
pub trait Document {
    /// Returns all trigger elements matching the selector, in document
    /// order. An empty result is not an error.
    fn select(&self, selector: &str) -> Vec<Trigger>;

    /// Returns all trigger elements whose `attribute` equals `name`, in
    /// document order. This deliberately searches the whole document, not
    /// just previously bound triggers.
    fn group_members(&self, attribute: &str, name: &str) -> Vec<Trigger>;

    /// Returns a fresh snapshot of one trigger, or `None` if the element
    /// has left the document.
    fn find(&self, id: TriggerId) -> Option<Trigger>;
}
