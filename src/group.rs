// SPDX-License-Identifier: MPL-2.0
//! Group construction and wraparound navigation.
//!
//! A [`GroupIndex`] is built fresh on every activation from the activated
//! trigger and its same-group siblings, and then navigated in place:
//! `previous`/`next` only move the position, they never rebuild the source
//! list. A new activation replaces the whole index.

use crate::config::Config;
use crate::domain::trigger::Trigger;
use crate::port::document::Document;

/// Navigation direction through a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Move towards the start, wrapping to the last item.
    Previous,
    /// Move towards the end, wrapping to the first item.
    Next,
}

/// Ordered source list for one viewing session plus the current position.
///
/// Invariant: the list is non-empty and `position < sources.len()` for the
/// whole lifetime of the value, so wraparound arithmetic can never go out
/// of bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupIndex {
    sources: Vec<String>,
    position: usize,
}

impl GroupIndex {
    /// Creates a group index from an explicit source list.
    ///
    /// Returns `None` for an empty list. A `position` past the end defaults
    /// to `0`, mirroring the "activated trigger not found" fallback.
    #[must_use]
    pub fn new(sources: Vec<String>, position: usize) -> Option<Self> {
        if sources.is_empty() {
            return None;
        }
        let position = if position < sources.len() { position } else { 0 };
        Some(Self { sources, position })
    }

    /// Builds the group index for an activated trigger.
    ///
    /// The group is the activated trigger alone when it carries no group
    /// name, otherwise every trigger in the document sharing that exact
    /// name, in document order. Each member contributes its source string
    /// (override attribute preferred over the native link target); members
    /// without any source are skipped. The position is the activated
    /// trigger's index within the group, defaulting to `0` when it cannot
    /// be found.
    ///
    /// Returns `None` when no member has a source, in which case the
    /// activation is ignored by the caller.
    #[must_use]
    pub fn from_activation<D: Document>(
        document: &D,
        config: &Config,
        trigger: &Trigger,
    ) -> Option<Self> {
        let members = match trigger.group_name() {
            Some(name) => document.group_members(&config.group_attribute, name),
            None => vec![trigger.clone()],
        };

        let mut sources = Vec::with_capacity(members.len());
        let mut position = 0;
        for member in &members {
            if let Some(source) = member.source() {
                if member.id() == trigger.id() {
                    position = sources.len();
                }
                sources.push(source.to_string());
            }
        }

        Self::new(sources, position)
    }

    /// Moves the position one step in the given direction, wrapping at
    /// either end. The source list is untouched.
    pub fn advance(&mut self, direction: Direction) {
        self.position = match direction {
            Direction::Previous => {
                if self.position == 0 {
                    self.sources.len() - 1
                } else {
                    self.position - 1
                }
            }
            Direction::Next => {
                if self.position == self.sources.len() - 1 {
                    0
                } else {
                    self.position + 1
                }
            }
        };
    }

    /// Returns the source string at the current position.
    #[must_use]
    pub fn current(&self) -> &str {
        &self.sources[self.position]
    }

    /// Returns the current position (0-indexed).
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the number of sources in the group.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Always `false`; present for API completeness alongside [`len`](Self::len).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}
