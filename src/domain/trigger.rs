// SPDX-License-Identifier: MPL-2.0
//! Trigger element snapshots.
//!
//! A [`Trigger`] is the core's view of one document element that opens the
//! viewer when activated: an opaque identity plus the three attributes the
//! widget reads. The snapshot is produced fresh by the document port on
//! every query, so it never goes stale across document mutations.

/// Opaque handle identifying a trigger element across document queries.
///
/// The embedding adapter assigns each trigger element a stable id; the core
/// only ever compares ids for equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TriggerId(u64);

impl TriggerId {
    /// Creates a trigger id from the adapter's stable element key.
    #[must_use]
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the underlying key.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Snapshot of one trigger element's relevant attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trigger {
    id: TriggerId,
    group: Option<String>,
    href: Option<String>,
    source_override: Option<String>,
}

impl Trigger {
    /// Creates a trigger snapshot.
    ///
    /// `group` is the raw group-name attribute value (possibly empty),
    /// `href` the element's native link target, and `source_override` the
    /// custom source attribute value.
    #[must_use]
    pub fn new(
        id: TriggerId,
        group: Option<String>,
        href: Option<String>,
        source_override: Option<String>,
    ) -> Self {
        Self {
            id,
            group,
            href,
            source_override,
        }
    }

    /// Returns the trigger's identity.
    #[must_use]
    pub fn id(&self) -> TriggerId {
        self.id
    }

    /// Returns the group name, treating an absent or empty attribute as
    /// "not grouped". An empty attribute value marks an element as a
    /// trigger without putting it in any group.
    #[must_use]
    pub fn group_name(&self) -> Option<&str> {
        self.group.as_deref().filter(|name| !name.is_empty())
    }

    /// Returns the media source string, preferring the override attribute
    /// over the native link target.
    #[must_use]
    pub fn source(&self) -> Option<&str> {
        self.source_override.as_deref().or(self.href.as_deref())
    }
}
