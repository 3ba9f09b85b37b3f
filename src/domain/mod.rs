// SPDX-License-Identifier: MPL-2.0
//! Domain layer - pure value types with no external dependencies.
//!
//! # Modules
//!
//! - [`media`]: resolved media types ([`MediaDescriptor`](media::MediaDescriptor),
//!   [`VideoProvider`](media::VideoProvider), [`VideoId`](media::VideoId))
//! - [`trigger`]: trigger element snapshots ([`Trigger`](trigger::Trigger),
//!   [`TriggerId`](trigger::TriggerId))

pub mod media;
pub mod trigger;
