// SPDX-License-Identifier: MPL-2.0
//! `ozbox` is the headless core of an embeddable media lightbox.
//!
//! Given marked-up trigger elements in a document, it tracks which ones are
//! bound, groups related triggers by a shared attribute value, resolves each
//! trigger's source string into a typed media descriptor (static image or
//! embeddable video), and sequences the overlay/loader/close visibility
//! flags around asynchronous loading.
//!
//! The core owns no rendering and no real document: the embedding
//! application implements the [`Document`](port::document::Document) port
//! over its element tree, feeds [`Event`](controller::Event)s in, and
//! executes the returned [`Command`](controller::Command)s against its
//! rendering surface.
//!
//! # Example
//!
//! ```
//! use ozbox::config::Config;
//! use ozbox::controller::{Command, Event, ViewerController};
//! use ozbox::group::Direction;
//! use ozbox::test_utils::MemoryDocument;
//!
//! let mut document = MemoryDocument::new();
//! let first = document.add_trigger(Some("holiday"), Some("beach.jpg"), None);
//! document.add_trigger(Some("holiday"), Some("sunset.jpg"), None);
//!
//! let mut viewer = ViewerController::new(Config::default());
//!
//! // Discover and bind triggers after a document change.
//! let bound = viewer.handle(&document, Event::DocumentMutated);
//! assert_eq!(bound.len(), 2);
//!
//! // A click opens the overlay and requests a render.
//! let commands = viewer.handle(&document, Event::TriggerActivated(first));
//! assert!(matches!(commands[0], Command::Render(_)));
//! assert!(viewer.visibility().is_loading());
//!
//! // The surface reports the load; media becomes visible.
//! viewer.handle(&document, Event::LoadCompleted);
//! assert!(viewer.visibility().is_media_visible());
//!
//! // Navigate wraps around the group; close ends the session.
//! viewer.handle(&document, Event::Navigate(Direction::Next));
//! viewer.handle(&document, Event::CloseRequested);
//! assert!(!viewer.visibility().is_open());
//! ```

pub mod config;
pub mod controller;
pub mod domain;
pub mod error;
pub mod group;
pub mod port;
pub mod registry;
pub mod resolver;
pub mod test_utils;
pub mod visibility;

pub use config::Config;
pub use controller::{Command, Event, ViewerController};
pub use domain::media::MediaDescriptor;
pub use error::{Error, Result};
pub use group::{Direction, GroupIndex};
pub use registry::TriggerRegistry;
pub use resolver::{resolve, ResolveError};
pub use visibility::VisibilityState;
