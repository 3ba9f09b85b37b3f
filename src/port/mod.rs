// SPDX-License-Identifier: MPL-2.0
//! Ports implemented by the embedding application.
//!
//! The core never touches a real document tree. The embedder provides a
//! [`Document`](document::Document) adapter over whatever DOM-like structure
//! it renders into, and consumes the controller's
//! [`Command`](crate::controller::Command) output on the other side.

pub mod document;
