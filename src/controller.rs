// SPDX-License-Identifier: MPL-2.0
//! Viewer orchestration.
//!
//! [`ViewerController`] ties the pieces together: it owns the trigger
//! registry, the active [`GroupIndex`], and the [`VisibilityState`], and
//! turns input [`Event`]s into [`Command`]s for the rendering surface. All
//! event handling runs to completion synchronously; the only suspension
//! point is between a [`Command::Render`] going out and the surface's
//! [`Event::LoadCompleted`] coming back, during which any other event may
//! interleave.
//!
//! Each controller instance is self-contained. Pages embedding several
//! independent viewers construct several controllers with distinct
//! configurations.

use crate::config::Config;
use crate::domain::media::MediaDescriptor;
use crate::domain::trigger::TriggerId;
use crate::group::{Direction, GroupIndex};
use crate::port::document::Document;
use crate::registry::TriggerRegistry;
use crate::resolver::{self, ResolveError};
use crate::visibility::VisibilityState;

/// Input events the embedding application feeds into the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The document subtree changed; re-scan for unbound triggers.
    DocumentMutated,
    /// A bound trigger was activated (e.g. clicked).
    TriggerActivated(TriggerId),
    /// The user asked for the previous or next item in the group.
    Navigate(Direction),
    /// The rendering surface finished loading the last requested render.
    LoadCompleted,
    /// The user asked to close the viewer.
    CloseRequested,
    /// The viewing window's content size changed.
    SurfaceResized {
        /// New content width in pixels.
        width: f32,
        /// New content height in pixels.
        height: f32,
    },
}

/// Output commands the rendering surface executes.
///
/// Alongside commands, the surface reads the visibility flags from
/// [`ViewerController::visibility`] after each event to update overlay,
/// loader, and button chrome.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Attach the activation handler to a newly discovered trigger. Emitted
    /// at most once per trigger.
    Bind(TriggerId),
    /// Remove the currently rendered media element, if any.
    ClearMedia,
    /// Render the resolved media and signal [`Event::LoadCompleted`] once
    /// it has loaded.
    Render(MediaDescriptor),
    /// The current source is a video link whose identifier could not be
    /// extracted. The surface decides how to present this; the visibility
    /// flags are left untouched.
    Unresolvable(ResolveError),
    /// Constrain the rendered media element to the given maximum size.
    /// A no-op for the surface while nothing is rendered.
    SetMaxDimensions {
        /// Maximum width in pixels.
        width: f32,
        /// Maximum height in pixels.
        height: f32,
    },
}

/// Orchestrates one viewer instance.
#[derive(Debug, Clone, Default)]
pub struct ViewerController {
    config: Config,
    registry: TriggerRegistry,
    group: Option<GroupIndex>,
    visibility: VisibilityState,
    max_dimensions: Option<(f32, f32)>,
}

impl ViewerController {
    /// Creates a controller with the given attribute configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Returns the attribute configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the current visibility flags for the surface to apply.
    #[must_use]
    pub fn visibility(&self) -> &VisibilityState {
        &self.visibility
    }

    /// Returns the active group, if a session is open.
    #[must_use]
    pub fn group(&self) -> Option<&GroupIndex> {
        self.group.as_ref()
    }

    /// Handles one input event and returns the commands it produced, in
    /// execution order.
    pub fn handle<D: Document>(&mut self, document: &D, event: Event) -> Vec<Command> {
        match event {
            Event::DocumentMutated => self
                .registry
                .scan(document, &self.config.selector)
                .into_iter()
                .map(|trigger| Command::Bind(trigger.id()))
                .collect(),
            Event::TriggerActivated(id) => self.activate(document, id),
            Event::Navigate(direction) => self.navigate(direction),
            Event::LoadCompleted => {
                self.visibility.load_complete();
                Vec::new()
            }
            Event::CloseRequested => self.close(),
            Event::SurfaceResized { width, height } => {
                self.max_dimensions = Some((width, height));
                vec![Command::SetMaxDimensions { width, height }]
            }
        }
    }

    /// Starts a fresh session from an activated trigger. The group is
    /// rebuilt from the document every time; stale data from an earlier
    /// session never leaks in.
    fn activate<D: Document>(&mut self, document: &D, id: TriggerId) -> Vec<Command> {
        let Some(trigger) = document.find(id) else {
            // The trigger left the document between activation and
            // handling; nothing sensible to show.
            return Vec::new();
        };
        let Some(group) = GroupIndex::from_activation(document, &self.config, &trigger) else {
            return Vec::new();
        };

        self.visibility.activate(group.len());
        let commands = self.render_current(&group);
        self.group = Some(group);
        commands
    }

    /// Moves within the open group and re-renders. Ignored while closed or
    /// when no group exists.
    fn navigate(&mut self, direction: Direction) -> Vec<Command> {
        if !self.visibility.is_open() {
            return Vec::new();
        }
        let Some(group) = self.group.as_mut() else {
            return Vec::new();
        };

        group.advance(direction);
        self.visibility.navigate();

        let mut commands = vec![Command::ClearMedia];
        if let Some(group) = &self.group {
            commands.extend(self.render_current(group));
        }
        commands
    }

    /// Ends the session from any state.
    fn close(&mut self) -> Vec<Command> {
        self.visibility.close();
        self.group = None;
        vec![Command::ClearMedia]
    }

    /// Resolves the group's current source into render commands, re-applying
    /// the stored maximum dimensions so a freshly rendered element is
    /// constrained immediately.
    fn render_current(&self, group: &GroupIndex) -> Vec<Command> {
        match resolver::resolve(group.current()) {
            Ok(descriptor) => {
                let mut commands = vec![Command::Render(descriptor)];
                if let Some((width, height)) = self.max_dimensions {
                    commands.push(Command::SetMaxDimensions { width, height });
                }
                commands
            }
            Err(error) => vec![Command::Unresolvable(error)],
        }
    }
}
