// SPDX-License-Identifier: MPL-2.0
//! Overlay visibility state machine.
//!
//! [`VisibilityState`] tracks the four flags the rendering surface binds to
//! (overlay, loader, media, close button) plus the group size it displays.
//! The flag sequence over a session is:
//!
//! ```text
//! Closed -> Opening/Loading -> Loaded -> (Navigating -> Loading)* -> Closed
//! ```
//!
//! Loads complete asynchronously, so a load-complete signal can arrive
//! after the session has already navigated away or closed.
//! [`load_complete`](VisibilityState::load_complete) guards against that by
//! only acting while a load is actually pending.

/// The four surface-visible flags plus the current group size.
// Allow excessive bools: this is the surface contract - four orthogonal
// visibility flags the rendering layer binds to directly.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VisibilityState {
    open: bool,
    loading: bool,
    media_visible: bool,
    close_visible: bool,
    group_size: usize,
}

impl VisibilityState {
    /// Creates the initial, fully hidden state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the overlay is shown.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Whether the loader is shown (a load is pending).
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether the media element is shown.
    #[must_use]
    pub fn is_media_visible(&self) -> bool {
        self.media_visible
    }

    /// Whether the close button is shown.
    #[must_use]
    pub fn is_close_visible(&self) -> bool {
        self.close_visible
    }

    /// Number of items in the active group, `0` while closed.
    #[must_use]
    pub fn group_size(&self) -> usize {
        self.group_size
    }

    /// Opens the overlay for a group of `group_size` items and starts the
    /// first load. Media and close button stay hidden until the load
    /// completes.
    pub fn activate(&mut self, group_size: usize) {
        self.open = true;
        self.loading = true;
        self.media_visible = false;
        self.close_visible = false;
        self.group_size = group_size;
    }

    /// Marks the pending load as complete, revealing media and close
    /// button.
    ///
    /// No-op unless a load is pending: a stale signal arriving after the
    /// user navigated away or closed must not resurrect old state.
    pub fn load_complete(&mut self) {
        if !self.loading {
            return;
        }
        self.loading = false;
        self.media_visible = true;
        self.close_visible = true;
    }

    /// Hides the current media and starts loading the next item. No-op
    /// while the overlay is closed.
    pub fn navigate(&mut self) {
        if !self.open {
            return;
        }
        self.media_visible = false;
        self.close_visible = false;
        self.loading = true;
    }

    /// Closes the overlay from any state, resetting every flag. A later
    /// [`activate`](Self::activate) starts a fresh session.
    pub fn close(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_all_hidden(state: &VisibilityState) {
        assert!(!state.is_open());
        assert!(!state.is_loading());
        assert!(!state.is_media_visible());
        assert!(!state.is_close_visible());
        assert_eq!(state.group_size(), 0);
    }

    #[test]
    fn initial_state_is_fully_hidden() {
        assert_all_hidden(&VisibilityState::new());
    }

    #[test]
    fn activate_opens_overlay_and_starts_loading() {
        let mut state = VisibilityState::new();
        state.activate(3);

        assert!(state.is_open());
        assert!(state.is_loading());
        assert!(!state.is_media_visible());
        assert!(!state.is_close_visible());
        assert_eq!(state.group_size(), 3);
    }

    #[test]
    fn load_complete_reveals_media_and_close_button() {
        let mut state = VisibilityState::new();
        state.activate(1);
        state.load_complete();

        assert!(state.is_open());
        assert!(!state.is_loading());
        assert!(state.is_media_visible());
        assert!(state.is_close_visible());
    }

    #[test]
    fn load_complete_while_closed_is_a_no_op() {
        let mut state = VisibilityState::new();
        state.load_complete();
        assert_all_hidden(&state);
    }

    #[test]
    fn stale_load_complete_after_close_is_a_no_op() {
        let mut state = VisibilityState::new();
        state.activate(2);
        state.close();
        // Late load signal from the abandoned session.
        state.load_complete();
        assert_all_hidden(&state);
    }

    #[test]
    fn load_complete_is_idempotent_once_loaded() {
        let mut state = VisibilityState::new();
        state.activate(2);
        state.load_complete();
        let loaded = state;
        state.load_complete();
        assert_eq!(state, loaded);
    }

    #[test]
    fn navigate_hides_media_and_restarts_loading() {
        let mut state = VisibilityState::new();
        state.activate(3);
        state.load_complete();
        state.navigate();

        assert!(state.is_open());
        assert!(state.is_loading());
        assert!(!state.is_media_visible());
        assert!(!state.is_close_visible());
        assert_eq!(state.group_size(), 3);
    }

    #[test]
    fn navigate_while_closed_is_a_no_op() {
        let mut state = VisibilityState::new();
        state.navigate();
        assert_all_hidden(&state);
    }

    #[test]
    fn navigate_before_load_completes_keeps_loading() {
        let mut state = VisibilityState::new();
        state.activate(3);
        // The user hit next before the first item finished loading.
        state.navigate();
        assert!(state.is_loading());
        assert!(!state.is_media_visible());
    }

    #[test]
    fn close_resets_everything_regardless_of_history() {
        let mut state = VisibilityState::new();
        state.activate(4);
        state.load_complete();
        state.navigate();
        state.load_complete();
        state.navigate();
        state.close();
        assert_all_hidden(&state);
    }
}
