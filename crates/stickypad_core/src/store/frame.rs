//! Floating-window frame state machine.
//!
//! Pure state only: the host view layer owns the actual window and renders
//! whatever shape matches the current `FrameState`.

use serde::{Deserialize, Serialize};

/// Display shape of the floating widget frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameState {
    /// Full phone-shaped frame.
    #[default]
    Normal,
    /// Collapsed to a small corner chip.
    Minimized,
    /// Hidden behind a reveal button.
    Hidden,
}

impl FrameState {
    /// Stable string form used across the FFI boundary.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Minimized => "minimized",
            Self::Hidden => "hidden",
        }
    }
}

/// Frame state plus the always-on-top toggle.
///
/// All transitions are total and idempotent; there is no invalid sequence
/// of frame events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowFrame {
    state: FrameState,
    always_on_top: bool,
}

impl WindowFrame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> FrameState {
        self.state
    }

    pub fn always_on_top(&self) -> bool {
        self.always_on_top
    }

    /// Collapses the frame to the corner chip.
    pub fn minimize(&mut self) {
        self.state = FrameState::Minimized;
    }

    /// Restores the full frame from the minimized chip.
    pub fn restore(&mut self) {
        self.state = FrameState::Normal;
    }

    /// Hides the frame behind the reveal button.
    pub fn hide(&mut self) {
        self.state = FrameState::Hidden;
    }

    /// Brings the frame back from the hidden state.
    pub fn reveal(&mut self) {
        self.state = FrameState::Normal;
    }

    /// Flips the always-on-top flag and returns the new value.
    pub fn toggle_always_on_top(&mut self) -> bool {
        self.always_on_top = !self.always_on_top;
        self.always_on_top
    }
}

impl Default for WindowFrame {
    // The widget starts pinned above other windows.
    fn default() -> Self {
        Self {
            state: FrameState::Normal,
            always_on_top: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{FrameState, WindowFrame};

    #[test]
    fn starts_normal_and_pinned() {
        let frame = WindowFrame::new();
        assert_eq!(frame.state(), FrameState::Normal);
        assert!(frame.always_on_top());
    }

    #[test]
    fn minimize_restore_round_trip() {
        let mut frame = WindowFrame::new();
        frame.minimize();
        assert_eq!(frame.state(), FrameState::Minimized);
        frame.restore();
        assert_eq!(frame.state(), FrameState::Normal);
    }

    #[test]
    fn hide_reveal_round_trip() {
        let mut frame = WindowFrame::new();
        frame.hide();
        assert_eq!(frame.state(), FrameState::Hidden);
        frame.reveal();
        assert_eq!(frame.state(), FrameState::Normal);
    }

    #[test]
    fn transitions_are_idempotent() {
        let mut frame = WindowFrame::new();
        frame.minimize();
        frame.minimize();
        assert_eq!(frame.state(), FrameState::Minimized);
        frame.reveal();
        frame.reveal();
        assert_eq!(frame.state(), FrameState::Normal);
    }

    #[test]
    fn always_on_top_toggles_independently_of_shape() {
        let mut frame = WindowFrame::new();
        frame.hide();
        assert!(!frame.toggle_always_on_top());
        assert!(frame.toggle_always_on_top());
        assert_eq!(frame.state(), FrameState::Hidden);
    }
}
