//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types; the
//! runtime translates platform key events into [`Key`]/[`KeyState`] pairs.
//! The demos only ever ask "is this key held" (escape closes the window), so
//! this is deliberately key-only — no pointer tracking.

use std::collections::HashSet;

/// Keyboard key identifier.
///
/// Minimal on purpose; unmapped platform keys land in `Key::Unknown` with a
/// stable platform code so state tracking still works for them.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Enter,
    Space,
    Tab,

    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    W,
    A,
    S,
    D,

    /// Platform-dependent key not represented above.
    Unknown(u32),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    Released,
}

/// Key state for a single window.
///
/// `keys_down` holds the current "is held" set; `keys_pressed` holds the
/// keys that transitioned to held during the current frame and is cleared by
/// the runtime after each `on_frame`.
#[derive(Debug, Default)]
pub struct InputState {
    keys_down: HashSet<Key>,
    keys_pressed: HashSet<Key>,
    focused: bool,
}

impl InputState {
    /// Applies a key transition.
    ///
    /// Key-repeat events arrive as repeated `Pressed` transitions; only the
    /// first one of a press is recorded in `keys_pressed`.
    pub fn apply_key(&mut self, key: Key, state: KeyState) {
        match state {
            KeyState::Pressed => {
                if self.keys_down.insert(key) {
                    self.keys_pressed.insert(key);
                }
            }
            KeyState::Released => {
                self.keys_down.remove(&key);
            }
        }
    }

    /// Applies a focus change.
    ///
    /// On focus loss the held set is cleared, otherwise a key released while
    /// another window has focus stays stuck down forever.
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
        if !focused {
            self.keys_down.clear();
        }
    }

    /// True while the key is held.
    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    /// True only on the frame the key went down.
    pub fn key_pressed(&self, key: Key) -> bool {
        self.keys_pressed.contains(&key)
    }

    pub fn focused(&self) -> bool {
        self.focused
    }

    /// Clears per-frame transitions; called by the runtime after each frame.
    pub fn end_frame(&mut self) {
        self.keys_pressed.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── press / release ───────────────────────────────────────────────────

    #[test]
    fn escape_press_sets_down_and_pressed() {
        let mut input = InputState::default();
        input.apply_key(Key::Escape, KeyState::Pressed);
        assert!(input.key_down(Key::Escape));
        assert!(input.key_pressed(Key::Escape));
    }

    #[test]
    fn other_keys_do_not_report_escape() {
        let mut input = InputState::default();
        input.apply_key(Key::Space, KeyState::Pressed);
        input.apply_key(Key::W, KeyState::Pressed);
        assert!(!input.key_down(Key::Escape));
        assert!(!input.key_pressed(Key::Escape));
    }

    #[test]
    fn release_clears_down_state() {
        let mut input = InputState::default();
        input.apply_key(Key::Escape, KeyState::Pressed);
        input.apply_key(Key::Escape, KeyState::Released);
        assert!(!input.key_down(Key::Escape));
    }

    #[test]
    fn repeat_press_is_recorded_once() {
        let mut input = InputState::default();
        input.apply_key(Key::Space, KeyState::Pressed);
        input.end_frame();
        // Key repeat: a second Pressed without a Released in between.
        input.apply_key(Key::Space, KeyState::Pressed);
        assert!(input.key_down(Key::Space));
        assert!(!input.key_pressed(Key::Space));
    }

    // ── frame transitions ─────────────────────────────────────────────────

    #[test]
    fn end_frame_clears_only_transitions() {
        let mut input = InputState::default();
        input.apply_key(Key::Escape, KeyState::Pressed);
        input.end_frame();
        assert!(input.key_down(Key::Escape));
        assert!(!input.key_pressed(Key::Escape));
    }

    // ── focus ─────────────────────────────────────────────────────────────

    #[test]
    fn focus_loss_clears_held_keys() {
        let mut input = InputState::default();
        input.set_focused(true);
        input.apply_key(Key::W, KeyState::Pressed);
        input.set_focused(false);
        assert!(!input.key_down(Key::W));
        assert!(!input.focused());
    }

    #[test]
    fn unknown_keys_track_by_code() {
        let mut input = InputState::default();
        input.apply_key(Key::Unknown(77), KeyState::Pressed);
        assert!(input.key_down(Key::Unknown(77)));
        assert!(!input.key_down(Key::Unknown(78)));
    }
}
