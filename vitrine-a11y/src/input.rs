// Centralized keyboard shortcut mapping.
// Key names follow the DOM `KeyboardEvent.key` values the web shell receives.

/// Global shortcuts the page listens for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// Ctrl+Shift+S: stop speech reading and uncheck its control.
    StopReading,
    /// Ctrl+Shift+R: start reading the page aloud.
    ReadPage,
    /// Escape: dismiss the accessibility panel when it is open.
    ClosePanel,
}

/// Map a keydown to a shortcut, if any.
///
/// The letter keys arrive uppercase because Shift is held. Escape dismisses
/// the panel regardless of modifiers.
#[must_use]
pub fn shortcut_for(key: &str, ctrl: bool, shift: bool) -> Option<Shortcut> {
    match (key, ctrl, shift) {
        ("S", true, true) => Some(Shortcut::StopReading),
        ("R", true, true) => Some(Shortcut::ReadPage),
        ("Escape", _, _) => Some(Shortcut::ClosePanel),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chords_map() {
        assert_eq!(shortcut_for("S", true, true), Some(Shortcut::StopReading));
        assert_eq!(shortcut_for("R", true, true), Some(Shortcut::ReadPage));
        assert_eq!(shortcut_for("Escape", false, false), Some(Shortcut::ClosePanel));
        assert_eq!(shortcut_for("Escape", true, false), Some(Shortcut::ClosePanel));
    }

    #[test]
    fn partial_chords_do_not_map() {
        assert_eq!(shortcut_for("S", true, false), None);
        assert_eq!(shortcut_for("S", false, true), None);
        assert_eq!(shortcut_for("r", true, true), None);
        assert_eq!(shortcut_for("Enter", false, false), None);
    }
}
