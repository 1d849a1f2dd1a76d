//! Persisted accessibility preferences.

use serde::{Deserialize, Serialize};

use crate::constants::{
    FONT_SIZE_DEFAULT, FONT_SIZE_MAX, FONT_SIZE_MIN, FONT_SIZE_STEP, MARKER_DARK_MODE,
    MARKER_HIGH_CONTRAST, MARKER_HIGHLIGHT_LINKS, MARKER_INCREASED_SPACING,
};

/// The persisted preferences record, one instance per installation.
///
/// `high_contrast` and `dark_mode` are mutually exclusive; `set_mode` keeps
/// the invariant for in-memory mutation and [`AccessibilityPrefs::sanitized`]
/// restores it for records loaded from storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessibilityPrefs {
    pub font_size_percent: u32,
    pub high_contrast: bool,
    pub dark_mode: bool,
    pub highlight_links: bool,
    pub increased_spacing: bool,
}

impl Default for AccessibilityPrefs {
    fn default() -> Self {
        Self {
            font_size_percent: FONT_SIZE_DEFAULT,
            high_contrast: false,
            dark_mode: false,
            highlight_links: false,
            increased_spacing: false,
        }
    }
}

impl AccessibilityPrefs {
    /// Repair a record that arrived from storage.
    ///
    /// The font percentage is clamped into the valid domain and snapped to
    /// the step; if both exclusive modes are set, high contrast wins.
    #[must_use]
    pub fn sanitized(mut self) -> Self {
        self.font_size_percent = clamp_font_percent(self.font_size_percent);
        if self.high_contrast && self.dark_mode {
            self.dark_mode = false;
        }
        self
    }

    #[must_use]
    pub const fn mode(&self, mode: Mode) -> bool {
        match mode {
            Mode::HighContrast => self.high_contrast,
            Mode::DarkMode => self.dark_mode,
            Mode::HighlightLinks => self.highlight_links,
            Mode::IncreasedSpacing => self.increased_spacing,
        }
    }

    /// Set one mode flag. Enabling an exclusive mode clears its rival.
    pub fn set_mode(&mut self, mode: Mode, enabled: bool) {
        if enabled && let Some(rival) = mode.rival() {
            *self.mode_mut(rival) = false;
        }
        *self.mode_mut(mode) = enabled;
    }

    fn mode_mut(&mut self, mode: Mode) -> &mut bool {
        match mode {
            Mode::HighContrast => &mut self.high_contrast,
            Mode::DarkMode => &mut self.dark_mode,
            Mode::HighlightLinks => &mut self.highlight_links,
            Mode::IncreasedSpacing => &mut self.increased_spacing,
        }
    }
}

/// One of the four persisted accessibility modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    HighContrast,
    DarkMode,
    HighlightLinks,
    IncreasedSpacing,
}

impl Mode {
    pub const ALL: [Self; 4] = [
        Self::HighContrast,
        Self::DarkMode,
        Self::HighlightLinks,
        Self::IncreasedSpacing,
    ];

    /// The presentation marker toggled on the page body for this mode.
    #[must_use]
    pub const fn marker_class(self) -> &'static str {
        match self {
            Self::HighContrast => MARKER_HIGH_CONTRAST,
            Self::DarkMode => MARKER_DARK_MODE,
            Self::HighlightLinks => MARKER_HIGHLIGHT_LINKS,
            Self::IncreasedSpacing => MARKER_INCREASED_SPACING,
        }
    }

    /// The mode this one force-disables when enabled, if any.
    #[must_use]
    pub const fn rival(self) -> Option<Self> {
        match self {
            Self::HighContrast => Some(Self::DarkMode),
            Self::DarkMode => Some(Self::HighContrast),
            Self::HighlightLinks | Self::IncreasedSpacing => None,
        }
    }
}

/// Clamp a percentage into the font domain and snap it down to the step.
#[must_use]
pub fn clamp_font_percent(percent: u32) -> u32 {
    let clamped = percent.clamp(FONT_SIZE_MIN, FONT_SIZE_MAX);
    clamped - (clamped - FONT_SIZE_MIN) % FONT_SIZE_STEP
}
