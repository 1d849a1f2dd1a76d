//! Centralized constants for the accessibility layer.
//!
//! Keeping the storage key, the font domain, and the utterance parameters
//! together ensures that behavior can only change through reviewed code, and
//! that the web shell and the QA harness agree on every fixed value.

/// Storage key holding the single persisted preferences record.
pub const PREFS_STORAGE_KEY: &str = "vitrine.a11y";

// Font scaling -------------------------------------------------------------
pub const FONT_SIZE_MIN: u32 = 80;
pub const FONT_SIZE_MAX: u32 = 150;
pub const FONT_SIZE_STEP: u32 = 10;
pub const FONT_SIZE_DEFAULT: u32 = 100;

// Spoken reading -----------------------------------------------------------
/// Spoken-language locale for all utterances. Not user-configurable.
pub const SPEECH_LANG: &str = "pt-PT";
pub const SPEECH_RATE: f32 = 0.9;
pub const SPEECH_PITCH: f32 = 1.0;
pub const SPEECH_VOLUME: f32 = 1.0;
/// Separator joining readable fragments when the whole page is read.
pub const SENTENCE_SEPARATOR: &str = ". ";

// Presentation markers (classes on the page body) --------------------------
pub const MARKER_HIGH_CONTRAST: &str = "high-contrast";
pub const MARKER_DARK_MODE: &str = "dark-mode";
pub const MARKER_HIGHLIGHT_LINKS: &str = "highlight-links";
pub const MARKER_INCREASED_SPACING: &str = "increased-spacing";
/// Class marking the element currently being read aloud.
pub const MARKER_READING: &str = "reading";
/// Class marking the accessibility panel while it is open.
pub const PANEL_ACTIVE_CLASS: &str = "active";

// User-facing notifications (fixed pt-PT locale) ---------------------------
pub const NOTICE_RESET: &str = "Configurações de acessibilidade restauradas para o padrão!";
pub const NOTICE_SPEECH_UNSUPPORTED: &str =
    "Desculpe, o seu navegador não suporta leitura de voz. Tente usar Chrome, Edge ou Firefox.";
