//! Vitrine Accessibility Core
//!
//! Platform-agnostic accessibility preferences controller for the Vitrine
//! portfolio site. This crate holds all preference, panel, and speech-session
//! logic without any DOM or platform-specific dependencies; the hosting
//! environment supplies the storage, speech, and page collaborators.
#![forbid(unsafe_code)]

pub mod constants;
pub mod controller;
pub mod input;
pub mod page;
pub mod panel;
pub mod prefs;
pub mod speech;
pub mod store;

// Re-export commonly used types
pub use controller::{AccessibilityController, SpeechState};
pub use input::{Shortcut, shortcut_for};
pub use page::{NodeId, PageSurface, PanelControl, ReadTarget, ReadableNode};
pub use panel::PanelState;
pub use prefs::{AccessibilityPrefs, Mode, clamp_font_percent};
pub use speech::{SpeechDriver, SpeechError, UtteranceRequest};
pub use store::{MemoryStore, PreferenceStore, StoreError};
