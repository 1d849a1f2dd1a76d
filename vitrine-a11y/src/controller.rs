//! The accessibility preferences controller.
//!
//! One instance owns the in-memory preferences, the panel visibility state,
//! and the speech-reading session, and coordinates the three injected
//! collaborators: the preference store, the page surface, and the speech
//! driver. Every operation runs to completion on the event thread that
//! invoked it; nothing here blocks on speech playback.

use crate::constants::{
    FONT_SIZE_DEFAULT, FONT_SIZE_MAX, FONT_SIZE_MIN, FONT_SIZE_STEP, NOTICE_RESET,
    NOTICE_SPEECH_UNSUPPORTED, SENTENCE_SEPARATOR,
};
use crate::input::Shortcut;
use crate::page::{NodeId, PageSurface, PanelControl, ReadTarget, ReadableNode};
use crate::panel::PanelState;
use crate::prefs::{AccessibilityPrefs, Mode};
use crate::speech::{SpeechDriver, UtteranceRequest};
use crate::store::PreferenceStore;

/// Lifecycle of the speech-reading session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpeechState {
    /// Reading mode is off.
    #[default]
    Disabled,
    /// Reading mode is on, nothing is being vocalized.
    Idle,
    /// An utterance for this target is in flight and carries the reading mark.
    Speaking(ReadTarget),
}

pub struct AccessibilityController<S, P, V> {
    store: S,
    page: P,
    voice: V,
    prefs: AccessibilityPrefs,
    panel: PanelState,
    speech: SpeechState,
    /// Readable content captured when reading was enabled. Elements added to
    /// the page afterwards are not part of the session.
    snapshot: Vec<ReadableNode>,
}

impl<S, P, V> AccessibilityController<S, P, V>
where
    S: PreferenceStore,
    P: PageSurface,
    V: SpeechDriver,
{
    #[must_use]
    pub fn new(store: S, page: P, voice: V) -> Self {
        Self {
            store,
            page,
            voice,
            prefs: AccessibilityPrefs::default(),
            panel: PanelState::Closed,
            speech: SpeechState::Disabled,
            snapshot: Vec::new(),
        }
    }

    // Preferences lifecycle ------------------------------------------------

    /// Read the stored record once and re-apply it to the page.
    ///
    /// A missing or unreadable record means "no preferences set": everything
    /// stays at its default and nothing is surfaced to the user.
    pub fn load_preferences(&mut self) {
        self.prefs = match self.store.load() {
            Ok(Some(prefs)) => prefs.sanitized(),
            Ok(None) => AccessibilityPrefs::default(),
            Err(err) => {
                log::warn!("failed to read stored preferences: {err}");
                AccessibilityPrefs::default()
            }
        };
        self.apply_prefs();
    }

    /// Overwrite the stored record with the current state. Store failures
    /// are logged and absorbed.
    pub fn save_preferences(&self) {
        if let Err(err) = self.store.save(&self.prefs) {
            log::warn!("failed to persist preferences: {err}");
        }
    }

    /// Return everything to defaults: markers and controls cleared, font back
    /// to 100, speech session torn down, stored record deleted (not zeroed),
    /// and a blocking confirmation raised.
    pub fn reset_preferences(&mut self) {
        self.prefs = AccessibilityPrefs::default();
        self.apply_prefs();
        self.teardown_speech();
        if let Err(err) = self.store.clear() {
            log::warn!("failed to delete stored preferences: {err}");
        }
        self.page.notify(NOTICE_RESET);
    }

    fn apply_prefs(&self) {
        self.page.apply_font_size(self.prefs.font_size_percent);
        for mode in Mode::ALL {
            let enabled = self.prefs.mode(mode);
            self.page.set_marker(mode, enabled);
            self.page.set_control_checked(PanelControl::Mode(mode), enabled);
        }
    }

    // Font scaling ---------------------------------------------------------

    /// Step the font up by 10. A strict no-op at the 150 ceiling: no page
    /// mutation and no persistence call.
    pub fn increase_font(&mut self) {
        if self.prefs.font_size_percent >= FONT_SIZE_MAX {
            return;
        }
        self.prefs.font_size_percent += FONT_SIZE_STEP;
        self.page.apply_font_size(self.prefs.font_size_percent);
        self.save_preferences();
    }

    /// Step the font down by 10. A strict no-op at the 80 floor.
    pub fn decrease_font(&mut self) {
        if self.prefs.font_size_percent <= FONT_SIZE_MIN {
            return;
        }
        self.prefs.font_size_percent -= FONT_SIZE_STEP;
        self.page.apply_font_size(self.prefs.font_size_percent);
        self.save_preferences();
    }

    /// Unconditionally return the font to 100%.
    pub fn reset_font(&mut self) {
        self.prefs.font_size_percent = FONT_SIZE_DEFAULT;
        self.page.apply_font_size(self.prefs.font_size_percent);
        self.save_preferences();
    }

    // Mode toggles ---------------------------------------------------------

    /// Toggle one accessibility mode. Enabling high contrast force-disables
    /// dark mode and vice versa; the displaced mode's control is unchecked.
    /// Every call, either direction, persists.
    pub fn set_mode(&mut self, mode: Mode, enabled: bool) {
        if enabled
            && let Some(rival) = mode.rival()
            && self.prefs.mode(rival)
        {
            self.page.set_marker(rival, false);
            self.page.set_control_checked(PanelControl::Mode(rival), false);
        }
        self.prefs.set_mode(mode, enabled);
        self.page.set_marker(mode, enabled);
        self.save_preferences();
    }

    // Panel visibility -----------------------------------------------------

    pub fn open_panel(&mut self) {
        if self.panel.open() {
            self.page.set_panel_open(true);
        }
    }

    pub fn close_panel(&mut self) {
        if self.panel.close() {
            self.page.set_panel_open(false);
        }
    }

    /// A document-level pointer event; closes the panel when the target lies
    /// outside both the panel and its toggle control.
    pub fn handle_document_click(&mut self, inside_panel_or_toggle: bool) {
        if !inside_panel_or_toggle {
            self.close_panel();
        }
    }

    // Speech-reading session -----------------------------------------------

    /// Driven by the text-to-speech control. Enabling without the capability
    /// rolls the control back, notifies once, and persists nothing.
    pub fn set_speech_enabled(&mut self, enabled: bool) {
        if enabled {
            self.enable_speech();
        } else {
            self.disable_speech();
        }
    }

    fn enable_speech(&mut self) {
        if !self.voice.is_available() {
            log::warn!("speech reading requested but synthesis is unavailable");
            self.page
                .set_control_checked(PanelControl::TextToSpeech, false);
            self.page.notify(NOTICE_SPEECH_UNSUPPORTED);
            return;
        }
        self.page
            .set_control_checked(PanelControl::TextToSpeech, true);
        self.snapshot = self.page.readable_nodes();
        if self.speech == SpeechState::Disabled {
            self.speech = SpeechState::Idle;
        }
        self.read_page();
        self.save_preferences();
    }

    fn disable_speech(&mut self) {
        self.teardown_speech();
        self.save_preferences();
    }

    fn teardown_speech(&mut self) {
        self.voice.cancel();
        self.clear_current_mark();
        self.speech = SpeechState::Disabled;
        self.snapshot.clear();
        self.page
            .set_control_checked(PanelControl::TextToSpeech, false);
    }

    /// Read the whole snapshot aloud, sentence-separated, marking the page
    /// target for the duration.
    pub fn read_page(&mut self) {
        if self.speech == SpeechState::Disabled {
            return;
        }
        let text = self
            .snapshot
            .iter()
            .map(|node| node.text.as_str())
            .collect::<Vec<_>>()
            .join(SENTENCE_SEPARATOR);
        if text.is_empty() {
            return;
        }
        self.begin_utterance(ReadTarget::Page, text);
    }

    /// Pointer-hover over a readable element preempts the current utterance.
    pub fn handle_readable_hover(&mut self, node: NodeId) {
        if self.speech == SpeechState::Disabled {
            return;
        }
        let Some(text) = self
            .snapshot
            .iter()
            .find(|entry| entry.id == node)
            .map(|entry| entry.text.clone())
        else {
            return;
        };
        if text.is_empty() {
            return;
        }
        self.begin_utterance(ReadTarget::Node(node), text);
    }

    fn begin_utterance(&mut self, target: ReadTarget, text: String) {
        self.clear_current_mark();
        self.voice.cancel();
        match self.voice.speak(&UtteranceRequest::spoken(text)) {
            Ok(()) => {
                self.page.mark_reading(target);
                self.speech = SpeechState::Speaking(target);
            }
            Err(err) => {
                log::error!("failed to start utterance: {err}");
                self.speech = SpeechState::Idle;
            }
        }
    }

    fn clear_current_mark(&mut self) {
        if let SpeechState::Speaking(target) = self.speech {
            self.page.clear_reading_mark(target);
            self.speech = SpeechState::Idle;
        }
    }

    /// The in-flight utterance finished vocalizing.
    pub fn notify_utterance_ended(&mut self) {
        self.clear_current_mark();
    }

    /// The in-flight utterance failed. Logged for diagnostics; the session
    /// stays enabled and returns to idle.
    pub fn notify_utterance_failed(&mut self, reason: &str) {
        log::error!("speech playback failed: {reason}");
        self.clear_current_mark();
    }

    // Keyboard shortcuts ---------------------------------------------------

    pub fn handle_shortcut(&mut self, shortcut: Shortcut) {
        match shortcut {
            Shortcut::StopReading => {
                if self.speech != SpeechState::Disabled {
                    self.disable_speech();
                }
            }
            Shortcut::ReadPage => self.enable_speech(),
            Shortcut::ClosePanel => self.close_panel(),
        }
    }

    // Accessors ------------------------------------------------------------

    #[must_use]
    pub fn prefs(&self) -> &AccessibilityPrefs {
        &self.prefs
    }

    #[must_use]
    pub fn panel(&self) -> PanelState {
        self.panel
    }

    #[must_use]
    pub fn speech(&self) -> SpeechState {
        self.speech
    }

    #[must_use]
    pub fn speech_enabled(&self) -> bool {
        self.speech != SpeechState::Disabled
    }

    #[must_use]
    pub fn snapshot(&self) -> &[ReadableNode] {
        &self.snapshot
    }

    #[must_use]
    pub fn page(&self) -> &P {
        &self.page
    }

    #[must_use]
    pub fn voice(&self) -> &V {
        &self.voice
    }
}
