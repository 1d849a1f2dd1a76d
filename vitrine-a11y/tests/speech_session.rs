mod common;

use common::{RecordingPage, harness, harness_with_page};
use vitrine_a11y::{
    Mode, PanelControl, PreferenceStore, ReadTarget, Shortcut, SpeechDriver, SpeechState,
};

#[test]
fn enable_without_capability_rolls_back() {
    let mut h = harness();
    h.voice.available.set(false);

    h.ctrl.set_speech_enabled(true);
    assert_eq!(h.ctrl.speech(), SpeechState::Disabled);
    assert!(!h.page.is_checked(PanelControl::TextToSpeech));
    assert_eq!(h.page.notices.borrow().len(), 1, "notified once");
    assert!(h.store.record().is_none(), "nothing persisted on failure");
    assert!(h.voice.spoken.borrow().is_empty());
}

#[test]
fn enable_reads_whole_page_in_document_order() {
    let mut h = harness_with_page(RecordingPage::with_readable(&[
        "Sobre mim",
        "Designer de interfaces",
        "Contactos",
    ]));
    h.ctrl.set_speech_enabled(true);

    assert_eq!(h.ctrl.speech(), SpeechState::Speaking(ReadTarget::Page));
    assert!(h.page.is_checked(PanelControl::TextToSpeech));
    assert_eq!(h.page.marks(), vec![ReadTarget::Page]);
    let spoken = h.voice.last_spoken().unwrap();
    assert_eq!(spoken.text, "Sobre mim. Designer de interfaces. Contactos");
    assert_eq!(spoken.lang, "pt-PT");
    assert!(h.store.record().is_some());
}

#[test]
fn enable_on_empty_page_stays_idle() {
    let mut h = harness();
    h.ctrl.set_speech_enabled(true);
    assert_eq!(h.ctrl.speech(), SpeechState::Idle);
    assert!(h.voice.spoken.borrow().is_empty());
    assert!(h.store.record().is_some(), "enable itself still persists");
}

#[test]
fn hover_preempts_in_flight_utterance() {
    let mut h = harness_with_page(RecordingPage::with_readable(&["Alpha", "Beta"]));
    h.ctrl.set_speech_enabled(true);

    h.ctrl.handle_readable_hover(0);
    assert_eq!(h.ctrl.speech(), SpeechState::Speaking(ReadTarget::Node(0)));
    assert_eq!(h.page.marks(), vec![ReadTarget::Node(0)]);

    let cancels_before = h.voice.cancels.get();
    h.ctrl.handle_readable_hover(1);
    assert!(h.voice.cancels.get() > cancels_before, "A's utterance canceled");
    assert_eq!(h.page.marks(), vec![ReadTarget::Node(1)], "A unmarked, B marked");
    assert_eq!(h.voice.last_spoken().unwrap().text, "Beta");
}

#[test]
fn utterance_end_clears_mark_and_idles() {
    let mut h = harness_with_page(RecordingPage::with_readable(&["Alpha"]));
    h.ctrl.set_speech_enabled(true);
    h.ctrl.handle_readable_hover(0);

    h.ctrl.notify_utterance_ended();
    assert_eq!(h.ctrl.speech(), SpeechState::Idle);
    assert!(h.page.marks().is_empty());
}

#[test]
fn playback_failure_idles_without_disabling() {
    let mut h = harness_with_page(RecordingPage::with_readable(&["Alpha"]));
    h.ctrl.set_speech_enabled(true);

    h.voice.fail_next.set(true);
    h.ctrl.handle_readable_hover(0);
    assert_eq!(h.ctrl.speech(), SpeechState::Idle, "idle, not disabled");
    assert!(h.page.marks().is_empty());

    h.ctrl.handle_readable_hover(0);
    assert_eq!(h.ctrl.speech(), SpeechState::Speaking(ReadTarget::Node(0)));
}

#[test]
fn disable_tears_the_session_down() {
    let mut h = harness_with_page(RecordingPage::with_readable(&["Alpha"]));
    h.ctrl.set_speech_enabled(true);
    h.ctrl.handle_readable_hover(0);

    h.ctrl.set_speech_enabled(false);
    assert_eq!(h.ctrl.speech(), SpeechState::Disabled);
    assert!(h.page.marks().is_empty());
    assert!(h.ctrl.snapshot().is_empty());
    assert!(!h.page.is_checked(PanelControl::TextToSpeech));
    assert!(!h.voice.is_speaking());
}

#[test]
fn hover_while_disabled_is_ignored() {
    let mut h = harness_with_page(RecordingPage::with_readable(&["Alpha"]));
    h.ctrl.handle_readable_hover(0);
    assert!(h.voice.spoken.borrow().is_empty());
    assert!(h.page.marks().is_empty());
}

#[test]
fn hover_outside_snapshot_is_ignored() {
    let mut h = harness_with_page(RecordingPage::with_readable(&["Alpha"]));
    h.ctrl.set_speech_enabled(true);
    let spoken_before = h.voice.spoken.borrow().len();

    h.ctrl.handle_readable_hover(7);
    assert_eq!(h.voice.spoken.borrow().len(), spoken_before);
    assert_eq!(h.ctrl.speech(), SpeechState::Speaking(ReadTarget::Page));
}

#[test]
fn snapshot_is_static_until_reenabled() {
    let mut h = harness_with_page(RecordingPage::with_readable(&["Alpha"]));
    h.ctrl.set_speech_enabled(true);
    assert_eq!(h.ctrl.snapshot().len(), 1);

    h.page
        .readable
        .borrow_mut()
        .push(vitrine_a11y::ReadableNode {
            id: 1,
            text: "Adicionado depois".into(),
        });
    h.ctrl.handle_readable_hover(1);
    assert_ne!(
        h.voice.last_spoken().unwrap().text,
        "Adicionado depois",
        "elements added after enabling are not read"
    );

    h.ctrl.set_speech_enabled(false);
    h.ctrl.set_speech_enabled(true);
    assert_eq!(h.ctrl.snapshot().len(), 2, "re-enabling re-snapshots");
}

#[test]
fn stop_shortcut_disables_and_persists() {
    let mut h = harness_with_page(RecordingPage::with_readable(&["Alpha"]));
    h.ctrl.set_speech_enabled(true);
    h.store.clear().unwrap();

    h.ctrl.handle_shortcut(Shortcut::StopReading);
    assert_eq!(h.ctrl.speech(), SpeechState::Disabled);
    assert!(!h.page.is_checked(PanelControl::TextToSpeech));
    assert!(h.store.record().is_some(), "stop persists like the control");
}

#[test]
fn stop_shortcut_when_disabled_is_inert() {
    let mut h = harness();
    h.ctrl.handle_shortcut(Shortcut::StopReading);
    assert!(h.store.record().is_none());
    assert_eq!(h.voice.cancels.get(), 0);
}

#[test]
fn read_shortcut_enables_and_reads() {
    let mut h = harness_with_page(RecordingPage::with_readable(&["Alpha"]));
    h.ctrl.handle_shortcut(Shortcut::ReadPage);
    assert_eq!(h.ctrl.speech(), SpeechState::Speaking(ReadTarget::Page));
    assert!(h.page.is_checked(PanelControl::TextToSpeech));
}

#[test]
fn reset_always_forces_disabled() {
    let mut h = harness_with_page(RecordingPage::with_readable(&["Alpha"]));
    h.ctrl.set_speech_enabled(true);
    h.ctrl.set_mode(Mode::HighContrast, true);

    h.ctrl.reset_preferences();
    assert_eq!(h.ctrl.speech(), SpeechState::Disabled);
    assert!(h.page.marks().is_empty());
    assert!(!h.page.is_checked(PanelControl::TextToSpeech));
    assert!(!h.voice.is_speaking());
}
