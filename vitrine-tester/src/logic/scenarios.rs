//! Scripted controller scenarios mirroring the site's testable properties.

use std::time::Instant;

use vitrine_a11y::{
    AccessibilityPrefs, Mode, PanelControl, PreferenceStore, ReadTarget, Shortcut, SpeechState,
};

use super::harness::LogicHarness;
use super::reports::{Check, ScenarioReport};

type ScenarioFn = fn(&mut LogicHarness) -> Vec<Check>;

pub struct LogicScenario {
    pub name: &'static str,
    pub summary: &'static str,
    run: ScenarioFn,
}

const CATALOG: &[LogicScenario] = &[
    LogicScenario {
        name: "font-sweep",
        summary: "Font stepping respects the 80-150 domain",
        run: font_sweep,
    },
    LogicScenario {
        name: "contrast-exclusion",
        summary: "High contrast and dark mode displace each other",
        run: contrast_exclusion,
    },
    LogicScenario {
        name: "reset-roundtrip",
        summary: "Reset deletes the record and restores defaults",
        run: reset_roundtrip,
    },
    LogicScenario {
        name: "persistence-roundtrip",
        summary: "A saved record survives a reload",
        run: persistence_roundtrip,
    },
    LogicScenario {
        name: "speech-preempt",
        summary: "Hover reading supersedes the in-flight utterance",
        run: speech_preempt,
    },
    LogicScenario {
        name: "speech-unavailable",
        summary: "Missing speech capability rolls the toggle back",
        run: speech_unavailable,
    },
    LogicScenario {
        name: "panel-dismiss",
        summary: "Panel closes on close control, outside click, and Escape",
        run: panel_dismiss,
    },
    LogicScenario {
        name: "smoke",
        summary: "One quick pass over every subsystem",
        run: smoke,
    },
];

#[must_use]
pub fn find_scenario(name: &str) -> Option<&'static LogicScenario> {
    CATALOG
        .iter()
        .find(|scenario| scenario.name.eq_ignore_ascii_case(name))
}

#[must_use]
pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    CATALOG
        .iter()
        .map(|scenario| (scenario.name, scenario.summary))
        .collect()
}

#[must_use]
pub fn run_scenario(scenario: &LogicScenario) -> ScenarioReport {
    let mut harness = LogicHarness::new();
    let start = Instant::now();
    let checks = (scenario.run)(&mut harness);
    ScenarioReport::from_checks(scenario.name, start.elapsed().as_millis(), checks)
}

fn check(checks: &mut Vec<Check>, name: &str, passed: bool, detail: &str) {
    let detail = if passed { "" } else { detail };
    checks.push(Check::new(name, passed, detail));
}

fn font_sweep(h: &mut LogicHarness) -> Vec<Check> {
    let mut checks = Vec::new();
    for _ in 0..5 {
        h.ctrl.increase_font();
    }
    check(
        &mut checks,
        "five increases reach the ceiling",
        h.ctrl.prefs().font_size_percent == 150,
        &format!("got {}", h.ctrl.prefs().font_size_percent),
    );

    let _ = h.store.clear();
    h.ctrl.increase_font();
    check(
        &mut checks,
        "increase at the ceiling is a no-op",
        h.ctrl.prefs().font_size_percent == 150 && h.store.record().is_none(),
        "state or store changed at the ceiling",
    );

    for _ in 0..20 {
        h.ctrl.decrease_font();
    }
    check(
        &mut checks,
        "decrease bottoms out at the floor",
        h.ctrl.prefs().font_size_percent == 80,
        &format!("got {}", h.ctrl.prefs().font_size_percent),
    );
    check(
        &mut checks,
        "percentage stays a multiple of ten",
        h.ctrl.prefs().font_size_percent % 10 == 0,
        &format!("got {}", h.ctrl.prefs().font_size_percent),
    );

    h.ctrl.reset_font();
    check(
        &mut checks,
        "font reset returns to 100 and persists",
        h.page.font.get() == 100
            && h.store.record().map(|r| r.font_size_percent) == Some(100),
        "reset did not apply or persist",
    );
    checks
}

fn contrast_exclusion(h: &mut LogicHarness) -> Vec<Check> {
    let mut checks = Vec::new();
    h.ctrl.set_mode(Mode::DarkMode, true);
    check(
        &mut checks,
        "dark mode marker set",
        h.page.has_marker(Mode::DarkMode),
        "marker missing",
    );

    h.ctrl.set_mode(Mode::HighContrast, true);
    check(
        &mut checks,
        "enabling high contrast clears dark mode",
        h.page.has_marker(Mode::HighContrast)
            && !h.page.has_marker(Mode::DarkMode)
            && !h.page.is_checked(PanelControl::Mode(Mode::DarkMode)),
        "dark mode still active",
    );

    h.ctrl.set_mode(Mode::DarkMode, true);
    check(
        &mut checks,
        "symmetric in the other direction",
        h.page.has_marker(Mode::DarkMode) && !h.page.has_marker(Mode::HighContrast),
        "high contrast still active",
    );

    let record = h.store.record().unwrap_or_default();
    check(
        &mut checks,
        "record never holds both flags",
        !(record.high_contrast && record.dark_mode),
        "both flags persisted",
    );
    checks
}

fn reset_roundtrip(h: &mut LogicHarness) -> Vec<Check> {
    let mut checks = Vec::new();
    h.ctrl.increase_font();
    h.ctrl.set_mode(Mode::HighlightLinks, true);
    h.ctrl.set_mode(Mode::DarkMode, true);
    h.ctrl.set_speech_enabled(true);

    h.ctrl.reset_preferences();
    check(
        &mut checks,
        "record deleted entirely",
        h.store.record().is_none(),
        "a record is still present",
    );
    check(
        &mut checks,
        "speech forced off",
        h.ctrl.speech() == SpeechState::Disabled,
        "session still enabled",
    );
    check(
        &mut checks,
        "user notified synchronously",
        h.page.notices.borrow().len() == 1,
        "expected exactly one notice",
    );

    h.ctrl.load_preferences();
    check(
        &mut checks,
        "reload after reset yields defaults",
        *h.ctrl.prefs() == AccessibilityPrefs::default(),
        "non-default state after reset",
    );
    checks
}

fn persistence_roundtrip(h: &mut LogicHarness) -> Vec<Check> {
    let mut checks = Vec::new();
    h.ctrl.increase_font();
    h.ctrl.increase_font();
    h.ctrl.set_mode(Mode::IncreasedSpacing, true);
    h.ctrl.set_mode(Mode::HighContrast, true);

    let mut reloaded = h.reload();
    reloaded.ctrl.load_preferences();
    check(
        &mut checks,
        "font restored",
        reloaded.page.font.get() == 120,
        &format!("got {}", reloaded.page.font.get()),
    );
    check(
        &mut checks,
        "markers restored",
        reloaded.page.has_marker(Mode::IncreasedSpacing)
            && reloaded.page.has_marker(Mode::HighContrast),
        "markers missing after reload",
    );
    check(
        &mut checks,
        "controls synchronized",
        reloaded
            .page
            .is_checked(PanelControl::Mode(Mode::IncreasedSpacing)),
        "control left unchecked",
    );
    check(
        &mut checks,
        "panel starts closed",
        !reloaded.ctrl.panel().is_open(),
        "panel visibility leaked across reload",
    );
    checks
}

fn speech_preempt(h: &mut LogicHarness) -> Vec<Check> {
    let mut checks = Vec::new();
    h.ctrl.set_speech_enabled(true);
    check(
        &mut checks,
        "enable reads the whole page",
        h.ctrl.speech() == SpeechState::Speaking(ReadTarget::Page),
        &format!("state {:?}", h.ctrl.speech()),
    );

    h.ctrl.handle_readable_hover(0);
    let cancels_before = h.voice.cancels.get();
    h.ctrl.handle_readable_hover(1);
    check(
        &mut checks,
        "hover cancels the previous utterance",
        h.voice.cancels.get() > cancels_before,
        "no cancellation observed",
    );
    check(
        &mut checks,
        "only the new target is marked",
        h.page.marks() == vec![ReadTarget::Node(1)],
        &format!("marks {:?}", h.page.marks()),
    );
    check(
        &mut checks,
        "the hovered text is spoken",
        h.voice
            .spoken
            .borrow()
            .last()
            .is_some_and(|req| req.text == "Sobre mim"),
        "unexpected utterance text",
    );

    h.ctrl.handle_shortcut(Shortcut::StopReading);
    check(
        &mut checks,
        "stop shortcut tears the session down",
        h.ctrl.speech() == SpeechState::Disabled && h.page.marks().is_empty(),
        "session survived the stop shortcut",
    );
    checks
}

fn speech_unavailable(h: &mut LogicHarness) -> Vec<Check> {
    let mut checks = Vec::new();
    h.voice.available.set(false);
    h.ctrl.set_speech_enabled(true);
    check(
        &mut checks,
        "toggle rolled back",
        !h.page.is_checked(PanelControl::TextToSpeech),
        "control left checked",
    );
    check(
        &mut checks,
        "nothing persisted",
        h.store.record().is_none(),
        "a record was written",
    );
    check(
        &mut checks,
        "user notified once",
        h.page.notices.borrow().len() == 1,
        &format!("{} notices", h.page.notices.borrow().len()),
    );
    checks
}

fn panel_dismiss(h: &mut LogicHarness) -> Vec<Check> {
    let mut checks = Vec::new();
    h.ctrl.open_panel();
    check(
        &mut checks,
        "toggle opens the panel",
        h.ctrl.panel().is_open() && h.page.panel_open.get(),
        "panel did not open",
    );

    h.ctrl.handle_document_click(true);
    check(
        &mut checks,
        "inside clicks keep it open",
        h.ctrl.panel().is_open(),
        "panel closed on an inside click",
    );

    h.ctrl.handle_document_click(false);
    check(
        &mut checks,
        "outside clicks close it",
        !h.ctrl.panel().is_open(),
        "panel still open",
    );

    h.ctrl.open_panel();
    h.ctrl.handle_shortcut(Shortcut::ClosePanel);
    check(
        &mut checks,
        "escape closes it",
        !h.ctrl.panel().is_open(),
        "panel still open",
    );
    checks
}

fn smoke(h: &mut LogicHarness) -> Vec<Check> {
    let mut checks = Vec::new();
    h.ctrl.load_preferences();
    h.ctrl.open_panel();
    h.ctrl.increase_font();
    h.ctrl.set_mode(Mode::DarkMode, true);
    h.ctrl.set_speech_enabled(true);
    h.ctrl.handle_shortcut(Shortcut::StopReading);
    check(
        &mut checks,
        "controller survives a full pass",
        h.ctrl.prefs().font_size_percent == 110
            && h.ctrl.prefs().dark_mode
            && h.ctrl.speech() == SpeechState::Disabled,
        &format!("prefs {:?}", h.ctrl.prefs()),
    );

    h.ctrl.reset_preferences();
    check(
        &mut checks,
        "reset returns to a clean slate",
        *h.ctrl.prefs() == AccessibilityPrefs::default() && h.store.record().is_none(),
        "reset left residue",
    );
    checks
}
