//! Shared recording doubles for controller tests.
#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use vitrine_a11y::{
    AccessibilityController, MemoryStore, Mode, PageSurface, PanelControl, ReadTarget,
    ReadableNode, SpeechDriver, SpeechError, UtteranceRequest,
};

pub type TestController =
    AccessibilityController<Rc<MemoryStore>, Rc<RecordingPage>, Rc<ScriptedSpeech>>;

/// Page double that mirrors live presentation state and records notices.
#[derive(Default)]
pub struct RecordingPage {
    pub font: Cell<u32>,
    pub markers: RefCell<HashSet<Mode>>,
    pub checked: RefCell<HashMap<PanelControl, bool>>,
    pub panel_open: Cell<bool>,
    pub marks: RefCell<HashSet<ReadTarget>>,
    pub notices: RefCell<Vec<String>>,
    pub readable: RefCell<Vec<ReadableNode>>,
}

impl RecordingPage {
    pub fn with_readable(texts: &[&str]) -> Self {
        let page = Self::default();
        *page.readable.borrow_mut() = texts
            .iter()
            .enumerate()
            .map(|(id, text)| ReadableNode {
                id,
                text: (*text).to_string(),
            })
            .collect();
        page
    }

    pub fn has_marker(&self, mode: Mode) -> bool {
        self.markers.borrow().contains(&mode)
    }

    pub fn is_checked(&self, control: PanelControl) -> bool {
        self.checked.borrow().get(&control).copied().unwrap_or(false)
    }

    pub fn marks(&self) -> Vec<ReadTarget> {
        self.marks.borrow().iter().copied().collect()
    }
}

impl PageSurface for RecordingPage {
    fn apply_font_size(&self, percent: u32) {
        self.font.set(percent);
    }

    fn set_marker(&self, mode: Mode, enabled: bool) {
        if enabled {
            self.markers.borrow_mut().insert(mode);
        } else {
            self.markers.borrow_mut().remove(&mode);
        }
    }

    fn set_control_checked(&self, control: PanelControl, checked: bool) {
        self.checked.borrow_mut().insert(control, checked);
    }

    fn set_panel_open(&self, open: bool) {
        self.panel_open.set(open);
    }

    fn readable_nodes(&self) -> Vec<ReadableNode> {
        self.readable.borrow().clone()
    }

    fn mark_reading(&self, target: ReadTarget) {
        self.marks.borrow_mut().insert(target);
    }

    fn clear_reading_mark(&self, target: ReadTarget) {
        self.marks.borrow_mut().remove(&target);
    }

    fn notify(&self, message: &str) {
        self.notices.borrow_mut().push(message.to_string());
    }
}

/// Speech double with scriptable availability and failure.
pub struct ScriptedSpeech {
    pub available: Cell<bool>,
    pub speaking: Cell<bool>,
    pub spoken: RefCell<Vec<UtteranceRequest>>,
    pub cancels: Cell<u32>,
    pub fail_next: Cell<bool>,
}

impl Default for ScriptedSpeech {
    fn default() -> Self {
        Self {
            available: Cell::new(true),
            speaking: Cell::new(false),
            spoken: RefCell::new(Vec::new()),
            cancels: Cell::new(0),
            fail_next: Cell::new(false),
        }
    }
}

impl ScriptedSpeech {
    pub fn last_spoken(&self) -> Option<UtteranceRequest> {
        self.spoken.borrow().last().cloned()
    }
}

impl SpeechDriver for ScriptedSpeech {
    fn is_available(&self) -> bool {
        self.available.get()
    }

    fn speak(&self, request: &UtteranceRequest) -> Result<(), SpeechError> {
        if !self.available.get() {
            return Err(SpeechError::Unavailable);
        }
        if self.fail_next.take() {
            return Err(SpeechError::Backend("scripted failure".into()));
        }
        self.spoken.borrow_mut().push(request.clone());
        self.speaking.set(true);
        Ok(())
    }

    fn cancel(&self) {
        self.cancels.set(self.cancels.get() + 1);
        self.speaking.set(false);
    }

    fn is_speaking(&self) -> bool {
        self.speaking.get()
    }
}

pub struct Harness {
    pub store: Rc<MemoryStore>,
    pub page: Rc<RecordingPage>,
    pub voice: Rc<ScriptedSpeech>,
    pub ctrl: TestController,
}

pub fn harness() -> Harness {
    harness_with_page(RecordingPage::default())
}

pub fn harness_with_page(page: RecordingPage) -> Harness {
    let store = Rc::new(MemoryStore::new());
    let page = Rc::new(page);
    let voice = Rc::new(ScriptedSpeech::default());
    let ctrl = AccessibilityController::new(store.clone(), page.clone(), voice.clone());
    Harness {
        store,
        page,
        voice,
        ctrl,
    }
}
