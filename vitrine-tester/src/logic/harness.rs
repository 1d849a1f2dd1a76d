//! In-memory collaborators for driving the controller without a browser.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use vitrine_a11y::{
    AccessibilityController, MemoryStore, Mode, PageSurface, PanelControl, ReadTarget,
    ReadableNode, SpeechDriver, SpeechError, UtteranceRequest,
};

/// Everything the page double observed, in call order.
#[derive(Debug, Clone, PartialEq)]
pub enum PageCall {
    Font(u32),
    Marker(Mode, bool),
    Control(PanelControl, bool),
    Panel(bool),
    Mark(ReadTarget),
    Unmark(ReadTarget),
    Notice(String),
}

/// Page double that mirrors live state and keeps a transcript for
/// verbose reporting.
#[derive(Default)]
pub struct TracePage {
    pub transcript: RefCell<Vec<PageCall>>,
    pub font: Cell<u32>,
    pub markers: RefCell<HashSet<Mode>>,
    pub checked: RefCell<HashMap<PanelControl, bool>>,
    pub panel_open: Cell<bool>,
    pub marks: RefCell<HashSet<ReadTarget>>,
    pub notices: RefCell<Vec<String>>,
    pub readable: RefCell<Vec<ReadableNode>>,
}

impl TracePage {
    #[must_use]
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

    #[must_use]
    pub fn has_marker(&self, mode: Mode) -> bool {
        self.markers.borrow().contains(&mode)
    }

    #[must_use]
    pub fn is_checked(&self, control: PanelControl) -> bool {
        self.checked.borrow().get(&control).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn marks(&self) -> Vec<ReadTarget> {
        self.marks.borrow().iter().copied().collect()
    }
}

impl PageSurface for TracePage {
    fn apply_font_size(&self, percent: u32) {
        self.font.set(percent);
        self.transcript.borrow_mut().push(PageCall::Font(percent));
    }

    fn set_marker(&self, mode: Mode, enabled: bool) {
        if enabled {
            self.markers.borrow_mut().insert(mode);
        } else {
            self.markers.borrow_mut().remove(&mode);
        }
        self.transcript
            .borrow_mut()
            .push(PageCall::Marker(mode, enabled));
    }

    fn set_control_checked(&self, control: PanelControl, checked: bool) {
        self.checked.borrow_mut().insert(control, checked);
        self.transcript
            .borrow_mut()
            .push(PageCall::Control(control, checked));
    }

    fn set_panel_open(&self, open: bool) {
        self.panel_open.set(open);
        self.transcript.borrow_mut().push(PageCall::Panel(open));
    }

    fn readable_nodes(&self) -> Vec<ReadableNode> {
        self.readable.borrow().clone()
    }

    fn mark_reading(&self, target: ReadTarget) {
        self.marks.borrow_mut().insert(target);
        self.transcript.borrow_mut().push(PageCall::Mark(target));
    }

    fn clear_reading_mark(&self, target: ReadTarget) {
        self.marks.borrow_mut().remove(&target);
        self.transcript.borrow_mut().push(PageCall::Unmark(target));
    }

    fn notify(&self, message: &str) {
        self.notices.borrow_mut().push(message.to_string());
        self.transcript
            .borrow_mut()
            .push(PageCall::Notice(message.to_string()));
    }
}

/// Speech double with scriptable availability.
pub struct FakeSpeech {
    pub available: Cell<bool>,
    pub speaking: Cell<bool>,
    pub spoken: RefCell<Vec<UtteranceRequest>>,
    pub cancels: Cell<u32>,
}

impl Default for FakeSpeech {
    fn default() -> Self {
        Self {
            available: Cell::new(true),
            speaking: Cell::new(false),
            spoken: RefCell::new(Vec::new()),
            cancels: Cell::new(0),
        }
    }
}

impl SpeechDriver for FakeSpeech {
    fn is_available(&self) -> bool {
        self.available.get()
    }

    fn speak(&self, request: &UtteranceRequest) -> Result<(), SpeechError> {
        if !self.available.get() {
            return Err(SpeechError::Unavailable);
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

pub type TestController =
    AccessibilityController<Rc<MemoryStore>, Rc<TracePage>, Rc<FakeSpeech>>;

pub struct LogicHarness {
    pub store: Rc<MemoryStore>,
    pub page: Rc<TracePage>,
    pub voice: Rc<FakeSpeech>,
    pub ctrl: TestController,
}

impl Default for LogicHarness {
    fn default() -> Self {
        Self::new()
    }
}

impl LogicHarness {
    /// A harness over a small readable page, mirroring the portfolio layout.
    #[must_use]
    pub fn new() -> Self {
        Self::with_page(TracePage::with_readable(&[
            "Portfólio de Design",
            "Sobre mim",
            "Os meus trabalhos",
            "Contactos",
        ]))
    }

    #[must_use]
    pub fn with_page(page: TracePage) -> Self {
        let store = Rc::new(MemoryStore::new());
        let page = Rc::new(page);
        let voice = Rc::new(FakeSpeech::default());
        let ctrl = AccessibilityController::new(store.clone(), page.clone(), voice.clone());
        Self {
            store,
            page,
            voice,
            ctrl,
        }
    }

    /// A second controller over the same store, as after a page reload.
    #[must_use]
    pub fn reload(&self) -> Self {
        let page = Rc::new(TracePage::default());
        let voice = Rc::new(FakeSpeech::default());
        let ctrl =
            AccessibilityController::new(self.store.clone(), page.clone(), voice.clone());
        Self {
            store: self.store.clone(),
            page,
            voice,
            ctrl,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trace_page_records_calls_in_order() {
        let harness = LogicHarness::new();
        let mut ctrl = harness.ctrl;
        ctrl.increase_font();
        ctrl.open_panel();
        let transcript = harness.page.transcript.borrow();
        assert_eq!(transcript[0], PageCall::Font(110));
        assert_eq!(transcript[1], PageCall::Panel(true));
    }
}
