//! DOM-backed page surface.
//!
//! Owns the mapping between the controller's abstract handles (modes,
//! controls, readable-node ids) and the concrete elements of the portfolio
//! markup.

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, HtmlInputElement};

use vitrine_a11y::constants::{MARKER_READING, PANEL_ACTIVE_CLASS};
use vitrine_a11y::{Mode, NodeId, PageSurface, PanelControl, ReadTarget, ReadableNode};

use crate::dom;

// Fixed element ids of the accessibility UI, part of the page contract.
pub const PANEL_ID: &str = "accessibility-panel";
pub const PANEL_TOGGLE_ID: &str = "accessibility-btn";
pub const PANEL_CLOSE_ID: &str = "close-accessibility";
pub const FONT_INCREASE_ID: &str = "increase-font";
pub const FONT_DECREASE_ID: &str = "decrease-font";
pub const FONT_RESET_ID: &str = "reset-font";
pub const RESET_ALL_ID: &str = "reset-accessibility";

/// Selector for the elements considered readable by the speech session.
pub const READABLE_SELECTOR: &str = "h1, h2, h3, p, li, button, a";

/// The checkbox id backing each panel control.
#[must_use]
pub const fn control_id(control: PanelControl) -> &'static str {
    match control {
        PanelControl::Mode(Mode::HighContrast) => "high-contrast",
        PanelControl::Mode(Mode::DarkMode) => "dark-mode",
        PanelControl::Mode(Mode::HighlightLinks) => "highlight-links",
        PanelControl::Mode(Mode::IncreasedSpacing) => "line-height",
        PanelControl::TextToSpeech => "text-to-speech",
    }
}

/// `PageSurface` over the live document.
#[derive(Default)]
pub struct DomPage {
    /// Element handles for the current readable snapshot, indexed by
    /// [`NodeId`]. Refreshed by `readable_nodes`.
    snapshot: RefCell<Vec<HtmlElement>>,
}

impl DomPage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Handles for the current snapshot, for hover wiring.
    #[must_use]
    pub fn snapshot_elements(&self) -> Vec<(NodeId, HtmlElement)> {
        self.snapshot
            .borrow()
            .iter()
            .cloned()
            .enumerate()
            .collect()
    }

    /// The region marked while the whole page is read: `<main>` when
    /// present, the body otherwise.
    fn primary_region() -> Option<Element> {
        let doc = dom::document();
        if let Ok(Some(main)) = doc.query_selector("main") {
            return Some(main);
        }
        doc.body().map(Element::from)
    }

    fn target_element(&self, target: ReadTarget) -> Option<Element> {
        match target {
            ReadTarget::Page => Self::primary_region(),
            ReadTarget::Node(id) => self
                .snapshot
                .borrow()
                .get(id)
                .cloned()
                .map(Element::from),
        }
    }
}

impl PageSurface for DomPage {
    fn apply_font_size(&self, percent: u32) {
        if let Some(root) = dom::document()
            .document_element()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        {
            let _ = root
                .style()
                .set_property("font-size", &format!("{percent}%"));
        }
    }

    fn set_marker(&self, mode: Mode, enabled: bool) {
        let Some(body) = dom::document().body() else {
            return;
        };
        let _ = if enabled {
            body.class_list().add_1(mode.marker_class())
        } else {
            body.class_list().remove_1(mode.marker_class())
        };
    }

    fn set_control_checked(&self, control: PanelControl, checked: bool) {
        if let Some(input) = dom::document()
            .get_element_by_id(control_id(control))
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        {
            input.set_checked(checked);
        }
    }

    fn set_panel_open(&self, open: bool) {
        let doc = dom::document();
        if let Some(panel) = doc.get_element_by_id(PANEL_ID) {
            let _ = if open {
                panel.class_list().add_1(PANEL_ACTIVE_CLASS)
            } else {
                panel.class_list().remove_1(PANEL_ACTIVE_CLASS)
            };
            let _ = panel.set_attribute("aria-hidden", if open { "false" } else { "true" });
        }
        if let Some(toggle) = doc.get_element_by_id(PANEL_TOGGLE_ID) {
            let _ = toggle.set_attribute("aria-expanded", if open { "true" } else { "false" });
        }
    }

    fn readable_nodes(&self) -> Vec<ReadableNode> {
        let mut nodes = Vec::new();
        let mut handles = Vec::new();

        let Some(root) = Self::primary_region() else {
            self.snapshot.replace(Vec::new());
            return nodes;
        };
        let Ok(list) = root.query_selector_all(READABLE_SELECTOR) else {
            self.snapshot.replace(Vec::new());
            return nodes;
        };

        for index in 0..list.length() {
            let Some(el) = list.get(index).and_then(|node| node.dyn_into::<HtmlElement>().ok())
            else {
                continue;
            };
            // Skip hidden elements and the panel's own controls.
            if el.offset_parent().is_none() {
                continue;
            }
            if let Ok(Some(_)) = el.closest(&format!("#{PANEL_ID}")) {
                continue;
            }
            let text = el.text_content().unwrap_or_default().trim().to_string();
            if text.is_empty() {
                continue;
            }
            nodes.push(ReadableNode {
                id: handles.len(),
                text,
            });
            handles.push(el);
        }

        self.snapshot.replace(handles);
        nodes
    }

    fn mark_reading(&self, target: ReadTarget) {
        if let Some(el) = self.target_element(target) {
            let _ = el.class_list().add_1(MARKER_READING);
        }
    }

    fn clear_reading_mark(&self, target: ReadTarget) {
        if let Some(el) = self.target_element(target) {
            let _ = el.class_list().remove_1(MARKER_READING);
        }
    }

    fn notify(&self, message: &str) {
        if dom::window().alert_with_message(message).is_err() {
            log::warn!("notification suppressed: {message}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_control_has_a_distinct_id() {
        let mut ids = vec![control_id(PanelControl::TextToSpeech)];
        for mode in Mode::ALL {
            ids.push(control_id(PanelControl::Mode(mode)));
        }
        let unique: std::collections::HashSet<_> = ids.iter().copied().collect();
        assert_eq!(unique.len(), ids.len());
    }
}
