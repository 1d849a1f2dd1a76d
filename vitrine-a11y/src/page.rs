//! Presentation surface the controller drives.
//!
//! The controller never touches a rendering API directly; everything it does
//! to the page goes through [`PageSurface`], so the logic runs unchanged
//! against the real DOM, the recording double in the QA harness, and the unit
//! tests.

use std::rc::Rc;

use crate::prefs::Mode;

/// Identifier for one readable element in the enable-time snapshot.
pub type NodeId = usize;

/// One readable element captured when speech reading is enabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadableNode {
    pub id: NodeId,
    pub text: String,
}

/// What an utterance is reading, and therefore what carries the reading mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReadTarget {
    /// The page's primary readable content as a whole.
    Page,
    /// A single readable element from the snapshot.
    Node(NodeId),
}

/// A panel control whose checked state the controller synchronizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelControl {
    Mode(Mode),
    TextToSpeech,
}

pub trait PageSurface {
    /// Apply a root font-size percentage.
    fn apply_font_size(&self, percent: u32);

    /// Add or remove a mode's presentation marker on the page body.
    fn set_marker(&self, mode: Mode, enabled: bool);

    /// Synchronize a panel control's checked state.
    fn set_control_checked(&self, control: PanelControl, checked: bool);

    /// Reflect the panel visibility state: active marker plus ARIA
    /// attributes on the panel and its toggle control.
    fn set_panel_open(&self, open: bool);

    /// Collect the page's primary readable content, in document order,
    /// restricted to elements that are currently visible and outside the
    /// accessibility panel.
    fn readable_nodes(&self) -> Vec<ReadableNode>;

    /// Visually mark a target as being read.
    fn mark_reading(&self, target: ReadTarget);

    /// Remove the reading mark from a target.
    fn clear_reading_mark(&self, target: ReadTarget);

    /// Raise a blocking notification to the user.
    fn notify(&self, message: &str);
}

impl<P: PageSurface + ?Sized> PageSurface for Rc<P> {
    fn apply_font_size(&self, percent: u32) {
        (**self).apply_font_size(percent);
    }

    fn set_marker(&self, mode: Mode, enabled: bool) {
        (**self).set_marker(mode, enabled);
    }

    fn set_control_checked(&self, control: PanelControl, checked: bool) {
        (**self).set_control_checked(control, checked);
    }

    fn set_panel_open(&self, open: bool) {
        (**self).set_panel_open(open);
    }

    fn readable_nodes(&self) -> Vec<ReadableNode> {
        (**self).readable_nodes()
    }

    fn mark_reading(&self, target: ReadTarget) {
        (**self).mark_reading(target);
    }

    fn clear_reading_mark(&self, target: ReadTarget) {
        (**self).clear_reading_mark(target);
    }

    fn notify(&self, message: &str) {
        (**self).notify(message);
    }
}
