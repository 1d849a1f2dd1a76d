mod common;

use common::harness;
use vitrine_a11y::Shortcut;

#[test]
fn toggle_opens_and_close_control_closes() {
    let mut h = harness();
    assert!(!h.ctrl.panel().is_open());

    h.ctrl.open_panel();
    assert!(h.ctrl.panel().is_open());
    assert!(h.page.panel_open.get());

    h.ctrl.close_panel();
    assert!(!h.ctrl.panel().is_open());
    assert!(!h.page.panel_open.get());
}

#[test]
fn outside_click_closes_only_when_outside() {
    let mut h = harness();
    h.ctrl.open_panel();

    h.ctrl.handle_document_click(true);
    assert!(h.ctrl.panel().is_open(), "clicks inside keep the panel open");

    h.ctrl.handle_document_click(false);
    assert!(!h.ctrl.panel().is_open());
}

#[test]
fn escape_closes_via_shortcut() {
    let mut h = harness();
    h.ctrl.open_panel();
    h.ctrl.handle_shortcut(Shortcut::ClosePanel);
    assert!(!h.ctrl.panel().is_open());

    // Escape while already closed stays closed.
    h.ctrl.handle_shortcut(Shortcut::ClosePanel);
    assert!(!h.ctrl.panel().is_open());
}

#[test]
fn visibility_is_not_persisted() {
    let mut h = harness();
    h.ctrl.open_panel();
    assert!(h.store.record().is_none(), "panel state never saved");
}
