//! In-browser tests for the accessibility panel wiring. Run with
//! `wasm-pack test --headless --chrome vitrine-web`.
#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Event, HtmlElement, HtmlInputElement, KeyboardEvent, KeyboardEventInit};

use vitrine_a11y::constants::PREFS_STORAGE_KEY;
use vitrine_web::{bindings, dom};

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

const FIXTURE: &str = r#"
  <nav><a href="index.html">Início</a></nav>
  <main>
    <h1>Portfólio</h1>
    <p>Bem-vindo ao meu trabalho.</p>
  </main>
  <button id="accessibility-btn" aria-expanded="false">Acessibilidade</button>
  <div id="accessibility-panel" aria-hidden="true">
    <button id="close-accessibility">X</button>
    <button id="increase-font">A+</button>
    <button id="decrease-font">A-</button>
    <button id="reset-font">A</button>
    <input id="high-contrast" type="checkbox" />
    <input id="dark-mode" type="checkbox" />
    <input id="highlight-links" type="checkbox" />
    <input id="line-height" type="checkbox" />
    <input id="text-to-speech" type="checkbox" />
    <button id="reset-accessibility">Repor</button>
  </div>
"#;

fn mount_fixture() {
    let doc = dom::document();
    let body = doc.body().expect("document body");
    body.set_class_name("");
    body.set_inner_html(FIXTURE);
    if let Ok(storage) = dom::local_storage() {
        let _ = storage.remove_item(PREFS_STORAGE_KEY);
    }
    if let Some(root) = doc
        .document_element()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    {
        let _ = root.style().set_property("font-size", "100%");
    }
    bindings::mount();
}

fn click(id: &str) {
    dom::document()
        .get_element_by_id(id)
        .expect("element exists")
        .dyn_into::<HtmlElement>()
        .expect("clickable element")
        .click();
}

fn set_checkbox(id: &str, checked: bool) {
    let input = dom::document()
        .get_element_by_id(id)
        .expect("checkbox exists")
        .dyn_into::<HtmlInputElement>()
        .expect("checkbox input");
    input.set_checked(checked);
    let event = Event::new("change").expect("change event");
    let _ = input.dispatch_event(&event);
}

fn checkbox_checked(id: &str) -> bool {
    dom::document()
        .get_element_by_id(id)
        .expect("checkbox exists")
        .dyn_into::<HtmlInputElement>()
        .expect("checkbox input")
        .checked()
}

fn panel_class() -> String {
    dom::document()
        .get_element_by_id("accessibility-panel")
        .expect("panel exists")
        .class_name()
}

#[wasm_bindgen_test]
fn panel_opens_and_escape_closes() {
    mount_fixture();

    click("accessibility-btn");
    let panel = dom::document()
        .get_element_by_id("accessibility-panel")
        .unwrap();
    assert!(panel_class().contains("active"));
    assert_eq!(panel.get_attribute("aria-hidden").unwrap(), "false");

    let init = KeyboardEventInit::new();
    init.set_key("Escape");
    init.set_bubbles(true);
    let escape = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    let _ = dom::document().dispatch_event(&escape);

    assert!(!panel_class().contains("active"));
    assert_eq!(panel.get_attribute("aria-hidden").unwrap(), "true");
}

#[wasm_bindgen_test]
fn close_control_closes_the_panel() {
    mount_fixture();
    click("accessibility-btn");
    assert!(panel_class().contains("active"));
    click("close-accessibility");
    assert!(!panel_class().contains("active"));
}

#[wasm_bindgen_test]
fn font_controls_apply_and_persist() {
    mount_fixture();

    click("increase-font");
    let root = dom::document()
        .document_element()
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    assert_eq!(root.style().get_property_value("font-size").unwrap(), "110%");

    let raw = dom::local_storage()
        .unwrap()
        .get_item(PREFS_STORAGE_KEY)
        .unwrap()
        .expect("record written");
    assert!(raw.contains("\"font_size_percent\":110"));

    click("reset-font");
    assert_eq!(root.style().get_property_value("font-size").unwrap(), "100%");
}

#[wasm_bindgen_test]
fn exclusive_modes_uncheck_each_other() {
    mount_fixture();
    let body = dom::document().body().unwrap();

    set_checkbox("dark-mode", true);
    assert!(body.class_list().contains("dark-mode"));

    set_checkbox("high-contrast", true);
    assert!(body.class_list().contains("high-contrast"));
    assert!(!body.class_list().contains("dark-mode"));
    assert!(!checkbox_checked("dark-mode"));
}

#[wasm_bindgen_test]
fn saved_record_is_reapplied_on_mount() {
    mount_fixture();
    set_checkbox("highlight-links", true);
    click("increase-font");
    click("increase-font");

    // Simulate a reload: fresh markup, stored record kept.
    let doc = dom::document();
    let body = doc.body().unwrap();
    body.set_class_name("");
    body.set_inner_html(FIXTURE);
    bindings::mount();

    assert!(body.class_list().contains("highlight-links"));
    assert!(checkbox_checked("highlight-links"));
    let root = doc
        .document_element()
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    assert_eq!(root.style().get_property_value("font-size").unwrap(), "120%");
    assert!(!panel_class().contains("active"), "panel starts closed");
}
