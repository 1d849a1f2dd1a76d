//! Event wiring between the page's controls and the controller.
//!
//! The controller lives in a thread-local slot for the lifetime of the page;
//! listener closures dispatch into it and are leaked on purpose, matching
//! the page lifetime.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, HtmlElement, HtmlInputElement, KeyboardEvent, MouseEvent};

use vitrine_a11y::{AccessibilityController, Mode, PanelControl, Shortcut, shortcut_for};

use crate::dom;
use crate::page::{
    self, DomPage, FONT_DECREASE_ID, FONT_INCREASE_ID, FONT_RESET_ID, PANEL_CLOSE_ID, PANEL_ID,
    PANEL_TOGGLE_ID, RESET_ALL_ID,
};
use crate::speech::WebSpeech;
use crate::storage::LocalPrefStore;

pub type WebController = AccessibilityController<LocalPrefStore, DomPage, WebSpeech>;

thread_local! {
    static CONTROLLER: RefCell<Option<Rc<RefCell<WebController>>>> = const { RefCell::new(None) };
    static HOVER_HOOKS: RefCell<Vec<(HtmlElement, Closure<dyn FnMut(MouseEvent)>)>> =
        const { RefCell::new(Vec::new()) };
}

/// Build the controller, re-apply saved preferences, and attach every
/// listener the accessibility UI needs.
pub fn mount() {
    let mut controller =
        AccessibilityController::new(LocalPrefStore, DomPage::new(), WebSpeech::new());
    controller.load_preferences();
    CONTROLLER.with(|slot| *slot.borrow_mut() = Some(Rc::new(RefCell::new(controller))));

    attach_panel_controls();
    attach_font_controls();
    attach_mode_controls();
    attach_speech_control();
    attach_reset_control();
    attach_document_listeners();
}

/// Run an operation against the mounted controller, if any.
pub fn with_controller<R>(f: impl FnOnce(&mut WebController) -> R) -> Option<R> {
    let handle = CONTROLLER.with(|slot| slot.borrow().clone())?;
    let mut controller = handle.borrow_mut();
    Some(f(&mut controller))
}

fn dispatch(f: impl FnOnce(&mut WebController)) {
    if with_controller(f).is_none() {
        dom::console_error("event received before the accessibility controller was mounted");
    }
}

fn on_click(id: &str, mut handler: impl FnMut() + 'static) {
    let Some(el) = dom::document().get_element_by_id(id) else {
        log::warn!("missing accessibility control #{id}");
        return;
    };
    let closure = Closure::<dyn FnMut(MouseEvent)>::new(move |_event: MouseEvent| handler());
    let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn on_checkbox_change(id: &str, mut handler: impl FnMut(bool) + 'static) {
    let Some(el) = dom::document().get_element_by_id(id) else {
        log::warn!("missing accessibility control #{id}");
        return;
    };
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
        if let Some(input) = event
            .target()
            .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
        {
            handler(input.checked());
        }
    });
    let _ = el.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn attach_panel_controls() {
    on_click(PANEL_TOGGLE_ID, || dispatch(|ctrl| ctrl.open_panel()));
    on_click(PANEL_CLOSE_ID, || dispatch(|ctrl| ctrl.close_panel()));
}

fn attach_font_controls() {
    on_click(FONT_INCREASE_ID, || dispatch(|ctrl| ctrl.increase_font()));
    on_click(FONT_DECREASE_ID, || dispatch(|ctrl| ctrl.decrease_font()));
    on_click(FONT_RESET_ID, || dispatch(|ctrl| ctrl.reset_font()));
}

fn attach_mode_controls() {
    for mode in Mode::ALL {
        let id = page::control_id(PanelControl::Mode(mode));
        on_checkbox_change(id, move |checked| {
            dispatch(move |ctrl| ctrl.set_mode(mode, checked));
        });
    }
}

fn attach_speech_control() {
    let id = page::control_id(PanelControl::TextToSpeech);
    on_checkbox_change(id, |checked| {
        dispatch(move |ctrl| ctrl.set_speech_enabled(checked));
        sync_hover_bindings();
    });
}

fn attach_reset_control() {
    on_click(RESET_ALL_ID, || {
        dispatch(|ctrl| ctrl.reset_preferences());
        sync_hover_bindings();
    });
}

fn attach_document_listeners() {
    let doc = dom::document();

    let click = Closure::<dyn FnMut(MouseEvent)>::new(|event: MouseEvent| {
        let inside = event
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok())
            .is_some_and(|el| {
                let panel_sel = format!("#{PANEL_ID}");
                let toggle_sel = format!("#{PANEL_TOGGLE_ID}");
                matches!(el.closest(&panel_sel), Ok(Some(_)))
                    || matches!(el.closest(&toggle_sel), Ok(Some(_)))
            });
        dispatch(move |ctrl| ctrl.handle_document_click(inside));
    });
    let _ = doc.add_event_listener_with_callback("click", click.as_ref().unchecked_ref());
    click.forget();

    let keydown = Closure::<dyn FnMut(KeyboardEvent)>::new(|event: KeyboardEvent| {
        let Some(shortcut) = shortcut_for(&event.key(), event.ctrl_key(), event.shift_key())
        else {
            return;
        };
        if matches!(shortcut, Shortcut::StopReading | Shortcut::ReadPage) {
            event.prevent_default();
        }
        dispatch(move |ctrl| ctrl.handle_shortcut(shortcut));
        if matches!(shortcut, Shortcut::StopReading | Shortcut::ReadPage) {
            sync_hover_bindings();
        }
    });
    let _ = doc.add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref());
    keydown.forget();
}

/// Rewire per-element hover listeners to match the controller's current
/// reading snapshot. Hover reading covers exactly the elements captured when
/// speech was enabled; anything added to the page later is not read.
fn sync_hover_bindings() {
    let Some((enabled, elements)) =
        with_controller(|ctrl| (ctrl.speech_enabled(), ctrl.page().snapshot_elements()))
    else {
        return;
    };

    HOVER_HOOKS.with(|hooks| {
        let mut hooks = hooks.borrow_mut();
        for (el, closure) in hooks.drain(..) {
            let _ = el.remove_event_listener_with_callback(
                "mouseenter",
                closure.as_ref().unchecked_ref(),
            );
        }
        if !enabled {
            return;
        }
        for (id, el) in elements {
            let closure = Closure::<dyn FnMut(MouseEvent)>::new(move |_event: MouseEvent| {
                dispatch(move |ctrl| ctrl.handle_readable_hover(id));
            });
            let _ =
                el.add_event_listener_with_callback("mouseenter", closure.as_ref().unchecked_ref());
            hooks.push((el, closure));
        }
    });
}
