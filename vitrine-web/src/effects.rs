//! Cosmetic page effects: smooth scrolling, fade-in, nav highlighting, card
//! hover, and reveal-on-scroll. None of these touch the controller; they are
//! installed once at startup and live for the page's lifetime.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{
    Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, MouseEvent, ScrollBehavior, ScrollIntoViewOptions,
};

use crate::dom;

/// Cards that lift on hover and fade in as they scroll into view.
const CARD_SELECTOR: &str = ".card, .trabalho-card";

pub fn install() {
    smooth_scroll();
    fade_in();
    highlight_active_nav();
    card_hover();
    reveal_on_scroll();
    console_greeting();
}

/// Final path segment, e.g. `/site/sobre.html` → `sobre.html`.
#[must_use]
pub fn page_file_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Whether a nav link's href points at the current page file.
#[must_use]
pub fn is_current_nav(current_file: &str, href: &str) -> bool {
    page_file_name(href) == current_file
}

fn smooth_scroll() {
    let Ok(anchors) = dom::document().query_selector_all("a[href^='#']") else {
        return;
    };
    for index in 0..anchors.length() {
        let Some(anchor) = anchors
            .get(index)
            .and_then(|node| node.dyn_into::<Element>().ok())
        else {
            continue;
        };
        let Some(href) = anchor.get_attribute("href") else {
            continue;
        };
        let closure = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            event.prevent_default();
            if let Ok(Some(target)) = dom::document().query_selector(&href) {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                target.scroll_into_view_with_scroll_into_view_options(&options);
            }
        });
        let _ = anchor.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

fn fade_in() {
    let Some(body) = dom::document().body() else {
        return;
    };
    let style = body.style();
    let _ = style.set_property("opacity", "0");
    wasm_bindgen_futures::spawn_local(async move {
        if dom::sleep_ms(100).await.is_err() {
            let _ = style.set_property("opacity", "1");
            return;
        }
        let _ = style.set_property("transition", "opacity 0.5s ease-in");
        let _ = style.set_property("opacity", "1");
    });
}

fn highlight_active_nav() {
    let current = {
        let path = dom::window().location().pathname().unwrap_or_default();
        let file = page_file_name(&path);
        if file.is_empty() {
            "index.html".to_string()
        } else {
            file.to_string()
        }
    };

    let Ok(links) = dom::document().query_selector_all("nav a") else {
        return;
    };
    for index in 0..links.length() {
        let Some(link) = links
            .get(index)
            .and_then(|node| node.dyn_into::<HtmlElement>().ok())
        else {
            continue;
        };
        let href = link.get_attribute("href").unwrap_or_default();
        if is_current_nav(&current, &href) {
            let _ = link.style().set_property("color", "var(--primary)");
            let _ = link.style().set_property("font-weight", "bold");
        }
    }
}

fn card_hover() {
    let Ok(cards) = dom::document().query_selector_all(CARD_SELECTOR) else {
        return;
    };
    for index in 0..cards.length() {
        let Some(card) = cards
            .get(index)
            .and_then(|node| node.dyn_into::<HtmlElement>().ok())
        else {
            continue;
        };

        let enter_card = card.clone();
        let enter = Closure::<dyn FnMut(MouseEvent)>::new(move |_event: MouseEvent| {
            let style = enter_card.style();
            let _ = style.set_property("transform", "translateY(-5px)");
            let _ = style.set_property("box-shadow", "0 8px 40px rgba(0, 0, 0, 0.15)");
        });
        let leave_card = card.clone();
        let leave = Closure::<dyn FnMut(MouseEvent)>::new(move |_event: MouseEvent| {
            let style = leave_card.style();
            let _ = style.set_property("transform", "translateY(0)");
            let _ = style.set_property("box-shadow", "0 4px 30px rgba(0, 0, 0, 0.1)");
        });
        let _ = card.add_event_listener_with_callback("mouseenter", enter.as_ref().unchecked_ref());
        let _ = card.add_event_listener_with_callback("mouseleave", leave.as_ref().unchecked_ref());
        enter.forget();
        leave.forget();
    }
}

fn reveal_on_scroll() {
    let Ok(cards) = dom::document().query_selector_all(CARD_SELECTOR) else {
        return;
    };
    if cards.length() == 0 {
        return;
    }

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                if let Ok(el) = entry.target().dyn_into::<HtmlElement>() {
                    let _ = el.style().set_property("opacity", "1");
                    let _ = el.style().set_property("transform", "translateY(0)");
                }
                observer.unobserve(&entry.target());
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(0.1));
    options.set_root_margin("0px 0px -50px 0px");
    let Ok(observer) =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
    else {
        return;
    };
    callback.forget();

    for index in 0..cards.length() {
        let Some(card) = cards
            .get(index)
            .and_then(|node| node.dyn_into::<HtmlElement>().ok())
        else {
            continue;
        };
        let style = card.style();
        let _ = style.set_property("opacity", "0");
        let _ = style.set_property("transform", "translateY(20px)");
        let _ = style.set_property("transition", "all 0.5s ease-out");
        observer.observe(&card);
    }
}

fn console_greeting() {
    web_sys::console::log_2(
        &"%cBem-vindo ao meu Portfólio! 🎨".into(),
        &"font-size: 20px; color: #6366f1; font-weight: bold;".into(),
    );
    web_sys::console::log_2(
        &"%cDesign de Interfaces - Portfólio Final".into(),
        &"font-size: 14px; color: #a855f7;".into(),
    );
}
