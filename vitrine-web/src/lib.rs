//! Vitrine web shell
//!
//! WASM entry point and platform bindings for the Vitrine portfolio site.
//! The accessibility logic lives in `vitrine-a11y`; this crate supplies the
//! DOM-backed collaborators, wires real UI events to the controller, and
//! installs the site's cosmetic effects.
#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod bindings;
pub mod dom;
pub mod effects;
pub mod page;
pub mod speech;
pub mod storage;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    effects::install();
    bindings::mount();
}
