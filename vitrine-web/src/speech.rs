//! Web Speech API driver.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{SpeechSynthesis, SpeechSynthesisErrorEvent, SpeechSynthesisEvent};

use vitrine_a11y::{SpeechDriver, SpeechError, UtteranceRequest};

use crate::{bindings, dom};

/// Drives `window.speechSynthesis`, keeping at most one utterance in flight.
///
/// Every `speak` bumps a generation counter that the utterance's `end` and
/// `error` closures capture, so a superseded utterance's late events never
/// reach the controller.
pub struct WebSpeech {
    generation: Rc<Cell<u64>>,
}

impl Default for WebSpeech {
    fn default() -> Self {
        Self::new()
    }
}

impl WebSpeech {
    #[must_use]
    pub fn new() -> Self {
        Self {
            generation: Rc::new(Cell::new(0)),
        }
    }

    fn synth() -> Option<SpeechSynthesis> {
        web_sys::window().and_then(|win| win.speech_synthesis().ok())
    }
}

impl SpeechDriver for WebSpeech {
    fn is_available(&self) -> bool {
        Self::synth().is_some()
    }

    fn speak(&self, request: &UtteranceRequest) -> Result<(), SpeechError> {
        let synth = Self::synth().ok_or(SpeechError::Unavailable)?;
        let utterance = web_sys::SpeechSynthesisUtterance::new_with_text(&request.text)
            .map_err(|err| SpeechError::Backend(dom::js_error_message(&err)))?;
        utterance.set_lang(request.lang);
        utterance.set_rate(request.rate);
        utterance.set_pitch(request.pitch);
        utterance.set_volume(request.volume);

        let generation = self.generation.get() + 1;
        self.generation.set(generation);

        let live = self.generation.clone();
        let on_end = Closure::<dyn FnMut(SpeechSynthesisEvent)>::new(
            move |_event: SpeechSynthesisEvent| {
                if live.get() == generation {
                    bindings::with_controller(|ctrl| ctrl.notify_utterance_ended());
                }
            },
        );
        let live = self.generation.clone();
        let on_error = Closure::<dyn FnMut(SpeechSynthesisErrorEvent)>::new(
            move |event: SpeechSynthesisErrorEvent| {
                if live.get() == generation {
                    let reason = format!("{:?}", event.error());
                    bindings::with_controller(|ctrl| ctrl.notify_utterance_failed(&reason));
                }
            },
        );
        utterance.set_onend(Some(on_end.as_ref().unchecked_ref()));
        utterance.set_onerror(Some(on_error.as_ref().unchecked_ref()));
        // The browser can still fire events for a superseded utterance, so
        // these closures must outlive it.
        on_end.forget();
        on_error.forget();

        synth.speak(&utterance);
        Ok(())
    }

    fn cancel(&self) {
        // Invalidate the in-flight utterance before the browser delivers its
        // cancellation `end` event.
        self.generation.set(self.generation.get() + 1);
        if let Some(synth) = Self::synth() {
            synth.cancel();
        }
    }

    fn is_speaking(&self) -> bool {
        Self::synth().is_some_and(|synth| synth.speaking())
    }
}
