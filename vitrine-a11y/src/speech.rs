//! Speech synthesis seam.

use std::rc::Rc;

use thiserror::Error;

use crate::constants::{SPEECH_LANG, SPEECH_PITCH, SPEECH_RATE, SPEECH_VOLUME};

/// One request to vocalize a unit of text.
#[derive(Debug, Clone, PartialEq)]
pub struct UtteranceRequest {
    pub text: String,
    pub lang: &'static str,
    pub rate: f32,
    pub pitch: f32,
    pub volume: f32,
}

impl UtteranceRequest {
    /// The site's fixed reading voice: pt-PT, moderate rate, neutral pitch,
    /// full volume.
    #[must_use]
    pub fn spoken(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            lang: SPEECH_LANG,
            rate: SPEECH_RATE,
            pitch: SPEECH_PITCH,
            volume: SPEECH_VOLUME,
        }
    }
}

#[derive(Debug, Error)]
pub enum SpeechError {
    #[error("speech synthesis is not available")]
    Unavailable,
    #[error("speech backend error: {0}")]
    Backend(String),
}

/// Text-to-speech capability supplied by the hosting environment.
///
/// Playback is asynchronous; completion and failure are delivered back to the
/// controller by the host through `notify_utterance_ended` /
/// `notify_utterance_failed`. At most one utterance is ever in flight:
/// `speak` supersedes whatever was playing.
pub trait SpeechDriver {
    /// Whether the capability exists at all. Must be queryable before use.
    fn is_available(&self) -> bool;

    /// Start vocalizing, superseding any in-flight utterance.
    ///
    /// # Errors
    /// Returns an error when the capability is absent or the backend rejects
    /// the request.
    fn speak(&self, request: &UtteranceRequest) -> Result<(), SpeechError>;

    /// Cancel the in-flight utterance, if any. Idempotent.
    fn cancel(&self);

    fn is_speaking(&self) -> bool;
}

impl<V: SpeechDriver + ?Sized> SpeechDriver for Rc<V> {
    fn is_available(&self) -> bool {
        (**self).is_available()
    }

    fn speak(&self, request: &UtteranceRequest) -> Result<(), SpeechError> {
        (**self).speak(request)
    }

    fn cancel(&self) {
        (**self).cancel();
    }

    fn is_speaking(&self) -> bool {
        (**self).is_speaking()
    }
}
