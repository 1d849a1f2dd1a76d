//! localStorage-backed preference store.

use vitrine_a11y::constants::PREFS_STORAGE_KEY;
use vitrine_a11y::{AccessibilityPrefs, PreferenceStore, StoreError};

use crate::dom;

/// Persists the preferences record as JSON under a single fixed key.
///
/// A missing key or a record that no longer parses loads as `None`; the
/// controller treats both as "no preferences set".
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalPrefStore;

impl LocalPrefStore {
    fn storage() -> Result<web_sys::Storage, StoreError> {
        dom::local_storage().map_err(|err| StoreError::Backend(dom::js_error_message(&err)))
    }
}

impl PreferenceStore for LocalPrefStore {
    fn load(&self) -> Result<Option<AccessibilityPrefs>, StoreError> {
        let storage = Self::storage()?;
        let raw = storage
            .get_item(PREFS_STORAGE_KEY)
            .map_err(|err| StoreError::Backend(dom::js_error_message(&err)))?;
        let Some(raw) = raw else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(prefs) => Ok(Some(prefs)),
            Err(err) => {
                log::warn!("discarding malformed preferences record: {err}");
                Ok(None)
            }
        }
    }

    fn save(&self, prefs: &AccessibilityPrefs) -> Result<(), StoreError> {
        let raw =
            serde_json::to_string(prefs).map_err(|err| StoreError::Backend(err.to_string()))?;
        Self::storage()?
            .set_item(PREFS_STORAGE_KEY, &raw)
            .map_err(|err| StoreError::Backend(dom::js_error_message(&err)))
    }

    fn clear(&self) -> Result<(), StoreError> {
        Self::storage()?
            .remove_item(PREFS_STORAGE_KEY)
            .map_err(|err| StoreError::Backend(dom::js_error_message(&err)))
    }
}
