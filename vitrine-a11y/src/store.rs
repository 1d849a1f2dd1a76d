//! Persistence seam for the preferences record.

use std::cell::RefCell;
use std::rc::Rc;

use thiserror::Error;

use crate::prefs::AccessibilityPrefs;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Key-value persistence for the single preferences record.
///
/// Implementations must treat a missing or unreadable record as absent
/// (`Ok(None)`), never as a hard failure: corrupt state loads as defaults.
pub trait PreferenceStore {
    /// Read the stored record, if any.
    ///
    /// # Errors
    /// Returns an error only when the backend itself cannot be reached.
    fn load(&self) -> Result<Option<AccessibilityPrefs>, StoreError>;

    /// Overwrite the stored record.
    ///
    /// # Errors
    /// Returns an error when the backend rejects the write.
    fn save(&self, prefs: &AccessibilityPrefs) -> Result<(), StoreError>;

    /// Delete the stored record entirely.
    ///
    /// # Errors
    /// Returns an error when the backend rejects the removal.
    fn clear(&self) -> Result<(), StoreError>;
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Rc<S> {
    fn load(&self) -> Result<Option<AccessibilityPrefs>, StoreError> {
        (**self).load()
    }

    fn save(&self, prefs: &AccessibilityPrefs) -> Result<(), StoreError> {
        (**self).save(prefs)
    }

    fn clear(&self) -> Result<(), StoreError> {
        (**self).clear()
    }
}

/// In-memory store used by unit tests and the logic tester.
#[derive(Debug, Default)]
pub struct MemoryStore {
    record: RefCell<Option<AccessibilityPrefs>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_record(prefs: AccessibilityPrefs) -> Self {
        Self {
            record: RefCell::new(Some(prefs)),
        }
    }

    /// Current stored record, if any.
    #[must_use]
    pub fn record(&self) -> Option<AccessibilityPrefs> {
        self.record.borrow().clone()
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self) -> Result<Option<AccessibilityPrefs>, StoreError> {
        Ok(self.record.borrow().clone())
    }

    fn save(&self, prefs: &AccessibilityPrefs) -> Result<(), StoreError> {
        *self.record.borrow_mut() = Some(prefs.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        *self.record.borrow_mut() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips() {
        let store = MemoryStore::new();
        assert!(store.load().unwrap().is_none());

        let prefs = AccessibilityPrefs {
            font_size_percent: 120,
            dark_mode: true,
            ..AccessibilityPrefs::default()
        };
        store.save(&prefs).unwrap();
        assert_eq!(store.load().unwrap(), Some(prefs));

        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
    }
}
