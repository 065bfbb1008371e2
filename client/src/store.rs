//! `localStorage`-backed preference store.

use resume_prefs::store::{MemoryStore, PreferenceStore};
use web_sys::{Storage, Window};

use crate::dom::check;

/// Reads and writes `localStorage`, mirrored in memory.
///
/// The mirror keeps write-then-read consistent for the session even when the
/// browser refuses storage (private mode, quota, disabled cookies).
#[derive(Clone)]
pub struct LocalStore {
    storage: Option<Storage>,
    session: MemoryStore,
}

impl LocalStore {
    pub fn new(window: &Window) -> Self {
        let storage = check(window.local_storage(), "open localStorage").flatten();
        if storage.is_none() {
            log::warn!("localStorage unavailable; preferences last until reload");
        }
        Self { storage, session: MemoryStore::new() }
    }
}

impl PreferenceStore for LocalStore {
    fn read(&self, key: &str) -> Option<String> {
        self.session.read(key).or_else(|| {
            let storage = self.storage.as_ref()?;
            check(storage.get_item(key), "read localStorage").flatten()
        })
    }

    fn write(&mut self, key: &str, value: &str) {
        self.session.write(key, value);
        if let Some(storage) = &self.storage {
            check(storage.set_item(key, value), "write localStorage");
        }
    }
}
