use skincare_advisor::error::{StorageError, StorageResult};
use skincare_advisor::SelectionSlot;

/// `window.localStorage` entry holding the persisted selection.
///
/// Storage is looked up on every access so the slot stays `Send + Sync`
/// and can live inside a signal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalStorageSlot {
    key: String,
}

impl LocalStorageSlot {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl Default for LocalStorageSlot {
    fn default() -> Self {
        Self::new(skincare_advisor::config::StorageConfig::default().key)
    }
}

fn local_storage() -> StorageResult<web_sys::Storage> {
    let window = web_sys::window().ok_or_else(|| StorageError::Unavailable("no window".into()))?;
    window
        .local_storage()
        .map_err(|e| StorageError::Unavailable(format!("{e:?}")))?
        .ok_or_else(|| StorageError::Unavailable("localStorage disabled".into()))
}

impl SelectionSlot for LocalStorageSlot {
    fn read(&self) -> Option<String> {
        match local_storage() {
            Ok(storage) => storage.get_item(&self.key).ok().flatten(),
            Err(e) => {
                log::warn!("{e}");
                None
            }
        }
    }

    fn write(&self, value: &str) -> StorageResult<()> {
        local_storage()?
            .set_item(&self.key, value)
            .map_err(|e| StorageError::Write(format!("{e:?}")))
    }
}
