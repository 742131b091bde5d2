use std::cell::RefCell;
use std::collections::HashMap;

use gloo_storage::{LocalStorage, Storage};
use serde::{de::DeserializeOwned, Serialize};

use crate::errors::SlotError;

/// Almacenamiento clave/valor inyectable (localStorage en el navegador, memoria en tests)
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, SlotError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), SlotError>;
}

pub struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, SlotError> {
        LocalStorage::raw()
            .get_item(key)
            .map_err(|_| SlotError::Storage(format!("Error leyendo {} de localStorage", key)))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), SlotError> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|_| SlotError::Storage(format!("Error guardando {} en localStorage", key)))
    }
}

#[derive(Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, SlotError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), SlotError> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

pub fn save_json<T: Serialize>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), SlotError> {
    let json = serde_json::to_string(value)
        .map_err(|e| SlotError::Storage(format!("Error serializando datos: {}", e)))?;
    store.set_item(key, &json)
}

/// JSON corrupto se trata como ausente
pub fn load_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let json = store.get_item(key).ok()??;
    match serde_json::from_str(&json) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("⚠️ [STORAGE] {} ilegible, se ignora: {}", key, e);
            None
        }
    }
}
