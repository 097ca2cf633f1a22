// ============================================================================
// SESSION PERSISTENCE - Guardar/cargar la sesión (localStorage o memoria)
// ============================================================================

#[cfg(test)]
use std::cell::{Cell, RefCell};
use gloo_storage::{errors::StorageError as GlooStorageError, LocalStorage, Storage};
use crate::models::session::Session;
use crate::services::error::StorageError;
use crate::utils::constants::SESSION_STORAGE_KEY;

/// Almacenamiento durable de la sesión
pub trait SessionPersistence {
    /// Ok(None) si no hay nada guardado; Err si el valor está corrupto o no hay storage
    fn load(&self) -> Result<Option<Session>, StorageError>;
    fn save(&self, session: &Session) -> Result<(), StorageError>;
}

/// Persistencia en `window.localStorage` (una única clave)
pub struct LocalStoragePersistence {
    key: &'static str,
}

impl LocalStoragePersistence {
    pub fn new() -> Self {
        Self { key: SESSION_STORAGE_KEY }
    }
}

impl Default for LocalStoragePersistence {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionPersistence for LocalStoragePersistence {
    fn load(&self) -> Result<Option<Session>, StorageError> {
        match LocalStorage::get::<Session>(self.key) {
            Ok(session) => Ok(Some(session)),
            Err(GlooStorageError::KeyNotFound(_)) => Ok(None),
            Err(GlooStorageError::SerdeError(e)) => Err(StorageError::Corrupt(e.to_string())),
            Err(e) => Err(StorageError::Unavailable(e.to_string())),
        }
    }

    fn save(&self, session: &Session) -> Result<(), StorageError> {
        LocalStorage::set(self.key, session).map_err(|e| match e {
            GlooStorageError::SerdeError(e) => StorageError::Serialization(e.to_string()),
            other => StorageError::Unavailable(other.to_string()),
        })
    }
}

/// Persistencia en memoria para tests. Guarda el JSON crudo para que una
/// "recarga" pase por la misma deserialización que el navegador.
#[cfg(test)]
#[derive(Default)]
pub struct MemoryPersistence {
    raw: RefCell<Option<String>>,
    writes: Cell<usize>,
}

#[cfg(test)]
impl MemoryPersistence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arranca con un valor crudo ya guardado (posiblemente corrupto)
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: RefCell::new(Some(raw.into())),
            writes: Cell::new(0),
        }
    }

    /// Número de escrituras realizadas
    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

#[cfg(test)]
impl SessionPersistence for MemoryPersistence {
    fn load(&self) -> Result<Option<Session>, StorageError> {
        match self.raw.borrow().as_deref() {
            None => Ok(None),
            Some(json) => serde_json::from_str(json)
                .map(Some)
                .map_err(|e| StorageError::Corrupt(e.to_string())),
        }
    }

    fn save(&self, session: &Session) -> Result<(), StorageError> {
        let json = serde_json::to_string(session)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        *self.raw.borrow_mut() = Some(json);
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}
