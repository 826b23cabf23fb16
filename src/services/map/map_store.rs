use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::Entity;
use crate::utils::errors::ApiError;

/// In-memory entity store keyed by identifier.
///
/// New entities get the highest stored id plus one (`1` for an empty
/// store). Entities arriving with an id keep it.
pub struct MapStore<T: Entity> {
    entries: RwLock<BTreeMap<i64, T>>,
}

impl<T: Entity> MapStore<T> {
    pub fn new() -> Self {
        MapStore {
            entries: RwLock::new(BTreeMap::new()),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, BTreeMap<i64, T>>, ApiError> {
        self.entries
            .read()
            .map_err(|_| ApiError::InternalServerError("map store lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, BTreeMap<i64, T>>, ApiError> {
        self.entries
            .write()
            .map_err(|_| ApiError::InternalServerError("map store lock poisoned".to_string()))
    }

    pub fn find_all(&self) -> Result<Vec<T>, ApiError> {
        Ok(self.read()?.values().cloned().collect())
    }

    pub fn find_by_id(&self, id: i64) -> Result<Option<T>, ApiError> {
        Ok(self.read()?.get(&id).cloned())
    }

    /// All entities accepted by `predicate`, in id order.
    pub fn find_where<P>(&self, predicate: P) -> Result<Vec<T>, ApiError>
    where
        P: Fn(&T) -> bool,
    {
        Ok(self.read()?.values().filter(|e| predicate(*e)).cloned().collect())
    }

    pub fn save(&self, mut entity: T) -> Result<T, ApiError> {
        let mut entries = self.write()?;
        let id = match entity.id() {
            Some(id) => id,
            None => {
                let next = match entries.keys().next_back() {
                    Some(max) => max.checked_add(1).ok_or_else(|| {
                        ApiError::InternalServerError("map store ran out of ids".to_string())
                    })?,
                    None => 1,
                };
                entity.set_id(next);
                next
            }
        };
        entries.insert(id, entity.clone());
        Ok(entity)
    }

    /// Removes the stored entity with the same id; unsaved entities are ignored.
    pub fn delete(&self, entity: &T) -> Result<(), ApiError> {
        if let Some(id) = entity.id() {
            self.write()?.remove(&id);
        }
        Ok(())
    }

    pub fn delete_by_id(&self, id: i64) -> Result<(), ApiError> {
        self.write()?.remove(&id);
        Ok(())
    }

    pub fn len(&self) -> Result<usize, ApiError> {
        Ok(self.read()?.len())
    }
}

impl<T: Entity> Default for MapStore<T> {
    fn default() -> Self {
        MapStore::new()
    }
}
