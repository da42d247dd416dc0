use super::{Entity, TableMetadata};
use crate::{Error, Result};

use std::any::TypeId;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// The mapping cache.
///
/// One `Registry` is constructed at startup and handed by reference to every
/// component that resolves mappings; there is no process-global state. Each
/// entity type's [`TableMetadata`] is built exactly once, on first
/// resolution, and never evicted.
///
/// Resolution is safe under concurrent first use: a read-locked existence
/// check runs first, and on miss the write lock is taken and the cache
/// re-checked before building, so concurrent callers always observe the same
/// metadata instance.
#[derive(Debug, Default)]
pub struct Registry {
    tables: RwLock<HashMap<TypeId, Arc<TableMetadata>>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves the table metadata for an entity type, building it on first
    /// use.
    pub fn resolve<E: Entity>(&self) -> Result<Arc<TableMetadata>> {
        let type_id = TypeId::of::<E>();

        {
            let tables = self.tables.read().expect("mapping cache lock poisoned");
            if let Some(table) = tables.get(&type_id) {
                return Ok(table.clone());
            }
        }

        let mut tables = self.tables.write().expect("mapping cache lock poisoned");

        // Re-check: another caller may have built the metadata while this one
        // waited on the write lock.
        if let Some(table) = tables.get(&type_id) {
            return Ok(table.clone());
        }

        let table = Arc::new(TableMetadata::from_def(entity_name::<E>(), E::table())?);
        tables.insert(type_id, table.clone());
        Ok(table)
    }

    /// Returns the already-resolved metadata for an entity type.
    ///
    /// Unlike [`resolve`](Self::resolve) this never builds: it fails with an
    /// unmapped entity error when the type has not been resolved yet.
    pub fn get<E: Entity>(&self) -> Result<Arc<TableMetadata>> {
        let tables = self.tables.read().expect("mapping cache lock poisoned");
        tables
            .get(&TypeId::of::<E>())
            .cloned()
            .ok_or_else(|| Error::unmapped_entity(entity_name::<E>()))
    }
}

/// The short type name, without its module path.
fn entity_name<E: Entity>() -> &'static str {
    let name = std::any::type_name::<E>();
    name.rsplit("::").next().unwrap_or(name)
}
