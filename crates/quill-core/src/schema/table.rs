use super::{ColumnMapping, Role, TableDef};
use crate::{Error, Result};

use indexmap::IndexMap;

/// The frozen table mapping for one entity type.
///
/// Built once per entity type at first resolution, immutable thereafter, and
/// cached by the [`Registry`](super::Registry) for the process lifetime.
/// Columns keep declaration order and are keyed by property name.
#[derive(Debug)]
pub struct TableMetadata {
    entity: String,
    schema: Option<String>,
    name: String,
    alias: String,
    columns: IndexMap<String, ColumnMapping>,
    key: Option<String>,
}

impl TableMetadata {
    pub(super) fn from_def(entity: &str, def: TableDef) -> Result<Self> {
        let mut columns = IndexMap::with_capacity(def.columns.len());
        let mut key = None;

        for column in def.columns {
            let role = if def.view { Role::SelectOnly } else { column.role };

            if role.is_key() {
                if key.is_some() {
                    return Err(Error::invalid_mapping(format!(
                        "entity `{entity}` declares more than one key column"
                    )));
                }
                key = Some(column.property.clone());
            }

            let mapping = ColumnMapping {
                column: column.column.unwrap_or_else(|| column.property.clone()),
                alias: column.alias,
                ty: column.ty,
                length: column.length,
                scale: column.scale,
                nullable: column.nullable.unwrap_or_else(|| role.default_nullable()),
                role,
                property: column.property,
            };

            let property = mapping.property.clone();
            if columns.insert(property.clone(), mapping).is_some() {
                return Err(Error::invalid_mapping(format!(
                    "entity `{entity}` maps property `{property}` more than once"
                )));
            }
        }

        Ok(Self {
            entity: entity.to_string(),
            schema: def.schema,
            alias: def.alias.unwrap_or_else(|| def.name.clone()),
            name: def.name,
            columns,
            key,
        })
    }

    /// The short name of the mapped entity type.
    pub fn entity(&self) -> &str {
        &self.entity
    }

    /// The schema the table lives in, if any.
    pub fn schema(&self) -> Option<&str> {
        self.schema.as_deref()
    }

    /// The table (or view) name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The alias used to qualify column references.
    pub fn alias(&self) -> &str {
        &self.alias
    }

    /// Looks up the column mapped for a property.
    ///
    /// Fails with a mapping error naming the entity and property when no
    /// column is mapped.
    pub fn column(&self, property: &str) -> Result<&ColumnMapping> {
        self.columns
            .get(property)
            .ok_or_else(|| Error::mapping(&self.entity, property))
    }

    /// All column mappings, in declaration order.
    pub fn columns(&self) -> impl ExactSizeIterator<Item = &ColumnMapping> {
        self.columns.values()
    }

    /// The key column, if one is mapped.
    pub fn key(&self) -> Option<&ColumnMapping> {
        self.key.as_ref().and_then(|p| self.columns.get(p))
    }

    /// Columns projected by select statements.
    pub fn select_columns(&self) -> impl Iterator<Item = &ColumnMapping> {
        self.columns.values()
    }

    /// Columns written by insert statements.
    pub fn insert_columns(&self) -> impl Iterator<Item = &ColumnMapping> {
        self.columns.values().filter(|c| c.role.is_insertable())
    }

    /// Columns written by update statements.
    pub fn update_columns(&self) -> impl Iterator<Item = &ColumnMapping> {
        self.columns.values().filter(|c| c.role.is_updatable())
    }
}
