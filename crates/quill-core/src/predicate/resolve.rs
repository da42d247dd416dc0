use crate::schema::TableMetadata;
use crate::stmt::ExprColumn;
use crate::Result;

/// Column-resolution strategy used by the compiler.
///
/// Two strategies exist: resolution through a mapped table's metadata, and
/// ad-hoc resolution against a bare alias (for filters layered on top of a
/// derived table, where no mapping is in play). The compiler is written once
/// against this seam.
pub trait ResolveColumn {
    fn resolve(&self, property: &str) -> Result<ExprColumn>;
}

/// Resolves properties through mapped table metadata.
///
/// The resulting reference carries the metadata's table alias and the
/// column's final database name; an unmapped property fails with a mapping
/// error.
#[derive(Debug, Clone, Copy)]
pub struct TableResolver<'a> {
    table: &'a TableMetadata,
}

impl<'a> TableResolver<'a> {
    pub fn new(table: &'a TableMetadata) -> Self {
        Self { table }
    }
}

impl ResolveColumn for TableResolver<'_> {
    fn resolve(&self, property: &str) -> Result<ExprColumn> {
        let column = self.table.column(property)?;
        Ok(ExprColumn::qualified(
            self.table.alias(),
            column.column.clone(),
        ))
    }
}

/// Resolves properties verbatim against an optional alias.
///
/// The property name is used as the column name unchanged. Used for
/// derived-table queries, where columns exist only by the names the inner
/// query projected.
#[derive(Debug, Clone, Default)]
pub struct AliasResolver {
    alias: Option<String>,
}

impl AliasResolver {
    pub fn new(alias: impl Into<String>) -> Self {
        Self {
            alias: Some(alias.into()),
        }
    }

    /// A resolver producing unqualified column references.
    pub fn bare() -> Self {
        Self::default()
    }
}

impl ResolveColumn for AliasResolver {
    fn resolve(&self, property: &str) -> Result<ExprColumn> {
        Ok(ExprColumn {
            table: self.alias.clone(),
            column: property.to_string(),
        })
    }
}
