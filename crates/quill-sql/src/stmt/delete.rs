use super::{Filter, TableRef};
use quill_core::schema::TableMetadata;
use quill_core::stmt::Expr;

/// A delete against one mapped table.
#[derive(Debug, Clone)]
pub struct Delete {
    pub table: TableRef,
    pub filter: Filter,
}

impl Delete {
    pub fn from_metadata(table: &TableMetadata) -> Self {
        Self {
            table: TableRef::from_metadata(table),
            filter: Filter::default(),
        }
    }

    pub fn filter(mut self, expr: Expr) -> Self {
        self.filter = expr.into();
        self
    }
}
