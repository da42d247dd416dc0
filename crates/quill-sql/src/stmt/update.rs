use super::{Filter, TableRef};
use quill_core::param::Params;
use quill_core::schema::TableMetadata;
use quill_core::stmt::{Expr, Value};
use quill_core::{Error, Result};

/// An update against one mapped table.
#[derive(Debug, Clone)]
pub struct Update {
    pub table: TableRef,
    pub assignments: Assignments,
    pub filter: Filter,
}

/// The SET section of an update.
#[derive(Debug, Clone, Default)]
pub struct Assignments {
    pub items: Vec<Assignment>,
}

/// One `column = expr` assignment. The column name is unqualified, as SQL
/// requires in a SET list.
#[derive(Debug, Clone)]
pub struct Assignment {
    pub column: String,
    pub expr: Expr,
}

impl Update {
    /// Builds an update from metadata and property/value pairs.
    ///
    /// Only updatable roles are assigned; key and insert-only columns are
    /// skipped even when a value is supplied. An unknown property fails
    /// with a mapping error; an update with no remaining assignment fails
    /// with an invalid statement error.
    pub fn from_metadata(
        table: &TableMetadata,
        row: &[(&str, Value)],
        params: &mut impl Params,
    ) -> Result<Self> {
        let mut items = Vec::with_capacity(row.len());

        for (property, value) in row {
            let column = table.column(property)?;
            if !column.role.is_updatable() {
                continue;
            }
            items.push(Assignment {
                column: column.column.clone(),
                expr: Expr::param(params.bind(property, value.clone())),
            });
        }

        if items.is_empty() {
            return Err(Error::invalid_statement(format!(
                "no updatable columns for entity `{}`",
                table.entity()
            )));
        }

        Ok(Self {
            table: TableRef::from_metadata(table),
            assignments: Assignments { items },
            filter: Filter::default(),
        })
    }

    pub fn filter(mut self, expr: Expr) -> Self {
        self.filter = expr.into();
        self
    }
}
