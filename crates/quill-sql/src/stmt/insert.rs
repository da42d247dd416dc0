use super::TableRef;
use quill_core::param::Params;
use quill_core::schema::TableMetadata;
use quill_core::stmt::{Expr, Value};
use quill_core::{Error, Result};

/// An insert of one row.
///
/// Columns hold final database names; values are parameter placeholders
/// bound through the statement's sink.
#[derive(Debug, Clone)]
pub struct Insert {
    pub table: TableRef,
    pub columns: Vec<String>,
    pub values: Vec<Expr>,
}

impl Insert {
    /// Builds an insert from metadata and property/value pairs.
    ///
    /// Only insertable roles are projected; generated keys and
    /// server-default columns are skipped even when a value is supplied.
    /// An unknown property fails with a mapping error; a row with no
    /// insertable column (a view mapping, for instance) fails with an
    /// invalid statement error.
    pub fn from_metadata(
        table: &TableMetadata,
        row: &[(&str, Value)],
        params: &mut impl Params,
    ) -> Result<Self> {
        let mut columns = Vec::with_capacity(row.len());
        let mut values = Vec::with_capacity(row.len());

        for (property, value) in row {
            let column = table.column(property)?;
            if !column.role.is_insertable() {
                continue;
            }
            columns.push(column.column.clone());
            values.push(Expr::param(params.bind(property, value.clone())));
        }

        if columns.is_empty() {
            return Err(Error::invalid_statement(format!(
                "no insertable columns for entity `{}`",
                table.entity()
            )));
        }

        Ok(Self {
            table: TableRef::from_metadata(table),
            columns,
            values,
        })
    }
}
