use super::Expr;

/// A column reference, resolved to its final database name at build time.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprColumn {
    /// The table alias qualifying the reference, if any.
    pub table: Option<String>,

    /// The database column name.
    pub column: String,
}

impl ExprColumn {
    pub fn new(column: impl Into<String>) -> Self {
        Self {
            table: None,
            column: column.into(),
        }
    }

    pub fn qualified(table: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            table: Some(table.into()),
            column: column.into(),
        }
    }
}

impl From<ExprColumn> for Expr {
    fn from(value: ExprColumn) -> Self {
        Self::Column(value)
    }
}
