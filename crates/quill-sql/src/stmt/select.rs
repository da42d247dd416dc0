use super::{Filter, GroupBy, OrderBy, PagedSelect, TableRef, TopSelect};
use quill_core::schema::TableMetadata;
use quill_core::stmt::{Expr, ExprColumn};
use quill_core::Result;

/// A select statement over one mapped table.
#[derive(Debug, Clone)]
pub struct Select {
    pub table: TableRef,
    pub columns: Vec<SelectColumn>,
    pub filter: Filter,
    pub group_by: GroupBy,
    pub order_by: Option<OrderBy>,
}

/// One projected column, with its optional projection alias.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectColumn {
    pub column: ExprColumn,
    pub alias: Option<String>,
}

impl Select {
    /// Projects every selectable column of the mapped table.
    pub fn from_metadata(table: &TableMetadata) -> Self {
        let columns = table
            .select_columns()
            .map(|column| SelectColumn {
                column: ExprColumn::qualified(table.alias(), column.column.clone()),
                alias: column.alias.clone(),
            })
            .collect();

        Self {
            table: TableRef::from_metadata(table),
            columns,
            filter: Filter::default(),
            group_by: GroupBy::default(),
            order_by: None,
        }
    }

    /// Projects an explicit list of properties.
    pub fn with_columns(table: &TableMetadata, properties: &[&str]) -> Result<Self> {
        let mut columns = Vec::with_capacity(properties.len());
        for property in properties {
            let column = table.column(property)?;
            columns.push(SelectColumn {
                column: ExprColumn::qualified(table.alias(), column.column.clone()),
                alias: column.alias.clone(),
            });
        }

        Ok(Self {
            columns,
            ..Self::from_metadata(table)
        })
    }

    pub fn filter(mut self, expr: Expr) -> Self {
        self.filter = expr.into();
        self
    }

    pub fn group_by(mut self, column: ExprColumn) -> Self {
        self.group_by.columns.push(column);
        self
    }

    pub fn order_by(mut self, order_by: OrderBy) -> Self {
        self.order_by = Some(order_by);
        self
    }

    /// Bounds the select to the row window `(skip, skip + count]`.
    pub fn paged(self, skip: u64, count: u64) -> PagedSelect {
        PagedSelect {
            select: self,
            skip,
            count,
        }
    }

    /// Bounds the select to its first `count` rows.
    pub fn top(self, count: u64) -> TopSelect {
        TopSelect {
            select: self,
            count,
        }
    }
}
