use super::{Comma, Formatter, Ident, ToSql};

use crate::dialect::Paging;
use crate::stmt::{
    Assignment, Assignments, Delete, DerivedSelect, Direction, Filter, GroupBy, Insert, OrderBy,
    OrderByExpr, PagedSelect, Select, SelectColumn, Statement, TableRef, TopSelect, Update,
};

/// A projection list; an empty list renders as `*`.
struct Projection<'a>(&'a [SelectColumn]);

impl ToSql for Projection<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        if self.0.is_empty() {
            fmt!(f, "*");
        } else {
            fmt!(f, Comma(self.0));
        }
    }
}

/// A table target without its alias, for statements that bind the bare
/// table name (INSERT, and the scaffolds that re-declare the alias
/// themselves).
struct TableName<'a>(&'a TableRef);

impl ToSql for TableName<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match &self.0.schema {
            Some(schema) => fmt!(f, Ident(schema), ".", Ident(&self.0.name)),
            None => fmt!(f, Ident(&self.0.name)),
        }
    }
}

impl ToSql for &Statement {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self {
            Statement::Select(stmt) => stmt.to_sql(f),
            Statement::Paged(stmt) => stmt.to_sql(f),
            Statement::Top(stmt) => stmt.to_sql(f),
            Statement::Insert(stmt) => stmt.to_sql(f),
            Statement::Update(stmt) => stmt.to_sql(f),
            Statement::Delete(stmt) => stmt.to_sql(f),
            Statement::Derived(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &TableRef {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, TableName(self));

        if let Some(alias) = &self.alias {
            // Oracle does not accept AS between a table and its alias.
            if f.serializer.is_oracle() {
                fmt!(f, " ", Ident(alias));
            } else {
                fmt!(f, " AS ", Ident(alias));
            }
        }
    }
}

impl ToSql for &SelectColumn {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let alias = self.alias.as_ref().map(|alias| (" AS ", Ident(alias)));
        fmt!(f, self.column, alias);
    }
}

impl ToSql for &Filter {
    fn to_sql(self, f: &mut Formatter<'_>) {
        if let Some(expr) = &self.expr {
            fmt!(f, " WHERE ", expr);
        }
    }
}

impl ToSql for &GroupBy {
    fn to_sql(self, f: &mut Formatter<'_>) {
        if !self.is_empty() {
            fmt!(f, " GROUP BY ", Comma(&self.columns));
        }
    }
}

impl ToSql for &OrderBy {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, "ORDER BY ", Comma(&self.exprs));
    }
}

impl ToSql for &OrderByExpr {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, self.column, " ", self.direction);
    }
}

impl ToSql for Direction {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self {
            Direction::Asc => fmt!(f, "ASC"),
            Direction::Desc => fmt!(f, "DESC"),
        }
    }
}

impl ToSql for &Select {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let order_by = self.order_by.as_ref().map(|order_by| (" ", order_by));

        fmt!(
            f,
            "SELECT ",
            Projection(&self.columns),
            " FROM ",
            self.table,
            self.filter,
            self.group_by,
            order_by,
        );
    }
}

impl ToSql for &PagedSelect {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match f.serializer.dialect.paging {
            Paging::LimitComma => {
                fmt!(f, self.select, " LIMIT ", self.skip, ", ", self.count);
            }
            Paging::LimitOffset => {
                fmt!(f, self.select, " LIMIT ", self.count, " OFFSET ", self.skip);
            }
            Paging::RowNumber => {
                let select = &self.select;
                let order_by = select
                    .order_by
                    .as_ref()
                    .expect("paged statement validated before rendering");

                // The ranking function's ORDER BY numbers the rows; the base
                // query keeps its own WHERE and GROUP BY inside the derived
                // table.
                fmt!(
                    f,
                    "SELECT * FROM (SELECT ",
                    Projection(&select.columns),
                    ", ROW_NUMBER() OVER (",
                    order_by,
                    ") AS ",
                    Ident("row_no"),
                    " FROM ",
                    select.table,
                    select.filter,
                    select.group_by,
                    ") AS ",
                    Ident("paged"),
                    " WHERE ",
                    Ident("paged"),
                    ".",
                    Ident("row_no"),
                    " > ",
                    self.skip,
                    " AND ",
                    Ident("paged"),
                    ".",
                    Ident("row_no"),
                    " <= ",
                    self.skip + self.count,
                );
            }
            Paging::Rownum => {
                fmt!(
                    f,
                    "SELECT * FROM (SELECT ",
                    Ident("paged"),
                    ".*, ROWNUM AS ",
                    Ident("row_no"),
                    " FROM (",
                    self.select,
                    ") ",
                    Ident("paged"),
                    " WHERE ROWNUM <= ",
                    self.skip + self.count,
                    ") WHERE ",
                    Ident("row_no"),
                    " > ",
                    self.skip,
                );
            }
        }
    }
}

impl ToSql for &TopSelect {
    fn to_sql(self, f: &mut Formatter<'_>) {
        if f.serializer.is_sql_server() {
            let select = &self.select;
            let order_by = select.order_by.as_ref().map(|order_by| (" ", order_by));

            fmt!(
                f,
                "SELECT TOP ",
                self.count,
                " ",
                Projection(&select.columns),
                " FROM ",
                select.table,
                select.filter,
                select.group_by,
                order_by,
            );
        } else if f.serializer.is_oracle() {
            fmt!(
                f,
                "SELECT * FROM (",
                self.select,
                ") WHERE ROWNUM <= ",
                self.count,
            );
        } else {
            fmt!(f, self.select, " LIMIT ", self.count);
        }
    }
}

impl ToSql for &Insert {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let columns = Comma(self.columns.iter().map(Ident));

        fmt!(
            f,
            "INSERT INTO ",
            TableName(&self.table),
            " (",
            columns,
            ") VALUES (",
            Comma(&self.values),
            ")",
        );
    }
}

impl ToSql for &Update {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match &self.table.alias {
            // SQL Server binds the updated alias through a trailing FROM
            // clause; the other dialects declare it on the UPDATE target.
            Some(alias) if f.serializer.is_sql_server() => {
                fmt!(
                    f,
                    "UPDATE ",
                    Ident(alias),
                    " SET ",
                    self.assignments,
                    " FROM ",
                    TableName(&self.table),
                    " AS ",
                    Ident(alias),
                    self.filter,
                );
            }
            Some(_) => {
                fmt!(f, "UPDATE ", self.table, " SET ", self.assignments, self.filter);
            }
            None => {
                fmt!(
                    f,
                    "UPDATE ",
                    TableName(&self.table),
                    " SET ",
                    self.assignments,
                    self.filter,
                );
            }
        }
    }
}

impl ToSql for &Assignments {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, Comma(&self.items));
    }
}

impl ToSql for &Assignment {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, Ident(&self.column), " = ", self.expr);
    }
}

impl ToSql for &Delete {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match &self.table.alias {
            Some(alias) if f.serializer.is_sql_server() || f.serializer.is_mysql() => {
                fmt!(
                    f,
                    "DELETE ",
                    Ident(alias),
                    " FROM ",
                    self.table,
                    self.filter,
                );
            }
            _ => {
                fmt!(f, "DELETE FROM ", self.table, self.filter);
            }
        }
    }
}

impl ToSql for &DerivedSelect {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let order_by = self.order_by.as_ref().map(|order_by| (" ", order_by));
        let alias_sep = if f.serializer.is_oracle() { " " } else { " AS " };

        fmt!(
            f,
            "SELECT ",
            Projection(&self.columns),
            " FROM (",
            self.inner.as_str(),
            ")",
            alias_sep,
            Ident(&self.alias),
            self.filter,
            order_by,
        );
    }
}
