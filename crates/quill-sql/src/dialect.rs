use quill_core::schema::{ColumnMapping, Type};

/// Identifies one supported database family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialectKind {
    SqlServer,
    MySql,
    Oracle,
    Postgres,
}

/// The pagination technique a dialect uses for bounded row windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paging {
    /// Trailing `LIMIT skip, count` clause after ordering.
    LimitComma,

    /// Trailing `LIMIT count OFFSET skip` clause after ordering.
    LimitOffset,

    /// A `ROW_NUMBER()` ranking column projected inside a derived table,
    /// with an outer filter on the computed row window.
    RowNumber,

    /// Nested `ROWNUM` windows around the ordered base query.
    Rownum,
}

impl Paging {
    /// Ranking-based strategies number rows by an explicit ordering; a paged
    /// query without one is rejected before rendering.
    pub fn requires_order_by(self) -> bool {
        matches!(self, Self::RowNumber | Self::Rownum)
    }
}

/// The fixed per-database configuration consumed by the emitter and by the
/// schema collaborator.
///
/// One descriptor exists per supported database, selected once at startup
/// and held for the process lifetime. The statement model itself contains no
/// dialect-specific literals; everything dialect-divergent lives here.
/// Adding a dialect means supplying one complete descriptor — the compiler
/// and statement model are untouched.
#[derive(Debug)]
pub struct Dialect {
    pub kind: DialectKind,

    /// Identifier quoting pair.
    pub quote_open: char,
    pub quote_close: char,

    /// Character prepended to parameter names in rendered SQL.
    pub param_marker: char,

    /// Clause marking a generated key column in DDL.
    pub identity: &'static str,

    /// The dialect's current-timestamp default literal.
    pub current_timestamp: &'static str,

    /// Pagination strategy.
    pub paging: Paging,
}

static SQL_SERVER: Dialect = Dialect {
    kind: DialectKind::SqlServer,
    quote_open: '[',
    quote_close: ']',
    param_marker: '@',
    identity: "IDENTITY(1,1)",
    current_timestamp: "GETDATE()",
    paging: Paging::RowNumber,
};

static MYSQL: Dialect = Dialect {
    kind: DialectKind::MySql,
    quote_open: '`',
    quote_close: '`',
    param_marker: '@',
    identity: "AUTO_INCREMENT",
    current_timestamp: "NOW()",
    paging: Paging::LimitComma,
};

static ORACLE: Dialect = Dialect {
    kind: DialectKind::Oracle,
    quote_open: '"',
    quote_close: '"',
    param_marker: ':',
    identity: "GENERATED BY DEFAULT AS IDENTITY",
    current_timestamp: "SYSDATE",
    paging: Paging::Rownum,
};

static POSTGRES: Dialect = Dialect {
    kind: DialectKind::Postgres,
    quote_open: '"',
    quote_close: '"',
    param_marker: '@',
    identity: "GENERATED BY DEFAULT AS IDENTITY",
    current_timestamp: "CURRENT_TIMESTAMP",
    paging: Paging::LimitOffset,
};

impl Dialect {
    /// Returns the descriptor for a dialect.
    pub fn get(kind: DialectKind) -> &'static Dialect {
        match kind {
            DialectKind::SqlServer => &SQL_SERVER,
            DialectKind::MySql => &MYSQL,
            DialectKind::Oracle => &ORACLE,
            DialectKind::Postgres => &POSTGRES,
        }
    }

    pub fn sql_server() -> &'static Dialect {
        &SQL_SERVER
    }

    pub fn mysql() -> &'static Dialect {
        &MYSQL
    }

    pub fn oracle() -> &'static Dialect {
        &ORACLE
    }

    pub fn postgres() -> &'static Dialect {
        &POSTGRES
    }

    /// Quotes an identifier, doubling any embedded closing quote.
    pub fn quote(&self, ident: &str) -> String {
        let mut out = String::with_capacity(ident.len() + 2);
        out.push(self.quote_open);
        for ch in ident.chars() {
            out.push(ch);
            if ch == self.quote_close {
                out.push(ch);
            }
        }
        out.push(self.quote_close);
        out
    }

    /// Renders a named parameter placeholder.
    pub fn placeholder(&self, name: &str) -> String {
        format!("{}{name}", self.param_marker)
    }

    /// The SQL type name for a logical type, consuming the mapping's length
    /// and scale overrides.
    pub fn type_name(&self, ty: Type, length: Option<u32>, scale: Option<u32>) -> String {
        use DialectKind::*;
        use Type::*;

        match (self.kind, ty) {
            (SqlServer, Bool) => "BIT".into(),
            (SqlServer, I8) => "TINYINT".into(),
            (SqlServer, I16) => "SMALLINT".into(),
            (SqlServer, I32) => "INT".into(),
            (SqlServer, I64) => "BIGINT".into(),
            (SqlServer, F32) => "REAL".into(),
            (SqlServer, F64) => "FLOAT".into(),
            (SqlServer, Decimal) => decimal("DECIMAL", length, scale),
            (SqlServer, Text) => match length {
                Some(n) => format!("NVARCHAR({n})"),
                None => "NVARCHAR(MAX)".into(),
            },
            (SqlServer, Date) => "DATE".into(),
            (SqlServer, DateTime) => "DATETIME".into(),

            (MySql, Bool) => "TINYINT(1)".into(),
            (MySql, I8) => "TINYINT".into(),
            (MySql, I16) => "SMALLINT".into(),
            (MySql, I32) => "INT".into(),
            (MySql, I64) => "BIGINT".into(),
            (MySql, F32) => "FLOAT".into(),
            (MySql, F64) => "DOUBLE".into(),
            (MySql, Decimal) => decimal("DECIMAL", length, scale),
            (MySql, Text) => match length {
                Some(n) => format!("VARCHAR({n})"),
                None => "TEXT".into(),
            },
            (MySql, Date) => "DATE".into(),
            (MySql, DateTime) => "DATETIME".into(),

            (Oracle, Bool) => "NUMBER(1)".into(),
            (Oracle, I8) => "NUMBER(3)".into(),
            (Oracle, I16) => "NUMBER(5)".into(),
            (Oracle, I32) => "NUMBER(10)".into(),
            (Oracle, I64) => "NUMBER(19)".into(),
            (Oracle, F32) => "BINARY_FLOAT".into(),
            (Oracle, F64) => "BINARY_DOUBLE".into(),
            (Oracle, Decimal) => decimal("NUMBER", length, scale),
            (Oracle, Text) => match length {
                Some(n) => format!("NVARCHAR2({n})"),
                None => "CLOB".into(),
            },
            (Oracle, Date) => "DATE".into(),
            (Oracle, DateTime) => "TIMESTAMP".into(),

            (Postgres, Bool) => "BOOLEAN".into(),
            (Postgres, I8) => "SMALLINT".into(),
            (Postgres, I16) => "SMALLINT".into(),
            (Postgres, I32) => "INTEGER".into(),
            (Postgres, I64) => "BIGINT".into(),
            (Postgres, F32) => "REAL".into(),
            (Postgres, F64) => "DOUBLE PRECISION".into(),
            (Postgres, Decimal) => decimal("NUMERIC", length, scale),
            (Postgres, Text) => match length {
                Some(n) => format!("VARCHAR({n})"),
                None => "TEXT".into(),
            },
            (Postgres, Date) => "DATE".into(),
            (Postgres, DateTime) => "TIMESTAMP".into(),
        }
    }

    /// The SQL type name for a mapped column.
    pub fn column_type(&self, column: &ColumnMapping) -> String {
        self.type_name(column.ty, column.length, column.scale)
    }

    /// A query probing whether a table exists, for the schema collaborator.
    /// The core never executes it.
    pub fn table_exists_query(&self, schema: Option<&str>, table: &str) -> String {
        let table = sql_literal(table);
        match self.kind {
            DialectKind::SqlServer => format!(
                "SELECT COUNT(*) FROM sys.objects WHERE name = {table} AND type = 'U'"
            ),
            DialectKind::Oracle => {
                format!("SELECT COUNT(*) FROM user_tables WHERE table_name = UPPER({table})")
            }
            DialectKind::MySql | DialectKind::Postgres => {
                let mut query = format!(
                    "SELECT COUNT(*) FROM information_schema.tables WHERE table_name = {table}"
                );
                if let Some(schema) = schema {
                    query.push_str(" AND table_schema = ");
                    query.push_str(&sql_literal(schema));
                }
                query
            }
        }
    }
}

fn decimal(keyword: &str, length: Option<u32>, scale: Option<u32>) -> String {
    let precision = length.unwrap_or(18);
    let scale = scale.unwrap_or(2);
    format!("{keyword}({precision}, {scale})")
}

fn sql_literal(text: &str) -> String {
    format!("'{}'", text.replace('\'', "''"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_length_constrains_type_name() {
        assert_eq!(
            "NVARCHAR(50)",
            Dialect::sql_server().type_name(Type::Text, Some(50), None)
        );
        assert_eq!(
            "TEXT",
            Dialect::postgres().type_name(Type::Text, None, None)
        );
        assert_eq!(
            "NUMBER(10, 4)",
            Dialect::oracle().type_name(Type::Decimal, Some(10), Some(4))
        );
    }

    #[test]
    fn quoting_doubles_embedded_close_quote() {
        assert_eq!("[odd]]name]", Dialect::sql_server().quote("odd]name"));
        assert_eq!("`name`", Dialect::mysql().quote("name"));
    }
}
