#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::{Comma, Delimited};

mod ident;
use ident::Ident;

mod placeholder;
use placeholder::Placeholder;

// Fragment serializers
mod expr;
mod statement;
mod value;

use crate::dialect::{Dialect, DialectKind};
use crate::stmt::Statement;

use quill_core::{Error, Result};

/// Serializes statements to SQL text for one dialect.
///
/// The serializer holds only the dialect descriptor: parameters are bound
/// when statements are built, so rendering is a pure tree-to-text walk.
#[derive(Debug)]
pub struct Serializer<'a> {
    /// The dialect descriptor handles the differences between SQL dialects:
    /// quoting, parameter markers, and pagination strategy.
    dialect: &'a Dialect,
}

struct Formatter<'a> {
    /// Handle to the serializer
    serializer: &'a Serializer<'a>,

    /// Where to write the serialized SQL
    dst: &'a mut String,
}

impl<'a> Serializer<'a> {
    pub fn new(dialect: &'a Dialect) -> Self {
        Self { dialect }
    }

    pub fn sql_server() -> Serializer<'static> {
        Serializer {
            dialect: Dialect::sql_server(),
        }
    }

    pub fn mysql() -> Serializer<'static> {
        Serializer {
            dialect: Dialect::mysql(),
        }
    }

    pub fn oracle() -> Serializer<'static> {
        Serializer {
            dialect: Dialect::oracle(),
        }
    }

    pub fn postgres() -> Serializer<'static> {
        Serializer {
            dialect: Dialect::postgres(),
        }
    }

    pub fn dialect(&self) -> &Dialect {
        self.dialect
    }

    /// Renders a statement to SQL text.
    ///
    /// Statements that cannot render on this dialect are rejected here,
    /// before any text is emitted; no partial statement is ever returned.
    pub fn serialize(&self, stmt: &Statement) -> Result<String> {
        self.validate(stmt)?;

        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
        };

        stmt.to_sql(&mut fmt);

        ret.push(';');
        Ok(ret)
    }

    fn validate(&self, stmt: &Statement) -> Result<()> {
        if let Statement::Paged(paged) = stmt {
            // Ranking functions number rows by an explicit ordering; paging
            // without one is rejected rather than silently defaulted.
            if self.dialect.paging.requires_order_by() && paged.select.order_by.is_none() {
                return Err(Error::invalid_statement(
                    "paged query requires an ORDER BY for ranked pagination",
                ));
            }
        }
        Ok(())
    }

    fn is_sql_server(&self) -> bool {
        matches!(self.dialect.kind, DialectKind::SqlServer)
    }

    fn is_mysql(&self) -> bool {
        matches!(self.dialect.kind, DialectKind::MySql)
    }

    fn is_oracle(&self) -> bool {
        matches!(self.dialect.kind, DialectKind::Oracle)
    }
}
