use super::{Filter, OrderBy, SelectColumn};
use quill_core::stmt::Expr;

/// A select over an already-rendered inner query, wrapped as a named
/// derived table.
///
/// This layers a typed filter and ordering on top of an existing SQL string
/// without re-parsing it. Outer column references resolve by the names the
/// inner query projected (see
/// [`AliasResolver`](quill_core::predicate::AliasResolver)).
#[derive(Debug, Clone)]
pub struct DerivedSelect {
    pub inner: String,
    pub alias: String,
    pub columns: Vec<SelectColumn>,
    pub filter: Filter,
    pub order_by: Option<OrderBy>,
}

impl DerivedSelect {
    pub fn new(inner: impl Into<String>, alias: impl Into<String>) -> Self {
        let mut inner = inner.into();
        // A previously serialized statement carries a trailing terminator
        // that cannot appear inside a subquery.
        while inner.ends_with(';') || inner.ends_with(char::is_whitespace) {
            inner.pop();
        }

        Self {
            inner,
            alias: alias.into(),
            columns: vec![],
            filter: Filter::default(),
            order_by: None,
        }
    }

    pub fn filter(mut self, expr: Expr) -> Self {
        self.filter = expr.into();
        self
    }

    pub fn order_by(mut self, order_by: OrderBy) -> Self {
        self.order_by = Some(order_by);
        self
    }
}
