use quill_core::stmt::Expr;

/// The WHERE section of a statement.
///
/// Renders its own leading keyword exactly once, and nothing at all when
/// empty.
#[derive(Debug, Clone, Default)]
pub struct Filter {
    pub expr: Option<Expr>,
}

impl From<Expr> for Filter {
    fn from(expr: Expr) -> Self {
        Self { expr: Some(expr) }
    }
}
