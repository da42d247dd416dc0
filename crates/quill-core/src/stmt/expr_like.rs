use super::Expr;

/// Pattern match against a column.
///
/// Wildcard wrapping happens when the predicate is compiled, so the pattern
/// here is already its final form (a parameter placeholder for literal
/// patterns, or a column reference).
#[derive(Debug, Clone, PartialEq)]
pub struct ExprLike {
    /// When `true`, this is a `NOT LIKE` check.
    pub negate: bool,

    pub expr: Box<Expr>,

    pub pattern: Box<Expr>,
}

impl Expr {
    pub fn like(expr: impl Into<Self>, pattern: impl Into<Self>) -> Self {
        ExprLike {
            negate: false,
            expr: Box::new(expr.into()),
            pattern: Box::new(pattern.into()),
        }
        .into()
    }
}

impl From<ExprLike> for Expr {
    fn from(value: ExprLike) -> Self {
        Self::Like(value)
    }
}
