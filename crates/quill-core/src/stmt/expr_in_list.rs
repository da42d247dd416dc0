use super::Expr;

/// Membership in an expanded value list.
///
/// The list holds one parameter placeholder per expanded value. An empty
/// list is kept as-is; the emitter renders it as a valid, always-false
/// fragment.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprInList {
    /// When `true`, this is a `NOT IN` check.
    pub negate: bool,

    pub expr: Box<Expr>,

    pub list: Vec<Expr>,
}

impl Expr {
    pub fn in_list(expr: impl Into<Self>, list: Vec<Expr>) -> Self {
        ExprInList {
            negate: false,
            expr: Box::new(expr.into()),
            list,
        }
        .into()
    }
}

impl From<ExprInList> for Expr {
    fn from(value: ExprInList) -> Self {
        Self::InList(value)
    }
}
