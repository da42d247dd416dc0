use super::Expr;

/// A named parameter placeholder.
///
/// The name is the unique name registered in the statement's parameter set;
/// the dialect's marker character is prepended at render time.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprParam {
    pub name: String,
}

impl Expr {
    pub fn param(name: impl Into<String>) -> Self {
        ExprParam { name: name.into() }.into()
    }
}

impl From<ExprParam> for Expr {
    fn from(value: ExprParam) -> Self {
        Self::Param(value)
    }
}
