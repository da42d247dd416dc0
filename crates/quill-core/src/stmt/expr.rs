use super::*;
use crate::{Error, Result};

/// One node of a compiled predicate tree.
///
/// Predicate nodes are immutable value trees: column names and parameter
/// names are resolved to final strings when the node is built, so a node
/// never references mapping state after construction.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// AND a set of expressions
    And(ExprAnd),

    /// OR a set of expressions
    Or(ExprOr),

    /// Binary comparison
    BinaryOp(ExprBinaryOp),

    /// A resolved column reference
    Column(ExprColumn),

    /// A named parameter placeholder
    Param(ExprParam),

    /// An inline literal value
    Value(Value),

    /// Whether an expression is (or is not) null. This is distinct from a
    /// binary comparison because of how databases treat null comparisons.
    IsNull(ExprIsNull),

    /// Membership in an expanded value list
    InList(ExprInList),

    /// Pattern match
    Like(ExprLike),
}

impl Expr {
    pub fn value(value: impl Into<Value>) -> Self {
        Self::Value(value.into())
    }

    /// Is a value that evaluates to null
    pub fn is_value_null(&self) -> bool {
        matches!(self, Self::Value(Value::Null))
    }

    /// The structural inverse of this predicate node.
    ///
    /// Comparison operators flip to their logical inverse; `IS NULL`,
    /// `IN` and `LIKE` nodes toggle their negation flag. Negation is an
    /// involution: negating twice restores the original node. Connectives
    /// and bare leaves cannot be negated.
    pub fn negate(self) -> Result<Self> {
        match self {
            Self::BinaryOp(mut expr) => {
                expr.op = expr.op.invert();
                Ok(expr.into())
            }
            Self::IsNull(mut expr) => {
                expr.negate = !expr.negate;
                Ok(expr.into())
            }
            Self::InList(mut expr) => {
                expr.negate = !expr.negate;
                Ok(expr.into())
            }
            Self::Like(mut expr) => {
                expr.negate = !expr.negate;
                Ok(expr.into())
            }
            expr => Err(Error::unsupported_expression(format!(
                "cannot negate {expr:?}"
            ))),
        }
    }
}
