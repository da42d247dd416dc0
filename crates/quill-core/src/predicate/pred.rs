use crate::stmt::{BinaryOp, Value};

use std::ops;

/// One node of a source predicate.
///
/// `Pred` is the input side of the compiler: it records what the caller
/// wrote, before column names are resolved or parameters bound.
#[derive(Debug, Clone, PartialEq)]
pub enum Pred {
    /// Binary comparison
    Cmp(PredCmp),

    /// Both operands must hold
    And(Box<Pred>, Box<Pred>),

    /// Either operand must hold
    Or(Box<Pred>, Box<Pred>),

    /// String-method predicate on a column-like receiver
    Str(PredStr),

    /// Membership of a property in a value collection
    In(PredIn),

    /// Logical negation of a comparison, string-method, or membership
    /// predicate
    Not(Box<Pred>),
}

/// One side of a comparison: either a reference to an entity property
/// (column-like) or an immediately evaluated literal.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Property(String),
    Value(Value),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PredCmp {
    pub lhs: Operand,
    pub op: BinaryOp,
    pub rhs: Operand,
}

/// The supported string methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrMethod {
    Equals,
    Contains,
    StartsWith,
    EndsWith,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PredStr {
    pub recv: Operand,
    pub method: StrMethod,
    pub arg: Operand,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PredIn {
    pub expr: Operand,
    pub values: Vec<Value>,
}

impl Pred {
    pub fn and(self, rhs: Pred) -> Pred {
        Pred::And(Box::new(self), Box::new(rhs))
    }

    pub fn or(self, rhs: Pred) -> Pred {
        Pred::Or(Box::new(self), Box::new(rhs))
    }
}

impl ops::Not for Pred {
    type Output = Pred;

    fn not(self) -> Pred {
        Pred::Not(Box::new(self))
    }
}

impl ops::BitAnd for Pred {
    type Output = Pred;

    fn bitand(self, rhs: Pred) -> Pred {
        self.and(rhs)
    }
}

impl ops::BitOr for Pred {
    type Output = Pred;

    fn bitor(self, rhs: Pred) -> Pred {
        self.or(rhs)
    }
}

impl From<PredCmp> for Pred {
    fn from(value: PredCmp) -> Self {
        Self::Cmp(value)
    }
}

impl From<PredStr> for Pred {
    fn from(value: PredStr) -> Self {
        Self::Str(value)
    }
}

impl From<PredIn> for Pred {
    fn from(value: PredIn) -> Self {
        Self::In(value)
    }
}
