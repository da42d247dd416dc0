use super::{Operand, Pred, PredCmp, PredIn, PredStr, StrMethod};
use crate::stmt::{BinaryOp, Value};

use std::marker::PhantomData;

/// A typed handle on an entity property, used to build predicates.
///
/// A `Field<T>` only accepts values convertible to `T`, so the predicate
/// surface stays as strongly typed as the entity itself:
///
/// ```
/// use quill_core::predicate::Field;
///
/// const CATEGORY_ID: Field<i32> = Field::new("category_id");
/// const MEMBER_NAME: Field<String> = Field::new("member_name");
///
/// let pred = CATEGORY_ID.eq(3) & MEMBER_NAME.contains("Li");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Field<T> {
    name: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Field<T> {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _marker: PhantomData,
        }
    }

    /// The property name this handle refers to.
    pub fn name(&self) -> &'static str {
        self.name
    }

    fn operand(&self) -> Operand {
        Operand::Property(self.name.to_string())
    }

    /// Compares this property against another property of the same entity.
    pub fn cmp_field<U>(&self, op: BinaryOp, other: &Field<U>) -> Pred {
        PredCmp {
            lhs: self.operand(),
            op,
            rhs: other.operand(),
        }
        .into()
    }

    pub fn eq_field<U>(&self, other: &Field<U>) -> Pred {
        self.cmp_field(BinaryOp::Eq, other)
    }

    pub fn ne_field<U>(&self, other: &Field<U>) -> Pred {
        self.cmp_field(BinaryOp::Ne, other)
    }

    /// Compares this property against the literal null.
    ///
    /// Compiles to `IS NULL` rather than a parameter comparison.
    pub fn is_null(&self) -> Pred {
        PredCmp {
            lhs: self.operand(),
            op: BinaryOp::Eq,
            rhs: Operand::Value(Value::Null),
        }
        .into()
    }

    /// Compares this property against the literal null, negated.
    pub fn is_not_null(&self) -> Pred {
        PredCmp {
            lhs: self.operand(),
            op: BinaryOp::Ne,
            rhs: Operand::Value(Value::Null),
        }
        .into()
    }
}

impl<T: Into<Value>> Field<T> {
    fn cmp(&self, op: BinaryOp, value: impl Into<T>) -> Pred {
        PredCmp {
            lhs: self.operand(),
            op,
            rhs: Operand::Value(value.into().into()),
        }
        .into()
    }

    pub fn eq(&self, value: impl Into<T>) -> Pred {
        self.cmp(BinaryOp::Eq, value)
    }

    pub fn ne(&self, value: impl Into<T>) -> Pred {
        self.cmp(BinaryOp::Ne, value)
    }

    pub fn gt(&self, value: impl Into<T>) -> Pred {
        self.cmp(BinaryOp::Gt, value)
    }

    pub fn ge(&self, value: impl Into<T>) -> Pred {
        self.cmp(BinaryOp::Ge, value)
    }

    pub fn lt(&self, value: impl Into<T>) -> Pred {
        self.cmp(BinaryOp::Lt, value)
    }

    pub fn le(&self, value: impl Into<T>) -> Pred {
        self.cmp(BinaryOp::Le, value)
    }

    /// Membership of this property in a value collection.
    ///
    /// Expands to an `IN` fragment with one uniquely named parameter per
    /// value.
    pub fn in_list<I, V>(&self, values: I) -> Pred
    where
        I: IntoIterator<Item = V>,
        V: Into<T>,
    {
        PredIn {
            expr: self.operand(),
            values: values.into_iter().map(|v| v.into().into()).collect(),
        }
        .into()
    }
}

impl Field<String> {
    fn str_method(&self, method: StrMethod, arg: Operand) -> Pred {
        PredStr {
            recv: self.operand(),
            method,
            arg,
        }
        .into()
    }

    pub fn equals(&self, arg: impl Into<String>) -> Pred {
        self.str_method(StrMethod::Equals, Operand::Value(arg.into().into()))
    }

    pub fn contains(&self, arg: impl Into<String>) -> Pred {
        self.str_method(StrMethod::Contains, Operand::Value(arg.into().into()))
    }

    pub fn starts_with(&self, arg: impl Into<String>) -> Pred {
        self.str_method(StrMethod::StartsWith, Operand::Value(arg.into().into()))
    }

    pub fn ends_with(&self, arg: impl Into<String>) -> Pred {
        self.str_method(StrMethod::EndsWith, Operand::Value(arg.into().into()))
    }

    pub fn equals_field(&self, other: &Field<String>) -> Pred {
        self.str_method(StrMethod::Equals, other.operand())
    }

    pub fn contains_field(&self, other: &Field<String>) -> Pred {
        self.str_method(StrMethod::Contains, other.operand())
    }

    pub fn starts_with_field(&self, other: &Field<String>) -> Pred {
        self.str_method(StrMethod::StartsWith, other.operand())
    }

    pub fn ends_with_field(&self, other: &Field<String>) -> Pred {
        self.str_method(StrMethod::EndsWith, other.operand())
    }
}
