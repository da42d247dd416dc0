//! The typed predicate surface and its compiler.
//!
//! A predicate is built with [`Field`] handles (`field.eq(3)`,
//! `field.contains("Li")`, `!pred`, `a & b`) into a [`Pred`] tree, then
//! compiled against a column-resolution strategy into a
//! [`stmt::Expr`](crate::stmt::Expr) node plus parameter bindings.

mod compile;
pub use compile::Compiler;

mod field;
pub use field::Field;

mod pred;
pub use pred::{Operand, Pred, PredCmp, PredIn, PredStr, StrMethod};

mod resolve;
pub use resolve::{AliasResolver, ResolveColumn, TableResolver};
