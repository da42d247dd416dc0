use super::{Operand, Pred, PredCmp, PredIn, PredStr, ResolveColumn, StrMethod};
use crate::param::Params;
use crate::stmt::{BinaryOp, Expr, ExprInList, ExprIsNull, ExprLike, Value};
use crate::{Error, Result};

/// Compiles a [`Pred`] tree into a [`stmt::Expr`](crate::stmt::Expr) node,
/// registering parameter bindings as it walks.
///
/// Dispatch is by predicate kind. Property operands resolve through the
/// column-resolution strategy; literal operands become named parameters,
/// with the referenced property's name as the base name. Compilation is
/// all-or-nothing: on any failure no node is returned and the parameter
/// sink's partial contents must be discarded with the statement.
pub struct Compiler<'a, P> {
    resolver: &'a dyn ResolveColumn,
    params: &'a mut P,
}

impl<'a, P: Params> Compiler<'a, P> {
    pub fn new(resolver: &'a dyn ResolveColumn, params: &'a mut P) -> Self {
        Self { resolver, params }
    }

    pub fn compile(&mut self, pred: &Pred) -> Result<Expr> {
        match pred {
            Pred::Cmp(cmp) => self.compile_cmp(cmp),
            Pred::And(lhs, rhs) => {
                let lhs = self.compile(lhs)?;
                let rhs = self.compile(rhs)?;
                Ok(Expr::and(lhs, rhs))
            }
            Pred::Or(lhs, rhs) => {
                let lhs = self.compile(lhs)?;
                let rhs = self.compile(rhs)?;
                Ok(Expr::or(lhs, rhs))
            }
            Pred::Str(str_pred) => self.compile_str(str_pred),
            Pred::In(in_pred) => self.compile_in(in_pred),
            Pred::Not(inner) => self.compile_not(inner),
        }
    }

    fn compile_cmp(&mut self, cmp: &PredCmp) -> Result<Expr> {
        // Comparisons against the literal null compile to IS [NOT] NULL and
        // contribute no parameter.
        if cmp.op.is_eq() || cmp.op.is_ne() {
            match (&cmp.lhs, &cmp.rhs) {
                (Operand::Property(property), Operand::Value(Value::Null))
                | (Operand::Value(Value::Null), Operand::Property(property)) => {
                    return Ok(ExprIsNull {
                        negate: cmp.op.is_ne(),
                        expr: Box::new(self.column(property)?),
                    }
                    .into());
                }
                _ => {}
            }
        }

        match (&cmp.lhs, &cmp.rhs) {
            (Operand::Property(lhs), Operand::Property(rhs)) => {
                let lhs = self.column(lhs)?;
                let rhs = self.column(rhs)?;
                Ok(Expr::binary_op(lhs, cmp.op, rhs))
            }
            (Operand::Property(property), Operand::Value(value)) => {
                let column = self.column(property)?;
                let param = self.param(property, value.clone());
                Ok(Expr::binary_op(column, cmp.op, param))
            }
            (Operand::Value(value), Operand::Property(property)) => {
                let column = self.column(property)?;
                let param = self.param(property, value.clone());
                Ok(Expr::binary_op(param, cmp.op, column))
            }
            (Operand::Value(..), Operand::Value(..)) => Err(Error::unsupported_expression(
                format!("comparison references no entity property: {cmp:?}"),
            )),
        }
    }

    fn compile_str(&mut self, str_pred: &PredStr) -> Result<Expr> {
        let Operand::Property(property) = &str_pred.recv else {
            return Err(Error::unsupported_expression(format!(
                "string method on a non-column receiver: {str_pred:?}"
            )));
        };
        let recv = self.column(property)?;

        if let StrMethod::Equals = str_pred.method {
            let rhs = match &str_pred.arg {
                Operand::Property(other) => self.column(other)?,
                Operand::Value(value) => self.param(property, value.clone()),
            };
            return Ok(Expr::binary_op(recv, BinaryOp::Eq, rhs));
        }

        // LIKE variants: literal arguments are wrapped with wildcards before
        // binding; a column argument is matched as-is.
        let pattern = match &str_pred.arg {
            Operand::Property(other) => self.column(other)?,
            Operand::Value(value) => {
                let Some(text) = value.as_str() else {
                    return Err(Error::unsupported_expression(format!(
                        "string method argument is not a string: {str_pred:?}"
                    )));
                };
                let pattern = match str_pred.method {
                    StrMethod::Contains => format!("%{text}%"),
                    StrMethod::StartsWith => format!("{text}%"),
                    StrMethod::EndsWith => format!("%{text}"),
                    StrMethod::Equals => unreachable!(),
                };
                self.param(property, pattern.into())
            }
        };

        Ok(ExprLike {
            negate: false,
            expr: Box::new(recv),
            pattern: Box::new(pattern),
        }
        .into())
    }

    fn compile_in(&mut self, in_pred: &PredIn) -> Result<Expr> {
        let Operand::Property(property) = &in_pred.expr else {
            return Err(Error::unsupported_expression(format!(
                "membership test on a non-column expression: {in_pred:?}"
            )));
        };
        let column = self.column(property)?;

        let list = in_pred
            .values
            .iter()
            .map(|value| self.param(property, value.clone()))
            .collect();

        Ok(ExprInList {
            negate: false,
            expr: Box::new(column),
            list,
        }
        .into())
    }

    fn compile_not(&mut self, inner: &Pred) -> Result<Expr> {
        match inner {
            Pred::Cmp(..) | Pred::Str(..) | Pred::In(..) => self.compile(inner)?.negate(),
            _ => Err(Error::unsupported_expression(format!(
                "cannot negate {inner:?}"
            ))),
        }
    }

    fn column(&self, property: &str) -> Result<Expr> {
        self.resolver.resolve(property).map(Expr::Column)
    }

    fn param(&mut self, base: &str, value: Value) -> Expr {
        Expr::param(self.params.bind(base, value))
    }
}
