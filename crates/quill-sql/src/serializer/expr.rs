use super::{Comma, Delimited, Formatter, Ident, Placeholder, ToSql};

use quill_core::stmt::{BinaryOp, Expr, ExprColumn};

impl ToSql for &Expr {
    fn to_sql(self, f: &mut Formatter<'_>) {
        use Expr::*;

        match self {
            And(expr) => {
                let mut s = "";
                for operand in &expr.operands {
                    fmt!(f, s);
                    // OR binds looser than AND
                    match operand {
                        Or(..) => fmt!(f, "(", operand, ")"),
                        _ => fmt!(f, operand),
                    }
                    s = " AND ";
                }
            }
            Or(expr) => {
                fmt!(f, Delimited(&expr.operands, " OR "));
            }
            BinaryOp(expr) => {
                fmt!(f, expr.lhs, " ", expr.op, " ", expr.rhs);
            }
            Column(expr) => expr.to_sql(f),
            Param(expr) => {
                fmt!(f, Placeholder(&expr.name));
            }
            Value(value) => value.to_sql(f),
            IsNull(expr) => {
                if expr.negate {
                    fmt!(f, expr.expr, " IS NOT NULL");
                } else {
                    fmt!(f, expr.expr, " IS NULL");
                }
            }
            InList(expr) => {
                let keyword = if expr.negate { " NOT IN (" } else { " IN (" };
                if expr.list.is_empty() {
                    // Valid on every dialect and never matches a row.
                    fmt!(f, expr.expr, keyword, "NULL)");
                } else {
                    fmt!(f, expr.expr, keyword, Comma(&expr.list), ")");
                }
            }
            Like(expr) => {
                let keyword = if expr.negate { " NOT LIKE " } else { " LIKE " };
                fmt!(f, expr.expr, keyword, expr.pattern);
            }
        }
    }
}

impl ToSql for &ExprColumn {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match &self.table {
            Some(table) => fmt!(f, Ident(table), ".", Ident(&self.column)),
            None => fmt!(f, Ident(&self.column)),
        }
    }
}

impl ToSql for BinaryOp {
    fn to_sql(self, f: &mut Formatter<'_>) {
        f.dst.push_str(match self {
            BinaryOp::Eq => "=",
            BinaryOp::Ne => "<>",
            BinaryOp::Ge => ">=",
            BinaryOp::Gt => ">",
            BinaryOp::Le => "<=",
            BinaryOp::Lt => "<",
        })
    }
}
