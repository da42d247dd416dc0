use super::{Formatter, ToSql};

use quill_core::stmt::Value;

impl ToSql for &Value {
    fn to_sql(self, f: &mut Formatter<'_>) {
        use std::fmt::Write;

        match self {
            Value::Null => f.dst.push_str("NULL"),
            // Rendered as 1/0: not every dialect has boolean literals.
            Value::Bool(value) => f.dst.push_str(if *value { "1" } else { "0" }),
            Value::I8(value) => write!(f.dst, "{value}").unwrap(),
            Value::I16(value) => write!(f.dst, "{value}").unwrap(),
            Value::I32(value) => write!(f.dst, "{value}").unwrap(),
            Value::I64(value) => write!(f.dst, "{value}").unwrap(),
            Value::F32(value) => write!(f.dst, "{value}").unwrap(),
            Value::F64(value) => write!(f.dst, "{value}").unwrap(),
            Value::String(value) => {
                f.dst.push('\'');
                for ch in value.chars() {
                    f.dst.push(ch);
                    if ch == '\'' {
                        f.dst.push(ch);
                    }
                }
                f.dst.push('\'');
            }
        }
    }
}
