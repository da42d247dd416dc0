use super::{Formatter, ToSql};

/// An identifier, quoted with the dialect's quote pair. An embedded closing
/// quote is escaped by doubling.
pub(super) struct Ident<S>(pub(super) S);

impl<S: AsRef<str>> ToSql for Ident<S> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let dialect = f.serializer.dialect;

        f.dst.push(dialect.quote_open);
        for ch in self.0.as_ref().chars() {
            f.dst.push(ch);
            if ch == dialect.quote_close {
                f.dst.push(ch);
            }
        }
        f.dst.push(dialect.quote_close);
    }
}
