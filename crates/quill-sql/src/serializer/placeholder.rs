use super::{Formatter, ToSql};

/// A named parameter placeholder, rendered with the dialect's marker.
pub(super) struct Placeholder<'a>(pub(super) &'a str);

impl ToSql for Placeholder<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        f.dst.push(f.serializer.dialect.param_marker);
        f.dst.push_str(self.0);
    }
}
