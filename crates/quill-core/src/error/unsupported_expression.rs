use super::Error;

/// Error when a predicate uses a syntactic shape outside the documented
/// operator/method set.
///
/// The message carries the offending fragment's textual form for diagnosis;
/// unsupported shapes are never silently ignored.
#[derive(Debug)]
pub(super) struct UnsupportedExpression {
    pub(super) fragment: Box<str>,
}

impl std::error::Error for UnsupportedExpression {}

impl core::fmt::Display for UnsupportedExpression {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unsupported expression: {}", self.fragment)
    }
}

impl Error {
    /// Creates an unsupported expression error carrying the offending
    /// fragment's textual form.
    pub fn unsupported_expression(fragment: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnsupportedExpression(
            UnsupportedExpression {
                fragment: fragment.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is an unsupported expression error.
    pub fn is_unsupported_expression(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnsupportedExpression(_))
    }
}
