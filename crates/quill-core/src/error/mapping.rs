use super::Error;

/// Error when an entity property has no resolvable column, or when a mapping
/// declaration is itself invalid (duplicate property, more than one key).
///
/// Mapping errors are configuration defects: they are never recovered from
/// and surface directly to the caller.
#[derive(Debug)]
pub(super) struct MappingError {
    pub(super) message: Box<str>,
}

impl std::error::Error for MappingError {}

impl core::fmt::Display for MappingError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "mapping error: {}", self.message)
    }
}

impl Error {
    /// Creates a mapping error for a property with no resolved column.
    pub fn mapping(entity: &str, property: &str) -> Error {
        Error::from(super::ErrorKind::Mapping(MappingError {
            message: format!("no column mapped for property `{property}` on entity `{entity}`")
                .into(),
        }))
    }

    /// Creates a mapping error for an invalid mapping declaration.
    pub fn invalid_mapping(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Mapping(MappingError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is a mapping error.
    pub fn is_mapping(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Mapping(_))
    }
}
