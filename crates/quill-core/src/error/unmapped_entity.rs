use super::Error;

/// Error when no table metadata has been resolved for an entity type.
///
/// Surfaced immediately; fatal to the calling operation.
#[derive(Debug)]
pub(super) struct UnmappedEntity {
    pub(super) entity: Box<str>,
}

impl std::error::Error for UnmappedEntity {}

impl core::fmt::Display for UnmappedEntity {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "no table metadata registered for entity `{}`", self.entity)
    }
}

impl Error {
    /// Creates an unmapped entity error.
    pub fn unmapped_entity(entity: &str) -> Error {
        Error::from(super::ErrorKind::UnmappedEntity(UnmappedEntity {
            entity: entity.into(),
        }))
    }

    /// Returns `true` if this error is an unmapped entity error.
    pub fn is_unmapped_entity(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnmappedEntity(_))
    }
}
