mod invalid_statement;
mod mapping;
mod unmapped_entity;
mod unsupported_expression;

use invalid_statement::InvalidStatement;
use mapping::MappingError;
use unmapped_entity::UnmappedEntity;
use unsupported_expression::UnsupportedExpression;

/// An error that can occur while resolving mappings, compiling predicates, or
/// building statements.
///
/// Every kind is a deterministic, input-dependent failure: none of them are
/// retried internally, and the only fix is a corrected mapping or predicate on
/// the caller's side.
pub struct Error {
    kind: ErrorKind,
}

#[derive(Debug)]
enum ErrorKind {
    /// An entity property has no resolvable column, or a mapping declaration
    /// is itself invalid.
    Mapping(MappingError),

    /// No table metadata has been resolved for an entity type.
    UnmappedEntity(UnmappedEntity),

    /// A predicate shape outside the supported operator/method set.
    UnsupportedExpression(UnsupportedExpression),

    /// A statement that cannot be rendered as requested.
    InvalidStatement(InvalidStatement),
}

impl Error {
    fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self { kind }
    }
}

impl std::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        use core::fmt::Display;

        match &self.kind {
            ErrorKind::Mapping(e) => Display::fmt(e, f),
            ErrorKind::UnmappedEntity(e) => Display::fmt(e, f),
            ErrorKind::UnsupportedExpression(e) => Display::fmt(e, f),
            ErrorKind::InvalidStatement(e) => Display::fmt(e, f),
        }
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Debug::fmt(&self.kind, f)
    }
}
