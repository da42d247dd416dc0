pub mod dialect;
pub use dialect::{Dialect, DialectKind};

pub mod serializer;
pub use serializer::Serializer;

pub mod stmt;
pub use stmt::Statement;
