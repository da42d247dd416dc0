mod error;
pub use error::Error;

pub mod schema;
pub use schema::{Entity, Registry};

pub mod param;
pub use param::{Param, ParamSet, Params};

pub mod predicate;

pub mod stmt;

/// A Result type alias that uses quill's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
