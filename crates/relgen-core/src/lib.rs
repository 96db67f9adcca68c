mod error;
pub use error::Error;

pub mod reader;
pub use reader::SchemaReader;

pub mod relation;
pub use relation::{Cardinality, GeneratedRelation};

pub mod schema;
pub use schema::{Direction, ForeignKeyEdge, IndexDescriptor};

/// A Result type alias that uses relgen's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use async_trait::async_trait;
