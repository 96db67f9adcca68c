mod config;
pub use config::Config;

pub mod driver;

mod generator;
pub use generator::Generator;

pub use relgen_codegen::Output;
pub use relgen_core::async_trait;
pub use relgen_core::{
    reader::MemorySchema, Cardinality, Direction, Error, ForeignKeyEdge, GeneratedRelation,
    IndexDescriptor, Result, SchemaReader,
};
