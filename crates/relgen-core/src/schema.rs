mod foreign_key;
pub use foreign_key::{Direction, ForeignKeyEdge};

mod index;
pub use index::IndexDescriptor;
