mod memory;
pub use memory::MemorySchema;

use crate::{async_trait, schema::*, Result};

use std::fmt::Debug;

/// Answers the two metadata queries relation generation needs.
///
/// Implementations must bind table names as query parameters rather than
/// splicing them into SQL text.
#[async_trait]
pub trait SchemaReader: Debug + Send + Sync {
    /// Foreign keys touching `table` in both directions, ordered by
    /// referenced table name.
    ///
    /// Rows where another table references `table` are
    /// [`Direction::Outgoing`]; rows where `table` holds the foreign key are
    /// [`Direction::Incoming`]. A table without foreign keys, or one that does
    /// not exist, yields an empty list.
    async fn fetch_relations(&self, table: &str) -> Result<Vec<ForeignKeyEdge>>;

    /// One descriptor per index on `table`, primary key included, ordered by
    /// index name.
    async fn fetch_indexes(&self, table: &str) -> Result<Vec<IndexDescriptor>>;
}

#[async_trait]
impl<T: SchemaReader + ?Sized> SchemaReader for &T {
    async fn fetch_relations(&self, table: &str) -> Result<Vec<ForeignKeyEdge>> {
        (**self).fetch_relations(table).await
    }

    async fn fetch_indexes(&self, table: &str) -> Result<Vec<IndexDescriptor>> {
        (**self).fetch_indexes(table).await
    }
}
