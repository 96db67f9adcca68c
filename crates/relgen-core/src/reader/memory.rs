use crate::{async_trait, schema::*, Result, SchemaReader};

use indexmap::IndexMap;

/// A schema held in memory.
///
/// Answers [`SchemaReader`] queries with the same direction and ordering rules
/// as the database-backed readers, without a connection.
#[derive(Debug, Default, Clone)]
pub struct MemorySchema {
    foreign_keys: Vec<ForeignKey>,
    indexes: IndexMap<String, Vec<IndexDescriptor>>,
}

/// `table.column` references `references_table.references_column`
#[derive(Debug, Clone)]
struct ForeignKey {
    table: String,
    column: String,
    references_table: String,
    references_column: String,
}

impl MemorySchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares that `table.column` references `references_table.references_column`.
    pub fn foreign_key(
        mut self,
        table: &str,
        column: &str,
        references_table: &str,
        references_column: &str,
    ) -> Self {
        self.foreign_keys.push(ForeignKey {
            table: table.to_string(),
            column: column.to_string(),
            references_table: references_table.to_string(),
            references_column: references_column.to_string(),
        });
        self
    }

    /// Adds an index to `table`.
    pub fn index(mut self, table: &str, index: IndexDescriptor) -> Self {
        self.indexes.entry(table.to_string()).or_default().push(index);
        self
    }
}

#[async_trait]
impl SchemaReader for MemorySchema {
    async fn fetch_relations(&self, table: &str) -> Result<Vec<ForeignKeyEdge>> {
        let mut edges = vec![];

        for fk in &self.foreign_keys {
            if fk.references_table == table {
                edges.push(ForeignKeyEdge::new(
                    table,
                    &fk.table,
                    &fk.column,
                    &fk.references_column,
                    Direction::Outgoing,
                )?);
            }
        }

        for fk in &self.foreign_keys {
            if fk.table == table {
                edges.push(ForeignKeyEdge::new(
                    table,
                    &fk.references_table,
                    &fk.references_column,
                    &fk.column,
                    Direction::Incoming,
                )?);
            }
        }

        // UNION semantics: identical rows collapse into one
        let mut seen = std::collections::HashSet::new();
        edges.retain(|edge| seen.insert(edge.clone()));

        edges.sort_by(|a, b| a.referenced_table().cmp(b.referenced_table()));

        Ok(edges)
    }

    async fn fetch_indexes(&self, table: &str) -> Result<Vec<IndexDescriptor>> {
        let mut indexes = self.indexes.get(table).cloned().unwrap_or_default();
        indexes.sort_by(|a, b| a.index_name.cmp(&b.index_name));
        Ok(indexes)
    }
}
