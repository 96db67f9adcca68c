use crate::{Error, Result};

/// A foreign key relationship touching the table under generation.
///
/// Edges are produced by a [`SchemaReader`](crate::SchemaReader) and are not
/// modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ForeignKeyEdge {
    subject_table: String,
    referenced_table: String,
    foreign_key_column: String,
    referenced_column: String,
    direction: Direction,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Another table holds a foreign key pointing at the subject table. The
    /// relation cardinality is derived from the other table's indexes.
    Outgoing,

    /// The subject table holds the foreign key.
    Incoming,
}

impl ForeignKeyEdge {
    /// Creates an edge, rejecting empty column names.
    pub fn new(
        subject_table: impl Into<String>,
        referenced_table: impl Into<String>,
        foreign_key_column: impl Into<String>,
        referenced_column: impl Into<String>,
        direction: Direction,
    ) -> Result<Self> {
        let edge = Self {
            subject_table: subject_table.into(),
            referenced_table: referenced_table.into(),
            foreign_key_column: foreign_key_column.into(),
            referenced_column: referenced_column.into(),
            direction,
        };

        if edge.foreign_key_column.is_empty() || edge.referenced_column.is_empty() {
            return Err(Error::invalid_result(format!(
                "foreign key between `{}` and `{}` has an empty column name",
                edge.subject_table, edge.referenced_table
            )));
        }

        Ok(edge)
    }

    /// The table relations are being generated for.
    pub fn subject_table(&self) -> &str {
        &self.subject_table
    }

    /// The other table of the edge; the generated accessor points at it.
    pub fn referenced_table(&self) -> &str {
        &self.referenced_table
    }

    /// Column passed as the foreign key of the generated accessor.
    pub fn foreign_key_column(&self) -> &str {
        &self.foreign_key_column
    }

    /// Column passed as the local key of the generated accessor.
    pub fn referenced_column(&self) -> &str {
        &self.referenced_column
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }
}

impl Direction {
    pub fn is_outgoing(self) -> bool {
        matches!(self, Self::Outgoing)
    }

    pub fn is_incoming(self) -> bool {
        matches!(self, Self::Incoming)
    }
}
