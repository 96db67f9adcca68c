use super::Cardinality;

/// A classified relation with its names resolved, ready to be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedRelation {
    pub cardinality: Cardinality,

    /// Table the accessor points at
    pub referenced_table: String,

    pub foreign_key_column: String,

    pub local_key_column: String,

    /// Model class of the referenced table, e.g. `User`
    pub class_name: String,

    /// Accessor method / property name, e.g. `user` or `comments`
    pub accessor_name: String,
}
