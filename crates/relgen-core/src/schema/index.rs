/// Describes one index on one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexDescriptor {
    /// Index name as reported by the database
    pub index_name: String,

    /// When `true`, indexed entries are unique
    pub is_unique: bool,

    /// When `true`, the index backs the table's primary key.
    pub is_primary: bool,

    /// Indexed columns in physical attribute order, which is not necessarily
    /// the order of the index key.
    pub ordered_column_list: Vec<String>,

    /// 1-based rank, within the index key, of the first listed column.
    pub position_in_index: u32,
}

impl IndexDescriptor {
    pub fn new(index_name: impl Into<String>, columns: &[&str]) -> Self {
        Self {
            index_name: index_name.into(),
            is_unique: false,
            is_primary: false,
            ordered_column_list: columns.iter().map(|c| c.to_string()).collect(),
            position_in_index: 1,
        }
    }

    /// Marks the index as the primary key, which implies uniqueness.
    pub fn primary(mut self) -> Self {
        self.is_primary = true;
        self.is_unique = true;
        self
    }

    pub fn unique(mut self) -> Self {
        self.is_unique = true;
        self
    }

    pub fn position(mut self, position_in_index: u32) -> Self {
        self.position_in_index = position_in_index;
        self
    }

    /// Returns `true` if the index covers exactly `column` and nothing else.
    pub fn covers_exactly(&self, column: &str) -> bool {
        matches!(&self.ordered_column_list[..], [only] if only == column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covers_exactly() {
        assert!(IndexDescriptor::new("users_pkey", &["id"]).covers_exactly("id"));
        assert!(!IndexDescriptor::new("users_pkey", &["id"]).covers_exactly("user_id"));
        assert!(!IndexDescriptor::new("idx", &["user_id", "team_id"]).covers_exactly("user_id"));
        assert!(!IndexDescriptor::new("idx", &[]).covers_exactly("user_id"));
    }
}
