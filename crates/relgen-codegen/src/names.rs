use relgen_core::Cardinality;
use std_util::str;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationNames {
    /// Model class of the related table
    pub class_name: String,

    /// Accessor method name, pluralized for multi-row relations
    pub accessor_name: String,
}

/// Derives the model class and accessor names for a related table.
///
/// Names the inflector does not recognize are only case-converted.
pub fn resolve(table_name: &str, cardinality: Cardinality) -> RelationNames {
    let singular = str::singularize(table_name);

    let accessor_name = match cardinality {
        Cardinality::SingleRow => str::camel_case(&singular),
        Cardinality::MultiRow => str::camel_case(&str::pluralize(table_name)),
    };

    RelationNames {
        class_name: str::upper_camel_case(&singular),
        accessor_name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_row() {
        let names = resolve("orders", Cardinality::SingleRow);
        assert_eq!(names.class_name, "Order");
        assert_eq!(names.accessor_name, "order");
    }

    #[test]
    fn multi_row() {
        let names = resolve("orders", Cardinality::MultiRow);
        assert_eq!(names.class_name, "Order");
        assert_eq!(names.accessor_name, "orders");
    }

    #[test]
    fn compound_table_name() {
        let names = resolve("user_profiles", Cardinality::SingleRow);
        assert_eq!(names.class_name, "UserProfile");
        assert_eq!(names.accessor_name, "userProfile");

        let names = resolve("order_item", Cardinality::MultiRow);
        assert_eq!(names.class_name, "OrderItem");
        assert_eq!(names.accessor_name, "orderItems");
    }
}
