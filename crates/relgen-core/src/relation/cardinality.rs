/// Whether an accessor dereferences to one related row or to many.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Cardinality {
    SingleRow,
    MultiRow,
}
