mod cardinality;
pub use cardinality::Cardinality;

mod classify;
pub use classify::classify;

mod generated;
pub use generated::GeneratedRelation;
