mod emit;
pub use emit::emit;

mod names;
pub use names::{resolve, RelationNames};

mod out;
pub use out::{render, Output};
