// Matrix data structure and operations

pub mod ccs;
pub mod generate;
pub mod reorder;

pub use ccs::SparseColumnMatrix;
pub use generate::MatrixGenerator;
pub use reorder::{ColumnPlacement, SortReport};
