pub mod course_data;
pub mod course_set;
pub mod requisite;
pub mod tree;

pub use course_set::CourseSet;
pub use requisite::{Expr, Operator};
pub use tree::AdjacencyTree;
