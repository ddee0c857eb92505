//! Requisite graph queries over a catalog of prerequisite expressions
//!
//! Traversals ([`prereq_tree`], [`postreq_tree`], [`union_tree`]) follow
//! requisite edges only. [`complete_postreq_tree`] also checks each course's
//! prerequisite expression against the courses unlocked so far.

pub mod chart;
pub mod closure;
pub mod store;
pub mod tree;

use models::{CourseSet, Expr};

pub use chart::{ChartKind, requisite_chart};
pub use closure::complete_postreq_tree;
pub use store::{RequisiteCatalog, RequisiteStore};
pub use tree::{Direction, postreq_tree, prereq_tree, traverse, union_tree};

/// Whether the courses in `available` pass the prerequisite gate `expr`
pub fn satisfied<S>(available: &S, expr: &Expr) -> bool
where
    S: CourseSet + ?Sized,
{
    expr.evaluate(available)
}
