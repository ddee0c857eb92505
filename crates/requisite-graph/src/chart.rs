use crate::{
    closure::complete_postreq_tree,
    store::RequisiteStore,
    tree::{Direction, union_tree},
};
use models::AdjacencyTree;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumString};

/// The kinds of requisite chart a client can ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ChartKind {
    /// Everything the courses require
    Pre,
    /// Everything requiring the courses, ignoring prerequisite gates
    PostPartial,
    /// Everything unlockable from the courses given the secondary courses
    PostComplete,
}

/// Builds a requisite chart with dangling edges removed
///
/// `secondary` is only used by [`ChartKind::PostComplete`].
pub fn requisite_chart<S>(
    store: &S,
    kind: ChartKind,
    courses: &[String],
    secondary: &[String],
) -> AdjacencyTree
where
    S: RequisiteStore + ?Sized,
{
    let tree = match kind {
        ChartKind::Pre => union_tree(store, courses.iter().cloned(), Direction::Prerequisite),
        ChartKind::PostPartial => {
            union_tree(store, courses.iter().cloned(), Direction::Postrequisite)
        }
        ChartKind::PostComplete => {
            complete_postreq_tree(store, courses.iter().cloned(), secondary.iter().cloned())
        }
    };

    tree.into_pruned()
}
