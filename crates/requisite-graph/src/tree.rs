use crate::store::RequisiteStore;
use log::debug;
use models::AdjacencyTree;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Which way a traversal follows requisite edges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// From a course to the courses it requires
    Prerequisite,
    /// From a course to the courses that require it
    Postrequisite,
}

impl Direction {
    fn neighbours<S: RequisiteStore + ?Sized>(self, store: &S, course: &str) -> Vec<String> {
        match self {
            Self::Prerequisite => store.get_prereq_courses(course),
            Self::Postrequisite => store.get_postreq_courses(course),
        }
    }
}

/// Breadth-first traversal from `seeds`, recording each visited course's
/// direct neighbours
///
/// A course is never enqueued again once it is a key of the result, which
/// bounds the scan to one visit per course even on cyclic edges.
pub fn traverse<S, I>(store: &S, seeds: I, direction: Direction) -> AdjacencyTree
where
    S: RequisiteStore + ?Sized,
    I: IntoIterator,
    I::Item: Into<String>,
{
    let mut tree = AdjacencyTree::new();
    let mut frontier: BTreeSet<String> = seeds.into_iter().map(Into::into).collect();

    while let Some(course) = frontier.pop_first() {
        let connected = direction.neighbours(store, &course);
        frontier.extend(
            connected
                .iter()
                .filter(|next| !tree.contains(next) && **next != course)
                .cloned(),
        );
        tree.insert(course, connected);
    }

    debug!("{direction:?} traversal visited {} courses", tree.len());
    tree
}

/// Adjacency tree of everything the given courses require, transitively
pub fn prereq_tree<S, I>(store: &S, seeds: I) -> AdjacencyTree
where
    S: RequisiteStore + ?Sized,
    I: IntoIterator,
    I::Item: Into<String>,
{
    traverse(store, seeds, Direction::Prerequisite)
}

/// Adjacency tree of everything requiring the given courses, transitively,
/// regardless of whether their prerequisites could be met
pub fn postreq_tree<S, I>(store: &S, seeds: I) -> AdjacencyTree
where
    S: RequisiteStore + ?Sized,
    I: IntoIterator,
    I::Item: Into<String>,
{
    traverse(store, seeds, Direction::Postrequisite)
}

/// Union of the single-course traversals of `courses`
///
/// A course already present in the union is skipped, since everything it
/// reaches is already there as well.
pub fn union_tree<S, I>(store: &S, courses: I, direction: Direction) -> AdjacencyTree
where
    S: RequisiteStore + ?Sized,
    I: IntoIterator,
    I::Item: Into<String>,
{
    let mut tree = AdjacencyTree::new();

    for course in courses {
        let course = course.into();
        if !tree.contains(&course) {
            tree.extend(traverse(store, [course], direction));
        }
    }

    tree
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::RequisiteCatalog;
    use models::Expr;

    fn catalog(edges: &[(&str, Expr)]) -> RequisiteCatalog {
        let mut catalog = RequisiteCatalog::new();
        for (course, prereqs) in edges {
            catalog.insert(course.to_string(), prereqs.clone());
        }
        catalog
    }

    fn c(code: &str) -> Expr {
        Expr::course(code)
    }

    #[test]
    fn test_prereq_tree_follows_chain() {
        let store = catalog(&[
            ("CSCA48H3", c("CSCA08H3")),
            ("CSCB07H3", c("CSCA48H3")),
        ]);

        let tree = prereq_tree(&store, ["CSCB07H3"]);
        assert_eq!(tree.get("CSCB07H3"), Some(&["CSCA48H3".to_string()][..]));
        assert_eq!(tree.get("CSCA48H3"), Some(&["CSCA08H3".to_string()][..]));
        assert_eq!(tree.get("CSCA08H3"), Some(&[][..]));
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn test_traversal_terminates_on_cycle() {
        let store = catalog(&[
            ("AAAA01H3", c("BBBB01H3")),
            ("BBBB01H3", c("CCCC01H3")),
            ("CCCC01H3", c("AAAA01H3")),
        ]);

        let tree = prereq_tree(&store, ["AAAA01H3"]);
        assert_eq!(
            tree.keys().collect::<Vec<_>>(),
            vec!["AAAA01H3", "BBBB01H3", "CCCC01H3"]
        );
    }

    #[test]
    fn test_self_loop() {
        let store = catalog(&[("AAAA01H3", c("AAAA01H3"))]);
        let tree = postreq_tree(&store, ["AAAA01H3"]);
        assert_eq!(tree.get("AAAA01H3"), Some(&["AAAA01H3".to_string()][..]));
    }

    #[test]
    fn test_union_matches_multi_seed_traversal() {
        let store = catalog(&[
            ("CSCA48H3", c("CSCA08H3")),
            ("CSCB07H3", c("CSCA48H3")),
            ("MATB24H3", c("MATA22H3")),
        ]);

        let seeds = ["CSCA08H3", "CSCA48H3", "MATA22H3"];
        assert_eq!(
            union_tree(&store, seeds, Direction::Postrequisite),
            postreq_tree(&store, seeds)
        );
    }

    #[test]
    fn test_unknown_seed() {
        let store = RequisiteCatalog::new();
        let tree = prereq_tree(&store, ["ZZZZ99H3"]);
        assert_eq!(tree.get("ZZZZ99H3"), Some(&[][..]));
    }
}
