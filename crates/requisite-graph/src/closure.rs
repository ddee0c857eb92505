use crate::{
    satisfied,
    store::RequisiteStore,
    tree::{Direction, union_tree},
};
use log::debug;
use models::AdjacencyTree;

/// Adjacency tree of every course unlockable from `primary` once `secondary`
/// is taken as completed
///
/// Candidates are the courses reachable forward from `primary`. Each scan
/// admits every candidate whose prerequisite expression is satisfied by the
/// courses admitted so far, and scanning repeats until a scan admits nothing.
/// Admission only grows the satisfying set, so this ends after at most one
/// scan per candidate.
pub fn complete_postreq_tree<S, P, Q>(store: &S, primary: P, secondary: Q) -> AdjacencyTree
where
    S: RequisiteStore + ?Sized,
    P: IntoIterator,
    P::Item: Into<String>,
    Q: IntoIterator,
    Q::Item: Into<String>,
{
    let primary: Vec<String> = primary.into_iter().map(Into::into).collect();
    let course_pool = union_tree(store, primary.iter().cloned(), Direction::Postrequisite);

    let mut tree: AdjacencyTree = primary
        .into_iter()
        .map(|course| {
            let postreqs = course_pool.get(&course).map(<[String]>::to_vec).unwrap_or_default();
            (course, postreqs)
        })
        .collect();
    tree.extend(secondary.into_iter().map(|course| {
        let course = course.into();
        let postreqs = store.get_postreq_courses(&course);
        (course, postreqs)
    }));

    let mut scans = 0;
    let mut changed = true;
    while changed {
        changed = false;
        scans += 1;

        for (course, postreqs) in course_pool.iter() {
            if tree.contains(course) {
                continue;
            }

            let prereqs = store.get_course_prereqs(course);
            if satisfied(&tree, &prereqs) {
                tree.insert(course.to_owned(), postreqs.to_vec());
                changed = true;
            }
        }
    }

    debug!(
        "Closure admitted {} of {} candidates in {scans} scans",
        tree.len(),
        course_pool.len()
    );
    tree
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::RequisiteCatalog;
    use models::Expr;

    fn c(code: &str) -> Expr {
        Expr::course(code)
    }

    fn store() -> RequisiteCatalog {
        let mut catalog = RequisiteCatalog::new();
        catalog.insert("CSCA48H3".to_string(), c("CSCA08H3"));
        catalog.insert(
            "CSCB36H3".to_string(),
            Expr::And(vec![c("CSCA48H3"), c("CSCA67H3")]),
        );
        catalog.insert("CSCB07H3".to_string(), c("CSCA48H3"));
        catalog.insert("CSCC24H3".to_string(), c("CSCB07H3"));
        catalog
    }

    #[test]
    fn test_and_gate_blocks_without_other_operand() {
        let tree = complete_postreq_tree(&store(), ["CSCA08H3"], Vec::<String>::new());

        assert!(tree.contains("CSCA48H3"));
        assert!(tree.contains("CSCB07H3"));
        assert!(tree.contains("CSCC24H3"));
        assert!(!tree.contains("CSCB36H3"));
    }

    #[test]
    fn test_secondary_courses_open_gates() {
        let tree = complete_postreq_tree(&store(), ["CSCA08H3"], ["CSCA67H3"]);

        assert!(tree.contains("CSCB36H3"));
        assert_eq!(tree.get("CSCA67H3"), Some(&["CSCB36H3".to_string()][..]));
    }

    #[test]
    fn test_chain_needs_several_scans() {
        // Pool order puts later links of the chain first
        let mut catalog = RequisiteCatalog::new();
        catalog.insert("AAAA02H3".to_string(), c("ZZZZ01H3"));
        catalog.insert("AAAA03H3".to_string(), c("AAAA02H3"));
        catalog.insert("AAAA01H3".to_string(), c("AAAA03H3"));

        let tree = complete_postreq_tree(&catalog, ["ZZZZ01H3"], Vec::<String>::new());
        assert_eq!(
            tree.keys().collect::<Vec<_>>(),
            vec!["AAAA01H3", "AAAA02H3", "AAAA03H3", "ZZZZ01H3"]
        );
    }

    #[test]
    fn test_empty_inputs() {
        let tree = complete_postreq_tree(&store(), Vec::<String>::new(), Vec::<String>::new());
        assert!(tree.is_empty());
    }
}
