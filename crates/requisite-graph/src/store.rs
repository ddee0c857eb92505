use models::{Expr, course_data::CoursePrereqs};
use std::{collections::HashMap, sync::Arc};

/// Source of requisite edges and stored prerequisite expressions
///
/// Implemented by whatever holds the catalog snapshot. Lookups of unknown
/// courses return no edges and [`Expr::Empty`].
pub trait RequisiteStore {
    /// Direct prerequisites of `course`
    fn get_prereq_courses(&self, course: &str) -> Vec<String>;

    /// Courses that list `course` as a direct prerequisite
    fn get_postreq_courses(&self, course: &str) -> Vec<String>;

    /// The canonical prerequisite expression of `course`
    fn get_course_prereqs(&self, course: &str) -> Expr;
}

impl<T: RequisiteStore + ?Sized> RequisiteStore for &T {
    fn get_prereq_courses(&self, course: &str) -> Vec<String> {
        (**self).get_prereq_courses(course)
    }

    fn get_postreq_courses(&self, course: &str) -> Vec<String> {
        (**self).get_postreq_courses(course)
    }

    fn get_course_prereqs(&self, course: &str) -> Expr {
        (**self).get_course_prereqs(course)
    }
}

impl<T: RequisiteStore + ?Sized> RequisiteStore for Arc<T> {
    fn get_prereq_courses(&self, course: &str) -> Vec<String> {
        (**self).get_prereq_courses(course)
    }

    fn get_postreq_courses(&self, course: &str) -> Vec<String> {
        (**self).get_postreq_courses(course)
    }

    fn get_course_prereqs(&self, course: &str) -> Expr {
        (**self).get_course_prereqs(course)
    }
}

/// In-memory snapshot of every course's prerequisites and the requisite edges
/// derived from them
#[derive(Debug, Clone, Default)]
pub struct RequisiteCatalog {
    prereqs: HashMap<String, Expr>,
    /// postrequisite -> prerequisites
    prereq_edges: HashMap<String, Vec<String>>,
    /// prerequisite -> postrequisites
    postreq_edges: HashMap<String, Vec<String>>,
}

impl RequisiteCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: impl IntoIterator<Item = CoursePrereqs>) -> Self {
        let mut catalog = Self::new();
        for record in records {
            catalog.insert(record.code, record.prereqs);
        }
        catalog
    }

    /// Stores the expression of `course` and one edge per distinct course it
    /// names, replacing anything stored for `course` before
    ///
    /// Edges to courses missing from the catalog are kept.
    pub fn insert(&mut self, course: String, prereqs: Expr) {
        if let Some(old) = self.prereq_edges.remove(&course) {
            for prereq in old {
                if let Some(postreqs) = self.postreq_edges.get_mut(&prereq) {
                    postreqs.retain(|postreq| postreq != &course);
                }
            }
        }

        let prereq_courses: Vec<String> = prereqs.courses().into_iter().map(str::to_owned).collect();
        for prereq in &prereq_courses {
            self.postreq_edges
                .entry(prereq.clone())
                .or_default()
                .push(course.clone());
        }

        if !prereq_courses.is_empty() {
            self.prereq_edges.insert(course.clone(), prereq_courses);
        }
        self.prereqs.insert(course, prereqs);
    }

    /// Whether `course` has a stored expression (possibly empty)
    pub fn contains(&self, course: &str) -> bool {
        self.prereqs.contains_key(course)
    }

    /// Number of courses with a stored expression
    pub fn len(&self) -> usize {
        self.prereqs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prereqs.is_empty()
    }

    /// Number of distinct requisite edges
    pub fn edge_count(&self) -> usize {
        self.prereq_edges.values().map(Vec::len).sum()
    }
}

impl RequisiteStore for RequisiteCatalog {
    fn get_prereq_courses(&self, course: &str) -> Vec<String> {
        self.prereq_edges.get(course).cloned().unwrap_or_default()
    }

    fn get_postreq_courses(&self, course: &str) -> Vec<String> {
        self.postreq_edges.get(course).cloned().unwrap_or_default()
    }

    fn get_course_prereqs(&self, course: &str) -> Expr {
        self.prereqs.get(course).cloned().unwrap_or_default()
    }
}
