use std::{
    collections::{BTreeMap, BTreeSet, HashMap, HashSet},
    hash::BuildHasher,
};

/// A collection that can answer whether a course is present
///
/// Requirement evaluation only needs membership, so any keyed collection of
/// course codes can act as the set of available courses.
pub trait CourseSet {
    fn contains_course(&self, course: &str) -> bool;
}

impl<S: BuildHasher> CourseSet for HashSet<String, S> {
    fn contains_course(&self, course: &str) -> bool {
        self.contains(course)
    }
}

impl CourseSet for BTreeSet<String> {
    fn contains_course(&self, course: &str) -> bool {
        self.contains(course)
    }
}

impl CourseSet for [String] {
    fn contains_course(&self, course: &str) -> bool {
        self.iter().any(|c| c == course)
    }
}

impl CourseSet for [&str] {
    fn contains_course(&self, course: &str) -> bool {
        self.contains(&course)
    }
}

impl CourseSet for Vec<String> {
    fn contains_course(&self, course: &str) -> bool {
        self.as_slice().contains_course(course)
    }
}

impl<V> CourseSet for BTreeMap<String, V> {
    fn contains_course(&self, course: &str) -> bool {
        self.contains_key(course)
    }
}

impl<V, S: BuildHasher> CourseSet for HashMap<String, V, S> {
    fn contains_course(&self, course: &str) -> bool {
        self.contains_key(course)
    }
}

impl<T: CourseSet + ?Sized> CourseSet for &T {
    fn contains_course(&self, course: &str) -> bool {
        (**self).contains_course(course)
    }
}
