use crate::course_set::CourseSet;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, btree_map};

/// Mapping from a course to the courses directly connected to it in one
/// traversal direction
///
/// Built per query and never persisted. Serializes as a plain JSON object of
/// course code to list of course codes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdjacencyTree(BTreeMap<String, Vec<String>>);

impl AdjacencyTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the connections of `course`, returning any previous entry
    pub fn insert(&mut self, course: String, connected: Vec<String>) -> Option<Vec<String>> {
        self.0.insert(course, connected)
    }

    pub fn contains(&self, course: &str) -> bool {
        self.0.contains_key(course)
    }

    pub fn get(&self, course: &str) -> Option<&[String]> {
        self.0.get(course).map(Vec::as_slice)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Removes every edge that points at a course outside the key set, so
    /// consumers never see a dangling reference
    pub fn into_pruned(self) -> Self {
        let keys = self.0;
        let pruned = keys
            .iter()
            .map(|(course, connected)| {
                let kept = connected
                    .iter()
                    .filter(|to| keys.contains_key(to.as_str()))
                    .cloned()
                    .collect();
                (course.clone(), kept)
            })
            .collect();

        Self(pruned)
    }
}

impl CourseSet for AdjacencyTree {
    fn contains_course(&self, course: &str) -> bool {
        self.contains(course)
    }
}

impl Extend<(String, Vec<String>)> for AdjacencyTree {
    fn extend<I: IntoIterator<Item = (String, Vec<String>)>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl FromIterator<(String, Vec<String>)> for AdjacencyTree {
    fn from_iter<I: IntoIterator<Item = (String, Vec<String>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for AdjacencyTree {
    type Item = (String, Vec<String>);
    type IntoIter = btree_map::IntoIter<String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
