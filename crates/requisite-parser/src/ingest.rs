use crate::{ParseError, parse_prerequisites};
use log::debug;
use models::course_data::{CoursePrereqs, RawCourse, department};
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

/// A course whose prerequisite text the grammar rejected
#[derive(Debug, Clone, PartialEq)]
pub struct IngestFailure {
    pub code: String,
    /// The raw prerequisite text as scraped
    pub text: String,
    pub error: ParseError,
}

/// Result of parsing a batch of raw course records
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IngestReport {
    pub parsed: Vec<CoursePrereqs>,
    pub failures: Vec<IngestFailure>,
}

/// Parses the prerequisites of every course whose department is one of
/// `prefixes` (all courses when `prefixes` is empty)
///
/// Courses are parsed in parallel; both lists keep catalog order. A failure
/// is reported, never replaced with an empty requirement.
pub fn ingest<S>(courses: &[RawCourse], prefixes: &[S]) -> IngestReport
where
    S: AsRef<str> + Sync,
{
    let results: Vec<(&RawCourse, Result<_, ParseError>)> = courses
        .par_iter()
        .filter(|course| {
            prefixes.is_empty()
                || prefixes
                    .iter()
                    .any(|prefix| department(&course.code) == prefix.as_ref())
        })
        .map(|course| (course, parse_prerequisites(course.prerequisite_text())))
        .collect();

    let mut report = IngestReport::default();
    for (course, result) in results {
        match result {
            Ok(prereqs) => report.parsed.push(CoursePrereqs {
                code: course.code.clone(),
                prereqs,
            }),
            Err(error) => report.failures.push(IngestFailure {
                code: course.code.clone(),
                text: course.prerequisite_text().to_owned(),
                error,
            }),
        }
    }

    debug!(
        "Parsed {} courses, {} failures",
        report.parsed.len(),
        report.failures.len()
    );
    report
}
