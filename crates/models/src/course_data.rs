use crate::requisite::Expr;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Name of the catalog field holding prerequisite text
pub const PREREQUISITE_FIELD: &str = "Prerequisite";

/// Length of a catalog course code, e.g. `CSCB20H3`
pub const COURSE_CODE_LEN: usize = 8;

/// Determines whether a string is a catalog course code.
///
/// # Returns
/// `true` for four uppercase letters, two digits, one uppercase letter and one
/// digit (e.g. `"CSCB20H3"`), `false` otherwise.
pub fn is_course_code(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == COURSE_CODE_LEN
        && bytes[..4].iter().all(u8::is_ascii_uppercase)
        && bytes[4..6].iter().all(u8::is_ascii_digit)
        && bytes[6].is_ascii_uppercase()
        && bytes[7].is_ascii_digit()
}

/// The subject prefix of a course code (e.g. `"CSC"` for `"CSCB20H3"`)
pub fn department(code: &str) -> &str {
    code.get(..3).unwrap_or(code)
}

/// A course record as produced by the catalog scraper
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawCourse {
    /// Course code (e.g. "CSCB20H3")
    pub code: String,
    /// Full heading, code included
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Link to the course on the institution's site
    #[serde(default)]
    pub link: String,
    /// Labelled fields such as "Prerequisite", "Exclusion" or "Note"
    #[serde(default)]
    pub fields: BTreeMap<String, String>,
}

impl RawCourse {
    /// The raw prerequisite description, empty when the course lists none
    pub fn prerequisite_text(&self) -> &str {
        self.fields
            .get(PREREQUISITE_FIELD)
            .map(String::as_str)
            .unwrap_or_default()
    }
}

/// The parsed prerequisite expression of one course
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoursePrereqs {
    pub code: String,
    #[serde(default)]
    pub prereqs: Expr,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_course_code() {
        assert!(is_course_code("CSCB20H3"));
        assert!(is_course_code("MATA22H3"));
        assert!(!is_course_code("CSC148H1"));
        assert!(!is_course_code("cscb20h3"));
        assert!(!is_course_code("CSCB20H"));
    }

    #[test]
    fn test_department() {
        assert_eq!(department("STAB52H3"), "STA");
        assert_eq!(department("MA"), "MA");
    }

    #[test]
    fn test_raw_course_from_scraper_json() {
        let course: RawCourse = serde_json::from_value(json!({
            "code": "CSCB20H3",
            "name": "CSCB20H3: Introduction to Databases and Web Applications",
            "description": "",
            "link": "https://example.org/CSCB20H3",
            "fields": {"Prerequisite": "CSCA48H3", "Exclusion": "CSC343H"}
        }))
        .unwrap();

        assert_eq!(course.prerequisite_text(), "CSCA48H3");
    }

    #[test]
    fn test_missing_prerequisite_field() {
        let course: RawCourse =
            serde_json::from_value(json!({"code": "CSCA08H3", "name": "CSCA08H3"})).unwrap();
        assert_eq!(course.prerequisite_text(), "");
    }

    #[test]
    fn test_course_prereqs_null_is_empty() {
        let record: CoursePrereqs =
            serde_json::from_value(json!({"code": "CSCA08H3", "prereqs": null})).unwrap();
        assert_eq!(record.prereqs, Expr::Empty);
    }
}
