use lazy_static::lazy_static;
use regex::Regex;

/// Ontario Grade 12 courses named as prerequisites
const GRADE_12_COURSES: [&str; 3] = [
    "Grade 12 Calculus and Vectors",
    "one other Grade 12 mathematics course",
    "Grade 12 Advanced Functions and Introductory Calculus and Geometry and Discrete Mathematics",
];

/// Program requirements with a fixed wording
const PROGRAM_REQUIREMENTS: [&str; 5] = [
    "proficiency in C",
    "Some experience with programming in an imperative language such as Python, Java or C",
    "Three C-level CSC courses",
    "at least one other B-level course in Mathematics or Computer Science",
    "1.5 credits at the C-level in MAT courses",
];

const PERMISSIONS: [&str; 3] = [
    "Students must obtain consent from the Supervisor of Studies before registering for this course.",
    "Permission of the instructor",
    "permission of the Supervisor of Studies",
];

lazy_static! {
    static ref COURSE_CODE: Regex = Regex::new(r"^\(?[A-Z]{4}[0-9]{2}[A-Z][0-9]\.?\)?").unwrap();
    static ref COURSE_CODE_EXTERN: Regex =
        Regex::new(r"^\(?[A-Z]{3}[0-9]{3}(?:H[13]?|Y)\.?\)?").unwrap();
    static ref CREDITS_REQ: Regex = Regex::new(r"^[0-9]+\.[0-9]+ [Cc]redits?").unwrap();
    static ref CGPA_REQ: Regex =
        Regex::new(r"^(?:a )?CGPA (?:of (?:at least )?)?[0-9]\.[0-9],?").unwrap();
    static ref SUBJECT_ENROLMENT_REQ: Regex = Regex::new(
        r"^enrolment in a (?:CSC|Computer Science|Mathematics) [Ss]ubject POSt,?"
    )
    .unwrap();
    static ref NON_SUBJECT_ENROLMENT_REQ: Regex = Regex::new(
        r"^enrolment in a non-CSC Subject PO[Ss]t for which this specific course is a program requirement,?"
    )
    .unwrap();
    /// Lead-in text: everything up to the last colon on the line, or "including"
    static ref PREAMBLE: Regex = Regex::new(r"^(?:.*:|including,?)").unwrap();
}

/// A single recognized phrase of prerequisite text
///
/// Only catalog course codes carry a payload; every other phrase is accepted
/// so that parsing succeeds, then erased during reduction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    /// A course in this catalog, wrapping punctuation removed
    Course(String),
    /// A course code from another campus
    External,
    /// A high-school course
    HighSchool,
    /// Credit counts, CGPA thresholds, program enrolment and similar
    Program,
    /// Permission of an instructor or supervisor
    Permission,
}

/// Tries each operand alternative in order at the start of `input`
///
/// # Returns
/// The first matching operand and the number of bytes it spans
pub(crate) fn match_operand(input: &str) -> Option<(Operand, usize)> {
    if let Some(m) = COURSE_CODE.find(input) {
        let code = m.as_str().trim_matches(|c: char| matches!(c, '(' | ')' | '.' | ' '));
        return Some((Operand::Course(code.to_owned()), m.end()));
    }

    if let Some(m) = COURSE_CODE_EXTERN.find(input) {
        return Some((Operand::External, m.end()));
    }

    if let Some(len) = match_literal(input, &GRADE_12_COURSES) {
        return Some((Operand::HighSchool, len));
    }

    if let Some(len) = match_literal(input, &PROGRAM_REQUIREMENTS).or_else(|| {
        [
            &*CREDITS_REQ,
            &*CGPA_REQ,
            &*SUBJECT_ENROLMENT_REQ,
            &*NON_SUBJECT_ENROLMENT_REQ,
        ]
        .into_iter()
        .find_map(|re| re.find(input).map(|m| m.end()))
    }) {
        return Some((Operand::Program, len));
    }

    match_literal(input, &PERMISSIONS).map(|len| (Operand::Permission, len))
}

/// Length of the preamble at the start of `input`, if any
pub(crate) fn match_preamble(input: &str) -> Option<usize> {
    PREAMBLE.find(input).map(|m| m.end())
}

/// Whether `input` starts with `keyword` as a whole word
pub(crate) fn match_keyword(input: &str, keyword: &str) -> bool {
    input.starts_with(keyword)
        && !input[keyword.len()..]
            .chars()
            .next()
            .is_some_and(is_ident_char)
}

pub(crate) fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

fn match_literal(input: &str, literals: &[&str]) -> Option<usize> {
    literals
        .iter()
        .find(|literal| input.starts_with(*literal))
        .map(|literal| literal.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_code_strips_wrapping() {
        assert_eq!(
            match_operand("(CSCA48H3). and more"),
            Some((Operand::Course("CSCA48H3".to_string()), 10))
        );
    }

    #[test]
    fn test_external_course_code() {
        assert_eq!(match_operand("CSC148H1 or"), Some((Operand::External, 8)));
        assert_eq!(match_operand("MAT137Y"), Some((Operand::External, 7)));
    }

    #[test]
    fn test_literal_with_keyword_inside() {
        let (operand, len) = match_operand("Grade 12 Calculus and Vectors and CSCA08H3").unwrap();
        assert_eq!(operand, Operand::HighSchool);
        assert_eq!(len, "Grade 12 Calculus and Vectors".len());
    }

    #[test]
    fn test_program_requirements() {
        assert_eq!(match_operand("4.0 credits"), Some((Operand::Program, 11)));
        assert_eq!(
            match_operand("a CGPA of at least 3.0, and"),
            Some((Operand::Program, "a CGPA of at least 3.0,".len()))
        );
        assert_eq!(
            match_operand("enrolment in a Mathematics subject POSt"),
            Some((Operand::Program, 39))
        );
    }

    #[test]
    fn test_permission() {
        assert_eq!(
            match_operand("Permission of the instructor"),
            Some((Operand::Permission, 28))
        );
    }

    #[test]
    fn test_no_operand() {
        assert_eq!(match_operand("an unknown phrase"), None);
        assert_eq!(match_operand("and CSCA08H3"), None);
    }

    #[test]
    fn test_preamble() {
        assert_eq!(match_preamble("Credit in the following: CSCA08H3"), Some(24));
        assert_eq!(match_preamble("including, CSCA08H3"), Some(10));
        assert_eq!(match_preamble("CSCA08H3"), None);
    }

    #[test]
    fn test_keyword_boundaries() {
        assert!(match_keyword("and CSCA08H3", "and"));
        assert!(match_keyword("or[", "or"));
        assert!(!match_keyword("andrew", "and"));
        assert!(!match_keyword("order", "or"));
    }
}
