/// Phrases in catalog prerequisite text that carry no course requirement
///
/// Each is removed verbatim before parsing. Several are only parseable once
/// gone, e.g. grade qualifiers that follow a course code.
const BOILERPLATE: [&str; 11] = [
    "14.0 credits and enrolment in a Computer Science Subject POSt. Restricted to students in the Specialist/Specialist Co-op programs in Computer Science or in the Specialist/Specialist Co-op programs in Management and Information Technology",
    "A minimum of 2.5 credits at the B-level or higher in CSC courses",
    "Normally intended for students who have completed at least 8 credits.",
    "Students must obtain consent from the Supervisor of Studies before registering for this course.",
    "Enrolment procedures: Project supervisor's note of agreement must be presented to the Supervisor of Studies, who must issue permission for registration.",
    "10.0 credits, including 2.0 credits in MAT courses [excluding MATA02H3], of which 0.5 credit must be at the B-level",
    "Permission of the instructor is required. Typically this will require that the student has completed courses such as ",
    "but the instructor may specify alternative course requirements",
    "with a grade of B+ or higher",
    "with grade of at least B+",
    "Students enrolled in the Minor program in Applied Statistics should take STAC53H3",
];

/// Cleans a raw prerequisite description before grammar parsing
///
/// Removes boilerplate, rewrites `/` as ` or `, collapses doubled spaces
/// (single pass, so a run of three spaces becomes two) and strips leading and
/// trailing periods and whitespace.
///
/// # Returns
/// `None` when nothing is left, meaning the course has no prerequisites
pub fn normalize(text: &str) -> Option<String> {
    let mut cleaned = text.to_owned();
    for phrase in BOILERPLATE {
        cleaned = cleaned.replace(phrase, "");
    }

    let cleaned = cleaned.replace('/', " or ").replace("  ", " ");
    let cleaned = cleaned.trim_matches(|c: char| c == '.' || c.is_whitespace());

    (!cleaned.is_empty()).then(|| cleaned.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slash_becomes_or() {
        assert_eq!(
            normalize("MATA22H3/MATA31H3").as_deref(),
            Some("MATA22H3 or MATA31H3")
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), None);
        assert_eq!(normalize(" . "), None);
    }

    #[test]
    fn test_boilerplate_only() {
        assert_eq!(
            normalize("Students must obtain consent from the Supervisor of Studies before registering for this course."),
            None
        );
    }

    #[test]
    fn test_boilerplate_removed_mid_sentence() {
        assert_eq!(
            normalize("CSCA48H3 with a grade of B+ or higher and MATA31H3.").as_deref(),
            Some("CSCA48H3 and MATA31H3")
        );
    }

    #[test]
    fn test_space_collapse_is_single_pass() {
        assert_eq!(normalize("CSCA08H3   or CSCA20H3").as_deref(), Some("CSCA08H3  or CSCA20H3"));
    }

    #[test]
    fn test_strips_leading_periods() {
        assert_eq!(normalize(". CSCA08H3 .").as_deref(), Some("CSCA08H3"));
    }
}
