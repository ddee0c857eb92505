//! Turns free-text prerequisite descriptions into prerequisite expressions
//!
//! Text goes through [`normalize`], then the grammar in [`parser`], then
//! [`reduce`], which erases everything that is not a catalog course.

pub mod grammar;
pub mod ingest;
pub mod normalize;
pub mod parser;
pub mod reduce;

use models::Expr;

pub use ingest::{IngestFailure, IngestReport, ingest};
pub use normalize::normalize;
pub use parser::{ParseError, RawExpr, parse};
pub use reduce::reduce;

/// Parses a raw prerequisite description into a canonical expression
///
/// # Returns
/// [`Expr::Empty`] when the text is empty after normalization, or a
/// [`ParseError`] when the grammar does not accept it
pub fn parse_prerequisites(text: &str) -> Result<Expr, ParseError> {
    match normalize(text) {
        Some(cleaned) => parse(&cleaned).map(reduce),
        None => Ok(Expr::Empty),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(code: &str) -> Expr {
        Expr::course(code)
    }

    #[test]
    fn test_slash_alternatives() {
        assert_eq!(
            parse_prerequisites("MATA22H3/MATA31H3"),
            Ok(Expr::Or(vec![c("MATA22H3"), c("MATA31H3")]))
        );
    }

    #[test]
    fn test_permission_only() {
        assert_eq!(parse_prerequisites("Permission of the instructor"), Ok(Expr::Empty));
    }

    #[test]
    fn test_empty_description() {
        assert_eq!(parse_prerequisites(""), Ok(Expr::Empty));
    }

    #[test]
    fn test_catalog_sentence() {
        assert_eq!(
            parse_prerequisites(
                "[CSCA48H3 with a grade of B+ or higher] and [MATA22H3 or MATA23H3] and [MATA31H3 or MATA30H3]."
            ),
            Ok(Expr::And(vec![
                c("CSCA48H3"),
                Expr::Or(vec![c("MATA22H3"), c("MATA23H3")]),
                Expr::Or(vec![c("MATA31H3"), c("MATA30H3")]),
            ]))
        );
    }

    #[test]
    fn test_credit_count_cannot_lead_a_list() {
        assert_eq!(
            parse_prerequisites("8.0 credits, including CSCB09H3"),
            Err(ParseError::TrailingInput {
                position: 11,
                found: ", including CSCB09H3".to_string()
            })
        );
    }

    #[test]
    fn test_program_requirement_erased() {
        assert_eq!(
            parse_prerequisites("a CGPA of at least 3.0, and CSCB07H3 and CSCB09H3"),
            Ok(Expr::And(vec![c("CSCB07H3"), c("CSCB09H3")]))
        );
    }

    #[test]
    fn test_external_course_erased() {
        assert_eq!(
            parse_prerequisites("(CSC148H1) or CSCA48H3"),
            Ok(c("CSCA48H3"))
        );
    }

    #[test]
    fn test_grade_12_literal() {
        assert_eq!(
            parse_prerequisites("Grade 12 Calculus and Vectors and CSCA08H3"),
            Ok(c("CSCA08H3"))
        );
    }

    #[test]
    fn test_unsupported_phrase_fails() {
        assert!(parse_prerequisites("An interest in dinosaurs").is_err());
    }
}
