use crate::{grammar::Operand, parser::RawExpr};
use models::Expr;

impl RawExpr {
    /// Converts the raw tree into an [`Expr`] of the same shape, erasing
    /// every operand that is not a catalog course
    pub fn into_expr(self) -> Expr {
        match self {
            Self::Operand(Operand::Course(code)) => Expr::Course(code),
            Self::Operand(_) => Expr::Empty,
            Self::And(args) => Expr::And(args.into_iter().map(Self::into_expr).collect()),
            Self::Or(args) => Expr::Or(args.into_iter().map(Self::into_expr).collect()),
        }
    }
}

/// Reduces a raw parse tree to a canonical prerequisite expression
pub fn reduce(raw: RawExpr) -> Expr {
    raw.into_expr().reduce()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(code: &str) -> RawExpr {
        RawExpr::Operand(Operand::Course(code.to_string()))
    }

    #[test]
    fn test_erased_operands_are_dropped() {
        let raw = RawExpr::And(vec![
            RawExpr::Operand(Operand::Program),
            RawExpr::Or(vec![course("MATA22H3"), RawExpr::Operand(Operand::External)]),
            course("CSCA48H3"),
        ]);

        assert_eq!(
            reduce(raw),
            Expr::And(vec![Expr::course("MATA22H3"), Expr::course("CSCA48H3")])
        );
    }

    #[test]
    fn test_only_administrative_operands() {
        let raw = RawExpr::Or(vec![
            RawExpr::Operand(Operand::Permission),
            RawExpr::Operand(Operand::HighSchool),
        ]);
        assert_eq!(reduce(raw), Expr::Empty);
    }

    #[test]
    fn test_nested_structure_survives() {
        let raw = RawExpr::Or(vec![
            RawExpr::And(vec![course("CSCA08H3"), course("CSCA48H3")]),
            RawExpr::And(vec![course("CSCA20H3"), course("CSCA48H3")]),
        ]);
        assert_eq!(reduce(raw.clone()), raw.into_expr());
    }
}
