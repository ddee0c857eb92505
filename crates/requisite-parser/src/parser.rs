use crate::grammar::{Operand, is_ident_char, match_keyword, match_operand, match_preamble};
use thiserror::Error;

/// Longest excerpt of unparsed text quoted in an error
const EXCERPT_LEN: usize = 40;

/// Raw parse tree, before non-course operands are erased
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawExpr {
    Operand(Operand),
    And(Vec<RawExpr>),
    Or(Vec<RawExpr>),
}

/// Prerequisite text the grammar does not accept
///
/// Positions are byte offsets into the normalized text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("no requirement recognized at position {position}: {found:?}")]
    UnexpectedInput { position: usize, found: String },

    #[error("missing closing bracket for the group opened at position {position}")]
    UnclosedBracket { position: usize },

    #[error("unparsed text at position {position}: {found:?}")]
    TrailingInput { position: usize, found: String },
}

/// Parses normalized prerequisite text into a raw expression tree
///
/// The whole input must be consumed.
pub fn parse(input: &str) -> Result<RawExpr, ParseError> {
    let mut parser = Parser { input, pos: 0 };
    let expr = parser.parse_expr()?;

    parser.skip_whitespace();
    if parser.pos < input.len() {
        return Err(ParseError::TrailingInput {
            position: parser.pos,
            found: parser.excerpt(),
        });
    }

    Ok(expr)
}

/// Ordered-choice recursive descent over the raw text
///
/// ```text
/// expr     := PREAMBLE expr | or_expr
/// or_expr  := and_expr ("or" and_expr)*
/// and_expr := atom ("and" atom)*
/// atom     := operand | "[" expr "]"
/// ```
struct Parser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn excerpt(&self) -> String {
        self.rest().chars().take(EXCERPT_LEN).collect()
    }

    fn skip_whitespace(&mut self) {
        let rest = self.rest();
        self.pos += rest.len() - rest.trim_start().len();
    }

    fn parse_expr(&mut self) -> Result<RawExpr, ParseError> {
        self.skip_whitespace();
        let start = self.pos;

        if let Some(len) = match_preamble(self.rest()) {
            self.pos += len;
            match self.parse_expr() {
                Ok(expr) => return Ok(expr),
                // Not followed by an expression: reread as plain text
                Err(_) => self.pos = start,
            }
        }

        self.parse_or()
    }

    fn parse_or(&mut self) -> Result<RawExpr, ParseError> {
        self.parse_chain("or", RawExpr::Or, Self::parse_and)
    }

    fn parse_and(&mut self) -> Result<RawExpr, ParseError> {
        self.parse_chain("and", RawExpr::And, Self::parse_atom)
    }

    /// Parses a left-associative chain of `keyword`-joined operands into one
    /// n-ary node, or the lone operand when there is no keyword
    fn parse_chain(
        &mut self,
        keyword: &str,
        node: fn(Vec<RawExpr>) -> RawExpr,
        operand: fn(&mut Self) -> Result<RawExpr, ParseError>,
    ) -> Result<RawExpr, ParseError> {
        let mut args = vec![operand(self)?];

        loop {
            let before = self.pos;
            if !self.eat_keyword(keyword) {
                break;
            }
            match operand(self) {
                Ok(arg) => args.push(arg),
                Err(_) => {
                    self.pos = before;
                    break;
                }
            }
        }

        Ok(if args.len() == 1 {
            args.swap_remove(0)
        } else {
            node(args)
        })
    }

    fn parse_atom(&mut self) -> Result<RawExpr, ParseError> {
        self.skip_whitespace();

        if let Some((operand, len)) = match_operand(self.rest()) {
            self.pos += len;
            return Ok(RawExpr::Operand(operand));
        }

        if self.rest().starts_with('[') {
            let open = self.pos;
            self.pos += 1;
            let expr = self.parse_expr()?;

            self.skip_whitespace();
            if !self.rest().starts_with(']') {
                return Err(ParseError::UnclosedBracket { position: open });
            }
            self.pos += 1;
            return Ok(expr);
        }

        Err(ParseError::UnexpectedInput {
            position: self.pos,
            found: self.excerpt(),
        })
    }

    fn eat_keyword(&mut self, keyword: &str) -> bool {
        self.skip_whitespace();

        let preceded_by_word = self.input[..self.pos]
            .chars()
            .next_back()
            .is_some_and(is_ident_char);

        if !preceded_by_word && match_keyword(self.rest(), keyword) {
            self.pos += keyword.len();
            true
        } else {
            false
        }
    }
}
