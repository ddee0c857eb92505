use crate::course_set::CourseSet;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error as _};
use std::fmt::{Display, Formatter, Result as FmtResult};
use strum::AsRefStr;

/// Boolean operator joining the arguments of a compound requirement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Operator {
    And,
    Or,
}

impl Operator {
    /// Builds a compound expression of this operator over `args`
    pub fn apply(self, args: Vec<Expr>) -> Expr {
        match self {
            Self::And => Expr::And(args),
            Self::Or => Expr::Or(args),
        }
    }
}

/// Represents a node in the prerequisite expression tree
///
/// A canonical expression (see [`Expr::reduce`]) never nests [`Expr::Empty`]
/// and every compound node has at least two arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Expr {
    /// No prerequisite
    #[default]
    Empty,
    /// A single required course
    Course(String),
    And(Vec<Expr>),
    Or(Vec<Expr>),
}

impl Expr {
    pub fn course(code: impl Into<String>) -> Self {
        Self::Course(code.into())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// The operator of a compound node, `None` for leaves
    pub fn operator(&self) -> Option<Operator> {
        match self {
            Self::And(_) => Some(Operator::And),
            Self::Or(_) => Some(Operator::Or),
            _ => None,
        }
    }

    /// Evaluate if this expression is satisfied by the given available courses
    pub fn evaluate<S>(&self, available: &S) -> bool
    where
        S: CourseSet + ?Sized,
    {
        match self {
            Self::Empty => true,
            Self::Course(course) => available.contains_course(course),
            Self::And(args) => args.iter().all(|arg| arg.evaluate(available)),
            Self::Or(args) => args.iter().any(|arg| arg.evaluate(available)),
        }
    }

    /// Rewrites this expression into its canonical form
    ///
    /// Bottom-up: empty leaves become [`Expr::Empty`], empty arguments are
    /// dropped, compound nodes left with no arguments become empty and nodes
    /// left with a single argument are replaced by it. Argument order is kept.
    pub fn reduce(self) -> Expr {
        match self {
            Self::Course(code) if code.is_empty() => Self::Empty,
            Self::And(args) => Self::reduce_compound(Operator::And, args),
            Self::Or(args) => Self::reduce_compound(Operator::Or, args),
            leaf => leaf,
        }
    }

    fn reduce_compound(op: Operator, args: Vec<Expr>) -> Expr {
        let mut args: Vec<Expr> = args
            .into_iter()
            .map(Expr::reduce)
            .filter(|arg| !arg.is_empty())
            .collect();

        match args.len() {
            0 => Self::Empty,
            1 => args.swap_remove(0),
            _ => op.apply(args),
        }
    }

    /// Whether this expression is already in canonical form
    pub fn is_canonical(&self) -> bool {
        fn canonical_arg(arg: &Expr) -> bool {
            !arg.is_empty() && arg.is_canonical()
        }

        match self {
            Self::Empty => true,
            Self::Course(code) => !code.is_empty(),
            Self::And(args) | Self::Or(args) => {
                args.len() >= 2 && args.iter().all(canonical_arg)
            }
        }
    }

    /// Simplifies this expression based on completed courses
    ///
    /// Returns [`Expr::Empty`] if the requirement is already satisfied,
    /// otherwise a canonical expression of the remaining requirements.
    pub fn simplify<S>(&self, completed: &S) -> Expr
    where
        S: CourseSet + ?Sized,
    {
        match self {
            Self::Empty => Self::Empty,
            Self::Course(course) => {
                if completed.contains_course(course) {
                    Self::Empty
                } else {
                    self.clone()
                }
            }
            Self::And(args) => {
                Self::And(args.iter().map(|arg| arg.simplify(completed)).collect()).reduce()
            }
            Self::Or(args) => {
                let remaining: Vec<Expr> = args.iter().map(|arg| arg.simplify(completed)).collect();

                // Any satisfied alternative satisfies the whole node
                if remaining.iter().any(Expr::is_empty) {
                    Self::Empty
                } else {
                    Self::Or(remaining).reduce()
                }
            }
        }
    }

    /// Every course named in this expression, in order of first appearance
    ///
    /// AND/OR structure is discarded and duplicates collapse, so this is the
    /// set of requisite edges the expression induces.
    pub fn courses(&self) -> Vec<&str> {
        fn collect<'a>(expr: &'a Expr, out: &mut Vec<&'a str>) {
            match expr {
                Expr::Empty => {}
                Expr::Course(code) => {
                    if !out.contains(&code.as_str()) {
                        out.push(code);
                    }
                }
                Expr::And(args) | Expr::Or(args) => {
                    for arg in args {
                        collect(arg, out);
                    }
                }
            }
        }

        let mut out = Vec::new();
        collect(self, &mut out);
        out
    }
}

impl From<&str> for Expr {
    fn from(code: &str) -> Self {
        Self::course(code)
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Empty => Ok(()),
            Self::Course(code) => write!(f, "{code}"),
            Self::And(args) | Self::Or(args) => {
                let op = if matches!(self, Self::And(_)) {
                    Operator::And
                } else {
                    Operator::Or
                };
                let keyword: &str = op.as_ref();

                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, " {keyword} ")?;
                    }
                    // Square brackets, since parentheses belong to course codes
                    if arg.operator().is_some() {
                        write!(f, "[{arg}]")?;
                    } else {
                        write!(f, "{arg}")?;
                    }
                }
                Ok(())
            }
        }
    }
}

/// Borrowed wire form of a compound node
#[derive(Serialize)]
struct NodeRef<'a> {
    op: Operator,
    args: &'a [Expr],
}

/// Owned wire form of a non-empty expression
///
/// Only canonical shapes are accepted: no blank course codes, no `null`
/// arguments and at least two arguments per node.
#[derive(Deserialize)]
#[serde(untagged)]
enum Repr {
    Course(String),
    Node { op: Operator, args: Vec<Expr> },
}

impl Serialize for Expr {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Empty => serializer.serialize_none(),
            Self::Course(code) => serializer.serialize_str(code),
            Self::And(args) => NodeRef {
                op: Operator::And,
                args,
            }
            .serialize(serializer),
            Self::Or(args) => NodeRef {
                op: Operator::Or,
                args,
            }
            .serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Expr {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<Repr>::deserialize(deserializer)? {
            None => Self::Empty,
            Some(Repr::Course(code)) if code.is_empty() => {
                return Err(D::Error::custom("blank course code"));
            }
            Some(Repr::Course(code)) => Self::Course(code),
            Some(Repr::Node { op, args }) => {
                if args.len() < 2 {
                    return Err(D::Error::custom(format!(
                        "{} node with {} argument(s), expected at least 2",
                        op.as_ref(),
                        args.len()
                    )));
                }
                if args.iter().any(Expr::is_empty) {
                    return Err(D::Error::custom(format!(
                        "null argument in {} node",
                        op.as_ref()
                    )));
                }
                op.apply(args)
            }
        })
    }
}
