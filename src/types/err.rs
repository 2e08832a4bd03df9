//! Error types used in the library.
//!
//! - Errors concern the *input* to a solve: a malformed clause, a malformed DIMACS file, or an invalid configuration.
//! - A solve itself never fails with an error when some bound is reached. Instead, a bound being reached is noted by an [inconclusive report](crate::reports::Inconclusive).
//!
//! Names of the error enums overlap with the structures they concern.
//  As such, throughout the library err::{self} is used to prefix use of the types with `err::`.

/// The kinds of error which may be returned from a context.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Clause(ClauseError),
    Config(ConfigError),
    Parse(ParseError),
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Clause(e) => write!(f, "Clause error: {e}"),
            Self::Config(e) => write!(f, "Config error: {e}"),
            Self::Parse(e) => write!(f, "Parse error: {e}"),
        }
    }
}

impl std::error::Error for ErrorKind {}

/// Noted errors when constructing a clause.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClauseError {
    /// The clause contains `0`, which terminates a clause in DIMACS and is not a literal.
    ///
    /// The clause is refused, rather than truncated at the `0`, as the presence of a `0` most likely indicates an issue when reading the clause.
    MalformedClause,
}

impl From<ClauseError> for ErrorKind {
    fn from(e: ClauseError) -> Self {
        ErrorKind::Clause(e)
    }
}

impl std::fmt::Display for ClauseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedClause => write!(f, "the terminator 0 appears as a literal"),
        }
    }
}

/// Errors when revising a configuration.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// The value requested for the named option is outside the bounds of the option.
    OutOfRange(&'static str),
}

impl From<ConfigError> for ErrorKind {
    fn from(e: ConfigError) -> Self {
        ErrorKind::Config(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange(name) => write!(f, "value out of range for {name}"),
        }
    }
}

/// Errors during parsing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// Some issue with the problem specification in a DIMACS input.
    ProblemSpecification,

    /// Some unspecific problem at a specific line, e.g. the line could not be read.
    Line(usize),

    /// A token which is not an integer, at a specific line.
    Literal(usize),

    /// The problem specification of some DIMACS input is not in the header of the input.
    MisplacedProblem(usize),
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ProblemSpecification => write!(f, "invalid problem specification"),
            Self::Line(line) => write!(f, "unreadable line {line}"),
            Self::Literal(line) => write!(f, "invalid literal on line {line}"),
            Self::MisplacedProblem(line) => write!(f, "problem specification on line {line}"),
        }
    }
}
