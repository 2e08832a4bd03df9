//! Details on the result of a solve.
//!
//! A [Report] is one of three things, and when a report is [inconclusive](Report::Inconclusive) the reason is given by an [Inconclusive] value.
//!
//! Of note, saturation of a formula under resolution is [inconclusive](Inconclusive::Saturated) rather than satisfiable.
//! For, though in the absence of the empty clause the resolution closure of a formula is satisfiable, the [refutation](crate::procedures::refutation) procedure makes no attempt to certify that the closure has been found.
//! Still, a saturated report is a weaker claim than the other inconclusive reports, and [leans_satisfiable](Report::leans_satisfiable) distinguishes the case.

use crate::structures::valuation::Valuation;

/// High-level reports regarding a solve.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Report {
    /// The formula is satisfiable, with a witness if the strategy used produces witnesses.
    Satisfiable(Option<Valuation>),

    /// The formula is unsatisfiable.
    Unsatisfiable,

    /// Satisfiability of the formula could not be determined, for the given reason.
    Inconclusive(Inconclusive),
}

/// Reasons for a solve to conclude without determining the satisfiability of a formula.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Inconclusive {
    /// The time limit was reached.
    DeadlineExceeded,

    /// The depth limit of a backtracking search was reached.
    DepthExceeded,

    /// The clause limit was reached during elimination or refutation.
    ClauseLimit,

    /// The solve was terminated by a callback, or by a sibling search.
    Cancelled,

    /// Resolution reached a fixed point without deriving the empty clause.
    Saturated,
}

impl Report {
    pub fn is_satisfiable(&self) -> bool {
        matches!(self, Self::Satisfiable(_))
    }

    pub fn is_unsatisfiable(&self) -> bool {
        matches!(self, Self::Unsatisfiable)
    }

    pub fn is_inconclusive(&self) -> bool {
        matches!(self, Self::Inconclusive(_))
    }

    /// Whether the report is satisfiable, or the weaker report of saturation without refutation.
    pub fn leans_satisfiable(&self) -> bool {
        matches!(
            self,
            Self::Satisfiable(_) | Self::Inconclusive(Inconclusive::Saturated)
        )
    }

    /// The witness of a satisfiable report, if present.
    pub fn witness(&self) -> Option<&Valuation> {
        match self {
            Self::Satisfiable(witness) => witness.as_ref(),
            _ => None,
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Satisfiable(_) => write!(f, "SATISFIABLE"),
            Self::Unsatisfiable => write!(f, "UNSATISFIABLE"),
            Self::Inconclusive(_) => write!(f, "UNKNOWN"),
        }
    }
}

impl std::fmt::Display for Inconclusive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DeadlineExceeded => write!(f, "time limit exceeded"),
            Self::DepthExceeded => write!(f, "depth limit exceeded"),
            Self::ClauseLimit => write!(f, "clause limit exceeded"),
            Self::Cancelled => write!(f, "cancelled"),
            Self::Saturated => write!(f, "saturated, no contradiction found"),
        }
    }
}
