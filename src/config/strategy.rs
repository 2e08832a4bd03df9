use std::str::FromStr;

/// The procedure used to determine the satisfiability of a formula.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Strategy {
    /// [Elimination](crate::procedures::elimination), aka. Davis–Putnam.
    Elimination,

    /// [Backtracking](crate::procedures::backtracking), aka. DPLL.
    Backtracking,

    /// [Refutation](crate::procedures::refutation) by closure under resolution.
    Refutation,
}

impl Strategy {
    /// Each strategy, in the order elimination, backtracking, refutation.
    pub const ALL: [Strategy; 3] = [
        Strategy::Elimination,
        Strategy::Backtracking,
        Strategy::Refutation,
    ];
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Elimination => write!(f, "elimination"),
            Self::Backtracking => write!(f, "backtracking"),
            Self::Refutation => write!(f, "refutation"),
        }
    }
}

impl FromStr for Strategy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "elimination" | "dp" => Ok(Self::Elimination),

            "backtracking" | "dpll" => Ok(Self::Backtracking),

            "refutation" | "resolution" => Ok(Self::Refutation),

            _unknown_string => Err(()),
        }
    }
}
