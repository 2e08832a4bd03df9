use std::str::FromStr;

/// Variant methods for choosing an atom to decide on during backtracking, or to eliminate during elimination.
///
/// The choice of atom has no bearing on the correctness of a procedure, though may have a significant bearing on the time taken.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum AtomSelection {
    /// The atom of the first literal of the first clause without a value.
    First = 0,

    /// The atom occurring in the most clauses, with ties broken by the least atom.
    Frequent,

    /// Some atom without a value, chosen uniformly at random.
    Random,
}

impl std::fmt::Display for AtomSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::First => write!(f, "first"),
            Self::Frequent => write!(f, "frequent"),
            Self::Random => write!(f, "random"),
        }
    }
}

impl AtomSelection {
    /// The minimum AtomSelection type.
    pub const MIN: AtomSelection = AtomSelection::First;

    /// The maximum AtomSelection type.
    pub const MAX: AtomSelection = AtomSelection::Random;
}

impl FromStr for AtomSelection {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first" => Ok(Self::First),

            "frequent" => Ok(Self::Frequent),

            "random" => Ok(Self::Random),

            _unknown_string => Err(()),
        }
    }
}
