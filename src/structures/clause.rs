//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! The canonical representation of a clause is a sorted vector of literals, without duplicates.
//! As a consequence, two clauses are equal (and hash equally) exactly when they contain the same literals, regardless of the order in which the literals were given.
//!
//! ```rust
//! # use triad_sat::structures::clause::CClause;
//! let clause = CClause::new([2, 1, 2]).unwrap();
//!
//! assert_eq!(clause, CClause::new([1, 2]).unwrap());
//! assert_eq!(clause.size(), 2);
//!
//! assert!(CClause::new([1, 0, 2]).is_err());
//! ```
//!
//! - The empty clause is always false (never true).
//! - A clause containing some literal and its negation is a tautology, and is always true.
//!   Tautologies may be constructed, but are not kept in a [formula](crate::structures::formula), and are never produced by resolution.

use crate::{
    structures::{
        atom::Atom,
        literal::{CLiteral, Literal},
    },
    types::err::{self},
};

/// The canonical implementation of a clause.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CClause {
    /// Literals, sorted and without duplicates.
    literals: Vec<CLiteral>,
}

impl CClause {
    /// A clause from some literals, or an error if `0` is given as a literal.
    ///
    /// The least integer is also refused, as it has no negation.
    pub fn new(literals: impl IntoIterator<Item = CLiteral>) -> Result<Self, err::ClauseError> {
        let mut literals: Vec<CLiteral> = literals.into_iter().collect();
        if literals
            .iter()
            .any(|&literal| literal == 0 || literal == CLiteral::MIN)
        {
            return Err(err::ClauseError::MalformedClause);
        }
        literals.sort_unstable();
        literals.dedup();
        Ok(CClause { literals })
    }

    /// The empty clause.
    pub fn empty() -> Self {
        CClause::default()
    }

    /// The unit clause of a literal.
    pub(crate) fn unit_of(literal: CLiteral) -> Self {
        debug_assert!(literal != 0);
        CClause {
            literals: vec![literal],
        }
    }

    /// A clause from literals known to be non-zero.
    fn from_nonzero(mut literals: Vec<CLiteral>) -> Self {
        literals.sort_unstable();
        literals.dedup();
        CClause { literals }
    }

    /// The number of literals in the clause.
    pub fn size(&self) -> usize {
        self.literals.len()
    }

    /// Whether the clause is the empty clause.
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// An iterator over all literals in the clause, in ascending order.
    pub fn literals(&self) -> impl Iterator<Item = CLiteral> + '_ {
        self.literals.iter().copied()
    }

    /// An iterator over all atoms in the clause.
    pub fn atoms(&self) -> impl Iterator<Item = Atom> + '_ {
        self.literals.iter().map(|literal| literal.atom())
    }

    pub fn contains(&self, literal: CLiteral) -> bool {
        self.literals.binary_search(&literal).is_ok()
    }

    /// Whether the clause contains some literal and its negation.
    pub fn is_tautology(&self) -> bool {
        self.literals
            .iter()
            .take_while(|literal| !literal.polarity())
            .any(|literal| self.contains(literal.negate()))
    }

    /// The literal of the clause, if the clause is a unit clause.
    pub fn unit(&self) -> Option<CLiteral> {
        match self.literals.as_slice() {
            [literal] => Some(*literal),
            _ => None,
        }
    }

    /// Some literal whose negation is in `other`, if such a literal exists.
    pub fn complement_in(&self, other: &CClause) -> Option<CLiteral> {
        self.literals
            .iter()
            .find(|literal| other.contains(literal.negate()))
            .copied()
    }

    /// The clause given by the union of `self` and `other`, less any literal with the given atom.
    pub fn union_without(&self, other: &CClause, atom: Atom) -> CClause {
        let literals = self
            .literals
            .iter()
            .chain(other.literals.iter())
            .filter(|literal| literal.atom() != atom)
            .copied()
            .collect();
        CClause::from_nonzero(literals)
    }

    /// The clause of those literals of `self` on which `keep` holds.
    pub fn retaining(&self, keep: impl Fn(CLiteral) -> bool) -> CClause {
        CClause {
            literals: self
                .literals
                .iter()
                .copied()
                .filter(|&literal| keep(literal))
                .collect(),
        }
    }

    /// A string of the clause in DIMACS form, with the terminating `0` as optional.
    pub fn as_dimacs(&self, zero: bool) -> String {
        let mut dimacs_string = String::new();
        for literal in &self.literals {
            dimacs_string.push_str(format!("{literal} ").as_str());
        }
        if zero {
            dimacs_string += "0";
        } else {
            dimacs_string.pop();
        }
        dimacs_string
    }
}

impl TryFrom<Vec<CLiteral>> for CClause {
    type Error = err::ClauseError;

    fn try_from(value: Vec<CLiteral>) -> Result<Self, Self::Error> {
        CClause::new(value)
    }
}

impl TryFrom<&[CLiteral]> for CClause {
    type Error = err::ClauseError;

    fn try_from(value: &[CLiteral]) -> Result<Self, Self::Error> {
        CClause::new(value.iter().copied())
    }
}

impl std::fmt::Display for CClause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.is_empty() {
            true => write!(f, "⊥"),
            false => write!(f, "({})", self.as_dimacs(false)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_is_irrelevant() {
        let a = CClause::new([3, -1, 2]).unwrap();
        let b = CClause::new([2, 3, -1, 3]).unwrap();
        assert_eq!(a, b);

        let mut set = std::collections::HashSet::new();
        set.insert(a);
        assert!(!set.insert(b));
    }

    #[test]
    fn terminator_refused() {
        assert_eq!(
            CClause::new([1, 0]),
            Err(err::ClauseError::MalformedClause)
        );
        assert_eq!(CClause::new([0]), Err(err::ClauseError::MalformedClause));
        assert_eq!(
            CClause::new([i32::MIN]),
            Err(err::ClauseError::MalformedClause)
        );
    }

    #[test]
    fn tautology() {
        assert!(CClause::new([1, -2, -1]).unwrap().is_tautology());
        assert!(!CClause::new([1, -2, 3]).unwrap().is_tautology());
        assert!(!CClause::empty().is_tautology());
    }

    #[test]
    fn union_without_atom() {
        let a = CClause::new([1, 2]).unwrap();
        let b = CClause::new([-1, 2, 3]).unwrap();
        assert_eq!(a.union_without(&b, 1), CClause::new([2, 3]).unwrap());

        let unit = CClause::new([1]).unwrap();
        let not_unit = CClause::new([-1]).unwrap();
        assert!(unit.union_without(&not_unit, 1).is_empty());
    }

    #[test]
    fn retaining_keeps_order() {
        let clause = CClause::new([3, -1, 2, -4]).unwrap();
        let positive = clause.retaining(|literal| literal.polarity());
        assert_eq!(positive, CClause::new([2, 3]).unwrap());
        assert!(clause.retaining(|_| false).is_empty());
    }

    #[test]
    fn dimacs() {
        let clause = CClause::new([-2, 1]).unwrap();
        assert_eq!(clause.as_dimacs(true), "-2 1 0");
        assert_eq!(clause.as_dimacs(false), "-2 1");
        assert_eq!(CClause::empty().as_dimacs(true), "0");
    }
}
