/*!
Valuations, aka. assignments, as sets of literals.

A literal belongs to a valuation exactly when the literal is true on the valuation.
And, no valuation contains both a literal and its negation.

```rust
# use triad_sat::structures::valuation::{Valuation, ValuationStatus};
let mut valuation = Valuation::default();

assert_eq!(valuation.assign(1), ValuationStatus::Fresh);
assert_eq!(valuation.assign(1), ValuationStatus::Set);
assert_eq!(valuation.assign(-1), ValuationStatus::Conflict);

assert_eq!(valuation.value_of(1), Some(true));
assert_eq!(valuation.value_of(2), None);
```

During [backtracking](crate::procedures::backtracking) a valuation is partial, and each branch of the search owns a copy of the valuation.
*/

use std::collections::BTreeSet;

use crate::structures::{
    atom::Atom,
    clause::CClause,
    literal::{CLiteral, Literal},
};

/// The status of a literal with respect to a valuation, given on an attempt to assign the literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValuationStatus {
    /// The atom of the literal had no value, and now has the value of the literal.
    Fresh,

    /// The literal was already true.
    Set,

    /// The negation of the literal is true, and the valuation is unchanged.
    Conflict,
}

/// A set of literals, with no literal together with its negation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Valuation {
    literals: BTreeSet<CLiteral>,
}

impl Valuation {
    /// Assigns the literal to be true, unless the negation of the literal is true.
    pub fn assign(&mut self, literal: CLiteral) -> ValuationStatus {
        if self.literals.contains(&literal.negate()) {
            ValuationStatus::Conflict
        } else if self.literals.insert(literal) {
            ValuationStatus::Fresh
        } else {
            ValuationStatus::Set
        }
    }

    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        if self.literals.contains(&CLiteral::new(atom, true)) {
            Some(true)
        } else if self.literals.contains(&CLiteral::new(atom, false)) {
            Some(false)
        } else {
            None
        }
    }

    /// The value of a literal on the valuation, if the atom of the literal has some value.
    pub fn value_of_literal(&self, literal: CLiteral) -> Option<bool> {
        self.value_of(literal.atom())
            .map(|value| value == literal.polarity())
    }

    /// Whether some literal of the clause is true on the valuation.
    pub fn satisfies(&self, clause: &CClause) -> bool {
        clause.literals().any(|literal| self.literals.contains(&literal))
    }

    /// Gives a (positive) value to each atom without a value.
    pub fn complete_over(&mut self, atoms: impl IntoIterator<Item = Atom>) {
        for atom in atoms {
            if self.value_of(atom).is_none() {
                self.literals.insert(CLiteral::new(atom, true));
            }
        }
    }

    /// The literals true on the valuation, in ascending order.
    pub fn literals(&self) -> impl Iterator<Item = CLiteral> + '_ {
        self.literals.iter().copied()
    }

    /// The number of atoms with a value.
    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// The valuation as a DIMACS model line, ordered by atom, with the terminating `0` as optional.
    pub fn as_dimacs(&self, zero: bool) -> String {
        let mut literals = self.literals.iter().copied().collect::<Vec<_>>();
        literals.sort_unstable_by_key(|literal| literal.atom());

        let mut dimacs_string = String::new();
        for literal in literals {
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

impl FromIterator<CLiteral> for Valuation {
    /// A valuation from literals, where a later literal is skipped if it conflicts with an earlier literal.
    fn from_iter<T: IntoIterator<Item = CLiteral>>(iter: T) -> Self {
        let mut valuation = Valuation::default();
        for literal in iter {
            valuation.assign(literal);
        }
        valuation
    }
}

impl std::fmt::Display for Valuation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{}}}", self.as_dimacs(false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflict_leaves_valuation_unchanged() {
        let mut valuation = Valuation::default();
        valuation.assign(-3);
        assert_eq!(valuation.assign(3), ValuationStatus::Conflict);
        assert_eq!(valuation.len(), 1);
        assert_eq!(valuation.value_of_literal(3), Some(false));
        assert_eq!(valuation.value_of_literal(-3), Some(true));
    }

    #[test]
    fn completion() {
        let mut valuation: Valuation = [-2].into_iter().collect();
        valuation.complete_over([1, 2, 3]);
        assert_eq!(valuation.as_dimacs(true), "1 -2 3 0");
    }
}
