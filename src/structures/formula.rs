/*!
Formulas, aka. sets of clauses, interpreted as the conjunction of those clauses.

A formula has set semantics: no clause appears twice, as [clauses](crate::structures::clause::CClause) are equal when they contain the same literals.
Further, tautological clauses are not kept, as they place no constraint on a valuation.

Two formulas are of particular interest:
- The empty formula, which contains no clauses and is satisfied by every valuation.
- Any formula containing the empty clause, which is satisfied by no valuation.

```rust
# use triad_sat::structures::{clause::CClause, formula::Formula};
let mut formula = Formula::default();
assert!(formula.is_empty());

assert!(formula.insert(CClause::new([1, 2]).unwrap()));
assert!(!formula.insert(CClause::new([2, 1]).unwrap()));
assert!(!formula.insert(CClause::new([1, -1]).unwrap()));
assert_eq!(formula.len(), 1);

formula.insert(CClause::empty());
assert!(formula.contains_empty_clause());
```

Clauses are kept in order, and so iteration over a formula (and every procedure over a formula) is deterministic.
*/

use std::collections::{btree_set, BTreeSet};

use crate::structures::{atom::Atom, clause::CClause, valuation::Valuation};

/// A set of clauses.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Formula {
    clauses: BTreeSet<CClause>,
}

impl Formula {
    /// Adds a clause to the formula, returning whether the clause was fresh.
    ///
    /// Tautologies are skipped.
    pub fn insert(&mut self, clause: CClause) -> bool {
        match clause.is_tautology() {
            true => false,
            false => self.clauses.insert(clause),
        }
    }

    pub fn contains(&self, clause: &CClause) -> bool {
        self.clauses.contains(clause)
    }

    /// The number of clauses in the formula.
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    /// Whether the formula contains no clauses, and so is trivially satisfiable.
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Whether the formula contains the empty clause, and so is unsatisfiable.
    pub fn contains_empty_clause(&self) -> bool {
        // The empty clause is least in the order on clauses.
        self.clauses.first().is_some_and(|clause| clause.is_empty())
    }

    /// The atoms of the formula, in ascending order.
    pub fn atoms(&self) -> BTreeSet<Atom> {
        self.clauses.iter().flat_map(|clause| clause.atoms()).collect()
    }

    /// The greatest atom of the formula, or `0` if the formula has no atoms.
    pub fn max_atom(&self) -> Atom {
        self.clauses
            .iter()
            .flat_map(|clause| clause.atoms())
            .max()
            .unwrap_or(0)
    }

    pub fn iter(&self) -> btree_set::Iter<'_, CClause> {
        self.clauses.iter()
    }

    /// Whether every clause of the formula is satisfied by the valuation.
    pub fn satisfied_by(&self, valuation: &Valuation) -> bool {
        self.clauses.iter().all(|clause| valuation.satisfies(clause))
    }

    /// The formula in DIMACS form, with a problem line.
    pub fn as_dimacs(&self) -> String {
        let mut dimacs = format!("p cnf {} {}\n", self.max_atom(), self.len());
        for clause in &self.clauses {
            dimacs.push_str(&clause.as_dimacs(true));
            dimacs.push('\n');
        }
        dimacs
    }
}

impl FromIterator<CClause> for Formula {
    fn from_iter<T: IntoIterator<Item = CClause>>(iter: T) -> Self {
        let mut formula = Formula::default();
        for clause in iter {
            formula.insert(clause);
        }
        formula
    }
}

impl Extend<CClause> for Formula {
    fn extend<T: IntoIterator<Item = CClause>>(&mut self, iter: T) {
        for clause in iter {
            self.insert(clause);
        }
    }
}

impl IntoIterator for Formula {
    type Item = CClause;
    type IntoIter = btree_set::IntoIter<CClause>;

    fn into_iter(self) -> Self::IntoIter {
        self.clauses.into_iter()
    }
}

impl<'f> IntoIterator for &'f Formula {
    type Item = &'f CClause;
    type IntoIter = btree_set::Iter<'f, CClause>;

    fn into_iter(self) -> Self::IntoIter {
        self.clauses.iter()
    }
}
