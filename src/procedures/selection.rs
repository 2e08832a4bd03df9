//! Choosing an atom, to decide on or to eliminate.
//!
//! The choice is made from the atoms of a formula, and as [backtracking](crate::procedures::backtracking) simplifies a formula with respect to the current valuation, every atom of the formula is without a value.

use std::collections::BTreeMap;

use crate::{
    config::AtomSelection,
    structures::{atom::Atom, formula::Formula, literal::Literal},
};

/// A method of selection, together with a source of randomness.
pub struct AtomSelector<'r, R: rand::Rng> {
    method: AtomSelection,
    rng: &'r mut R,
}

impl<'r, R: rand::Rng> AtomSelector<'r, R> {
    pub fn new(method: AtomSelection, rng: &'r mut R) -> Self {
        AtomSelector { method, rng }
    }

    pub fn method(&self) -> AtomSelection {
        self.method
    }

    /// A seed for a selector used elsewhere, e.g. on a separate thread.
    pub fn fresh_seed(&mut self) -> u64 {
        self.rng.next_u64()
    }

    /// Some atom of the formula, or None if the formula has no atoms.
    pub fn choose(&mut self, formula: &Formula) -> Option<Atom> {
        match self.method {
            AtomSelection::First => formula
                .iter()
                .find_map(|clause| clause.literals().next())
                .map(|literal| literal.atom()),

            AtomSelection::Frequent => {
                let mut occurrences: BTreeMap<Atom, usize> = BTreeMap::new();
                for atom in formula.iter().flat_map(|clause| clause.atoms()) {
                    *occurrences.entry(atom).or_default() += 1;
                }
                occurrences
                    .into_iter()
                    .max_by(|(a, a_count), (b, b_count)| a_count.cmp(b_count).then(b.cmp(a)))
                    .map(|(atom, _)| atom)
            }

            AtomSelection::Random => {
                let atoms = formula.atoms();
                if atoms.is_empty() {
                    return None;
                }
                let index = self.rng.random_range(0..atoms.len());
                atoms.into_iter().nth(index)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::structures::clause::CClause;

    fn formula(clauses: &[&[i32]]) -> Formula {
        clauses
            .iter()
            .map(|literals| CClause::try_from(*literals).unwrap())
            .collect()
    }

    #[test]
    fn first() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut selector = AtomSelector::new(AtomSelection::First, &mut rng);
        assert_eq!(selector.choose(&formula(&[&[3, 4], &[5, 6]])), Some(3));
        assert_eq!(selector.choose(&Formula::default()), None);
    }

    #[test]
    fn frequent() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut selector = AtomSelector::new(AtomSelection::Frequent, &mut rng);
        let f = formula(&[&[1, 2], &[-2, 3], &[2, -3], &[1, 3]]);
        assert_eq!(selector.choose(&f), Some(2));

        // Ties are broken by the least atom.
        let f = formula(&[&[4, 7], &[-4, -7]]);
        assert_eq!(selector.choose(&f), Some(4));
    }

    #[test]
    fn random_is_an_atom_of_the_formula() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut selector = AtomSelector::new(AtomSelection::Random, &mut rng);
        let f = formula(&[&[2, 9], &[-11]]);
        for _ in 0..32 {
            let atom = selector.choose(&f);
            assert!(matches!(atom, Some(2) | Some(9) | Some(11)));
        }
        assert_eq!(selector.choose(&Formula::default()), None);
    }
}
