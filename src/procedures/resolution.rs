/*!
Resolution of a pair of clauses.

Given clauses *C* ∨ *p* and *D* ∨ -*p*, the resolvent of the clauses on *p* is *C* ∨ *D*.

```rust
# use triad_sat::procedures::resolution::{resolve, Resolution};
# use triad_sat::structures::clause::CClause;
let left = CClause::new([1, 2]).unwrap();
let right = CClause::new([-1, 3]).unwrap();

assert_eq!(resolve(&left, &right), Resolution::Resolvent(CClause::new([2, 3]).unwrap()));
```

If two clauses clash on more than one atom, every resolvent of the clauses is a tautology.
So, a pair of clauses is resolved on the first clash found, and any other clash shows the resolvent to be a tautology.
*/

use crate::structures::{
    atom::Atom,
    clause::CClause,
    literal::Literal,
};

/// The result of resolving a pair of clauses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// The clauses do not clash, and so have no resolvent.
    None,

    /// The resolvent of the clauses is a tautology.
    Tautology,

    /// The (non-tautological) resolvent of the clauses, which may be the empty clause.
    Resolvent(CClause),
}

/// The resolvent of `left` and `right` on `atom`.
///
/// Whether the atom occurs with opposite polarities in the clauses is not checked.
pub fn resolve_on(left: &CClause, right: &CClause, atom: Atom) -> Resolution {
    let resolvent = left.union_without(right, atom);
    match resolvent.is_tautology() {
        true => Resolution::Tautology,
        false => Resolution::Resolvent(resolvent),
    }
}

/// The resolvent of `left` and `right` on the first clash between the clauses, if there is a clash.
pub fn resolve(left: &CClause, right: &CClause) -> Resolution {
    match left.complement_in(right) {
        None => Resolution::None,
        Some(literal) => resolve_on(left, right, literal.atom()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clause(literals: &[i32]) -> CClause {
        CClause::try_from(literals).unwrap()
    }

    #[test]
    fn no_clash() {
        assert_eq!(resolve(&clause(&[1, 2]), &clause(&[2, 3])), Resolution::None);
    }

    #[test]
    fn double_clash() {
        assert_eq!(
            resolve(&clause(&[1, 2]), &clause(&[-1, -2])),
            Resolution::Tautology
        );
    }

    #[test]
    fn empty_resolvent() {
        assert_eq!(
            resolve(&clause(&[-4]), &clause(&[4])),
            Resolution::Resolvent(CClause::empty())
        );
    }

    #[test]
    fn symmetric() {
        let left = clause(&[1, -2, 5]);
        let right = clause(&[2, 3]);
        assert_eq!(resolve(&left, &right), resolve(&right, &left));
    }
}
