/*!
Unit propagation.

A unit clause asserts its literal, and propagation sets each asserted literal to be true.
Propagation continues until no clause is unit on the valuation, or until some clause is falsified (i.e. every literal of the clause is false).

# Occurrences

Rather than simplifying the formula after each literal is set, propagation indexes the clauses of the formula by the literals they contain.
When a literal is set:
- Each clause containing the literal is noted as satisfied.
- Each (unsatisfied) clause containing the negation of the literal is examined, as it may have become unit, or falsified.

So, the work of setting a literal is proportional to the occurrences of its negation, and the formula is [simplified](simplify) once, after propagation completes:
- Each clause with a true literal is removed.
- Each false literal is removed from the remaining clauses.

As a consequence, no clause of a propagated formula mentions an atom with a value, and a clause is unit on the current valuation exactly when the clause contains a single literal.

# Governance

The governor is checked before each literal is set, and so a long chain of propagation within a single node of a search is cut short by the time limit, or a terminate callback.

```rust
# use triad_sat::config::Config;
# use triad_sat::governor::Governor;
# use triad_sat::procedures::propagation::{unit_propagate, Propagated};
# use triad_sat::structures::{clause::CClause, formula::Formula, valuation::Valuation};
let formula: Formula = [vec![1], vec![-1, 2], vec![-2, 3, 4]]
    .into_iter()
    .map(|literals| CClause::new(literals).unwrap())
    .collect();

let mut valuation = Valuation::default();
let mut governor = Governor::from_config(&Config::default());

let Ok(Propagated::Simplified(simplified)) = unit_propagate(formula, &mut valuation, &mut governor) else {
    panic!("no conflict");
};

assert_eq!(valuation.as_dimacs(false), "1 2");
assert_eq!(simplified.len(), 1);
assert!(simplified.contains(&CClause::new([3, 4]).unwrap()));
```
*/

use std::collections::HashMap;

use crate::{
    governor::Governor,
    misc::log::targets::{self},
    reports::Inconclusive,
    structures::{
        clause::CClause,
        formula::Formula,
        literal::{CLiteral, Literal},
        valuation::{Valuation, ValuationStatus},
    },
};

/// A conflict found during propagation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Conflict {
    /// Some literal was asserted while its negation was true.
    Complement(CLiteral),

    /// Some clause has every literal false.
    EmptyClause,
}

/// The result of propagation which ran to completion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Propagated {
    /// No conflict was found, with the formula simplified by the extended valuation.
    Simplified(Formula),

    /// A conflict was found.
    Conflict(Conflict),
}

/// The clause simplified by the valuation, or None if the clause is satisfied.
fn simplified_clause(clause: &CClause, valuation: &Valuation) -> Option<CClause> {
    match clause
        .literals()
        .any(|literal| valuation.value_of_literal(literal) == Some(true))
    {
        true => None,
        false => Some(clause.retaining(|literal| valuation.value_of_literal(literal).is_none())),
    }
}

/// The formula simplified by the valuation.
pub fn simplify(formula: &Formula, valuation: &Valuation) -> Formula {
    formula
        .iter()
        .filter_map(|clause| simplified_clause(clause, valuation))
        .collect()
}

/// Propagates unit clauses to a fixed point, extending the valuation and returning the simplified formula.
///
/// The formula is assumed to mention no atom with a value on the valuation.
///
/// Returns an error only if the governor concludes the solve.
pub fn unit_propagate(
    formula: Formula,
    valuation: &mut Valuation,
    governor: &mut Governor,
) -> Result<Propagated, Inconclusive> {
    if formula.contains_empty_clause() {
        log::trace!(target: targets::PROPAGATION, "Empty clause.");
        return Ok(Propagated::Conflict(Conflict::EmptyClause));
    }

    let clauses = formula.into_iter().collect::<Vec<_>>();

    let mut occurrences: HashMap<CLiteral, Vec<usize>> = HashMap::default();
    let mut queue: Vec<CLiteral> = Vec::default();

    for (index, clause) in clauses.iter().enumerate() {
        for literal in clause.literals() {
            occurrences.entry(literal).or_default().push(index);
        }
        if let Some(literal) = clause.unit() {
            queue.push(literal);
        }
    }

    let mut satisfied = vec![false; clauses.len()];

    while let Some(literal) = queue.pop() {
        governor.check()?;

        match valuation.assign(literal) {
            ValuationStatus::Conflict => {
                log::trace!(target: targets::PROPAGATION, "Consequence {literal} conflicts with the valuation.");
                return Ok(Propagated::Conflict(Conflict::Complement(literal)));
            }

            ValuationStatus::Set => continue,

            ValuationStatus::Fresh => {
                log::trace!(target: targets::PROPAGATION, "Propagated {literal}.");
                governor.counters.propagations += 1;
            }
        }

        if let Some(indices) = occurrences.get(&literal) {
            for &index in indices {
                satisfied[index] = true;
            }
        }

        let Some(indices) = occurrences.get(&literal.negate()) else {
            continue;
        };

        'clause_loop: for &index in indices {
            if satisfied[index] {
                continue;
            }

            let mut open_literal = None;
            let mut open_count = 0;

            for other in clauses[index].literals() {
                match valuation.value_of_literal(other) {
                    Some(true) => {
                        satisfied[index] = true;
                        continue 'clause_loop;
                    }
                    Some(false) => {}
                    None => {
                        open_count += 1;
                        open_literal = Some(other);
                    }
                }
            }

            match (open_count, open_literal) {
                (0, _) => {
                    log::trace!(target: targets::PROPAGATION, "{} is false.", clauses[index]);
                    return Ok(Propagated::Conflict(Conflict::EmptyClause));
                }
                (1, Some(unit)) => queue.push(unit),
                _ => {}
            }
        }
    }

    let simplified = clauses
        .iter()
        .zip(satisfied)
        .filter(|(_, satisfied)| !satisfied)
        .filter_map(|(clause, _)| simplified_clause(clause, valuation))
        .collect::<Formula>();

    Ok(Propagated::Simplified(simplified))
}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    use super::*;
    use crate::config::Config;

    fn formula(clauses: &[&[i32]]) -> Formula {
        clauses
            .iter()
            .map(|literals| CClause::try_from(*literals).unwrap())
            .collect()
    }

    fn governor() -> Governor {
        Governor::from_config(&Config::default())
    }

    #[test]
    fn simplification() {
        let f = formula(&[&[1, 2], &[-1, 3], &[2, 3]]);
        let positive: Valuation = [1].into_iter().collect();
        let negative: Valuation = [-1].into_iter().collect();
        assert_eq!(simplify(&f, &positive), formula(&[&[3], &[2, 3]]));
        assert_eq!(simplify(&f, &negative), formula(&[&[2], &[2, 3]]));
    }

    #[test]
    fn unit_conflict() {
        let mut valuation = Valuation::default();
        let result = unit_propagate(formula(&[&[1], &[-1]]), &mut valuation, &mut governor());
        assert!(matches!(result, Ok(Propagated::Conflict(_))));
    }

    #[test]
    fn falsified_clause() {
        let mut valuation = Valuation::default();
        let f = formula(&[&[1], &[2], &[-1, -2, 3], &[-3, -1]]);
        let result = unit_propagate(f, &mut valuation, &mut governor());
        assert!(matches!(result, Ok(Propagated::Conflict(_))));
    }

    #[test]
    fn complement_of_existing_value() {
        let mut valuation: Valuation = [-1].into_iter().collect();
        let result = unit_propagate(formula(&[&[1]]), &mut valuation, &mut governor());
        assert_eq!(result, Ok(Propagated::Conflict(Conflict::Complement(1))));
    }

    #[test]
    fn fixed_point() {
        let f = formula(&[&[1], &[-1, 2], &[-2, 3], &[-3, 4], &[5, 6]]);
        let mut valuation = Valuation::default();
        let mut governor = governor();

        let result = unit_propagate(f, &mut valuation, &mut governor);
        assert_eq!(result, Ok(Propagated::Simplified(formula(&[&[5, 6]]))));
        assert_eq!(valuation.as_dimacs(false), "1 2 3 4");
        assert_eq!(governor.counters.propagations, 4);
    }

    #[test]
    fn long_chain() {
        let mut clauses = vec![CClause::new([1]).unwrap()];
        for atom in 1..20_000 {
            clauses.push(CClause::new([-atom, atom + 1]).unwrap());
        }
        let f: Formula = clauses.into_iter().collect();

        let mut valuation = Valuation::default();
        let mut governor = governor();

        let result = unit_propagate(f, &mut valuation, &mut governor);
        assert_eq!(result, Ok(Propagated::Simplified(Formula::default())));
        assert_eq!(valuation.len(), 20_000);
    }

    #[test]
    fn terminate_within_propagation() {
        let mut clauses = vec![CClause::new([1]).unwrap()];
        for atom in 1..1_000 {
            clauses.push(CClause::new([-atom, atom + 1]).unwrap());
        }
        let f: Formula = clauses.into_iter().collect();

        let checks = Arc::new(AtomicUsize::new(0));
        let check_count = checks.clone();
        let mut governor = governor().with_terminate(Some(Arc::new(move || {
            check_count.fetch_add(1, Ordering::Relaxed) >= 10
        })));

        let mut valuation = Valuation::default();
        let result = unit_propagate(f, &mut valuation, &mut governor);

        assert_eq!(result, Err(Inconclusive::Cancelled));
        assert_eq!(valuation.len(), 10);
    }
}
