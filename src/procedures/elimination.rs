/*!
Elimination of atoms by resolution, aka. the Davis–Putnam procedure.

# Overview

An atom *p* is eliminated from a formula by:
- Partitioning the clauses of the formula into those containing *p*, those containing -*p*, and those containing neither.
- Resolving each clause containing *p* with each clause containing -*p*.
- Replacing the formula with the clauses containing neither, together with the (non-tautological) resolvents.

The formula obtained is satisfiable exactly when the original formula is satisfiable, and does not mention *p*.
So, eliminating atoms one at a time eventually leads to either:
- The empty formula, which is satisfiable.
- A formula containing the empty clause, which is unsatisfiable.

No witness is produced for a satisfiable formula.

# Seen clauses

Each clause of the formula, and each resolvent, is noted as *seen*, and a resolvent which has been seen is not added to the formula a second time.
The set of seen clauses belongs to a single solve, and is passed explicitly to [eliminate_atom].

# Growth

The number of resolvents may be (much) larger than the number of clauses eliminated, and so the formula may grow exponentially.
Seen clauses are held for the whole of a solve, and every clause of the formula is seen.
So, after the resolvents of each clause containing *p* are added, the count of seen clauses is checked against the clause limit of the governor.

# Example

```rust
# use triad_sat::config::{Config, Strategy};
# use triad_sat::context::Context;
# use triad_sat::reports::Report;
let mut the_context = Context::from_config(Config::default());

assert!(the_context.add_clause([1, 2]).is_ok());
assert!(the_context.add_clause([-1, 2]).is_ok());
assert!(the_context.add_clause([-2, 3]).is_ok());
assert_eq!(the_context.solve(Strategy::Elimination), Report::Satisfiable(None));

assert!(the_context.add_clause([-3]).is_ok());
assert_eq!(the_context.solve(Strategy::Elimination), Report::Unsatisfiable);
```
*/

use std::collections::HashSet;

use crate::{
    dispatch::Dispatch,
    governor::Governor,
    misc::log::targets::{self},
    procedures::{
        resolution::{resolve_on, Resolution},
        selection::AtomSelector,
    },
    reports::{Inconclusive, Report},
    structures::{
        atom::Atom,
        clause::CClause,
        formula::Formula,
        literal::{CLiteral, Literal},
    },
};

/// Determines the satisfiability of a formula by eliminating atoms.
pub fn eliminate<R: rand::Rng>(
    formula: &Formula,
    governor: &mut Governor,
    selector: &mut AtomSelector<R>,
) -> Report {
    match elimination_loop(formula.clone(), governor, selector) {
        Ok(report) => report,
        Err(reason) => Report::Inconclusive(reason),
    }
}

fn elimination_loop<R: rand::Rng>(
    mut formula: Formula,
    governor: &mut Governor,
    selector: &mut AtomSelector<R>,
) -> Result<Report, Inconclusive> {
    let mut seen: HashSet<CClause> = formula.iter().cloned().collect();

    loop {
        governor.check()?;

        if formula.is_empty() {
            log::info!(target: targets::ELIMINATION, "Formula is empty.");
            return Ok(Report::Satisfiable(None));
        }

        if formula.contains_empty_clause() {
            log::info!(target: targets::ELIMINATION, "Empty clause found.");
            return Ok(Report::Unsatisfiable);
        }

        let Some(atom) = selector.choose(&formula) else {
            return Ok(Report::Satisfiable(None));
        };

        let before = governor.counters.resolvents;
        formula = eliminate_atom(formula, atom, &mut seen, governor)?;
        governor.counters.eliminations += 1;

        log::debug!(target: targets::ELIMINATION, "Eliminated {atom}, {} clauses remain.", formula.len());
        governor.dispatch(Dispatch::Elimination {
            atom,
            resolvents: governor.counters.resolvents - before,
            clauses: formula.len(),
        });
    }
}

/// The formula with `atom` eliminated by resolution, skipping resolvents in `seen` and noting fresh resolvents in `seen`.
pub fn eliminate_atom(
    formula: Formula,
    atom: Atom,
    seen: &mut HashSet<CClause>,
    governor: &mut Governor,
) -> Result<Formula, Inconclusive> {
    let positive_literal = CLiteral::new(atom, true);
    let negative_literal = CLiteral::new(atom, false);

    let mut positive = Vec::default();
    let mut negative = Vec::default();
    let mut neither = Formula::default();

    for clause in formula {
        if clause.contains(positive_literal) {
            positive.push(clause);
        } else if clause.contains(negative_literal) {
            negative.push(clause);
        } else {
            neither.insert(clause);
        }
    }

    log::trace!(target: targets::ELIMINATION, "{atom}: {} positive, {} negative.", positive.len(), negative.len());

    for positive_clause in &positive {
        governor.check()?;

        for negative_clause in &negative {
            match resolve_on(positive_clause, negative_clause, atom) {
                Resolution::Resolvent(resolvent) => {
                    if seen.insert(resolvent.clone()) {
                        governor.counters.resolvents += 1;
                        neither.insert(resolvent);
                    }
                }

                Resolution::Tautology | Resolution::None => {}
            }
        }

        governor.check_clauses(seen.len().max(neither.len()))?;
    }

    Ok(neither)
}
