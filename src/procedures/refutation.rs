/*!
Refutation by closure under resolution.

# Overview

Each round resolves every pair of clauses of the formula, and adds each fresh (non-tautological) resolvent to the formula.
- If the empty clause is derived, the formula is unsatisfiable.
- If a round derives no fresh clause, the formula is *saturated*.

Each round considers every pair of clauses, and not only pairs with some clause from the previous round.
So, pairs are resolved many times over, though the result of each round is easy to state: the formula together with every resolvent of the formula.

# Saturation

If saturation is reached without deriving the empty clause, then the (original) formula is satisfiable, as resolution is refutation complete.
Still, saturation is [reported](crate::reports::Inconclusive::Saturated) as inconclusive rather than satisfiable.
For, no valuation is constructed, and the report is only as good as the implementation of the closure.
See [leans_satisfiable](crate::reports::Report::leans_satisfiable) for a test which accepts saturation.

# Example

```rust
# use triad_sat::config::{Config, Strategy};
# use triad_sat::context::Context;
# use triad_sat::reports::{Inconclusive, Report};
let mut the_context = Context::from_config(Config::default());

assert!(the_context.add_clause([1, 2]).is_ok());
assert!(the_context.add_clause([-1, -2]).is_ok());
assert_eq!(
    the_context.solve(Strategy::Refutation),
    Report::Inconclusive(Inconclusive::Saturated)
);

assert!(the_context.add_clause([-1, 2]).is_ok());
assert!(the_context.add_clause([1, -2]).is_ok());
assert_eq!(the_context.solve(Strategy::Refutation), Report::Unsatisfiable);
```
*/

use crate::{
    dispatch::Dispatch,
    governor::Governor,
    misc::log::targets::{self},
    procedures::resolution::{resolve, Resolution},
    reports::{Inconclusive, Report},
    structures::{formula::Formula, valuation::Valuation},
};

/// Determines the satisfiability of a formula by closure under resolution.
pub fn refute(formula: &Formula, governor: &mut Governor) -> Report {
    match closure(formula.clone(), governor) {
        Ok(report) => report,
        Err(reason) => Report::Inconclusive(reason),
    }
}

fn closure(mut clauses: Formula, governor: &mut Governor) -> Result<Report, Inconclusive> {
    if clauses.is_empty() {
        return Ok(Report::Satisfiable(Some(Valuation::default())));
    }

    if clauses.contains_empty_clause() {
        return Ok(Report::Unsatisfiable);
    }

    let mut round = 0;

    loop {
        governor.check()?;
        round += 1;
        governor.counters.rounds += 1;

        let fresh = resolution_round(&clauses, governor)?;

        if fresh.contains_empty_clause() {
            log::info!(target: targets::REFUTATION, "Empty clause derived in round {round}.");
            return Ok(Report::Unsatisfiable);
        }

        if fresh.is_empty() {
            log::info!(target: targets::REFUTATION, "Saturated after {round} rounds with {} clauses.", clauses.len());
            return Ok(Report::Inconclusive(Inconclusive::Saturated));
        }

        let fresh_count = fresh.len();
        clauses.extend(fresh);

        log::debug!(target: targets::REFUTATION, "Round {round}: {fresh_count} fresh, {} clauses.", clauses.len());
        governor.dispatch(Dispatch::Round {
            round,
            fresh: fresh_count,
            clauses: clauses.len(),
        });
    }
}

/// Every resolvent of a pair of clauses which is not already a clause.
///
/// If the empty clause is derived the round ends early, and the returned formula contains the empty clause.
fn resolution_round(clauses: &Formula, governor: &mut Governor) -> Result<Formula, Inconclusive> {
    let current = clauses.iter().collect::<Vec<_>>();
    let mut fresh = Formula::default();

    for (index, left) in current.iter().enumerate() {
        governor.check()?;

        for right in &current[index + 1..] {
            match resolve(left, right) {
                Resolution::Resolvent(resolvent) => {
                    if resolvent.is_empty() {
                        log::trace!(target: targets::REFUTATION, "{left} and {right} resolve to the empty clause.");
                        fresh.insert(resolvent);
                        return Ok(fresh);
                    }

                    if !clauses.contains(&resolvent) && fresh.insert(resolvent) {
                        governor.counters.resolvents += 1;
                    }
                }

                Resolution::Tautology | Resolution::None => {}
            }
        }

        governor.check_clauses(clauses.len() + fresh.len())?;
    }

    Ok(fresh)
}
