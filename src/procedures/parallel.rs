/*!
Backtracking search, with the two branches of the first decision searched in parallel.

The root frame is expanded as usual, and each of the two frames from the first decision is searched on a separate (scoped) thread.
Each thread:
- Owns its frame, and so its own formula and valuation.
- Has its own [governor](crate::governor::Governor), forked from the governor of the solve, and so shares the deadline and callbacks of the solve.
- Has its own source of randomness, seeded from the source of randomness of the solve.

The forked governors share a cancellation flag.
When either thread finds a satisfying valuation the flag is set, and the other thread concludes at its next check.

The reports of the threads are combined as:
- Satisfiable, if either thread found a satisfying valuation.
- Unsatisfiable, if both threads closed every branch.
- Inconclusive, otherwise, with preference for a reason other than cancellation.
*/

use std::sync::{atomic::AtomicBool, Arc};

use rand::{rngs::StdRng, SeedableRng};

use crate::{
    context::Counters,
    governor::Governor,
    misc::log::targets::{self},
    procedures::{
        backtracking::{expand, search, witness_report, Expansion, Frame},
        selection::AtomSelector,
    },
    reports::{Inconclusive, Report},
    structures::{formula::Formula, valuation::Valuation},
};

type BranchResult = (Result<Option<Valuation>, Inconclusive>, Counters);

/// Determines the satisfiability of a formula by backtracking search, searching the branches of the first decision in parallel.
pub fn backtrack_split<R: rand::Rng>(
    formula: &Formula,
    governor: &mut Governor,
    selector: &mut AtomSelector<R>,
    polarity_first: bool,
) -> Report {
    if let Err(reason) = governor.check() {
        return Report::Inconclusive(reason);
    }
    governor.counters.nodes += 1;

    let (first, second) = match expand(
        Frame::root(formula.clone()),
        governor,
        selector,
        polarity_first,
    ) {
        Ok(Expansion::Conflict) => return Report::Unsatisfiable,
        Ok(Expansion::Satisfied(valuation)) => return witness_report(formula, valuation),
        Ok(Expansion::Split(first, second)) => (first, second),
        Err(reason) => return Report::Inconclusive(reason),
    };

    let method = selector.method();
    let seeds = [selector.fresh_seed(), selector.fresh_seed()];
    let cancel = Arc::new(AtomicBool::new(false));

    log::debug!(target: targets::PARALLEL, "Splitting search.");

    let joined = crossbeam::thread::scope(|scope| {
        let handles = [first, second]
            .into_iter()
            .zip(seeds)
            .map(|(frame, seed)| {
                let mut branch_governor = governor.fork(cancel.clone());
                scope.spawn(move |_| -> BranchResult {
                    let mut rng = StdRng::seed_from_u64(seed);
                    let mut branch_selector = AtomSelector::new(method, &mut rng);
                    let result = search(
                        vec![frame],
                        &mut branch_governor,
                        &mut branch_selector,
                        polarity_first,
                    );
                    if let Ok(Some(_)) = result {
                        log::debug!(target: targets::PARALLEL, "Branch satisfied, cancelling sibling.");
                        branch_governor.cancel();
                    }
                    (result, branch_governor.counters)
                })
            })
            .collect::<Vec<_>>();

        handles
            .into_iter()
            .map(|handle| handle.join())
            .collect::<Vec<_>>()
    });

    let joined = match joined {
        Ok(joined) => joined,
        Err(panic) => std::panic::resume_unwind(panic),
    };

    let mut witness = None;
    let mut closed_branches = 0;
    let mut reason = None;

    for branch in joined {
        let (result, counters) = match branch {
            Ok(branch) => branch,
            Err(panic) => std::panic::resume_unwind(panic),
        };
        governor.counters.absorb(&counters);

        match result {
            Ok(Some(valuation)) => {
                if witness.is_none() {
                    witness = Some(valuation);
                }
            }

            Ok(None) => closed_branches += 1,

            Err(Inconclusive::Cancelled) => {
                reason = reason.or(Some(Inconclusive::Cancelled));
            }

            Err(other) => reason = Some(other),
        }
    }

    match (witness, closed_branches) {
        (Some(valuation), _) => witness_report(formula, valuation),
        (None, 2) => Report::Unsatisfiable,
        (None, _) => Report::Inconclusive(reason.unwrap_or(Inconclusive::Cancelled)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::{AtomSelection, Config},
        structures::clause::CClause,
    };

    fn formula(clauses: &[&[i32]]) -> Formula {
        clauses
            .iter()
            .map(|literals| CClause::try_from(*literals).unwrap())
            .collect()
    }

    fn run(f: &Formula, config: &Config) -> Report {
        let mut governor = Governor::from_config(config);
        let mut rng = StdRng::seed_from_u64(3);
        let mut selector = AtomSelector::new(AtomSelection::Frequent, &mut rng);
        backtrack_split(f, &mut governor, &mut selector, true)
    }

    #[test]
    fn satisfiable_split() {
        let f = formula(&[&[1, 2, 3], &[-1, -2], &[-1, -3], &[-2, -3], &[1, -3]]);
        let report = run(&f, &Config::default());
        assert!(f.satisfied_by(report.witness().unwrap()));
    }

    #[test]
    fn unsatisfiable_split() {
        let f = formula(&[
            &[1, 2, 3],
            &[1, 2, -3],
            &[1, -2, 3],
            &[1, -2, -3],
            &[-1, 2, 3],
            &[-1, 2, -3],
            &[-1, -2, 3],
            &[-1, -2, -3],
        ]);
        assert_eq!(run(&f, &Config::default()), Report::Unsatisfiable);
    }

    #[test]
    fn root_conflict() {
        let f = formula(&[&[4], &[-4]]);
        assert_eq!(run(&f, &Config::default()), Report::Unsatisfiable);
    }

    #[test]
    fn terminated_split() {
        let f = formula(&[&[1, 2], &[3, 4], &[5, 6]]);
        let mut governor =
            Governor::from_config(&Config::default()).with_terminate(Some(Arc::new(|| true)));
        let mut rng = StdRng::seed_from_u64(3);
        let mut selector = AtomSelector::new(AtomSelection::First, &mut rng);

        assert_eq!(
            backtrack_split(&f, &mut governor, &mut selector, true),
            Report::Inconclusive(Inconclusive::Cancelled)
        );
    }
}
