/*!
Backtracking search, aka. DPLL.

# Overview

Each node of a search is a [Frame], made of a formula, a valuation, and the depth of the node.
Each frame owns its formula and valuation, and so nothing set while examining one node is seen when examining any other node.

A node is expanded by:
- Applying [unit propagation](crate::procedures::propagation) to the formula of the node.
- If propagation leads to a conflict, the node is closed.
- If the simplified formula is empty, the valuation of the node satisfies the formula and the search is complete.
- Otherwise, some atom of the simplified formula is [chosen](crate::procedures::selection), and two frames are created: one with a unit clause asserting the atom is true, and one with a unit clause asserting the atom is false.

Roughly, the loop is as diagrammed:

```none
            +--------+
  +-------->| decide |-------------------------+
  |         +--------+                         |
  |             ⌃                              |
  |             | if the formula is not empty  | push both branches
  |             |                              ⌄
  |     +-----------+      +-----------+     +-------+
  |     | propagate |<-----| pop frame |<----| stack |
  |     +-----------+      +-----------+     +-------+
  |       |       |
  |       |       +-----> satisfiable, if the formula is empty
  |       |
  +-------+ if a conflict is found, pop the next frame
```

Frames are kept on an explicit stack, rather than as recursive calls.
So, the depth of a search is bounded by the configuration and not by the size of the (call) stack.

# Depth

A frame whose depth exceeds the depth limit is not expanded.
The search continues with the remaining frames, as some other branch may still lead to a satisfying valuation.
Though, if the stack empties after some frame was skipped, the search is [inconclusive](Inconclusive::DepthExceeded) rather than unsatisfiable.

# Example

```rust
# use triad_sat::config::{Config, Strategy};
# use triad_sat::context::Context;
# use triad_sat::reports::{Inconclusive, Report};
let mut config = Config::default();
config.max_depth.value = 2;

let mut the_context = Context::from_config(config);
for pair in [[1, 2], [3, 4], [5, 6]] {
    assert!(the_context.add_clause(pair).is_ok());
}

let report = the_context.solve(Strategy::Backtracking);
assert_eq!(report, Report::Inconclusive(Inconclusive::DepthExceeded));
```
*/

use crate::{
    dispatch::Dispatch,
    governor::Governor,
    misc::log::targets::{self},
    procedures::{
        propagation::{unit_propagate, Propagated},
        selection::AtomSelector,
    },
    reports::{Inconclusive, Report},
    structures::{
        clause::CClause,
        formula::Formula,
        literal::{CLiteral, Literal},
        valuation::Valuation,
    },
};

/// A node of a search.
#[derive(Clone, Debug)]
pub struct Frame {
    pub formula: Formula,
    pub valuation: Valuation,
    pub depth: usize,
}

impl Frame {
    /// The root node of a search over the formula.
    pub fn root(formula: Formula) -> Self {
        Frame {
            formula,
            valuation: Valuation::default(),
            depth: 0,
        }
    }
}

/// The result of expanding a frame.
pub enum Expansion {
    /// Propagation found a conflict.
    Conflict,

    /// The valuation of the frame, extended by propagation, satisfies the formula of the frame.
    Satisfied(Valuation),

    /// Some atom was chosen, with the frame to try first and the frame to try second.
    Split(Frame, Frame),
}

/// Expands a frame, as described in the [module documentation](crate::procedures::backtracking).
///
/// Returns an error if the governor concludes the solve during propagation.
pub fn expand<R: rand::Rng>(
    frame: Frame,
    governor: &mut Governor,
    selector: &mut AtomSelector<R>,
    polarity_first: bool,
) -> Result<Expansion, Inconclusive> {
    let Frame {
        formula,
        mut valuation,
        depth,
    } = frame;

    governor.dispatch(Dispatch::Node {
        depth,
        assigned: valuation.len(),
        clauses: formula.len(),
    });

    let formula = match unit_propagate(formula, &mut valuation, governor)? {
        Propagated::Simplified(simplified) => simplified,
        Propagated::Conflict(conflict) => {
            log::trace!(target: targets::BACKTRACKING, "Conflict at depth {depth}: {conflict:?}");
            governor.counters.conflicts += 1;
            return Ok(Expansion::Conflict);
        }
    };

    if formula.is_empty() {
        return Ok(Expansion::Satisfied(valuation));
    }

    let Some(atom) = selector.choose(&formula) else {
        return Ok(Expansion::Satisfied(valuation));
    };

    governor.counters.decisions += 1;
    let decision = CLiteral::new(atom, polarity_first);
    log::trace!(target: targets::BACKTRACKING, "Decision {decision} at depth {depth}.");

    let mut first_formula = formula.clone();
    first_formula.insert(CClause::unit_of(decision));
    let first = Frame {
        formula: first_formula,
        valuation: valuation.clone(),
        depth: depth + 1,
    };

    let mut second_formula = formula;
    second_formula.insert(CClause::unit_of(decision.negate()));
    let second = Frame {
        formula: second_formula,
        valuation,
        depth: depth + 1,
    };

    Ok(Expansion::Split(first, second))
}

/// Searches from the given frames, with the last frame examined first.
///
/// Returns:
/// - Ok(Some(valuation)), if a satisfying valuation was found.
/// - Ok(None), if every branch from every frame was closed by a conflict.
/// - Err(reason), if the search was cut short.
pub fn search<R: rand::Rng>(
    mut stack: Vec<Frame>,
    governor: &mut Governor,
    selector: &mut AtomSelector<R>,
    polarity_first: bool,
) -> Result<Option<Valuation>, Inconclusive> {
    let mut depth_exceeded = false;

    while let Some(frame) = stack.pop() {
        governor.check()?;
        governor.counters.nodes += 1;

        if frame.depth > governor.max_depth {
            if !depth_exceeded {
                log::warn!(target: targets::BACKTRACKING, "Depth limit {} exceeded.", governor.max_depth);
            }
            depth_exceeded = true;
            continue;
        }
        governor.counters.max_depth_seen = governor.counters.max_depth_seen.max(frame.depth);

        match expand(frame, governor, selector, polarity_first)? {
            Expansion::Conflict => {}

            Expansion::Satisfied(valuation) => return Ok(Some(valuation)),

            Expansion::Split(first, second) => {
                stack.push(second);
                stack.push(first);
            }
        }
    }

    match depth_exceeded {
        true => Err(Inconclusive::DepthExceeded),
        false => Ok(None),
    }
}

/// Determines the satisfiability of a formula by backtracking search.
///
/// A witness is given for a satisfiable formula, with a value for each atom of the formula.
pub fn backtrack<R: rand::Rng>(
    formula: &Formula,
    governor: &mut Governor,
    selector: &mut AtomSelector<R>,
    polarity_first: bool,
) -> Report {
    let root = Frame::root(formula.clone());

    match search(vec![root], governor, selector, polarity_first) {
        Ok(Some(valuation)) => witness_report(formula, valuation),
        Ok(None) => Report::Unsatisfiable,
        Err(reason) => Report::Inconclusive(reason),
    }
}

/// A satisfiable report, with the valuation completed over the atoms of the formula.
///
/// Atoms without a value occur only in clauses already satisfied, and so may take any value.
pub(crate) fn witness_report(formula: &Formula, mut valuation: Valuation) -> Report {
    valuation.complete_over(formula.atoms());
    Report::Satisfiable(Some(valuation))
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::config::{AtomSelection, Config};

    fn formula(clauses: &[&[i32]]) -> Formula {
        clauses
            .iter()
            .map(|literals| CClause::try_from(*literals).unwrap())
            .collect()
    }

    fn run(f: &Formula, config: &Config) -> (Report, Governor) {
        let mut governor = Governor::from_config(config);
        let mut rng = StdRng::seed_from_u64(0);
        let mut selector = AtomSelector::new(AtomSelection::First, &mut rng);
        let report = backtrack(f, &mut governor, &mut selector, true);
        (report, governor)
    }

    #[test]
    fn witness_is_total() {
        let f = formula(&[&[1, 2], &[1, 3], &[-4, 5]]);
        let (report, _) = run(&f, &Config::default());

        let witness = report.witness().unwrap();
        assert!(f.satisfied_by(witness));
        for atom in f.atoms() {
            assert!(witness.value_of(atom).is_some());
        }
    }

    #[test]
    fn first_branch_satisfiable_skips_second() {
        let f = formula(&[&[1, 2], &[-1, -2]]);
        let (report, governor) = run(&f, &Config::default());

        assert!(report.is_satisfiable());
        assert_eq!(governor.counters.decisions, 1);
    }

    #[test]
    fn both_branches_closed() {
        let f = formula(&[&[1, 2], &[-1, 2], &[1, -2], &[-1, -2]]);
        let (report, governor) = run(&f, &Config::default());

        assert_eq!(report, Report::Unsatisfiable);
        assert_eq!(governor.counters.conflicts, 2);
    }

    #[test]
    fn depth_limit_is_not_unsatisfiable() {
        let f = formula(&[&[1, 2, 3], &[-1, 2, 3], &[1, -2, 3], &[1, 2, -3]]);

        let mut config = Config::default();
        config.max_depth.value = 1;
        let (report, _) = run(&f, &config);
        assert_eq!(report, Report::Inconclusive(Inconclusive::DepthExceeded));
    }
}
