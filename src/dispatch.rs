/*!
Dispatches for external observers.

Dispatches are small messages sent from a solve at the boundary of each unit of work, e.g. after each atom is eliminated, at each node of a search, or after each round of resolution.
Dispatches have no bearing on a solve, and when no dispatcher is set the only overhead is a check on an optional.

A dispatcher is any function taking a reference to a dispatch.
As backtracking may search in parallel, a dispatcher must be [Send] and [Sync].

```rust
# use std::sync::{Arc, atomic::{AtomicUsize, Ordering}};
# use triad_sat::config::{Config, Strategy};
# use triad_sat::context::Context;
# use triad_sat::dispatch::Dispatch;
let nodes = Arc::new(AtomicUsize::new(0));
let node_count = nodes.clone();

let mut the_context = Context::from_config(Config::default());
the_context.set_dispatcher(Arc::new(move |dispatch: &Dispatch| {
    if let Dispatch::Node { .. } = dispatch {
        node_count.fetch_add(1, Ordering::Relaxed);
    }
}));

assert!(the_context.add_clause([1, 2]).is_ok());
the_context.solve(Strategy::Backtracking);

assert!(nodes.load(Ordering::Relaxed) > 0);
```
*/

use crate::{config::Strategy, reports::Report, structures::atom::Atom};

/// A function to receive dispatches.
pub type Dispatcher = dyn Fn(&Dispatch) + Send + Sync;

/// Dispatches from a context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Dispatch {
    /// Information regarding the parse of a formula.
    Parser(Parser),

    /// An atom has been eliminated, leaving a formula with the given count of clauses.
    Elimination {
        atom: Atom,
        resolvents: usize,
        clauses: usize,
    },

    /// A node of a backtracking search, prior to propagation.
    Node {
        depth: usize,
        assigned: usize,
        clauses: usize,
    },

    /// A round of resolution has completed, with the given count of fresh clauses.
    Round {
        round: usize,
        fresh: usize,
        clauses: usize,
    },

    /// No further dispatches will be sent regarding the current solve.
    Finish(Strategy, Report),
}

/// Information regarding the parse of a formula.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Parser {
    /// The expected atom/clause count based on the header of a DIMACS file.
    Expected(usize, usize),

    /// The count of clauses read and the count of clauses added, as duplicates and tautologies are skipped.
    Counts(usize, usize),
}

impl std::fmt::Display for Parser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Expected(a, c) => write!(f, "Expected:     {a} atoms and {c} clauses"),
            Self::Counts(r, c) => write!(f, "Parse result: {r} clauses read, {c} clauses kept"),
        }
    }
}
