/*!
The context --- to which formulas are added and within which solves take place, etc.

Strictly, a [GenericContext] and a [Context].

The generic context is generic over the source of randomness used when choosing atoms.
[from_config](Context::from_config) is implemented for a context rather than a generic context to avoid requiring a source of randomness to be supplied alongside a config.

A context holds a single formula, and a solve does not revise the formula.
So, the same formula may be solved with each strategy in turn.

# Example
```rust
# use triad_sat::config::{Config, Strategy};
# use triad_sat::context::Context;
# use triad_sat::reports::Report;
let mut the_context = Context::from_config(Config::default());

assert!(the_context.add_clause([1, 2]).is_ok());
assert!(the_context.add_clause([-1]).is_ok());

let report = the_context.solve(Strategy::Backtracking);
let witness = report.witness().unwrap();

assert_eq!(witness.value_of(1), Some(false));
assert_eq!(witness.value_of(2), Some(true));

for strategy in [Strategy::Elimination, Strategy::Refutation] {
    assert!(the_context.solve(strategy).leans_satisfiable());
}
```
*/

pub mod callbacks;
mod counters;
pub use counters::Counters;

use std::sync::Arc;

use rand::{rngs::StdRng, SeedableRng};

use crate::{
    config::Config, dispatch::Dispatcher, reports::Report, structures::formula::Formula,
};

use callbacks::CallbackTerminate;

/// A context, generic over the source of randomness.
pub struct GenericContext<R: rand::Rng> {
    /// The configuration of the context.
    pub config: Config,

    /// Counters from the most recent solve.
    pub counters: Counters,

    /// The formula of the context.
    pub(crate) formula: Formula,

    /// The source of randomness for atom selection.
    pub(crate) rng: R,

    /// The report of the most recent solve, if any.
    pub(crate) report: Option<Report>,

    pub(crate) dispatcher: Option<Arc<Dispatcher>>,

    pub(crate) callback_terminate: Option<Arc<CallbackTerminate>>,
}

/// A context which uses [StdRng] as a source of randomness, seeded from the config.
pub type Context = GenericContext<StdRng>;

impl Context {
    /// A context with the given configuration and no clauses.
    pub fn from_config(config: Config) -> Self {
        let rng = StdRng::seed_from_u64(config.random_seed.value);
        GenericContext::from_config_and_rng(config, rng)
    }
}

impl<R: rand::Rng> GenericContext<R> {
    /// A context with the given configuration and source of randomness, and no clauses.
    pub fn from_config_and_rng(config: Config, rng: R) -> Self {
        GenericContext {
            config,
            counters: Counters::default(),
            formula: Formula::default(),
            rng,
            report: None,
            dispatcher: None,
            callback_terminate: None,
        }
    }

    /// The formula of the context.
    pub fn formula(&self) -> &Formula {
        &self.formula
    }

    /// The report of the most recent solve, if any.
    pub fn report(&self) -> Option<&Report> {
        self.report.as_ref()
    }
}
