//! Determines the satisfiability of the formula in a context.
//!
//! # Overview
//!
//! [solve](crate::context::GenericContext::solve) builds a [governor](crate::governor::Governor) from the configuration and callbacks of the context, and runs the procedure for the requested [strategy](crate::config::Strategy) under the governor:
//!
//! | Strategy     | Procedure                                                                                              | Witness |
//! |--------------|--------------------------------------------------------------------------------------------------------|---------|
//! | Elimination  | [eliminate](crate::procedures::elimination::eliminate)                                                 | No      |
//! | Backtracking | [backtrack](crate::procedures::backtracking::backtrack), or [backtrack_split](crate::procedures::parallel::backtrack_split) | Yes     |
//! | Refutation   | [refute](crate::procedures::refutation::refute)                                                        | Only for the empty formula |
//!
//! On completion the counters of the solve are stored in the context, together with the report, and a [finish](crate::dispatch::Dispatch::Finish) dispatch is sent.
//!
//! The formula of the context is not revised by a solve.
//! So, the same formula may be solved with each strategy in turn, and adding clauses after a solve is fine.
//!
//! ```rust
//! # use triad_sat::config::{Config, Strategy};
//! # use triad_sat::context::Context;
//! let mut the_context = Context::from_config(Config::default());
//! assert!(the_context.add_clause([1, -2]).is_ok());
//! assert!(the_context.add_clause([2, 3]).is_ok());
//!
//! for strategy in Strategy::ALL {
//!     let report = the_context.solve(strategy);
//!     assert!(report.leans_satisfiable());
//!     assert_eq!(the_context.report(), Some(&report));
//! }
//!
//! assert_eq!(the_context.formula().len(), 2);
//! ```

use crate::{
    config::Strategy,
    context::GenericContext,
    dispatch::Dispatch,
    governor::Governor,
    misc::log::targets::{self},
    procedures::{
        backtracking::backtrack, elimination::eliminate, parallel::backtrack_split,
        refutation::refute, selection::AtomSelector,
    },
    reports::Report,
};

impl<R: rand::Rng> GenericContext<R> {
    /// Determines the satisfiability of the formula of the context, using the given strategy.
    pub fn solve(&mut self, strategy: Strategy) -> Report {
        log::info!(target: targets::GOVERNOR, "Solving {} clauses by {strategy}.", self.formula.len());

        let mut governor = Governor::from_config(&self.config)
            .with_dispatcher(self.dispatcher.clone())
            .with_terminate(self.callback_terminate.clone());

        let mut selector = AtomSelector::new(self.config.atom_selection.value, &mut self.rng);
        let polarity_first = self.config.polarity_first.value;

        let report = match strategy {
            Strategy::Elimination => eliminate(&self.formula, &mut governor, &mut selector),

            Strategy::Backtracking => match self.config.split.value {
                true => backtrack_split(&self.formula, &mut governor, &mut selector, polarity_first),
                false => backtrack(&self.formula, &mut governor, &mut selector, polarity_first),
            },

            Strategy::Refutation => refute(&self.formula, &mut governor),
        };

        governor.counters.time = governor.elapsed();

        if let Some(witness) = report.witness() {
            if !self.formula.satisfied_by(witness) {
                log::error!(target: targets::GOVERNOR, "Witness {witness} does not satisfy the formula.");
                debug_assert!(false, "witness does not satisfy the formula");
            }
        }

        match &report {
            Report::Inconclusive(reason) => {
                log::info!(target: targets::GOVERNOR, "{strategy}: {report} ({reason}) in {:?}.", governor.counters.time)
            }
            _ => log::info!(target: targets::GOVERNOR, "{strategy}: {report} in {:?}.", governor.counters.time),
        }

        governor.dispatch(Dispatch::Finish(strategy, report.clone()));

        self.counters = governor.counters;
        self.report = Some(report.clone());
        report
    }
}
