//! Methods for adding clauses to a context.
//!
//! Clauses may be added one at a time, through [add_clause](GenericContext::add_clause), or read from a DIMACS representation of a formula, through [read_dimacs](GenericContext::read_dimacs).
//!
//! ```rust
//! # use triad_sat::builder::ClauseOk;
//! # use triad_sat::config::Config;
//! # use triad_sat::context::Context;
//! let mut the_context = Context::from_config(Config::default());
//!
//! assert_eq!(the_context.add_clause([1, -2]), Ok(ClauseOk::Added));
//! assert_eq!(the_context.add_clause([-2, 1, 1]), Ok(ClauseOk::Duplicate));
//! assert_eq!(the_context.add_clause([3, -3]), Ok(ClauseOk::Tautology));
//! assert!(the_context.add_clause([3, 0]).is_err());
//!
//! assert_eq!(the_context.formula().len(), 1);
//! ```

mod dimacs;
pub use dimacs::DimacsCounts;

use crate::{
    context::GenericContext,
    structures::{clause::CClause, literal::CLiteral},
    types::err::{self},
};

/// Ok results when adding a clause to a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseOk {
    /// The clause was added to the formula of the context.
    Added,

    /// The clause is already part of the formula of the context.
    Duplicate,

    /// The clause is a tautology, and was skipped.
    Tautology,
}

impl<R: rand::Rng> GenericContext<R> {
    /// Adds a clause to the formula of the context.
    ///
    /// A clause containing `0` is refused with an error, and the formula is unchanged.
    pub fn add_clause(
        &mut self,
        clause: impl IntoIterator<Item = CLiteral>,
    ) -> Result<ClauseOk, err::ErrorKind> {
        let clause = CClause::new(clause)?;
        self.add_cclause(clause)
    }

    /// Adds a clause, already in canonical form, to the formula of the context.
    pub fn add_cclause(&mut self, clause: CClause) -> Result<ClauseOk, err::ErrorKind> {
        if clause.is_tautology() {
            return Ok(ClauseOk::Tautology);
        }

        self.report = None;
        match self.formula.insert(clause) {
            true => Ok(ClauseOk::Added),
            false => Ok(ClauseOk::Duplicate),
        }
    }
}
