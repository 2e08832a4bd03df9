//! A library for deciding the satisfiability of boolean formulas written in conjunctive normal form.
//!
//! triad_sat gathers three classical procedures over a single representation of formulas:
//! - [Elimination](crate::procedures::elimination), the procedure of Davis and Putnam, which removes one atom at a time by resolving every clause containing the atom against every other.
//! - [Backtracking](crate::procedures::backtracking), the procedure of Davis, Putnam, Logemann, and Loveland, which alternates unit propagation with a case split on some atom.
//! - [Refutation](crate::procedures::refutation), which closes a formula under resolution until the empty clause is derived or nothing new can be derived.
//!
//! The procedures are (deliberately) naive, and are intended for study and comparison rather than for competitive use.
//! In particular, elimination and refutation may generate exponentially many clauses, and backtracking does no learning.
//!
//! # Orientation
//!
//! The library is designed around a [context].
//!
//! A context is built from a [configuration](crate::config) and holds a [formula](crate::structures::formula).
//! Clauses may be added through a [DIMACS](crate::context::GenericContext::read_dimacs) representation of a formula or [programatically](crate::context::GenericContext::add_clause).
//!
//! A solve is made with respect to some [strategy](crate::config::Strategy), and every solve is overseen by a [governor] which enforces the time limit, depth limit, and clause limit of the configuration.
//! As a consequence, the result of a solve is one of three things (see [reports]):
//! - Satisfiable, with a witness when the strategy is able to produce one.
//! - Unsatisfiable.
//! - Inconclusive, together with the reason no decision was made.
//!
//! A bound being reached is never reported as unsatisfiable.
//!
//! # Examples
//!
//! ```rust
//! # use triad_sat::config::{Config, Strategy};
//! # use triad_sat::context::Context;
//! # use triad_sat::reports::Report;
//! let mut the_context = Context::from_config(Config::default());
//!
//! assert!(the_context.add_clause([1, 2]).is_ok());
//! assert!(the_context.add_clause([-1, -2]).is_ok());
//!
//! let report = the_context.solve(Strategy::Backtracking);
//! assert!(matches!(report, Report::Satisfiable(Some(_))));
//!
//! let report = the_context.solve(Strategy::Elimination);
//! assert!(matches!(report, Report::Satisfiable(None)));
//! ```
//!
//! + Parse and solve a DIMACS formula.
//!
//! ```rust
//! # use triad_sat::config::{Config, Strategy};
//! # use triad_sat::context::Context;
//! # use triad_sat::reports::Report;
//! let mut the_context = Context::from_config(Config::default());
//!
//! let dimacs = b"
//!  1  2 0
//! -1  2 0
//! -1 -2 0
//!  1 -2 0
//! ";
//!
//! assert!(the_context.read_dimacs(dimacs.as_slice()).is_ok());
//! assert_eq!(the_context.solve(Strategy::Refutation), Report::Unsatisfiable);
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made throughout the library, each with a target listed in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - Logs related to unit propagation can be filtered with `RUST_LOG=propagation …` or,
//! - Logs of each round of refutation, without details on each pair of clauses, can be found with `RUST_LOG=refutation=debug …`

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]

pub mod builder;
pub mod config;
pub mod context;
pub mod dispatch;
pub mod governor;
pub mod misc;
pub mod procedures;
pub mod reports;
pub mod structures;
pub mod types;
