//! Key structures, such as literals and clauses.
//!
//! # Formulas
//!
//! A formula 𝐅 is a set of [clauses](clause), interpreted as the conjunction of those clauses (and so is the conjunction of disjunctions over literals in some language).
//!
//! Each procedure in the library takes a [formula](formula::Formula) as a value, and produces a new formula from it rather than revising the formula in place.
//!
//! # Valuations
//!
//! A valuation is a set of literals, each of which is taken to be true.
//! No valuation contains a literal together with its negation, and so a valuation is a (partial) function from atoms to (boolean) values.

pub mod atom;
pub mod clause;
pub mod formula;
pub mod literal;
pub mod valuation;
