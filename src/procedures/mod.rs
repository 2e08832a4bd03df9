/*!
Procedures for determining the satisfiability of a formula.

Three procedures are given, each of which takes a formula as a value:

- [elimination], which removes atoms from a formula by resolution until either no clauses or the empty clause remain.
- [backtracking], which alternates [unit propagation](propagation) with a case split on some atom, with a [parallel] variant for the first split.
- [refutation], which closes a formula under [resolution] until the empty clause is derived or nothing new can be derived.

Each procedure is run under a [governor](crate::governor), and [solve] dispatches a solve to the procedure for a [strategy](crate::config::Strategy).

The choice of atom to eliminate, or to decide on, is made through [selection].
*/

pub mod backtracking;
pub mod elimination;
pub mod parallel;
pub mod propagation;
pub mod refutation;
pub mod resolution;
pub mod selection;
pub mod solve;
