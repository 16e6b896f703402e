//! Symbolic arithmetic and the solver boundary for the Naiad engine.
//!
//! Every geometric quantity in a Naiad design is either a plain number or a
//! solver unknown. This crate provides the dual representation ([`Term`],
//! [`Formula`]) with eager constant folding, finite-domain values encoded as
//! bit-vectors ([`BoundedEnum`]), labeled constraint clauses, variable
//! declarations, satisfying-assignment models with a reference evaluator,
//! SMT-LIB 2 script emission, and the external [`Solver`] interface.

#![warn(missing_docs)]

pub mod bounded_enum;
pub mod constraint;
pub mod formula;
pub mod model;
pub mod smtlib;
pub mod solver;
pub mod term;

pub use bounded_enum::{BoundedEnum, SolverEnum};
pub use constraint::{Constraint, Declarations, LabelGen, Sort, VarDecl};
pub use formula::Formula;
pub use model::{EvalError, Model, Value};
pub use solver::{ScriptedSolver, SolveResult, Solver, SolverError, Z3Process};
pub use term::Term;

/// Sums an iterator of terms with the symbolic-safe folding adder.
///
/// An empty iterator sums to `Known(0)`. Runs of known terms fold into a
/// single constant; symbolic terms chain into `Add` nodes.
pub fn sum<I: IntoIterator<Item = Term>>(terms: I) -> Term {
    terms
        .into_iter()
        .fold(Term::Known(0), |acc, t| Term::add(acc, t))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sum_of_knowns_folds() {
        let s = sum([Term::Known(1), Term::Known(2), Term::Known(3)]);
        assert_eq!(s, Term::Known(6));
    }

    #[test]
    fn sum_empty_is_zero() {
        assert_eq!(sum([]), Term::Known(0));
    }

    #[test]
    fn sum_mixed_keeps_symbolic_tail() {
        let s = sum([Term::Known(4), Term::int_var("x")]);
        assert_eq!(
            s,
            Term::Add(Box::new(Term::Known(4)), Box::new(Term::int_var("x")))
        );
    }
}
