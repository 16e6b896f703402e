//! Integer terms over a mixed constant/symbolic domain.
//!
//! A [`Term`] is either a plain `i64` (`Known`) or a symbolic expression over
//! solver variables. The constructor helpers fold eagerly whenever every
//! operand is known, so encoding concrete geometry produces constants instead
//! of constraint trees. All entity and encoder arithmetic must go through
//! these helpers rather than re-deriving the constant/symbolic dispatch.

use crate::formula::Formula;
use crate::model::{EvalError, Model};

/// An integer-valued term: a known constant or a symbolic expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Term {
    /// A plain known integer. Arithmetic on two `Known` terms folds immediately.
    Known(i64),
    /// A declared integer solver variable, referenced by name.
    IntVar(String),
    /// A declared bit-vector solver variable of the given width.
    ///
    /// Only produced by [`BoundedEnum`](crate::BoundedEnum); bit-vector terms
    /// never participate in arithmetic, only in comparisons.
    BitVecVar(String, u32),
    /// Sum of two terms.
    Add(Box<Term>, Box<Term>),
    /// Difference of two terms.
    Sub(Box<Term>, Box<Term>),
    /// Product of two terms.
    Mul(Box<Term>, Box<Term>),
    /// Conditional value: the first term if the formula holds, else the second.
    Ite(Box<Formula>, Box<Term>, Box<Term>),
}

impl Term {
    /// Creates an integer variable term.
    pub fn int_var(name: impl Into<String>) -> Self {
        Term::IntVar(name.into())
    }

    /// Adds two terms, folding known operands and the zero identity.
    pub fn add(a: Term, b: Term) -> Term {
        match (a, b) {
            (Term::Known(x), Term::Known(y)) => Term::Known(x + y),
            (Term::Known(0), t) | (t, Term::Known(0)) => t,
            (a, b) => Term::Add(Box::new(a), Box::new(b)),
        }
    }

    /// Subtracts `b` from `a`, folding known operands and the zero identity.
    pub fn sub(a: Term, b: Term) -> Term {
        match (a, b) {
            (Term::Known(x), Term::Known(y)) => Term::Known(x - y),
            (t, Term::Known(0)) => t,
            (a, b) => Term::Sub(Box::new(a), Box::new(b)),
        }
    }

    /// Multiplies two terms, folding known operands and the unit identities.
    pub fn mul(a: Term, b: Term) -> Term {
        match (a, b) {
            (Term::Known(x), Term::Known(y)) => Term::Known(x * y),
            (Term::Known(0), _) | (_, Term::Known(0)) => Term::Known(0),
            (Term::Known(1), t) | (t, Term::Known(1)) => t,
            (a, b) => Term::Mul(Box::new(a), Box::new(b)),
        }
    }

    /// Conditional value, folding a constant condition and identical branches.
    pub fn ite(cond: Formula, then: Term, otherwise: Term) -> Term {
        match cond {
            Formula::Const(true) => then,
            Formula::Const(false) => otherwise,
            cond => {
                if then == otherwise {
                    then
                } else {
                    Term::Ite(Box::new(cond), Box::new(then), Box::new(otherwise))
                }
            }
        }
    }

    /// Returns the constant value if this term is `Known`.
    pub fn as_known(&self) -> Option<i64> {
        match self {
            Term::Known(v) => Some(*v),
            _ => None,
        }
    }

    /// Evaluates this term under a satisfying assignment.
    pub fn eval(&self, model: &Model) -> Result<i64, EvalError> {
        match self {
            Term::Known(v) => Ok(*v),
            Term::IntVar(name) => model.int(name),
            Term::BitVecVar(name, _) => model.bitvec(name).map(|v| v as i64),
            Term::Add(a, b) => Ok(a.eval(model)? + b.eval(model)?),
            Term::Sub(a, b) => Ok(a.eval(model)? - b.eval(model)?),
            Term::Mul(a, b) => Ok(a.eval(model)? * b.eval(model)?),
            Term::Ite(cond, then, otherwise) => {
                if cond.eval(model)? {
                    then.eval(model)
                } else {
                    otherwise.eval(model)
                }
            }
        }
    }
}
