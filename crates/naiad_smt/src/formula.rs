//! Boolean formulas over integer and bit-vector terms.
//!
//! Like [`Term`], formulas fold eagerly: comparing two known terms produces a
//! `Const`, conjunction drops satisfied conjuncts and short-circuits on a
//! falsified one, and so on. Encoders therefore emit minimal constraint trees
//! without branching on operand kinds themselves.

use crate::model::{EvalError, Model};
use crate::term::Term;

/// A boolean formula: a known truth value or a symbolic proposition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Formula {
    /// A known truth value.
    Const(bool),
    /// A declared boolean solver variable, referenced by name.
    BoolVar(String),
    /// Equality of two terms.
    Eq(Term, Term),
    /// Non-strict order `lhs ≤ rhs`.
    Le(Term, Term),
    /// Strict order `lhs < rhs`.
    Lt(Term, Term),
    /// Negation.
    Not(Box<Formula>),
    /// Conjunction of all inner formulas.
    And(Vec<Formula>),
    /// Disjunction of the inner formulas.
    Or(Vec<Formula>),
    /// Implication `premise → conclusion`.
    Implies(Box<Formula>, Box<Formula>),
}

impl Formula {
    /// Creates a boolean variable formula.
    pub fn bool_var(name: impl Into<String>) -> Self {
        Formula::BoolVar(name.into())
    }

    /// Equality, folded when both operands are known.
    pub fn eq(a: Term, b: Term) -> Formula {
        match (a.as_known(), b.as_known()) {
            (Some(x), Some(y)) => Formula::Const(x == y),
            _ => Formula::Eq(a, b),
        }
    }

    /// `a ≤ b`, folded when both operands are known.
    pub fn le(a: Term, b: Term) -> Formula {
        match (a.as_known(), b.as_known()) {
            (Some(x), Some(y)) => Formula::Const(x <= y),
            _ => Formula::Le(a, b),
        }
    }

    /// `a < b`, folded when both operands are known.
    pub fn lt(a: Term, b: Term) -> Formula {
        match (a.as_known(), b.as_known()) {
            (Some(x), Some(y)) => Formula::Const(x < y),
            _ => Formula::Lt(a, b),
        }
    }

    /// `a ≥ b`.
    pub fn ge(a: Term, b: Term) -> Formula {
        Formula::le(b, a)
    }

    /// `a > b`.
    pub fn gt(a: Term, b: Term) -> Formula {
        Formula::lt(b, a)
    }

    /// Negation, folded on constants and double negation.
    pub fn not(f: Formula) -> Formula {
        match f {
            Formula::Const(v) => Formula::Const(!v),
            Formula::Not(inner) => *inner,
            f => Formula::Not(Box::new(f)),
        }
    }

    /// Conjunction. Satisfied conjuncts are dropped, a falsified conjunct
    /// short-circuits, an empty conjunction is `true`, and a singleton unwraps.
    pub fn and(formulas: Vec<Formula>) -> Formula {
        let mut kept = Vec::with_capacity(formulas.len());
        for f in formulas {
            match f {
                Formula::Const(true) => {}
                Formula::Const(false) => return Formula::Const(false),
                f => kept.push(f),
            }
        }
        match kept.len() {
            0 => Formula::Const(true),
            1 => kept.pop().expect("len checked"),
            _ => Formula::And(kept),
        }
    }

    /// Disjunction, dual folding to [`Formula::and`].
    pub fn or(formulas: Vec<Formula>) -> Formula {
        let mut kept = Vec::with_capacity(formulas.len());
        for f in formulas {
            match f {
                Formula::Const(false) => {}
                Formula::Const(true) => return Formula::Const(true),
                f => kept.push(f),
            }
        }
        match kept.len() {
            0 => Formula::Const(false),
            1 => kept.pop().expect("len checked"),
            _ => Formula::Or(kept),
        }
    }

    /// Implication, folded on constant premise or conclusion.
    pub fn implies(premise: Formula, conclusion: Formula) -> Formula {
        match (premise, conclusion) {
            (Formula::Const(false), _) => Formula::Const(true),
            (_, Formula::Const(true)) => Formula::Const(true),
            (Formula::Const(true), c) => c,
            (p, Formula::Const(false)) => Formula::not(p),
            (p, c) => Formula::Implies(Box::new(p), Box::new(c)),
        }
    }

    /// Returns the truth value if this formula is `Const`.
    pub fn as_const(&self) -> Option<bool> {
        match self {
            Formula::Const(v) => Some(*v),
            _ => None,
        }
    }

    /// Evaluates this formula under a satisfying assignment.
    pub fn eval(&self, model: &Model) -> Result<bool, EvalError> {
        match self {
            Formula::Const(v) => Ok(*v),
            Formula::BoolVar(name) => model.boolean(name),
            Formula::Eq(a, b) => Ok(a.eval(model)? == b.eval(model)?),
            Formula::Le(a, b) => Ok(a.eval(model)? <= b.eval(model)?),
            Formula::Lt(a, b) => Ok(a.eval(model)? < b.eval(model)?),
            Formula::Not(f) => Ok(!f.eval(model)?),
            Formula::And(fs) => {
                for f in fs {
                    if !f.eval(model)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            Formula::Or(fs) => {
                for f in fs {
                    if f.eval(model)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            }
            Formula::Implies(p, c) => Ok(!p.eval(model)? || c.eval(model)?),
        }
    }
}
