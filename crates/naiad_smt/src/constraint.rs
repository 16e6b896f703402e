//! Labeled constraint clauses and variable declarations.
//!
//! Every clause handed to the solver carries a label so that downstream
//! diagnostics (unsatisfiable-core reporting) can name the violated rule.
//! Labels are generated deterministically from a structured prefix plus a
//! monotonic ordinal, which keeps repeated encodes of the same input
//! structurally identical.

use crate::bounded_enum::{BoundedEnum, SolverEnum};
use crate::formula::Formula;
use crate::term::Term;
use std::collections::HashSet;

/// A labeled boolean clause contributed to the solver's input set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraint {
    /// The clause.
    pub formula: Formula,
    /// A unique diagnostic label.
    pub label: String,
}

impl Constraint {
    /// Creates a labeled constraint.
    pub fn new(formula: Formula, label: impl Into<String>) -> Self {
        Self {
            formula,
            label: label.into(),
        }
    }
}

/// Deterministic label generator: structured prefix plus monotonic ordinal.
#[derive(Debug, Default)]
pub struct LabelGen {
    next: u64,
}

impl LabelGen {
    /// Creates a generator starting at ordinal zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `<base>_<ordinal>` and advances the ordinal.
    pub fn label(&mut self, base: &str) -> String {
        let label = format!("{base}_{}", self.next);
        self.next += 1;
        label
    }
}

/// The sort of a declared solver variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sort {
    /// Mathematical integer.
    Int,
    /// Boolean.
    Bool,
    /// Fixed-width bit-vector.
    BitVec(u32),
}

/// A declared solver variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarDecl {
    /// The variable name (embeds the owning entity's id and role).
    pub name: String,
    /// The variable sort.
    pub sort: Sort,
}

/// The declaration registry filled during an encode pass.
///
/// Variable names are derived from entity ids and roles, so a duplicate
/// declaration means two entities produced the same name — a bug in the
/// encoder, reported by panicking.
#[derive(Debug, Default)]
pub struct Declarations {
    decls: Vec<VarDecl>,
    seen: HashSet<String>,
}

impl Declarations {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares an integer variable and returns its term.
    pub fn int_var(&mut self, name: impl Into<String>) -> Term {
        let name = name.into();
        self.declare(VarDecl {
            name: name.clone(),
            sort: Sort::Int,
        });
        Term::IntVar(name)
    }

    /// Declares a boolean variable and returns its formula.
    pub fn bool_var(&mut self, name: impl Into<String>) -> Formula {
        let name = name.into();
        self.declare(VarDecl {
            name: name.clone(),
            sort: Sort::Bool,
        });
        Formula::BoolVar(name)
    }

    /// Declares a bounded-enum variable and returns it with its domain clause.
    pub fn enum_var<T: SolverEnum>(
        &mut self,
        name: impl Into<String>,
    ) -> (BoundedEnum<T>, Formula) {
        let (var, domain) = BoundedEnum::<T>::variable(name);
        if let BoundedEnum::Variable { name, width } = &var {
            self.declare(VarDecl {
                name: name.clone(),
                sort: Sort::BitVec(*width),
            });
        }
        (var, domain)
    }

    /// Registers a declaration, panicking on a duplicate name.
    pub fn declare(&mut self, decl: VarDecl) {
        if !self.seen.insert(decl.name.clone()) {
            panic!("duplicate variable declaration: {}", decl.name);
        }
        self.decls.push(decl);
    }

    /// The declarations in registration order.
    pub fn as_slice(&self) -> &[VarDecl] {
        &self.decls
    }

    /// Consumes the registry, returning the declarations.
    pub fn into_vec(self) -> Vec<VarDecl> {
        self.decls
    }
}
