//! Satisfying-assignment models and evaluation errors.

use std::collections::HashMap;

/// A concrete value assigned to a declared variable by the solver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// An integer value.
    Int(i64),
    /// A boolean value.
    Bool(bool),
    /// An unsigned bit-vector value (the selected index of a bounded enum).
    BitVec(u64),
}

/// A variable assignment mapping every declared variable to a concrete value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Model {
    values: HashMap<String, Value>,
}

impl Model {
    /// Creates an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a value for the named variable, replacing any previous one.
    pub fn insert(&mut self, name: impl Into<String>, value: Value) {
        self.values.insert(name.into(), value);
    }

    /// Returns the raw value for the named variable, if assigned.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Number of assigned variables.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the model assigns no variables.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Looks up an integer variable.
    pub fn int(&self, name: &str) -> Result<i64, EvalError> {
        match self.values.get(name) {
            Some(Value::Int(v)) => Ok(*v),
            Some(_) => Err(EvalError::SortMismatch {
                name: name.to_string(),
                expected: "Int",
            }),
            None => Err(EvalError::UnboundVariable(name.to_string())),
        }
    }

    /// Looks up a boolean variable.
    pub fn boolean(&self, name: &str) -> Result<bool, EvalError> {
        match self.values.get(name) {
            Some(Value::Bool(v)) => Ok(*v),
            Some(_) => Err(EvalError::SortMismatch {
                name: name.to_string(),
                expected: "Bool",
            }),
            None => Err(EvalError::UnboundVariable(name.to_string())),
        }
    }

    /// Looks up a bit-vector variable.
    ///
    /// Non-negative integer assignments are accepted too; some solvers print
    /// bit-vector models in decimal.
    pub fn bitvec(&self, name: &str) -> Result<u64, EvalError> {
        match self.values.get(name) {
            Some(Value::BitVec(v)) => Ok(*v),
            Some(Value::Int(v)) if *v >= 0 => Ok(*v as u64),
            Some(_) => Err(EvalError::SortMismatch {
                name: name.to_string(),
                expected: "BitVec",
            }),
            None => Err(EvalError::UnboundVariable(name.to_string())),
        }
    }
}

/// Errors raised when evaluating terms or formulas against a model.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EvalError {
    /// The model does not assign the named variable.
    #[error("variable '{0}' is not assigned by the model")]
    UnboundVariable(String),

    /// The model assigns the named variable a value of the wrong sort.
    #[error("variable '{name}' does not have sort {expected}")]
    SortMismatch {
        /// The variable name.
        name: String,
        /// The sort the evaluation expected.
        expected: &'static str,
    },

    /// A bounded-enum variable resolved to an index outside its domain.
    #[error("enum variable '{name}' resolved to out-of-domain index {index}")]
    EnumOutOfRange {
        /// The variable name.
        name: String,
        /// The out-of-domain index.
        index: u64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_lookups() {
        let mut m = Model::new();
        m.insert("x", Value::Int(-4));
        m.insert("b", Value::Bool(true));
        m.insert("e", Value::BitVec(3));
        assert_eq!(m.int("x").unwrap(), -4);
        assert!(m.boolean("b").unwrap());
        assert_eq!(m.bitvec("e").unwrap(), 3);
    }

    #[test]
    fn bitvec_accepts_decimal_int() {
        let mut m = Model::new();
        m.insert("e", Value::Int(2));
        assert_eq!(m.bitvec("e").unwrap(), 2);
    }

    #[test]
    fn sort_mismatch() {
        let mut m = Model::new();
        m.insert("x", Value::Bool(false));
        assert_eq!(
            m.int("x"),
            Err(EvalError::SortMismatch {
                name: "x".to_string(),
                expected: "Int"
            })
        );
    }

    #[test]
    fn unbound() {
        let m = Model::new();
        assert_eq!(
            m.int("nope"),
            Err(EvalError::UnboundVariable("nope".to_string()))
        );
    }
}
