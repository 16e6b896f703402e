//! Finite-domain values as constants or domain-clamped bit-vector variables.
//!
//! A rotation has 4 variants, a placement side has 2. When such an attribute
//! is fixed by the design input it is a plain value with zero solver cost;
//! when it is left open it becomes a bit-vector variable of width
//! `ceil(log2(count))`, plus a domain-restriction clause whenever the width
//! can represent more values than the domain has variants.

use crate::formula::Formula;
use crate::model::{EvalError, Model};
use crate::term::Term;

/// A finite-domain type usable as a solver-encoded enumeration.
pub trait SolverEnum: Copy + Eq + std::fmt::Debug + 'static {
    /// All variants, in index order.
    const ALL: &'static [Self];

    /// The index of this variant within [`Self::ALL`].
    fn index(self) -> u32;

    /// The variant at the given index, if in domain.
    fn from_index(index: u32) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// Number of variants.
    fn variant_count() -> u32 {
        Self::ALL.len() as u32
    }
}

/// Bit-vector width needed to represent `count` variants (at least one bit).
fn width_for(count: u32) -> u32 {
    debug_assert!(count >= 1);
    let bits = 32 - (count - 1).leading_zeros();
    bits.max(1)
}

/// A finite-domain attribute that is either known or a bounded solver unknown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoundedEnum<T: SolverEnum> {
    /// A concrete variant with no solver footprint.
    Value(T),
    /// An undetermined variant, encoded as a bit-vector variable.
    Variable {
        /// The declared variable name.
        name: String,
        /// The bit-vector width.
        width: u32,
    },
}

impl<T: SolverEnum> BoundedEnum<T> {
    /// Wraps a concrete variant. Produces no clauses.
    pub fn known(value: T) -> Self {
        BoundedEnum::Value(value)
    }

    /// Creates an unconstrained variant variable with its domain clause.
    ///
    /// The clause restricts the variable below the variant count when the
    /// chosen bit width can express more patterns than there are variants;
    /// otherwise every bit pattern is a valid variant and the clause is the
    /// tautology placeholder.
    pub fn variable(name: impl Into<String>) -> (Self, Formula) {
        let name = name.into();
        let count = T::variant_count();
        let width = width_for(count);
        let domain = if count < (1u32 << width) {
            Formula::lt(
                Term::BitVecVar(name.clone(), width),
                Term::Known(count as i64),
            )
        } else {
            Formula::Const(true)
        };
        (BoundedEnum::Variable { name, width }, domain)
    }

    /// Returns a formula comparing this attribute to the given variant.
    pub fn equals(&self, value: T) -> Formula {
        match self {
            BoundedEnum::Value(v) => Formula::Const(*v == value),
            BoundedEnum::Variable { name, width } => Formula::eq(
                Term::BitVecVar(name.clone(), *width),
                Term::Known(value.index() as i64),
            ),
        }
    }

    /// The underlying bit-vector term, if this attribute is symbolic.
    pub fn term(&self) -> Option<Term> {
        match self {
            BoundedEnum::Value(_) => None,
            BoundedEnum::Variable { name, width } => {
                Some(Term::BitVecVar(name.clone(), *width))
            }
        }
    }

    /// Resolves the concrete variant under a satisfying assignment.
    ///
    /// Identity for the known case. For the variable case the selected index
    /// is read from the model; an out-of-domain index means the domain clause
    /// was violated and is reported as an error.
    pub fn resolve(&self, model: &Model) -> Result<T, EvalError> {
        match self {
            BoundedEnum::Value(v) => Ok(*v),
            BoundedEnum::Variable { name, .. } => {
                let index = model.bitvec(name)?;
                T::from_index(index as u32).ok_or(EvalError::EnumOutOfRange {
                    name: name.clone(),
                    index,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Value;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Rotation {
        North,
        East,
        South,
        West,
    }

    impl SolverEnum for Rotation {
        const ALL: &'static [Self] =
            &[Rotation::North, Rotation::East, Rotation::South, Rotation::West];

        fn index(self) -> u32 {
            match self {
                Rotation::North => 0,
                Rotation::East => 1,
                Rotation::South => 2,
                Rotation::West => 3,
            }
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Tristate {
        A,
        B,
        C,
    }

    impl SolverEnum for Tristate {
        const ALL: &'static [Self] = &[Tristate::A, Tristate::B, Tristate::C];

        fn index(self) -> u32 {
            match self {
                Tristate::A => 0,
                Tristate::B => 1,
                Tristate::C => 2,
            }
        }
    }

    #[test]
    fn width_rounds_up() {
        assert_eq!(width_for(1), 1);
        assert_eq!(width_for(2), 1);
        assert_eq!(width_for(3), 2);
        assert_eq!(width_for(4), 2);
        assert_eq!(width_for(5), 3);
        assert_eq!(width_for(8), 3);
    }

    #[test]
    fn power_of_two_domain_is_tautology() {
        let (e, domain) = BoundedEnum::<Rotation>::variable("rot");
        assert_eq!(domain, Formula::Const(true));
        assert!(matches!(e, BoundedEnum::Variable { width: 2, .. }));
    }

    #[test]
    fn non_power_of_two_domain_is_bounded() {
        let (_, domain) = BoundedEnum::<Tristate>::variable("t");
        assert_eq!(
            domain,
            Formula::Lt(Term::BitVecVar("t".to_string(), 2), Term::Known(3))
        );
    }

    #[test]
    fn known_equals_folds() {
        let e = BoundedEnum::known(Rotation::East);
        assert_eq!(e.equals(Rotation::East), Formula::Const(true));
        assert_eq!(e.equals(Rotation::West), Formula::Const(false));
    }

    #[test]
    fn variable_equals_is_symbolic() {
        let (e, _) = BoundedEnum::<Rotation>::variable("rot");
        assert!(matches!(e.equals(Rotation::South), Formula::Eq(_, _)));
    }

    #[test]
    fn resolve_known_is_identity() {
        let e = BoundedEnum::known(Rotation::South);
        assert_eq!(e.resolve(&Model::new()).unwrap(), Rotation::South);
    }

    #[test]
    fn resolve_variable_reads_model() {
        let (e, _) = BoundedEnum::<Rotation>::variable("rot");
        let mut model = Model::new();
        model.insert("rot", Value::BitVec(1));
        assert_eq!(e.resolve(&model).unwrap(), Rotation::East);
    }

    #[test]
    fn resolve_out_of_domain_errors() {
        let (e, _) = BoundedEnum::<Tristate>::variable("t");
        let mut model = Model::new();
        model.insert("t", Value::BitVec(3));
        assert_eq!(
            e.resolve(&model),
            Err(EvalError::EnumOutOfRange {
                name: "t".to_string(),
                index: 3
            })
        );
    }
}
