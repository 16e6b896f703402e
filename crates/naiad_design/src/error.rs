//! Error taxonomy for the design pipeline.
//!
//! Fatal input errors abort the whole encode — no partial encode is
//! salvageable. Infeasibility (`unsat`) is not an error: it is reported as a
//! structured negative [`Output`](crate::Output). An indeterminate solver
//! outcome (`unknown`/timeout) is a hard failure distinct from both.

use naiad_smt::{EvalError, SolverError};

/// A malformed or contradictory design specification.
///
/// These are caller mistakes, detected before anything is handed to the
/// solver, and never attributable to the solver itself.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EncodeError {
    /// A module has a non-positive connector pitch.
    #[error("module {module} has non-positive pitch {pitch}")]
    InvalidPitch {
        /// Module index.
        module: usize,
        /// The offending pitch.
        pitch: i64,
    },

    /// A channel endpoint references a module index that does not exist.
    #[error("channel {channel} references unknown module {module}")]
    UnknownChannelModule {
        /// Channel index.
        channel: usize,
        /// The missing module index.
        module: usize,
    },

    /// A channel endpoint's port index lies outside the module's port grid.
    #[error(
        "channel {channel} uses port ({port_x}, {port_y}) outside module {module}'s \
         {ports_x}x{ports_y} port grid"
    )]
    PortOutOfBounds {
        /// Channel index.
        channel: usize,
        /// Module index.
        module: usize,
        /// Requested port column.
        port_x: u32,
        /// Requested port row.
        port_y: u32,
        /// Available port columns.
        ports_x: u32,
        /// Available port rows.
        ports_y: u32,
    },

    /// A channel connects ports on opposite chip faces.
    #[error("channel {channel} connects modules fixed to opposite chip faces")]
    CrossFaceChannel {
        /// Channel index.
        channel: usize,
    },

    /// A pin references a module index that does not exist.
    #[error("pin {pin} references unknown module {module}")]
    UnknownPinModule {
        /// Pin index.
        pin: usize,
        /// The missing module index.
        module: usize,
    },

    /// A dynamic exclusion references a module index that does not exist.
    #[error("dynamic exclusion {exclusion} references unknown module {module}")]
    UnknownExclusionModule {
        /// Exclusion index.
        exclusion: usize,
        /// The missing module index.
        module: usize,
    },

    /// A dynamic exclusion's local rectangle does not fit inside its module.
    #[error("dynamic exclusion {exclusion} lies outside module {module}'s bounding box")]
    ExclusionOutsideModule {
        /// Exclusion index.
        exclusion: usize,
        /// Module index.
        module: usize,
    },
}

/// A failed design attempt.
#[derive(Debug, thiserror::Error)]
pub enum DesignError {
    /// The specification was rejected before solving.
    #[error(transparent)]
    Encode(#[from] EncodeError),

    /// The solver infrastructure failed (launch, I/O, protocol).
    #[error(transparent)]
    Solver(#[from] SolverError),

    /// The solver answered `unknown` (gave up or timed out). Not a verdict
    /// on feasibility.
    #[error("solver returned unknown; the design is neither proven feasible nor infeasible")]
    Indeterminate,

    /// A satisfying model could not be mapped back onto the entities.
    ///
    /// Indicates a solver/engine mismatch, not a user error.
    #[error("failed to extract results from the model: {0}")]
    Extraction(#[from] EvalError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_error_messages_name_entities() {
        let err = EncodeError::PortOutOfBounds {
            channel: 2,
            module: 1,
            port_x: 9,
            port_y: 0,
            ports_x: 4,
            ports_y: 5,
        };
        let msg = format!("{err}");
        assert!(msg.contains("channel 2"));
        assert!(msg.contains("(9, 0)"));
        assert!(msg.contains("4x5"));
    }

    #[test]
    fn design_error_wraps_encode_error() {
        let err: DesignError = EncodeError::CrossFaceChannel { channel: 0 }.into();
        assert!(matches!(err, DesignError::Encode(_)));
    }
}
