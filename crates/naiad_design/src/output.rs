//! The concrete design produced by one solve attempt.

use crate::entities::{ChannelResult, Chip, ExclusionResult, ModuleResult, PinResult};
use crate::input::EncodedInput;
use naiad_smt::{EvalError, Model};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// The sole artifact of a design attempt, handed to rendering/export.
///
/// Produced once per solve and immutable thereafter. An infeasible design
/// yields `success: false` with the solve timing and no geometry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Output {
    /// Whether a feasible layout was found.
    pub success: bool,
    /// Wall-clock time of the whole attempt (encode plus solve).
    pub timing: Duration,
    /// The chip canvas.
    pub chip: Chip,
    /// Placed modules.
    pub modules: Vec<ModuleResult>,
    /// Routed channels.
    pub channels: Vec<ChannelResult>,
    /// Placed pins.
    pub pins: Vec<PinResult>,
    /// Exclusion zones, with dynamic ones resolved to chip coordinates.
    pub exclusions: Vec<ExclusionResult>,
}

impl Output {
    /// Reconstructs every entity's concrete geometry from a satisfying
    /// assignment.
    pub fn resolved(
        encoded: &EncodedInput,
        model: &Model,
        timing: Duration,
    ) -> Result<Self, EvalError> {
        let modules = encoded
            .modules
            .iter()
            .map(|m| ModuleResult::resolve(m, model))
            .collect::<Result<_, _>>()?;
        let channels = encoded
            .channels
            .iter()
            .map(|c| ChannelResult::resolve(c, model))
            .collect::<Result<_, _>>()?;
        let pins = encoded
            .pins
            .iter()
            .map(|p| PinResult::resolve(p, model))
            .collect::<Result<_, _>>()?;
        let exclusions = encoded
            .exclusions
            .iter()
            .map(|e| ExclusionResult::resolve(e, model))
            .collect::<Result<_, _>>()?;
        Ok(Self {
            success: true,
            timing,
            chip: encoded.chip.clone(),
            modules,
            channels,
            pins,
            exclusions,
        })
    }

    /// The structured negative result for a proven-infeasible design.
    pub fn infeasible(chip: Chip, timing: Duration) -> Self {
        Self {
            success: false,
            timing,
            chip,
            modules: Vec::new(),
            channels: Vec::new(),
            pins: Vec::new(),
            exclusions: Vec::new(),
        }
    }
}
