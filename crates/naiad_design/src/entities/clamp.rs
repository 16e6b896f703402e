//! Per-module fixation markers.

use crate::ids::ModuleId;
use crate::units::CLAMP_BAND;
use serde::{Deserialize, Serialize};

/// A logical fixation marker for one module.
///
/// Carries no geometry of its own beyond referencing its module: it names
/// the band width within which that module's pins must sit. One clamp
/// exists per module; modules without an explicit clamp get the default
/// band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clamp {
    /// The clamped module's index in the input.
    pub module: usize,
    /// Width of the pin band along the module boundary.
    pub band: i64,
}

impl Clamp {
    /// A clamp with the default band width.
    pub fn new(module: usize) -> Self {
        Self {
            module,
            band: CLAMP_BAND,
        }
    }

    /// The owning module's id.
    pub fn module_id(&self) -> ModuleId {
        ModuleId::from_raw(self.module as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_band() {
        let clamp = Clamp::new(2);
        assert_eq!(clamp.band, CLAMP_BAND);
        assert_eq!(clamp.module_id(), ModuleId::from_raw(2));
    }
}
