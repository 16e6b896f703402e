//! The aggregate root and the encode pipeline.

use crate::context::EncodeCtx;
use crate::encoders;
use crate::entities::{
    ChannelSpec, Chip, Clamp, DynamicExclusionSpec, EncodedChannel, EncodedExclusion,
    EncodedModule, EncodedPin, ModuleSpec, PinSpec, StaticExclusionSpec,
};
use crate::error::EncodeError;
use crate::ids::{ChannelId, ExclusionId, ModuleId, PinId};
use naiad_common::{cross, unique_pairs};
use naiad_smt::{Constraint, VarDecl};

/// A complete design problem: the chip plus every entity to place and route.
///
/// Entity ids are the vector positions, assigned at encode time; variable
/// names embed them, so encoding the same input twice produces identical
/// declarations, clauses, and labels.
#[derive(Debug, Clone)]
pub struct Input {
    /// The chip canvas.
    pub chip: Chip,
    /// Modules to place.
    pub modules: Vec<ModuleSpec>,
    /// Channels to route.
    pub channels: Vec<ChannelSpec>,
    /// Fixation pins.
    pub pins: Vec<PinSpec>,
    /// Per-module clamp overrides; modules without one use the default band.
    pub clamps: Vec<Clamp>,
    /// Fixed exclusion zones.
    pub static_exclusions: Vec<StaticExclusionSpec>,
    /// Module-relative exclusion zones.
    pub dynamic_exclusions: Vec<DynamicExclusionSpec>,
    /// Restrict channel corners to 90° turns.
    pub soft_corners: bool,
    /// Apply the manufacturability rules.
    pub paper_constraints: bool,
}

impl Input {
    /// An empty design on the given chip.
    pub fn new(chip: Chip) -> Self {
        Self {
            chip,
            modules: Vec::new(),
            channels: Vec::new(),
            pins: Vec::new(),
            clamps: Vec::new(),
            static_exclusions: Vec::new(),
            dynamic_exclusions: Vec::new(),
            soft_corners: false,
            paper_constraints: false,
        }
    }

    /// Encodes the whole design: every entity bottom-up, then every
    /// relationship encoder over its cross-product.
    ///
    /// Fails fast on malformed input (bad references, out-of-grid ports,
    /// cross-face channels, ill-fitting dynamic exclusions); no partial
    /// encode is returned.
    pub fn encode(&self) -> Result<EncodedInput, EncodeError> {
        for (i, m) in self.modules.iter().enumerate() {
            if m.pitch <= 0 {
                return Err(EncodeError::InvalidPitch {
                    module: i,
                    pitch: m.pitch,
                });
            }
        }
        for (i, p) in self.pins.iter().enumerate() {
            if p.module >= self.modules.len() {
                return Err(EncodeError::UnknownPinModule {
                    pin: i,
                    module: p.module,
                });
            }
        }
        for (i, e) in self.dynamic_exclusions.iter().enumerate() {
            if e.module >= self.modules.len() {
                return Err(EncodeError::UnknownExclusionModule {
                    exclusion: self.static_exclusions.len() + i,
                    module: e.module,
                });
            }
        }

        let mut ctx = EncodeCtx::new(&self.chip, self.soft_corners);
        let mut constraints = Vec::new();

        let mut modules = Vec::with_capacity(self.modules.len());
        for (i, spec) in self.modules.iter().enumerate() {
            let (m, clauses) = EncodedModule::encode(ModuleId::from_raw(i as u32), spec, &mut ctx);
            constraints.extend(clauses);
            modules.push(m);
        }
        let mut channels = Vec::with_capacity(self.channels.len());
        for (i, spec) in self.channels.iter().enumerate() {
            let (c, clauses) =
                EncodedChannel::encode(ChannelId::from_raw(i as u32), spec, &mut ctx);
            constraints.extend(clauses);
            channels.push(c);
        }
        let mut pins = Vec::with_capacity(self.pins.len());
        for (i, spec) in self.pins.iter().enumerate() {
            pins.push(EncodedPin::encode(PinId::from_raw(i as u32), spec, &mut ctx));
        }
        let mut exclusions = Vec::with_capacity(
            self.static_exclusions.len() + self.dynamic_exclusions.len(),
        );
        for (i, spec) in self.static_exclusions.iter().enumerate() {
            exclusions.push(EncodedExclusion::encode_static(
                ExclusionId::from_raw(i as u32),
                spec,
            ));
        }
        for (i, spec) in self.dynamic_exclusions.iter().enumerate() {
            let index = self.static_exclusions.len() + i;
            exclusions.push(EncodedExclusion::encode_dynamic(
                ExclusionId::from_raw(index as u32),
                index,
                spec,
                &modules[spec.module],
            )?);
        }

        if self.paper_constraints {
            constraints.extend(encoders::paper::encode_chip(&mut ctx, &self.chip));
            for m in &modules {
                constraints.extend(encoders::paper::encode_module(&mut ctx, m));
            }
        }
        for m in &modules {
            constraints.extend(encoders::module_chip::encode(&mut ctx, m));
        }
        for (i, j) in unique_pairs(modules.len()) {
            constraints.extend(encoders::module_module::encode(
                &mut ctx,
                &modules[i],
                &modules[j],
            ));
        }
        for (i, c) in channels.iter().enumerate() {
            constraints.extend(encoders::channel_ports::encode(&mut ctx, i, c, &modules)?);
            constraints.extend(encoders::channel_chip::encode(&mut ctx, c));
            constraints.extend(encoders::channel_geometry::encode(&mut ctx, c));
            constraints.extend(encoders::channel_channel::encode_self(&mut ctx, c));
            constraints.extend(encoders::waypoints::encode(&mut ctx, c));
        }
        for (i, j) in unique_pairs(channels.len()) {
            constraints.extend(encoders::channel_channel::encode_pair(
                &mut ctx,
                &channels[i],
                &channels[j],
                &modules,
            ));
        }
        for (e, c) in cross(exclusions.len(), channels.len()) {
            constraints.extend(encoders::exclusions::encode_channel(
                &mut ctx,
                &exclusions[e],
                &channels[c],
            ));
        }
        for (e, p) in cross(exclusions.len(), pins.len()) {
            constraints.extend(encoders::exclusions::encode_pin(
                &mut ctx,
                &exclusions[e],
                &pins[p],
            ));
        }
        for p in &pins {
            let module = &modules[p.module.as_raw() as usize];
            let clamp = self.clamp_for(p.module.as_raw() as usize);
            constraints.extend(encoders::pins::encode_clamp(&mut ctx, p, module, &clamp));
        }
        for (i, j) in unique_pairs(pins.len()) {
            if pins[i].module == pins[j].module {
                let module = &modules[pins[i].module.as_raw() as usize];
                constraints.extend(encoders::pins::encode_pair(
                    &mut ctx,
                    &pins[i],
                    &pins[j],
                    module,
                ));
            }
        }

        Ok(EncodedInput {
            chip: self.chip.clone(),
            modules,
            channels,
            pins,
            exclusions,
            decls: ctx.decls.into_vec(),
            constraints,
        })
    }

    fn clamp_for(&self, module: usize) -> Clamp {
        self.clamps
            .iter()
            .find(|c| c.module == module)
            .copied()
            .unwrap_or_else(|| Clamp::new(module))
    }
}

/// The encoded design: all symbolic entities, every declared variable, and
/// the full accumulated clause list, ready for the solver.
#[derive(Debug)]
pub struct EncodedInput {
    /// The chip canvas.
    pub chip: Chip,
    /// Encoded modules, indexed by id.
    pub modules: Vec<EncodedModule>,
    /// Encoded channels, indexed by id.
    pub channels: Vec<EncodedChannel>,
    /// Encoded pins, indexed by id.
    pub pins: Vec<EncodedPin>,
    /// Encoded exclusions (static first, then dynamic), indexed by id.
    pub exclusions: Vec<EncodedExclusion>,
    decls: Vec<VarDecl>,
    constraints: Vec<Constraint>,
}

impl EncodedInput {
    /// Every declared solver variable, in declaration order.
    pub fn declarations(&self) -> &[VarDecl] {
        &self.decls
    }

    /// The full labeled clause list, in generation order.
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }
}
