//! Design-file types deserialized from JSON.

use naiad_design::units::{DEFAULT_PIN_COUNT, DEFAULT_PIN_RADIUS};
use naiad_design::{
    ChannelSpec, Chip, DynamicExclusionSpec, Input, ModuleSpec, Orientation, PinSpec, Placement,
    PortRef, StaticExclusionSpec,
};
use serde::Deserialize;

/// The top-level design file.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DesignFile {
    /// The chip canvas.
    pub chip: ChipDef,
    /// Modules to place.
    #[serde(default)]
    pub modules: Vec<ModuleDef>,
    /// Channels to route.
    #[serde(default)]
    pub channels: Vec<ChannelDef>,
    /// Fixed exclusion zones.
    #[serde(default)]
    pub static_exclusions: Vec<StaticExclusionDef>,
    /// Module-relative exclusion zones.
    #[serde(default)]
    pub dynamic_exclusions: Vec<DynamicExclusionDef>,
    /// Restrict channel corners to 90° turns.
    #[serde(default)]
    pub soft_corners: bool,
    /// Apply the manufacturability rules.
    #[serde(default)]
    pub paper_constraints: bool,
}

/// Chip extent; the canvas is centered on the coordinate origin.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChipDef {
    /// Extent along x.
    pub width: i64,
    /// Extent along y.
    pub height: i64,
}

/// One module entry.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ModuleDef {
    /// Unrotated extent along x.
    pub width: i64,
    /// Unrotated extent along y.
    pub height: i64,
    /// Connector port pitch.
    pub pitch: i64,
    /// Minimum clearance.
    pub spacing: i64,
    /// Fixed lower-left corner, if any.
    #[serde(default)]
    pub position: Option<(i64, i64)>,
    /// Fixed rotation, if any.
    #[serde(default)]
    pub orientation: Option<OrientationDef>,
    /// Fixed chip face, if any.
    #[serde(default)]
    pub placement: Option<PlacementDef>,
    /// Number of fixation pins (default 3).
    #[serde(default)]
    pub pin_amount: Option<u32>,
}

/// One channel entry.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ChannelDef {
    /// Channel width.
    pub width: i64,
    /// Minimum clearance.
    pub spacing: i64,
    /// Maximum number of segments.
    pub max_segments: u32,
    /// Starting port.
    pub from: PortDef,
    /// Ending port.
    pub to: PortDef,
    /// Mandatory waypoints, in order.
    #[serde(default)]
    pub mandatory_waypoints: Vec<(i64, i64)>,
    /// Optional explicit routing layer.
    #[serde(default)]
    pub layer: Option<u32>,
    /// Optional upper bound on total length.
    #[serde(default)]
    pub max_length: Option<i64>,
    /// Optional exact total length.
    #[serde(default)]
    pub exact_length: Option<i64>,
}

/// A port reference: module index plus grid position.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PortDef {
    /// The module's index.
    pub module: usize,
    /// The `(column, row)` port index on the module's grid.
    pub port: (u32, u32),
}

/// A fixed exclusion rectangle.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StaticExclusionDef {
    /// Lower-left x.
    pub x: i64,
    /// Lower-left y.
    pub y: i64,
    /// Extent along x.
    pub width: i64,
    /// Extent along y.
    pub height: i64,
}

/// A module-relative exclusion rectangle.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DynamicExclusionDef {
    /// The owning module's index.
    pub module: usize,
    /// Lower-left x in the module frame.
    pub x: i64,
    /// Lower-left y in the module frame.
    pub y: i64,
    /// Extent along x in the module frame.
    pub width: i64,
    /// Extent along y in the module frame.
    pub height: i64,
}

/// Rotation names as written in design files.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrientationDef {
    /// 0°.
    Up,
    /// 90° clockwise.
    Right,
    /// 180°.
    Down,
    /// 270° clockwise.
    Left,
}

/// Face names as written in design files.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlacementDef {
    /// The front face.
    Top,
    /// The back face.
    Bottom,
}

impl From<OrientationDef> for Orientation {
    fn from(o: OrientationDef) -> Self {
        match o {
            OrientationDef::Up => Orientation::Up,
            OrientationDef::Right => Orientation::Right,
            OrientationDef::Down => Orientation::Down,
            OrientationDef::Left => Orientation::Left,
        }
    }
}

impl From<PlacementDef> for Placement {
    fn from(p: PlacementDef) -> Self {
        match p {
            PlacementDef::Top => Placement::Top,
            PlacementDef::Bottom => Placement::Bottom,
        }
    }
}

impl DesignFile {
    /// Builds the design [`Input`], applying defaults: every module gets
    /// its requested pin count (three when unspecified) of standard-radius
    /// pins.
    pub fn into_input(self) -> Input {
        let mut input = Input::new(Chip::centered(self.chip.width, self.chip.height));
        for module in &self.modules {
            input.modules.push(ModuleSpec {
                width: module.width,
                height: module.height,
                pitch: module.pitch,
                spacing: module.spacing,
                position: module.position,
                orientation: module.orientation.map(Into::into),
                placement: module.placement.map(Into::into),
                pin_count: module.pin_amount.unwrap_or(DEFAULT_PIN_COUNT),
            });
        }
        for (index, module) in self.modules.iter().enumerate() {
            let count = module.pin_amount.unwrap_or(DEFAULT_PIN_COUNT);
            for _ in 0..count {
                input.pins.push(PinSpec {
                    module: index,
                    radius: DEFAULT_PIN_RADIUS,
                });
            }
        }
        for channel in self.channels {
            input.channels.push(ChannelSpec {
                width: channel.width,
                spacing: channel.spacing,
                max_segments: channel.max_segments,
                from: PortRef {
                    module: channel.from.module,
                    port_x: channel.from.port.0,
                    port_y: channel.from.port.1,
                },
                to: PortRef {
                    module: channel.to.module,
                    port_x: channel.to.port.0,
                    port_y: channel.to.port.1,
                },
                fixed_waypoints: channel.mandatory_waypoints,
                layer: channel.layer,
                max_length: channel.max_length,
                exact_length: channel.exact_length,
            });
        }
        for e in self.static_exclusions {
            input.static_exclusions.push(StaticExclusionSpec {
                x: e.x,
                y: e.y,
                width: e.width,
                height: e.height,
            });
        }
        for e in self.dynamic_exclusions {
            input.dynamic_exclusions.push(DynamicExclusionSpec {
                module: e.module,
                x: e.x,
                y: e.y,
                width: e.width,
                height: e.height,
            });
        }
        input.soft_corners = self.soft_corners;
        input.paper_constraints = self.paper_constraints;
        input
    }
}
