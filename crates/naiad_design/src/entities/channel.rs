//! Bounded-length polyline connectors between module ports.

use crate::context::EncodeCtx;
use crate::ids::ChannelId;
use naiad_geom::{Direction, SegmentVars};
use naiad_smt::{BoundedEnum, Constraint, EvalError, Formula, Model, Term};
use serde::{Deserialize, Serialize};

/// A reference to one port of one module, by input position and grid index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortRef {
    /// The module's index in the input.
    pub module: usize,
    /// Port column on the module's grid.
    pub port_x: u32,
    /// Port row on the module's grid.
    pub port_y: u32,
}

/// A channel as specified by the design input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelSpec {
    /// Channel width.
    pub width: i64,
    /// Minimum clearance to other channels and zones.
    pub spacing: i64,
    /// Maximum number of polyline segments.
    pub max_segments: u32,
    /// The starting port.
    pub from: PortRef,
    /// The ending port.
    pub to: PortRef,
    /// Mandatory waypoints the route must pass through, in order.
    pub fixed_waypoints: Vec<(i64, i64)>,
    /// Optional explicit routing layer. Channels on different explicit
    /// layers never constrain each other.
    pub layer: Option<u32>,
    /// Optional upper bound on total length.
    pub max_length: Option<i64>,
    /// Optional exact total length.
    pub exact_length: Option<i64>,
}

/// A channel's symbolic form: one coordinate pair per waypoint, one
/// activity flag and direction per segment, and a total-length variable.
#[derive(Debug, Clone)]
pub struct EncodedChannel {
    /// The channel id (variable names embed it).
    pub id: ChannelId,
    /// Channel width.
    pub width: i64,
    /// Minimum clearance.
    pub spacing: i64,
    /// The starting port.
    pub from: PortRef,
    /// The ending port.
    pub to: PortRef,
    /// Waypoint coordinates; `max_segments + 1` pairs.
    pub waypoints: Vec<(Term, Term)>,
    /// Per-segment activity flags.
    pub actives: Vec<Formula>,
    /// Per-segment directions.
    pub directions: Vec<BoundedEnum<Direction>>,
    /// Total length over active segments.
    pub length: Term,
    /// Mandatory waypoints, in order.
    pub fixed_waypoints: Vec<(i64, i64)>,
    /// Optional explicit routing layer.
    pub layer: Option<u32>,
    /// Optional upper bound on total length.
    pub max_length: Option<i64>,
    /// Optional exact total length.
    pub exact_length: Option<i64>,
}

impl EncodedChannel {
    /// Allocates the channel's solver variables.
    ///
    /// The direction enums have 8 variants in 3 bits, so their domain
    /// clauses are tautologies and the local clause list stays empty; the
    /// geometric meaning of every variable is pinned by the channel
    /// geometry encoder.
    pub fn encode(
        id: ChannelId,
        spec: &ChannelSpec,
        ctx: &mut EncodeCtx<'_>,
    ) -> (Self, Vec<Constraint>) {
        let mut clauses = Vec::new();
        let segments = spec.max_segments as usize;
        let mut waypoints = Vec::with_capacity(segments + 1);
        for i in 0..=segments {
            waypoints.push((
                ctx.decls.int_var(format!("c{id}_wp{i}_x")),
                ctx.decls.int_var(format!("c{id}_wp{i}_y")),
            ));
        }
        let mut actives = Vec::with_capacity(segments);
        let mut directions = Vec::with_capacity(segments);
        for i in 0..segments {
            actives.push(ctx.decls.bool_var(format!("c{id}_seg{i}_active")));
            let (dir, domain) = ctx
                .decls
                .enum_var::<Direction>(format!("c{id}_seg{i}_dir"));
            ctx.constrain(&mut clauses, &format!("c{id}_seg{i}_dir_domain"), domain);
            directions.push(dir);
        }
        let length = ctx.decls.int_var(format!("c{id}_len"));
        (
            Self {
                id,
                width: spec.width,
                spacing: spec.spacing,
                from: spec.from,
                to: spec.to,
                waypoints,
                actives,
                directions,
                length,
                fixed_waypoints: spec.fixed_waypoints.clone(),
                layer: spec.layer,
                max_length: spec.max_length,
                exact_length: spec.exact_length,
            },
            clauses,
        )
    }

    /// Number of segments.
    pub fn segment_count(&self) -> usize {
        self.actives.len()
    }

    /// The solver handles of segment `i` (waypoints `i` and `i + 1`).
    pub fn segment(&self, i: usize) -> SegmentVars {
        SegmentVars {
            x1: self.waypoints[i].0.clone(),
            y1: self.waypoints[i].1.clone(),
            x2: self.waypoints[i + 1].0.clone(),
            y2: self.waypoints[i + 1].1.clone(),
            active: self.actives[i].clone(),
            direction: self.directions[i].clone(),
        }
    }

    /// Half the channel width, rounded up.
    pub fn half_width(&self) -> i64 {
        (self.width + 1) / 2
    }
}

/// One routed segment of a solved channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentResult {
    /// Whether the segment is in use.
    pub active: bool,
    /// The segment's direction (meaningful only when active).
    pub direction: Direction,
}

/// A channel's concrete form after solving.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelResult {
    /// The channel id.
    pub id: ChannelId,
    /// Channel width.
    pub width: i64,
    /// Minimum clearance.
    pub spacing: i64,
    /// Concrete waypoint coordinates.
    pub waypoints: Vec<(i64, i64)>,
    /// Concrete segment states.
    pub segments: Vec<SegmentResult>,
    /// The channel's explicit routing layer, if one was specified.
    pub layer: Option<u32>,
    /// Total routed length.
    pub length: i64,
}

impl ChannelResult {
    /// Extracts the concrete channel from a satisfying assignment.
    pub fn resolve(encoded: &EncodedChannel, model: &Model) -> Result<Self, EvalError> {
        let mut waypoints = Vec::with_capacity(encoded.waypoints.len());
        for (x, y) in &encoded.waypoints {
            waypoints.push((x.eval(model)?, y.eval(model)?));
        }
        let mut segments = Vec::with_capacity(encoded.segment_count());
        for i in 0..encoded.segment_count() {
            segments.push(SegmentResult {
                active: encoded.actives[i].eval(model)?,
                direction: encoded.directions[i].resolve(model)?,
            });
        }
        Ok(Self {
            id: encoded.id,
            width: encoded.width,
            spacing: encoded.spacing,
            waypoints,
            segments,
            layer: encoded.layer,
            length: encoded.length.eval(model)?,
        })
    }
}
