//! Placeable rectangular functional blocks with a connector port grid.

use crate::context::EncodeCtx;
use crate::ids::ModuleId;
use naiad_geom::Rect;
use naiad_smt::{BoundedEnum, Constraint, EvalError, Formula, Model, SolverEnum, Term};
use serde::{Deserialize, Serialize};

/// One of the four cardinal rotations of a module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    /// 0°.
    Up,
    /// 90° clockwise.
    Right,
    /// 180°.
    Down,
    /// 270° clockwise.
    Left,
}

impl SolverEnum for Orientation {
    const ALL: &'static [Self] = &[
        Orientation::Up,
        Orientation::Right,
        Orientation::Down,
        Orientation::Left,
    ];

    fn index(self) -> u32 {
        match self {
            Orientation::Up => 0,
            Orientation::Right => 1,
            Orientation::Down => 2,
            Orientation::Left => 3,
        }
    }
}

/// Which face of the chip an entity occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Placement {
    /// The front face.
    Top,
    /// The back face.
    Bottom,
}

impl SolverEnum for Placement {
    const ALL: &'static [Self] = &[Placement::Top, Placement::Bottom];

    fn index(self) -> u32 {
        match self {
            Placement::Top => 0,
            Placement::Bottom => 1,
        }
    }
}

/// Formula: the two placements select the same chip face.
///
/// Folds to a constant when both sides are fixed, so encoders can use it
/// both as a pair filter and as an implication premise.
pub fn same_face(a: &BoundedEnum<Placement>, b: &BoundedEnum<Placement>) -> Formula {
    Formula::or(
        Placement::ALL
            .iter()
            .map(|side| Formula::and(vec![a.equals(*side), b.equals(*side)]))
            .collect(),
    )
}

/// The connector port grid derived from a module's width, height, and pitch.
///
/// Ports sit on an interior grid: `dimension/pitch − 1` ports per axis,
/// centered with integer truncation. The odd flags record a one-unit
/// centering remainder, which shifts mirrored port positions under rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortGrid {
    /// Ports along the unrotated width.
    pub ports_x: u32,
    /// Ports along the unrotated height.
    pub ports_y: u32,
    /// Centering offset along the width.
    pub offset_x: i64,
    /// Centering offset along the height.
    pub offset_y: i64,
    /// Whether the width remainder is odd (offset truncated).
    pub odd_x: bool,
    /// Whether the height remainder is odd.
    pub odd_y: bool,
}

impl PortGrid {
    /// Derives the grid for the given unrotated extent and pitch.
    ///
    /// Pitch must be positive; the encode pipeline rejects other values
    /// before this is reached.
    pub fn derive(width: i64, height: i64, pitch: i64) -> Self {
        assert!(pitch > 0, "port grid requires positive pitch");
        let (ports_x, offset_x, odd_x) = Self::axis(width, pitch);
        let (ports_y, offset_y, odd_y) = Self::axis(height, pitch);
        Self {
            ports_x,
            ports_y,
            offset_x,
            offset_y,
            odd_x,
            odd_y,
        }
    }

    fn axis(dim: i64, pitch: i64) -> (u32, i64, bool) {
        let ports = (dim / pitch - 1).max(0);
        if ports == 0 {
            return (0, 0, false);
        }
        let remainder = dim - (ports - 1) * pitch;
        (ports as u32, remainder / 2, remainder % 2 == 1)
    }
}

/// A module as specified by the design input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleSpec {
    /// Unrotated extent along x.
    pub width: i64,
    /// Unrotated extent along y.
    pub height: i64,
    /// Connector port pitch.
    pub pitch: i64,
    /// Minimum clearance to other modules and the chip boundary.
    pub spacing: i64,
    /// Fixed position of the lower-left corner, if any.
    pub position: Option<(i64, i64)>,
    /// Fixed rotation, if any.
    pub orientation: Option<Orientation>,
    /// Fixed chip face, if any.
    pub placement: Option<Placement>,
    /// Number of fixation pins to generate for this module.
    pub pin_count: u32,
}

impl ModuleSpec {
    /// The derived port grid.
    pub fn grid(&self) -> PortGrid {
        PortGrid::derive(self.width, self.height, self.pitch)
    }
}

/// The port's position in the module's local frame after rotation, given the
/// rotated module's lower-left corner as origin.
///
/// All inputs are concrete, so this single function serves both the encoding
/// path (as the constant part of a position term) and the result path; the
/// two agree by construction. Mirrored axes read ports in reverse index
/// order, shifted by one when the centering remainder is odd.
fn local_port(
    grid: &PortGrid,
    pitch: i64,
    orientation: Orientation,
    port_x: u32,
    port_y: u32,
) -> (i64, i64) {
    let u = grid.offset_x + port_x as i64 * pitch;
    let v = grid.offset_y + port_y as i64 * pitch;
    // A mirrored axis reads ports in reverse index order; an odd centering
    // remainder shifts the mirrored grid by one unit.
    let u_rev = grid.offset_x
        + (grid.ports_x as i64 - 1 - port_x as i64) * pitch
        + i64::from(grid.odd_x);
    let v_rev = grid.offset_y
        + (grid.ports_y as i64 - 1 - port_y as i64) * pitch
        + i64::from(grid.odd_y);
    match orientation {
        Orientation::Up => (u, v),
        Orientation::Right => (v, u_rev),
        Orientation::Down => (u_rev, v_rev),
        Orientation::Left => (v_rev, u),
    }
}

fn span(width: i64, height: i64, orientation: Orientation) -> (i64, i64) {
    match orientation {
        Orientation::Up | Orientation::Down => (width, height),
        Orientation::Right | Orientation::Left => (height, width),
    }
}

/// A module's symbolic form: position terms plus bounded orientation and
/// placement attributes.
#[derive(Debug, Clone)]
pub struct EncodedModule {
    /// The module id (variable names embed it).
    pub id: ModuleId,
    /// Unrotated extent along x.
    pub width: i64,
    /// Unrotated extent along y.
    pub height: i64,
    /// Connector port pitch.
    pub pitch: i64,
    /// Minimum clearance.
    pub spacing: i64,
    /// The derived port grid.
    pub grid: PortGrid,
    /// Lower-left corner x.
    pub x: Term,
    /// Lower-left corner y.
    pub y: Term,
    /// The rotation attribute.
    pub orientation: BoundedEnum<Orientation>,
    /// The chip-face attribute.
    pub placement: BoundedEnum<Placement>,
}

impl EncodedModule {
    /// Encodes a module specification: fixed attributes become constants,
    /// open ones become declared variables with their domain clauses.
    pub fn encode(
        id: ModuleId,
        spec: &ModuleSpec,
        ctx: &mut EncodeCtx<'_>,
    ) -> (Self, Vec<Constraint>) {
        let mut clauses = Vec::new();
        let (x, y) = match spec.position {
            Some((px, py)) => (Term::Known(px), Term::Known(py)),
            None => (
                ctx.decls.int_var(format!("m{id}_x")),
                ctx.decls.int_var(format!("m{id}_y")),
            ),
        };
        let orientation = match spec.orientation {
            Some(o) => BoundedEnum::known(o),
            None => {
                let (var, domain) = ctx.decls.enum_var::<Orientation>(format!("m{id}_rot"));
                ctx.constrain(&mut clauses, &format!("m{id}_rot_domain"), domain);
                var
            }
        };
        let placement = match spec.placement {
            Some(side) => BoundedEnum::known(side),
            None => {
                let (var, domain) = ctx.decls.enum_var::<Placement>(format!("m{id}_side"));
                ctx.constrain(&mut clauses, &format!("m{id}_side_domain"), domain);
                var
            }
        };
        (
            Self {
                id,
                width: spec.width,
                height: spec.height,
                pitch: spec.pitch,
                spacing: spec.spacing,
                grid: spec.grid(),
                x,
                y,
                orientation,
                placement,
            },
            clauses,
        )
    }

    fn oriented(&self, pick: impl Fn(Orientation) -> i64) -> Term {
        match &self.orientation {
            BoundedEnum::Value(o) => Term::Known(pick(*o)),
            sym => {
                // Chain conditionals over the first three rotations; the
                // last is the residual branch.
                let mut term = Term::Known(pick(Orientation::Left));
                for o in [Orientation::Down, Orientation::Right, Orientation::Up] {
                    term = Term::ite(sym.equals(o), Term::Known(pick(o)), term);
                }
                term
            }
        }
    }

    /// The rotated extent along x.
    pub fn span_x(&self) -> Term {
        self.oriented(|o| span(self.width, self.height, o).0)
    }

    /// The rotated extent along y.
    pub fn span_y(&self) -> Term {
        self.oriented(|o| span(self.width, self.height, o).1)
    }

    /// The module's oriented bounding box.
    pub fn bounds(&self) -> Rect {
        Rect {
            x_lo: self.x.clone(),
            x_hi: Term::add(self.x.clone(), self.span_x()),
            y_lo: self.y.clone(),
            y_hi: Term::add(self.y.clone(), self.span_y()),
        }
    }

    /// The perimeter of the module, invariant under rotation.
    pub fn circumference(&self) -> i64 {
        2 * (self.width + self.height)
    }

    /// Whether the port index pair lies on the grid.
    pub fn port_in_grid(&self, port_x: u32, port_y: u32) -> bool {
        port_x < self.grid.ports_x && port_y < self.grid.ports_y
    }

    /// The global position of the port at the given grid index.
    ///
    /// With a fixed orientation this is a direct case; with an open one it
    /// is a conditional chain valid under all four rotations at once.
    pub fn port_position(&self, port_x: u32, port_y: u32) -> (Term, Term) {
        let local = |o| local_port(&self.grid, self.pitch, o, port_x, port_y);
        let lx = self.oriented(|o| local(o).0);
        let ly = self.oriented(|o| local(o).1);
        (
            Term::add(self.x.clone(), lx),
            Term::add(self.y.clone(), ly),
        )
    }
}

/// A module's concrete form after solving.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleResult {
    /// The module id.
    pub id: ModuleId,
    /// Lower-left corner x.
    pub x: i64,
    /// Lower-left corner y.
    pub y: i64,
    /// The selected rotation.
    pub orientation: Orientation,
    /// The selected chip face.
    pub placement: Placement,
    /// Unrotated extent along x.
    pub width: i64,
    /// Unrotated extent along y.
    pub height: i64,
    /// Connector port pitch.
    pub pitch: i64,
    /// The derived port grid.
    pub grid: PortGrid,
}

impl ModuleResult {
    /// Extracts the concrete module from a satisfying assignment.
    pub fn resolve(encoded: &EncodedModule, model: &Model) -> Result<Self, EvalError> {
        Ok(Self {
            id: encoded.id,
            x: encoded.x.eval(model)?,
            y: encoded.y.eval(model)?,
            orientation: encoded.orientation.resolve(model)?,
            placement: encoded.placement.resolve(model)?,
            width: encoded.width,
            height: encoded.height,
            pitch: encoded.pitch,
            grid: encoded.grid,
        })
    }

    /// The rotated extent.
    pub fn span(&self) -> (i64, i64) {
        span(self.width, self.height, self.orientation)
    }

    /// The global position of the port at the given grid index.
    ///
    /// Must agree exactly with the encoded [`EncodedModule::port_position`]
    /// evaluated at the same solution.
    pub fn port_position(&self, port_x: u32, port_y: u32) -> (i64, i64) {
        let (lx, ly) =
            local_port(&self.grid, self.pitch, self.orientation, port_x, port_y);
        (self.x + lx, self.y + ly)
    }
}
