//! Routing exclusion zones: rectangles channels and pins must avoid.

use crate::entities::module::{EncodedModule, Orientation};
use crate::error::EncodeError;
use crate::ids::{ExclusionId, ModuleId};
use naiad_geom::Rect;
use naiad_smt::{BoundedEnum, EvalError, Model, Term};
use serde::{Deserialize, Serialize};

/// A fixed exclusion rectangle, given directly in chip coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticExclusionSpec {
    /// Lower-left x.
    pub x: i64,
    /// Lower-left y.
    pub y: i64,
    /// Extent along x.
    pub width: i64,
    /// Extent along y.
    pub height: i64,
}

/// An exclusion rectangle in a module's local (unrotated) frame, rotating
/// with the module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DynamicExclusionSpec {
    /// The owning module's index in the input.
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

/// How an encoded exclusion came to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExclusionKind {
    /// Fixed on the chip.
    Static,
    /// Relative to (and rotating with) the given module.
    Dynamic(ModuleId),
}

/// An exclusion's symbolic form: a rectangle whose corners are terms
/// (constants for static zones, orientation-dependent conditionals for
/// dynamic ones).
#[derive(Debug, Clone)]
pub struct EncodedExclusion {
    /// The exclusion id.
    pub id: ExclusionId,
    /// Static or module-relative.
    pub kind: ExclusionKind,
    /// The zone rectangle in chip coordinates.
    pub rect: Rect,
}

impl EncodedExclusion {
    /// Encodes a static zone: all four corners are constants.
    pub fn encode_static(id: ExclusionId, spec: &StaticExclusionSpec) -> Self {
        Self {
            id,
            kind: ExclusionKind::Static,
            rect: Rect::from_origin(
                Term::Known(spec.x),
                Term::Known(spec.y),
                spec.width,
                spec.height,
            ),
        }
    }

    /// Encodes a module-relative zone.
    ///
    /// Validates that the local rectangle fits inside the owning module's
    /// unrotated bounding box (a fatal input error otherwise), then resolves
    /// the chip-coordinate corners through the module's orientation: a
    /// direct case when the orientation is fixed, a conditional chain over
    /// the four rotations when it is open.
    pub fn encode_dynamic(
        id: ExclusionId,
        index: usize,
        spec: &DynamicExclusionSpec,
        module: &EncodedModule,
    ) -> Result<Self, EncodeError> {
        if spec.x < 0
            || spec.y < 0
            || spec.width <= 0
            || spec.height <= 0
            || spec.x + spec.width > module.width
            || spec.y + spec.height > module.height
        {
            return Err(EncodeError::ExclusionOutsideModule {
                exclusion: index,
                module: spec.module,
            });
        }

        // Local corner ranges after each rotation, in the rotated module's
        // frame. All concrete; only the module position is a term.
        let corners = |o: Orientation| -> (i64, i64, i64, i64) {
            let (w, h) = (module.width, module.height);
            let (lx, ly, hx, hy) = (spec.x, spec.y, spec.x + spec.width, spec.y + spec.height);
            match o {
                Orientation::Up => (lx, hx, ly, hy),
                Orientation::Right => (ly, hy, w - hx, w - lx),
                Orientation::Down => (w - hx, w - lx, h - hy, h - ly),
                Orientation::Left => (h - hy, h - ly, lx, hx),
            }
        };
        let oriented = |pick: &dyn Fn(Orientation) -> i64| -> Term {
            match &module.orientation {
                BoundedEnum::Value(o) => Term::Known(pick(*o)),
                sym => {
                    let mut term = Term::Known(pick(Orientation::Left));
                    for o in [Orientation::Down, Orientation::Right, Orientation::Up] {
                        term = Term::ite(sym.equals(o), Term::Known(pick(o)), term);
                    }
                    term
                }
            }
        };
        let rect = Rect {
            x_lo: Term::add(module.x.clone(), oriented(&|o| corners(o).0)),
            x_hi: Term::add(module.x.clone(), oriented(&|o| corners(o).1)),
            y_lo: Term::add(module.y.clone(), oriented(&|o| corners(o).2)),
            y_hi: Term::add(module.y.clone(), oriented(&|o| corners(o).3)),
        };
        Ok(Self {
            id,
            kind: ExclusionKind::Dynamic(module.id),
            rect,
        })
    }
}

/// An exclusion's concrete rectangle after solving (dynamic zones resolved
/// through their module's placement and rotation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExclusionResult {
    /// The exclusion id.
    pub id: ExclusionId,
    /// Static or module-relative.
    pub kind: ExclusionKind,
    /// Lower-left x.
    pub x: i64,
    /// Lower-left y.
    pub y: i64,
    /// Extent along x.
    pub width: i64,
    /// Extent along y.
    pub height: i64,
}

impl ExclusionResult {
    /// Extracts the concrete zone from a satisfying assignment.
    pub fn resolve(encoded: &EncodedExclusion, model: &Model) -> Result<Self, EvalError> {
        let x_lo = encoded.rect.x_lo.eval(model)?;
        let x_hi = encoded.rect.x_hi.eval(model)?;
        let y_lo = encoded.rect.y_lo.eval(model)?;
        let y_hi = encoded.rect.y_hi.eval(model)?;
        Ok(Self {
            id: encoded.id,
            kind: encoded.kind,
            x: x_lo,
            y: y_lo,
            width: x_hi - x_lo,
            height: y_hi - y_lo,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::EncodeCtx;
    use crate::entities::module::{ModuleSpec, Placement};
    use crate::entities::Chip;

    fn module(orientation: Option<Orientation>, ctx: &mut EncodeCtx<'_>) -> EncodedModule {
        let spec = ModuleSpec {
            width: 30_000,
            height: 15_000,
            pitch: 1_500,
            spacing: 1_000,
            position: Some((1_000, 2_000)),
            orientation,
            placement: Some(Placement::Top),
            pin_count: 3,
        };
        EncodedModule::encode(ModuleId::from_raw(0), &spec, ctx).0
    }

    #[test]
    fn static_zone_is_constant() {
        let e = EncodedExclusion::encode_static(
            ExclusionId::from_raw(0),
            &StaticExclusionSpec {
                x: 10,
                y: 20,
                width: 100,
                height: 200,
            },
        );
        assert_eq!(e.rect.x_hi, Term::Known(110));
        assert_eq!(e.rect.y_hi, Term::Known(220));
        let r = ExclusionResult::resolve(&e, &Model::new()).unwrap();
        assert_eq!((r.x, r.y, r.width, r.height), (10, 20, 100, 200));
    }

    #[test]
    fn dynamic_zone_must_fit_module() {
        let chip = Chip::centered(76_000, 25_000);
        let mut ctx = EncodeCtx::new(&chip, false);
        let m = module(Some(Orientation::Up), &mut ctx);
        let bad = DynamicExclusionSpec {
            module: 0,
            x: 25_000,
            y: 0,
            width: 10_000,
            height: 5_000,
        };
        let err = EncodedExclusion::encode_dynamic(ExclusionId::from_raw(0), 0, &bad, &m);
        assert_eq!(
            err.unwrap_err(),
            EncodeError::ExclusionOutsideModule {
                exclusion: 0,
                module: 0
            }
        );
    }

    #[test]
    fn dynamic_zone_rotates_with_module() {
        let chip = Chip::centered(76_000, 25_000);
        let spec = DynamicExclusionSpec {
            module: 0,
            x: 2_000,
            y: 3_000,
            width: 4_000,
            height: 5_000,
        };

        // Up: zone sits at the module position plus the local offset.
        let mut ctx = EncodeCtx::new(&chip, false);
        let m = module(Some(Orientation::Up), &mut ctx);
        let e = EncodedExclusion::encode_dynamic(ExclusionId::from_raw(0), 0, &spec, &m)
            .unwrap();
        let r = ExclusionResult::resolve(&e, &Model::new()).unwrap();
        assert_eq!((r.x, r.y, r.width, r.height), (3_000, 5_000, 4_000, 5_000));

        // Right (90° clockwise): local x maps to −y, extents swap.
        let mut ctx = EncodeCtx::new(&chip, false);
        let m = module(Some(Orientation::Right), &mut ctx);
        let e = EncodedExclusion::encode_dynamic(ExclusionId::from_raw(0), 0, &spec, &m)
            .unwrap();
        let r = ExclusionResult::resolve(&e, &Model::new()).unwrap();
        // x' ∈ [ly, hy] = [3000, 8000]; y' ∈ [w − hx, w − lx] = [24000, 28000].
        assert_eq!((r.x, r.y), (1_000 + 3_000, 2_000 + 24_000));
        assert_eq!((r.width, r.height), (5_000, 4_000));

        // Down: both axes mirror.
        let mut ctx = EncodeCtx::new(&chip, false);
        let m = module(Some(Orientation::Down), &mut ctx);
        let e = EncodedExclusion::encode_dynamic(ExclusionId::from_raw(0), 0, &spec, &m)
            .unwrap();
        let r = ExclusionResult::resolve(&e, &Model::new()).unwrap();
        assert_eq!((r.x, r.y), (1_000 + 24_000, 2_000 + 7_000));
        assert_eq!((r.width, r.height), (4_000, 5_000));
    }

    #[test]
    fn open_orientation_builds_conditionals() {
        let chip = Chip::centered(76_000, 25_000);
        let mut ctx = EncodeCtx::new(&chip, false);
        let spec_m = ModuleSpec {
            width: 30_000,
            height: 15_000,
            pitch: 1_500,
            spacing: 1_000,
            position: Some((0, 0)),
            orientation: None,
            placement: Some(Placement::Top),
            pin_count: 3,
        };
        let m = EncodedModule::encode(ModuleId::from_raw(0), &spec_m, &mut ctx).0;
        let spec = DynamicExclusionSpec {
            module: 0,
            x: 0,
            y: 0,
            width: 1_000,
            height: 1_000,
        };
        let e = EncodedExclusion::encode_dynamic(ExclusionId::from_raw(0), 0, &spec, &m)
            .unwrap();
        assert!(matches!(e.rect.x_lo, Term::Ite(_, _, _)));
    }
}
