//! Module-inside-chip constraints.

use crate::context::EncodeCtx;
use crate::entities::EncodedModule;
use naiad_smt::{Constraint, Formula, Term};

/// The module's oriented bounding box must lie within the chip bounds minus
/// the module's required spacing, on all four sides.
pub fn encode(ctx: &mut EncodeCtx<'_>, module: &EncodedModule) -> Vec<Constraint> {
    let mut out = Vec::new();
    let base = format!("m{}_chip", module.id);
    let d = module.spacing;
    let chip = ctx.chip;
    ctx.constrain(
        &mut out,
        &base,
        Formula::ge(module.x.clone(), Term::Known(chip.x_min() + d)),
    );
    ctx.constrain(
        &mut out,
        &base,
        Formula::le(
            Term::add(module.x.clone(), module.span_x()),
            Term::Known(chip.x_max() - d),
        ),
    );
    ctx.constrain(
        &mut out,
        &base,
        Formula::ge(module.y.clone(), Term::Known(chip.y_min() + d)),
    );
    ctx.constrain(
        &mut out,
        &base,
        Formula::le(
            Term::add(module.y.clone(), module.span_y()),
            Term::Known(chip.y_max() - d),
        ),
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Chip, ModuleSpec, Orientation, Placement};
    use crate::ids::ModuleId;

    fn fixed_module(x: i64, y: i64, orientation: Orientation) -> ModuleSpec {
        ModuleSpec {
            width: 30_000,
            height: 15_000,
            pitch: 1_500,
            spacing: 1_000,
            position: Some((x, y)),
            orientation: Some(orientation),
            placement: Some(Placement::Top),
            pin_count: 3,
        }
    }

    #[test]
    fn fitting_module_folds_away() {
        let chip = Chip::centered(76_000, 25_000);
        let mut ctx = EncodeCtx::new(&chip, false);
        let (m, _) = EncodedModule::encode(
            ModuleId::from_raw(0),
            &fixed_module(-15_000, -7_000, Orientation::Up),
            &mut ctx,
        );
        assert!(encode(&mut ctx, &m).is_empty());
    }

    #[test]
    fn spacing_violation_is_caught() {
        let chip = Chip::centered(76_000, 25_000);
        let mut ctx = EncodeCtx::new(&chip, false);
        // Flush against the left edge: inside the chip but within spacing.
        let (m, _) = EncodedModule::encode(
            ModuleId::from_raw(0),
            &fixed_module(-38_000, -7_000, Orientation::Up),
            &mut ctx,
        );
        let out = encode(&mut ctx, &m);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].formula, Formula::Const(false));
    }

    #[test]
    fn rotation_is_accounted_for() {
        let chip = Chip::centered(76_000, 25_000);
        let mut ctx = EncodeCtx::new(&chip, false);
        // Rotated 90°, the 30 000 width stands upright in a 25 000 chip.
        let (m, _) = EncodedModule::encode(
            ModuleId::from_raw(0),
            &fixed_module(0, -7_000, Orientation::Right),
            &mut ctx,
        );
        let out = encode(&mut ctx, &m);
        assert!(out.iter().any(|c| c.formula == Formula::Const(false)));
    }

    #[test]
    fn open_position_stays_symbolic() {
        let chip = Chip::centered(76_000, 25_000);
        let mut ctx = EncodeCtx::new(&chip, false);
        let spec = ModuleSpec {
            position: None,
            ..fixed_module(0, 0, Orientation::Up)
        };
        let (m, _) = EncodedModule::encode(ModuleId::from_raw(0), &spec, &mut ctx);
        let out = encode(&mut ctx, &m);
        assert_eq!(out.len(), 4);
        assert_eq!(out[0].label, "m0_chip_0");
        assert_eq!(out[3].label, "m0_chip_3");
    }
}
