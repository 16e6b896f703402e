//! Pin placement constraints.

use crate::context::EncodeCtx;
use crate::entities::{Clamp, EncodedModule, EncodedPin};
use naiad_geom::distance::point_point_min_distance;
use naiad_smt::{Constraint, Formula, Term};

/// The pin sits on its module's clamp: inside the oriented bounding box and
/// within the clamp band of at least one edge.
pub fn encode_clamp(
    ctx: &mut EncodeCtx<'_>,
    pin: &EncodedPin,
    module: &EncodedModule,
    clamp: &Clamp,
) -> Vec<Constraint> {
    let mut out = Vec::new();
    let bounds = module.bounds();
    let band = Term::Known(clamp.band);
    let inside = Formula::and(vec![
        Formula::ge(pin.x.clone(), bounds.x_lo.clone()),
        Formula::le(pin.x.clone(), bounds.x_hi.clone()),
        Formula::ge(pin.y.clone(), bounds.y_lo.clone()),
        Formula::le(pin.y.clone(), bounds.y_hi.clone()),
    ]);
    let near_edge = Formula::or(vec![
        Formula::le(
            Term::sub(pin.x.clone(), bounds.x_lo.clone()),
            band.clone(),
        ),
        Formula::le(
            Term::sub(bounds.x_hi.clone(), pin.x.clone()),
            band.clone(),
        ),
        Formula::le(
            Term::sub(pin.y.clone(), bounds.y_lo.clone()),
            band.clone(),
        ),
        Formula::le(Term::sub(bounds.y_hi.clone(), pin.y.clone()), band),
    ]);
    ctx.constrain(
        &mut out,
        &format!("p{}_clamp", pin.id),
        Formula::and(vec![inside, near_edge]),
    );
    out
}

/// Two pins on the same module keep their distance: the sum of their radii
/// plus one sixth of the module's circumference, so pins spread around the
/// module instead of bunching on one edge.
pub fn encode_pair(
    ctx: &mut EncodeCtx<'_>,
    a: &EncodedPin,
    b: &EncodedPin,
    module: &EncodedModule,
) -> Vec<Constraint> {
    let mut out = Vec::new();
    let d = a.radius + b.radius + (module.circumference() + 5) / 6;
    ctx.constrain(
        &mut out,
        &format!("p{}_p{}_sep", a.id, b.id),
        point_point_min_distance(&a.x, &a.y, &b.x, &b.y, d),
    );
    out
}
