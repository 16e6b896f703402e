//! Pairwise module separation.

use crate::context::EncodeCtx;
use crate::entities::{same_face, EncodedModule};
use naiad_smt::{Constraint, Formula, Term};

/// Two modules that can end up on the same chip face must not overlap:
/// one lies strictly left, right, below, or above the other by the
/// blocking module's span plus the pair's clearance.
///
/// The non-overlap disjunction never forces a particular arrangement; for
/// modules fixed to opposite faces the premise folds away and the pair
/// contributes nothing.
pub fn encode(ctx: &mut EncodeCtx<'_>, a: &EncodedModule, b: &EncodedModule) -> Vec<Constraint> {
    let d = a.spacing.max(b.spacing);
    let apart = Formula::or(vec![
        // a left of b.
        Formula::le(
            Term::add(Term::add(a.x.clone(), a.span_x()), Term::Known(d)),
            b.x.clone(),
        ),
        // a right of b.
        Formula::le(
            Term::add(Term::add(b.x.clone(), b.span_x()), Term::Known(d)),
            a.x.clone(),
        ),
        // a below b.
        Formula::le(
            Term::add(Term::add(a.y.clone(), a.span_y()), Term::Known(d)),
            b.y.clone(),
        ),
        // a above b.
        Formula::le(
            Term::add(Term::add(b.y.clone(), b.span_y()), Term::Known(d)),
            a.y.clone(),
        ),
    ]);
    let mut out = Vec::new();
    ctx.constrain(
        &mut out,
        &format!("m{}_m{}_sep", a.id, b.id),
        Formula::implies(same_face(&a.placement, &b.placement), apart),
    );
    out
}
