//! Mandatory-waypoint constraints.

use crate::context::EncodeCtx;
use crate::entities::EncodedChannel;
use naiad_smt::{Constraint, Formula, Term};

/// Routes the channel through its mandatory waypoints.
///
/// When the channel has exactly as many waypoints as the mandatory list,
/// every index is pinned one-to-one. Otherwise each mandatory waypoint must
/// appear somewhere in the sequence, and consecutive mandatory waypoints
/// must appear in forward order: if waypoint `k` sits at index `i`, waypoint
/// `k + 1` must sit at some later index. The mirror-image backward rule is
/// deliberately not enforced (see DESIGN.md).
pub fn encode(ctx: &mut EncodeCtx<'_>, channel: &EncodedChannel) -> Vec<Constraint> {
    let mut out = Vec::new();
    let id = channel.id;
    let mandatory = &channel.fixed_waypoints;
    if mandatory.is_empty() {
        return out;
    }

    let n = channel.waypoints.len();
    let at = |k: usize, i: usize| -> Formula {
        let (mx, my) = mandatory[k];
        let (x, y) = &channel.waypoints[i];
        Formula::and(vec![
            Formula::eq(x.clone(), Term::Known(mx)),
            Formula::eq(y.clone(), Term::Known(my)),
        ])
    };

    if mandatory.len() == n {
        for k in 0..n {
            ctx.constrain(&mut out, &format!("c{id}_fix{k}"), at(k, k));
        }
        return out;
    }

    for k in 0..mandatory.len() {
        let somewhere = Formula::or((0..n).map(|i| at(k, i)).collect());
        ctx.constrain(&mut out, &format!("c{id}_fix{k}"), somewhere);
    }
    for k in 0..mandatory.len().saturating_sub(1) {
        for i in 0..n {
            let later = Formula::or(((i + 1)..n).map(|j| at(k + 1, j)).collect());
            ctx.constrain(
                &mut out,
                &format!("c{id}_fix{k}_order"),
                Formula::implies(at(k, i), later),
            );
        }
    }
    out
}
