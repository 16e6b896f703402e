//! Channel-to-channel separation and self-crossing constraints.

use crate::context::EncodeCtx;
use crate::entities::{same_face, EncodedChannel, EncodedModule};
use naiad_common::unique_pairs;
use naiad_geom::{channel_segments_no_cross, segment_point_keepout};
use naiad_geom::distance::point_point_min_distance;
use naiad_smt::{Constraint, Formula};

/// A channel must not cross itself: every unique pair of non-adjacent
/// segments goes through the direction dispatcher (adjacent segments share
/// a waypoint by construction and are ruled by the turn constraints).
pub fn encode_self(ctx: &mut EncodeCtx<'_>, channel: &EncodedChannel) -> Vec<Constraint> {
    let mut out = Vec::new();
    let id = channel.id;
    for (i, j) in unique_pairs(channel.segment_count()) {
        if j == i + 1 {
            continue;
        }
        let clause = channel_segments_no_cross(&channel.segment(i), &channel.segment(j));
        ctx.constrain(&mut out, &format!("c{id}_self_s{i}_s{j}"), clause);
    }
    out
}

/// Two channels that can share a chip face must keep their distance:
/// every segment pair is dispatched through the no-cross predicate, every
/// waypoint pair keeps Chebyshev separation, and every waypoint keeps its
/// distance from every segment of the other channel.
///
/// The pair's separation distance combines both half-widths with the larger
/// of the two spacings. Channels whose endpoint modules are fixed to
/// opposite faces, or that sit on different explicit routing layers,
/// contribute nothing at all.
pub fn encode_pair(
    ctx: &mut EncodeCtx<'_>,
    a: &EncodedChannel,
    b: &EncodedChannel,
    modules: &[EncodedModule],
) -> Vec<Constraint> {
    if let (Some(la), Some(lb)) = (a.layer, b.layer) {
        if la != lb {
            return Vec::new();
        }
    }
    let face_a = &modules[a.from.module].placement;
    let face_b = &modules[b.from.module].placement;
    let shared = same_face(face_a, face_b);
    if shared.as_const() == Some(false) {
        return Vec::new();
    }

    let mut out = Vec::new();
    let d = (a.width as f64 + b.width as f64) / 2.0 + a.spacing.max(b.spacing) as f64;
    let di = d.ceil() as i64;
    let base = format!("c{}_c{}", a.id, b.id);

    for i in 0..a.segment_count() {
        for j in 0..b.segment_count() {
            let clause = channel_segments_no_cross(&a.segment(i), &b.segment(j));
            ctx.constrain(
                &mut out,
                &format!("{base}_s{i}_s{j}"),
                Formula::implies(shared.clone(), clause),
            );
        }
    }

    for (i, (ax, ay)) in a.waypoints.iter().enumerate() {
        for (j, (bx, by)) in b.waypoints.iter().enumerate() {
            let clause = point_point_min_distance(ax, ay, bx, by, di);
            ctx.constrain(
                &mut out,
                &format!("{base}_wp{i}_wp{j}"),
                Formula::implies(shared.clone(), clause),
            );
        }
    }

    for (i, (ax, ay)) in a.waypoints.iter().enumerate() {
        for j in 0..b.segment_count() {
            let clause = segment_point_keepout(&b.segment(j), ax, ay, d);
            ctx.constrain(
                &mut out,
                &format!("{base}_wp{i}_s{j}"),
                Formula::implies(shared.clone(), clause),
            );
        }
    }
    for (j, (bx, by)) in b.waypoints.iter().enumerate() {
        for i in 0..a.segment_count() {
            let clause = segment_point_keepout(&a.segment(i), bx, by, d);
            ctx.constrain(
                &mut out,
                &format!("{base}_s{i}_wp{j}"),
                Formula::implies(shared.clone(), clause),
            );
        }
    }
    out
}
