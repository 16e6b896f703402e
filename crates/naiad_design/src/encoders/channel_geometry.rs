//! Channel segment geometry: activity, direction semantics, turns, length.

use crate::context::EncodeCtx;
use crate::entities::EncodedChannel;
use naiad_geom::Direction;
use naiad_smt::{sum, Constraint, Formula, SolverEnum, Term};

/// Encodes the internal geometry of one channel:
///
/// 1. an inactive segment collapses its endpoints, and the active segments
///    form a prefix of the segment list;
/// 2. each segment's direction enum is tied to its coordinate-delta pattern
///    (axis-aligned: one coordinate fixed, the other strictly monotonic;
///    diagonal: both deltas of equal magnitude in the implied signs);
/// 3. consecutive active segments turn by at most 90° of heading change
///    (at most the two 90° turns in soft-corners mode);
/// 4. total length sums each active segment's axis delta (Manhattan delta
///    for diagonals) into the channel's length variable, with the optional
///    maximum/exact length pins.
pub fn encode(ctx: &mut EncodeCtx<'_>, channel: &EncodedChannel) -> Vec<Constraint> {
    let mut out = Vec::new();
    let id = channel.id;
    let n = channel.segment_count();

    for i in 0..n {
        let (x1, y1) = channel.waypoints[i].clone();
        let (x2, y2) = channel.waypoints[i + 1].clone();
        let active = &channel.actives[i];
        let direction = &channel.directions[i];

        // (1) Collapse when inactive.
        let collapsed = Formula::and(vec![
            Formula::eq(x2.clone(), x1.clone()),
            Formula::eq(y2.clone(), y1.clone()),
        ]);
        ctx.constrain(
            &mut out,
            &format!("c{id}_seg{i}_collapse"),
            Formula::implies(Formula::not(active.clone()), collapsed),
        );

        // (1) Active prefix: a segment can only be active if its
        // predecessor is.
        if i > 0 {
            ctx.constrain(
                &mut out,
                &format!("c{id}_seg{i}_prefix"),
                Formula::implies(active.clone(), channel.actives[i - 1].clone()),
            );
        }

        // (2) Direction ⇔ delta pattern. The eight patterns are mutually
        // exclusive for a non-zero delta and all fail for a zero delta, so
        // the implications pin the direction exactly on active segments.
        for &dir in Direction::ALL {
            let pattern = delta_pattern(&x1, &y1, &x2, &y2, dir);
            ctx.constrain(
                &mut out,
                &format!("c{id}_seg{i}_dir"),
                Formula::implies(
                    Formula::and(vec![active.clone(), direction.equals(dir)]),
                    pattern,
                ),
            );
        }
    }

    // (3) Turn rule between consecutive active segments.
    for i in 0..n.saturating_sub(1) {
        let both = Formula::and(vec![
            channel.actives[i].clone(),
            channel.actives[i + 1].clone(),
        ]);
        let mut junction = Vec::new();
        for &da in Direction::ALL {
            let allowed = Formula::or(
                da.successors(ctx.soft_corners)
                    .into_iter()
                    .map(|db| channel.directions[i + 1].equals(db))
                    .collect(),
            );
            junction.push(Formula::implies(
                Formula::and(vec![both.clone(), channel.directions[i].equals(da)]),
                allowed,
            ));
        }
        ctx.constrain(
            &mut out,
            &format!("c{id}_seg{i}_turn"),
            Formula::and(junction),
        );
    }

    // (4) Length accumulation. Collapsed segments contribute zero through
    // every branch, so no activity guard is needed.
    let total = sum((0..n).map(|i| {
        let (x1, y1) = channel.waypoints[i].clone();
        let (x2, y2) = channel.waypoints[i + 1].clone();
        segment_length(&x1, &y1, &x2, &y2, channel, i)
    }));
    ctx.constrain(
        &mut out,
        &format!("c{id}_len"),
        Formula::eq(channel.length.clone(), total),
    );
    if let Some(max) = channel.max_length {
        ctx.constrain(
            &mut out,
            &format!("c{id}_maxlen"),
            Formula::le(channel.length.clone(), Term::Known(max)),
        );
    }
    if let Some(exact) = channel.exact_length {
        ctx.constrain(
            &mut out,
            &format!("c{id}_exactlen"),
            Formula::eq(channel.length.clone(), Term::Known(exact)),
        );
    }
    out
}

/// The coordinate-delta pattern implied by a direction.
fn delta_pattern(x1: &Term, y1: &Term, x2: &Term, y2: &Term, dir: Direction) -> Formula {
    let dx = Term::sub(x2.clone(), x1.clone());
    let dy = Term::sub(y2.clone(), y1.clone());
    let x_fixed = Formula::eq(x2.clone(), x1.clone());
    let y_fixed = Formula::eq(y2.clone(), y1.clone());
    let x_up = Formula::lt(x1.clone(), x2.clone());
    let x_down = Formula::lt(x2.clone(), x1.clone());
    let y_up = Formula::lt(y1.clone(), y2.clone());
    let y_down = Formula::lt(y2.clone(), y1.clone());
    match dir {
        Direction::Up => Formula::and(vec![x_fixed, y_up]),
        Direction::Down => Formula::and(vec![x_fixed, y_down]),
        Direction::Right => Formula::and(vec![y_fixed, x_up]),
        Direction::Left => Formula::and(vec![y_fixed, x_down]),
        Direction::UpRight => Formula::and(vec![x_up, Formula::eq(dx, dy)]),
        Direction::DownLeft => Formula::and(vec![x_down, Formula::eq(dx, dy)]),
        Direction::DownRight => Formula::and(vec![
            x_up,
            Formula::eq(dx, Term::sub(y1.clone(), y2.clone())),
        ]),
        Direction::UpLeft => Formula::and(vec![
            x_down,
            Formula::eq(Term::sub(x1.clone(), x2.clone()), dy),
        ]),
    }
}

/// One segment's length contribution: a conditional chain over the eight
/// directions selecting the sign-resolved axis delta (Manhattan delta for
/// diagonals).
fn segment_length(
    x1: &Term,
    y1: &Term,
    x2: &Term,
    y2: &Term,
    channel: &EncodedChannel,
    i: usize,
) -> Term {
    let dx_pos = Term::sub(x2.clone(), x1.clone());
    let dx_neg = Term::sub(x1.clone(), x2.clone());
    let dy_pos = Term::sub(y2.clone(), y1.clone());
    let dy_neg = Term::sub(y1.clone(), y2.clone());
    let contribution = |dir: Direction| -> Term {
        match dir {
            Direction::Up => dy_pos.clone(),
            Direction::Down => dy_neg.clone(),
            Direction::Right => dx_pos.clone(),
            Direction::Left => dx_neg.clone(),
            Direction::UpRight => Term::add(dx_pos.clone(), dy_pos.clone()),
            Direction::DownRight => Term::add(dx_pos.clone(), dy_neg.clone()),
            Direction::UpLeft => Term::add(dx_neg.clone(), dy_pos.clone()),
            Direction::DownLeft => Term::add(dx_neg.clone(), dy_neg.clone()),
        }
    };
    let dir = &channel.directions[i];
    let mut term = contribution(Direction::DownLeft);
    for &d in Direction::ALL.iter().rev().skip(1) {
        term = Term::ite(dir.equals(d), contribution(d), term);
    }
    term
}
