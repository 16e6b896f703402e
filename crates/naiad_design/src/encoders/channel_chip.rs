//! Channel-inside-chip constraints.

use crate::context::EncodeCtx;
use crate::entities::EncodedChannel;
use naiad_smt::{Constraint, Formula, Term};

/// Every waypoint stays at least `half_width + spacing` inside every chip
/// edge, so the routed channel body never reaches the boundary.
pub fn encode(ctx: &mut EncodeCtx<'_>, channel: &EncodedChannel) -> Vec<Constraint> {
    let mut out = Vec::new();
    let d = channel.half_width() + channel.spacing;
    let chip = ctx.chip;
    for (i, (x, y)) in channel.waypoints.iter().enumerate() {
        let inside = Formula::and(vec![
            Formula::ge(x.clone(), Term::Known(chip.x_min() + d)),
            Formula::le(x.clone(), Term::Known(chip.x_max() - d)),
            Formula::ge(y.clone(), Term::Known(chip.y_min() + d)),
            Formula::le(y.clone(), Term::Known(chip.y_max() - d)),
        ]);
        ctx.constrain(&mut out, &format!("c{}_wp{i}_chip", channel.id), inside);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{ChannelSpec, Chip, PortRef};
    use crate::ids::ChannelId;

    fn channel(ctx: &mut EncodeCtx<'_>) -> EncodedChannel {
        let spec = ChannelSpec {
            width: 400,
            spacing: 600,
            max_segments: 2,
            from: PortRef {
                module: 0,
                port_x: 0,
                port_y: 0,
            },
            to: PortRef {
                module: 0,
                port_x: 1,
                port_y: 0,
            },
            fixed_waypoints: Vec::new(),
            layer: None,
            max_length: None,
            exact_length: None,
        };
        EncodedChannel::encode(ChannelId::from_raw(0), &spec, ctx).0
    }

    #[test]
    fn one_clause_per_waypoint() {
        let chip = Chip::centered(76_000, 25_000);
        let mut ctx = EncodeCtx::new(&chip, false);
        let c = channel(&mut ctx);
        let out = encode(&mut ctx, &c);
        assert_eq!(out.len(), 3);
        assert_eq!(out[0].label, "c0_wp0_chip_0");
        assert_eq!(out[2].label, "c0_wp2_chip_2");
    }

    #[test]
    fn margin_combines_half_width_and_spacing() {
        let chip = Chip::centered(76_000, 25_000);
        let mut ctx = EncodeCtx::new(&chip, false);
        let c = channel(&mut ctx);
        let out = encode(&mut ctx, &c);
        // 400/2 + 600 = 800 inside each edge.
        let expect = Formula::ge(c.waypoints[0].0.clone(), Term::Known(-38_000 + 800));
        match &out[0].formula {
            Formula::And(parts) => assert_eq!(parts[0], expect),
            other => panic!("expected conjunction, got {other:?}"),
        }
    }
}
