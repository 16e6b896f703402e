//! Routing-exclusion keep-out constraints.

use crate::context::EncodeCtx;
use crate::entities::{EncodedChannel, EncodedExclusion, EncodedPin};
use crate::units::PIN_KEEPOUT;
use naiad_geom::distance::{box_box_min_distance, point_box_min_distance};
use naiad_geom::{segment_box_keepout, segment_box_no_cross};
use naiad_smt::Constraint;

/// A channel stays away from an exclusion zone: every segment keeps the
/// channel's clearance from the box and never crosses it, and every
/// waypoint keeps the same clearance. Dynamic zones arrive here already
/// resolved through their module's orientation.
pub fn encode_channel(
    ctx: &mut EncodeCtx<'_>,
    exclusion: &EncodedExclusion,
    channel: &EncodedChannel,
) -> Vec<Constraint> {
    let mut out = Vec::new();
    let base = format!("e{}_c{}", exclusion.id, channel.id);
    let d = channel.width as f64 / 2.0 + channel.spacing as f64;
    let di = d.ceil() as i64;

    for i in 0..channel.segment_count() {
        let seg = channel.segment(i);
        ctx.constrain(
            &mut out,
            &format!("{base}_s{i}_dist"),
            segment_box_keepout(&seg, &exclusion.rect, d),
        );
        ctx.constrain(
            &mut out,
            &format!("{base}_s{i}_cross"),
            segment_box_no_cross(&seg, &exclusion.rect),
        );
    }
    for (i, (x, y)) in channel.waypoints.iter().enumerate() {
        ctx.constrain(
            &mut out,
            &format!("{base}_wp{i}"),
            point_box_min_distance(x, y, &exclusion.rect, di),
        );
    }
    out
}

/// A pin's exclusion square keeps the fixed pin clearance from the zone.
pub fn encode_pin(
    ctx: &mut EncodeCtx<'_>,
    exclusion: &EncodedExclusion,
    pin: &EncodedPin,
) -> Vec<Constraint> {
    let mut out = Vec::new();
    ctx.constrain(
        &mut out,
        &format!("e{}_p{}", exclusion.id, pin.id),
        box_box_min_distance(&pin.exclusion_rect(), &exclusion.rect, PIN_KEEPOUT),
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{ChannelSpec, Chip, PinSpec, PortRef, StaticExclusionSpec};
    use crate::ids::{ChannelId, ExclusionId, PinId};
    use naiad_smt::{Formula, Model, Value};

    fn exclusion() -> EncodedExclusion {
        EncodedExclusion::encode_static(
            ExclusionId::from_raw(0),
            &StaticExclusionSpec {
                x: 0,
                y: 0,
                width: 10_000,
                height: 10_000,
            },
        )
    }

    fn channel(ctx: &mut EncodeCtx<'_>) -> EncodedChannel {
        let spec = ChannelSpec {
            width: 400,
            spacing: 600,
            max_segments: 1,
            from: PortRef {
                module: 0,
                port_x: 0,
                port_y: 0,
            },
            to: PortRef {
                module: 1,
                port_x: 0,
                port_y: 0,
            },
            fixed_waypoints: Vec::new(),
            layer: None,
            max_length: None,
            exact_length: None,
        };
        EncodedChannel::encode(ChannelId::from_raw(0), &spec, ctx).0
    }

    fn route(x1: i64, y1: i64, x2: i64, y2: i64, dir: u64) -> Model {
        let mut model = Model::new();
        model.insert("c0_wp0_x", Value::Int(x1));
        model.insert("c0_wp0_y", Value::Int(y1));
        model.insert("c0_wp1_x", Value::Int(x2));
        model.insert("c0_wp1_y", Value::Int(y2));
        model.insert("c0_seg0_active", Value::Bool(true));
        model.insert("c0_seg0_dir", Value::BitVec(dir));
        model
    }

    #[test]
    fn clause_inventory() {
        let chip = Chip::centered(76_000, 25_000);
        let mut ctx = EncodeCtx::new(&chip, false);
        let c = channel(&mut ctx);
        let out = encode_channel(&mut ctx, &exclusion(), &c);
        // 1 segment × (distance + cross) + 2 waypoints.
        assert_eq!(out.len(), 4);
    }

    #[test]
    fn channel_through_zone_is_rejected() {
        let chip = Chip::centered(76_000, 25_000);
        let mut ctx = EncodeCtx::new(&chip, false);
        let c = channel(&mut ctx);
        let out = encode_channel(&mut ctx, &exclusion(), &c);
        // Horizontal route straight through the zone (direction Right = 3).
        let through = route(-5_000, 5_000, 15_000, 5_000, 3);
        assert!(!out.iter().all(|c| c.formula.eval(&through).unwrap()));
        // Route passing well below the zone.
        let below = route(-5_000, -2_000, 15_000, -2_000, 3);
        assert!(out.iter().all(|c| c.formula.eval(&below).unwrap()));
        // Route below but within the 800 clearance.
        let close = route(-5_000, -700, 15_000, -700, 3);
        assert!(!out.iter().all(|c| c.formula.eval(&close).unwrap()));
    }

    #[test]
    fn pin_square_keeps_clearance() {
        let chip = Chip::centered(76_000, 25_000);
        let mut ctx = EncodeCtx::new(&chip, false);
        let pin = EncodedPin::encode(
            PinId::from_raw(0),
            &PinSpec {
                module: 0,
                radius: 1_000,
            },
            &mut ctx,
        );
        let out = encode_pin(&mut ctx, &exclusion(), &pin);
        assert_eq!(out.len(), 1);
        let mut far = Model::new();
        // Square [−13500, −11500]²: 1500 below the zone corner.
        far.insert("p0_x", Value::Int(-12_500));
        far.insert("p0_y", Value::Int(-12_500));
        assert!(out[0].formula.eval(&far).unwrap());
        let mut near = Model::new();
        near.insert("p0_x", Value::Int(-2_400));
        near.insert("p0_y", Value::Int(-2_400));
        assert!(!out[0].formula.eval(&near).unwrap());
    }

    #[test]
    fn zone_constraints_reference_labels() {
        let chip = Chip::centered(76_000, 25_000);
        let mut ctx = EncodeCtx::new(&chip, false);
        let c = channel(&mut ctx);
        let out = encode_channel(&mut ctx, &exclusion(), &c);
        assert!(out[0].label.starts_with("e0_c0_s0_dist"));
        assert!(out
            .iter()
            .all(|c| c.formula != Formula::Const(true)));
    }
}
