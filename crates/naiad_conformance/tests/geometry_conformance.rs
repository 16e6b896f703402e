//! Geometry exactness scenarios: the crossing and distance predicates
//! checked against brute-force references and the documented corner cases.

use naiad_geom::{
    channel_segments_no_cross, segment_point_keepout, Direction, SegmentVars,
};
use naiad_smt::{BoundedEnum, Formula, Term};

fn segment(x1: i64, y1: i64, x2: i64, y2: i64, dir: Direction) -> SegmentVars {
    SegmentVars {
        x1: Term::Known(x1),
        y1: Term::Known(y1),
        x2: Term::Known(x2),
        y2: Term::Known(y2),
        active: Formula::Const(true),
        direction: BoundedEnum::known(dir),
    }
}

fn no_cross(a: &SegmentVars, b: &SegmentVars) -> bool {
    channel_segments_no_cross(a, b)
        .as_const()
        .expect("concrete geometry folds")
}

/// Axis-aligned reference: a vertical and a horizontal segment cross (with
/// boundary touching counting as a crossing) exactly when each one's fixed
/// coordinate falls within the other's span.
#[test]
fn vertical_horizontal_matches_projection_overlap() {
    for vx in -2..=12 {
        for hy in -2..=12 {
            let v = segment(vx, 0, vx, 10, Direction::Up);
            let h = segment(-1, hy, 11, hy, Direction::Right);
            let crosses = (-1..=11).contains(&vx) && (0..=10).contains(&hy);
            assert_eq!(
                no_cross(&v, &h),
                !crosses,
                "vertical x={vx} against horizontal y={hy}"
            );
            // The predicate is symmetric in operand order.
            assert_eq!(no_cross(&h, &v), !crosses);
        }
    }
}

/// The documented same-slope pair: (0,0)–(10,10) against the copy shifted
/// right by 11 is clear; shifted by 10 the pair is rejected.
#[test]
fn same_slope_diagonals_separate_at_chebyshev_one() {
    let base = segment(0, 0, 10, 10, Direction::UpRight);
    let clear = segment(11, 0, 21, 10, Direction::UpRight);
    assert!(no_cross(&base, &clear));
    let touching = segment(10, 0, 20, 10, Direction::UpRight);
    assert!(!no_cross(&base, &touching));
}

/// Same-slope exactness holds in every slope/direction combination.
#[test]
fn same_slope_exactness_is_direction_independent() {
    // "\" segments walked in both directions.
    let a = segment(0, 10, 10, 0, Direction::DownRight);
    let clear = segment(11, 10, 21, 0, Direction::DownRight);
    let reversed = segment(21, 0, 11, 10, Direction::UpLeft);
    assert!(no_cross(&a, &clear));
    assert!(no_cross(&a, &reversed));
    let touching = segment(20, 0, 10, 10, Direction::UpLeft);
    assert!(!no_cross(&a, &touching));
}

/// Opposite-slope diagonals meet at a half-integer point; the doubled
/// coordinate test must still reject the crossing.
#[test]
fn opposite_slope_crossing_at_half_integer() {
    let pos = segment(0, 0, 10, 10, Direction::UpRight);
    let neg = segment(5, 0, 0, 5, Direction::UpLeft);
    assert!(!no_cross(&pos, &neg));
    // Pulled short of the meeting point, the pair clears.
    let short = segment(4, 6, 0, 10, Direction::UpLeft);
    assert!(no_cross(&pos, &short));
}

/// Point-to-diagonal distance: point (0,0) against the `\` segment
/// (2,0)–(0,2). The true Euclidean distance is √2 ≈ 1.414, and the
/// predicate accepts 1.4 while rejecting 1.42.
#[test]
fn point_diagonal_distance_is_euclidean_exact() {
    let seg = segment(2, 0, 0, 2, Direction::UpLeft);
    let keepout =
        |d: f64| -> bool { segment_point_keepout(&seg, &Term::Known(0), &Term::Known(0), d)
            .as_const()
            .expect("concrete geometry folds") };
    assert!(keepout(1.4));
    assert!(!keepout(1.42));
}

/// An inactive segment never contributes a crossing, whatever its
/// coordinates claim.
#[test]
fn inactive_segments_are_geometrically_absent() {
    let a = segment(0, 0, 10, 0, Direction::Right);
    let mut ghost = segment(5, -5, 5, 5, Direction::Up);
    ghost.active = Formula::Const(false);
    assert!(no_cross(&a, &ghost));
}

/// Diagonal against axis-aligned: the exact corner term fires only inside
/// the overlap region.
#[test]
fn diagonal_axis_corner_exactness() {
    let diag = segment(0, 0, 10, 10, Direction::UpRight);
    for vy in 0..=10 {
        // A vertical at x = 6 from y = vy up to 20 crosses the diagonal
        // exactly when it reaches down to the line point (6, 6).
        let v = segment(6, vy, 6, 20, Direction::Up);
        assert_eq!(no_cross(&diag, &v), vy > 6, "vertical starting at y={vy}");
    }
}
