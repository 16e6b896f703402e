//! No-cross predicates. Boundary touching counts as crossing, so separation
//! is strict everywhere in this module.
//!
//! Pairs involving a diagonal use the two-tier strategy: a coarse 4-way
//! bounding-box disjunction, which is sound whenever the boxes are fully
//! separated, plus an exact corner term that evaluates where the diagonal
//! line meets the other shape's fixed coordinate and requires the crossing
//! point to fall strictly outside that shape. The two tiers together are
//! exact (intervals on a line have the Helly property, so pairwise interval
//! overlap of the x-projection, the y-projection, and the line range implies
//! a common crossing point).

use crate::segment::{DiagonalView, HorizontalView, Rect, VerticalView};
use crate::Slope;
use naiad_smt::{Formula, Term};

/// A vertical and a horizontal segment do not cross.
pub fn vertical_horizontal_no_cross(v: &VerticalView, h: &HorizontalView) -> Formula {
    Formula::or(vec![
        Formula::lt(v.x.clone(), h.x_lo.clone()),
        Formula::lt(h.x_hi.clone(), v.x.clone()),
        Formula::lt(h.y.clone(), v.y_lo.clone()),
        Formula::lt(v.y_hi.clone(), h.y.clone()),
    ])
}

/// A vertical and a diagonal segment do not cross.
///
/// The diagonal line meets `x = v.x` at one y; outside the diagonal's x
/// range the segments cannot meet at all, and inside it they cross exactly
/// when that y lies within the vertical segment's range.
pub fn vertical_diagonal_no_cross(v: &VerticalView, d: &DiagonalView) -> Formula {
    let reach = Term::sub(v.x.clone(), d.x_lo.clone());
    let cross_y = match d.slope {
        Slope::Positive => Term::add(d.y_lo.clone(), reach),
        Slope::Negative => Term::sub(d.y_hi.clone(), reach),
    };
    Formula::or(vec![
        Formula::lt(v.x.clone(), d.x_lo.clone()),
        Formula::lt(d.x_hi.clone(), v.x.clone()),
        Formula::lt(v.y_hi.clone(), d.y_lo.clone()),
        Formula::lt(d.y_hi.clone(), v.y_lo.clone()),
        Formula::lt(cross_y.clone(), v.y_lo.clone()),
        Formula::lt(v.y_hi.clone(), cross_y),
    ])
}

/// A horizontal and a diagonal segment do not cross.
pub fn horizontal_diagonal_no_cross(h: &HorizontalView, d: &DiagonalView) -> Formula {
    let cross_x = match d.slope {
        Slope::Positive => Term::add(d.x_lo.clone(), Term::sub(h.y.clone(), d.y_lo.clone())),
        Slope::Negative => Term::add(d.x_lo.clone(), Term::sub(d.y_hi.clone(), h.y.clone())),
    };
    Formula::or(vec![
        Formula::lt(h.y.clone(), d.y_lo.clone()),
        Formula::lt(d.y_hi.clone(), h.y.clone()),
        Formula::lt(h.x_hi.clone(), d.x_lo.clone()),
        Formula::lt(d.x_hi.clone(), h.x_lo.clone()),
        Formula::lt(cross_x.clone(), h.x_lo.clone()),
        Formula::lt(h.x_hi.clone(), cross_x),
    ])
}

/// Two diagonal segments do not cross.
///
/// Same slope sign: the strict bounding-box disjunction alone — parallel
/// 45° channels conflict exactly when their boxes meet (Chebyshev
/// separation semantics). Opposite slopes: the lines meet where
/// `w − v = 2x`; the doubled crossing x must fall strictly outside one of
/// the segments' x ranges.
pub fn diagonal_diagonal_no_cross(a: &DiagonalView, b: &DiagonalView) -> Formula {
    let boxes_apart = vec![
        Formula::lt(a.x_hi.clone(), b.x_lo.clone()),
        Formula::lt(b.x_hi.clone(), a.x_lo.clone()),
        Formula::lt(a.y_hi.clone(), b.y_lo.clone()),
        Formula::lt(b.y_hi.clone(), a.y_lo.clone()),
    ];
    if a.slope == b.slope {
        return Formula::or(boxes_apart);
    }
    let (pos, neg) = match a.slope {
        Slope::Positive => (a, b),
        Slope::Negative => (b, a),
    };
    // w − v = 2x at the line crossing; compare against doubled x ranges.
    let doubled = Term::sub(neg.line_value(), pos.line_value());
    let two = |t: &Term| Term::mul(Term::Known(2), t.clone());
    let mut clauses = boxes_apart;
    clauses.extend([
        Formula::lt(doubled.clone(), two(&pos.x_lo)),
        Formula::lt(two(&pos.x_hi), doubled.clone()),
        Formula::lt(doubled.clone(), two(&neg.x_lo)),
        Formula::lt(two(&neg.x_hi), doubled),
    ]);
    Formula::or(clauses)
}

/// An axis-aligned segment does not cross a rectangle (vertical case).
pub fn vertical_box_no_cross(v: &VerticalView, rect: &Rect) -> Formula {
    Formula::or(vec![
        Formula::lt(v.x.clone(), rect.x_lo.clone()),
        Formula::lt(rect.x_hi.clone(), v.x.clone()),
        Formula::lt(v.y_hi.clone(), rect.y_lo.clone()),
        Formula::lt(rect.y_hi.clone(), v.y_lo.clone()),
    ])
}

/// An axis-aligned segment does not cross a rectangle (horizontal case).
pub fn horizontal_box_no_cross(h: &HorizontalView, rect: &Rect) -> Formula {
    Formula::or(vec![
        Formula::lt(h.y.clone(), rect.y_lo.clone()),
        Formula::lt(rect.y_hi.clone(), h.y.clone()),
        Formula::lt(h.x_hi.clone(), rect.x_lo.clone()),
        Formula::lt(rect.x_hi.clone(), h.x_lo.clone()),
    ])
}

/// A diagonal segment does not cross a rectangle.
pub fn diagonal_box_no_cross(d: &DiagonalView, rect: &Rect) -> Formula {
    let line = d.line_value();
    let (lo, hi) = match d.slope {
        Slope::Positive => (
            Term::sub(rect.y_lo.clone(), rect.x_hi.clone()),
            Term::sub(rect.y_hi.clone(), rect.x_lo.clone()),
        ),
        Slope::Negative => (
            Term::add(rect.x_lo.clone(), rect.y_lo.clone()),
            Term::add(rect.x_hi.clone(), rect.y_hi.clone()),
        ),
    };
    Formula::or(vec![
        Formula::lt(d.x_hi.clone(), rect.x_lo.clone()),
        Formula::lt(rect.x_hi.clone(), d.x_lo.clone()),
        Formula::lt(d.y_hi.clone(), rect.y_lo.clone()),
        Formula::lt(rect.y_hi.clone(), d.y_lo.clone()),
        Formula::lt(line.clone(), lo),
        Formula::lt(hi, line),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::Direction;
    use crate::segment::{view, SegmentView};
    use naiad_smt::Term::Known;

    fn vertical(x: i64, y1: i64, y2: i64) -> VerticalView {
        match view(&Known(x), &Known(y1), &Known(x), &Known(y2), Direction::Up) {
            SegmentView::Vertical(v) => v,
            _ => unreachable!(),
        }
    }

    fn horizontal(y: i64, x1: i64, x2: i64) -> HorizontalView {
        match view(&Known(x1), &Known(y), &Known(x2), &Known(y), Direction::Right) {
            SegmentView::Horizontal(h) => h,
            _ => unreachable!(),
        }
    }

    fn diagonal(x1: i64, y1: i64, x2: i64, y2: i64, dir: Direction) -> DiagonalView {
        match view(&Known(x1), &Known(y1), &Known(x2), &Known(y2), dir) {
            SegmentView::Diagonal(d) => d,
            _ => unreachable!(),
        }
    }

    #[test]
    fn vertical_horizontal_strictness() {
        // Crossing through the middle.
        let f = vertical_horizontal_no_cross(&vertical(5, -5, 5), &horizontal(0, 0, 10));
        assert_eq!(f, Formula::Const(false));
        // Touching at an endpoint still counts as crossing.
        let t = vertical_horizontal_no_cross(&vertical(10, 0, 5), &horizontal(0, 0, 10));
        assert_eq!(t, Formula::Const(false));
        // Strictly apart.
        let apart = vertical_horizontal_no_cross(&vertical(11, 0, 5), &horizontal(0, 0, 10));
        assert_eq!(apart, Formula::Const(true));
    }

    #[test]
    fn vertical_diagonal_corner_exactness() {
        let d = diagonal(0, 0, 10, 10, Direction::UpRight);
        // x = 4 crosses the diagonal at y = 4; a vertical spanning [5, 20]
        // overlaps the diagonal's box but stays above the crossing point.
        let above = vertical_diagonal_no_cross(&vertical(4, 5, 20), &d);
        assert_eq!(above, Formula::Const(true));
        // Lowering the vertical to reach y = 4 crosses.
        let touching = vertical_diagonal_no_cross(&vertical(4, 4, 20), &d);
        assert_eq!(touching, Formula::Const(false));
    }

    #[test]
    fn horizontal_diagonal_corner_exactness() {
        let d = diagonal(2, 0, 0, 2, Direction::UpLeft);
        // y = 1 crosses x + y = 2 at x = 1.
        let right = horizontal_diagonal_no_cross(&horizontal(1, 2, 9), &d);
        assert_eq!(right, Formula::Const(true));
        let touching = horizontal_diagonal_no_cross(&horizontal(1, 1, 9), &d);
        assert_eq!(touching, Formula::Const(false));
    }

    /// The documented same-slope pair: (0,0)–(10,10) against a copy shifted
    /// right by 11 is clear; shifted by 10 the boxes meet and the pair is
    /// rejected.
    #[test]
    fn same_slope_chebyshev_exactness() {
        let a = diagonal(0, 0, 10, 10, Direction::UpRight);
        let clear = diagonal(11, 0, 21, 10, Direction::UpRight);
        assert_eq!(diagonal_diagonal_no_cross(&a, &clear), Formula::Const(true));
        let tight = diagonal(10, 0, 20, 10, Direction::UpRight);
        assert_eq!(diagonal_diagonal_no_cross(&a, &tight), Formula::Const(false));
    }

    #[test]
    fn opposite_slope_meeting_point() {
        // "/" through the origin and "\" with x + y = 10: lines meet at (5, 5).
        let pos = diagonal(0, 0, 10, 10, Direction::UpRight);
        let crossing = diagonal(10, 0, 0, 10, Direction::UpLeft);
        assert_eq!(
            diagonal_diagonal_no_cross(&pos, &crossing),
            Formula::Const(false)
        );
        // The same "\" line restricted to x ∈ [0, 4] stops short of (5, 5)
        // even though the bounding boxes overlap.
        let short = diagonal(4, 6, 0, 10, Direction::UpLeft);
        assert_eq!(
            diagonal_diagonal_no_cross(&pos, &short),
            Formula::Const(true)
        );
    }

    #[test]
    fn opposite_slope_half_integer_crossing() {
        // "/" through the origin and "\" with x + y = 5 meet at (2.5, 2.5),
        // inside both segments; the doubled-coordinate test must reject.
        let pos = diagonal(0, 0, 10, 10, Direction::UpRight);
        let neg = diagonal(5, 0, 0, 5, Direction::UpLeft);
        assert_eq!(diagonal_diagonal_no_cross(&pos, &neg), Formula::Const(false));
    }

    #[test]
    fn diagonal_box_two_tier() {
        let d = diagonal(0, 0, 10, 10, Direction::UpRight);
        // Box overlapping the diagonal's bounding box but strictly above the line.
        let above = Rect::from_origin(Known(0), Known(6), 2, 2);
        assert_eq!(diagonal_box_no_cross(&d, &above), Formula::Const(true));
        // Box sitting on the line.
        let on = Rect::from_origin(Known(4), Known(4), 2, 2);
        assert_eq!(diagonal_box_no_cross(&d, &on), Formula::Const(false));
        // Box fully to the right.
        let apart = Rect::from_origin(Known(11), Known(0), 2, 2);
        assert_eq!(diagonal_box_no_cross(&d, &apart), Formula::Const(true));
    }

    #[test]
    fn axis_box_no_cross() {
        let v = vertical(5, 0, 10);
        let hit = Rect::from_origin(Known(0), Known(2), 10, 2);
        assert_eq!(vertical_box_no_cross(&v, &hit), Formula::Const(false));
        let miss = Rect::from_origin(Known(6), Known(2), 10, 2);
        assert_eq!(vertical_box_no_cross(&v, &miss), Formula::Const(true));

        let h = horizontal(5, 0, 10);
        let hit = Rect::from_origin(Known(2), Known(0), 2, 10);
        assert_eq!(horizontal_box_no_cross(&h, &hit), Formula::Const(false));
        let miss = Rect::from_origin(Known(2), Known(6), 2, 10);
        assert_eq!(horizontal_box_no_cross(&h, &miss), Formula::Const(true));
    }
}
