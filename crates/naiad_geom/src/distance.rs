//! Minimum-distance predicates.
//!
//! Separation requirements use non-strict comparisons: a layout at exactly
//! the required distance is legal. Distances deriving from half-widths and
//! spacings may be fractional; axis margins round up to the next integer,
//! and margins measured along a diagonal's corner-sum axis are scaled by √2
//! (once, at encode time, in plain arithmetic) so that the predicate is
//! exact in Euclidean terms at the diagonal.

use crate::segment::{DiagonalView, HorizontalView, Rect, SegmentView, VerticalView};
use crate::Slope;
use naiad_smt::{Formula, Term};

/// Margin for comparisons along an axis.
pub fn axis_margin(d: f64) -> i64 {
    d.ceil() as i64
}

/// Margin for comparisons along a diagonal's corner-sum axis: `ceil(d·√2)`.
pub fn diagonal_margin(d: f64) -> i64 {
    (d * std::f64::consts::SQRT_2).ceil() as i64
}

/// Asserts `a + d ≤ b`: `b` lies at least `d` above `a`.
pub fn min_distance_asym(a: &Term, b: &Term, d: i64) -> Formula {
    Formula::le(Term::add(a.clone(), Term::Known(d)), b.clone())
}

/// Asserts separation by `d` in either order along one axis.
///
/// Used wherever the relative order of the two coordinates is unconstrained.
pub fn min_distance_sym(a: &Term, b: &Term, d: i64) -> Formula {
    Formula::or(vec![
        min_distance_asym(a, b, d),
        min_distance_asym(b, a, d),
    ])
}

/// Chebyshev separation of two points by at least `d`.
pub fn point_point_min_distance(
    ax: &Term,
    ay: &Term,
    bx: &Term,
    by: &Term,
    d: i64,
) -> Formula {
    Formula::or(vec![
        min_distance_asym(ax, bx, d),
        min_distance_asym(bx, ax, d),
        min_distance_asym(ay, by, d),
        min_distance_asym(by, ay, d),
    ])
}

/// A point at least `d` outside a rectangle, on some side.
pub fn point_box_min_distance(px: &Term, py: &Term, rect: &Rect, d: i64) -> Formula {
    Formula::or(vec![
        min_distance_asym(px, &rect.x_lo, d),
        min_distance_asym(&rect.x_hi, px, d),
        min_distance_asym(py, &rect.y_lo, d),
        min_distance_asym(&rect.y_hi, py, d),
    ])
}

/// Two rectangles separated by at least `d` along some axis.
pub fn box_box_min_distance(a: &Rect, b: &Rect, d: i64) -> Formula {
    Formula::or(vec![
        min_distance_asym(&a.x_hi, &b.x_lo, d),
        min_distance_asym(&b.x_hi, &a.x_lo, d),
        min_distance_asym(&a.y_hi, &b.y_lo, d),
        min_distance_asym(&b.y_hi, &a.y_lo, d),
    ])
}

/// A point at least `d` away from a segment in the given view.
///
/// The point's error box (Chebyshev radius `ceil(d)`) must not reach the
/// segment; for diagonal segments the along-the-line part uses the
/// √2-scaled margin, making the predicate Euclidean-exact at the diagonal
/// and conservative past the segment ends.
pub fn point_segment_min_distance(
    px: &Term,
    py: &Term,
    segment: &SegmentView,
    d: f64,
) -> Formula {
    match segment {
        SegmentView::Vertical(v) => point_vertical_min_distance(px, py, v, axis_margin(d)),
        SegmentView::Horizontal(h) => point_horizontal_min_distance(px, py, h, axis_margin(d)),
        SegmentView::Diagonal(diag) => point_diagonal_min_distance(px, py, diag, d),
    }
}

fn point_vertical_min_distance(px: &Term, py: &Term, v: &VerticalView, h: i64) -> Formula {
    Formula::or(vec![
        min_distance_asym(px, &v.x, h),
        min_distance_asym(&v.x, px, h),
        min_distance_asym(py, &v.y_lo, h),
        min_distance_asym(&v.y_hi, py, h),
    ])
}

fn point_horizontal_min_distance(px: &Term, py: &Term, hz: &HorizontalView, h: i64) -> Formula {
    Formula::or(vec![
        min_distance_asym(py, &hz.y, h),
        min_distance_asym(&hz.y, py, h),
        min_distance_asym(px, &hz.x_lo, h),
        min_distance_asym(&hz.x_hi, px, h),
    ])
}

fn point_diagonal_min_distance(px: &Term, py: &Term, diag: &DiagonalView, d: f64) -> Formula {
    let h = axis_margin(d);
    let m = diagonal_margin(d);
    let line = diag.line_value();
    let offset = match diag.slope {
        Slope::Positive => Term::sub(py.clone(), px.clone()),
        Slope::Negative => Term::add(px.clone(), py.clone()),
    };
    Formula::or(vec![
        min_distance_asym(px, &diag.x_lo, h),
        min_distance_asym(&diag.x_hi, px, h),
        min_distance_asym(py, &diag.y_lo, h),
        min_distance_asym(&diag.y_hi, py, h),
        min_distance_asym(&offset, &line, m),
        min_distance_asym(&line, &offset, m),
    ])
}

/// A segment in the given view at least `d` away from a rectangle.
pub fn segment_box_min_distance(segment: &SegmentView, rect: &Rect, d: f64) -> Formula {
    match segment {
        SegmentView::Vertical(v) => {
            let h = axis_margin(d);
            Formula::or(vec![
                min_distance_asym(&v.x, &rect.x_lo, h),
                min_distance_asym(&rect.x_hi, &v.x, h),
                min_distance_asym(&v.y_hi, &rect.y_lo, h),
                min_distance_asym(&rect.y_hi, &v.y_lo, h),
            ])
        }
        SegmentView::Horizontal(hz) => {
            let h = axis_margin(d);
            Formula::or(vec![
                min_distance_asym(&hz.y, &rect.y_lo, h),
                min_distance_asym(&rect.y_hi, &hz.y, h),
                min_distance_asym(&hz.x_hi, &rect.x_lo, h),
                min_distance_asym(&rect.x_hi, &hz.x_lo, h),
            ])
        }
        SegmentView::Diagonal(diag) => diagonal_box_min_distance(diag, rect, d),
    }
}

fn diagonal_box_min_distance(diag: &DiagonalView, rect: &Rect, d: f64) -> Formula {
    let h = axis_margin(d);
    let m = diagonal_margin(d);
    let line = diag.line_value();
    let (lo, hi) = match diag.slope {
        // y − x over the box ranges from y_lo − x_hi to y_hi − x_lo.
        Slope::Positive => (
            Term::sub(rect.y_lo.clone(), rect.x_hi.clone()),
            Term::sub(rect.y_hi.clone(), rect.x_lo.clone()),
        ),
        // x + y over the box ranges from x_lo + y_lo to x_hi + y_hi.
        Slope::Negative => (
            Term::add(rect.x_lo.clone(), rect.y_lo.clone()),
            Term::add(rect.x_hi.clone(), rect.y_hi.clone()),
        ),
    };
    Formula::or(vec![
        min_distance_asym(&diag.x_hi, &rect.x_lo, h),
        min_distance_asym(&rect.x_hi, &diag.x_lo, h),
        min_distance_asym(&diag.y_hi, &rect.y_lo, h),
        min_distance_asym(&rect.y_hi, &diag.y_lo, h),
        min_distance_asym(&line, &lo, m),
        min_distance_asym(&hi, &line, m),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::Direction;
    use crate::segment::view;
    use naiad_smt::Term::Known;

    #[test]
    fn asym_folds_on_knowns() {
        assert_eq!(min_distance_asym(&Known(0), &Known(10), 10), Formula::Const(true));
        assert_eq!(min_distance_asym(&Known(0), &Known(10), 11), Formula::Const(false));
    }

    #[test]
    fn sym_accepts_either_order() {
        assert_eq!(min_distance_sym(&Known(10), &Known(0), 10), Formula::Const(true));
        assert_eq!(min_distance_sym(&Known(10), &Known(5), 6), Formula::Const(false));
    }

    #[test]
    fn point_point_is_chebyshev() {
        // (0,0) vs (3,100): far apart in y.
        assert_eq!(
            point_point_min_distance(&Known(0), &Known(0), &Known(3), &Known(100), 5),
            Formula::Const(true)
        );
        assert_eq!(
            point_point_min_distance(&Known(0), &Known(0), &Known(3), &Known(4), 5),
            Formula::Const(false)
        );
    }

    #[test]
    fn margins() {
        assert_eq!(axis_margin(1.4), 2);
        assert_eq!(diagonal_margin(1.4), 2);
        assert_eq!(diagonal_margin(1.42), 3);
        assert_eq!(diagonal_margin(10.0), 15);
    }

    /// The documented exactness case: point (0,0) against the `\` segment
    /// (2,0)–(0,2). True Euclidean distance is √2 ≈ 1.414.
    #[test]
    fn point_diagonal_distance_exact_at_sqrt2() {
        let seg = view(&Known(2), &Known(0), &Known(0), &Known(2), Direction::UpLeft);
        let close = point_segment_min_distance(&Known(0), &Known(0), &seg, 1.4);
        assert_eq!(close, Formula::Const(true));
        let far = point_segment_min_distance(&Known(0), &Known(0), &seg, 1.42);
        assert_eq!(far, Formula::Const(false));
    }

    #[test]
    fn point_vertical_distance() {
        let seg = view(&Known(10), &Known(0), &Known(10), &Known(20), Direction::Up);
        assert_eq!(
            point_segment_min_distance(&Known(4), &Known(5), &seg, 6.0),
            Formula::Const(true)
        );
        assert_eq!(
            point_segment_min_distance(&Known(5), &Known(5), &seg, 6.0),
            Formula::Const(false)
        );
        // Beyond the end: Chebyshev distance from (10, 26) to the segment is 6.
        assert_eq!(
            point_segment_min_distance(&Known(10), &Known(26), &seg, 6.0),
            Formula::Const(true)
        );
    }

    #[test]
    fn box_box_separation() {
        let a = Rect::from_origin(Known(0), Known(0), 10, 10);
        let b = Rect::from_origin(Known(15), Known(0), 10, 10);
        assert_eq!(box_box_min_distance(&a, &b, 5), Formula::Const(true));
        assert_eq!(box_box_min_distance(&a, &b, 6), Formula::Const(false));
    }

    #[test]
    fn segment_box_distance_diagonal() {
        // "/" segment (0,0)–(10,10); box x ∈ [20, 30], y ∈ [0, 10].
        let seg = view(&Known(0), &Known(0), &Known(10), &Known(10), Direction::UpRight);
        let rect = Rect::from_origin(Known(20), Known(0), 10, 10);
        assert_eq!(
            segment_box_min_distance(&seg, &rect, 10.0),
            Formula::Const(true)
        );
        assert_eq!(
            segment_box_min_distance(&seg, &rect, 11.0),
            Formula::Const(false)
        );
    }
}
