//! Normalized segment views and axis-aligned rectangles.
//!
//! A channel segment is stored as two waypoint coordinate pairs plus a
//! direction. Under a fixed direction the segment normalizes into one of
//! three views: vertical (fixed x, ordered y range), horizontal (fixed y,
//! ordered x range), or diagonal (bounding corners plus a slope sign). All
//! coordinates are terms, so a view is valid under the assumption that the
//! segment actually has that direction — the dispatcher guards every
//! predicate with the matching direction equality.

use crate::direction::{Direction, Slope};
use naiad_smt::Term;

/// An axis-aligned rectangle with ordered corner coordinates.
#[derive(Debug, Clone)]
pub struct Rect {
    /// Left edge.
    pub x_lo: Term,
    /// Right edge.
    pub x_hi: Term,
    /// Bottom edge.
    pub y_lo: Term,
    /// Top edge.
    pub y_hi: Term,
}

impl Rect {
    /// A rectangle from its lower-left corner and extent.
    pub fn from_origin(x: Term, y: Term, width: i64, height: i64) -> Self {
        Rect {
            x_lo: x.clone(),
            x_hi: Term::add(x, Term::Known(width)),
            y_lo: y.clone(),
            y_hi: Term::add(y, Term::Known(height)),
        }
    }

    /// The square of Chebyshev radius `r` around a point.
    pub fn around_point(x: &Term, y: &Term, r: i64) -> Self {
        Rect {
            x_lo: Term::sub(x.clone(), Term::Known(r)),
            x_hi: Term::add(x.clone(), Term::Known(r)),
            y_lo: Term::sub(y.clone(), Term::Known(r)),
            y_hi: Term::add(y.clone(), Term::Known(r)),
        }
    }

    /// This rectangle grown by `d` on every side.
    pub fn inflate(&self, d: i64) -> Self {
        Rect {
            x_lo: Term::sub(self.x_lo.clone(), Term::Known(d)),
            x_hi: Term::add(self.x_hi.clone(), Term::Known(d)),
            y_lo: Term::sub(self.y_lo.clone(), Term::Known(d)),
            y_hi: Term::add(self.y_hi.clone(), Term::Known(d)),
        }
    }
}

/// A vertical segment: fixed x, y spanning `y_lo..y_hi`.
#[derive(Debug, Clone)]
pub struct VerticalView {
    /// The fixed x coordinate.
    pub x: Term,
    /// Lower end.
    pub y_lo: Term,
    /// Upper end.
    pub y_hi: Term,
}

/// A horizontal segment: fixed y, x spanning `x_lo..x_hi`.
#[derive(Debug, Clone)]
pub struct HorizontalView {
    /// The fixed y coordinate.
    pub y: Term,
    /// Left end.
    pub x_lo: Term,
    /// Right end.
    pub x_hi: Term,
}

/// A 45° segment: bounding corners plus slope sign.
#[derive(Debug, Clone)]
pub struct DiagonalView {
    /// The slope sign.
    pub slope: Slope,
    /// Left corner x.
    pub x_lo: Term,
    /// Right corner x.
    pub x_hi: Term,
    /// Bottom corner y.
    pub y_lo: Term,
    /// Top corner y.
    pub y_hi: Term,
}

impl DiagonalView {
    /// The invariant line value: `y − x` for `/`, `y + x` for `\`.
    ///
    /// A positive-slope segment passes through `(x_lo, y_lo)`; a
    /// negative-slope segment through `(x_lo, y_hi)`.
    pub fn line_value(&self) -> Term {
        match self.slope {
            Slope::Positive => Term::sub(self.y_lo.clone(), self.x_lo.clone()),
            Slope::Negative => Term::add(self.x_lo.clone(), self.y_hi.clone()),
        }
    }
}

/// A segment normalized under an assumed direction.
#[derive(Debug, Clone)]
pub enum SegmentView {
    /// Up or Down.
    Vertical(VerticalView),
    /// Left or Right.
    Horizontal(HorizontalView),
    /// One of the four diagonals.
    Diagonal(DiagonalView),
}

/// Normalizes the directed segment `(x1, y1) → (x2, y2)` for `direction`.
pub fn view(x1: &Term, y1: &Term, x2: &Term, y2: &Term, direction: Direction) -> SegmentView {
    let (x1, y1, x2, y2) = (x1.clone(), y1.clone(), x2.clone(), y2.clone());
    match direction {
        Direction::Up => SegmentView::Vertical(VerticalView {
            x: x1,
            y_lo: y1,
            y_hi: y2,
        }),
        Direction::Down => SegmentView::Vertical(VerticalView {
            x: x1,
            y_lo: y2,
            y_hi: y1,
        }),
        Direction::Right => SegmentView::Horizontal(HorizontalView {
            y: y1,
            x_lo: x1,
            x_hi: x2,
        }),
        Direction::Left => SegmentView::Horizontal(HorizontalView {
            y: y1,
            x_lo: x2,
            x_hi: x1,
        }),
        Direction::UpRight => SegmentView::Diagonal(DiagonalView {
            slope: Slope::Positive,
            x_lo: x1,
            x_hi: x2,
            y_lo: y1,
            y_hi: y2,
        }),
        Direction::DownLeft => SegmentView::Diagonal(DiagonalView {
            slope: Slope::Positive,
            x_lo: x2,
            x_hi: x1,
            y_lo: y2,
            y_hi: y1,
        }),
        Direction::UpLeft => SegmentView::Diagonal(DiagonalView {
            slope: Slope::Negative,
            x_lo: x2,
            x_hi: x1,
            y_lo: y1,
            y_hi: y2,
        }),
        Direction::DownRight => SegmentView::Diagonal(DiagonalView {
            slope: Slope::Negative,
            x_lo: x1,
            x_hi: x2,
            y_lo: y2,
            y_hi: y1,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn known(v: i64) -> Term {
        Term::Known(v)
    }

    #[test]
    fn vertical_orders_endpoints() {
        let v = view(&known(3), &known(10), &known(3), &known(2), Direction::Down);
        match v {
            SegmentView::Vertical(v) => {
                assert_eq!(v.y_lo, known(2));
                assert_eq!(v.y_hi, known(10));
            }
            other => panic!("expected vertical, got {other:?}"),
        }
    }

    #[test]
    fn horizontal_orders_endpoints() {
        let v = view(&known(8), &known(1), &known(-2), &known(1), Direction::Left);
        match v {
            SegmentView::Horizontal(h) => {
                assert_eq!(h.x_lo, known(-2));
                assert_eq!(h.x_hi, known(8));
            }
            other => panic!("expected horizontal, got {other:?}"),
        }
    }

    #[test]
    fn positive_diagonal_line_value() {
        let v = view(&known(5), &known(7), &known(9), &known(11), Direction::UpRight);
        match v {
            SegmentView::Diagonal(d) => {
                assert_eq!(d.slope, Slope::Positive);
                assert_eq!(d.line_value(), known(2));
            }
            other => panic!("expected diagonal, got {other:?}"),
        }
    }

    #[test]
    fn negative_diagonal_line_value() {
        // (2, 0) → (0, 2) runs up-left: corners x ∈ [0, 2], y ∈ [0, 2], x + y = 2.
        let v = view(&known(2), &known(0), &known(0), &known(2), Direction::UpLeft);
        match v {
            SegmentView::Diagonal(d) => {
                assert_eq!(d.slope, Slope::Negative);
                assert_eq!(d.line_value(), known(2));
            }
            other => panic!("expected diagonal, got {other:?}"),
        }
    }

    #[test]
    fn rect_constructors() {
        let r = Rect::from_origin(known(1), known(2), 10, 20);
        assert_eq!(r.x_hi, known(11));
        assert_eq!(r.y_hi, known(22));
        let s = Rect::around_point(&known(0), &known(0), 3).inflate(1);
        assert_eq!(s.x_lo, known(-4));
        assert_eq!(s.y_hi, known(4));
    }
}
