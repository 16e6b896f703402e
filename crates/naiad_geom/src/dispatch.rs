//! Direction-dispatched predicates over encoded channel segments.
//!
//! A segment's direction is usually a solver unknown, so every geometric
//! relation becomes a family of implications, one per direction (or ordered
//! direction pair): "if the segment(s) run this way, this predicate holds."
//! Directions with no conflict shape contribute no clause.

use crate::crossing::{
    diagonal_box_no_cross, diagonal_diagonal_no_cross, horizontal_box_no_cross,
    horizontal_diagonal_no_cross, vertical_box_no_cross, vertical_diagonal_no_cross,
    vertical_horizontal_no_cross,
};
use crate::direction::Direction;
use crate::distance::{point_segment_min_distance, segment_box_min_distance};
use crate::segment::{view, Rect, SegmentView};
use naiad_smt::{BoundedEnum, Formula, SolverEnum, Term};

/// The solver handles of one encoded channel segment.
#[derive(Debug, Clone)]
pub struct SegmentVars {
    /// Start waypoint x.
    pub x1: Term,
    /// Start waypoint y.
    pub y1: Term,
    /// End waypoint x.
    pub x2: Term,
    /// End waypoint y.
    pub y2: Term,
    /// Whether the segment is in use.
    pub active: Formula,
    /// The segment direction.
    pub direction: BoundedEnum<Direction>,
}

impl SegmentVars {
    /// The segment normalized under an assumed direction.
    pub fn view(&self, direction: Direction) -> SegmentView {
        view(&self.x1, &self.y1, &self.x2, &self.y2, direction)
    }
}

/// The no-cross predicate for one ordered direction pair, if the pair can
/// conflict. Parallel axis-aligned segments (same axis, either orientation)
/// need no clause: overlap along a shared line is not a crossing.
pub fn directed_no_cross(
    a: &SegmentVars,
    da: Direction,
    b: &SegmentVars,
    db: Direction,
) -> Option<Formula> {
    match (a.view(da), b.view(db)) {
        (SegmentView::Vertical(_), SegmentView::Vertical(_)) => None,
        (SegmentView::Horizontal(_), SegmentView::Horizontal(_)) => None,
        (SegmentView::Vertical(v), SegmentView::Horizontal(h))
        | (SegmentView::Horizontal(h), SegmentView::Vertical(v)) => {
            Some(vertical_horizontal_no_cross(&v, &h))
        }
        (SegmentView::Vertical(v), SegmentView::Diagonal(d))
        | (SegmentView::Diagonal(d), SegmentView::Vertical(v)) => {
            Some(vertical_diagonal_no_cross(&v, &d))
        }
        (SegmentView::Horizontal(h), SegmentView::Diagonal(d))
        | (SegmentView::Diagonal(d), SegmentView::Horizontal(h)) => {
            Some(horizontal_diagonal_no_cross(&h, &d))
        }
        (SegmentView::Diagonal(p), SegmentView::Diagonal(q)) => {
            Some(diagonal_diagonal_no_cross(&p, &q))
        }
    }
}

/// Two channel segments do not cross, whatever directions they take.
///
/// Emits one implication per conflicting ordered direction pair, guarded by
/// both activity flags and both direction selections. With concrete
/// directions and coordinates the whole conjunction folds to a constant.
pub fn channel_segments_no_cross(a: &SegmentVars, b: &SegmentVars) -> Formula {
    let mut clauses = Vec::new();
    for &da in Direction::ALL {
        for &db in Direction::ALL {
            if let Some(pred) = directed_no_cross(a, da, b, db) {
                let guard = Formula::and(vec![
                    a.active.clone(),
                    b.active.clone(),
                    a.direction.equals(da),
                    b.direction.equals(db),
                ]);
                clauses.push(Formula::implies(guard, pred));
            }
        }
    }
    Formula::and(clauses)
}

/// An active segment does not cross the rectangle, whatever its direction.
pub fn segment_box_no_cross(seg: &SegmentVars, rect: &Rect) -> Formula {
    per_direction(seg, |segview| match segview {
        SegmentView::Vertical(v) => vertical_box_no_cross(v, rect),
        SegmentView::Horizontal(h) => horizontal_box_no_cross(h, rect),
        SegmentView::Diagonal(d) => diagonal_box_no_cross(d, rect),
    })
}

/// An active segment keeps distance `d` from the rectangle, whatever its
/// direction.
pub fn segment_box_keepout(seg: &SegmentVars, rect: &Rect, d: f64) -> Formula {
    per_direction(seg, |segview| segment_box_min_distance(segview, rect, d))
}

/// An active segment keeps distance `d` from the point, whatever its
/// direction.
pub fn segment_point_keepout(seg: &SegmentVars, px: &Term, py: &Term, d: f64) -> Formula {
    per_direction(seg, |segview| point_segment_min_distance(px, py, segview, d))
}

fn per_direction(seg: &SegmentVars, pred: impl Fn(&SegmentView) -> Formula) -> Formula {
    let mut clauses = Vec::new();
    for &dir in Direction::ALL {
        let guard = Formula::and(vec![seg.active.clone(), seg.direction.equals(dir)]);
        clauses.push(Formula::implies(guard, pred(&seg.view(dir))));
    }
    Formula::and(clauses)
}
