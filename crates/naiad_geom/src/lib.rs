//! Octilinear computational geometry over symbolic coordinates.
//!
//! Channels route in eight directions (four axis-aligned, four diagonal at
//! 45°). This crate expresses segment separation, crossing, and keep-out
//! relations as purely arithmetic predicates over [`Term`](naiad_smt::Term)
//! coordinates, so they can be handed to a decision procedure — or folded to
//! plain booleans when the geometry is concrete.

#![warn(missing_docs)]

pub mod crossing;
pub mod direction;
pub mod dispatch;
pub mod distance;
pub mod segment;

pub use direction::{Direction, Slope};
pub use dispatch::{
    channel_segments_no_cross, segment_box_keepout, segment_box_no_cross, segment_point_keepout,
    SegmentVars,
};
pub use segment::{DiagonalView, HorizontalView, Rect, SegmentView, VerticalView};
