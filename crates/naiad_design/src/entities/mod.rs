//! Domain entities and their specified → encoded → result lifecycle.
//!
//! Each entity type is three separate structs linked by conversion
//! functions: the specification (user input, never mutated), the encoded
//! form (symbolic variables plus local clauses), and the result (concrete
//! values extracted from a satisfying model). Transitions are strictly
//! forward; the only failure mode is a fatal input error at encode time.

mod channel;
mod chip;
mod clamp;
mod exclusion;
mod module;
mod pin;

pub use channel::{ChannelResult, ChannelSpec, EncodedChannel, PortRef, SegmentResult};
pub use chip::Chip;
pub use clamp::Clamp;
pub use exclusion::{
    DynamicExclusionSpec, EncodedExclusion, ExclusionKind, ExclusionResult, StaticExclusionSpec,
};
pub use module::{
    same_face, EncodedModule, ModuleResult, ModuleSpec, Orientation, Placement, PortGrid,
};
pub use pin::{EncodedPin, PinResult, PinSpec};
