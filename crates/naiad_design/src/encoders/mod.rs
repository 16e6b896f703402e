//! Constraint encoders: one module per geometric relationship.
//!
//! Every encoder has the shape `(ctx, encoded entities…) → Vec<Constraint>`
//! and is invoked by [`Input::encode`](crate::Input::encode) over the proper
//! cross-product of entities. Encoders never mutate entities; labels come
//! from the context's deterministic generator.

pub mod channel_channel;
pub mod channel_chip;
pub mod channel_geometry;
pub mod channel_ports;
pub mod exclusions;
pub mod module_chip;
pub mod module_module;
pub mod paper;
pub mod pins;
pub mod waypoints;
