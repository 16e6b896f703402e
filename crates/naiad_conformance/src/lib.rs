//! Conformance test helpers for the Naiad engine.
//!
//! Provides shared fixtures (micro-scale modules whose ports land on round
//! coordinates, channel builders) and a model-evaluation harness: a
//! satisfying model demonstrates satisfiability by making every clause
//! true; a concrete infeasibility shows up as named violated clauses.

#![warn(missing_docs)]

use naiad_design::{
    ChannelSpec, Chip, Input, ModuleSpec, Orientation, Placement, PortRef,
};
use naiad_geom::Direction;
use naiad_smt::{Constraint, Model, SolverEnum, Value};

/// Labels of the clauses a model violates (empty means the model satisfies
/// the whole set).
pub fn violated_labels(constraints: &[Constraint], model: &Model) -> Vec<String> {
    constraints
        .iter()
        .filter(|c| !c.formula.eval(model).expect("closed model"))
        .map(|c| c.label.clone())
        .collect()
}

/// A micro-scale module: 40×40 with pitch 10, so its 3×3 port grid starts
/// 10 in from each edge. Fixed to the given position on the top face with
/// zero spacing, upright, and no pins.
pub fn micro_module(x: i64, y: i64) -> ModuleSpec {
    ModuleSpec {
        width: 40,
        height: 40,
        pitch: 10,
        spacing: 0,
        position: Some((x, y)),
        orientation: Some(Orientation::Up),
        placement: Some(Placement::Top),
        pin_count: 0,
    }
}

/// A micro-scale module fixed to the given chip face.
pub fn micro_module_on(x: i64, y: i64, placement: Placement) -> ModuleSpec {
    ModuleSpec {
        placement: Some(placement),
        ..micro_module(x, y)
    }
}

/// A width-4, zero-spacing channel between two ports.
pub fn micro_channel(max_segments: u32, from: PortRef, to: PortRef) -> ChannelSpec {
    ChannelSpec {
        width: 4,
        spacing: 0,
        max_segments,
        from,
        to,
        fixed_waypoints: Vec::new(),
        layer: None,
        max_length: None,
        exact_length: None,
    }
}

/// A port reference.
pub fn port(module: usize, port_x: u32, port_y: u32) -> PortRef {
    PortRef {
        module,
        port_x,
        port_y,
    }
}

/// An empty design on a 10 000 × 10 000 chip centered at the origin.
pub fn micro_chip_input() -> Input {
    Input::new(Chip::centered(10_000, 10_000))
}

/// Writes one channel's concrete route into a model: waypoint coordinates,
/// per-segment activity and direction, and the total length.
pub fn assign_route(
    model: &mut Model,
    channel: u32,
    waypoints: &[(i64, i64)],
    segments: &[Option<Direction>],
    length: i64,
) {
    for (i, (x, y)) in waypoints.iter().enumerate() {
        model.insert(format!("c{channel}_wp{i}_x"), Value::Int(*x));
        model.insert(format!("c{channel}_wp{i}_y"), Value::Int(*y));
    }
    for (i, segment) in segments.iter().enumerate() {
        model.insert(
            format!("c{channel}_seg{i}_active"),
            Value::Bool(segment.is_some()),
        );
        let direction = segment.unwrap_or(Direction::Up);
        model.insert(
            format!("c{channel}_seg{i}_dir"),
            Value::BitVec(direction.index() as u64),
        );
    }
    model.insert(format!("c{channel}_len"), Value::Int(length));
}
