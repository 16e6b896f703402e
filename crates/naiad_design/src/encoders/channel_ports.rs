//! Channel-to-port binding.

use crate::context::EncodeCtx;
use crate::entities::{same_face, EncodedChannel, EncodedModule, PortRef};
use crate::error::EncodeError;
use naiad_smt::{BoundedEnum, Constraint, Formula};

/// Pins the channel's first and last waypoints to the computed port
/// positions of its endpoint modules, and ties the two modules to a common
/// chip face.
///
/// Fatal input errors: an endpoint referencing a module that does not
/// exist, a port index outside the module's grid, or two endpoints fixed to
/// opposite chip faces (ports on opposite faces cannot be connected).
pub fn encode(
    ctx: &mut EncodeCtx<'_>,
    index: usize,
    channel: &EncodedChannel,
    modules: &[EncodedModule],
) -> Result<Vec<Constraint>, EncodeError> {
    let from = lookup(index, &channel.from, modules)?;
    let to = lookup(index, &channel.to, modules)?;

    if let (BoundedEnum::Value(a), BoundedEnum::Value(b)) = (&from.placement, &to.placement) {
        if a != b {
            return Err(EncodeError::CrossFaceChannel { channel: index });
        }
    }

    let mut out = Vec::new();
    let id = channel.id;

    let (fx, fy) = from.port_position(channel.from.port_x, channel.from.port_y);
    let (first_x, first_y) = channel.waypoints.first().expect("waypoints nonempty").clone();
    ctx.constrain(
        &mut out,
        &format!("c{id}_from"),
        Formula::and(vec![
            Formula::eq(first_x, fx),
            Formula::eq(first_y, fy),
        ]),
    );

    let (tx, ty) = to.port_position(channel.to.port_x, channel.to.port_y);
    let (last_x, last_y) = channel.waypoints.last().expect("waypoints nonempty").clone();
    ctx.constrain(
        &mut out,
        &format!("c{id}_to"),
        Formula::and(vec![Formula::eq(last_x, tx), Formula::eq(last_y, ty)]),
    );

    // Endpoints with open placements must still land on one common face.
    ctx.constrain(
        &mut out,
        &format!("c{id}_face"),
        same_face(&from.placement, &to.placement),
    );

    Ok(out)
}

fn lookup<'m>(
    index: usize,
    port: &PortRef,
    modules: &'m [EncodedModule],
) -> Result<&'m EncodedModule, EncodeError> {
    let module = modules
        .get(port.module)
        .ok_or(EncodeError::UnknownChannelModule {
            channel: index,
            module: port.module,
        })?;
    if !module.port_in_grid(port.port_x, port.port_y) {
        return Err(EncodeError::PortOutOfBounds {
            channel: index,
            module: port.module,
            port_x: port.port_x,
            port_y: port.port_y,
            ports_x: module.grid.ports_x,
            ports_y: module.grid.ports_y,
        });
    }
    Ok(module)
}
