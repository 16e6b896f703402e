//! Physical constants and manufacturing units, in micrometers.

/// Connector pitch must be a positive multiple of this unit.
pub const PITCH_UNIT: i64 = 1_500;

/// Module width and height must be positive multiples of this unit.
pub const MODULE_DIM_UNIT: i64 = 15_000;

/// Default number of fixation pins per module.
pub const DEFAULT_PIN_COUNT: u32 = 3;

/// Default pin radius.
pub const DEFAULT_PIN_RADIUS: i64 = 1_000;

/// Width of the clamp band around a module within which pins must sit.
pub const CLAMP_BAND: i64 = 2_000;

/// Fixed spacing added around a pin's exclusion square.
pub const PIN_KEEPOUT: i64 = 1_500;

/// Standard chip size bands `((width_min, width_max), (height_min, height_max))`.
///
/// Microscope slide, large plate, and square coupon formats.
pub const CHIP_SIZE_BANDS: &[((i64, i64), (i64, i64))] = &[
    ((74_000, 76_500), (24_000, 26_000)),
    ((127_000, 128_000), (85_000, 86_000)),
    ((50_000, 52_000), (50_000, 52_000)),
];
