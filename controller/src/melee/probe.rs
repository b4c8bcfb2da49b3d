use crate::types::{AimTransform, ProbeRay};

/// Number of rays in the melee probe fan.
pub const PROBE_COUNT: usize = 9;

/// Fan layout in scan order: `(row, column)` signs along aim up and aim right.
///
/// Rows: center, upper, lower. Within a row: right, left, center.
const FAN_LAYOUT: [(f32, f32); PROBE_COUNT] = [
    (0.0, 1.0),
    (0.0, -1.0),
    (0.0, 0.0),
    (1.0, 1.0),
    (1.0, -1.0),
    (1.0, 0.0),
    (-1.0, 1.0),
    (-1.0, -1.0),
    (-1.0, 0.0),
];

/// Index of the straight-ahead ray within the fan.
pub const CENTER_RAY: usize = 2;

/// Build the 3x3 cone of melee probes from the aim transform.
///
/// Each outer ray starts `origin_offset` away from the aim position along right/up and is tilted
/// by `spacing` along the same axes relative to forward. The array is rebuilt every tick.
pub fn build_probe_fan(aim: &AimTransform, spacing: f32, origin_offset: f32) -> [ProbeRay; PROBE_COUNT] {
    let right = aim.right();
    let up = aim.up();
    let forward = aim.forward();

    FAN_LAYOUT.map(|(row, col)| {
        let lateral = right * col + up * row;
        ProbeRay::new(
            aim.position + lateral * origin_offset,
            forward + lateral * spacing,
        )
    })
}
