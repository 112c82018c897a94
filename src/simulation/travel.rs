//! Travel model for the elevator simulation
//!
//! Pure functions shared by dispatch ranking and motion updates. Dispatch
//! works in floor counts, motion works in canvas height, and neither is ever
//! recomputed retroactively once committed.

/// Seconds an elevator takes to travel one floor
pub const SECONDS_PER_FLOOR: f32 = 0.5;

/// Seconds an elevator dwells at a floor after arriving ("door open" time)
pub const DWELL_TIME: f32 = 2.0;

/// Flat penalty added to every dispatch estimate, modeling the mandatory
/// stop and dwell at the newly committed floor
pub const DISPATCH_STOP_PENALTY: f32 = 2.0;

/// Estimate the seconds until an elevator would be free after also serving
/// `requested_floor`.
///
/// `last_assigned_floor` is the most recently assigned (not necessarily
/// reached) target, so back-to-back assignments chain correctly. The result
/// is a ranking estimate only; actual motion never consults it.
pub fn dispatch_estimate(
    committed_work: f32,
    last_assigned_floor: usize,
    requested_floor: usize,
    seconds_per_floor: f32,
) -> f32 {
    let floors = last_assigned_floor.abs_diff(requested_floor) as f32;
    committed_work + floors * seconds_per_floor + DISPATCH_STOP_PENALTY
}

/// Height displacement covered in `delta_secs` by an elevator moving at
/// `seconds_per_floor`, where one floor spans `floor_height` canvas units.
///
/// Applied directly to the elevator's vertical offset; arrival is detected
/// positionally, not by counting floors crossed.
pub fn motion_delta(delta_secs: f32, floor_height: f32, seconds_per_floor: f32) -> f32 {
    delta_secs * floor_height / seconds_per_floor
}
