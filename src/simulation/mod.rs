//! Standalone elevator simulation module
//!
//! This module contains all the core dispatch and motion logic and can run
//! independently of the Bevy game engine. It can be driven headless without
//! needing to boot up the full UI.

mod building;
mod dispatch;
mod elevator;
mod floor;
mod travel;
mod types;
mod world;

// Re-export public types for external use
// These may not be used within this crate but are part of the public API
#[allow(unused_imports)]
pub use building::{ArrivalEvent, SimBuilding};
#[allow(unused_imports)]
pub use dispatch::{select_elevator, DispatchOutcome};
#[allow(unused_imports)]
pub use elevator::{ElevatorUpdateResult, MotionState, SimElevator};
#[allow(unused_imports)]
pub use floor::SimFloor;
#[allow(unused_imports)]
pub use travel::{
    dispatch_estimate, motion_delta, DISPATCH_STOP_PENALTY, DWELL_TIME, SECONDS_PER_FLOOR,
};
#[allow(unused_imports)]
pub use types::{BuildingId, BuildingSpec, ElevatorId, Point, Rect};
pub use world::{SimWorld, DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH};
