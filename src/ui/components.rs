//! UI components and resources for linking Bevy entities to simulation state

use bevy::prelude::*;

use crate::simulation::{
    BuildingId, ElevatorId, Rect, SimWorld, DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH,
};

/// Resource wrapper for the simulation world
#[derive(Resource)]
pub struct SimWorldResource(pub SimWorld);

impl Default for SimWorldResource {
    fn default() -> Self {
        Self(SimWorld::create_test_world())
    }
}

/// Marker component for the main camera
#[derive(Component)]
pub struct MainCamera;

/// Links a Bevy entity to a simulation elevator
#[derive(Component)]
pub struct ElevatorLink {
    pub building: BuildingId,
    pub elevator: ElevatorId,
}

/// Links a Bevy entity to a simulation floor
#[derive(Component)]
pub struct FloorLink {
    pub building: BuildingId,
    pub floor: usize,
}

/// Marker for the text entity showing a floor's remaining call timer
#[derive(Component)]
pub struct FloorTimerText;

/// Convert a simulation rect (canvas coordinates, top-left origin, y down)
/// into a Bevy world translation of its center (origin centered, y up).
pub fn rect_center_translation(rect: &Rect, z: f32) -> Vec3 {
    let center = rect.center();
    Vec3::new(
        center.x - DEFAULT_CANVAS_WIDTH / 2.0,
        DEFAULT_CANVAS_HEIGHT / 2.0 - center.y,
        z,
    )
}
