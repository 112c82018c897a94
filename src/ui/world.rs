//! World setup systems for the camera

use bevy::prelude::*;

use super::components::MainCamera;

/// System to setup the 2D camera
pub fn setup_world(mut commands: Commands) {
    commands.spawn((MainCamera, Camera2d));
}
