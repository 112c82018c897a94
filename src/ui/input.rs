//! Input handling systems

use bevy::prelude::*;
use log::error;

use super::components::SimWorldResource;
use crate::simulation::Point;

/// Handle basic keyboard input
pub fn handle_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut exit: MessageWriter<AppExit>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        exit.write(AppExit::Success);
    }
}

/// Translate a left click into a floor call.
///
/// Window logical coordinates share the simulation's canvas convention
/// (top-left origin, y down), so the cursor position maps straight through.
pub fn handle_floor_click(
    mouse: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    mut sim_world: ResMut<SimWorldResource>,
) {
    if !mouse.just_pressed(MouseButton::Left) {
        return;
    }

    let Ok(window) = windows.single() else {
        return;
    };

    let Some(cursor_position) = window.cursor_position() else {
        return;
    };

    let point = Point::new(cursor_position.x, cursor_position.y);
    if let Err(err) = sim_world.0.handle_click(point) {
        error!("floor click failed: {err:#}");
    }
}
