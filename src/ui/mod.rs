//! UI module that visualizes the simulation state using Bevy
//!
//! This module is purely for visualization - all simulation logic is in the
//! `simulation` module. The UI reads state from `SimWorld`, renders floors
//! and elevators as 2D sprites, and feeds pointer clicks back in as floor
//! calls.

mod components;
mod input;
mod spawner;
mod sync;
mod world;

use bevy::prelude::*;

pub use components::SimWorldResource;

use input::{handle_floor_click, handle_input};
use spawner::spawn_initial_visuals;
use sync::{sync_elevators, tick_simulation, update_floor_timers};
use world::setup_world;

/// Plugin to register all UI systems
pub struct ElevatorSimUIPlugin;

impl Plugin for ElevatorSimUIPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimWorldResource>()
            .insert_resource(ClearColor(Color::WHITE))
            .add_systems(
                Startup,
                (setup_world, spawn_initial_visuals.after(setup_world)),
            )
            .add_systems(FixedUpdate, tick_simulation)
            .add_systems(
                Update,
                (
                    sync_elevators,
                    update_floor_timers,
                    handle_input,
                    handle_floor_click,
                ),
            );
    }
}
