//! Systems for syncing Bevy entities with simulation state

use bevy::prelude::*;
use log::{error, info};

use super::components::{
    rect_center_translation, ElevatorLink, FloorLink, FloorTimerText, SimWorldResource,
};

/// System to run the simulation tick and announce arrivals
pub fn tick_simulation(time: Res<Time>, mut sim_world: ResMut<SimWorldResource>) {
    match sim_world.0.tick(time.delta_secs()) {
        Ok(arrivals) => {
            for arrival in arrivals {
                // The "ring" on arrival; an audio collaborator would hook in here
                info!(
                    "ding: elevator {:?} of building {:?} reached floor {}",
                    arrival.elevator, arrival.building, arrival.floor
                );
            }
        }
        Err(err) => error!("simulation tick failed: {err:#}"),
    }
}

/// System to move elevator sprites to their simulated positions
pub fn sync_elevators(
    sim_world: Res<SimWorldResource>,
    mut elevator_query: Query<(&ElevatorLink, &mut Transform)>,
) {
    let world = &sim_world.0;

    for (link, mut transform) in elevator_query.iter_mut() {
        let elevator = world
            .buildings
            .get(link.building.0)
            .and_then(|building| building.elevators.get(link.elevator.0));

        if let Some(elevator) = elevator {
            transform.translation = rect_center_translation(&elevator.rect, 2.0);
        }
    }
}

/// System to show the remaining call wait on each floor
pub fn update_floor_timers(
    sim_world: Res<SimWorldResource>,
    mut timer_query: Query<(&FloorLink, &mut Text2d), With<FloorTimerText>>,
) {
    let world = &sim_world.0;

    for (link, mut text) in timer_query.iter_mut() {
        let floor = world
            .buildings
            .get(link.building.0)
            .and_then(|building| building.floors.get(link.floor));

        if let Some(floor) = floor {
            if floor.call_pending() {
                *text = Text2d::new(format!("{:.1}", floor.call_timer));
            } else if !text.is_empty() {
                *text = Text2d::new("");
            }
        }
    }
}
