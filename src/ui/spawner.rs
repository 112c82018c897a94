//! Systems for spawning visual entities from simulation state

use bevy::prelude::*;

use super::components::{rect_center_translation, ElevatorLink, FloorLink, FloorTimerText, SimWorldResource};
use crate::simulation::{SimBuilding, SimElevator, SimFloor};

const FLOOR_COLOR: Color = Color::srgb(0.75, 0.75, 0.75);
const FLOOR_LINE_COLOR: Color = Color::srgb(0.0, 0.0, 0.0);
const ELEVATOR_COLOR: Color = Color::srgb(0.55, 0.15, 0.15);
const TIMER_COLOR: Color = Color::srgb(0.0, 0.6, 0.0);

/// System to create initial visual entities from simulation state
pub fn spawn_initial_visuals(mut commands: Commands, sim_world: Res<SimWorldResource>) {
    let world = &sim_world.0;

    for building in &world.buildings {
        for floor in &building.floors {
            spawn_floor(&mut commands, building, floor);
        }
        for elevator in &building.elevators {
            spawn_elevator(&mut commands, building, elevator);
        }
    }
}

fn spawn_floor(commands: &mut Commands, building: &SimBuilding, floor: &SimFloor) {
    let rect = floor.rect;
    commands
        .spawn((
            FloorLink {
                building: building.id,
                floor: floor.number,
            },
            Sprite::from_color(FLOOR_COLOR, Vec2::new(rect.width, rect.height)),
            Transform::from_translation(rect_center_translation(&rect, 0.0)),
        ))
        .with_children(|parent| {
            // Separator line along the bottom edge of the floor
            parent.spawn((
                Sprite::from_color(FLOOR_LINE_COLOR, Vec2::new(rect.width, 2.0)),
                Transform::from_xyz(0.0, -rect.height / 2.0 + 1.0, 0.5),
            ));

            parent.spawn((
                Text2d::new(floor.number.to_string()),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::BLACK),
                Transform::from_xyz(0.0, 0.0, 1.0),
            ));

            // Remaining wait for an outstanding call, kept in sync each frame
            parent.spawn((
                FloorTimerText,
                FloorLink {
                    building: building.id,
                    floor: floor.number,
                },
                Text2d::new(""),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(TIMER_COLOR),
                Transform::from_xyz(-rect.width / 2.0 + 24.0, 0.0, 1.0),
            ));
        });
}

fn spawn_elevator(commands: &mut Commands, building: &SimBuilding, elevator: &SimElevator) {
    let rect = elevator.rect;
    commands.spawn((
        ElevatorLink {
            building: building.id,
            elevator: elevator.id,
        },
        Sprite::from_color(ELEVATOR_COLOR, Vec2::new(rect.width, rect.height)),
        Transform::from_translation(rect_center_translation(&rect, 2.0)),
    ));
}
