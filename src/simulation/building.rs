//! A building: floors, elevators, and the per-tick driver that connects them

use anyhow::{Context, Result};
use log::debug;

use super::dispatch::{self, DispatchOutcome};
use super::elevator::{ElevatorUpdateResult, SimElevator};
use super::floor::SimFloor;
use super::types::{BuildingId, ElevatorId, Point};

/// An elevator reached its target floor; the simulation's "ring" signal.
///
/// Consumed by rendering/audio collaborators; carries no payload beyond who
/// arrived where.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrivalEvent {
    pub building: BuildingId,
    pub elevator: ElevatorId,
    pub floor: usize,
}

/// A building with a column of floors and a bank of elevators
///
/// Floors are indexed from the ground up (0..=floor_count) and laid out from
/// the bottom of the canvas; elevators park at the ground floor.
#[derive(Debug, Clone)]
pub struct SimBuilding {
    pub id: BuildingId,
    pub floors: Vec<SimFloor>,
    pub elevators: Vec<SimElevator>,
}

impl SimBuilding {
    /// Build the floor and elevator layout.
    ///
    /// `x` is the building's left edge on the canvas; elevators occupy
    /// half-floor-width slots to the right of the floor column.
    pub fn new(
        id: BuildingId,
        x: f32,
        floor_count: usize,
        elevator_count: usize,
        floor_width: f32,
        floor_height: f32,
        canvas_height: f32,
    ) -> Self {
        let elevators = (0..elevator_count)
            .map(|i| {
                SimElevator::new(
                    ElevatorId(i),
                    floor_height,
                    floor_width / 2.0,
                    canvas_height,
                    floor_width * (i as f32 / 2.0 + 1.0) + x,
                )
            })
            .collect();

        let floors = (0..=floor_count)
            .map(|i| {
                SimFloor::new(
                    i,
                    x,
                    canvas_height - (i as f32 + 1.0) * floor_height,
                    floor_width,
                    floor_height,
                )
            })
            .collect();

        Self {
            id,
            floors,
            elevators,
        }
    }

    /// Map a pointer click to a floor request.
    ///
    /// Clicks that miss every floor, or land on a floor with a pending call,
    /// are benign no-ops and return `None`.
    pub fn handle_click(&mut self, point: Point) -> Result<Option<DispatchOutcome>> {
        let clicked = self
            .floors
            .iter()
            .find_map(|floor| floor.handle_click(point));

        match clicked {
            Some(number) => self.request_floor(number).map(Some),
            None => Ok(None),
        }
    }

    /// Dispatch a call on `floor` to the best elevator.
    ///
    /// On assignment the elevator's queue, commitment, and the floor's call
    /// timer all update together; on any other outcome nothing changes. An
    /// out-of-range floor is a programming error and fails fast.
    pub fn request_floor(&mut self, floor: usize) -> Result<DispatchOutcome> {
        anyhow::ensure!(
            floor < self.floors.len(),
            "floor {} out of range for building {:?} with {} floors",
            floor,
            self.id,
            self.floors.len()
        );

        let outcome = dispatch::select_elevator(&self.elevators, floor);

        if let DispatchOutcome::Assigned { elevator, estimate } = outcome {
            let chosen = &mut self.elevators[elevator];
            let assigned_estimate = chosen.assign(floor);
            debug!(
                "building {:?}: floor {} assigned to elevator {:?}, ready in {:.1}s",
                self.id, floor, chosen.id, assigned_estimate
            );
            self.floors[floor].arm_timer(estimate);
        }

        Ok(outcome)
    }

    /// Advance every elevator and floor timer by one tick.
    ///
    /// All updates observe the same `delta_secs`, keeping elevator positions
    /// and floor timers consistent within a tick. Returns the arrivals that
    /// occurred.
    pub fn tick(&mut self, delta_secs: f32) -> Result<Vec<ArrivalEvent>> {
        let mut arrivals = Vec::new();

        for elevator in &mut self.elevators {
            let target_top = self
                .floors
                .get(elevator.target_floor)
                .with_context(|| {
                    format!(
                        "elevator {:?} targets floor {} outside building {:?}",
                        elevator.id, elevator.target_floor, self.id
                    )
                })?
                .rect
                .top();

            if let ElevatorUpdateResult::Arrived(floor) = elevator.advance(delta_secs, target_top)
            {
                debug!(
                    "building {:?}: elevator {:?} arrived at floor {}",
                    self.id, elevator.id, floor
                );
                arrivals.push(ArrivalEvent {
                    building: self.id,
                    elevator: elevator.id,
                    floor,
                });
            }
        }

        for floor in &mut self.floors {
            floor.tick(delta_secs);
        }

        Ok(arrivals)
    }
}
