//! Elevator state machine for the simulation
//!
//! Standalone implementation that doesn't depend on Bevy.

use std::collections::VecDeque;

use super::travel::{self, DWELL_TIME, SECONDS_PER_FLOOR};
use super::types::{ElevatorId, Rect};

/// Result of an elevator update indicating what happened this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElevatorUpdateResult {
    /// Idle with an empty queue; nothing to do
    NoTarget,
    /// Moving toward a target or dwelling at one
    InProgress,
    /// Reached the given floor this tick (the "ring" signal)
    Arrived(usize),
}

/// Motion state of an elevator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionState {
    Idle,
    MovingUp,
    MovingDown,
    /// Holding at a floor with the doors open after an arrival
    Dwelling,
}

/// An elevator in the simulation
///
/// Owns a FIFO queue of requested floors. The queue is never reordered or
/// batched; a later request may be for a floor already passed by an earlier
/// one.
#[derive(Debug, Clone)]
pub struct SimElevator {
    pub id: ElevatorId,
    /// Last floor fully arrived at; updated to the previous target on each
    /// queue pop
    pub current_floor: usize,
    /// Floor being traveled to or dwelled at; equals `current_floor` when
    /// idle with an empty queue
    pub target_floor: usize,
    pub queue: VecDeque<usize>,
    pub state: MotionState,
    /// Seconds spent dwelling since the last arrival
    pub dwell_elapsed: f32,
    /// Running estimate of seconds until free. Used only to rank elevators
    /// during dispatch; decays in real time each tick.
    pub committed_work: f32,
    /// Most recently assigned (not necessarily reached) floor, the basis for
    /// the next dispatch estimate
    pub last_assigned_floor: usize,
    /// Physical extent on the canvas; `rect.y` is the moving vertical offset
    pub rect: Rect,
    /// Canvas height of one floor
    pub floor_height: f32,
    /// Seconds to travel one floor
    pub seconds_per_floor: f32,
}

impl SimElevator {
    /// Create an elevator parked at the ground floor.
    ///
    /// `x` is the elevator's canvas column and `canvas_height` the bottom of
    /// the building, so the car starts resting on the ground.
    pub fn new(id: ElevatorId, floor_height: f32, width: f32, canvas_height: f32, x: f32) -> Self {
        Self {
            id,
            current_floor: 0,
            target_floor: 0,
            queue: VecDeque::new(),
            state: MotionState::Idle,
            dwell_elapsed: 0.0,
            committed_work: 0.0,
            last_assigned_floor: 0,
            rect: Rect::new(x, canvas_height - floor_height, width, floor_height),
            floor_height,
            seconds_per_floor: SECONDS_PER_FLOOR,
        }
    }

    /// Estimate the seconds until this elevator would be free after also
    /// serving `floor`. Pure; used by dispatch to rank candidates.
    pub fn dispatch_estimate(&self, floor: usize) -> f32 {
        travel::dispatch_estimate(
            self.committed_work,
            self.last_assigned_floor,
            floor,
            self.seconds_per_floor,
        )
    }

    /// Append `floor` to the queue and take on its estimated work.
    ///
    /// Returns the dispatch estimate, which also becomes the new committed
    /// work so consecutive assignments chain from the latest one.
    pub fn assign(&mut self, floor: usize) -> f32 {
        let estimate = self.dispatch_estimate(floor);
        self.queue.push_back(floor);
        self.last_assigned_floor = floor;
        self.committed_work = estimate;
        estimate
    }

    /// Advance the elevator by one tick.
    ///
    /// `target_top` is the canvas top offset of the current target floor,
    /// resolved by the building before this call. Transitions are evaluated
    /// in priority order: dwelling, then moving, then popping the queue.
    pub fn advance(&mut self, delta_secs: f32, target_top: f32) -> ElevatorUpdateResult {
        // Commitment is an estimate of remaining work, so it burns down in
        // real time independent of the state machine.
        if self.committed_work > 0.0 {
            self.committed_work = (self.committed_work - delta_secs).max(0.0);
        }

        match self.state {
            MotionState::Dwelling => {
                self.dwell_elapsed += delta_secs;
                if self.dwell_elapsed >= DWELL_TIME {
                    self.state = MotionState::Idle;
                    self.dwell_elapsed = 0.0;
                }
                ElevatorUpdateResult::InProgress
            }
            MotionState::MovingUp | MotionState::MovingDown => {
                let step =
                    travel::motion_delta(delta_secs, self.floor_height, self.seconds_per_floor);
                let moving_up = self.state == MotionState::MovingUp;
                let next_y = if moving_up {
                    self.rect.y - step
                } else {
                    self.rect.y + step
                };

                let reached = if moving_up {
                    next_y <= target_top
                } else {
                    next_y >= target_top
                };

                if reached {
                    // Snap to the floor rather than overshooting it.
                    self.rect.y = target_top;
                    self.state = MotionState::Dwelling;
                    self.dwell_elapsed = 0.0;
                    ElevatorUpdateResult::Arrived(self.target_floor)
                } else {
                    self.rect.y = next_y;
                    ElevatorUpdateResult::InProgress
                }
            }
            MotionState::Idle => match self.queue.pop_front() {
                Some(next) => {
                    self.current_floor = self.target_floor;
                    self.target_floor = next;
                    if next > self.current_floor {
                        self.state = MotionState::MovingUp;
                        ElevatorUpdateResult::InProgress
                    } else if next < self.current_floor {
                        self.state = MotionState::MovingDown;
                        ElevatorUpdateResult::InProgress
                    } else {
                        // Zero-distance move (revisit of the current floor):
                        // treat as an instantaneous arrival so the elevator
                        // never gets stuck waiting to cross zero height.
                        self.state = MotionState::Dwelling;
                        self.dwell_elapsed = 0.0;
                        ElevatorUpdateResult::Arrived(next)
                    }
                }
                None => ElevatorUpdateResult::NoTarget,
            },
        }
    }
}
