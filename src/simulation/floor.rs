//! Floor call-timer logic for the simulation

use super::types::{Point, Rect};

/// A floor in a building
///
/// The call timer counts down the estimated wait for an outstanding call.
/// While it is positive the floor ignores further clicks, which prevents the
/// same call from being dispatched to a second elevator.
#[derive(Debug, Clone)]
pub struct SimFloor {
    /// Floor index, 0 = ground
    pub number: usize,
    pub rect: Rect,
    /// Seconds until the outstanding call is considered served; <= 0 means
    /// the floor accepts new calls
    pub call_timer: f32,
}

impl SimFloor {
    pub fn new(number: usize, x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            number,
            rect: Rect::new(x, y, width, height),
            call_timer: 0.0,
        }
    }

    /// Whether a call is currently outstanding on this floor
    pub fn call_pending(&self) -> bool {
        self.call_timer > 0.0
    }

    /// Map a pointer click to a floor request.
    ///
    /// Returns the floor number when the point lands on this floor and no
    /// call is pending; a click on a pending floor is ignored.
    pub fn handle_click(&self, point: Point) -> Option<usize> {
        if self.rect.contains(point) && !self.call_pending() {
            Some(self.number)
        } else {
            None
        }
    }

    /// Count the call timer down, floored at zero.
    pub fn tick(&mut self, delta_secs: f32) {
        if self.call_timer > 0.0 {
            self.call_timer = (self.call_timer - delta_secs).max(0.0);
        }
    }

    /// Start (or extend) the call timer.
    ///
    /// An already-running timer accumulates instead of being overwritten, so
    /// a committed wait is never shortened. Dispatch normally prevents this
    /// case from occurring at all.
    pub fn arm_timer(&mut self, seconds: f32) {
        if self.call_timer <= 0.0 {
            self.call_timer = seconds;
        } else {
            self.call_timer += seconds;
        }
    }
}
