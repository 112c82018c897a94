//! Elevator Simulation Library
//!
//! A multi-building elevator dispatch simulation that can run independently
//! or with a Bevy UI.

pub mod simulation;

#[cfg(feature = "ui")]
pub mod ui;
