//! Elevator selection for incoming floor calls
//!
//! Greedy nearest-available policy: the elevator with the smallest dispatch
//! estimate wins, ties going to the first one in iteration order. The caller
//! applies the side effects so a request either fully commits or changes
//! nothing.

use log::debug;
use ordered_float::OrderedFloat;

use super::elevator::SimElevator;

/// Outcome of arbitrating a floor request among a building's elevators
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DispatchOutcome {
    /// The elevator at this index takes the call, with the winning estimate
    Assigned { elevator: usize, estimate: f32 },
    /// Some elevator already has this floor as its current target; the whole
    /// request is dropped. Floors buried deeper in a queue are not detected,
    /// so two elevators can still end up serving the same floor eventually.
    AlreadyTargeted,
    /// Building has no elevators; nothing to assign
    NoElevators,
}

/// Pick the elevator to serve `requested_floor`.
///
/// Pure with respect to the elevators; returns the winner's index without
/// mutating anything. The caller must have already verified that the floor
/// has no pending call.
pub fn select_elevator(elevators: &[SimElevator], requested_floor: usize) -> DispatchOutcome {
    if elevators
        .iter()
        .any(|elevator| elevator.target_floor == requested_floor)
    {
        debug!(
            "floor {} already targeted by an elevator, dropping request",
            requested_floor
        );
        return DispatchOutcome::AlreadyTargeted;
    }

    // min_by_key keeps the first of equally ranked elevators, which makes
    // tie-breaking stable and deterministic.
    match elevators
        .iter()
        .enumerate()
        .min_by_key(|(_, elevator)| OrderedFloat(elevator.dispatch_estimate(requested_floor)))
    {
        Some((index, elevator)) => DispatchOutcome::Assigned {
            elevator: index,
            estimate: elevator.dispatch_estimate(requested_floor),
        },
        None => DispatchOutcome::NoElevators,
    }
}
