//! Dispatch policy and building/world integration tests

use elevator_sim::simulation::{
    select_elevator, BuildingId, BuildingSpec, DispatchOutcome, ElevatorId, MotionState, Point,
    SimBuilding, SimElevator, SimWorld,
};

fn bank_of(count: usize) -> Vec<SimElevator> {
    (0..count)
        .map(|i| {
            let mut elevator =
                SimElevator::new(ElevatorId(i), 50.0, 25.0, 900.0, 100.0 + i as f32 * 30.0);
            elevator.seconds_per_floor = 1.0;
            elevator
        })
        .collect()
}

fn single_building_world() -> SimWorld {
    SimWorld::new(&[BuildingSpec::new(5, 2)], 400.0, 500.0)
}

#[test]
fn least_busy_elevator_wins() {
    // Worked example: A free, B five seconds of committed work, both last
    // assigned to floor 0, one second per floor. A estimates 5, B 10.
    let mut elevators = bank_of(2);
    elevators[1].committed_work = 5.0;

    match select_elevator(&elevators, 3) {
        DispatchOutcome::Assigned { elevator, estimate } => {
            assert_eq!(elevator, 0);
            assert_eq!(estimate, 5.0);
        }
        other => panic!("expected assignment, got {:?}", other),
    }
}

#[test]
fn ties_go_to_the_first_elevator() {
    let elevators = bank_of(3);
    match select_elevator(&elevators, 4) {
        DispatchOutcome::Assigned { elevator, .. } => assert_eq!(elevator, 0),
        other => panic!("expected assignment, got {:?}", other),
    }
}

#[test]
fn request_for_an_already_targeted_floor_is_dropped() {
    let mut elevators = bank_of(2);
    elevators[1].target_floor = 3;
    assert_eq!(select_elevator(&elevators, 3), DispatchOutcome::AlreadyTargeted);
}

#[test]
fn empty_bank_assigns_nothing() {
    assert_eq!(select_elevator(&[], 2), DispatchOutcome::NoElevators);
}

#[test]
fn assignment_updates_queue_commitment_and_timer_together() {
    let mut building = SimBuilding::new(BuildingId(0), 10.0, 5, 2, 100.0, 50.0, 900.0);

    let outcome = building.request_floor(3).expect("valid floor");
    let (winner, estimate) = match outcome {
        DispatchOutcome::Assigned { elevator, estimate } => (elevator, estimate),
        other => panic!("expected assignment, got {:?}", other),
    };

    let elevator = &building.elevators[winner];
    assert_eq!(elevator.queue.front(), Some(&3));
    assert_eq!(elevator.last_assigned_floor, 3);
    assert_eq!(elevator.committed_work, estimate);
    assert_eq!(building.floors[3].call_timer, estimate);
}

#[test]
fn out_of_range_floor_is_a_fatal_error() {
    let mut building = SimBuilding::new(BuildingId(0), 10.0, 5, 2, 100.0, 50.0, 900.0);
    assert!(building.request_floor(5).is_ok()); // floors run 0..=5
    assert!(building.request_floor(6).is_err());
}

#[test]
fn reclick_on_a_pending_floor_changes_nothing() {
    let mut world = single_building_world();

    let first = world.request_floor(0, 3).expect("valid request");
    assert!(matches!(first, Some(DispatchOutcome::Assigned { .. })));

    let queues: Vec<usize> = world.buildings[0]
        .elevators
        .iter()
        .map(|elevator| elevator.queue.len())
        .collect();
    let commitments: Vec<f32> = world.buildings[0]
        .elevators
        .iter()
        .map(|elevator| elevator.committed_work)
        .collect();
    let timer = world.buildings[0].floors[3].call_timer;

    // The call is still pending, so the second press is swallowed
    let second = world.request_floor(0, 3).expect("valid request");
    assert_eq!(second, None);

    let queues_after: Vec<usize> = world.buildings[0]
        .elevators
        .iter()
        .map(|elevator| elevator.queue.len())
        .collect();
    let commitments_after: Vec<f32> = world.buildings[0]
        .elevators
        .iter()
        .map(|elevator| elevator.committed_work)
        .collect();

    assert_eq!(queues, queues_after);
    assert_eq!(commitments, commitments_after);
    assert_eq!(world.buildings[0].floors[3].call_timer, timer);
    assert_eq!(world.requests_assigned, 1);
    assert_eq!(world.requests_ignored, 1);
}

#[test]
fn a_targeted_floor_is_never_assigned_twice() {
    let mut world = single_building_world();

    world.request_floor(0, 4).expect("valid request");
    // One tick pops the call into the elevator's target
    world.tick(0.1).expect("tick");

    let targeting: Vec<usize> = world.buildings[0]
        .elevators
        .iter()
        .filter(|elevator| {
            elevator.target_floor == 4 && elevator.state != MotionState::Idle
        })
        .map(|elevator| elevator.id.0)
        .collect();
    assert_eq!(targeting.len(), 1);

    // Force the call timer off so the request reaches the dispatcher, which
    // must still drop it because the floor is already targeted
    world.buildings[0].floors[4].call_timer = 0.0;
    let outcome = world.request_floor(0, 4).expect("valid request");
    assert_eq!(outcome, Some(DispatchOutcome::AlreadyTargeted));

    let queued_total: usize = world.buildings[0]
        .elevators
        .iter()
        .map(|elevator| elevator.queue.len())
        .sum();
    assert_eq!(queued_total, 0);
}

#[test]
fn clicks_route_to_the_right_floor() {
    let mut world = single_building_world();

    let inside = world.buildings[0].floors[2].rect.center();
    let outcome = world.handle_click(inside).expect("click");
    assert!(matches!(outcome, Some(DispatchOutcome::Assigned { .. })));
    assert!(world.buildings[0].floors[2].call_pending());

    // Way off the canvas: nothing happens
    let outside = Point::new(-50.0, -50.0);
    assert_eq!(world.handle_click(outside).expect("click"), None);
}

#[test]
fn requests_are_building_local() {
    let mut world = SimWorld::new(
        &[BuildingSpec::new(5, 1), BuildingSpec::new(5, 1)],
        800.0,
        500.0,
    );

    world.request_floor(0, 3).expect("valid request");

    assert_eq!(world.buildings[0].elevators[0].queue.len(), 1);
    assert!(world.buildings[1].elevators[0].queue.is_empty());
    assert!(!world.buildings[1].floors[3].call_pending());
}

#[test]
fn arrivals_are_reported_with_their_source() {
    let mut world = single_building_world();
    world.request_floor(0, 2).expect("valid request");

    let mut seen = None;
    for _ in 0..500 {
        let arrivals = world.tick(0.1).expect("tick");
        if let Some(arrival) = arrivals.first() {
            seen = Some(*arrival);
            break;
        }
    }

    let arrival = seen.expect("elevator should have arrived");
    assert_eq!(arrival.building, BuildingId(0));
    assert_eq!(arrival.floor, 2);
    assert_eq!(world.arrivals_completed, 1);
}

#[test]
fn world_settles_back_to_idle() {
    let mut world = single_building_world();
    world.request_floor(0, 5).expect("valid request");
    world.request_floor(0, 1).expect("valid request");

    for _ in 0..2000 {
        world.tick(0.1).expect("tick");
    }

    for building in &world.buildings {
        for elevator in &building.elevators {
            assert!(elevator.queue.is_empty());
            assert_eq!(elevator.state, MotionState::Idle);
        }
        for floor in &building.floors {
            assert!(!floor.call_pending());
        }
    }
}

#[test]
fn seeded_worlds_generate_identical_requests() {
    let specs = [BuildingSpec::new(9, 2), BuildingSpec::new(15, 3)];
    let mut first = SimWorld::new_with_seed(&specs, 800.0, 500.0, 42);
    let mut second = SimWorld::new_with_seed(&specs, 800.0, 500.0, 42);

    for _ in 0..50 {
        first.spawn_random_request().expect("request");
        second.spawn_random_request().expect("request");
        first.tick(0.1).expect("tick");
        second.tick(0.1).expect("tick");
    }

    assert_eq!(first.requests_assigned, second.requests_assigned);
    assert_eq!(first.requests_ignored, second.requests_ignored);
}
