//! Main simulation world that ties everything together
//!
//! This is the entry point for running the elevator simulation without any
//! Bevy dependencies.

use anyhow::{Context, Result};
use log::info;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use super::building::{ArrivalEvent, SimBuilding};
use super::dispatch::DispatchOutcome;
use super::types::{BuildingId, BuildingSpec, Point};

/// Default canvas size, matching the windowed UI
pub const DEFAULT_CANVAS_WIDTH: f32 = 1700.0;
pub const DEFAULT_CANVAS_HEIGHT: f32 = 900.0;

/// The multi-building simulation world
///
/// Buildings are fully independent: requests and elevators never cross
/// between them. All entities are created once from configuration and live
/// for the lifetime of the world.
pub struct SimWorld {
    pub buildings: Vec<SimBuilding>,

    /// Accumulated simulation time
    pub time: f32,

    /// Optional seeded RNG for reproducible simulations
    rng: Option<StdRng>,

    /// Requests that ended with an elevator assignment
    pub requests_assigned: usize,
    /// Requests dropped as benign no-ops (floor pending or already targeted)
    pub requests_ignored: usize,
    /// Total elevator arrivals across all buildings
    pub arrivals_completed: usize,
}

impl SimWorld {
    fn new_internal(
        specs: &[BuildingSpec],
        canvas_width: f32,
        canvas_height: f32,
        rng: Option<StdRng>,
    ) -> Self {
        // Each building occupies one slot for its floor column plus half a
        // slot per elevator; the tallest building sets the shared floor
        // height so every building fits the canvas.
        let total_slots: f32 = specs
            .iter()
            .map(|spec| spec.elevator_count as f32 / 2.0 + 1.0)
            .sum();
        let max_floors = specs
            .iter()
            .map(|spec| spec.floor_count)
            .max()
            .unwrap_or(0) as f32
            + 1.0;

        let floor_width = (canvas_width - 20.0) / total_slots;
        let floor_height = (canvas_height - 10.0) / max_floors;

        let mut buildings = Vec::with_capacity(specs.len());
        let mut slot = 0.0;
        for (index, spec) in specs.iter().enumerate() {
            let x = canvas_width / total_slots * slot + 10.0;
            buildings.push(SimBuilding::new(
                BuildingId(index),
                x,
                spec.floor_count,
                spec.elevator_count,
                floor_width,
                floor_height,
                canvas_height,
            ));
            slot += spec.elevator_count as f32 / 2.0 + 1.0;
        }

        Self {
            buildings,
            time: 0.0,
            rng,
            requests_assigned: 0,
            requests_ignored: 0,
            arrivals_completed: 0,
        }
    }

    pub fn new(specs: &[BuildingSpec], canvas_width: f32, canvas_height: f32) -> Self {
        Self::new_internal(specs, canvas_width, canvas_height, None)
    }

    /// Create a world with a seeded RNG for reproducible request generation
    pub fn new_with_seed(
        specs: &[BuildingSpec],
        canvas_width: f32,
        canvas_height: f32,
        seed: u64,
    ) -> Self {
        Self::new_internal(
            specs,
            canvas_width,
            canvas_height,
            Some(StdRng::seed_from_u64(seed)),
        )
    }

    /// Default three-building configuration
    pub fn create_test_world() -> Self {
        Self::new(
            &[
                BuildingSpec::new(15, 3),
                BuildingSpec::new(9, 2),
                BuildingSpec::new(20, 5),
            ],
            DEFAULT_CANVAS_WIDTH,
            DEFAULT_CANVAS_HEIGHT,
        )
    }

    /// Get a random index below `bound`, using the seeded RNG if available
    fn random_index(&mut self, bound: usize) -> usize {
        match &mut self.rng {
            Some(rng) => rng.random_range(0..bound),
            None => rand::rng().random_range(0..bound),
        }
    }

    /// Route a pointer click to whichever building it landed in.
    ///
    /// Clicks outside every building, or on a floor with a pending call, are
    /// benign no-ops and return `None`.
    pub fn handle_click(&mut self, point: Point) -> Result<Option<DispatchOutcome>> {
        let mut result = None;
        for building in &mut self.buildings {
            if let Some(outcome) = building.handle_click(point)? {
                result = Some(outcome);
                break;
            }
        }
        if let Some(outcome) = result {
            self.record_outcome(outcome);
        }
        Ok(result)
    }

    /// Press a floor call button directly, bypassing click hit-testing.
    ///
    /// A pending call on the floor is a no-op, as if the click were ignored.
    pub fn request_floor(
        &mut self,
        building: usize,
        floor: usize,
    ) -> Result<Option<DispatchOutcome>> {
        let building = self
            .buildings
            .get_mut(building)
            .with_context(|| format!("no building at index {}", building))?;

        if building
            .floors
            .get(floor)
            .is_some_and(|floor| floor.call_pending())
        {
            self.requests_ignored += 1;
            return Ok(None);
        }

        let outcome = building.request_floor(floor)?;
        self.record_outcome(outcome);
        Ok(Some(outcome))
    }

    /// Press a random floor button in a random building.
    ///
    /// Drives headless runs in place of pointer input.
    pub fn spawn_random_request(&mut self) -> Result<Option<DispatchOutcome>> {
        if self.buildings.is_empty() {
            return Ok(None);
        }
        let building = self.random_index(self.buildings.len());
        let floor = self.random_index(self.buildings[building].floors.len());
        self.request_floor(building, floor)
    }

    fn record_outcome(&mut self, outcome: DispatchOutcome) {
        match outcome {
            DispatchOutcome::Assigned { .. } => self.requests_assigned += 1,
            DispatchOutcome::AlreadyTargeted | DispatchOutcome::NoElevators => {
                self.requests_ignored += 1
            }
        }
    }

    /// Advance the whole world by one tick.
    ///
    /// Every building observes the same delta; returns all arrivals so
    /// rendering/audio collaborators can react to them.
    pub fn tick(&mut self, delta_secs: f32) -> Result<Vec<ArrivalEvent>> {
        self.time += delta_secs;

        let mut arrivals = Vec::new();
        for building in &mut self.buildings {
            arrivals.extend(building.tick(delta_secs)?);
        }

        self.arrivals_completed += arrivals.len();
        Ok(arrivals)
    }

    /// Log a summary of the world state
    pub fn print_summary(&self) {
        info!("Simulation time: {:.1}s", self.time);
        info!("Requests assigned: {}", self.requests_assigned);
        info!("Requests ignored: {}", self.requests_ignored);
        info!("Arrivals completed: {}", self.arrivals_completed);
        for building in &self.buildings {
            let pending_calls = building
                .floors
                .iter()
                .filter(|floor| floor.call_pending())
                .count();
            let busy_elevators = building
                .elevators
                .iter()
                .filter(|elevator| !elevator.queue.is_empty())
                .count();
            info!(
                "Building {:?}: {} floors, {} elevators ({} with queued work), {} pending calls",
                building.id,
                building.floors.len(),
                building.elevators.len(),
                busy_elevators,
                pending_calls
            );
        }
    }
}
