//! Core types for the elevator simulation
//!
//! These are standalone types that don't depend on Bevy.

/// A wrapper type for building IDs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BuildingId(pub usize);

/// A wrapper type for elevator IDs (building-local)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElevatorId(pub usize);

/// A 2D point in canvas coordinates
///
/// The canvas origin is the top-left corner and `y` grows downward, so the
/// ground floor of a building sits at the largest `y` values.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Top edge of the rectangle (smallest `y`)
    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x < self.x + self.width
            && point.y >= self.y
            && point.y < self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Per-building configuration: floor and elevator counts
///
/// `floor_count` is the highest floor index; the building gets
/// `floor_count + 1` floors including the ground floor.
#[derive(Debug, Clone, Copy)]
pub struct BuildingSpec {
    pub floor_count: usize,
    pub elevator_count: usize,
}

impl BuildingSpec {
    pub fn new(floor_count: usize, elevator_count: usize) -> Self {
        Self {
            floor_count,
            elevator_count,
        }
    }
}
