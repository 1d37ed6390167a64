//! Body state and simulation events
//!
//! Pure data: stars, holes, meteorites, and the camera. All behavior lives
//! in the integrator and the `Simulation` controller.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Star body classes, each with its own mass/radius/restitution in
/// `SimConfig`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StarClass {
    Dwarf,
    Giant,
    Neutron,
}

impl StarClass {
    pub const ALL: [StarClass; 3] = [StarClass::Dwarf, StarClass::Giant, StarClass::Neutron];
}

/// A launchable star body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Star {
    pub id: u32,
    pub class: StarClass,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub mass: f32,
    /// Fraction of speed retained on a wall bounce
    pub restitution: f32,
    /// True while a shot is in flight
    pub moving: bool,
    /// True once captured by the active hole; a settled star has zero
    /// velocity and `moving == false`
    pub settled: bool,
    /// Cosmetic roll angle, driven by horizontal velocity
    pub rotation: f32,
    /// Spawn position, restored on level reset
    pub start_pos: Vec2,
}

impl Star {
    pub fn new(id: u32, class: StarClass, pos: Vec2, mass: f32, radius: f32, restitution: f32) -> Self {
        Self {
            id,
            class,
            pos,
            vel: Vec2::ZERO,
            radius,
            mass,
            restitution,
            moving: false,
            settled: false,
            rotation: 0.0,
            start_pos: pos,
        }
    }

    /// Eligible for shooting and for selection cycling
    pub fn at_rest(&self) -> bool {
        !self.moving && !self.settled
    }

    /// Stop in place and mark as captured
    pub fn settle(&mut self) {
        self.vel = Vec2::ZERO;
        self.moving = false;
        self.settled = true;
    }

    /// Restore launch state at the spawn position
    pub fn reset(&mut self) {
        self.pos = self.start_pos;
        self.vel = Vec2::ZERO;
        self.moving = false;
        self.settled = false;
        self.rotation = 0.0;
    }
}

/// A target hole; at most one is active at a time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hole {
    pub id: u32,
    pub pos: Vec2,
    pub radius: f32,
    pub active: bool,
}

/// A hazard body; moves autonomously and reflects elastically off edges
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meteorite {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Cosmetic tumble angle
    pub rotation: f32,
    pub rotation_speed: f32,
}

/// Camera state, written only by the controller
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Camera {
    pub pos: Vec2,
}

/// Events emitted by one `step` call, in emission order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A star bounced off a board edge
    Bounce { star: u32 },
    /// A star was captured by the active hole
    TargetEntered { star: u32, hole: u32 },
    /// A star grazed a meteorite
    HazardHit { star: u32, meteorite: u32 },
}

/// Read-only view of the board for the presentation layer
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub stars: &'a [Star],
    pub holes: &'a [Hole],
    pub meteorites: &'a [Meteorite],
    pub camera: Camera,
}
