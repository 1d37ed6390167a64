//! Star Sling - slingshot arcade simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (integration, collisions, body state)
//! - `config`: Immutable tuning record and level layout with validation
//!
//! The crate is headless: rendering, input capture, and audio live in the
//! surrounding game shell, which drives the sim through `Simulation::step`
//! and consumes the events it returns.

pub mod config;
pub mod sim;

pub use config::{LayoutError, LevelLayout, SimConfig, StarParams};
pub use sim::{Event, Simulation, Snapshot};

/// Default tuning constants
pub mod consts {
    /// Reference step rate the normalized elapsed time is measured against
    pub const REFERENCE_HZ: f32 = 60.0;
    /// Upper bound on the normalized elapsed multiplier (caps step size
    /// after a stall)
    pub const MAX_ELAPSED: f32 = 3.0;

    /// Board extents
    pub const BOARD_WIDTH: f32 = 1024.0;
    pub const BOARD_HEIGHT: f32 = 768.0;

    /// Per-step velocity damping for launched stars
    pub const FRICTION: f32 = 0.985;
    /// Speed below which a star is considered stopped
    pub const MIN_SPEED: f32 = 0.12;

    /// Distance at which an active hole captures a star. Deliberately
    /// larger than any visual radius so near-misses still count.
    pub const CAPTURE_THRESHOLD: f32 = 25.0;

    /// Drag-to-speed conversion for shots
    pub const POWER_FACTOR: f32 = 0.12;
    /// Launch speed ceiling before the mass divide
    pub const MAX_VELOCITY: f32 = 30.0;

    /// Fixed nudge speed applied on wrong-hole and meteorite contact
    pub const REPULSE_SPEED: f32 = 4.0;

    /// Camera exponential smoothing factor (per step, not time-scaled)
    pub const CAMERA_SMOOTHING: f32 = 0.08;
    /// Cosmetic star spin per unit of horizontal velocity
    pub const SPIN_FACTOR: f32 = 0.05;

    /// Meteorite defaults
    pub const METEORITE_RADIUS: f32 = 14.0;
    pub const METEORITE_MAX_SPEED: f32 = 2.5;
    pub const METEORITE_MAX_ROTATION: f32 = 0.1;

    /// Star class defaults (mass, radius, restitution)
    pub const DWARF_PARAMS: (f32, f32, f32) = (1.0, 10.0, 0.7);
    pub const GIANT_PARAMS: (f32, f32, f32) = (1.8, 16.0, 0.55);
    pub const NEUTRON_PARAMS: (f32, f32, f32) = (3.0, 8.0, 0.85);
}
