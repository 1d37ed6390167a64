//! Deterministic simulation module
//!
//! All gameplay physics lives here. This module must stay pure and
//! deterministic:
//! - Step-driven only, advanced by explicit `Simulation::step` calls
//! - Seeded RNG only
//! - Stable iteration order (bodies keep their initialization order)
//! - No rendering, input, or platform dependencies

pub mod collision;
pub mod integrate;
pub mod state;
pub mod step;

pub use collision::{EdgeContact, away_from, circles_overlap, edge_contact, within_threshold};
pub use integrate::{integrate_meteorite, integrate_star};
pub use state::{Camera, Event, Hole, Meteorite, Snapshot, Star, StarClass};
pub use step::Simulation;
