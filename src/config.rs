//! Simulation tuning record and level layout
//!
//! Both are supplied once at `Simulation::new` and never mutated mid-level.
//! Validation is fail-fast: malformed geometry is the only hard error the
//! core surfaces.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::StarClass;

/// Validation failure at level initialization
#[derive(Debug, Error, PartialEq)]
pub enum LayoutError {
    #[error("board extents must be positive and finite, got {0} x {1}")]
    InvalidBoard(f32, f32),
    #[error("{kind} '{id}' has non-finite position ({x}, {y})")]
    NonFinitePosition { kind: &'static str, id: u32, x: f32, y: f32 },
    #[error("{kind} '{id}' has non-positive radius {radius}")]
    InvalidRadius { kind: &'static str, id: u32, radius: f32 },
    #[error("friction coefficient must be in (0, 1), got {0}")]
    InvalidFriction(f32),
    #[error("restitution for {class:?} must be in (0, 1), got {value}")]
    InvalidRestitution { class: StarClass, value: f32 },
    #[error("{name} must be positive and finite, got {value}")]
    InvalidTuning { name: &'static str, value: f32 },
}

/// Physical parameters for one star class
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StarParams {
    pub mass: f32,
    pub radius: f32,
    /// Fraction of speed retained on a wall bounce
    pub restitution: f32,
}

impl StarParams {
    const fn from_tuple((mass, radius, restitution): (f32, f32, f32)) -> Self {
        Self { mass, radius, restitution }
    }
}

/// Immutable simulation tuning, fixed for the lifetime of one level
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// Board extents (stars and meteorites are confined to
    /// `radius ..= extent - radius` on both axes)
    pub board: Vec2,
    /// Per-step velocity damping, strictly below 1
    pub friction: f32,
    /// Speed below which a moving star stops
    pub min_speed: f32,
    /// Capture distance for the active hole, independent of visual radii
    pub capture_threshold: f32,
    /// Drag magnitude to launch speed conversion
    pub power_factor: f32,
    /// Launch speed ceiling (applied before the mass divide)
    pub max_velocity: f32,
    /// Fixed nudge speed for wrong-hole and meteorite contact
    pub repulse_speed: f32,
    /// Camera exponential smoothing factor
    pub camera_smoothing: f32,
    /// Cosmetic spin per unit of horizontal star velocity
    pub spin_factor: f32,
    /// Meteorite body radius
    pub meteorite_radius: f32,
    /// Meteorite spawn speed cap (per-axis)
    pub meteorite_max_speed: f32,
    /// Meteorite spawn rotation speed cap
    pub meteorite_max_rotation: f32,
    pub dwarf: StarParams,
    pub giant: StarParams,
    pub neutron: StarParams,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            board: Vec2::new(BOARD_WIDTH, BOARD_HEIGHT),
            friction: FRICTION,
            min_speed: MIN_SPEED,
            capture_threshold: CAPTURE_THRESHOLD,
            power_factor: POWER_FACTOR,
            max_velocity: MAX_VELOCITY,
            repulse_speed: REPULSE_SPEED,
            camera_smoothing: CAMERA_SMOOTHING,
            spin_factor: SPIN_FACTOR,
            meteorite_radius: METEORITE_RADIUS,
            meteorite_max_speed: METEORITE_MAX_SPEED,
            meteorite_max_rotation: METEORITE_MAX_ROTATION,
            dwarf: StarParams::from_tuple(DWARF_PARAMS),
            giant: StarParams::from_tuple(GIANT_PARAMS),
            neutron: StarParams::from_tuple(NEUTRON_PARAMS),
        }
    }
}

impl SimConfig {
    /// Physical parameters for a star class
    pub fn star_params(&self, class: StarClass) -> StarParams {
        match class {
            StarClass::Dwarf => self.dwarf,
            StarClass::Giant => self.giant,
            StarClass::Neutron => self.neutron,
        }
    }

    pub(crate) fn validate(&self) -> Result<(), LayoutError> {
        // Every body must fit inside the legal band on both axes, or the
        // boundary clamp has no valid range.
        let max_radius = self
            .meteorite_radius
            .max(self.dwarf.radius)
            .max(self.giant.radius)
            .max(self.neutron.radius);
        if !self.board.x.is_finite()
            || !self.board.y.is_finite()
            || self.board.x <= 2.0 * max_radius
            || self.board.y <= 2.0 * max_radius
        {
            return Err(LayoutError::InvalidBoard(self.board.x, self.board.y));
        }
        if !(self.friction > 0.0 && self.friction < 1.0) {
            return Err(LayoutError::InvalidFriction(self.friction));
        }
        for class in StarClass::ALL {
            let params = self.star_params(class);
            if !(params.restitution > 0.0 && params.restitution < 1.0) {
                return Err(LayoutError::InvalidRestitution {
                    class,
                    value: params.restitution,
                });
            }
            check_positive("star mass", params.mass)?;
            check_positive("star radius", params.radius)?;
        }
        check_positive("min_speed", self.min_speed)?;
        check_positive("capture_threshold", self.capture_threshold)?;
        check_positive("power_factor", self.power_factor)?;
        check_positive("max_velocity", self.max_velocity)?;
        check_positive("repulse_speed", self.repulse_speed)?;
        check_positive("camera_smoothing", self.camera_smoothing)?;
        check_positive("meteorite_radius", self.meteorite_radius)?;
        check_positive("meteorite_max_speed", self.meteorite_max_speed)?;
        // Zero means "no tumble" and is allowed.
        check_non_negative("meteorite_max_rotation", self.meteorite_max_rotation)?;
        Ok(())
    }
}

fn check_positive(name: &'static str, value: f32) -> Result<(), LayoutError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(LayoutError::InvalidTuning { name, value })
    }
}

fn check_non_negative(name: &'static str, value: f32) -> Result<(), LayoutError> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(LayoutError::InvalidTuning { name, value })
    }
}

/// One star spawn point in a level
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StarSpawn {
    pub pos: Vec2,
    pub class: StarClass,
}

/// One hole position in a level
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HoleSpawn {
    pub pos: Vec2,
    pub radius: f32,
}

/// Board layout for one level
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelLayout {
    pub stars: Vec<StarSpawn>,
    pub holes: Vec<HoleSpawn>,
    /// Number of meteorites to spawn with randomized velocity
    pub meteorites: u32,
}

impl LevelLayout {
    pub(crate) fn validate(&self, config: &SimConfig) -> Result<(), LayoutError> {
        for (i, spawn) in self.stars.iter().enumerate() {
            check_finite_pos("star", i as u32, spawn.pos)?;
        }
        for (i, spawn) in self.holes.iter().enumerate() {
            check_finite_pos("hole", i as u32, spawn.pos)?;
            if !(spawn.radius > 0.0 && spawn.radius.is_finite()) {
                return Err(LayoutError::InvalidRadius {
                    kind: "hole",
                    id: i as u32,
                    radius: spawn.radius,
                });
            }
        }
        config.validate()
    }
}

fn check_finite_pos(kind: &'static str, id: u32, pos: Vec2) -> Result<(), LayoutError> {
    if pos.x.is_finite() && pos.y.is_finite() {
        Ok(())
    } else {
        Err(LayoutError::NonFinitePosition { kind, id, x: pos.x, y: pos.y })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout_one_each() -> LevelLayout {
        LevelLayout {
            stars: vec![StarSpawn {
                pos: Vec2::new(100.0, 100.0),
                class: StarClass::Dwarf,
            }],
            holes: vec![HoleSpawn {
                pos: Vec2::new(500.0, 400.0),
                radius: 20.0,
            }],
            meteorites: 0,
        }
    }

    #[test]
    fn default_config_is_valid() {
        assert_eq!(SimConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_non_finite_star_position() {
        let mut layout = layout_one_each();
        layout.stars[0].pos.x = f32::NAN;
        let err = layout.validate(&SimConfig::default()).unwrap_err();
        assert!(matches!(err, LayoutError::NonFinitePosition { kind: "star", .. }));
    }

    #[test]
    fn rejects_negative_hole_radius() {
        let mut layout = layout_one_each();
        layout.holes[0].radius = -5.0;
        let err = layout.validate(&SimConfig::default()).unwrap_err();
        assert!(matches!(err, LayoutError::InvalidRadius { kind: "hole", .. }));
    }

    #[test]
    fn rejects_friction_of_one_or_more() {
        let mut config = SimConfig::default();
        config.friction = 1.0;
        assert_eq!(config.validate(), Err(LayoutError::InvalidFriction(1.0)));
    }

    #[test]
    fn rejects_restitution_outside_unit_interval() {
        let mut config = SimConfig::default();
        config.neutron.restitution = 1.2;
        let err = layout_one_each().validate(&config).unwrap_err();
        assert!(matches!(
            err,
            LayoutError::InvalidRestitution { class: StarClass::Neutron, .. }
        ));
    }

    #[test]
    fn rejects_negative_meteorite_rotation_cap() {
        let mut config = SimConfig::default();
        config.meteorite_max_rotation = -0.1;
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            LayoutError::InvalidTuning { name: "meteorite_max_rotation", .. }
        ));
    }

    #[test]
    fn zero_meteorite_rotation_cap_is_valid() {
        let mut config = SimConfig::default();
        config.meteorite_max_rotation = 0.0;
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn layout_round_trips_through_json() {
        let layout = layout_one_each();
        let json = serde_json::to_string(&layout).unwrap();
        let back: LevelLayout = serde_json::from_str(&json).unwrap();
        assert_eq!(back.stars.len(), 1);
        assert_eq!(back.holes[0].radius, 20.0);
    }
}
