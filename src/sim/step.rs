//! Simulation controller
//!
//! Owns the body store, the camera, and the RNG for the lifetime of one
//! level. The surrounding game shell drives it with `step` once per frame
//! and `shoot`/`switch_active_star` on input, and reads back through
//! `snapshot` and the returned events.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::collision::{away_from, circles_overlap, within_threshold};
use super::integrate::{integrate_star, integrate_meteorite};
use super::state::{Camera, Event, Hole, Meteorite, Snapshot, Star};
use crate::config::{LayoutError, LevelLayout, SimConfig};
use crate::consts::MAX_ELAPSED;

/// The simulation core for one level
#[derive(Debug, Clone)]
pub struct Simulation {
    config: SimConfig,
    stars: Vec<Star>,
    holes: Vec<Hole>,
    meteorites: Vec<Meteorite>,
    camera: Camera,
    /// Index of the player's currently selected star, if any
    selected: Option<usize>,
    rng: Pcg32,
    time_steps: u64,
}

impl Simulation {
    /// Build the body store from a validated layout.
    ///
    /// The seed fixes meteorite spawns and active-hole selection, so a
    /// level replays identically for identical inputs.
    pub fn new(layout: &LevelLayout, config: SimConfig, seed: u64) -> Result<Self, LayoutError> {
        layout.validate(&config)?;

        let stars: Vec<Star> = layout
            .stars
            .iter()
            .enumerate()
            .map(|(i, spawn)| {
                let params = config.star_params(spawn.class);
                Star::new(
                    i as u32,
                    spawn.class,
                    spawn.pos,
                    params.mass,
                    params.radius,
                    params.restitution,
                )
            })
            .collect();

        let holes: Vec<Hole> = layout
            .holes
            .iter()
            .enumerate()
            .map(|(i, spawn)| Hole {
                id: i as u32,
                pos: spawn.pos,
                radius: spawn.radius,
                active: false,
            })
            .collect();

        let mut rng = Pcg32::seed_from_u64(seed);
        let meteorites = spawn_meteorites(layout.meteorites, &config, &mut rng);

        let mut sim = Self {
            camera: Camera { pos: config.board / 2.0 },
            selected: if stars.is_empty() { None } else { Some(0) },
            config,
            stars,
            holes,
            meteorites,
            rng,
            time_steps: 0,
        };
        sim.select_active_hole();

        log::info!(
            "level initialized: {} stars, {} holes, {} meteorites",
            sim.stars.len(),
            sim.holes.len(),
            sim.meteorites.len()
        );
        Ok(sim)
    }

    /// Advance the simulation by one frame.
    ///
    /// `elapsed` is a normalized time multiplier (1.0 at the 60 Hz
    /// reference rate), clamped to [`MAX_ELAPSED`] so a stalled frame
    /// cannot tunnel bodies across the board. Returns every event emitted
    /// this step, in emission order.
    pub fn step(&mut self, elapsed: f32) -> Vec<Event> {
        let elapsed = if elapsed.is_finite() {
            elapsed.clamp(0.0, MAX_ELAPSED)
        } else {
            1.0
        };
        self.time_steps += 1;

        let mut events = Vec::new();
        for star in &mut self.stars {
            if integrate_star(star, &self.config, elapsed) {
                events.push(Event::Bounce { star: star.id });
            }
        }
        for meteorite in &mut self.meteorites {
            integrate_meteorite(meteorite, &self.config, elapsed);
        }

        self.resolve_collisions(&mut events);
        self.update_camera();
        events
    }

    /// Launch one star from a completed drag gesture.
    ///
    /// Slingshot semantics: the star flies opposite the drag. Ineligible
    /// stars (unknown, in flight, settled) and zero-length drags are
    /// silently ignored.
    pub fn shoot(&mut self, star_id: u32, drag: Vec2, drag_duration_ms: f32) {
        let Some(star) = self.stars.iter_mut().find(|s| s.id == star_id) else {
            return;
        };
        if !star.at_rest() {
            return;
        }
        let length = drag.length();
        if length == 0.0 {
            return;
        }

        let direction = -drag / length;
        let power = (length * self.config.power_factor).min(self.config.max_velocity);
        star.vel = direction * power / star.mass;
        star.moving = true;
        star.settled = false;

        log::debug!(
            "star {star_id} launched: drag {length:.1} over {drag_duration_ms:.0}ms, speed {:.2}",
            star.vel.length()
        );
    }

    /// Advance the selection to the next star that is neither in flight
    /// nor settled, wrapping in stored identity order. Returns the new
    /// selection, or `None` (selection unchanged) when nothing is
    /// eligible.
    pub fn switch_active_star(&mut self) -> Option<u32> {
        if self.stars.is_empty() {
            return None;
        }
        let start = self.selected.map_or(0, |i| i + 1);
        for offset in 0..self.stars.len() {
            let i = (start + offset) % self.stars.len();
            if self.stars[i].at_rest() {
                self.selected = Some(i);
                return Some(self.stars[i].id);
            }
        }
        None
    }

    /// Read-only view of the board for the presentation layer
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            stars: &self.stars,
            holes: &self.holes,
            meteorites: &self.meteorites,
            camera: self.camera,
        }
    }

    /// The identity of the currently selected star, if any
    pub fn selected_star(&self) -> Option<u32> {
        self.selected.map(|i| self.stars[i].id)
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Number of `step` calls since construction or the last level reset
    pub fn time_steps(&self) -> u64 {
        self.time_steps
    }

    /// Discard shot state and rebuild the board for a fresh run: stars
    /// return to their spawn points, meteorites re-randomize, and a new
    /// active hole is drawn.
    pub fn reset_level(&mut self) {
        for star in &mut self.stars {
            star.reset();
        }
        self.meteorites =
            spawn_meteorites(self.meteorites.len() as u32, &self.config, &mut self.rng);
        self.camera.pos = self.config.board / 2.0;
        self.selected = if self.stars.is_empty() { None } else { Some(0) };
        self.time_steps = 0;
        self.select_active_hole();
    }

    /// Mark one uniformly drawn hole active and clear the rest.
    ///
    /// An empty hole collection leaves nothing active; capture checks are
    /// then vacuously skipped.
    fn select_active_hole(&mut self) {
        for hole in &mut self.holes {
            hole.active = false;
        }
        if self.holes.is_empty() {
            return;
        }
        let idx = self.rng.random_range(0..self.holes.len());
        self.holes[idx].active = true;
        log::debug!("hole {} is now the target", self.holes[idx].id);
    }

    /// Resolve hole and hazard contacts for every star still in flight.
    /// Edges were already handled during integration, so the per-star
    /// order remains edges, then holes, then meteorites.
    fn resolve_collisions(&mut self, events: &mut Vec<Event>) {
        for i in 0..self.stars.len() {
            if !self.stars[i].moving {
                continue;
            }

            // Holes, in stored order. At most one capture per star per
            // step; an inactive hole inside the threshold sets the star's
            // velocity to a fixed-speed nudge away from it, not a
            // reflection.
            let mut captured = false;
            {
                let star = &mut self.stars[i];
                for hole in &self.holes {
                    if !within_threshold(star.pos, hole.pos, self.config.capture_threshold) {
                        continue;
                    }
                    if hole.active {
                        star.settle();
                        events.push(Event::TargetEntered { star: star.id, hole: hole.id });
                        captured = true;
                        break;
                    }
                    star.vel = away_from(hole.pos, star.pos) * self.config.repulse_speed;
                }
            }
            if captured {
                // Draw the next target immediately so the active-hole
                // invariant holds when this step returns.
                self.select_active_hole();
                continue;
            }

            // Meteorites: every overlap this step registers independently.
            let star = &mut self.stars[i];
            for meteorite in &self.meteorites {
                if circles_overlap(star.pos, star.radius, meteorite.pos, meteorite.radius) {
                    star.vel = away_from(meteorite.pos, star.pos) * self.config.repulse_speed;
                    events.push(Event::HazardHit {
                        star: star.id,
                        meteorite: meteorite.id,
                    });
                }
            }
        }
    }

    /// Ease the camera toward the centroid of stars in flight; hold the
    /// last position when nothing is moving.
    fn update_camera(&mut self) {
        let mut centroid = Vec2::ZERO;
        let mut count = 0;
        for star in &self.stars {
            if star.moving && !star.settled {
                centroid += star.pos;
                count += 1;
            }
        }
        if count > 0 {
            centroid /= count as f32;
            self.camera.pos += (centroid - self.camera.pos) * self.config.camera_smoothing;
        }
    }
}

fn spawn_meteorites(count: u32, config: &SimConfig, rng: &mut Pcg32) -> Vec<Meteorite> {
    let r = config.meteorite_radius;
    (0..count)
        .map(|id| Meteorite {
            id,
            pos: Vec2::new(
                rng.random_range(r..config.board.x - r),
                rng.random_range(r..config.board.y - r),
            ),
            vel: Vec2::new(
                rng.random_range(-config.meteorite_max_speed..config.meteorite_max_speed),
                rng.random_range(-config.meteorite_max_speed..config.meteorite_max_speed),
            ),
            radius: r,
            rotation: 0.0,
            // A zero cap means no tumble; sampling an empty range panics.
            rotation_speed: if config.meteorite_max_rotation > 0.0 {
                rng.random_range(-config.meteorite_max_rotation..config.meteorite_max_rotation)
            } else {
                0.0
            },
        })
        .collect()
}
