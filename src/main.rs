//! Headless demo driver
//!
//! Runs the simulation core without any presentation layer: loads a level
//! layout (JSON path as the first argument, or a built-in default), fires
//! a few random shots, and logs every event the sim emits.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use star_sling::config::{HoleSpawn, LevelLayout, SimConfig, StarSpawn};
use star_sling::sim::{Event, Simulation, StarClass};

fn default_layout() -> LevelLayout {
    LevelLayout {
        stars: vec![
            StarSpawn { pos: Vec2::new(120.0, 120.0), class: StarClass::Dwarf },
            StarSpawn { pos: Vec2::new(180.0, 120.0), class: StarClass::Giant },
            StarSpawn { pos: Vec2::new(240.0, 120.0), class: StarClass::Neutron },
        ],
        holes: vec![
            HoleSpawn { pos: Vec2::new(820.0, 560.0), radius: 22.0 },
            HoleSpawn { pos: Vec2::new(512.0, 650.0), radius: 22.0 },
            HoleSpawn { pos: Vec2::new(200.0, 600.0), radius: 22.0 },
        ],
        meteorites: 4,
    }
}

fn load_layout() -> Result<LevelLayout, Box<dyn std::error::Error>> {
    match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path)?;
            Ok(serde_json::from_str(&json)?)
        }
        None => Ok(default_layout()),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let layout = load_layout()?;
    let seed = 0xC0FFEE;
    let mut sim = Simulation::new(&layout, SimConfig::default(), seed)?;
    let mut rng = Pcg32::seed_from_u64(seed ^ 1);

    // Ten random shots, each played out until every star is at rest.
    for shot in 0..10 {
        let Some(star) = sim.switch_active_star() else {
            log::info!("no star left to shoot");
            break;
        };
        let drag = Vec2::new(rng.random_range(-400.0..400.0), rng.random_range(-400.0..400.0));
        sim.shoot(star, drag, rng.random_range(80.0..600.0));
        log::info!("shot {shot}: star {star}, drag ({:.0}, {:.0})", drag.x, drag.y);

        let mut steps = 0u32;
        while sim.snapshot().stars.iter().any(|s| s.moving) && steps < 10_000 {
            for event in sim.step(1.0) {
                match event {
                    Event::Bounce { star } => log::info!("  star {star} bounced"),
                    Event::TargetEntered { star, hole } => {
                        log::info!("  star {star} dropped into hole {hole}")
                    }
                    Event::HazardHit { star, meteorite } => {
                        log::info!("  star {star} clipped meteorite {meteorite}")
                    }
                }
            }
            steps += 1;
        }
    }

    let snap = sim.snapshot();
    let settled = snap.stars.iter().filter(|s| s.settled).count();
    log::info!(
        "run over after {} steps: {settled}/{} stars settled, camera at ({:.0}, {:.0})",
        sim.time_steps(),
        snap.stars.len(),
        snap.camera.pos.x,
        snap.camera.pos.y
    );
    Ok(())
}
