//! End-to-end scenarios driven through the public API only

use glam::Vec2;

use star_sling::config::{HoleSpawn, LevelLayout, SimConfig, StarSpawn};
use star_sling::sim::{Event, Simulation, StarClass};

fn one_star_one_hole() -> LevelLayout {
    LevelLayout {
        stars: vec![StarSpawn { pos: Vec2::new(150.0, 380.0), class: StarClass::Dwarf }],
        holes: vec![HoleSpawn { pos: Vec2::new(850.0, 380.0), radius: 22.0 }],
        meteorites: 0,
    }
}

#[test]
fn a_straight_shot_crosses_the_board_and_drops_in() {
    let mut sim = Simulation::new(&one_star_one_hole(), SimConfig::default(), 3).unwrap();

    // Drag left to fly right, hard enough to reach the far hole.
    sim.shoot(0, Vec2::new(-10_000.0, 0.0), 400.0);

    let mut all_events = Vec::new();
    for _ in 0..5_000 {
        all_events.extend(sim.step(1.0));
        if sim.snapshot().stars[0].settled {
            break;
        }
    }

    let captures = all_events
        .iter()
        .filter(|e| matches!(e, Event::TargetEntered { star: 0, hole: 0 }))
        .count();
    assert_eq!(captures, 1);

    let star = &sim.snapshot().stars[0];
    assert!(star.settled);
    assert!(!star.moving);
    assert_eq!(star.vel, Vec2::ZERO);
}

#[test]
fn a_shot_into_the_near_wall_bounces_and_dies_out() {
    let mut sim = Simulation::new(&one_star_one_hole(), SimConfig::default(), 3).unwrap();

    // A modest drag to the right: enough to reach the near wall, not
    // enough to cross back to the far hole after the bounce.
    sim.shoot(0, Vec2::new(70.0, 0.0), 400.0);

    let mut bounces = 0;
    let mut steps = 0;
    while sim.snapshot().stars[0].moving {
        for event in sim.step(1.0) {
            if matches!(event, Event::Bounce { star: 0 }) {
                bounces += 1;
            }
        }
        steps += 1;
        assert!(steps < 5_000, "friction never stopped the star");
    }
    assert!(bounces >= 1);
    assert!(!sim.snapshot().stars[0].settled);
}

#[test]
fn events_preserve_emission_order_within_a_step() {
    // A star parked against the wall AND overlapping a meteorite must
    // report the bounce before the hazard hit.
    let layout = LevelLayout {
        stars: vec![StarSpawn { pos: Vec2::new(30.0, 380.0), class: StarClass::Dwarf }],
        holes: vec![HoleSpawn { pos: Vec2::new(850.0, 100.0), radius: 22.0 }],
        meteorites: 1,
    };
    let mut sim = Simulation::new(&layout, SimConfig::default(), 11).unwrap();
    sim.shoot(0, Vec2::new(300.0, 0.0), 200.0);

    // Walk the shot into the left wall; the first bounce step may or may
    // not also graze the meteorite, but bounce always sorts first.
    for _ in 0..200 {
        let events = sim.step(1.0);
        if events.len() >= 2 {
            assert!(matches!(events[0], Event::Bounce { .. }));
        }
        if !sim.snapshot().stars[0].moving {
            break;
        }
    }
}

#[test]
fn level_reset_gives_a_replayable_board() {
    let layout = one_star_one_hole();
    let mut sim = Simulation::new(&layout, SimConfig::default(), 9).unwrap();

    sim.shoot(0, Vec2::new(-10_000.0, 0.0), 400.0);
    for _ in 0..5_000 {
        sim.step(1.0);
        if sim.snapshot().stars[0].settled {
            break;
        }
    }
    assert!(sim.snapshot().stars[0].settled);

    sim.reset_level();
    let star = &sim.snapshot().stars[0];
    assert_eq!(star.pos, layout.stars[0].pos);
    assert!(!star.settled);

    // The board is fully playable again.
    sim.shoot(0, Vec2::new(-10_000.0, 0.0), 400.0);
    assert!(sim.snapshot().stars[0].moving);
}
