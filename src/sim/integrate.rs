//! Per-step integration of star and meteorite bodies
//!
//! Stars integrate only while a shot is in flight; meteorites integrate
//! unconditionally and reflect elastically off all four edges.

use glam::Vec2;

use super::collision::edge_contact;
use super::state::{Meteorite, Star};
use crate::config::SimConfig;

/// Advance one star by one step scaled by the normalized `elapsed`
/// multiplier. Returns true if the star hit a board edge.
///
/// Friction is applied once per step (not elapsed-scaled, matching the
/// reference feel at 60 steps/second). The edge clamp runs before the stop
/// rule, so a star whose speed dies on the same step it crosses an edge
/// still comes to rest inside the board; the stop rule runs after the
/// displacement so a star never coasts through a step in a stopped state.
pub fn integrate_star(star: &mut Star, config: &SimConfig, elapsed: f32) -> bool {
    if !star.moving || star.settled {
        return false;
    }

    star.vel *= config.friction;
    star.pos += star.vel * elapsed;
    star.rotation += star.vel.x * config.spin_factor * elapsed;

    let contact = edge_contact(star.pos, star.radius, config.board);
    if contact.any() {
        star.pos = contact.clamped;
        if contact.hit_x {
            star.vel.x = -star.vel.x * star.restitution;
        }
        if contact.hit_y {
            star.vel.y = -star.vel.y * star.restitution;
        }
    }

    if star.vel.length() < config.min_speed {
        star.vel = Vec2::ZERO;
        star.moving = false;
    }
    contact.any()
}

/// Advance one meteorite and reflect it off the board edges.
///
/// Reflection is fully elastic: the crossed velocity component flips sign
/// and the position clamps to the legal band.
pub fn integrate_meteorite(meteorite: &mut Meteorite, config: &SimConfig, elapsed: f32) {
    meteorite.pos += meteorite.vel * elapsed;
    meteorite.rotation += meteorite.rotation_speed * elapsed;

    let r = meteorite.radius;
    let board = config.board;

    if meteorite.pos.x < r {
        meteorite.pos.x = r;
        meteorite.vel.x = -meteorite.vel.x;
    } else if meteorite.pos.x > board.x - r {
        meteorite.pos.x = board.x - r;
        meteorite.vel.x = -meteorite.vel.x;
    }

    if meteorite.pos.y < r {
        meteorite.pos.y = r;
        meteorite.vel.y = -meteorite.vel.y;
    } else if meteorite.pos.y > board.y - r {
        meteorite.pos.y = board.y - r;
        meteorite.vel.y = -meteorite.vel.y;
    }
}
