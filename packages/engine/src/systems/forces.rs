//! Per-tick forcing: gravity, keep-alive jitter, balloon lift, scroll gusts
//! and air drag.

use rand::Rng;

use crate::core::random::{chance, direction, range};
use crate::domain::config::ForcingConfig;
use crate::domain::{Body, Vec2};

/// Converts configured gravity into pixels/tick^2 (slow, floaty fall)
pub const GRAVITY_SCALE: f32 = 0.28;

/// Hard cap on speed (pixels/tick); below wall thickness so nothing tunnels out
pub const MAX_SPEED: f32 = 15.0;

/// Gravity is an acceleration: identical for every dynamic body
#[inline]
pub fn apply_gravity(body: &mut Body, gravity: Vec2) {
    body.apply_velocity_change(gravity * GRAVITY_SCALE);
}

/// Random-direction kick with probability `jitter_probability` per body.
/// Returns how many bodies were kicked.
pub fn apply_jitter<'a, R, I>(rng: &mut R, bodies: I, cfg: &ForcingConfig) -> u32
where
    R: Rng + ?Sized,
    I: IntoIterator<Item = &'a mut Body>,
{
    let mut kicked = 0;
    for body in bodies {
        if body.is_static() || !chance(rng, cfg.jitter_probability) {
            continue;
        }
        let magnitude = range(rng, 0.0, cfg.jitter_impulse);
        body.apply_impulse(direction(rng) * magnitude);
        kicked += 1;
    }
    kicked
}

/// Upward-only impulse for buoyant bodies with probability `buoyancy_probability`.
/// Returns how many bodies were lifted.
pub fn apply_buoyancy<'a, R, I>(rng: &mut R, bodies: I, cfg: &ForcingConfig) -> u32
where
    R: Rng + ?Sized,
    I: IntoIterator<Item = &'a mut Body>,
{
    let mut lifted = 0;
    for body in bodies {
        if body.is_static() || !body.category.is_buoyant() {
            continue;
        }
        if chance(rng, cfg.buoyancy_probability) {
            body.apply_impulse(Vec2::new(0.0, -cfg.buoyancy_impulse));
            lifted += 1;
        }
    }
    lifted
}

/// One-shot gust from a scroll event: the same lift for everyone plus a small
/// random sideways push per body. Returns the number of bodies pushed.
pub fn apply_gust<'a, R, I>(rng: &mut R, bodies: I, cfg: &ForcingConfig) -> u32
where
    R: Rng + ?Sized,
    I: IntoIterator<Item = &'a mut Body>,
{
    let spread = cfg.gust_lift * cfg.gust_spread;
    let mut pushed = 0;
    for body in bodies {
        if body.is_static() {
            continue;
        }
        let sideways = range(rng, -spread, spread);
        body.apply_velocity_change(Vec2::new(sideways, -cfg.gust_lift));
        pushed += 1;
    }
    pushed
}

/// Drag, speed cap and position update for one tick
pub fn integrate(body: &mut Body) {
    if body.is_static() {
        return;
    }
    body.velocity *= 1.0 - body.material.air_friction;
    body.velocity = body.velocity.clamp_length(MAX_SPEED);
    body.pos += body.velocity;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::random::seeded;
    use crate::domain::{Category, Material, Style};

    fn balloon() -> Body {
        Body::circle(1, Category::Balloon, Vec2::new(50.0, 50.0), 30.0, Material::new(0.8, 0.02, 0.0008), Style::invisible())
    }

    fn note() -> Body {
        Body::rect(2, Category::Note, Vec2::new(50.0, 50.0), 60.0, 30.0, Material::new(0.9, 0.04, 0.0005), Style::invisible())
    }

    #[test]
    fn jitter_respects_probability_bounds() {
        let mut rng = seeded(11);
        let mut bodies = vec![balloon(), note()];

        let never = ForcingConfig { jitter_probability: 0.0, ..Default::default() };
        assert_eq!(apply_jitter(&mut rng, bodies.iter_mut(), &never), 0);
        assert!(bodies.iter().all(|b| b.velocity == Vec2::ZERO));

        let always = ForcingConfig { jitter_probability: 1.0, ..Default::default() };
        assert_eq!(apply_jitter(&mut rng, bodies.iter_mut(), &always), 2);
        for b in &bodies {
            // |dv| <= jitter_impulse / mass
            assert!(b.velocity.length() <= always.jitter_impulse * b.inv_mass + 1e-5);
        }
    }

    #[test]
    fn buoyancy_only_lifts_balloons_upward() {
        let mut rng = seeded(5);
        let mut bodies = vec![balloon(), note()];
        let cfg = ForcingConfig { buoyancy_probability: 1.0, ..Default::default() };
        assert_eq!(apply_buoyancy(&mut rng, bodies.iter_mut(), &cfg), 1);
        assert!(bodies[0].velocity.y < 0.0);
        assert_eq!(bodies[0].velocity.x, 0.0);
        assert_eq!(bodies[1].velocity, Vec2::ZERO);
    }

    #[test]
    fn gust_lifts_everyone_by_the_same_amount() {
        let mut rng = seeded(9);
        let mut bodies = vec![balloon(), note()];
        let cfg = ForcingConfig::default();
        assert_eq!(apply_gust(&mut rng, bodies.iter_mut(), &cfg), 2);
        for b in &bodies {
            assert!((b.velocity.y + cfg.gust_lift).abs() < 1e-6);
            assert!(b.velocity.x.abs() <= cfg.gust_lift * cfg.gust_spread);
        }
    }

    #[test]
    fn integrate_applies_drag_and_caps_speed() {
        let mut b = balloon();
        b.velocity = Vec2::new(10.0, 0.0);
        integrate(&mut b);
        assert!((b.velocity.x - 9.8).abs() < 1e-5);
        assert!((b.pos.x - 59.8).abs() < 1e-4);

        b.velocity = Vec2::new(1000.0, 0.0);
        integrate(&mut b);
        assert!(b.velocity.length() <= MAX_SPEED + 1e-4);
    }

    #[test]
    fn gravity_pulls_down_walls_stay_put() {
        let mut b = balloon();
        apply_gravity(&mut b, Vec2::new(0.0, 1.0));
        assert!((b.velocity.y - GRAVITY_SCALE).abs() < 1e-6);

        let mut w = Body::wall(3, Vec2::zero(), 10.0, 10.0);
        apply_gravity(&mut w, Vec2::new(0.0, 1.0));
        integrate(&mut w);
        assert_eq!(w.velocity, Vec2::ZERO);
        assert_eq!(w.pos, Vec2::ZERO);
    }
}
