//! Spawns the fixed decorative roster: balloons, cake slices, banknotes.

use rand::Rng;

use crate::core::random::{direction, range};
use crate::domain::config::{RectBodyConfig, StageConfig};
use crate::domain::palette::{balloon_style, cake_style, note_style};
use crate::domain::{Body, BodyId, Category, Material, Style, Vec2};

use super::world::World;

/// Uniform coordinate keeping a half-size `half` inside `[0, extent]`
fn spawn_axis<R: Rng + ?Sized>(rng: &mut R, extent: f32, half: f32) -> f32 {
    if extent > 2.0 * half {
        range(rng, half, extent - half)
    } else {
        extent * 0.5
    }
}

/// Random point keeping a body of half size `half` inside the viewport
fn spawn_point<R: Rng + ?Sized>(rng: &mut R, width: f32, height: f32, half: Vec2) -> Vec2 {
    let x = spawn_axis(rng, width, half.x);
    let y = spawn_axis(rng, height, half.y);
    Vec2::new(x, y)
}

fn spawn_velocity<R: Rng + ?Sized>(rng: &mut R, max_speed: f32) -> Vec2 {
    direction(rng) * range(rng, 0.0, max_speed)
}

fn spawn_rects<R, F>(
    world: &mut World,
    rng: &mut R,
    cfg: &StageConfig,
    rects: &RectBodyConfig,
    category: Category,
    style: F,
) -> Vec<BodyId>
where
    R: Rng + ?Sized,
    F: Fn(usize) -> Style,
{
    let half = Vec2::new(rects.width * 0.5, rects.height * 0.5);
    let material = Material::new(rects.restitution, rects.air_friction, rects.density);
    (0..rects.count)
        .map(|i| {
            let pos = spawn_point(rng, cfg.viewport.width, cfg.viewport.height, half);
            let mut body = Body::rect(0, category, pos, rects.width, rects.height, material, style(i));
            body.velocity = spawn_velocity(rng, cfg.forcing.spawn_speed);
            world.add_body(body)
        })
        .collect()
}

/// Populate `world` with the configured roster. Returns the new body ids in
/// spawn order (balloons, cakes, notes).
pub fn spawn_roster<R: Rng + ?Sized>(world: &mut World, rng: &mut R, cfg: &StageConfig) -> Vec<BodyId> {
    let mut ids = Vec::with_capacity(cfg.balloons.count + cfg.cakes.count + cfg.notes.count);

    let balloons = &cfg.balloons;
    let balloon_material = Material::new(balloons.restitution, balloons.air_friction, balloons.density);
    for i in 0..balloons.count {
        let radius = range(rng, balloons.radius.min, balloons.radius.max);
        let pos = spawn_point(rng, cfg.viewport.width, cfg.viewport.height, Vec2::new(radius, radius));
        let mut body = Body::circle(0, Category::Balloon, pos, radius, balloon_material, balloon_style(i));
        body.velocity = spawn_velocity(rng, cfg.forcing.spawn_speed);
        ids.push(world.add_body(body));
    }

    ids.extend(spawn_rects(world, rng, cfg, &cfg.cakes, Category::Cake, |_| cake_style()));
    ids.extend(spawn_rects(world, rng, cfg, &cfg.notes, Category::Note, note_style));
    ids
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::random::seeded;
    use crate::domain::Shape;

    #[test]
    fn roster_matches_config_and_spawns_inside() {
        let cfg = StageConfig::default();
        let mut world = World::new(Vec2::zero());
        let mut rng = seeded(42);
        let ids = spawn_roster(&mut world, &mut rng, &cfg);

        assert_eq!(ids.len(), 8 + 3 + 12);
        assert_eq!(world.bodies().iter().filter(|b| b.category == Category::Balloon).count(), 8);
        assert_eq!(world.bodies().iter().filter(|b| b.category == Category::Cake).count(), 3);
        assert_eq!(world.bodies().iter().filter(|b| b.category == Category::Note).count(), 12);

        for b in world.bodies() {
            let (min, max) = b.bounds();
            assert!(min.x >= 0.0 && min.y >= 0.0, "{:?}", b.pos);
            assert!(max.x <= cfg.viewport.width && max.y <= cfg.viewport.height, "{:?}", b.pos);
            assert!(b.velocity.length() <= cfg.forcing.spawn_speed + 1e-4);
            if let Shape::Circle { radius } = b.shape {
                assert!((25.0..=40.0).contains(&radius));
            }
        }
    }

    #[test]
    fn note_colors_cycle() {
        let mut cfg = StageConfig::default();
        cfg.balloons.count = 0;
        cfg.cakes.count = 0;
        cfg.notes.count = 6;
        let mut world = World::new(Vec2::zero());
        spawn_roster(&mut world, &mut seeded(1), &cfg);
        let fills: Vec<_> = world.bodies().iter().map(|b| b.style.fill).collect();
        assert_eq!(fills[0], fills[5]);
        assert_ne!(fills[0], fills[1]);
    }

    #[test]
    fn tiny_viewport_centers_bodies() {
        let mut cfg = StageConfig::default();
        cfg.viewport.width = 20.0;
        cfg.viewport.height = 20.0;
        let mut world = World::new(Vec2::zero());
        spawn_roster(&mut world, &mut seeded(3), &cfg);
        assert!(world.bodies().iter().all(|b| b.pos == Vec2::new(10.0, 10.0)));
    }
}
