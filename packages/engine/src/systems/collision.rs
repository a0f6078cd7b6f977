//! Contact detection and response.
//!
//! Shapes are axis-aligned (bodies never rotate), so there are three cases:
//! circle-circle, box-box (least-overlap axis) and circle-box (closest point).
//! Response is positional separation split by inverse mass, then a restitution
//! impulse along the contact normal.

use crate::domain::{Body, Shape, Vec2};

/// Penetration between two bodies; `normal` points from the first to the second
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Contact {
    pub normal: Vec2,
    pub depth: f32,
}

const EPSILON: f32 = 0.0001;

pub fn detect(a: &Body, b: &Body) -> Option<Contact> {
    match (a.shape, b.shape) {
        (Shape::Circle { radius: ra }, Shape::Circle { radius: rb }) => circle_circle(a.pos, ra, b.pos, rb),
        (Shape::Rect { .. }, Shape::Rect { .. }) => box_box(a, b),
        (Shape::Circle { radius }, Shape::Rect { .. }) => circle_box(a.pos, radius, b),
        (Shape::Rect { .. }, Shape::Circle { radius }) => circle_box(b.pos, radius, a).map(|c| Contact {
            normal: -c.normal,
            depth: c.depth,
        }),
    }
}

fn circle_circle(pa: Vec2, ra: f32, pb: Vec2, rb: f32) -> Option<Contact> {
    let delta = pb - pa;
    let min_dist = ra + rb;
    let dist_sq = delta.length_squared();
    if dist_sq >= min_dist * min_dist {
        return None;
    }
    // Coincident centers: push apart along an arbitrary axis
    if dist_sq < EPSILON {
        return Some(Contact { normal: Vec2::new(0.0, -1.0), depth: min_dist });
    }
    let dist = dist_sq.sqrt();
    Some(Contact { normal: delta * (1.0 / dist), depth: min_dist - dist })
}

fn box_box(a: &Body, b: &Body) -> Option<Contact> {
    let (min_a, max_a) = a.bounds();
    let (min_b, max_b) = b.bounds();
    if max_a.x <= min_b.x || min_a.x >= max_b.x || max_a.y <= min_b.y || min_a.y >= max_b.y {
        return None;
    }

    let overlap_x = (max_a.x - min_b.x).min(max_b.x - min_a.x);
    let overlap_y = (max_a.y - min_b.y).min(max_b.y - min_a.y);

    if overlap_x < overlap_y {
        let nx = if a.pos.x < b.pos.x { 1.0 } else { -1.0 };
        Some(Contact { normal: Vec2::new(nx, 0.0), depth: overlap_x })
    } else {
        let ny = if a.pos.y < b.pos.y { 1.0 } else { -1.0 };
        Some(Contact { normal: Vec2::new(0.0, ny), depth: overlap_y })
    }
}

/// Circle at `center` against box body `b`; normal points from circle to box
fn circle_box(center: Vec2, radius: f32, b: &Body) -> Option<Contact> {
    let (min, max) = b.bounds();
    let closest = Vec2::new(center.x.clamp(min.x, max.x), center.y.clamp(min.y, max.y));
    let delta = closest - center;
    let dist_sq = delta.length_squared();

    if dist_sq >= radius * radius {
        return None;
    }

    if dist_sq < EPSILON {
        // Center inside the box: leave through the nearest face
        let left = center.x - min.x;
        let right = max.x - center.x;
        let top = center.y - min.y;
        let bottom = max.y - center.y;
        let nearest = left.min(right).min(top).min(bottom);
        let normal = if nearest == left {
            Vec2::new(1.0, 0.0)
        } else if nearest == right {
            Vec2::new(-1.0, 0.0)
        } else if nearest == top {
            Vec2::new(0.0, 1.0)
        } else {
            Vec2::new(0.0, -1.0)
        };
        return Some(Contact { normal, depth: nearest + radius });
    }

    let dist = dist_sq.sqrt();
    Some(Contact { normal: delta * (1.0 / dist), depth: radius - dist })
}

/// Separate and bounce a pair. Returns false when both are static.
pub fn resolve(a: &mut Body, b: &mut Body, contact: Contact) -> bool {
    let total_inv_mass = a.inv_mass + b.inv_mass;
    if total_inv_mass < EPSILON {
        return false;
    }
    let n = contact.normal;

    let correction = n * contact.depth;
    a.pos -= correction * (a.inv_mass / total_inv_mass);
    b.pos += correction * (b.inv_mass / total_inv_mass);

    let rel_vel = (b.velocity - a.velocity).dot(n);
    if rel_vel > 0.0 {
        // already separating
        return true;
    }

    let restitution = a.material.restitution.max(b.material.restitution);
    let impulse = -(1.0 + restitution) * rel_vel / total_inv_mass;
    a.velocity -= n * (impulse * a.inv_mass);
    b.velocity += n * (impulse * b.inv_mass);
    true
}

/// Mutable references to two distinct elements
fn pair_mut(bodies: &mut [Body], i: usize, j: usize) -> (&mut Body, &mut Body) {
    debug_assert!(i < j);
    let (head, tail) = bodies.split_at_mut(j);
    (&mut head[i], &mut tail[0])
}

/// One pass over all pairs. Returns the number of contacts resolved.
pub fn resolve_all(bodies: &mut [Body]) -> u32 {
    let mut contacts = 0;
    let n = bodies.len();
    for i in 0..n {
        for j in (i + 1)..n {
            if bodies[i].is_static() && bodies[j].is_static() {
                continue;
            }
            let Some(contact) = detect(&bodies[i], &bodies[j]) else {
                continue;
            };
            let (a, b) = pair_mut(bodies, i, j);
            if resolve(a, b, contact) {
                contacts += 1;
            }
        }
    }
    contacts
}

/// Clamp dynamic bodies into the region (min, max), reflecting velocity on
/// the clamped axis. Bodies larger than the region are centered.
pub fn contain(bodies: &mut [Body], min: Vec2, max: Vec2) -> u32 {
    let mut clamped = 0;
    let center = (min + max) * 0.5;
    for body in bodies.iter_mut().filter(|b| !b.is_static()) {
        let half = body.shape.half_extents();
        let e = body.material.restitution;
        let mut hit = false;

        let (lo_x, hi_x) = if max.x - min.x > 2.0 * half.x {
            (min.x + half.x, max.x - half.x)
        } else {
            (center.x, center.x)
        };
        let (lo_y, hi_y) = if max.y - min.y > 2.0 * half.y {
            (min.y + half.y, max.y - half.y)
        } else {
            (center.y, center.y)
        };

        if body.pos.x < lo_x {
            body.pos.x = lo_x;
            if body.velocity.x < 0.0 {
                body.velocity.x = -body.velocity.x * e;
            }
            hit = true;
        } else if body.pos.x > hi_x {
            body.pos.x = hi_x;
            if body.velocity.x > 0.0 {
                body.velocity.x = -body.velocity.x * e;
            }
            hit = true;
        }

        if body.pos.y < lo_y {
            body.pos.y = lo_y;
            if body.velocity.y < 0.0 {
                body.velocity.y = -body.velocity.y * e;
            }
            hit = true;
        } else if body.pos.y > hi_y {
            body.pos.y = hi_y;
            if body.velocity.y > 0.0 {
                body.velocity.y = -body.velocity.y * e;
            }
            hit = true;
        }

        if hit {
            clamped += 1;
        }
    }
    clamped
}
