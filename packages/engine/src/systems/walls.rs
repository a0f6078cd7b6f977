//! Boundary walls: four static slabs hugging the viewport edges.
//!
//! Each wall is `WALL_THICKNESS` thick and centered half a thickness outside
//! its edge, so the inner face lines up exactly with the visible edge.

use crate::domain::{Body, Vec2};

pub const WALL_THICKNESS: f32 = 20.0;

/// Center and size of one wall
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WallRect {
    pub center: Vec2,
    pub width: f32,
    pub height: f32,
}

/// Geometry for top, bottom, left, right walls of a `width` x `height` viewport
pub fn wall_geometry(width: f32, height: f32) -> [WallRect; 4] {
    let half = WALL_THICKNESS * 0.5;
    [
        WallRect { center: Vec2::new(width * 0.5, -half), width, height: WALL_THICKNESS },
        WallRect { center: Vec2::new(width * 0.5, height + half), width, height: WALL_THICKNESS },
        WallRect { center: Vec2::new(-half, height * 0.5), width: WALL_THICKNESS, height },
        WallRect { center: Vec2::new(width + half, height * 0.5), width: WALL_THICKNESS, height },
    ]
}

/// Region enclosed by the walls' inner faces, as (min, max).
///
/// Returns `None` unless the slice holds walls on all four sides.
pub fn inner_bounds<'a, I>(walls: I) -> Option<(Vec2, Vec2)>
where
    I: IntoIterator<Item = &'a Body>,
{
    let mut left: Option<f32> = None;
    let mut right: Option<f32> = None;
    let mut top: Option<f32> = None;
    let mut bottom: Option<f32> = None;

    for wall in walls.into_iter().filter(|b| b.category.is_wall()) {
        let (min, max) = wall.bounds();
        if wall.pos.y < 0.0 {
            top = Some(top.map_or(max.y, |t: f32| t.max(max.y)));
        } else if wall.pos.x < 0.0 {
            left = Some(left.map_or(max.x, |l: f32| l.max(max.x)));
        } else if min.x <= min.y {
            // bottom slab starts at x = 0, right slab starts at y = 0
            bottom = Some(bottom.map_or(min.y, |b: f32| b.min(min.y)));
        } else {
            right = Some(right.map_or(min.x, |r: f32| r.min(min.x)));
        }
    }

    Some((Vec2::new(left?, top?), Vec2::new(right?, bottom?)))
}
