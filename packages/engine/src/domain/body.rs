//! Body - a decorative rigid shape living on the stage
//!
//! Bodies never rotate: the stage only needs translation for the floating
//! effect, so shapes stay axis-aligned and collision stays cheap.

use super::palette::Style;
use super::vec2::Vec2;

pub type BodyId = u32;

/// Collision shape, centered on the body position
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Circle { radius: f32 },
    Rect { width: f32, height: f32 },
}

impl Shape {
    pub fn area(&self) -> f32 {
        match *self {
            Shape::Circle { radius } => std::f32::consts::PI * radius * radius,
            Shape::Rect { width, height } => width * height,
        }
    }

    /// Half size of the bounding box
    pub fn half_extents(&self) -> Vec2 {
        match *self {
            Shape::Circle { radius } => Vec2::new(radius, radius),
            Shape::Rect { width, height } => Vec2::new(width * 0.5, height * 0.5),
        }
    }

    /// Point test in body-local coordinates
    pub fn contains_local(&self, p: Vec2) -> bool {
        match *self {
            Shape::Circle { radius } => p.length_squared() <= radius * radius,
            Shape::Rect { width, height } => {
                p.x.abs() <= width * 0.5 && p.y.abs() <= height * 0.5
            }
        }
    }
}

/// Category tag; decides which per-tick forcing applies
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Balloon,
    Cake,
    Note,
    Wall,
}

impl Category {
    /// Buoyant bodies receive the periodic upward lift
    pub fn is_buoyant(&self) -> bool {
        matches!(self, Category::Balloon)
    }

    pub fn is_wall(&self) -> bool {
        matches!(self, Category::Wall)
    }

    /// Stable numeric tag used by the render instance buffer
    pub fn as_u8(&self) -> u8 {
        match self {
            Category::Balloon => 0,
            Category::Cake => 1,
            Category::Note => 2,
            Category::Wall => 3,
        }
    }
}

/// Physical material of a body
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    /// Bounciness (0.0 = no bounce, 1.0 = full elastic)
    pub restitution: f32,
    /// Fraction of velocity lost every tick (0.0 - 1.0)
    pub air_friction: f32,
    /// Mass per unit area
    pub density: f32,
}

impl Material {
    pub fn new(restitution: f32, air_friction: f32, density: f32) -> Self {
        Self {
            restitution: restitution.clamp(0.0, 1.0),
            air_friction: air_friction.clamp(0.0, 1.0),
            density: density.max(0.0),
        }
    }

    /// Walls: infinitely heavy, no drag; contacts take the body's restitution
    pub fn wall() -> Self {
        Self {
            restitution: 0.0,
            air_friction: 0.0,
            density: 0.0,
        }
    }
}

/// A simulated rigid body
#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    pub id: BodyId,
    pub category: Category,
    pub shape: Shape,
    /// World position (center)
    pub pos: Vec2,
    /// Velocity (pixels per tick)
    pub velocity: Vec2,
    pub material: Material,
    pub mass: f32,
    /// 1 / mass; 0 for static bodies
    pub inv_mass: f32,
    pub style: Style,
}

impl Body {
    pub fn new(
        id: BodyId,
        category: Category,
        shape: Shape,
        pos: Vec2,
        material: Material,
        style: Style,
    ) -> Self {
        let (mass, inv_mass) = if category.is_wall() {
            (f32::INFINITY, 0.0)
        } else {
            // Keep a floor on mass so impulses on tiny/zero-density bodies stay finite
            let mass = (material.density * shape.area()).max(0.01);
            (mass, 1.0 / mass)
        };

        Self {
            id,
            category,
            shape,
            pos,
            velocity: Vec2::zero(),
            material,
            mass,
            inv_mass,
            style,
        }
    }

    pub fn circle(id: BodyId, category: Category, pos: Vec2, radius: f32, material: Material, style: Style) -> Self {
        Self::new(id, category, Shape::Circle { radius }, pos, material, style)
    }

    pub fn rect(
        id: BodyId,
        category: Category,
        pos: Vec2,
        width: f32,
        height: f32,
        material: Material,
        style: Style,
    ) -> Self {
        Self::new(id, category, Shape::Rect { width, height }, pos, material, style)
    }

    /// Static boundary wall centered at `center`
    pub fn wall(id: BodyId, center: Vec2, width: f32, height: f32) -> Self {
        Self::new(
            id,
            Category::Wall,
            Shape::Rect { width, height },
            center,
            Material::wall(),
            Style::invisible(),
        )
    }

    #[inline]
    pub fn is_static(&self) -> bool {
        self.inv_mass == 0.0
    }

    /// Apply impulse at center of mass
    pub fn apply_impulse(&mut self, impulse: Vec2) {
        if self.is_static() {
            return;
        }
        self.velocity += impulse * self.inv_mass;
    }

    /// Change velocity directly, independent of mass
    pub fn apply_velocity_change(&mut self, dv: Vec2) {
        if self.is_static() {
            return;
        }
        self.velocity += dv;
    }

    /// Axis-aligned bounds as (min, max)
    pub fn bounds(&self) -> (Vec2, Vec2) {
        let half = self.shape.half_extents();
        (self.pos - half, self.pos + half)
    }

    pub fn contains_point(&self, p: Vec2) -> bool {
        self.shape.contains_local(p - self.pos)
    }
}
