//! Pointer constraint: a spring between the pointer and one grabbed body.

use crate::domain::{Body, BodyId, Vec2};

use super::world::World;

/// Active grab
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerConstraint {
    pub body: BodyId,
    /// Grab point relative to the body center
    pub offset: Vec2,
}

/// Pointer state plus the (at most one) constraint it owns
#[derive(Clone, Debug)]
pub struct Pointer {
    pub position: Vec2,
    pub stiffness: f32,
    constraint: Option<PointerConstraint>,
}

impl Pointer {
    pub fn new(stiffness: f32) -> Self {
        Self {
            position: Vec2::zero(),
            stiffness: stiffness.clamp(0.0, 1.0),
            constraint: None,
        }
    }

    pub fn constraint(&self) -> Option<PointerConstraint> {
        self.constraint
    }

    pub fn grabbed(&self) -> Option<BodyId> {
        self.constraint.map(|c| c.body)
    }

    /// Press at `at`: grab the topmost decoration under the pointer.
    /// Any previous grab is dropped first.
    pub fn press(&mut self, world: &World, at: Vec2) -> Option<BodyId> {
        self.position = at;
        self.constraint = hit_test(world.bodies(), at).map(|body| PointerConstraint {
            body: body.id,
            offset: at - body.pos,
        });
        self.grabbed()
    }

    pub fn move_to(&mut self, at: Vec2) {
        self.position = at;
    }

    /// Release the grab; returns the body that was held
    pub fn release(&mut self) -> Option<BodyId> {
        self.constraint.take().map(|c| c.body)
    }

    /// Pull the grabbed body toward the pointer.
    ///
    /// The velocity is overwritten with the spring step, so on release the
    /// body keeps the momentum of the drag.
    pub fn apply(&mut self, world: &mut World) {
        let Some(c) = self.constraint else {
            return;
        };
        let Some(body) = world.body_mut(c.body) else {
            // body vanished (cleared world)
            self.constraint = None;
            return;
        };
        let anchor = body.pos + c.offset;
        body.velocity = (self.position - anchor) * self.stiffness;
    }
}

/// Topmost (last drawn) decoration containing `at`
pub fn hit_test(bodies: &[Body], at: Vec2) -> Option<&Body> {
    bodies
        .iter()
        .rev()
        .filter(|b| !b.category.is_wall())
        .find(|b| b.contains_point(at))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, Material, Style};

    fn world_with_note(x: f32, y: f32) -> (World, BodyId) {
        let mut world = World::new(Vec2::zero());
        world.replace_walls(800.0, 600.0);
        let id = world.add_body(Body::rect(
            0,
            Category::Note,
            Vec2::new(x, y),
            60.0,
            30.0,
            Material::new(0.9, 0.0, 0.0005),
            Style::invisible(),
        ));
        (world, id)
    }

    #[test]
    fn press_on_empty_space_grabs_nothing() {
        let (world, _) = world_with_note(100.0, 100.0);
        let mut p = Pointer::new(0.2);
        assert_eq!(p.press(&world, Vec2::new(400.0, 400.0)), None);
        assert!(p.constraint().is_none());
    }

    #[test]
    fn walls_cannot_be_grabbed() {
        let (world, _) = world_with_note(100.0, 100.0);
        let mut p = Pointer::new(0.2);
        assert_eq!(p.press(&world, Vec2::new(400.0, -5.0)), None);
    }

    #[test]
    fn spring_pulls_toward_pointer_and_release_clears() {
        let (mut world, id) = world_with_note(100.0, 100.0);
        let mut p = Pointer::new(0.2);
        assert_eq!(p.press(&world, Vec2::new(110.0, 100.0)), Some(id));

        p.move_to(Vec2::new(210.0, 100.0));
        p.apply(&mut world);
        let v = world.body(id).map(|b| b.velocity).unwrap_or_default();
        assert!((v.x - 20.0).abs() < 1e-4);
        assert_eq!(v.y, 0.0);

        assert_eq!(p.release(), Some(id));
        assert_eq!(p.release(), None);
    }

    #[test]
    fn second_press_replaces_the_grab() {
        let (mut world, first) = world_with_note(100.0, 100.0);
        let second = world.add_body(Body::circle(
            0,
            Category::Balloon,
            Vec2::new(400.0, 300.0),
            30.0,
            Material::new(0.8, 0.02, 0.0008),
            Style::invisible(),
        ));
        let mut p = Pointer::new(0.2);
        assert_eq!(p.press(&world, Vec2::new(100.0, 100.0)), Some(first));
        assert_eq!(p.press(&world, Vec2::new(400.0, 300.0)), Some(second));
        assert_eq!(p.grabbed(), Some(second));
    }
}
