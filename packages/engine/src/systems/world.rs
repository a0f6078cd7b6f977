use crate::domain::{Body, BodyId, Vec2};

use super::walls::{inner_bounds, wall_geometry};

/// Container of every body on the stage (walls included) plus gravity
pub struct World {
    bodies: Vec<Body>,
    next_id: BodyId,
    pub gravity: Vec2,
}

impl World {
    pub fn new(gravity: Vec2) -> Self {
        Self {
            bodies: Vec::new(),
            next_id: 1,
            gravity,
        }
    }

    /// Fresh body id; ids are never reused within one world
    pub fn allocate_id(&mut self) -> BodyId {
        let id = self.next_id;
        self.next_id = self.next_id.saturating_add(1);
        id
    }

    /// Add a body, assigning it a new id. Returns the id.
    pub fn add_body(&mut self, mut body: Body) -> BodyId {
        let id = self.allocate_id();
        body.id = id;
        self.bodies.push(body);
        id
    }

    /// Remove a body by id. Returns the removed body if it existed.
    pub fn remove_body(&mut self, id: BodyId) -> Option<Body> {
        let idx = self.bodies.iter().position(|b| b.id == id)?;
        Some(self.bodies.remove(idx))
    }

    /// Swap the current wall set for one sized to `width` x `height`.
    ///
    /// Old walls are dropped before the new ones go in, within this one call,
    /// so callers never see zero or eight walls.
    pub fn replace_walls(&mut self, width: f32, height: f32) {
        self.bodies.retain(|b| !b.category.is_wall());
        for rect in wall_geometry(width, height) {
            let id = self.allocate_id();
            self.bodies.push(Body::wall(id, rect.center, rect.width, rect.height));
        }
    }

    /// Remove all bodies, walls included
    pub fn clear(&mut self) {
        self.bodies.clear();
    }

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == id)
    }

    pub fn body_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.bodies.iter_mut().find(|b| b.id == id)
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    /// Non-wall bodies
    pub fn decorations(&self) -> impl Iterator<Item = &Body> {
        self.bodies.iter().filter(|b| !b.category.is_wall())
    }

    pub fn decorations_mut(&mut self) -> impl Iterator<Item = &mut Body> {
        self.bodies.iter_mut().filter(|b| !b.category.is_wall())
    }

    pub fn walls(&self) -> impl Iterator<Item = &Body> {
        self.bodies.iter().filter(|b| b.category.is_wall())
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn wall_count(&self) -> usize {
        self.walls().count()
    }

    pub fn decoration_count(&self) -> usize {
        self.decorations().count()
    }

    /// Area enclosed by the walls, as (min, max)
    pub fn interior(&self) -> Option<(Vec2, Vec2)> {
        inner_bounds(self.walls())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, Material, Style};

    fn note_at(x: f32, y: f32) -> Body {
        Body::rect(0, Category::Note, Vec2::new(x, y), 60.0, 30.0, Material::new(0.9, 0.04, 0.0005), Style::invisible())
    }

    #[test]
    fn replace_walls_keeps_exactly_four() {
        let mut world = World::new(Vec2::new(0.0, 0.3));
        world.add_body(note_at(10.0, 10.0));
        world.replace_walls(800.0, 600.0);
        assert_eq!(world.wall_count(), 4);

        let first: Vec<BodyId> = world.walls().map(|w| w.id).collect();
        world.replace_walls(1024.0, 768.0);
        world.replace_walls(640.0, 480.0);
        assert_eq!(world.wall_count(), 4);
        assert_eq!(world.decoration_count(), 1);

        // walls are recreated, not mutated
        assert!(world.walls().all(|w| !first.contains(&w.id)));
        let (min, max) = world.interior().expect("walls present");
        assert_eq!(min, Vec2::ZERO);
        assert_eq!(max, Vec2::new(640.0, 480.0));
    }

    #[test]
    fn ids_are_unique_and_removal_works() {
        let mut world = World::new(Vec2::zero());
        let a = world.add_body(note_at(1.0, 1.0));
        let b = world.add_body(note_at(2.0, 2.0));
        assert_ne!(a, b);
        assert!(world.remove_body(a).is_some());
        assert!(world.remove_body(a).is_none());
        assert!(world.body(b).is_some());
        world.clear();
        assert_eq!(world.body_count(), 0);
    }
}
