use glam::Vec2;

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

/// Axis-aligned bounding box in world units (y-down).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Box of full extent `size` centered on `center`.
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Strict overlap: boxes that only touch along an edge do not intersect.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }

    pub fn contains_point(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

// ---------------------------------------------------------------------------
// Collision backend
// ---------------------------------------------------------------------------

/// Narrow-phase overlap test the game logic depends on.
/// Swappable so a host physics engine (or a test stub) can answer instead.
pub trait CollisionBackend {
    fn overlaps(&self, a: &Aabb, b: &Aabb) -> bool;
}

/// Default backend: plain AABB intersection.
#[derive(Debug, Clone, Copy, Default)]
pub struct AabbOverlap;

impl CollisionBackend for AabbOverlap {
    fn overlaps(&self, a: &Aabb, b: &Aabb) -> bool {
        a.intersects(b)
    }
}

// ---------------------------------------------------------------------------
// Kinematic body
// ---------------------------------------------------------------------------

/// A kinematic body: explicit-Euler velocity integration with optional
/// gravity and a terminal fall speed. No contact response.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    /// Center position.
    pub pos: Vec2,
    /// Velocity in units per second.
    pub vel: Vec2,
    /// Full extent.
    pub size: Vec2,
    /// Whether world gravity applies.
    pub gravity_enabled: bool,
    /// Cap on downward (+y) speed. `f32::INFINITY` disables the cap.
    pub max_fall_speed: f32,
}

impl Body {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            size,
            gravity_enabled: false,
            max_fall_speed: f32::INFINITY,
        }
    }

    // -- Builder pattern --

    pub fn with_velocity(mut self, vel: Vec2) -> Self {
        self.vel = vel;
        self
    }

    pub fn with_gravity(mut self, enabled: bool) -> Self {
        self.gravity_enabled = enabled;
        self
    }

    pub fn with_max_fall_speed(mut self, speed: f32) -> Self {
        self.max_fall_speed = speed;
        self
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_center(self.pos, self.size)
    }

    /// Advance by `dt` seconds under `gravity`.
    pub fn step(&mut self, gravity: Vec2, dt: f32) {
        if self.gravity_enabled {
            self.vel += gravity * dt;
            if self.vel.y > self.max_fall_speed {
                self.vel.y = self.max_fall_speed;
            }
        }
        self.pos += self.vel * dt;
    }

    /// Stop all motion and ignore gravity until re-enabled.
    pub fn halt(&mut self) {
        self.vel = Vec2::ZERO;
        self.gravity_enabled = false;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touching_edges_do_not_intersect() {
        let a = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Aabb::new(Vec2::new(10.0, 0.0), Vec2::new(20.0, 10.0));
        assert!(!a.intersects(&b));

        let c = Aabb::new(Vec2::new(9.0, 9.0), Vec2::new(20.0, 20.0));
        assert!(a.intersects(&c));
        assert!(AabbOverlap.overlaps(&a, &c));
    }

    #[test]
    fn from_center_round_trips() {
        let b = Aabb::from_center(Vec2::new(50.0, 40.0), Vec2::new(20.0, 10.0));
        assert_eq!(b.min, Vec2::new(40.0, 35.0));
        assert_eq!(b.max, Vec2::new(60.0, 45.0));
        assert_eq!(b.center(), Vec2::new(50.0, 40.0));
        assert_eq!(b.size(), Vec2::new(20.0, 10.0));
        assert!(b.contains_point(Vec2::new(60.0, 45.0)));
    }

    #[test]
    fn gravity_only_when_enabled() {
        let gravity = Vec2::new(0.0, 100.0);
        let mut floating = Body::new(Vec2::ZERO, Vec2::ONE);
        floating.step(gravity, 0.5);
        assert_eq!(floating.pos, Vec2::ZERO);

        let mut falling = Body::new(Vec2::ZERO, Vec2::ONE).with_gravity(true);
        falling.step(gravity, 0.5);
        assert_eq!(falling.vel.y, 50.0);
        assert!(falling.pos.y > 0.0, "body should fall: {:?}", falling.pos);
    }

    #[test]
    fn fall_speed_is_capped() {
        let mut body = Body::new(Vec2::ZERO, Vec2::ONE)
            .with_gravity(true)
            .with_max_fall_speed(30.0);
        for _ in 0..10 {
            body.step(Vec2::new(0.0, 1000.0), 0.1);
        }
        assert_eq!(body.vel.y, 30.0);
    }

    #[test]
    fn constant_velocity_without_gravity() {
        let mut body = Body::new(Vec2::new(100.0, 0.0), Vec2::ONE)
            .with_velocity(Vec2::new(-20.0, 0.0));
        body.step(Vec2::new(0.0, 1000.0), 0.5);
        assert_eq!(body.pos, Vec2::new(90.0, 0.0));

        body.halt();
        body.step(Vec2::new(0.0, 1000.0), 0.5);
        assert_eq!(body.pos, Vec2::new(90.0, 0.0));
    }
}
