use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Axis-aligned collision box centred on the entity's position.
#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct BoundingBox {
    pub size: Vector2,
    pub half_size: Vector2,
}

impl BoundingBox {
    pub fn new(size: Vector2) -> Self {
        Self {
            size,
            half_size: size / 2.0,
        }
    }

    /// Returns (min, max) of the box for a given centre position.
    pub fn aabb(&self, center: Vector2) -> (Vector2, Vector2) {
        (center - self.half_size, center + self.half_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_size_derived() {
        let bb = BoundingBox::new(Vector2::new(64.0, 32.0));
        assert_eq!(bb.half_size, Vector2::new(32.0, 16.0));
    }

    #[test]
    fn test_aabb_is_centered() {
        let bb = BoundingBox::new(Vector2::new(10.0, 20.0));
        let (min, max) = bb.aabb(Vector2::new(100.0, 100.0));
        assert_eq!(min, Vector2::new(95.0, 90.0));
        assert_eq!(max, Vector2::new(105.0, 110.0));
    }
}
