//! Axis-aligned bounding boxes
//!
//! World space is y-up with the ground at y = 0; x grows to the right.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned box given by center and full size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub center: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(center: Vec2, size: Vec2) -> Self {
        Self { center, size }
    }

    /// Box resting on (bottom edge at) `bottom`
    pub fn from_bottom(x: f32, bottom: f32, size: Vec2) -> Self {
        Self::new(Vec2::new(x, bottom + size.y / 2.0), size)
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        self.center - self.size / 2.0
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.center + self.size / 2.0
    }

    /// Strict overlap test (touching edges do not count)
    pub fn intersects(&self, other: &Aabb) -> bool {
        let (a_min, a_max) = (self.min(), self.max());
        let (b_min, b_max) = (other.min(), other.max());
        a_min.x < b_max.x && a_max.x > b_min.x && a_min.y < b_max.y && a_max.y > b_min.y
    }
}
