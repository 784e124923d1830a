//! Axis-aligned bounding boxes

use serde::{Deserialize, Serialize};
use super::Vec3;

/// Axis-aligned box given by its minimum and maximum corners
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Box spanning two arbitrary corners (sorted per axis)
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: Vec3::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z)),
            max: Vec3::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z)),
        }
    }

    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Overlap test. Boxes that only share a face do not intersect.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x && self.max.x > other.min.x
            && self.min.y < other.max.y && self.max.y > other.min.y
            && self.min.z < other.max.z && self.max.z > other.min.z
    }

    /// Point inside or on the surface
    pub fn contains_point(&self, p: Vec3) -> bool {
        p.x >= self.min.x && p.x <= self.max.x
            && p.y >= self.min.y && p.y <= self.max.y
            && p.z >= self.min.z && p.z <= self.max.z
    }

    pub fn translated(&self, offset: Vec3) -> Aabb {
        Aabb {
            min: self.min + offset,
            max: self.max + offset,
        }
    }

    /// min <= max on every axis and all coordinates finite
    pub fn is_well_formed(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
            && self.min.x <= self.max.x
            && self.min.y <= self.max.y
            && self.min.z <= self.max.z
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_at(x: f32, y: f32, z: f32) -> Aabb {
        Aabb::from_center_size(Vec3::new(x, y, z), Vec3::new(1.0, 1.0, 1.0))
    }

    #[test]
    fn test_new_sorts_corners() {
        let b = Aabb::new(Vec3::new(2.0, -1.0, 5.0), Vec3::new(-2.0, 1.0, 3.0));
        assert_eq!(b.min, Vec3::new(-2.0, -1.0, 3.0));
        assert_eq!(b.max, Vec3::new(2.0, 1.0, 5.0));
        assert!(b.is_well_formed());
    }

    #[test]
    fn test_overlapping_boxes_intersect() {
        assert!(unit_at(0.0, 0.0, 0.0).intersects(&unit_at(0.5, 0.5, 0.5)));
    }

    #[test]
    fn test_touching_faces_do_not_intersect() {
        assert!(!unit_at(0.0, 0.0, 0.0).intersects(&unit_at(1.0, 0.0, 0.0)));
    }

    #[test]
    fn test_separated_on_one_axis() {
        // Overlap on X and Y is not enough
        assert!(!unit_at(0.0, 0.0, 0.0).intersects(&unit_at(0.2, 0.2, 3.0)));
    }

    #[test]
    fn test_contains_point_includes_faces() {
        let b = unit_at(0.0, 0.0, 0.0);
        assert!(b.contains_point(Vec3::ZERO));
        assert!(b.contains_point(Vec3::new(0.5, -0.5, 0.5)));
        assert!(!b.contains_point(Vec3::new(0.0, 0.0, 0.51)));
    }

    #[test]
    fn test_translated() {
        let b = unit_at(0.0, 0.0, 0.0).translated(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(b.center(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(b.size(), Vec3::new(1.0, 1.0, 1.0));
    }
}
