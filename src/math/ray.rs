//! Ray casting for picking
//!
//! The interaction system casts a single ray from the eye along the view
//! direction (the centre of the viewport) and keeps the nearest hit.

use super::{Aabb, Vec3};

/// A 3D ray with origin and direction
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,  // Normalized
}

impl Ray {
    /// Create a new ray, normalizing the direction
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize()
        }
    }

    /// Get point at distance t along ray
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Find where a ray enters a box (slab method).
///
/// Returns the distance along the ray to the entry point, `0.0` when the
/// origin is already inside, or None if the box is missed or entirely
/// behind the origin.
pub fn ray_aabb_intersection(ray: &Ray, aabb: &Aabb) -> Option<f32> {
    let origin = [ray.origin.x, ray.origin.y, ray.origin.z];
    let dir = [ray.direction.x, ray.direction.y, ray.direction.z];
    let min = [aabb.min.x, aabb.min.y, aabb.min.z];
    let max = [aabb.max.x, aabb.max.y, aabb.max.z];

    let mut t_near = f32::NEG_INFINITY;
    let mut t_far = f32::INFINITY;

    for axis in 0..3 {
        if dir[axis].abs() < 1e-8 {
            // Parallel to this slab: must already be between the planes
            if origin[axis] < min[axis] || origin[axis] > max[axis] {
                return None;
            }
            continue;
        }

        let inv = 1.0 / dir[axis];
        let mut t0 = (min[axis] - origin[axis]) * inv;
        let mut t1 = (max[axis] - origin[axis]) * inv;
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }

        t_near = t_near.max(t0);
        t_far = t_far.min(t1);
        if t_near > t_far {
            return None;
        }
    }

    if t_far < 0.0 {
        return None;  // Box is behind the ray
    }

    Some(t_near.max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box_at(center: Vec3) -> Aabb {
        Aabb::from_center_size(center, Vec3::new(1.0, 1.0, 1.0))
    }

    #[test]
    fn test_ray_at() {
        let ray = Ray::new(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(2.0, 0.0, 0.0),
        );
        let p = ray.at(5.0);
        assert!((p.x - 5.0).abs() < 0.001);
        assert!((p.y - 0.0).abs() < 0.001);
        assert!((p.z - 0.0).abs() < 0.001);
    }

    #[test]
    fn test_hit_box_in_front() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let t = ray_aabb_intersection(&ray, &unit_box_at(Vec3::new(0.0, 0.0, -5.0)));
        assert!((t.unwrap() - 4.5).abs() < 1e-5);
    }

    #[test]
    fn test_miss_box_behind() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        assert!(ray_aabb_intersection(&ray, &unit_box_at(Vec3::new(0.0, 0.0, 5.0))).is_none());
    }

    #[test]
    fn test_miss_box_to_the_side() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        assert!(ray_aabb_intersection(&ray, &unit_box_at(Vec3::new(3.0, 0.0, -5.0))).is_none());
    }

    #[test]
    fn test_origin_inside_box() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(ray_aabb_intersection(&ray, &unit_box_at(Vec3::ZERO)), Some(0.0));
    }

    #[test]
    fn test_diagonal_hit() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(1.0, 0.0, -1.0));
        let t = ray_aabb_intersection(&ray, &unit_box_at(Vec3::new(3.0, 0.0, -3.0)));
        // Enters at x = 2.5, z = -2.5
        let expected = (2.5f32 * 2.5 * 2.0).sqrt();
        assert!((t.unwrap() - expected).abs() < 1e-4);
    }
}
