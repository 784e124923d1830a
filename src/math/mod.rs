//! Geometry for movement, collision and picking
//!
//! - `vec` - Vec3 with the usual vector ops
//! - `aabb` - axis-aligned boxes for walls, props and the player
//! - `ray` - camera rays and the ray/box slab test

mod aabb;
mod ray;
mod vec;

pub use aabb::Aabb;
pub use ray::{Ray, ray_aabb_intersection};
pub use vec::Vec3;
