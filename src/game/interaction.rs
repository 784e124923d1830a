//! Object picking
//!
//! A ray from the eye along the view direction. Walls and every visible
//! prop take part in the hit test so furniture occludes what is behind it,
//! but only an interactive prop can come out as the pick.

use crate::math::{ray_aabb_intersection, Ray};
use crate::world::{Layout, PropId};
use super::puzzle::PuzzleState;

#[derive(Debug, Clone, PartialEq)]
pub struct Pick {
    pub prop: PropId,
    pub distance: f32,
}

/// Nearest interactive prop along `ray` within `max_distance`
pub fn pick(ray: &Ray, layout: &Layout, puzzle: &PuzzleState, max_distance: f32) -> Option<Pick> {
    let nearest_wall = layout
        .walls
        .iter()
        .filter_map(|w| ray_aabb_intersection(ray, &w.bounds))
        .fold(f32::INFINITY, f32::min);

    let mut best: Option<(usize, f32)> = None;
    for (i, prop) in layout.props.iter().enumerate() {
        if !puzzle.is_pickable(layout, i) {
            continue;
        }
        if let Some(t) = ray_aabb_intersection(ray, &prop.bounds) {
            if best.map_or(true, |(_, bt)| t < bt) {
                best = Some((i, t));
            }
        }
    }

    let (index, distance) = best?;
    if distance > max_distance || distance > nearest_wall {
        return None;
    }
    let prop = &layout.props[index];
    prop.kind.is_interactive().then(|| Pick { prop: prop.id.clone(), distance })
}
