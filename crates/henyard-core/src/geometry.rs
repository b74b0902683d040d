//! Obstacle primitives on the navigation plane
//!
//! All geometry lives in the horizontal (x, z) plane. `Vec2::x` is world x,
//! `Vec2::y` is world z.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::CollisionError;

/// A circular obstacle (tree, prop)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircularObstacle {
    pub center: Vec2,
    pub radius: f32,
}

impl CircularObstacle {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }
}

/// Axis-aligned bounds on the navigation plane
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Bounds of a non-empty point set
    fn from_points(points: &[Vec2]) -> Self {
        let mut min = Vec2::splat(f32::INFINITY);
        let mut max = Vec2::splat(f32::NEG_INFINITY);
        for p in points {
            min = min.min(*p);
            max = max.max(*p);
        }
        Self { min, max }
    }

    /// Closest point of the box to `p` (clamp per axis)
    pub fn closest_point(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            self.min.x.max(p.x.min(self.max.x)),
            self.min.y.max(p.y.min(self.max.y)),
        )
    }

    /// Overlap test against the square bounding box of a circle.
    /// Strict on all four sides: touching boxes do not overlap.
    pub fn overlaps_circle_box(&self, center: Vec2, radius: f32) -> bool {
        center.x + radius > self.min.x
            && center.x - radius < self.max.x
            && center.y + radius > self.min.y
            && center.y - radius < self.max.y
    }
}

/// A simple polygon obstacle (building, structure, lake).
///
/// Vertices are expected to describe a non-self-intersecting polygon; the
/// last vertex connects back to the first. The bounding box is computed
/// once at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolygonObstacle {
    vertices: Vec<Vec2>,
    bounds: Aabb,
}

impl PolygonObstacle {
    pub const MIN_VERTICES: usize = 3;

    pub fn new(vertices: Vec<Vec2>) -> Result<Self, CollisionError> {
        if vertices.len() < Self::MIN_VERTICES {
            return Err(CollisionError::DegeneratePolygon {
                count: vertices.len(),
            });
        }
        let bounds = Aabb::from_points(&vertices);
        Ok(Self { vertices, bounds })
    }

    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    pub fn bounds(&self) -> Aabb {
        self.bounds
    }

    /// Ray-casting containment test, see [`point_in_polygon`]
    pub fn contains(&self, p: Vec2) -> bool {
        point_in_polygon(p.x, p.y, &self.vertices)
    }
}

/// Ray-casting point-in-polygon test.
///
/// Casts a ray from (x, z) towards +x and counts edge crossings; odd parity
/// means inside. Edges whose endpoints sit on the same side of the ray
/// (including horizontal edges) are skipped by the `(zi > z) != (zj > z)`
/// guard before the division, so it never divides by zero. Points exactly
/// on an edge get whatever the parity says.
pub fn point_in_polygon(x: f32, z: f32, vertices: &[Vec2]) -> bool {
    let n = vertices.len();
    if n == 0 {
        return false;
    }

    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (xi, zi) = (vertices[i].x, vertices[i].y);
        let (xj, zj) = (vertices[j].x, vertices[j].y);

        if ((zi > z) != (zj > z)) && (x < (xj - xi) * (z - zi) / (zj - zi) + xi) {
            inside = !inside;
        }
        j = i;
    }

    inside
}
