//! Static obstacle set and the validity/move-resolution queries

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::level::LevelLayout;
use crate::error::CollisionError;
use crate::geometry::{CircularObstacle, PolygonObstacle};

/// Owns every static obstacle and answers collision queries.
///
/// The obstacle lists are append-only. Adding obstacles needs `&mut self`,
/// so it cannot overlap with queries running against a shared borrow.
#[derive(Debug, Clone)]
pub struct CollisionHandler {
    circles: Vec<CircularObstacle>,
    polygons: Vec<PolygonObstacle>,
    default_radius: f32,
}

/// Read-only dump of obstacle geometry for diagnostics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstaclesInfo {
    /// (x, z, radius)
    pub circular_obstacles: Vec<(f32, f32, f32)>,
    /// (x, z) vertex lists
    pub rectangular_obstacles: Vec<Vec<(f32, f32)>>,
}

impl CollisionHandler {
    /// Build the obstacle set from a level layout, scaling every authored
    /// coordinate by `layout.scale`.
    pub fn from_layout(layout: &LevelLayout) -> Result<Self, CollisionError> {
        let mut handler = Self::empty();
        handler.default_radius = layout.tree_radius;

        for &point in &layout.trees {
            handler.add_circle(layout.scaled(point), Some(layout.tree_radius));
        }
        for &point in &layout.small_objects {
            handler.add_circle(layout.scaled(point), Some(layout.small_object_radius));
        }
        for structure in &layout.structures {
            let vertices = structure.iter().map(|&p| layout.scaled(p)).collect();
            handler.add_polygon(vertices)?;
        }

        log::debug!(
            "Collision handler built: {} circles, {} polygons (scale {})",
            handler.circles.len(),
            handler.polygons.len(),
            layout.scale
        );

        Ok(handler)
    }

    /// The built-in farm level
    pub fn farm() -> Self {
        // The farm tables only contain 4-vertex structures
        Self::from_layout(&LevelLayout::farm()).unwrap_or_else(|_| Self::empty())
    }

    /// No obstacles at all
    pub fn empty() -> Self {
        Self {
            circles: Vec::new(),
            polygons: Vec::new(),
            default_radius: LevelLayout::TREE_RADIUS,
        }
    }

    pub fn circles(&self) -> &[CircularObstacle] {
        &self.circles
    }

    pub fn polygons(&self) -> &[PolygonObstacle] {
        &self.polygons
    }

    /// True if the circle at (x, z) overlaps any circular obstacle.
    /// Exact tangency is not a collision.
    pub fn collides_circle(&self, x: f32, z: f32, entity_radius: f32) -> bool {
        let p = Vec2::new(x, z);
        self.circles
            .iter()
            .any(|obstacle| p.distance(obstacle.center) < obstacle.radius + entity_radius)
    }

    /// True if the circle at (x, z) hits any polygon obstacle.
    ///
    /// After the expanded bounding-box reject, a hit is either the centre
    /// lying inside the polygon or the centre being closer than
    /// `entity_radius` to the polygon's bounding box. The proximity part
    /// tests against the box, not the exact outline, so rotated shapes get
    /// box-shaped margins.
    pub fn collides_rect(&self, x: f32, z: f32, entity_radius: f32) -> bool {
        let p = Vec2::new(x, z);
        for polygon in &self.polygons {
            let bounds = polygon.bounds();
            if !bounds.overlaps_circle_box(p, entity_radius) {
                continue;
            }

            if polygon.contains(p) {
                return true;
            }

            if p.distance(bounds.closest_point(p)) < entity_radius {
                return true;
            }
        }
        false
    }

    /// True if an entity of `entity_radius` can stand at (x, z)
    pub fn is_valid(&self, x: f32, z: f32, entity_radius: f32) -> bool {
        if self.collides_rect(x, z, entity_radius) {
            return false;
        }
        if self.collides_circle(x, z, entity_radius) {
            return false;
        }
        true
    }

    /// Resolve a blocked move by axis-decomposed sliding.
    ///
    /// Tries, in order: the full move, x only, z only, no move. The order
    /// is part of the behaviour (wall hugging depends on x being tried
    /// before z).
    pub fn resolve(&self, old: Vec2, new: Vec2, entity_radius: f32) -> Vec2 {
        if self.is_valid(new.x, new.y, entity_radius) {
            return new;
        }
        if self.is_valid(new.x, old.y, entity_radius) {
            return Vec2::new(new.x, old.y);
        }
        if self.is_valid(old.x, new.y, entity_radius) {
            return Vec2::new(old.x, new.y);
        }
        old
    }

    /// Append a circular obstacle; `None` uses the tree radius
    pub fn add_circle(&mut self, center: Vec2, radius: Option<f32>) {
        let radius = radius.unwrap_or(self.default_radius);
        self.circles.push(CircularObstacle::new(center, radius));
    }

    /// Append a polygon obstacle (world coordinates, no scaling)
    pub fn add_polygon(&mut self, vertices: Vec<Vec2>) -> Result<(), CollisionError> {
        self.polygons.push(PolygonObstacle::new(vertices)?);
        Ok(())
    }

    pub fn obstacles_info(&self) -> ObstaclesInfo {
        ObstaclesInfo {
            circular_obstacles: self
                .circles
                .iter()
                .map(|c| (c.center.x, c.center.y, c.radius))
                .collect(),
            rectangular_obstacles: self
                .polygons
                .iter()
                .map(|p| p.vertices().iter().map(|v| (v.x, v.y)).collect())
                .collect(),
        }
    }
}

impl Default for CollisionHandler {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_tree() -> CollisionHandler {
        let mut handler = CollisionHandler::empty();
        handler.add_circle(Vec2::ZERO, Some(1.5));
        handler
    }

    fn single_box() -> CollisionHandler {
        let mut handler = CollisionHandler::empty();
        handler
            .add_polygon(vec![
                Vec2::new(0.0, 0.0),
                Vec2::new(10.0, 0.0),
                Vec2::new(10.0, 10.0),
                Vec2::new(0.0, 10.0),
            ])
            .unwrap();
        handler
    }

    #[test]
    fn test_circle_tangency_is_not_collision() {
        let handler = single_tree();
        assert!(handler.is_valid(4.0, 0.0, 2.5));
        assert!(!handler.is_valid(3.99, 0.0, 2.5));
        assert!(!handler.collides_circle(0.0, 4.0, 2.5));
        assert!(handler.collides_circle(0.0, 3.9, 2.5));
    }

    #[test]
    fn test_zero_radius_entity() {
        let handler = single_tree();
        assert!(handler.collides_circle(1.0, 0.0, 0.0));
        assert!(!handler.collides_circle(1.5, 0.0, 0.0));
    }

    #[test]
    fn test_rect_inside_and_margin() {
        let handler = single_box();
        assert!(handler.collides_rect(5.0, 5.0, 0.0));
        assert!(handler.collides_rect(11.0, 5.0, 2.0));
        assert!(!handler.collides_rect(12.0, 5.0, 2.0));
        assert!(!handler.collides_rect(-3.0, 5.0, 2.0));
    }

    #[test]
    fn test_rect_uses_box_margin_at_corners() {
        let handler = single_box();
        // Diagonal distance to the (10, 10) corner is sqrt(2) ~ 1.414
        assert!(handler.collides_rect(11.0, 11.0, 1.5));
        assert!(!handler.collides_rect(11.0, 11.0, 1.4));
    }

    #[test]
    fn test_rotated_polygon_uses_bounding_box_margin() {
        // Diamond: the point (4.5, 4.5) lies outside the outline but inside
        // the bounding box, so only the box margin decides
        let mut handler = CollisionHandler::empty();
        handler
            .add_polygon(vec![
                Vec2::new(0.0, -5.0),
                Vec2::new(5.0, 0.0),
                Vec2::new(0.0, 5.0),
                Vec2::new(-5.0, 0.0),
            ])
            .unwrap();
        assert!(handler.collides_rect(4.5, 4.5, 0.5));
    }

    #[test]
    fn test_resolve_full_move() {
        let handler = single_tree();
        let out = handler.resolve(Vec2::new(10.0, 10.0), Vec2::new(10.5, 10.0), 1.0);
        assert_eq!(out, Vec2::new(10.5, 10.0));
    }

    #[test]
    fn test_resolve_slides_along_x_first() {
        let handler = single_box();
        // Moving diagonally into the box's bottom face from below
        let old = Vec2::new(5.0, -2.5);
        let new = Vec2::new(5.5, -1.5);
        let out = handler.resolve(old, new, 2.0);
        assert_eq!(out, Vec2::new(5.5, -2.5));
    }

    #[test]
    fn test_resolve_slides_along_z() {
        let handler = single_box();
        // Moving diagonally into the box's left face
        let old = Vec2::new(-2.5, 5.0);
        let new = Vec2::new(-1.5, 5.5);
        let out = handler.resolve(old, new, 2.0);
        assert_eq!(out, Vec2::new(-2.5, 5.5));
    }

    #[test]
    fn test_resolve_blocked_returns_old() {
        let mut handler = single_box();
        // Tree just above the start point closes the z-only slide
        handler.add_circle(Vec2::new(-2.5, 8.5), Some(1.5));

        let old = Vec2::new(-2.5, 5.0);
        let new = Vec2::new(-1.5, 7.0);
        assert!(handler.is_valid(old.x, old.y, 2.0));
        assert!(!handler.is_valid(new.x, new.y, 2.0));
        assert!(!handler.is_valid(new.x, old.y, 2.0));
        assert!(!handler.is_valid(old.x, new.y, 2.0));

        let out = handler.resolve(old, new, 2.0);
        assert_eq!(out, old);
        // Resolving again from the returned point is stable
        assert_eq!(handler.resolve(out, new, 2.0), old);
    }

    #[test]
    fn test_add_circle_default_radius() {
        let mut handler = CollisionHandler::empty();
        handler.add_circle(Vec2::new(3.0, 3.0), None);
        assert_eq!(handler.circles()[0].radius, LevelLayout::TREE_RADIUS);
    }

    #[test]
    fn test_default_matches_empty() {
        let mut handler = CollisionHandler::default();
        assert!(handler.circles().is_empty());
        assert!(handler.polygons().is_empty());

        handler.add_circle(Vec2::new(1.0, 2.0), None);
        let mut empty = CollisionHandler::empty();
        empty.add_circle(Vec2::new(1.0, 2.0), None);
        assert_eq!(handler.circles(), empty.circles());
        assert_eq!(handler.circles()[0].radius, LevelLayout::TREE_RADIUS);
    }

    #[test]
    fn test_farm_is_scaled() {
        let handler = CollisionHandler::farm();
        assert_eq!(handler.circles().len(), 24);
        assert_eq!(handler.polygons().len(), 7);
        let first = handler.circles()[0];
        assert_eq!(first.center, Vec2::new(12.393 * 7.0, 13.74 * 7.0));
        assert_eq!(first.radius, 1.5);
    }

    #[test]
    fn test_obstacles_info_projection() {
        let mut handler = single_tree();
        handler
            .add_polygon(vec![Vec2::ZERO, Vec2::X, Vec2::ONE])
            .unwrap();
        let info = handler.obstacles_info();
        assert_eq!(info.circular_obstacles, vec![(0.0, 0.0, 1.5)]);
        assert_eq!(
            info.rectangular_obstacles,
            vec![vec![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]]
        );
    }
}
