//! World bounds and the discrete grid used by the decision service
//!
//! The grid is `1..=size` on both axes; grid x maps to world x and grid y
//! maps to world z. Both directions clamp their input first, so no mapping
//! ever produces a point outside the bounds or a cell outside the grid.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Playable rectangle on the navigation plane
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldBounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl WorldBounds {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self {
            min: min.min(max),
            max: min.max(max),
        }
    }

    pub fn clamp(&self, p: Vec2) -> Vec2 {
        p.clamp(self.min, self.max)
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.cmpge(self.min).all() && p.cmple(self.max).all()
    }

    pub fn extent(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }
}

/// A cell on the decision-service grid (1-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridCell {
    pub x: u32,
    pub y: u32,
}

impl GridCell {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Affine mapping between grid cells and world positions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridMapping {
    size: u32,
    bounds: WorldBounds,
}

impl GridMapping {
    /// `size` cells per axis; a size of 0 is treated as 1
    pub fn new(size: u32, bounds: WorldBounds) -> Self {
        Self {
            size: size.max(1),
            bounds,
        }
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn bounds(&self) -> WorldBounds {
        self.bounds
    }

    /// Cell centre in world coordinates. Cell 1 sits on `min`, cell `size`
    /// on `max`.
    pub fn to_world(&self, cell: GridCell) -> Vec2 {
        if self.size == 1 {
            return self.bounds.center();
        }
        let span = (self.size - 1) as f32;
        let x = (cell.x.clamp(1, self.size) - 1) as f32 / span;
        let y = (cell.y.clamp(1, self.size) - 1) as f32 / span;
        self.bounds.min + Vec2::new(x, y) * self.bounds.extent()
    }

    /// Nearest cell to a world position
    pub fn to_cell(&self, p: Vec2) -> GridCell {
        let p = self.bounds.clamp(p);
        let extent = self.bounds.extent();
        let span = (self.size - 1) as f32;

        let axis = |offset: f32, extent: f32| -> u32 {
            if extent <= 0.0 {
                return 1;
            }
            let index = (offset / extent * span).round() as u32 + 1;
            index.clamp(1, self.size)
        };

        GridCell::new(
            axis(p.x - self.bounds.min.x, extent.x),
            axis(p.y - self.bounds.min.y, extent.y),
        )
    }
}
