//! Read-only views of the world state

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::entity::{HenState, MovementMode};
use crate::grid::GridCell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Robot,
    Hen,
}

/// One entity as seen from outside the simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntitySnapshot {
    /// Agent id (robot 1, hens from 2)
    pub id: u32,
    pub kind: EntityKind,
    pub position: Vec3,
    pub heading: f32,
    pub cell: GridCell,
    /// Hens only
    pub mode: Option<MovementMode>,
    pub state: Option<HenState>,
    /// Robot only
    pub holding: bool,
}

/// Whole-world view at the end of a tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub tick: u64,
    pub delivered: u32,
    pub entities: Vec<EntitySnapshot>,
}

impl WorldSnapshot {
    pub fn robot(&self) -> Option<&EntitySnapshot> {
        self.entities.iter().find(|e| e.kind == EntityKind::Robot)
    }

    pub fn hens(&self) -> impl Iterator<Item = &EntitySnapshot> {
        self.entities.iter().filter(|e| e.kind == EntityKind::Hen)
    }
}
