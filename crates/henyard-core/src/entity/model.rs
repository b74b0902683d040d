//! Optional model geometry for renderable entities
//!
//! Model parsing is left to the presentation layer; the simulation only
//! records which model files exist. A missing file is logged once at load
//! and the entity keeps simulating without geometry.

use std::path::{Path, PathBuf};

/// A model file that was found at load time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelHandle {
    path: PathBuf,
}

impl ModelHandle {
    /// Look for a model file; warns and returns `None` if it is missing
    pub fn probe(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();
        if path.is_file() {
            Some(Self {
                path: path.to_path_buf(),
            })
        } else {
            log::warn!("Could not load 3D model from {}", path.display());
            None
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Robot body and arm models
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RobotModels {
    pub body: Option<ModelHandle>,
    pub left_arm: Option<ModelHandle>,
    pub right_arm: Option<ModelHandle>,
}

impl RobotModels {
    pub fn load(root: &Path) -> Self {
        Self {
            body: ModelHandle::probe(root.join("robot/robot.obj")),
            left_arm: ModelHandle::probe(root.join("robot/brazoizq.obj")),
            right_arm: ModelHandle::probe(root.join("robot/brazoder.obj")),
        }
    }
}

/// Hen body, leg and wing models
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HenModels {
    pub body: Option<ModelHandle>,
    pub left_leg: Option<ModelHandle>,
    pub right_leg: Option<ModelHandle>,
    pub left_wing: Option<ModelHandle>,
    pub right_wing: Option<ModelHandle>,
}

impl HenModels {
    pub fn load(root: &Path) -> Self {
        Self {
            body: ModelHandle::probe(root.join("gallina/gallina.obj")),
            left_leg: ModelHandle::probe(root.join("gallina/pataizq.obj")),
            right_leg: ModelHandle::probe(root.join("gallina/patader.obj")),
            left_wing: ModelHandle::probe(root.join("gallina/alaizq.obj")),
            right_wing: ModelHandle::probe(root.join("gallina/alader.obj")),
        }
    }
}
