//! Simulation context
//!
//! `World` owns every piece of mutable simulation state. All updates go
//! through [`World::tick`] and [`World::apply_goal_update`]; there are no
//! globals.

use std::path::Path;

use glam::{Vec2, Vec3};

use crate::capture::{CaptureEvent, CaptureSystem};
use crate::collision::CollisionHandler;
use crate::entity::{Hen, HenModels, MovementMode, Robot, RobotInput, RobotModels};
use crate::error::{GoalError, ModeParseError};
use crate::grid::{GridCell, GridMapping, WorldBounds};
use crate::protocol::{self, AgentGoal, GoalPosition, GoalUpdate, ROBOT_AGENT_ID};
use crate::render::{self, DrawCommand};
use crate::settings::SimulationSettings;
use crate::snapshot::{EntityKind, EntitySnapshot, WorldSnapshot};

/// What applying one goal did to its hen
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GoalOutcome {
    /// A new target was committed
    pub accepted: bool,
    /// Mode name that did not parse; the position was applied regardless
    pub bad_mode: Option<ModeParseError>,
}

#[derive(Debug)]
pub struct World {
    collision: CollisionHandler,
    robot: Robot,
    hens: Vec<Hen>,
    capture: CaptureSystem,
    bounds: WorldBounds,
    grid: GridMapping,
    tick: u64,
    settings: SimulationSettings,
}

impl World {
    pub fn new(settings: SimulationSettings, collision: CollisionHandler) -> Self {
        let robot = Robot::new(&settings.robot);
        let hens: Vec<Hen> = settings
            .hen
            .spawn_points
            .iter()
            .map(|&(x, z)| Hen::new(Vec3::new(x, 0.0, z), &settings.hen))
            .collect();

        for (i, hen) in hens.iter().enumerate() {
            if !collision.is_valid(hen.position.x, hen.position.z, hen.radius) {
                log::warn!("Hen {} spawns inside an obstacle at {:?}", i, hen.position);
            }
        }

        log::debug!(
            "World created: {} hens, {} circles, {} polygons",
            hens.len(),
            collision.circles().len(),
            collision.polygons().len()
        );

        Self {
            collision,
            robot,
            hens,
            capture: CaptureSystem::new(settings.capture.clone()),
            bounds: settings.world.bounds(),
            grid: settings.world.grid(),
            tick: 0,
            settings,
        }
    }

    /// Default settings on the built-in farm
    pub fn farm() -> Self {
        Self::new(SimulationSettings::default(), CollisionHandler::farm())
    }

    /// Probe model files under `root` and attach them to every entity
    pub fn load_models(&mut self, root: &Path) {
        self.robot.models = RobotModels::load(root);
        let models = HenModels::load(root);
        for hen in &mut self.hens {
            hen.models = models.clone();
        }
    }

    pub fn settings(&self) -> &SimulationSettings {
        &self.settings
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    pub fn robot(&self) -> &Robot {
        &self.robot
    }

    pub fn robot_mut(&mut self) -> &mut Robot {
        &mut self.robot
    }

    pub fn hens(&self) -> &[Hen] {
        &self.hens
    }

    pub fn collision(&self) -> &CollisionHandler {
        &self.collision
    }

    /// Obstacle registration between ticks
    pub fn collision_mut(&mut self) -> &mut CollisionHandler {
        &mut self.collision
    }

    pub fn capture(&self) -> &CaptureSystem {
        &self.capture
    }

    pub fn delivered_count(&self) -> u32 {
        self.capture.delivered()
    }

    pub fn bounds(&self) -> WorldBounds {
        self.bounds
    }

    pub fn grid(&self) -> GridMapping {
        self.grid
    }

    pub fn robot_cell(&self) -> GridCell {
        self.grid.to_cell(self.robot.planar_position())
    }

    /// Advance the simulation by one tick.
    ///
    /// Order: robot drive, capture/drop, hen motion and limbs.
    pub fn tick(&mut self, input: &RobotInput) -> Option<CaptureEvent> {
        self.robot.drive(input, &self.collision, &self.bounds);
        let event = self.capture.update(&mut self.robot, &mut self.hens);
        for hen in &mut self.hens {
            hen.advance();
        }
        self.tick += 1;
        event
    }

    /// Apply every goal in a batch; bad entries are logged and skipped.
    /// Returns how many new targets were accepted.
    pub fn apply_goal_update(&mut self, update: &GoalUpdate) -> usize {
        let mut accepted = 0;
        for goal in &update.agents {
            match self.apply_goal(goal) {
                Ok(outcome) => {
                    if let Some(e) = &outcome.bad_mode {
                        log::warn!("Ignoring mode for agent {}: {}", goal.id, e);
                    }
                    if outcome.accepted {
                        accepted += 1;
                    }
                }
                Err(e) => log::warn!("Ignoring goal for agent {}: {}", goal.id, e),
            }
        }
        accepted
    }

    /// Apply one goal to the hen it names.
    ///
    /// The position is clamped to the world bounds and resolved against
    /// the obstacles, using the hen's current target as the fallback. An
    /// unknown mode name does not stop the position from being applied;
    /// it is returned in the outcome, also for delivered hens.
    pub fn apply_goal(&mut self, goal: &AgentGoal) -> Result<GoalOutcome, GoalError> {
        let count = self.hens.len();
        let index = protocol::hen_index(goal.id)
            .filter(|&i| i < count)
            .ok_or(GoalError::UnknownAgent { id: goal.id, count })?;

        let mut outcome = GoalOutcome::default();
        let mode = match goal.mode.as_deref().map(str::parse::<MovementMode>) {
            Some(Ok(mode)) => Some(mode),
            Some(Err(e)) => {
                outcome.bad_mode = Some(e);
                None
            }
            None => None,
        };

        let hen = &mut self.hens[index];
        if hen.is_delivered() {
            return Ok(outcome);
        }

        if let Some(mode) = mode {
            hen.set_mode(mode);
        }

        let point = match goal.position {
            GoalPosition::Grid { x, y } => self.grid.to_world(GridCell::new(x, y)),
            GoalPosition::World { x, z } => self.bounds.clamp(Vec2::new(x, z)),
        };
        let resolved = self.collision.resolve(hen.planar_target(), point, hen.radius);
        outcome.accepted = hen.set_target(resolved);
        Ok(outcome)
    }

    /// Read-only view of every entity
    pub fn snapshot(&self) -> WorldSnapshot {
        let robot = EntitySnapshot {
            id: ROBOT_AGENT_ID,
            kind: EntityKind::Robot,
            position: self.robot.position,
            heading: self.robot.heading,
            cell: self.robot_cell(),
            mode: None,
            state: None,
            holding: self.robot.is_holding(),
        };

        let hens = self.hens.iter().enumerate().map(|(i, hen)| EntitySnapshot {
            id: protocol::FIRST_HEN_AGENT_ID + i as u32,
            kind: EntityKind::Hen,
            position: hen.position,
            heading: hen.heading,
            cell: self.grid.to_cell(hen.planar_position()),
            mode: Some(hen.mode()),
            state: Some(hen.state()),
            holding: false,
        });

        WorldSnapshot {
            tick: self.tick,
            delivered: self.capture.delivered(),
            entities: std::iter::once(robot).chain(hens).collect(),
        }
    }

    /// Everything with a loaded model, robot first
    pub fn render_list(&self) -> Vec<DrawCommand<'_>> {
        let mut out = Vec::new();
        render::robot_commands(&self.robot, &mut out);
        for hen in &self.hens {
            render::hen_commands(hen, &mut out);
        }
        out
    }
}
