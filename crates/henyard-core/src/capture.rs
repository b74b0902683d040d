//! Pickup and delivery of hens
//!
//! The robot carries at most one hen. A free hen within the pickup radius
//! of an empty-handed robot is captured; a carrying robot inside the drop
//! zone delivers it to the corral. Delivered hens never come back.

use serde::{Deserialize, Serialize};

use crate::entity::{Hen, Robot};
use crate::settings::{CaptureSettings, PickupRule};

/// Transition produced by one capture update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaptureEvent {
    PickedUp { hen: usize },
    Delivered { hen: usize, total: u32 },
}

/// Capture/drop state machine
#[derive(Debug, Clone)]
pub struct CaptureSystem {
    settings: CaptureSettings,
    carrying: Option<usize>,
    delivered: u32,
}

impl CaptureSystem {
    pub fn new(settings: CaptureSettings) -> Self {
        Self {
            settings,
            carrying: None,
            delivered: 0,
        }
    }

    pub fn settings(&self) -> &CaptureSettings {
        &self.settings
    }

    /// Index of the carried hen
    pub fn carrying(&self) -> Option<usize> {
        self.carrying
    }

    pub fn delivered(&self) -> u32 {
        self.delivered
    }

    /// Run once per tick, after the robot has moved.
    ///
    /// At most one transition happens per call: a pickup and a delivery
    /// can never occur on the same tick. Carried hens are re-attached to
    /// the robot's current pose afterwards.
    pub fn update(&mut self, robot: &mut Robot, hens: &mut [Hen]) -> Option<CaptureEvent> {
        let event = match self.carrying {
            None => self.try_pickup(robot, hens),
            Some(index) => self.try_deliver(index, robot, hens),
        };

        let captor = robot.captor_pose();
        for hen in hens.iter_mut().filter(|h| h.is_captured()) {
            hen.follow(captor, self.settings.standoff);
        }

        event
    }

    fn try_pickup(&mut self, robot: &mut Robot, hens: &mut [Hen]) -> Option<CaptureEvent> {
        let origin = robot.planar_position();
        let in_reach = hens
            .iter()
            .enumerate()
            .filter(|(_, hen)| hen.is_free())
            .map(|(i, hen)| (i, hen.planar_position().distance(origin)))
            .filter(|&(_, distance)| distance < self.settings.pickup_radius);

        let chosen = match self.settings.pickup_rule {
            PickupRule::FirstInOrder => in_reach.map(|(i, _)| i).next(),
            // min_by keeps the first of equal elements
            PickupRule::Nearest => in_reach
                .min_by(|a, b| a.1.total_cmp(&b.1))
                .map(|(i, _)| i),
        }?;

        hens[chosen].capture(robot.captor_pose(), self.settings.standoff);
        robot.set_holding(true);
        self.carrying = Some(chosen);
        log::debug!("Robot picked up hen {chosen}");
        Some(CaptureEvent::PickedUp { hen: chosen })
    }

    fn try_deliver(&mut self, index: usize, robot: &mut Robot, hens: &mut [Hen]) -> Option<CaptureEvent> {
        let drop_point = self.settings.drop_point();
        if robot.planar_position().distance(drop_point) >= self.settings.drop_radius {
            return None;
        }

        let hen = hens.get_mut(index)?;
        hen.deliver(self.settings.corral_point());
        robot.set_holding(false);
        self.carrying = None;
        self.delivered += 1;
        log::info!("Hen {index} delivered ({} total)", self.delivered);
        Some(CaptureEvent::Delivered {
            hen: index,
            total: self.delivered,
        })
    }
}
