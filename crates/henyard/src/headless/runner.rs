//! Fixed-step driver for a `World` without a window

use std::thread;
use std::time::{Duration, Instant};

use henyard_core::capture::CaptureEvent;
use henyard_core::sync::PositionReporter;
use henyard_core::World;
use serde::Serialize;

use super::script::InputScript;
use crate::remote::RemoteLink;

/// Counters collected over a run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub ticks: u64,
    pub pickups: u32,
    pub delivered: u32,
    pub reports_sent: u64,
    pub reports_dropped: u64,
    pub goal_updates: u64,
    pub goals_accepted: u64,
}

/// Drives the world from an input script, exchanging reports and goals
/// with the decision service when a link is attached.
pub struct HeadlessRunner {
    world: World,
    script: InputScript,
    reporter: PositionReporter,
    link: Option<RemoteLink>,
    tick_interval: Option<Duration>,
    summary: RunSummary,
}

impl HeadlessRunner {
    pub fn new(world: World, script: InputScript) -> Self {
        let reporter = PositionReporter::new(world.settings().world.report_interval_ticks);
        Self {
            world,
            script,
            reporter,
            link: None,
            tick_interval: None,
            summary: RunSummary::default(),
        }
    }

    pub fn with_link(mut self, link: RemoteLink) -> Self {
        self.link = Some(link);
        self
    }

    /// Sleep between ticks to hold `tick_rate` ticks per second
    pub fn realtime(mut self, tick_rate: u32) -> Self {
        self.tick_interval = Some(Duration::from_secs(1) / tick_rate.max(1));
        self
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn summary(&self) -> &RunSummary {
        &self.summary
    }

    /// One tick: pending goals, scripted input, world update, report
    pub fn step(&mut self) {
        if let Some(update) = self.link.as_ref().and_then(|link| link.poll()) {
            self.summary.goal_updates += 1;
            self.summary.goals_accepted += self.world.apply_goal_update(&update) as u64;
        }

        let input = self.script.input_at(self.world.tick_count());
        match self.world.tick(&input) {
            Some(CaptureEvent::PickedUp { hen }) => {
                self.summary.pickups += 1;
                log::debug!("Tick {}: picked up hen {}", self.world.tick_count(), hen);
            }
            Some(CaptureEvent::Delivered { hen, total }) => {
                log::info!(
                    "Tick {}: delivered hen {} ({} in the corral)",
                    self.world.tick_count(),
                    hen,
                    total
                );
            }
            None => {}
        }

        if let Some(link) = self.link.as_mut() {
            if let Some(report) = self.reporter.due(self.world.tick_count(), self.world.robot_cell()) {
                if link.offer(report) {
                    self.reporter.record_sent(&report);
                    self.summary.reports_sent += 1;
                }
            }
            self.summary.reports_dropped = link.dropped();
        }

        self.summary.ticks = self.world.tick_count();
        self.summary.delivered = self.world.delivered_count();
    }

    /// Run `ticks` ticks and return the final counters
    pub fn run(&mut self, ticks: u64) -> RunSummary {
        log::info!(
            "Running {} ticks ({} hens, remote {})",
            ticks,
            self.world.hens().len(),
            if self.link.is_some() { "on" } else { "off" }
        );

        let mut next = Instant::now();
        for _ in 0..ticks {
            self.step();

            if let Some(interval) = self.tick_interval {
                next += interval;
                let now = Instant::now();
                if next > now {
                    thread::sleep(next - now);
                } else {
                    next = now;
                }
            }
        }

        log::info!(
            "Finished after {} ticks: {} delivered, {} reports sent, {} goal updates",
            self.summary.ticks,
            self.summary.delivered,
            self.summary.reports_sent,
            self.summary.goal_updates
        );
        self.summary.clone()
    }

    /// Stop the remote worker, if any
    pub fn shutdown(&mut self) {
        if let Some(mut link) = self.link.take() {
            link.shutdown();
        }
    }
}
