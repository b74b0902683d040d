//! Send-on-change position reporting

use crate::grid::GridCell;
use crate::protocol::StateReport;

/// Decides when the robot position is worth reporting.
///
/// A report is due every `interval` ticks, and only if the robot's cell
/// differs from the last one that was actually sent.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionReporter {
    interval: u64,
    last_sent: Option<GridCell>,
}

impl PositionReporter {
    /// An interval of 0 is treated as 1
    pub fn new(interval: u64) -> Self {
        Self {
            interval: interval.max(1),
            last_sent: None,
        }
    }

    pub fn interval(&self) -> u64 {
        self.interval
    }

    pub fn last_sent(&self) -> Option<GridCell> {
        self.last_sent
    }

    /// Report to send at `tick`, if any. Does not mark it sent.
    pub fn due(&self, tick: u64, cell: GridCell) -> Option<StateReport> {
        if tick % self.interval != 0 || self.last_sent == Some(cell) {
            return None;
        }
        Some(StateReport { tick, robot: cell })
    }

    /// Remember a report that was handed to the transport
    pub fn record_sent(&mut self, report: &StateReport) {
        self.last_sent = Some(report.robot);
    }
}
