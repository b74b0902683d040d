//! Wiring from configuration to a running simulation

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use henyard_core::collision::{CollisionHandler, LevelLayout};
use henyard_core::World;

use crate::config::GameConfig;
use crate::headless::{HeadlessRunner, InputScript, RunSummary};
use crate::remote::{HttpDecisionService, RemoteLink};

/// Command-line overrides on top of the loaded configuration
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub ticks: Option<u64>,
    pub script: Option<PathBuf>,
    /// Decision service URL; enables the remote link
    pub server: Option<String>,
    pub realtime: bool,
    pub level: Option<PathBuf>,
}

/// Obstacles from a RON level file, or the built-in farm
pub fn load_collision(level: Option<&Path>) -> Result<CollisionHandler> {
    let Some(path) = level else {
        return Ok(CollisionHandler::farm());
    };

    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read level {}", path.display()))?;
    let layout = LevelLayout::from_ron(&text)
        .with_context(|| format!("Failed to load level {}", path.display()))?;
    let collision =
        CollisionHandler::from_layout(&layout).context("Level contains an invalid obstacle")?;
    log::info!("Loaded level from {}", path.display());
    Ok(collision)
}

pub struct App {
    runner: HeadlessRunner,
    ticks: u64,
}

impl App {
    pub fn new(config: GameConfig, options: RunOptions) -> Result<Self> {
        let level = options
            .level
            .clone()
            .or_else(|| config.assets.level.as_ref().map(PathBuf::from));
        let collision = load_collision(level.as_deref())?;

        let mut world = World::new(config.simulation.clone(), collision);
        world.load_models(Path::new(&config.assets.model_root));

        let script = match &options.script {
            Some(path) => InputScript::load(path)?,
            None => InputScript::patrol(),
        };

        let mut runner = HeadlessRunner::new(world, script);

        let server = options
            .server
            .clone()
            .or_else(|| config.remote.enabled.then(|| config.remote.url.clone()));
        if let Some(url) = server {
            log::info!("Connecting to decision service at {}", url);
            let service =
                HttpDecisionService::new(url, Duration::from_millis(config.remote.timeout_ms));
            let link =
                RemoteLink::spawn(service, Duration::from_millis(config.remote.poll_timeout_ms))?;
            runner = runner.with_link(link);
        }

        if options.realtime {
            runner = runner.realtime(config.run.tick_rate);
        }

        Ok(Self {
            runner,
            ticks: options.ticks.unwrap_or(config.run.ticks),
        })
    }

    pub fn run(mut self) -> RunSummary {
        let summary = self.runner.run(self.ticks);
        self.runner.shutdown();
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level_is_farm() {
        let collision = load_collision(None).unwrap();
        assert_eq!(collision.polygons().len(), 7);
    }

    #[test]
    fn test_level_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("level.ron");
        fs::write(
            &path,
            r#"(
                scale: 2.0,
                tree_radius: 1.0,
                small_object_radius: 0.5,
                trees: [(1.0, 1.0)],
                small_objects: [],
                structures: [[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]],
            )"#,
        )
        .unwrap();

        let collision = load_collision(Some(&path)).unwrap();
        assert_eq!(collision.circles().len(), 1);
        assert_eq!(collision.circles()[0].center.x, 2.0);
    }

    #[test]
    fn test_degenerate_level_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.ron");
        fs::write(
            &path,
            r#"(scale: 1.0, tree_radius: 1.0, small_object_radius: 1.0,
                trees: [], small_objects: [], structures: [[(0.0, 0.0), (1.0, 0.0)]])"#,
        )
        .unwrap();
        assert!(load_collision(Some(&path)).is_err());
    }

    #[test]
    fn test_app_runs_configured_ticks() {
        let dir = tempfile::tempdir().unwrap();
        let config = GameConfig {
            assets: crate::config::AssetConfig {
                model_root: dir.path().display().to_string(),
                level: None,
            },
            ..GameConfig::default()
        };
        let options = RunOptions {
            ticks: Some(90),
            ..RunOptions::default()
        };

        let summary = App::new(config, options).unwrap().run();
        assert_eq!(summary.ticks, 90);
        assert_eq!(summary.reports_sent, 0);
    }
}
