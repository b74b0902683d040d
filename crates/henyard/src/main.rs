use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use henyard::config::GameConfig;
use henyard::{App, RunOptions};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of ticks to simulate (default from config)
    #[arg(long)]
    ticks: Option<u64>,

    /// RON input script driving the robot (default: patrol loop)
    #[arg(long)]
    script: Option<PathBuf>,

    /// Decision service URL; enables the background link
    #[arg(long)]
    server: Option<String>,

    /// Pace the simulation at the configured tick rate
    #[arg(long)]
    realtime: bool,

    /// RON level layout (default: built-in farm)
    #[arg(long)]
    level: Option<PathBuf>,

    /// Config file to use instead of ./henyard.ron
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the obstacle geometry as JSON and exit
    #[arg(long)]
    dump_obstacles: bool,
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => GameConfig::load_from(path)?,
        None => GameConfig::load()?,
    };

    // Handle --dump-obstacles flag
    if args.dump_obstacles {
        let level = args
            .level
            .clone()
            .or_else(|| config.assets.level.as_ref().map(PathBuf::from));
        let collision = henyard::app::load_collision(level.as_deref())?;
        let json = serde_json::to_string_pretty(&collision.obstacles_info())
            .context("Failed to serialize obstacles")?;
        println!("{json}");
        return Ok(());
    }

    log::info!("Starting Henyard");

    let options = RunOptions {
        ticks: args.ticks,
        script: args.script,
        server: args.server,
        realtime: args.realtime,
        level: args.level,
    };

    let summary = App::new(config, options)?.run();
    let json = serde_json::to_string_pretty(&summary).context("Failed to serialize summary")?;
    println!("{json}");

    Ok(())
}
