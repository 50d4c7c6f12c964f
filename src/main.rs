//! Storeshot - screenshot batch resizer for app stores and READMEs.

mod adapters;
mod cli;
mod config;
mod dimension;
mod enhance;
mod error;
mod output;
mod params;
mod planner;
mod platform;
mod ports;
mod render;
mod report;

use std::process;

use clap::Parser;

use crate::adapters::fs::FsImageStore;
use crate::cli::Cli;
use crate::config::Config;
use crate::error::RenderError;
use crate::output::ensure_png_support;
use crate::platform::Platform;
use crate::render::Renderer;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "info,storeshot=debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<(), RenderError> {
    // Refuse to start without the codec every step depends on
    ensure_png_support()?;

    // Load config
    let config_path = config::discover_config_path(cli.config.as_deref(), &cli.root);
    let config = Config::load(&config_path).map_err(RenderError::Config)?;
    let render_config =
        config.render_config(cli.overrides()).map_err(RenderError::InvalidArgument)?;

    let screenshots_dir = config.screenshots_dir(&cli.root);
    log::info!("Screenshots directory: {}", screenshots_dir.display());
    log::debug!("Config: {}", config_path.display());

    let renderer = Renderer::new(render_config, Box::new(FsImageStore::new(&screenshots_dir)));
    for platform in Platform::ALL {
        let sizes: Vec<String> =
            renderer.config().sizes(platform).iter().map(ToString::to_string).collect();
        log::info!("{platform} feature sizes: {}", sizes.join(", "));
    }

    let report = renderer.run(cli.mode())?;

    for line in report.summary_lines() {
        eprintln!("{line}");
    }

    if let Some(path) = &cli.report {
        report.write_json(path)?;
        eprintln!("Report saved: {}", path.display());
    }

    eprintln!("Screenshot processing complete!");
    Ok(())
}
