mod app;
mod config;
mod context;
mod handlers;
mod pointer;
mod render_loop;

use anyhow::Result;
use winit::dpi::LogicalSize;

use orbit_engine::device::GpuInit;
use orbit_engine::logging::{init_logging, LoggingConfig};
use orbit_engine::window::{Runtime, RuntimeConfig};

use crate::app::StudioApp;
use crate::config::StudioConfig;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = StudioConfig::from_env();
    let app = StudioApp::new(&config);

    let runtime = RuntimeConfig {
        title: "orbit studio".to_string(),
        initial_size: LogicalSize::new(800.0, 600.0),
        ..RuntimeConfig::default()
    };

    Runtime::run(runtime, GpuInit::default(), app)?;
    log::info!("orbit studio exited");
    Ok(())
}
