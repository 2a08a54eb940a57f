mod api;
mod cli;
mod remote;
mod tui;

use anyhow::Result;
use clap::Parser; // needed for Cli::parse()
use std::sync::Arc;
use tokio::runtime::Runtime;
use tracing_subscriber::EnvFilter;

use cli::commands::{open_api, run_cli};
use cli::opts::{Cli, Command};
use tui::app::TuiApp;

fn main() -> Result<()> {
    let args = Cli::parse();

    match &args.cmd {
        // Run TUI on its own thread/runtime (no nested Tokio)
        Command::Tui(cmd) => {
            // stderr output would tear the alternate screen
            init_logging("off");
            let rt = Arc::new(Runtime::new()?);
            let api = open_api(cmd.server.as_deref());
            let mut app = TuiApp::new(api, rt);
            app.run()
        }
        // Everything else uses a single runtime here
        _ => {
            init_logging("info");
            let rt = Runtime::new()?;
            rt.block_on(run_cli(args))
        }
    }
}

fn init_logging(default: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
