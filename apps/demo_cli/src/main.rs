use std::{io, path::PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use crossbeam_channel::bounded;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod controller;

use config::load_settings;
use controller::session::{run, AuthDemo, Demo, GreetDemo};

#[derive(Parser, Debug)]
#[command(about = "Terminal front-end for the greeting and register/login demos")]
struct Cli {
    /// Config file; defaults to ./demo.toml when present.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Print outward signals as JSON lines.
    #[arg(long)]
    json: bool,
    #[command(subcommand)]
    demo: DemoKind,
}

#[derive(Subcommand, Debug, Clone, Copy)]
enum DemoKind {
    /// Register, then log in with the same credentials.
    Auth,
    /// User card greeting, name toggle and counter.
    Greet,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut settings = load_settings(cli.config.as_deref())?;
    if cli.json {
        settings.emit_json = true;
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.log_filter.as_str()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!(demo = ?cli.demo, ?settings, "starting demo");

    let (signal_tx, signal_rx) = bounded(settings.signal_queue_capacity.max(1));
    let mut demo: Box<dyn Demo> = match cli.demo {
        DemoKind::Auth => Box::new(AuthDemo::new(signal_tx)),
        DemoKind::Greet => Box::new(GreetDemo::new(signal_tx)),
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    run(
        demo.as_mut(),
        &signal_rx,
        stdin.lock(),
        &mut stdout,
        settings.emit_json,
    )?;

    info!("demo finished");
    Ok(())
}
