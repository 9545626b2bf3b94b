use std::path::PathBuf;

use clap::Parser;
use gpui::{App, Application};
use tracing::{error, info};

use shop_ui::{gui::WINDOW_TITLE, logging, open_main_window, setup_app};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Shop menu: price an order of cookies, sandwiches and water.
///
/// All options only affect diagnostics; the window behaves the same without them.
#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    /// Log filter, e.g. `debug` or `shop_core=trace`. Overrides `RUST_LOG`.
    #[arg(long)]
    log_level: Option<String>,

    /// Also append log output to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Do not print log output to stdout.
    #[arg(long)]
    no_stdout_log: bool,
}

fn apply_logging_options(cli: &Cli) -> anyhow::Result<()> {
    if let Some(level) = &cli.log_level {
        logging::set_log_level(level)?;
    }
    if let Some(path) = &cli.log_file {
        logging::enable_file_logging(path)?;
    }
    if cli.no_stdout_log {
        logging::set_stdout_enabled(false);
    }
    Ok(())
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init_default_logging();
    apply_logging_options(&cli)?;

    info!("starting {WINDOW_TITLE}");

    Application::new()
        .with_assets(gpui_component_assets::Assets)
        .run(|cx: &mut App| {
            setup_app(cx);
            if let Err(error) = open_main_window(cx) {
                error!(?error, "failed to open main window");
                cx.quit();
            }
        });

    info!("application exited");
    Ok(())
}
