//! addon-build CLI entry point.

use std::process::ExitCode;

use addon_build::cli::{BuildCommand, Cli};
use addon_build::orchestrator::default_context;
use addon_build::shell::is_ci;
use addon_build::ui::create_ui;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
///
/// Logs go to stderr so build guidance on stdout stays clean.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("addon_build=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("addon_build=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("addon-build starting with args: {:?}", cli);

    let output_mode = cli.output_mode();

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let project_root = cli
        .project
        .clone()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());

    let is_interactive = !cli.non_interactive && !is_ci();
    let mut ui = create_ui(is_interactive, output_mode);

    let ctx = default_context();
    let command = BuildCommand::new(&project_root, cli);

    match command.execute(ui.as_mut(), &ctx) {
        Ok(result) => {
            tracing::debug!(
                "Finished: success={}, exit code {}",
                result.success,
                result.exit_code
            );
            ExitCode::from(result.exit_code as u8)
        }
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
