use shiftgrid::commands::Cli;
use shiftgrid::libs::messages::macros::is_debug_mode;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    if is_debug_mode() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("shiftgrid=debug")))
            .with_writer(std::io::stderr)
            .try_init();
    }

    match Cli::menu() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Errors built by the message macros already carry their marker.
            eprintln!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
