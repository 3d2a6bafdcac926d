use anyhow::Result;
use neuro_os::commands::Cli;
use neuro_os::libs::messages::macros::is_debug_mode;

fn main() -> Result<()> {
    // Structured logging is only wired up when debug output was requested,
    // plain console output goes through the message macros otherwise
    if is_debug_mode() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")))
            .init();
    }

    Cli::menu()
}
