//! Humanize Render binary
//!
//! Reads `HumanValue` JSON lines on stdin and writes rendered lines to stdout.
//! Logs go to stderr. `HUMANIZE_YEAR_PADDING` and `HUMANIZE_TIME_STYLE` pick the
//! output conventions and `RUST_LOG` the log filter.

use humanize_core::{FormatOptions, Formatter};
use humanize_render::run;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    let options = FormatOptions::from_env()?;
    info!(
        year_padding = ?options.year_padding,
        time_style = ?options.time_style,
        "Starting renderer"
    );

    let input = BufReader::new(tokio::io::stdin());
    run(input, tokio::io::stdout(), Formatter::new(options)).await?;

    Ok(())
}
