//! coauthor-graph - Co-authorship Neighborhood Explorer

use clap::Parser;
use tracing_subscriber::EnvFilter;

use coauthor_graph::cli::App;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let app = App::parse();

    // Logs go to stderr so command output on stdout stays machine-readable.
    let default = if app.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    app.run()
}
