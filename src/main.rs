use std::io;
use thai_tokenize::{App, Config};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // stdout carries the JSON line, diagnostics go to stderr
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .init();

    let app = App::from_config(Config::from_env())?;
    app.run(io::stdin().lock(), io::stdout().lock())?;

    Ok(())
}
