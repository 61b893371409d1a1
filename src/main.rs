use mola::repl;
use std::process;
use tracing_subscriber::{fmt, EnvFilter};

fn main() {
    // MOLA_LOG controls the log level, WARN by default
    let filter = EnvFilter::try_from_env("MOLA_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if let Err(err) = repl::start() {
        eprintln!("{}", err);
        process::exit(1);
    }
}
