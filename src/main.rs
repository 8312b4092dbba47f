use std::io;
use std::path::Path;
use std::process::ExitCode;

use campsites::DEFAULT_INPUT;
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> ExitCode {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(io::stderr)
        .init();

    let path = Path::new(DEFAULT_INPUT);
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    match campsites::run(path, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            debug!(error = ?err, "report failed");
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
