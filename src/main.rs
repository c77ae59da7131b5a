//! Command-line interface for average_color
//!
//! `avgcolor <image> [-f|--format png|jpg|jpeg]`

use std::ffi::OsString;
use std::{env, io, process};

use average_color::{run, write_outcome};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() {
    // Diagnostics only; with RUST_LOG unset nothing reaches stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args = env::args_os();
    let program = args
        .next()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "avgcolor".to_string());
    let args: Vec<OsString> = args.collect();

    match run(&args) {
        Ok(outcome) => {
            let mut stdout = io::stdout().lock();
            if let Err(e) = write_outcome(&mut stdout, &outcome, &program) {
                debug!(error = %e, "stdout closed");
                process::exit(1);
            }
        }
        Err(error) => {
            eprintln!("{}", error.user_message());
            process::exit(1);
        }
    }
}
