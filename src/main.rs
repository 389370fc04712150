use std::env;
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use tracing_subscriber::EnvFilter;
use zip301::input::read_input;
use zip301::{HuffmanCodec, Zip301Config};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let [filename] = args.as_slice() else {
        println!("You need to include a filename on the command line.");
        return ExitCode::FAILURE;
    };

    let input = Path::new(filename);
    let data = match read_input(input) {
        Ok(data) => data,
        Err(err) => {
            tracing::debug!(error = %err, "failed to read input");
            println!("Error opening file: {filename}");
            return ExitCode::FAILURE;
        }
    };

    let written = HuffmanCodec::write_artifact(input, &data, &Zip301Config::default())
        .with_context(|| format!("compressing {filename}"));
    match written {
        Ok(_) => {
            println!("Zip301 Generated.");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

