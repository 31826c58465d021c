// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use demos::{Foo, Schema};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Shape {
    Foo,
    Schema,
}

/// Loads a YAML document into one of the demo record shapes and prints it.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// YAML file to read
    file: PathBuf,

    /// Record shape the document is read as
    #[arg(long, value_enum, default_value_t = Shape::Foo)]
    shape: Shape,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let text = match std::fs::read(&args.file) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("Error: Unable to read file '{}': {}", args.file.display(), e);
            return ExitCode::FAILURE;
        }
    };
    log::info!("read {} bytes from {}", text.len(), args.file.display());

    let printed = match args.shape {
        Shape::Foo => serdec::from_slice::<Foo>(&text).map(|foo| format!("{foo:#?}")),
        Shape::Schema => serdec::from_slice::<Schema>(&text).map(|schema| format!("{schema:#?}")),
    };
    match printed {
        Ok(value) => {
            println!("{value}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
