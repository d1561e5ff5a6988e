//! Binary to generate an Android XML layout from a JSON Schema file.
//!
//! Usage: `schemalayout input.json [-o output_layout.xml]`

use std::path::PathBuf;
use std::process;

use clap::Parser;
use schema_layout_rs::generate_from_file;

/// Generate an Android XML layout from a JSON Schema document.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Path to the JSON Schema document.
    schema: PathBuf,

    /// Where to write the rendered layout.
    #[arg(short, long, default_value = "output_layout.xml")]
    output: PathBuf,
}

fn main() {
    let cli: Cli = Cli::parse();

    if let Err(e) = generate_from_file(&cli.schema, &cli.output) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
