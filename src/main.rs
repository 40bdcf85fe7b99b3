use std::{ffi::OsString, path::PathBuf, process};

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use imgarray_cli::{EmitOptions, emit};

/// Convert a PNG, JPEG or GIF image into a PROGMEM byte array header.
#[derive(Parser)]
#[command(name = "imgarray", version)]
struct Cli {
    /// Image to convert.
    input: Option<PathBuf>,
    /// Name of the generated array [default: image_data].
    array_name: Option<String>,
    /// Header to write. Defaults to `<ARRAY_NAME>.h`.
    output: Option<PathBuf>,
    /// Anything after the output path is ignored.
    #[arg(hide = true)]
    _rest: Vec<OsString>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let Some(input) = cli.input else {
        println!("{}", Cli::command().render_usage());
        println!("Example: imgarray logo.png custom_logo");
        println!("         imgarray logo.png custom_logo logo.h");
        process::exit(1);
    };

    let options = EmitOptions::new(cli.array_name, cli.output);
    let summary = emit(&input, &options)?;
    println!("{summary}");

    Ok(())
}
