use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::info;

use sequence_tiles::convert::project;
use sequence_tiles::io::{create_writer, init_logger, open_reader};

#[derive(Parser)]
#[command(name = "tabgz2tsv")]
#[command(version)]
#[command(about = "Reduce a gzip-compressed annotation table to a 'chr strand name plus1' TSV")]
struct Args {
    #[arg(help = "Input gzip-compressed tab-separated file")]
    input: PathBuf,

    #[arg(
        short = 'o',
        long,
        default_value = "simple.tsv",
        help = "Output TSV file"
    )]
    output: PathBuf,

    #[arg(short = 'v', long, help = "Verbose output showing progress")]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.verbose);

    info!("reading {}", args.input.display());
    let reader = open_reader(&args.input)?;
    let writer = create_writer(Some(&args.output))?;

    let rows = project(reader, writer)?;
    info!("wrote {rows} rows to {}", args.output.display());
    Ok(())
}
