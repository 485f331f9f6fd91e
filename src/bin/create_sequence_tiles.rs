use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{ArgGroup, Parser};
use log::info;

use sequence_tiles::io::{create_writer, init_logger, open_reader};
use sequence_tiles::{
    region_header, reverse_complement, write_tile_series, ColumnSchema, Genome, NaPolicy,
    Orientation, TileConfig,
};

#[derive(Parser)]
#[command(name = "create_sequence_tiles")]
#[command(version)]
#[command(
    about = "Print fasta sequences of overlapping tiles covering a window centered at each plus-one site"
)]
#[command(group(ArgGroup::new("sites").required(true)))]
struct Args {
    #[arg(short = 'f', long, help = "Input fasta (genome) file")]
    fasta: PathBuf,

    #[arg(
        short = 'p',
        long,
        group = "sites",
        help = "Plusone TSV file in the raw 23-column upstream format"
    )]
    plusone: Option<PathBuf>,

    #[arg(
        short = 'P',
        long = "Plusone",
        group = "sites",
        help = "Plusone TSV file with 'chr strand name plus1' columns"
    )]
    plusone_simple: Option<PathBuf>,

    #[arg(short = 'l', long, default_value_t = 100, help = "Length of tile")]
    length: usize,

    #[arg(short = 's', long, default_value_t = 7, help = "Tile increment step size")]
    step: usize,

    #[arg(
        short = 'w',
        long,
        default_value_t = 350,
        help = "Size of window centered at the plus-one site"
    )]
    window: u32,

    #[arg(
        short = 'o',
        long,
        help = "Output file, gzip-compressed if it ends in .gz (default: standard output)"
    )]
    output: Option<PathBuf>,

    #[arg(
        long,
        value_enum,
        default_value = "skip",
        help = "What to do with rows whose plus-one position is NA"
    )]
    na_policy: NaPolicy,

    #[arg(short = 'v', long, help = "Verbose output showing progress")]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.verbose);

    let config = TileConfig {
        tile_length: args.length,
        step_size: args.step,
    };
    let extension = (f64::from(args.window) / 2.0).round() as i64;

    let (sites_path, schema) = if let Some(path) = &args.plusone_simple {
        info!("assuming 'chr strand name plus1' as columns in plusone file");
        (path, ColumnSchema::SIMPLE)
    } else if let Some(path) = &args.plusone {
        (path, ColumnSchema::RAW)
    } else {
        bail!("one of --plusone/--Plusone is required");
    };

    info!("reading genome file {}", args.fasta.display());
    let mut genome = Genome::open(&args.fasta)?;

    match &args.output {
        Some(path) => info!("will write output to {}", path.display()),
        None => info!("will write output to standard out"),
    }
    let mut out = create_writer(args.output.as_deref())?;

    info!("reading plusone file {}", sites_path.display());
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .flexible(true)
        .from_reader(open_reader(sites_path)?);

    let mut regions = 0u64;
    let mut tiles_written = 0usize;
    for result in reader.records() {
        let row = result?;
        let line = row.position().map(|p| p.line()).unwrap_or(0);
        let Some(record) = schema.decode(&row, line, args.na_policy)? else {
            continue;
        };

        let region = record.region(extension);
        let forward = genome.fetch(&region)?;
        let revcomp = reverse_complement(&forward);

        tiles_written += write_tile_series(
            &mut out,
            &region_header(&record, &region, Orientation::Forward),
            &forward,
            &config,
        )?;
        tiles_written += write_tile_series(
            &mut out,
            &region_header(&record, &region, Orientation::ReverseComplement),
            &revcomp,
            &config,
        )?;
        regions += 1;
    }

    out.flush()?;
    info!("wrote {tiles_written} tiles over {regions} regions");
    Ok(())
}
