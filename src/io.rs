use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;

/// Logger shared by the binaries: warnings by default, progress messages with
/// `--verbose`. Safe to call more than once.
pub fn init_logger(verbose: bool) {
    let _ = env_logger::Builder::new()
        .filter_level(if verbose {
            log::LevelFilter::Info
        } else {
            log::LevelFilter::Warn
        })
        .try_init();
}

fn is_gz(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some("gz")
}

/// Buffered reader, transparently decompressing `.gz` files.
pub fn open_reader(path: &Path) -> Result<Box<dyn BufRead>> {
    let file =
        File::open(path).with_context(|| format!("failed to open {}", path.display()))?;

    if is_gz(path) {
        Ok(Box::new(BufReader::with_capacity(
            1 << 20,
            MultiGzDecoder::new(file),
        )))
    } else {
        Ok(Box::new(BufReader::with_capacity(1 << 20, file)))
    }
}

/// Buffered writer for a path, gzip-compressing `.gz` files; standard output
/// when no path is given.
pub fn create_writer(path: Option<&Path>) -> Result<Box<dyn Write>> {
    let Some(path) = path else {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    };

    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;

    if is_gz(path) {
        let encoder = GzEncoder::new(file, Compression::default());
        Ok(Box::new(BufWriter::with_capacity(1 << 20, encoder)))
    } else {
        Ok(Box::new(BufWriter::with_capacity(1 << 20, file)))
    }
}
