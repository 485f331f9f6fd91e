use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use noodles::core::{Position, Region as QueryRegion};
use noodles::fasta;
use noodles::fasta::fai;

use crate::annotation::Region;

/// Random-access genome backed by an indexed FASTA file.
///
/// The `.fai` index is loaded when present next to the FASTA, otherwise built
/// and written so later runs can reuse it.
pub struct Genome {
    reader: fasta::io::IndexedReader<fasta::io::BufReader<File>>,
    chromosomes: Vec<(Vec<u8>, u64)>,
}

impl Genome {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let fai_path = PathBuf::from(format!("{}.fai", path.display()));

        let index = if fai_path.exists() {
            fai::io::Reader::new(BufReader::new(
                File::open(&fai_path)
                    .with_context(|| format!("failed to open {}", fai_path.display()))?,
            ))
            .read_index()
            .with_context(|| format!("failed to read {}", fai_path.display()))?
        } else {
            let index = fasta::fs::index(path)
                .with_context(|| format!("failed to index {}", path.display()))?;
            let mut writer = fai::io::Writer::new(
                File::create(&fai_path)
                    .with_context(|| format!("failed to create {}", fai_path.display()))?,
            );
            writer.write_index(&index)?;
            index
        };

        let chromosomes = index
            .as_ref()
            .iter()
            .map(|entry| (entry.name().to_vec(), entry.length()))
            .collect();

        let reader = fasta::io::indexed_reader::Builder::default()
            .set_index(index)
            .build_from_path(path)
            .with_context(|| format!("failed to open {}", path.display()))?;

        Ok(Self {
            reader,
            chromosomes,
        })
    }

    pub fn length_of(&self, chromosome: &str) -> Option<u64> {
        self.chromosomes
            .iter()
            .find(|(name, _)| name.as_slice() == chromosome.as_bytes())
            .map(|(_, length)| *length)
    }

    /// Forward sequence for a 1-based inclusive range, uppercased.
    ///
    /// Coordinates are clamped to the chromosome: start to 1, stop to the
    /// chromosome length. A region with no overlap at all, or an unknown
    /// chromosome, is an error.
    pub fn fetch(&mut self, region: &Region) -> Result<Vec<u8>> {
        let length = self.length_of(&region.chromosome).ok_or_else(|| {
            anyhow!(
                "chromosome {:?} not found in FASTA index",
                region.chromosome
            )
        })? as i64;

        let start = region.start.max(1);
        let stop = region.stop.min(length);
        if start > stop {
            bail!(
                "region {}:{}-{} does not overlap chromosome (length {length})",
                region.chromosome,
                region.start,
                region.stop
            );
        }

        let interval = Position::try_from(start as usize)?..=Position::try_from(stop as usize)?;
        let query = QueryRegion::new(region.chromosome.as_str(), interval);
        let record = self
            .reader
            .query(&query)
            .with_context(|| format!("failed to fetch {}:{start}-{stop}", region.chromosome))?;

        let mut sequence = record.sequence().as_ref().to_vec();
        sequence.make_ascii_uppercase();
        Ok(sequence)
    }
}
