use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, bail, Result};
use clap::ValueEnum;
use csv::StringRecord;

use crate::tiling::Orientation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strand {
    Plus,
    Minus,
}

impl FromStr for Strand {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "+" => Ok(Strand::Plus),
            "-" => Ok(Strand::Minus),
            other => Err(anyhow!("invalid strand {other:?}, expected '+' or '-'")),
        }
    }
}

impl fmt::Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Strand::Plus => write!(f, "+"),
            Strand::Minus => write!(f, "-"),
        }
    }
}

/// One data row of a plus-one annotation file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationRecord {
    pub chromosome: String,
    pub strand: Strand,
    pub name: String,
    pub anchor: i64,
}

impl AnnotationRecord {
    /// Window of `extension` bases on each side of the anchor, 1-based
    /// inclusive coordinates.
    pub fn region(&self, extension: i64) -> Region {
        Region {
            chromosome: self.chromosome.clone(),
            start: self.anchor - extension,
            stop: self.anchor + extension,
        }
    }
}

/// Genomic interval derived from an annotation record. Coordinates may run
/// past the chromosome ends; the sequence provider clamps them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub chromosome: String,
    pub start: i64,
    pub stop: i64,
}

/// What to do with a row whose anchor field is the literal "NA".
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum NaPolicy {
    /// Skip the row and keep going.
    Skip,
    /// Abort the run.
    Fail,
}

/// Mapping from logical field to column index for one annotation file layout.
#[derive(Debug, Clone, Copy)]
pub struct ColumnSchema {
    pub chromosome: usize,
    pub strand: usize,
    pub name: usize,
    pub anchor: usize,
}

impl ColumnSchema {
    /// Raw upstream table (GSE140614-style, 23 columns).
    pub const RAW: ColumnSchema = ColumnSchema {
        chromosome: 1,
        strand: 4,
        name: 6,
        anchor: 11,
    };

    /// Simplified 'chr strand name plus1' table.
    pub const SIMPLE: ColumnSchema = ColumnSchema {
        chromosome: 0,
        strand: 1,
        name: 2,
        anchor: 3,
    };

    pub fn min_columns(&self) -> usize {
        self.chromosome
            .max(self.strand)
            .max(self.name)
            .max(self.anchor)
            + 1
    }

    /// Decode one data row. Returns `None` for an "NA" anchor under
    /// `NaPolicy::Skip`; every other malformation is a descriptive error
    /// carrying the input line number.
    pub fn decode(
        &self,
        row: &StringRecord,
        line: u64,
        na_policy: NaPolicy,
    ) -> Result<Option<AnnotationRecord>> {
        if row.len() < self.min_columns() {
            bail!(
                "line {line}: expected at least {} tab-separated columns, found {}",
                self.min_columns(),
                row.len()
            );
        }

        let anchor_field = &row[self.anchor];
        if anchor_field == "NA" {
            match na_policy {
                NaPolicy::Skip => return Ok(None),
                NaPolicy::Fail => bail!("line {line}: anchor position is NA"),
            }
        }
        let anchor: i64 = anchor_field
            .parse()
            .map_err(|_| anyhow!("line {line}: invalid anchor position {anchor_field:?}"))?;
        let strand: Strand = row[self.strand]
            .parse()
            .map_err(|e| anyhow!("line {line}: {e}"))?;

        Ok(Some(AnnotationRecord {
            chromosome: row[self.chromosome].to_string(),
            strand,
            name: row[self.name].to_string(),
            anchor,
        }))
    }
}

/// FASTA-style header for one tile series, without the per-tile index.
///
/// The reverse-complement series carries a literal `rc` marker after the
/// coordinates.
pub fn region_header(
    record: &AnnotationRecord,
    region: &Region,
    orientation: Orientation,
) -> String {
    let base = format!(
        ">{} {} {} {} {}:{}",
        region.chromosome, record.name, record.strand, record.anchor, region.start, region.stop
    );
    match orientation {
        Orientation::Forward => base,
        Orientation::ReverseComplement => format!("{base} rc"),
    }
}
