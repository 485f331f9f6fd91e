pub mod annotation;
pub mod convert;
pub mod fasta;
pub mod io;
pub mod tiling;

pub use annotation::{region_header, AnnotationRecord, ColumnSchema, NaPolicy, Region, Strand};
pub use fasta::Genome;
pub use tiling::{tiles, write_tile_series, Orientation, TileConfig};

/// Reverse complement of a DNA sequence.
///
/// Bases are uppercased; anything outside ACGT becomes N.
pub fn reverse_complement(seq: &[u8]) -> Vec<u8> {
    seq.iter()
        .rev()
        .map(|b| match b.to_ascii_uppercase() {
            b'A' => b'T',
            b'T' => b'A',
            b'G' => b'C',
            b'C' => b'G',
            _ => b'N',
        })
        .collect()
}
