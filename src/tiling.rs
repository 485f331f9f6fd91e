use std::io::Write;

/// Tiling parameters. Both values must be positive; this is a caller
/// precondition, not a runtime check.
#[derive(Debug, Clone, Copy)]
pub struct TileConfig {
    pub tile_length: usize,
    pub step_size: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Forward,
    ReverseComplement,
}

/// Lazy sliding window over `seq`.
///
/// Tiles start at offsets 0, step, 2*step, ... while the offset is below
/// `len - tile_length + step_size`. The last tile is clipped to the end of the
/// sequence and may be shorter than `tile_length`; downstream consumers expect
/// the clipped tail tile, so it is emitted rather than dropped. A sequence
/// shorter than `tile_length` yields no tiles at all.
pub fn tiles<'a>(seq: &'a [u8], config: &TileConfig) -> impl Iterator<Item = &'a [u8]> + 'a {
    let len = seq.len();
    let tile_length = config.tile_length;
    let bound = if len < tile_length {
        0
    } else {
        len - tile_length + config.step_size
    };
    (0..bound)
        .step_by(config.step_size)
        .map(move |i| &seq[i.min(len)..(i + tile_length).min(len)])
}

/// Write one tile series as interleaved FASTA-like records.
///
/// Each tile gets `{header} tile_{index}` on its own line followed by the tile
/// sequence; indices count from 0 within the series.
pub fn write_tile_series<W: Write>(
    out: &mut W,
    header: &str,
    seq: &[u8],
    config: &TileConfig,
) -> std::io::Result<usize> {
    let mut count = 0;
    for (index, tile) in tiles(seq, config).enumerate() {
        writeln!(out, "{header} tile_{index}")?;
        out.write_all(tile)?;
        out.write_all(b"\n")?;
        count += 1;
    }
    Ok(count)
}
