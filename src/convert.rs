use std::io::{Read, Write};

use anyhow::{anyhow, Result};

/// Columns projected by the converter: chr, strand, name, plus1 in the
/// 23-column upstream table.
pub const PROJECTED_COLUMNS: [usize; 4] = [1, 4, 6, 10];

const MIN_COLUMNS: usize = 11;

/// Project the four annotation columns out of a tab-separated stream.
///
/// Every row passes through, the header row included; fields are written
/// tab-joined in input order with no filtering, so a rerun over the same
/// input is byte-identical. Returns the number of rows written. A row too
/// short for the projection is an error.
pub fn project<R: Read, W: Write>(input: R, mut output: W) -> Result<u64> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .from_reader(input);

    let mut rows = 0u64;
    for result in reader.records() {
        let row = result?;
        let line = row.position().map(|p| p.line()).unwrap_or(rows + 1);

        let mut fields = [""; 4];
        for (slot, &column) in fields.iter_mut().zip(PROJECTED_COLUMNS.iter()) {
            *slot = row.get(column).ok_or_else(|| {
                anyhow!(
                    "line {line}: expected at least {MIN_COLUMNS} tab-separated columns, found {}",
                    row.len()
                )
            })?;
        }

        writeln!(
            output,
            "{}\t{}\t{}\t{}",
            fields[0], fields[1], fields[2], fields[3]
        )?;
        rows += 1;
    }

    output.flush()?;
    Ok(rows)
}
