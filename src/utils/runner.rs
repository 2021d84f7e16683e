//! CSV export of raw timings.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::timer::TimingTable;

/// Write `table` as `lab,variant,input_size,elapsed_ns,result` rows.
pub fn write_csv<W: Write>(writer: &mut W, lab: &str, table: &TimingTable) -> std::io::Result<()> {
    writeln!(writer, "lab,variant,input_size,elapsed_ns,result")?;

    for series in table.series() {
        for ((elapsed, size), sample) in series.times.iter().zip(table.sizes()).zip(&series.result_samples) {
            writeln!(
                writer,
                "{},{},{},{},{}",
                lab,
                series.name,
                size,
                elapsed.as_nanos(),
                sample.map(|v| v.to_string()).unwrap_or_default()
            )?;
        }
    }

    Ok(())
}

/// Export one lab's timings to a CSV file, appending when `append` is set
/// (the header is then only written for a new file).
pub fn export_csv(path: &Path, lab: &str, table: &TimingTable, append: bool) -> std::io::Result<()> {
    let exists = path.exists();
    let file = File::options()
        .create(true)
        .write(true)
        .append(append)
        .truncate(!append)
        .open(path)?;
    let mut writer = BufWriter::new(file);

    if append && exists {
        let mut body = Vec::new();
        write_csv(&mut body, lab, table)?;
        // skip the header line
        let start = body.iter().position(|&b| b == b'\n').map_or(body.len(), |i| i + 1);
        writer.write_all(&body[start..])?;
    } else {
        write_csv(&mut writer, lab, table)?;
    }

    writer.flush()
}
