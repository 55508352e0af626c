use anyhow::{Context, Result};
use hemescan_core::{
    models::{motif_match::MatchSet, sequence::SequenceRecord},
    services::traits::MotifReportWriter,
};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

pub const POSITIONS_FILE_NAME: &str = "Matched_positions.txt";
pub const COUNTS_FILE_NAME: &str = "Counts.txt";

/// Writes `Matched_positions.txt` and `Counts.txt` side by side. Both files
/// are truncated on creation and appended to for the whole run.
pub struct ReportWriter<W: Write> {
    positions: W,
    counts: W,
}

impl ReportWriter<BufWriter<File>> {
    pub fn create(base_dir: &Path) -> Result<Self> {
        let positions = create_output_file(&base_dir.join(POSITIONS_FILE_NAME))?;
        let counts = create_output_file(&base_dir.join(COUNTS_FILE_NAME))?;

        Ok(Self::new(positions, counts))
    }
}

impl<W: Write> ReportWriter<W> {
    pub fn new(positions: W, counts: W) -> Self {
        Self { positions, counts }
    }

    pub fn into_inner(self) -> (W, W) {
        (self.positions, self.counts)
    }
}

impl<W: Write> MotifReportWriter for ReportWriter<W> {
    fn write_record(&mut self, record: &SequenceRecord, matches: &MatchSet) -> Result<()> {
        for m in matches {
            writeln!(
                self.positions,
                "Sequence ID: {}\tPattern: {}\tMatch Position: {}-{}",
                record.id, m.motif.pattern, m.start, m.end
            )?;
        }
        writeln!(self.counts, "{}: {}", record.id, matches.len())?;

        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.positions
            .flush()
            .context("Failed to flush matched positions report")?;
        self.counts.flush().context("Failed to flush counts report")?;
        Ok(())
    }
}

fn create_output_file(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create file at: {:?}", path))?;
    Ok(BufWriter::new(file))
}
