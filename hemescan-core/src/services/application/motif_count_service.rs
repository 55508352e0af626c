use crate::{
    algorithms::motif_scanner::scan_record,
    models::motif::MotifSet,
    services::traits::{FastaReader, MotifReportWriter},
};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::{fmt, path::PathBuf};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    pub files: usize,
    pub records: usize,
    pub matches: usize,
}

impl fmt::Display for ScanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} files, {} sequences, {} heme-binding motifs",
            self.files, self.records, self.matches
        )
    }
}

/// Scans every record of every file in order and hands each record's
/// match set to `writer`. The writer is not finished here.
pub fn count_heme_motifs<A, W>(
    files: &[PathBuf],
    motifs: &MotifSet,
    writer: &mut W,
) -> Result<ScanSummary>
where
    A: FastaReader,
    W: MotifReportWriter,
{
    let mut summary = ScanSummary::default();

    for file in files {
        info!("Processing {}", file.display());
        let records = A::read_fasta(file)
            .with_context(|| format!("Error loading sequences from path: '{}'", file.display()))?;

        if records.is_empty() {
            warn!("No sequences found in {}", file.display());
        }

        for record in &records {
            let matches = scan_record(record, motifs);
            debug!("{}: {} motifs", record.id, matches.len());

            writer.write_record(record, &matches)?;

            summary.records += 1;
            summary.matches += matches.len();
        }
        summary.files += 1;
    }

    Ok(summary)
}
