use std::path::Path;

use anyhow::Result;

use crate::models::{motif_match::MatchSet, sequence::SequenceRecord};

pub trait FastaReader {
    /// Reads every record with a non-empty sequence, in file order.
    fn read_fasta(path: &Path) -> Result<Vec<SequenceRecord>>;
}

pub trait MotifReportWriter {
    fn write_record(&mut self, record: &SequenceRecord, matches: &MatchSet) -> Result<()>;

    /// Flushes everything written so far. Called once at the end of a run.
    fn finish(&mut self) -> Result<()>;
}
