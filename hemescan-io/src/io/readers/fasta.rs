use anyhow::{Context, Result};
use hemescan_core::{models::sequence::SequenceRecord, services::traits::FastaReader};

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

pub struct Reader;

impl FastaReader for Reader {
    fn read_fasta(path: &Path) -> Result<Vec<SequenceRecord>> {
        let reader = File::open(path)
            .map(BufReader::new)
            .with_context(|| format!("Could not open fasta file: '{}'", path.display()))?;

        parse_records(reader).with_context(|| format!("Error reading fasta file: '{}'", path.display()))
    }
}

/// Parses fasta text line by line.
///
/// The id is the first whitespace separated token of the header. Sequence
/// lines are trimmed and appended to the current record. Records whose
/// sequence ends up empty are dropped, and lines before the first header
/// form a record with an empty id.
pub fn parse_records<R: BufRead>(reader: R) -> Result<Vec<SequenceRecord>> {
    let mut records = Vec::new();
    let mut id = String::new();
    let mut sequence = String::new();

    for line in reader.lines() {
        let line = line?;

        if let Some(header) = line.strip_prefix('>') {
            push_record(&mut records, &id, &mut sequence);
            id = header.split_whitespace().next().unwrap_or_default().to_string();
        } else {
            sequence.push_str(line.trim());
        }
    }
    push_record(&mut records, &id, &mut sequence);

    Ok(records)
}

fn push_record(records: &mut Vec<SequenceRecord>, id: &str, sequence: &mut String) {
    if !sequence.is_empty() {
        records.push(SequenceRecord::new(id.to_string(), std::mem::take(sequence)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;

    fn parse(text: &str) -> Vec<(String, String)> {
        parse_records(Cursor::new(text))
            .unwrap()
            .into_iter()
            .map(|r| (r.id, r.sequence))
            .collect()
    }

    fn rec(id: &str, seq: &str) -> (String, String) {
        (id.to_string(), seq.to_string())
    }

    #[test]
    fn test_multiline_records() {
        let records = parse(">cytC1 Geobacter cytochrome c\nMKCAA\nCHGG\n>cytC2\nCAACK\n");
        assert_eq!(
            records,
            vec![rec("cytC1", "MKCAACHGG"), rec("cytC2", "CAACK")]
        );
    }

    #[test]
    fn test_header_without_sequence_is_dropped() {
        let records = parse(">empty\n>full\nMCAACH\n>trailing\n");
        assert_eq!(records, vec![rec("full", "MCAACH")]);
    }

    #[test]
    fn test_whitespace_and_crlf_are_trimmed() {
        let records = parse(">seq1\tdescription\r\n  MCA \r\nACH\r\n\r\n");
        assert_eq!(records, vec![rec("seq1", "MCAACH")]);
    }

    #[test]
    fn test_sequence_before_first_header() {
        let records = parse("MCAACH\n>named\nCK\n");
        assert_eq!(records, vec![rec("", "MCAACH"), rec("named", "CK")]);
    }

    #[test]
    fn test_bare_header_has_empty_id() {
        let records = parse(">\nCAACH\n");
        assert_eq!(records, vec![rec("", "CAACH")]);
    }

    #[test]
    fn test_empty_input() {
        assert!(parse("").is_empty());
    }

    #[test]
    fn test_read_fasta_from_file() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, ">p1 first")?;
        writeln!(file, "MCAACHDE")?;
        writeln!(file, ">p2")?;
        writeln!(file, "CAACHCAACH")?;

        let records = Reader::read_fasta(file.path())?;

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "p1");
        assert_eq!(records[1].sequence, "CAACHCAACH");
        Ok(())
    }

    #[test]
    fn test_read_fasta_missing_file() {
        let err = Reader::read_fasta(Path::new("does/not/exist.faa")).unwrap_err();
        assert!(err.to_string().contains("does/not/exist.faa"));
    }
}
