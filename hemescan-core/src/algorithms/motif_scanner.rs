use crate::models::{
    motif::MotifSet,
    motif_match::{MatchSet, MotifMatch},
    sequence::SequenceRecord,
};

/// Scans `sequence` with every motif in priority order and keeps the
/// occurrences that do not overlap anything accepted before them.
///
/// Occurrences of a single motif are found left to right without overlap
/// (the search resumes after the end of each hit). Across motifs, the
/// earlier motif in the set wins any contested region.
pub fn find_heme_motifs(sequence: &str, motifs: &MotifSet) -> MatchSet {
    let mut match_set = MatchSet::new();
    let is_ascii = sequence.is_ascii();

    for compiled in motifs.iter() {
        for hit in compiled.regex().find_iter(sequence) {
            let (start, end) = if is_ascii {
                (hit.start(), hit.end())
            } else {
                (
                    char_offset(sequence, hit.start()),
                    char_offset(sequence, hit.end()),
                )
            };

            match_set.try_insert(MotifMatch::new(compiled.motif, start, end));
        }
    }

    match_set
}

pub fn scan_record(record: &SequenceRecord, motifs: &MotifSet) -> MatchSet {
    find_heme_motifs(&record.sequence, motifs)
}

// Regex offsets are byte offsets; reports use residue (char) offsets.
fn char_offset(sequence: &str, byte_offset: usize) -> usize {
    sequence[..byte_offset].chars().count()
}
