use crate::models::motif::HemeMotif;

/// A motif occurrence over the half-open residue interval `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotifMatch {
    pub motif: HemeMotif,
    pub start: usize,
    pub end: usize,
}

impl MotifMatch {
    pub fn new(motif: HemeMotif, start: usize, end: usize) -> Self {
        Self { motif, start, end }
    }

    pub fn overlaps(&self, other: &MotifMatch) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Accepted matches for one sequence. No two members overlap and members
/// are kept in the order they were accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchSet {
    matches: Vec<MotifMatch>,
}

impl MatchSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts `candidate` unless it overlaps an already accepted match.
    /// Returns whether it was accepted.
    pub fn try_insert(&mut self, candidate: MotifMatch) -> bool {
        if self.matches.iter().any(|m| m.overlaps(&candidate)) {
            return false;
        }
        self.matches.push(candidate);
        true
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MotifMatch> {
        self.matches.iter()
    }
}

impl<'a> IntoIterator for &'a MatchSet {
    type Item = &'a MotifMatch;
    type IntoIter = std::slice::Iter<'a, MotifMatch>;

    fn into_iter(self) -> Self::IntoIter {
        self.matches.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::motif::HEME_BINDING_MOTIFS;

    #[test]
    fn test_overlap_is_half_open() {
        let motif = HEME_BINDING_MOTIFS[0];
        let a = MotifMatch::new(motif, 0, 5);
        let adjacent = MotifMatch::new(motif, 5, 10);
        let shared = MotifMatch::new(motif, 4, 9);

        assert!(!a.overlaps(&adjacent));
        assert!(!adjacent.overlaps(&a));
        assert!(a.overlaps(&shared));
        assert!(shared.overlaps(&a));
    }

    #[test]
    fn test_try_insert_rejects_overlap() {
        let mut match_set = MatchSet::new();
        let short = HEME_BINDING_MOTIFS[0];
        let long = HEME_BINDING_MOTIFS[5];

        assert!(match_set.try_insert(MotifMatch::new(short, 10, 15)));
        assert!(!match_set.try_insert(MotifMatch::new(long, 0, 14)));
        assert!(match_set.try_insert(MotifMatch::new(short, 15, 20)));

        let starts: Vec<usize> = match_set.iter().map(|m| m.start).collect();
        assert_eq!(starts, vec![10, 15]);
        assert_eq!(match_set.len(), 2);
    }
}
