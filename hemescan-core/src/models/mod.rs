pub mod motif;
pub mod motif_match;
pub mod sequence;
