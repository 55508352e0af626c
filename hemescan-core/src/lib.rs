pub mod algorithms;
pub mod models;
pub mod services;

pub use models::motif::{HEME_BINDING_MOTIFS, HemeMotif, MotifSet};
pub use models::motif_match::{MatchSet, MotifMatch};
pub use models::sequence::SequenceRecord;
