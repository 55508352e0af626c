use clap::Parser;
use std::path::PathBuf;

const MOTIF_HELP: &str = "\
Counts heme-binding motifs in protein sequences without overlap. Recognised \
motifs, in the order they claim a region:
  Cx2CH (canonical), Cx2CK, CxCH/CxCK, Cx3CH, Cx4CH, Cx11CH, Cx14CH, Cx15CH, Cx17CH
where x is any residue.

Input:
  A single protein fasta file, or a directory searched recursively for
  .fasta and .faa files.

Output (written next to the input file, or into the input directory):
  Matched_positions.txt  position and motif of every match
  Counts.txt             number of motifs per sequence

Example:
  hemescan ./proteins/";

#[derive(Parser, Debug)]
#[command(about, long_about = MOTIF_HELP)]
pub struct Args {
    #[arg(
        allow_hyphen_values = true,
        help = "Path to a .fasta/.faa file or a directory containing them."
    )]
    pub path: PathBuf,
}

impl Args {
    /// Help flags are never taken as an input path.
    pub fn is_help_request(&self) -> bool {
        matches!(self.path.to_str(), Some("-h") | Some("--help"))
    }
}
