use anyhow::Result;
use clap::{CommandFactory, Parser};
use hemescan_core::{
    MotifSet, services::application::motif_count_service::count_heme_motifs,
    services::traits::MotifReportWriter,
};
use hemescan_io::io::readers::fasta::Reader as FastaReader;
use hemescan_io::io::writers::report::{COUNTS_FILE_NAME, POSITIONS_FILE_NAME, ReportWriter};
use hemescan_io::services::discovery_service::discover_input_files;

use humantime::format_duration;
use log::{debug, info};
use std::time::Instant;

mod argparser;
use argparser::Args;

fn main() -> Result<()> {
    let total_duration = Instant::now();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Help, or any argument count other than one, prints the usage text and succeeds.
    let args = match Args::try_parse() {
        Ok(args) if !args.is_help_request() => args,
        Ok(_) => return print_usage(),
        Err(e) => {
            debug!("Argument parsing stopped: {:?}", e.kind());
            return print_usage();
        }
    };

    let input = discover_input_files(&args.path)?;

    let motifs = MotifSet::heme_binding()?;
    info!(
        "Scanning for heme-binding motifs: {}",
        motifs.labels().join(", ")
    );

    let mut writer = ReportWriter::create(&input.base_dir)?;
    let summary = count_heme_motifs::<FastaReader, _>(&input.files, &motifs, &mut writer)?;
    writer.finish()?;

    info!("Processed {}", summary);
    println!(
        "Processing completed. Results saved in {} and {}",
        POSITIONS_FILE_NAME, COUNTS_FILE_NAME
    );

    let elapsed_total_duration = total_duration.elapsed();
    info!("Total time: {}", format_duration(elapsed_total_duration));
    Ok(())
}

fn print_usage() -> Result<()> {
    Args::command().print_long_help()?;
    println!();
    Ok(())
}
