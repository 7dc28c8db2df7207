use crate::cli::ReportArgs;
use crate::quasi::{
    genotype::load_haplotypes,
    posteriors::PosteriorMatrix,
    reads::load_reads,
    writers::{
        write_clustered_reads, write_expanded_reads, write_freq_listing, write_haplotypes,
        OutputSinks,
    },
};
use crate::utils::{clean, Result};
use std::fs::File;

pub fn report(args: ReportArgs) -> Result<()> {
    let reads = load_reads(&args.reads_path)?;
    let haplotypes = load_haplotypes(&args.haplotypes_path)?;
    let pqrs = PosteriorMatrix::load(&args.posteriors_path)?;
    pqrs.check_shape(haplotypes.len(), reads.len())?;
    log::info!(
        "Reporting {} haplotypes over {} reads",
        haplotypes.len(),
        reads.len()
    );

    let freq_sum: f64 = haplotypes.iter().map(|h| h.freq).sum();
    if (freq_sum - 1.0).abs() > 1e-6 {
        log::warn!("Haplotype frequencies sum to {:.6}, not 1", freq_sum);
    }

    let sinks = OutputSinks::create(&args.output_dir)?;
    let num_reads = reads.len();
    let cleaned: &dyn Fn(&str) -> String = &clean;

    write_haplotypes(sinks.haplotypes, &haplotypes, None)?;
    write_haplotypes(sinks.haplotypes_cleaned, &haplotypes, Some(cleaned))?;
    let count = write_expanded_reads(sinks.reads, &haplotypes, num_reads, None)?;
    write_expanded_reads(sinks.reads_cleaned, &haplotypes, num_reads, Some(cleaned))?;
    log::debug!("Wrote {} corrected reads", count);
    write_clustered_reads(sinks.reads_clustered, &reads, &haplotypes, &pqrs)?;

    if let Some(path) = &args.frequencies_path {
        let file = File::create(path).map_err(|e| format!("Failed to create {}: {}", path, e))?;
        let count = write_freq_listing(file, &haplotypes)?;
        log::debug!("Wrote {} distinct haplotype frequencies to {}", count, path);
    }

    log::info!("Report written to {}", args.output_dir.display());
    Ok(())
}
