use crate::cli::SeedArgs;
use crate::quasi::{
    genotype::{find_seeds, Genotype},
    reads::load_reads,
    writers::write_haplotypes,
};
use crate::utils::Result;
use rand::{rngs::StdRng, SeedableRng};
use rayon::ThreadPoolBuilder;
use std::fs::File;

pub fn seed(args: SeedArgs) -> Result<()> {
    let reads = load_reads(&args.reads_path)?;
    log::info!(
        "Loaded {} reads from {}",
        reads.len(),
        args.reads_path.display()
    );

    let mut rng = match args.rng_seed {
        Some(rng_seed) => StdRng::seed_from_u64(rng_seed),
        None => StdRng::from_os_rng(),
    };

    log::debug!(
        "Initializing thread pool with {} threads...",
        args.num_threads
    );
    let pool = initialize_thread_pool(args.num_threads)?;
    let seeds = pool.install(|| find_seeds(&reads, args.max_seeds, args.threshold, &mut rng))?;

    // Uniform starting abundances for the refinement stage
    let start_freq = 1.0 / seeds.len() as f64;
    let seeds: Vec<Genotype> = seeds
        .into_iter()
        .map(|seed| Genotype::new(seed.id, seed.seq, start_freq))
        .collect();

    let file = File::create(&args.output_path)
        .map_err(|e| format!("Failed to create {}: {}", args.output_path, e))?;
    let count = write_haplotypes(file, &seeds, None)?;
    log::info!("Wrote {} seed haplotypes to {}", count, args.output_path);
    Ok(())
}

fn initialize_thread_pool(num_threads: usize) -> Result<rayon::ThreadPool> {
    ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .thread_name(|i| format!("quasiseed-{}", i))
        .build()
        .map_err(|e| format!("Failed to initialize thread pool: {}", e))
}
