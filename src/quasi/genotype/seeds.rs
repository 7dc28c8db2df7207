//! Greedy farthest-first seed selection over aligned reads.
//!
//! Each round promotes the read farthest from every seed chosen so far, which
//! gives a 2-approximation to the metric k-center problem. The traversal stops
//! early once the farthest remaining read is closer than `threshold`, so
//! `max_seeds` acts as an upper bound on the number of haplotypes while the
//! actual population size is detected from the data.

use super::Genotype;
use crate::quasi::reads::AlignedRead;
use crate::utils::{QsError, QsResult};
use rand::Rng;
use rayon::iter::{IntoParallelRefMutIterator, ParallelIterator};
use std::cmp::Reverse;

/// Selects up to `max_seeds` mutually distant reads and returns them as
/// candidate haplotypes, in selection order, with ids `0..`.
///
/// The first seed is drawn uniformly from `reads` using `rng`.
pub fn find_seeds<R: Rng + ?Sized>(
    reads: &[AlignedRead],
    max_seeds: usize,
    threshold: usize,
    rng: &mut R,
) -> QsResult<Vec<Genotype>> {
    if max_seeds == 0 {
        return Err(QsError::InvalidInput(
            "Maximum number of seeds must be at least 1".into(),
        ));
    }
    check_reads(reads)?;
    let first = rng.random_range(0..reads.len());
    log::debug!("First seed: {}", reads[first].name);
    find_seeds_from(reads, first, max_seeds, threshold)
}

fn check_reads(reads: &[AlignedRead]) -> QsResult<()> {
    let first = reads
        .first()
        .ok_or_else(|| QsError::InvalidInput("Cannot select seeds from an empty read set".into()))?;
    if let Some(read) = reads.iter().find(|read| read.len() != first.len()) {
        return Err(QsError::InvalidInput(format!(
            "Reads must be aligned to equal length: {} has length {}, {} has length {}",
            first.name,
            first.len(),
            read.name,
            read.len()
        )));
    }
    Ok(())
}

fn find_seeds_from(
    reads: &[AlignedRead],
    first: usize,
    max_seeds: usize,
    threshold: usize,
) -> QsResult<Vec<Genotype>> {
    let mut seeds = vec![first];

    // Candidate read index -> distance to the closest seed, in read order.
    let first_read = &reads[first];
    let mut dist_map = reads
        .iter()
        .enumerate()
        .filter(|(index, _)| *index != first)
        .map(|(index, read)| first_read.distance(read).map(|dist| (index, dist)))
        .collect::<QsResult<Vec<(usize, usize)>>>()?;

    while seeds.len() < max_seeds {
        // min_by_key keeps the first of equal keys, so ties go to the earliest read
        let Some((pos, &(candidate, max_dist))) = dist_map
            .iter()
            .enumerate()
            .min_by_key(|(_, (_, dist))| Reverse(*dist))
        else {
            log::debug!("Seed selection exhausted all {} reads", reads.len());
            break;
        };

        if max_dist < threshold {
            log::debug!(
                "Seed selection stopped at {} seeds: farthest read {} is {} < {}",
                seeds.len(),
                reads[candidate].name,
                max_dist,
                threshold
            );
            break;
        }

        dist_map.remove(pos);
        seeds.push(candidate);

        let seed = &reads[candidate];
        dist_map.par_iter_mut().try_for_each(|(index, dist)| {
            let seed_dist = seed.distance(&reads[*index])?;
            *dist = (*dist).min(seed_dist);
            Ok::<(), QsError>(())
        })?;
    }

    log::info!("Selected {} seeds from {} reads", seeds.len(), reads.len());
    Ok(seeds
        .iter()
        .enumerate()
        .map(|(id, &index)| Genotype::from_read(id, &reads[index]))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quasi::reads::hamming_distance;
    use rand::{rngs::StdRng, SeedableRng};

    fn make_reads(seqs: &[&str]) -> Vec<AlignedRead> {
        seqs.iter()
            .enumerate()
            .map(|(i, seq)| AlignedRead::new(format!("r{}", i), *seq))
            .collect()
    }

    fn seqs_of(genotypes: &[Genotype]) -> Vec<&str> {
        genotypes.iter().map(|g| g.seq.as_str()).collect()
    }

    #[test]
    fn second_seed_is_farthest_from_first() {
        let reads = make_reads(&["AAAA", "AAAT", "TTTT"]);
        for seed in 0..32 {
            let mut rng = StdRng::seed_from_u64(seed);
            let seeds = find_seeds(&reads, 2, 1, &mut rng).unwrap();
            assert_eq!(seeds.len(), 2);
            let farthest = reads
                .iter()
                .map(|r| hamming_distance(&seeds[0].seq, &r.seq).unwrap())
                .max()
                .unwrap();
            assert_eq!(
                hamming_distance(&seeds[0].seq, &seeds[1].seq).unwrap(),
                farthest
            );
        }
    }

    #[test]
    fn first_seed_aaaa_picks_tttt() {
        let reads = make_reads(&["AAAA", "AAAT", "TTTT"]);
        let seeds = find_seeds_from(&reads, 0, 2, 1).unwrap();
        assert_eq!(seqs_of(&seeds), vec!["AAAA", "TTTT"]);
    }

    #[test]
    fn ties_go_to_earliest_read() {
        let reads = make_reads(&["AAAA", "AATT", "TTAA", "TAAT"]);
        let seeds = find_seeds_from(&reads, 0, 2, 1).unwrap();
        assert_eq!(seqs_of(&seeds), vec!["AAAA", "AATT"]);
    }

    #[test]
    fn distances_are_minimum_over_all_seeds() {
        // after AAAA and TTTT, AATT is 2 from both while AAAT is 1 from AAAA
        let reads = make_reads(&["AAAA", "AAAT", "TTTT", "AATT"]);
        let seeds = find_seeds_from(&reads, 0, 3, 1).unwrap();
        assert_eq!(seqs_of(&seeds), vec!["AAAA", "TTTT", "AATT"]);
    }

    #[test]
    fn stops_when_reads_run_out() {
        let reads = make_reads(&["AAAA", "TTTT"]);
        let seeds = find_seeds_from(&reads, 1, 5, 0).unwrap();
        assert_eq!(seqs_of(&seeds), vec!["TTTT", "AAAA"]);
    }

    #[test]
    fn unreachable_threshold_yields_single_seed() {
        let reads = make_reads(&["AAAA", "AAAT", "TTTT"]);
        let mut rng = StdRng::seed_from_u64(7);
        let seeds = find_seeds(&reads, 3, 5, &mut rng).unwrap();
        assert_eq!(seeds.len(), 1);
    }

    #[test]
    fn content_duplicates_of_later_seeds_stay_candidates() {
        let reads = make_reads(&["AAAA", "TTTT", "TTTT"]);
        let seeds = find_seeds_from(&reads, 0, 3, 0).unwrap();
        assert_eq!(seqs_of(&seeds), vec!["AAAA", "TTTT", "TTTT"]);

        let seeds = find_seeds_from(&reads, 0, 3, 1).unwrap();
        assert_eq!(seqs_of(&seeds), vec!["AAAA", "TTTT"]);
    }

    #[test]
    fn ids_follow_selection_order() {
        let reads = make_reads(&["AAAA", "AAAT", "TTTT"]);
        let seeds = find_seeds_from(&reads, 1, 3, 1).unwrap();
        let ids: Vec<usize> = seeds.iter().map(|g| g.id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
    }

    #[test]
    fn same_rng_seed_is_reproducible() {
        let reads = make_reads(&["AAAA", "AAAT", "TTTT", "ATAT", "TATA", "GGGG"]);
        let first = find_seeds(&reads, 4, 1, &mut StdRng::seed_from_u64(42)).unwrap();
        let second = find_seeds(&reads, 4, 1, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn empty_input_is_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            find_seeds(&[], 2, 1, &mut rng),
            Err(QsError::InvalidInput(_))
        ));
    }

    #[test]
    fn unaligned_reads_are_rejected() {
        let reads = make_reads(&["AAAA", "AAA"]);
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            find_seeds(&reads, 2, 1, &mut rng),
            Err(QsError::InvalidInput(_))
        ));
    }

    #[test]
    fn zero_seeds_is_rejected() {
        let reads = make_reads(&["AAAA"]);
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            find_seeds(&reads, 0, 1, &mut rng),
            Err(QsError::InvalidInput(_))
        ));
    }
}
