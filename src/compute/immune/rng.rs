//! Random population generation and clonal mutation.

use rand::prelude::*;

use super::antibody::{Antibody, Population};

/// Random number generator wrapper for antibody operations.
pub struct AntibodyRng {
    rng: StdRng,
}

impl AntibodyRng {
    /// Create from seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create with random seed.
    pub fn random() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Generate a random antibody over `len` edges.
    ///
    /// A target number of ones is drawn uniformly from `[1, len]`, then
    /// uniformly random positions are set until that many bits are on.
    /// Positions are drawn with replacement, so a draw may land on a bit that
    /// is already set and the loop simply draws again.
    pub fn random_antibody(&mut self, len: usize) -> Antibody {
        let mut antibody = Antibody::zeros(len);
        if len == 0 {
            return antibody;
        }

        let target = self.rng.gen_range(1..=len);
        let mut ones = 0;
        while ones < target {
            let index = self.rng.gen_range(0..len);
            if !antibody.is_selected(index) {
                antibody.set(index, true);
                ones += 1;
            }
        }
        antibody
    }

    /// Generate `size` random antibodies over `len` edges.
    pub fn random_population(&mut self, size: usize, len: usize) -> Population {
        (0..size).map(|_| self.random_antibody(len)).collect()
    }

    /// Build a flip mask with exactly `ceil(prob * len)` positions set,
    /// placed uniformly at random.
    pub fn mutation_mask(&mut self, len: usize, prob: f64) -> Vec<bool> {
        let flips = flip_count(len, prob);
        let mut mask: Vec<bool> = (0..len).map(|i| i >= len - flips).collect();
        mask.shuffle(&mut self.rng);
        mask
    }

    /// Flip every masked position of the antibody.
    pub fn mutate(&mut self, antibody: &mut Antibody, prob: f64) {
        let mask = self.mutation_mask(antibody.len(), prob);
        for (i, flip) in mask.into_iter().enumerate() {
            if flip {
                antibody.flip(i);
            }
        }
    }

    /// Clonal expansion.
    ///
    /// The antibody at rank `i` of an `n`-sized population yields `n - i`
    /// mutated clones. Originals are kept in place and clones are appended,
    /// giving `n + n(n+1)/2` antibodies.
    pub fn clone_and_mutate(&mut self, population: Population, prob: f64) -> Population {
        let n = population.len();
        let mut clones = Vec::with_capacity(expanded_size(n) - n);

        for (i, antibody) in population.iter().enumerate() {
            for _ in 0..n - i {
                let mut clone = antibody.clone();
                self.mutate(&mut clone, prob);
                clones.push(clone);
            }
        }

        let mut expanded = population;
        expanded.extend(clones);
        expanded
    }
}

/// Number of positions a mutation flips for an antibody of length `len`.
pub fn flip_count(len: usize, prob: f64) -> usize {
    ((prob * len as f64).ceil() as usize).min(len)
}

/// Population size after clonal expansion of `n` antibodies.
pub fn expanded_size(n: usize) -> usize {
    n + n * (n + 1) / 2
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_random_antibody_has_at_least_one_bit() {
        let mut rng = AntibodyRng::new(42);
        for len in 1..20 {
            let antibody = rng.random_antibody(len);
            assert_eq!(antibody.len(), len);
            assert!(antibody.ones() >= 1);
            assert!(antibody.ones() <= len);
        }
    }

    #[test]
    fn test_random_population_size() {
        let mut rng = AntibodyRng::new(42);
        let population = rng.random_population(7, 5);
        assert_eq!(population.len(), 7);
        assert!(population.iter().all(|a| a.len() == 5));
    }

    #[test]
    fn test_single_edge_always_selected() {
        let mut rng = AntibodyRng::new(7);
        for _ in 0..10 {
            assert_eq!(rng.random_antibody(1).to_string(), "1");
        }
    }

    #[test]
    fn test_flip_count() {
        assert_eq!(flip_count(10, 0.0), 0);
        assert_eq!(flip_count(10, 0.2), 2);
        assert_eq!(flip_count(10, 0.25), 3);
        assert_eq!(flip_count(3, 0.2), 1);
        assert_eq!(flip_count(3, 1.0), 3);
    }

    #[test]
    fn test_mutation_mask_count() {
        let mut rng = AntibodyRng::new(42);
        let mask = rng.mutation_mask(10, 0.25);
        assert_eq!(mask.len(), 10);
        assert_eq!(mask.iter().filter(|&&m| m).count(), 3);
    }

    #[test]
    fn test_mutate_flips_exact_count() {
        let mut rng = AntibodyRng::new(42);
        let original = Antibody::from_indices(10, &[0, 1, 2]);
        let mut clone = original.clone();
        rng.mutate(&mut clone, 0.3);

        let differing = original
            .bits()
            .iter()
            .zip(clone.bits())
            .filter(|(a, b)| a != b)
            .count();
        assert_eq!(differing, 3);
    }

    #[test]
    fn test_zero_probability_clones_unchanged() {
        let mut rng = AntibodyRng::new(42);
        let population = vec![Antibody::from_indices(4, &[1]), Antibody::from_indices(4, &[2])];
        let expanded = rng.clone_and_mutate(population.clone(), 0.0);

        assert_eq!(expanded.len(), 5);
        assert_eq!(&expanded[..2], &population[..]);
        assert!(expanded[2..4].iter().all(|a| *a == population[0]));
        assert_eq!(expanded[4], population[1]);
    }

    #[test]
    fn test_full_probability_inverts_clones() {
        let mut rng = AntibodyRng::new(42);
        let population = vec![Antibody::from_indices(3, &[0])];
        let expanded = rng.clone_and_mutate(population, 1.0);

        assert_eq!(expanded.len(), 2);
        assert_eq!(expanded[0].to_string(), "100");
        assert_eq!(expanded[1].to_string(), "011");
    }

    #[test]
    fn test_empty_population_expands_to_empty() {
        let mut rng = AntibodyRng::new(42);
        assert!(rng.clone_and_mutate(Vec::new(), 0.5).is_empty());
    }

    proptest! {
        #[test]
        fn prop_clone_and_mutate_shape(
            seed in any::<u64>(),
            n in 0usize..8,
            len in 1usize..12,
            prob in 0.0f64..=1.0,
        ) {
            let mut rng = AntibodyRng::new(seed);
            let population = rng.random_population(n, len);
            let expanded = rng.clone_and_mutate(population.clone(), prob);

            prop_assert_eq!(expanded.len(), expanded_size(n));
            prop_assert!(expanded.iter().all(|a| a.len() == len));
            prop_assert_eq!(&expanded[..n], &population[..]);
        }
    }
}
