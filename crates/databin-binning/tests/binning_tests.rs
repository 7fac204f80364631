//! End-to-end behaviour of the binning policies on concrete tables

use approx::assert_relative_eq;
use databin_binning::*;
use ordered_float::OrderedFloat;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::BTreeMap;

fn counts_of(samples: impl IntoIterator<Item = u64>) -> BTreeMap<u64, u64> {
    let mut table = BTreeMap::new();
    for s in samples {
        *table.entry(s).or_insert(0) += 1;
    }
    table
}

fn random_counts(seed: u64, n: usize, max: u64) -> BTreeMap<u64, u64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    counts_of((0..n).map(|_| rng.gen_range(1..=max)))
}

#[test]
fn test_integral_weights_are_conserved_exactly() {
    let table = random_counts(12345, 1000, 20);
    let total: u64 = table.values().sum();

    for bins in [1, 2, 5, 13, 24, 40] {
        let result = LinearBinning::new(bins).unwrap().bin(&table).unwrap();
        assert_eq!(result.len(), bins);
        assert_eq!(result.iter().map(|b| b.value).sum::<u64>(), total);
    }
}

#[test]
fn test_logarithmic_mass_is_conserved() {
    let table = random_counts(53800, 1000, 20);
    let total: u64 = table.values().sum();

    for base in [2.0, 10.0, std::f64::consts::E] {
        for bins in [5, 11, 24] {
            let result = LogarithmicBinning::new(bins, base).unwrap().bin(&table).unwrap();
            assert_eq!(result.len(), bins);
            let sum: f64 = result.iter().map(|b| b.value).sum();
            assert_relative_eq!(sum, total as f64, max_relative = 1e-4);
        }
    }
}

#[test]
fn test_bins_tile_the_key_range() {
    let table = random_counts(7, 500, 1000);
    let min = *table.keys().next().unwrap() as f64;
    let max = *table.keys().last().unwrap() as f64;

    let linear = LinearBinning::new(17).unwrap().bin(&table).unwrap();
    let log = LogarithmicBinning::new(17, 2.0).unwrap().bin(&table).unwrap();

    for bins in [
        linear.iter().map(|b| (b.left, b.right)).collect::<Vec<_>>(),
        log.iter().map(|b| (b.left, b.right)).collect::<Vec<_>>(),
    ] {
        assert_eq!(bins.first().unwrap().0, min);
        assert_eq!(bins.last().unwrap().1, max);
        for pair in bins.windows(2) {
            assert_eq!(pair[0].1, pair[1].0);
            assert!(pair[0].0 < pair[0].1);
        }
    }
}

#[test]
fn test_boundary_keys_stop_the_cursor() {
    // Linear boundaries at 0, 2, 4, 6, 8; each key stops on its own boundary
    let table: BTreeMap<i64, u64> = [(0, 1), (2, 10), (4, 100), (6, 1000), (8, 10000)]
        .into_iter()
        .collect();
    let bins = LinearBinning::new(4).unwrap().bin(&table).unwrap();
    let values: Vec<u64> = bins.iter().map(|b| b.value).collect();
    assert_eq!(values, vec![1, 10, 100, 11000]);
}

#[test]
fn test_keys_spanning_the_whole_f64_range() {
    let table: BTreeMap<OrderedFloat<f64>, u64> = [(OrderedFloat(-1e308), 1), (OrderedFloat(1e308), 1)]
        .into_iter()
        .collect();

    let bins = LinearBinning::new(2).unwrap().bin(&table).unwrap();
    assert_eq!(bins.iter().map(|b| b.value).collect::<Vec<_>>(), vec![1, 1]);
    assert_eq!((bins[0].left, bins[0].right), (-1e308, 0.0));
    assert_eq!((bins[1].left, bins[1].right), (0.0, 1e308));
    assert!(bins.iter().all(|b| b.center.is_finite()));

    let bins = MaximumLinearBinning.bin(&table).unwrap();
    assert_eq!(bins.len(), 2);
    assert_eq!(bins.first().unwrap().left, -1e308);
    assert_eq!(bins.last().unwrap().right, 1e308);
}

#[test]
fn test_floating_keys() {
    let table: BTreeMap<OrderedFloat<f64>, f64> = [(0.5, 0.1), (1.5, 0.2), (2.5, 0.3), (3.5, 0.4)]
        .into_iter()
        .map(|(k, w)| (OrderedFloat(k), w))
        .collect();

    let bins = LinearBinning::new(2).unwrap().bin(&table).unwrap();
    assert_relative_eq!(bins[0].value, 0.1, epsilon = 1e-12);
    assert_relative_eq!(bins[1].value, 0.9, epsilon = 1e-12);

    let averaged = LinearAverageBinning::new(2).unwrap().bin(&table).unwrap();
    assert_relative_eq!(averaged[0].value, 0.1, epsilon = 1e-12);
    assert_relative_eq!(averaged[1].value, 0.3, epsilon = 1e-12);
}

#[test]
fn test_rejects_non_finite_keys() {
    let table: BTreeMap<OrderedFloat<f64>, u64> = [(OrderedFloat(1.0), 1), (OrderedFloat(f64::INFINITY), 1)]
        .into_iter()
        .collect();
    assert!(matches!(
        LinearBinning::new(2).unwrap().bin(&table),
        Err(Error::InvalidInput(_))
    ));
}

#[test]
fn test_maximum_linear_leaves_no_empty_bin() {
    for seed in 0..20 {
        let table = random_counts(seed, 300, 60);
        let bins = MaximumLinearBinning.bin(&table).unwrap();
        let count = bins.len();

        assert!(count >= 2);
        assert!(bins.iter().all(|b| b.value > 0), "seed {seed}: empty bin");

        let next = LinearBinning::new(count + 1).unwrap().bin(&table).unwrap();
        assert!(
            next.iter().any(|b| b.value == 0),
            "seed {seed}: {} bins would have been fine",
            count + 1
        );
    }
}

#[test]
fn test_maximum_logarithmic_leaves_no_empty_bin() {
    let table = random_counts(99, 2000, 500);
    let binning = MaximumLogarithmicBinning::new(10.0).unwrap();
    let bins = binning.bin(&table).unwrap();
    assert!(bins.iter().all(|b| b.value > 0.0));

    let total: u64 = table.values().sum();
    let sum: f64 = bins.iter().map(|b| b.value).sum();
    assert_relative_eq!(sum, total as f64, max_relative = 1e-4);
}

#[test]
fn test_maximum_average_never_produces_nan() {
    for seed in 0..10 {
        let table = random_counts(seed, 200, 40);
        let bins = MaximumLinearAverageBinning.bin(&table).unwrap();
        assert_eq!(bins.len(), MaximumLinearBinning.bin(&table).unwrap().len());
        assert!(bins.iter().all(|b| b.value.is_finite() && b.value > 0.0));
    }
}

#[test]
fn test_rejection_cases() {
    let single: BTreeMap<u64, u64> = [(5, 3)].into_iter().collect();
    assert!(matches!(
        LinearBinning::new(2).unwrap().bin(&single),
        Err(Error::InsufficientData { .. })
    ));
    assert!(matches!(
        MaximumLinearBinning.bin(&single),
        Err(Error::InsufficientData { .. })
    ));
    assert!(matches!(
        MaximumLinearAverageBinning.bin(&single),
        Err(Error::InsufficientData { .. })
    ));

    let with_zero: BTreeMap<u64, u64> = [(0, 1), (5, 3)].into_iter().collect();
    assert!(matches!(
        LogarithmicBinning::new(2, 10.0).unwrap().bin(&with_zero),
        Err(Error::Domain(_))
    ));

    assert!(matches!(LinearBinning::new(0), Err(Error::InvalidParameter(_))));
    assert!(matches!(LogarithmicBinning::new(3, 1.5), Err(Error::InvalidParameter(_))));
}
