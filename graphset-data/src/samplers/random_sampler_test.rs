// graphset-data/src/samplers/random_sampler_test.rs

use super::*;
use std::collections::HashSet;

#[test]
fn test_random_sampler_len() {
    assert_eq!(RandomSampler::new(false, None).len(10), 10);
    assert_eq!(RandomSampler::new(false, Some(5)).len(10), 5);
}

#[test]
fn test_random_sampler_no_replacement_is_permutation() {
    let sampler = RandomSampler::new(false, None);
    let indices: Vec<usize> = sampler.iter(10).collect();
    assert_eq!(indices.len(), 10);
    let unique: HashSet<usize> = indices.into_iter().collect();
    assert_eq!(unique, (0..10).collect());
}

#[test]
fn test_random_sampler_no_replacement_subset() {
    let sampler = RandomSampler::new(false, Some(4));
    let indices: Vec<usize> = sampler.iter(10).collect();
    assert_eq!(indices.len(), 4);
    let unique: HashSet<usize> = indices.iter().copied().collect();
    assert_eq!(unique.len(), 4);
    assert!(indices.iter().all(|&i| i < 10));
}

#[test]
fn test_random_sampler_too_many_without_replacement_is_empty() {
    let _ = env_logger::builder().is_test(true).try_init();
    let sampler = RandomSampler::new(false, Some(10));
    assert_eq!(sampler.iter(5).count(), 0);
}

#[test]
fn test_random_sampler_with_replacement() {
    let sampler = RandomSampler::new(true, Some(10));
    let indices: Vec<usize> = sampler.iter(5).collect();
    assert_eq!(indices.len(), 10);
    assert!(indices.iter().all(|&i| i < 5));
}

#[test]
fn test_random_sampler_empty_dataset() {
    assert_eq!(RandomSampler::new(false, None).iter(0).count(), 0);
    assert_eq!(RandomSampler::new(true, Some(5)).iter(0).count(), 0);
}

#[test]
fn test_random_sampler_seeded_is_reproducible() {
    let sampler = RandomSampler::new(false, None).with_seed(11);
    let a: Vec<usize> = sampler.iter(50).collect();
    let b: Vec<usize> = sampler.iter(50).collect();
    assert_eq!(a, b);
    let other: Vec<usize> = RandomSampler::new(false, None).with_seed(12).iter(50).collect();
    assert_ne!(a, other);
}
