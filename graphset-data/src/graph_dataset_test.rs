// graphset-data/src/graph_dataset_test.rs

use super::*;
use crate::cache::DEFAULT_CACHE_CAPACITY;
use crate::datasets::VecDataset;
use crate::test_utils::{small_graph, CountingDataset};
use approx::assert_relative_eq;
use std::collections::HashSet;

fn graphs(n: usize) -> VecDataset<Graph> {
    VecDataset::from_graphs((0..n).map(small_graph))
}

#[test]
fn test_random_split_partitions_all_indices() {
    let dataset = GraphDataset::new(graphs(50), 0).unwrap();
    assert_eq!(dataset.len(), 50);
    let split = dataset.split_indices().unwrap();
    assert!(split.is_partition_of(50));
    assert_eq!(dataset.test_idx().unwrap().len(), 5);
    assert_eq!(dataset.valid_idx().unwrap().len(), 10);
    assert_eq!(dataset.train_idx().unwrap().len(), 35);
}

#[test]
fn test_partitions_have_matching_lengths() {
    let dataset = GraphDataset::new(graphs(30), 1).unwrap();
    assert_eq!(dataset.train_data().unwrap().len(), 21);
    assert_eq!(dataset.valid_data().unwrap().len(), 6);
    assert_eq!(dataset.test_data().unwrap().len(), 3);
    // Partitions carry no partitions of their own.
    let train = dataset.train_data().unwrap();
    assert!(train.train_data().is_none());
    assert!(train.train_idx().is_none());
    assert_eq!(train.seed(), 1);
}

#[test]
fn test_partition_items_map_to_original_samples() {
    let dataset = GraphDataset::new(graphs(20), 3).unwrap();
    let test_idx = dataset.test_idx().unwrap().to_vec();
    let test = dataset.test_data().unwrap();
    for (position, &original) in test_idx.iter().enumerate() {
        let item = test.get(position).unwrap();
        // Labels encode the original index.
        assert_relative_eq!(item.y.as_slice()[0], original as f32);
        // The item index is the position inside the partition.
        assert_eq!(item.idx, Some(position));
    }
}

#[test]
fn test_partitions_are_disjoint_by_content() {
    let dataset = GraphDataset::new(graphs(40), 9).unwrap();
    let mut labels = HashSet::new();
    for part in [
        dataset.train_data().unwrap(),
        dataset.valid_data().unwrap(),
        dataset.test_data().unwrap(),
    ] {
        for i in 0..part.len() {
            let label = part.get(i).unwrap().y.as_slice()[0] as usize;
            assert!(labels.insert(label), "sample {} appears twice", label);
        }
    }
    assert_eq!(labels.len(), 40);
}

#[test]
fn test_split_is_deterministic_per_seed() {
    let a = GraphDataset::new(graphs(25), 4).unwrap();
    let b = GraphDataset::new(graphs(25), 4).unwrap();
    assert_eq!(a.split_indices(), b.split_indices());
}

#[test]
fn test_empty_dataset_rejected() {
    match GraphDataset::new(graphs(0), 0) {
        Err(GraphsetError::EmptyDataset) => {}
        other => panic!("Expected EmptyDataset, got {:?}", other),
    }
}

#[test]
fn test_get_out_of_bounds() {
    let dataset = GraphDataset::new(graphs(10), 0).unwrap();
    assert_eq!(
        dataset.get(10).unwrap_err(),
        GraphsetError::IndexOutOfBounds { index: 10, len: 10 }
    );
}

#[test]
fn test_get_preprocesses_and_tags_index() {
    let dataset = GraphDataset::new(graphs(10), 0).unwrap();
    let item = dataset.get(4).unwrap();
    assert_eq!(item.idx, Some(4));
    assert_eq!(item.y.shape(), &[1]);
    assert_eq!(item.num_nodes(), small_graph(4).num_nodes());
    assert_eq!(item.attn_bias.shape(), &[item.num_nodes() + 1, item.num_nodes() + 1]);
}

#[test]
fn test_get_is_memoised() {
    let counting = Arc::new(CountingDataset::new(10));
    let dataset = GraphDataset::new(Arc::clone(&counting), 0).unwrap();
    let first = dataset.get(2).unwrap();
    let second = dataset.get(2).unwrap();
    assert_eq!(first, second);
    assert_eq!(counting.fetches(), 1);
    assert!(dataset.cache().contains(2));
}

#[test]
fn test_lru_eviction_recomputes() {
    let counting = Arc::new(CountingDataset::new(40));
    let dataset = GraphDataset::new(Arc::clone(&counting), 0).unwrap();
    for i in 0..=DEFAULT_CACHE_CAPACITY {
        dataset.get(i).unwrap();
    }
    assert_eq!(counting.fetches(), DEFAULT_CACHE_CAPACITY + 1);
    assert!(!dataset.cache().contains(0));
    assert_eq!(dataset.cache().len(), DEFAULT_CACHE_CAPACITY);

    // Index 0 was evicted and is fetched again; index 16 is still cached.
    let again = dataset.get(0).unwrap();
    assert_eq!(again.idx, Some(0));
    assert_eq!(counting.fetches(), DEFAULT_CACHE_CAPACITY + 2);
    dataset.get(DEFAULT_CACHE_CAPACITY).unwrap();
    assert_eq!(counting.fetches(), DEFAULT_CACHE_CAPACITY + 2);
}

#[test]
fn test_cache_capacity_zero_disables_memoisation() {
    let counting = Arc::new(CountingDataset::new(10));
    let dataset = GraphDataset::with_cache_capacity(Arc::clone(&counting), 0, 0).unwrap();
    dataset.get(1).unwrap();
    dataset.get(1).unwrap();
    assert_eq!(counting.fetches(), 2);
}

#[test]
fn test_with_split_indices() {
    let split = SplitIndices::new(vec![0, 1, 2], vec![5], vec![7, 8]);
    let dataset = GraphDataset::with_split_indices(graphs(10), 2, split.clone()).unwrap();
    assert_eq!(dataset.len(), 6);
    assert_eq!(dataset.train_idx().unwrap(), &[0, 1, 2]);
    assert_eq!(dataset.split_indices(), Some(&split));
    let test = dataset.test_data().unwrap();
    assert_eq!(test.len(), 2);
    assert_relative_eq!(test.get(1).unwrap().y.as_slice()[0], 8.0);
}

#[test]
fn test_with_split_indices_out_of_range() {
    let split = SplitIndices::new(vec![0], vec![1], vec![10]);
    match GraphDataset::with_split_indices(graphs(10), 0, split) {
        Err(GraphsetError::IndexOutOfBounds { index, len }) => {
            assert_eq!(index, 10);
            assert_eq!(len, 10);
        }
        other => panic!("Expected IndexOutOfBounds, got {:?}", other),
    }
}

#[test]
fn test_from_sets() {
    let train = VecDataset::from_graphs((0..4).map(small_graph));
    let valid = VecDataset::from_graphs((10..12).map(small_graph));
    let test = VecDataset::from_graphs((20..21).map(small_graph));
    let dataset = GraphDataset::from_sets(train, valid, test, 5);

    assert_eq!(dataset.len(), 7);
    assert!(dataset.train_idx().is_none());
    assert!(dataset.split_indices().is_none());
    assert_eq!(dataset.train_data().unwrap().len(), 4);
    assert_eq!(dataset.valid_data().unwrap().len(), 2);
    assert_eq!(dataset.test_data().unwrap().len(), 1);
    assert_relative_eq!(dataset.valid_data().unwrap().get(1).unwrap().y.as_slice()[0], 11.0);

    // The combined view reads the three sets back to back.
    assert_relative_eq!(dataset.get(4).unwrap().y.as_slice()[0], 10.0);
    assert_relative_eq!(dataset.get(6).unwrap().y.as_slice()[0], 20.0);
}

#[test]
fn test_index_select_composes() {
    let dataset = GraphDataset::new(graphs(12), 0).unwrap();
    let view = dataset.index_select(&[11, 3, 7]).unwrap();
    assert_eq!(view.len(), 3);
    let nested = view.index_select(&[2, 0]).unwrap();
    assert_relative_eq!(nested.get(0).unwrap().y.as_slice()[0], 7.0);
    assert_relative_eq!(nested.get(1).unwrap().y.as_slice()[0], 11.0);
    assert!(view.index_select(&[3]).is_err());
}

#[test]
fn test_create_subset_keeps_seed_and_capacity() {
    let dataset = GraphDataset::with_cache_capacity(graphs(10), 8, 4).unwrap();
    let subset = dataset.create_subset(graphs(3));
    assert_eq!(subset.len(), 3);
    assert_eq!(subset.seed(), 8);
    assert_eq!(subset.cache().capacity(), 4);
    assert!(subset.train_data().is_none());
}

#[test]
fn test_from_config() {
    let config = DatasetConfig {
        seed: 6,
        cache_capacity: 2,
        ..DatasetConfig::default()
    };
    let dataset = GraphDataset::from_config(graphs(20), &config).unwrap();
    assert_eq!(dataset.seed(), 6);
    assert_eq!(dataset.cache().capacity(), 2);
    assert_eq!(dataset.train_data().unwrap().cache().capacity(), 2);
}

#[test]
fn test_tiny_dataset_has_empty_test_partition() {
    let dataset = GraphDataset::new(graphs(3), 0).unwrap();
    assert!(dataset.test_data().unwrap().is_empty());
    assert!(dataset.valid_data().unwrap().is_empty());
    assert_eq!(dataset.train_data().unwrap().len(), 3);
}

#[test]
fn test_index_select_out_of_range_reports_view_length() {
    let dataset = GraphDataset::new(graphs(12), 0).unwrap();
    let view = dataset.index_select(&[4, 5]).unwrap();
    assert_eq!(
        view.index_select(&[1, 2]).unwrap_err(),
        GraphsetError::IndexOutOfBounds { index: 2, len: 2 }
    );
}

#[test]
fn test_from_sets_partitions_share_the_given_sets() {
    let counting = Arc::new(CountingDataset::new(3));
    let dataset = GraphDataset::from_sets(
        Arc::clone(&counting),
        Arc::new(CountingDataset::new(2)),
        Arc::new(CountingDataset::new(1)),
        0,
    );
    // Reading through the combined view and the train partition hits the
    // same underlying set.
    dataset.get(1).unwrap();
    dataset.train_data().unwrap().get(2).unwrap();
    assert_eq!(counting.fetches(), 2);
}

#[test]
fn test_create_subset_accepts_shared_dataset() {
    let dataset = GraphDataset::new(graphs(10), 3).unwrap();
    let shared = Arc::new(graphs(4));
    let subset = dataset.create_subset(Arc::clone(&shared));
    assert_eq!(subset.len(), 4);
    assert_eq!(Arc::strong_count(&shared), 2);
}
