//! Splits a small synthetic graph collection, batches the training partition
//! and samples subgraphs for a node-level task.
//!
//! Run with `RUST_LOG=debug` to see the construction logs.

use graphset_core::{Array, Graph, Result};
use graphset_data::{
    DataLoader, Dataset, DatasetConfig, GraphDataset, NodeDataset, RandomSampler,
    SequentialSampler, VecDataset,
};

/// Undirected cycle of `n` nodes with categorical node features.
fn cycle(n: usize, label: f32) -> Result<Graph> {
    let mut edges = Vec::with_capacity(2 * n);
    for i in 0..n {
        edges.push([i, (i + 1) % n]);
        edges.push([(i + 1) % n, i]);
    }
    let x = Array::new((0..n as i64).map(|v| v % 4).collect(), vec![n, 1])?;
    let num_edges = edges.len();
    let edge_attr = Array::new(vec![1; num_edges], vec![num_edges, 1])?;
    Ok(Graph::new(x, edges)?
        .with_edge_attr(edge_attr)?
        .with_labels(Array::from_vec(vec![label])))
}

fn main() -> Result<()> {
    env_logger::init();

    let graphs = (0..30)
        .map(|i| cycle(3 + i % 5, i as f32))
        .collect::<Result<Vec<_>>>()?;
    let config = DatasetConfig {
        seed: 42,
        ..DatasetConfig::default()
    };
    let dataset = GraphDataset::from_config(VecDataset::from_graphs(graphs), &config)?;
    if let (Some(train), Some(valid), Some(test)) =
        (dataset.train_data(), dataset.valid_data(), dataset.test_data())
    {
        println!(
            "Graph split: {} train, {} valid, {} test",
            train.len(),
            valid.len(),
            test.len()
        );

        let sampler = RandomSampler::new(false, None).with_seed(config.seed);
        let loader = DataLoader::new(train, config.batch_size, sampler, false, None)?;
        println!("\n--- Training batches ---");
        for (i, batch) in loader.enumerate() {
            let batch = batch?;
            let sizes: Vec<usize> = batch.iter().map(|g| g.num_nodes()).collect();
            println!("Batch {i}: node counts {sizes:?}");
        }

        let loader = DataLoader::new(valid, config.batch_size, SequentialSampler::new(), false, None)?;
        println!("\n--- Validation batches ---");
        for (i, batch) in loader.enumerate() {
            let batch = batch?;
            let max_dist: Vec<usize> = batch.iter().map(|g| g.max_dist()).collect();
            println!("Batch {i}: max distances {max_dist:?}");
        }
    }

    let node_task = NodeDataset::new(VecDataset::from_graphs(vec![cycle(40, 0.0)?]), 7, 8)?;
    println!(
        "\nNode split: {} train, {} valid, {} test subgraphs",
        node_task.train_data().len(),
        node_task.valid_data().len(),
        node_task.test_data().len()
    );
    for i in 0..node_task.train_data().len() {
        let item = node_task.train_data().get(i)?;
        println!("Subgraph {i}: {} nodes", item.num_nodes());
    }
    Ok(())
}
