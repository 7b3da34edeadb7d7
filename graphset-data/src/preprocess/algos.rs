//! Shortest-path structural encodings.

use graphset_core::{Array, GraphsetError, Result};

/// Distance assigned to pairs of nodes with no connecting path.
pub const UNREACHABLE: i64 = 510;

/// Marks a pair whose shortest path is the direct edge (no intermediate node).
const NO_INTERMEDIATE: i64 = -1;

fn square_side<T>(array: &Array<T>, operation: &str) -> Result<usize> {
    let shape = array.shape();
    if shape.len() < 2 || shape[0] != shape[1] {
        return Err(GraphsetError::ShapeMismatch {
            expected: "a [n, n, ..] array".to_string(),
            actual: format!("{:?}", shape),
            operation: operation.to_string(),
        });
    }
    Ok(shape[0])
}

/// All-pairs shortest hop distances over a dense adjacency matrix.
///
/// Returns `(distances, path)`. `distances[i][i]` is 0 and pairs without a
/// path get [`UNREACHABLE`]. `path[i][j]` is the intermediate node through
/// which the shortest `i -> j` path was last relaxed, `-1` for direct edges
/// and [`UNREACHABLE`] for unreachable pairs.
pub fn floyd_warshall(adjacency: &Array<bool>) -> Result<(Array<i64>, Array<i64>)> {
    let n = square_side(adjacency, "floyd_warshall")?;
    let adj = adjacency.as_slice();
    let mut dist: Vec<i64> = (0..n * n)
        .map(|p| {
            let (i, j) = (p / n, p % n);
            if i == j {
                0
            } else if adj[p] {
                1
            } else {
                UNREACHABLE
            }
        })
        .collect();
    let mut path = vec![NO_INTERMEDIATE; n * n];

    for k in 0..n {
        for i in 0..n {
            let d_ik = dist[i * n + k];
            for j in 0..n {
                let through_k = d_ik + dist[k * n + j];
                if dist[i * n + j] > through_k {
                    dist[i * n + j] = through_k;
                    path[i * n + j] = k as i64;
                }
            }
        }
    }

    for p in 0..n * n {
        if dist[p] >= UNREACHABLE {
            dist[p] = UNREACHABLE;
            path[p] = UNREACHABLE;
        }
    }

    Ok((Array::new(dist, vec![n, n])?, Array::new(path, vec![n, n])?))
}

/// Intermediate nodes of the recorded shortest path from `i` to `j`, in order.
fn intermediate_nodes(path: &[i64], n: usize, i: usize, j: usize, out: &mut Vec<usize>) {
    let k = path[i * n + j];
    if k < 0 || k == UNREACHABLE {
        return;
    }
    let k = k as usize;
    intermediate_nodes(path, n, i, k, out);
    out.push(k);
    intermediate_nodes(path, n, k, j, out);
}

/// Collects the edge features along every shortest path.
///
/// `edge_feat` has shape `[n, n, F]`. The result has shape
/// `[n, n, max_dist, F]`; entry `[i, j, s]` holds the features of the `s`-th
/// edge on the path from `i` to `j`. Diagonal, unreachable and padding
/// entries are `-1`.
pub fn gen_edge_input(max_dist: usize, path: &Array<i64>, edge_feat: &Array<i64>) -> Result<Array<i64>> {
    let n = square_side(path, "gen_edge_input")?;
    if edge_feat.rank() != 3 || edge_feat.shape()[0] != n || edge_feat.shape()[1] != n {
        return Err(GraphsetError::ShapeMismatch {
            expected: format!("[{}, {}, F]", n, n),
            actual: format!("{:?}", edge_feat.shape()),
            operation: "gen_edge_input".to_string(),
        });
    }
    let num_feat = edge_feat.shape()[2];
    let path = path.as_slice();
    let feat = edge_feat.as_slice();
    let mut out = vec![-1i64; n * n * max_dist * num_feat];
    let mut nodes = Vec::new();

    for i in 0..n {
        for j in 0..n {
            if i == j || path[i * n + j] == UNREACHABLE {
                continue;
            }
            nodes.clear();
            nodes.push(i);
            intermediate_nodes(path, n, i, j, &mut nodes);
            nodes.push(j);
            for (step, hop) in nodes.windows(2).enumerate().take(max_dist) {
                let src = (hop[0] * n + hop[1]) * num_feat;
                let dst = ((i * n + j) * max_dist + step) * num_feat;
                out[dst..dst + num_feat].copy_from_slice(&feat[src..src + num_feat]);
            }
        }
    }

    Array::new(out, vec![n, n, max_dist, num_feat])
}

#[cfg(test)]
#[path = "algos_test.rs"]
mod tests;
