use crate::config::NetworkConfig;
use anyhow::{anyhow, Result};
use rand::{seq::index, Rng};
use tracing::debug;

/// Successors of each node, ascending and without duplicates.
pub type AdjacencyList = Vec<Vec<usize>>;

/// Holds the node and edge counts and the config fixed at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkGenerator {
    pub num_nodes: usize,
    pub num_edges: usize,
    pub config: NetworkConfig,
}

impl NetworkGenerator {
    pub fn new(num_nodes: usize, num_edges: usize) -> Result<Self> {
        Self::with_config(num_nodes, num_edges, NetworkConfig::default())
    }

    pub fn with_config(num_nodes: usize, num_edges: usize, config: NetworkConfig) -> Result<Self> {
        if num_nodes == 0 {
            return Err(anyhow!("Node number must be positive"));
        }
        if num_edges == 0 {
            return Err(anyhow!("Edge number must be positive"));
        }
        let max_edges = num_nodes
            .checked_mul(num_nodes)
            .ok_or_else(|| anyhow!("Node number {} is too large", num_nodes))?;
        if num_edges > max_edges {
            return Err(anyhow!(
                "Edge number must be no greater than the square of node number ({} > {})",
                num_edges,
                max_edges
            ));
        }
        config.validate()?;
        Ok(Self {
            num_nodes,
            num_edges,
            config,
        })
    }

    /// Draws `num_edges` distinct ordered pairs out of all `num_nodes²`.
    ///
    /// Pairs with equal endpoints are dropped rather than redrawn, so the
    /// result holds at most `num_edges` roads and usually fewer.
    pub fn create_random_graph<R: Rng>(&self, rng: &mut R) -> AdjacencyList {
        let n = self.num_nodes;
        let mut adj_list: AdjacencyList = vec![Vec::new(); n];
        let mut self_loops = 0;

        for k in index::sample(rng, n * n, self.num_edges) {
            let (from, to) = (k / n, k % n);
            if from == to {
                self_loops += 1;
                continue;
            }
            adj_list[from].push(to);
        }
        for successors in adj_list.iter_mut() {
            successors.sort_unstable();
        }

        debug!(
            num_nodes = n,
            num_roads = self.num_edges - self_loops,
            discarded_self_loops = self_loops,
            "generated road topology"
        );
        adj_list
    }
}
