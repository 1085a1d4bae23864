use crate::topology::{AdjacencyList, NetworkGenerator};
use ndarray::Array2;
use rand::Rng;
use tracing::debug;

pub(crate) fn roads(adj_list: &AdjacencyList) -> impl Iterator<Item = (usize, usize)> + '_ {
    adj_list
        .iter()
        .enumerate()
        .flat_map(|(from, successors)| successors.iter().map(move |&to| (from, to)))
}

impl NetworkGenerator {
    /// Vehicles per time unit on each road, drawn from `0..=max_road_capacity`.
    /// A node's own entry is unbounded.
    pub fn create_capacity_matrix<R: Rng>(
        &self,
        rng: &mut R,
        adj_list: &AdjacencyList,
    ) -> Array2<f64> {
        let mut capacity_matrix = Array2::<f64>::zeros((self.num_nodes, self.num_nodes));
        capacity_matrix.diag_mut().fill(f64::INFINITY);
        for (from, to) in roads(adj_list) {
            capacity_matrix[[from, to]] = rng.gen_range(0..=self.config.max_road_capacity) as f64;
        }
        debug!(
            num_nodes = self.num_nodes,
            num_roads = adj_list.iter().map(Vec::len).sum::<usize>(),
            "built capacity matrix"
        );
        capacity_matrix
    }

    /// Length in km of each road, drawn from `0..=max_travel_distance`.
    pub fn create_travel_distance_matrix<R: Rng>(
        &self,
        rng: &mut R,
        adj_list: &AdjacencyList,
    ) -> Array2<u32> {
        let mut distance_matrix = Array2::<u32>::zeros((self.num_nodes, self.num_nodes));
        for (from, to) in roads(adj_list) {
            distance_matrix[[from, to]] = rng.gen_range(0..=self.config.max_travel_distance);
        }
        debug!(
            num_nodes = self.num_nodes,
            total_distance = distance_matrix.iter().map(|&d| d as u64).sum::<u64>(),
            "built travel distance matrix"
        );
        distance_matrix
    }

    /// Time units to cover each road at `average_velocity`, rounded up.
    /// Staying at a node costs one time unit.
    pub fn create_travel_time_matrix(
        &self,
        adj_list: &AdjacencyList,
        distance_matrix: &Array2<u32>,
    ) -> Array2<u32> {
        let mut time_matrix = Array2::<u32>::zeros((self.num_nodes, self.num_nodes));
        time_matrix.diag_mut().fill(1);
        for (from, to) in roads(adj_list) {
            time_matrix[[from, to]] =
                distance_matrix[[from, to]].div_ceil(self.config.average_velocity);
        }
        debug!(
            num_nodes = self.num_nodes,
            max_time = time_matrix.iter().copied().max().unwrap_or(0),
            "built travel time matrix"
        );
        time_matrix
    }

    /// Energy units needed to traverse each road, rounded up.
    pub fn create_charge_to_traverse_matrix(
        &self,
        adj_list: &AdjacencyList,
        distance_matrix: &Array2<u32>,
    ) -> Array2<u32> {
        let mut charge_matrix = Array2::<u32>::zeros((self.num_nodes, self.num_nodes));
        for (from, to) in roads(adj_list) {
            charge_matrix[[from, to]] = (distance_matrix[[from, to]] as f64
                * self.config.average_consumption)
                .ceil() as u32;
        }
        debug!(
            num_nodes = self.num_nodes,
            max_charge = charge_matrix.iter().copied().max().unwrap_or(0),
            "built charge to traverse matrix"
        );
        charge_matrix
    }
}
