use crate::{
    roads::roads,
    topology::{AdjacencyList, NetworkGenerator},
};
use ndarray::Array2;
use rand::{
    rngs::{SmallRng, StdRng},
    Rng, SeedableRng,
};
use serde::{Deserialize, Serialize};

/// A complete generated network, ready to hand to a routing simulation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RoadNetwork {
    pub seed: [u8; 32],
    pub num_nodes: usize,
    pub num_edges: usize,
    pub adj_list: AdjacencyList,
    #[serde(with = "unbounded_capacity")]
    pub capacity_matrix: Array2<f64>,
    pub travel_distance_matrix: Array2<u32>,
    pub travel_time_matrix: Array2<u32>,
    pub charge_to_traverse_matrix: Array2<u32>,
    pub charger_list: Vec<usize>,
    pub charger_capacity_list: Vec<u32>,
    pub charger_speed_list: Vec<u32>,
    pub charger_time_list: Vec<u32>,
}

impl RoadNetwork {
    pub fn generate_instance(seed: &[u8; 32], generator: &NetworkGenerator) -> Self {
        let mut rng = SmallRng::from_seed(StdRng::from_seed(seed.clone()).gen());

        let adj_list = generator.create_random_graph(&mut rng);
        let capacity_matrix = generator.create_capacity_matrix(&mut rng, &adj_list);
        let travel_distance_matrix = generator.create_travel_distance_matrix(&mut rng, &adj_list);
        let travel_time_matrix =
            generator.create_travel_time_matrix(&adj_list, &travel_distance_matrix);
        let charge_to_traverse_matrix =
            generator.create_charge_to_traverse_matrix(&adj_list, &travel_distance_matrix);

        let charger_list = generator.create_charger_list(&mut rng);
        let charger_capacity_list = generator.create_charger_capacity_list(&charger_list);
        let charger_speed_list = generator.create_charger_speed_list(&charger_list);
        let charger_time_list = generator.create_charger_time_list(&charger_list);

        Self {
            seed: seed.clone(),
            num_nodes: generator.num_nodes,
            num_edges: generator.num_edges,
            adj_list,
            capacity_matrix,
            travel_distance_matrix,
            travel_time_matrix,
            charge_to_traverse_matrix,
            charger_list,
            charger_capacity_list,
            charger_speed_list,
            charger_time_list,
        }
    }

    /// Roads actually present, which may be fewer than `num_edges`.
    pub fn num_roads(&self) -> usize {
        self.adj_list.iter().map(Vec::len).sum()
    }

    pub fn roads(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        roads(&self.adj_list)
    }

    pub fn has_charger(&self, node: usize) -> bool {
        self.charger_list.binary_search(&node).is_ok()
    }
}

/// Capacities as rows of numbers, with `null` standing for an unbounded
/// (infinite) entry.
mod unbounded_capacity {
    use ndarray::Array2;
    use serde::{de::Error, Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(matrix: &Array2<f64>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let rows: Vec<Vec<Option<f64>>> = matrix
            .rows()
            .into_iter()
            .map(|row| {
                row.iter()
                    .map(|&c| if c == f64::INFINITY { None } else { Some(c) })
                    .collect()
            })
            .collect();
        rows.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Array2<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let rows = Vec::<Vec<Option<f64>>>::deserialize(deserializer)?;
        let num_rows = rows.len();
        let num_cols = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|row| row.len() != num_cols) {
            return Err(D::Error::custom("capacity matrix rows must have equal length"));
        }
        let data: Vec<f64> = rows
            .into_iter()
            .flatten()
            .map(|c| c.unwrap_or(f64::INFINITY))
            .collect();
        Array2::from_shape_vec((num_rows, num_cols), data)
            .map_err(|e| D::Error::custom(format!("invalid capacity matrix: {}", e)))
    }
}
