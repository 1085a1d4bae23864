//! Synthetic directed road networks with charging stations, for electric
//! vehicle routing simulations.
//!
//! ```
//! use rand::{rngs::SmallRng, SeedableRng};
//! use roadnet_generator::NetworkGenerator;
//!
//! let generator = NetworkGenerator::new(4, 5).unwrap();
//! let mut rng = SmallRng::seed_from_u64(0);
//! let adj_list = generator.create_random_graph(&mut rng);
//! let distances = generator.create_travel_distance_matrix(&mut rng, &adj_list);
//! let times = generator.create_travel_time_matrix(&adj_list, &distances);
//! assert_eq!(times[[0, 0]], 1);
//! ```

mod chargers;
pub mod config;
pub mod network;
mod roads;
pub mod topology;

pub use config::NetworkConfig;
pub use network::RoadNetwork;
pub use topology::{AdjacencyList, NetworkGenerator};
