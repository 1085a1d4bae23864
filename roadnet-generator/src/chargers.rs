use crate::topology::NetworkGenerator;
use rand::Rng;
use tracing::debug;

impl NetworkGenerator {
    /// Nodes hosting a charging station, ascending. Each node gets one
    /// independently with probability one half, regardless of topology.
    pub fn create_charger_list<R: Rng>(&self, rng: &mut R) -> Vec<usize> {
        let charger_list: Vec<usize> = (0..self.num_nodes)
            .filter(|_| rng.gen_bool(0.5))
            .collect();
        debug!(
            num_nodes = self.num_nodes,
            num_chargers = charger_list.len(),
            "placed charging stations"
        );
        charger_list
    }

    // Every station shares the configured values; the lists are indexed by
    // position in `charger_list`, not by node.

    pub fn create_charger_capacity_list(&self, charger_list: &[usize]) -> Vec<u32> {
        vec![self.config.charger_capacity; charger_list.len()]
    }

    pub fn create_charger_speed_list(&self, charger_list: &[usize]) -> Vec<u32> {
        vec![self.config.charger_speed; charger_list.len()]
    }

    pub fn create_charger_time_list(&self, charger_list: &[usize]) -> Vec<u32> {
        vec![self.config.charger_time; charger_list.len()]
    }
}
