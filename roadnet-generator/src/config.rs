use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

/// Tunables shared by every generation step. Defaults reproduce the
/// reference network: 300 vehicles of capacity, 100 km roads, 50 km per
/// time unit and 0.15 energy units per km.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct NetworkConfig {
    /// Upper bound (inclusive) of a road's vehicle throughput per time unit.
    pub max_road_capacity: u32,
    /// Upper bound (inclusive) of a road's length in km.
    pub max_travel_distance: u32,
    /// km covered per time unit.
    pub average_velocity: u32,
    /// Energy units consumed per km.
    pub average_consumption: f64,
    /// Vehicles that can charge concurrently at a station.
    pub charger_capacity: u32,
    /// Energy a station delivers to (or takes back from) a vehicle per `charger_time`.
    pub charger_speed: u32,
    /// Time units needed to transfer `charger_speed` energy.
    pub charger_time: u32,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            max_road_capacity: 300,
            max_travel_distance: 100,
            average_velocity: 50,
            average_consumption: 0.15,
            charger_capacity: 10,
            charger_speed: 5,
            charger_time: 1,
        }
    }
}

impl NetworkConfig {
    /// Parses a JSON document. Missing fields keep their default value.
    pub fn from_json(json_str: &str) -> Result<Self> {
        let config: NetworkConfig = serde_json::from_str(json_str)
            .map_err(|e| anyhow!("Failed to parse network config: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.average_velocity == 0 {
            return Err(anyhow!("Average velocity must be positive"));
        }
        if !self.average_consumption.is_finite() || self.average_consumption < 0.0 {
            return Err(anyhow!(
                "Average consumption must be a finite non-negative number, got {}",
                self.average_consumption
            ));
        }
        let max_charge = self.max_travel_distance as f64 * self.average_consumption;
        if max_charge.ceil() > u32::MAX as f64 {
            return Err(anyhow!(
                "Average consumption {} is too large: a {} km road would need {} energy units",
                self.average_consumption,
                self.max_travel_distance,
                max_charge
            ));
        }
        Ok(())
    }
}
