use serde::{Deserialize, Serialize};

/// Ask the backend which parts are running low.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplenishmentRequest {
    /// Parts whose available quantity (stock − reserved) is at or below this
    /// value are suggested.
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

fn default_threshold() -> f64 {
    5.0
}

impl Default for ReplenishmentRequest {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
        }
    }
}
