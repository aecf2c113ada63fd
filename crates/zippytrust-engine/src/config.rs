// crates/zippytrust-engine/src/config.rs
//
// Engine configuration for ZippyCoin trust scoring.
// Loaded from a TOML file or populated with the documented defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::weights::ReputationWeights;
use zippytrust_core::TrustError;

/// Tunable constants for the trust formula.
///
/// Every constant the formula uses is injectable here rather than
/// hard-coded, so deployments can retune without a rebuild.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Multiplier applied once per delegation hop (0.9 = 10% loss per hop).
    #[serde(default = "default_decay_factor")]
    pub decay_factor: f64,

    /// Depth beyond which a wallet is considered suspiciously far from
    /// any origin; scoring still proceeds, but the update pass logs a
    /// warning.
    #[serde(default = "default_max_delegation_depth")]
    pub max_delegation_depth: u32,

    /// Minimum stake in ZPC; below this the stake factor is floored.
    #[serde(default = "default_min_stake")]
    pub min_stake: f64,

    /// Network-effect gain per delegator (0.05 = +5% per delegator,
    /// saturating at ten delegators).
    #[serde(default = "default_network_effect_step")]
    pub network_effect_step: f64,

    /// Per-metric weights for the reputation factor.
    #[serde(default)]
    pub reputation_weights: ReputationWeights,
}

fn default_decay_factor() -> f64 {
    0.9
}

fn default_max_delegation_depth() -> u32 {
    10
}

fn default_min_stake() -> f64 {
    1000.0
}

fn default_network_effect_step() -> f64 {
    0.05
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            decay_factor: default_decay_factor(),
            max_delegation_depth: default_max_delegation_depth(),
            min_stake: default_min_stake(),
            network_effect_step: default_network_effect_step(),
            reputation_weights: ReputationWeights::default(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from a TOML file and validate it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TrustError> {
        let text = fs::read_to_string(path.as_ref())?;
        let config: EngineConfig = toml::from_str(&text)
            .map_err(|e| TrustError::Config(format!("{}: {}", path.as_ref().display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the formula cannot give bounded results for.
    pub fn validate(&self) -> Result<(), TrustError> {
        if !(self.decay_factor > 0.0 && self.decay_factor <= 1.0) {
            return Err(TrustError::Config(format!(
                "decay_factor must be in (0, 1], got {}",
                self.decay_factor
            )));
        }
        if !(self.min_stake > 0.0) {
            return Err(TrustError::Config(format!(
                "min_stake must be positive, got {}",
                self.min_stake
            )));
        }
        if self.network_effect_step < 0.0 {
            return Err(TrustError::Config(format!(
                "network_effect_step must be non-negative, got {}",
                self.network_effect_step
            )));
        }
        if !(self.reputation_weights.total() > 0.0) {
            return Err(TrustError::Config(
                "reputation weight table sums to zero".to_string(),
            ));
        }
        Ok(())
    }
}
