// crates/zippytrust-core/src/metrics.rs
//
// Reputation metric catalogue for the ZippyCoin trust engine.
//
// The metric set is closed: twelve named categories, each valued on a
// 0-100 scale. A wallet's metric map is sparse; absent metrics read as
// the neutral value 50.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Neutral value assumed for any metric a wallet has not reported.
pub const NEUTRAL_METRIC_VALUE: f64 = 50.0;

/// The twelve reputation metric categories.
///
/// Serialized names match the camelCase keys used in wallet documents
/// (e.g. `transactionSuccess`, `validatorUptime`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReputationMetric {
    /// Fraction of transactions that completed successfully.
    TransactionSuccess,
    /// Uptime while acting as a validator.
    ValidatorUptime,
    /// Participation in community governance votes.
    CommunityVoting,
    /// Adherence to security practices (key rotation, audits).
    SecurityCompliance,
    /// Contribution of resources to the network.
    NetworkContribution,
    /// How long the wallet has been active on the network.
    TimeOnNetwork,
    /// Stability of the wallet's stake over time.
    StakeConsistency,
    /// Quality of the wallets this one has delegated to.
    DelegationQuality,
    /// Track record of flagging or avoiding fraud.
    FraudPrevention,
    /// Contribution to ecosystem growth (referrals, integrations).
    EcosystemGrowth,
    /// Contribution of new tooling or protocol improvements.
    InnovationContrib,
    /// Social attestations from other participants.
    SocialTrust,
}

impl ReputationMetric {
    /// All metrics in canonical order.
    pub const ALL: [ReputationMetric; 12] = [
        ReputationMetric::TransactionSuccess,
        ReputationMetric::ValidatorUptime,
        ReputationMetric::CommunityVoting,
        ReputationMetric::SecurityCompliance,
        ReputationMetric::NetworkContribution,
        ReputationMetric::TimeOnNetwork,
        ReputationMetric::StakeConsistency,
        ReputationMetric::DelegationQuality,
        ReputationMetric::FraudPrevention,
        ReputationMetric::EcosystemGrowth,
        ReputationMetric::InnovationContrib,
        ReputationMetric::SocialTrust,
    ];
}

/// A sparse map of reputation metric values for one wallet.
///
/// Values are nominally in [0, 100] but are not rejected when out of
/// range; they propagate through the scoring arithmetic as supplied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReputationMetrics {
    values: HashMap<ReputationMetric, f64>,
}

impl ReputationMetrics {
    /// Create an empty metric map (every metric reads as neutral).
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Set the value for a metric.
    pub fn set(&mut self, metric: ReputationMetric, value: f64) {
        self.values.insert(metric, value);
    }

    /// Get the value for a metric, or `NEUTRAL_METRIC_VALUE` if absent.
    pub fn get(&self, metric: ReputationMetric) -> f64 {
        self.values
            .get(&metric)
            .copied()
            .unwrap_or(NEUTRAL_METRIC_VALUE)
    }

    /// Whether any metric has been reported.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_metric_reads_neutral() {
        let metrics = ReputationMetrics::new();
        assert_eq!(metrics.get(ReputationMetric::TransactionSuccess), 50.0);
    }

    #[test]
    fn set_then_get() {
        let mut metrics = ReputationMetrics::new();
        metrics.set(ReputationMetric::ValidatorUptime, 98.0);
        assert_eq!(metrics.get(ReputationMetric::ValidatorUptime), 98.0);
        assert_eq!(metrics.get(ReputationMetric::SocialTrust), 50.0);
    }

    #[test]
    fn parses_camel_case_document_keys() {
        let metrics: ReputationMetrics =
            serde_json::from_str(r#"{"transactionSuccess": 95.0, "innovationContrib": 60.0}"#)
                .unwrap();
        assert_eq!(metrics.get(ReputationMetric::TransactionSuccess), 95.0);
        assert_eq!(metrics.get(ReputationMetric::InnovationContrib), 60.0);
        assert_eq!(metrics.get(ReputationMetric::ValidatorUptime), 50.0);
    }

    #[test]
    fn all_covers_twelve_distinct_metrics() {
        let mut metrics = ReputationMetrics::new();
        for m in ReputationMetric::ALL {
            metrics.set(m, 1.0);
        }
        assert_eq!(metrics.values.len(), 12);
    }
}
