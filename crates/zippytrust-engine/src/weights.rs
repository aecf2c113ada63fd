// crates/zippytrust-engine/src/weights.rs
//
// Reputation weight table for the ZippyCoin trust engine.
//
// One weight per metric category. The default table sums to 1.0 and
// prioritizes transaction success, security compliance, validator
// uptime, and network contribution over secondary signals like social
// trust or innovation contribution.

use serde::{Deserialize, Serialize};

use zippytrust_core::ReputationMetric;

/// Per-metric weights for the reputation factor.
///
/// Deserializes from TOML with any missing field falling back to its
/// default weight, so a config file can override a single entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReputationWeights {
    pub transaction_success: f64,
    pub validator_uptime: f64,
    pub community_voting: f64,
    pub security_compliance: f64,
    pub network_contribution: f64,
    pub time_on_network: f64,
    pub stake_consistency: f64,
    pub delegation_quality: f64,
    pub fraud_prevention: f64,
    pub ecosystem_growth: f64,
    pub innovation_contrib: f64,
    pub social_trust: f64,
}

impl Default for ReputationWeights {
    fn default() -> Self {
        Self {
            transaction_success: 0.15,
            validator_uptime: 0.10,
            community_voting: 0.08,
            security_compliance: 0.12,
            network_contribution: 0.10,
            time_on_network: 0.08,
            stake_consistency: 0.07,
            delegation_quality: 0.10,
            fraud_prevention: 0.08,
            ecosystem_growth: 0.05,
            innovation_contrib: 0.04,
            social_trust: 0.03,
        }
    }
}

impl ReputationWeights {
    /// The weight assigned to a metric category.
    pub fn weight(&self, metric: ReputationMetric) -> f64 {
        match metric {
            ReputationMetric::TransactionSuccess => self.transaction_success,
            ReputationMetric::ValidatorUptime => self.validator_uptime,
            ReputationMetric::CommunityVoting => self.community_voting,
            ReputationMetric::SecurityCompliance => self.security_compliance,
            ReputationMetric::NetworkContribution => self.network_contribution,
            ReputationMetric::TimeOnNetwork => self.time_on_network,
            ReputationMetric::StakeConsistency => self.stake_consistency,
            ReputationMetric::DelegationQuality => self.delegation_quality,
            ReputationMetric::FraudPrevention => self.fraud_prevention,
            ReputationMetric::EcosystemGrowth => self.ecosystem_growth,
            ReputationMetric::InnovationContrib => self.innovation_contrib,
            ReputationMetric::SocialTrust => self.social_trust,
        }
    }

    /// Sum of all weights. 1.0 for the default table; the reputation
    /// factor normalizes by this sum so a tuned table need not re-sum
    /// to exactly 1.0.
    pub fn total(&self) -> f64 {
        ReputationMetric::ALL
            .iter()
            .map(|&m| self.weight(m))
            .sum()
    }
}
