// crates/zippytrust-engine/src/factors.rs
//
// The bounded multipliers of the trust formula.
//
// Each factor is a pure function of one wallet attribute:
//   - reputation factor rho(w) in [0.5, 1.0]
//   - network-effect factor eta(w) in [0.5, 1.0]
//   - stake factor sigma(w) in [0.7, 1.0]
//   - delegation decay decay^depth in (0, 1]

use zippytrust_core::{ReputationMetric, ReputationMetrics};

use crate::weights::ReputationWeights;

/// Lower bound of the reputation factor. Poor metrics can at most halve
/// the delegated trust, never zero it out.
pub const REPUTATION_FACTOR_FLOOR: f64 = 0.5;

/// Lower bound of the network-effect factor (no delegators).
pub const NETWORK_EFFECT_FLOOR: f64 = 0.5;

/// Lower bound of the stake factor (below minimum stake).
pub const STAKE_FACTOR_FLOOR: f64 = 0.7;

/// Logarithmic gain of the stake factor above the minimum stake.
pub const STAKE_LOG_SCALE: f64 = 0.1;

/// Weighted average of the wallet's reputation metrics, mapped into
/// [0.5, 1.0].
///
/// Each metric contributes `value / 100` scaled by its weight; absent
/// metrics read as neutral (50). The sum is divided by the total weight
/// even though the default table sums to 1.0, so a retuned table stays
/// normalized.
pub fn reputation_factor(metrics: &ReputationMetrics, weights: &ReputationWeights) -> f64 {
    let mut score = 0.0;
    let mut total_weight = 0.0;

    for metric in ReputationMetric::ALL {
        let weight = weights.weight(metric);
        score += (metrics.get(metric) / 100.0) * weight;
        total_weight += weight;
    }

    if total_weight <= 0.0 {
        return REPUTATION_FACTOR_FLOOR;
    }

    (score / total_weight).clamp(REPUTATION_FACTOR_FLOOR, 1.0)
}

/// Network-effect factor from the number of delegators, in [0.5, 1.0].
///
/// Zero delegators gives the floor; each delegator adds `step` (0.05 by
/// default, so ten or more delegators saturate at 1.0). The hard ceiling
/// prevents unbounded amplification from mass delegation.
pub fn network_effect_factor(delegation_count: u32, step: f64) -> f64 {
    if delegation_count == 0 {
        return NETWORK_EFFECT_FLOOR;
    }
    (NETWORK_EFFECT_FLOOR + step * delegation_count as f64).clamp(NETWORK_EFFECT_FLOOR, 1.0)
}

/// Stake factor in [0.7, 1.0].
///
/// Below `min_stake` the factor is exactly the 0.7 floor. At or above it,
/// the factor grows as `0.7 + 0.1 * ln(stake / min_stake)`, clamped at
/// 1.0. The logarithm flattens quickly past the minimum so whales cannot
/// buy trust dominance.
pub fn stake_factor(stake_amount: f64, min_stake: f64) -> f64 {
    if stake_amount < min_stake {
        return STAKE_FACTOR_FLOOR;
    }
    let factor = STAKE_FACTOR_FLOOR + STAKE_LOG_SCALE * (stake_amount / min_stake).ln();
    factor.clamp(STAKE_FACTOR_FLOOR, 1.0)
}

/// Delegation decay multiplier: `decay_factor ^ depth`.
///
/// Penalizes trust propagated through long delegation chains; depth zero
/// gives 1.0 (no decay).
pub fn delegation_decay(decay_factor: f64, depth: u32) -> f64 {
    decay_factor.powi(depth as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weights() -> ReputationWeights {
        ReputationWeights::default()
    }

    #[test]
    fn neutral_metrics_give_the_reputation_floor() {
        // All metrics absent read as 50, i.e. 0.5 after scaling, which
        // sits exactly on the floor.
        let factor = reputation_factor(&ReputationMetrics::new(), &weights());
        assert_eq!(factor, REPUTATION_FACTOR_FLOOR);
    }

    #[test]
    fn perfect_metrics_give_one() {
        let mut metrics = ReputationMetrics::new();
        for m in ReputationMetric::ALL {
            metrics.set(m, 100.0);
        }
        let factor = reputation_factor(&metrics, &weights());
        assert!((factor - 1.0).abs() < 1e-12);
    }

    #[test]
    fn terrible_metrics_clamp_to_the_floor() {
        let mut metrics = ReputationMetrics::new();
        for m in ReputationMetric::ALL {
            metrics.set(m, 0.0);
        }
        let factor = reputation_factor(&metrics, &weights());
        assert_eq!(factor, REPUTATION_FACTOR_FLOOR);
    }

    #[test]
    fn reputation_factor_stays_bounded() {
        let mut metrics = ReputationMetrics::new();
        for m in ReputationMetric::ALL {
            metrics.set(m, 1000.0); // out of nominal range on purpose
        }
        let factor = reputation_factor(&metrics, &weights());
        assert!(factor <= 1.0);
    }

    #[test]
    fn network_effect_endpoints() {
        assert_eq!(network_effect_factor(0, 0.05), 0.5);
        assert_eq!(network_effect_factor(10, 0.05), 1.0);
        // Clamped, not 1.25.
        assert_eq!(network_effect_factor(15, 0.05), 1.0);
    }

    #[test]
    fn network_effect_is_linear_between_endpoints() {
        assert!((network_effect_factor(2, 0.05) - 0.6).abs() < 1e-12);
        assert!((network_effect_factor(7, 0.05) - 0.85).abs() < 1e-12);
    }

    #[test]
    fn network_effect_is_monotonic_in_count() {
        let mut prev = 0.0;
        for count in 0..=12 {
            let factor = network_effect_factor(count, 0.05);
            assert!(factor >= prev);
            prev = factor;
        }
    }

    #[test]
    fn stake_below_minimum_is_exactly_the_floor() {
        assert_eq!(stake_factor(500.0, 1000.0), 0.7);
        assert_eq!(stake_factor(0.0, 1000.0), 0.7);
    }

    #[test]
    fn stake_at_minimum_is_the_floor() {
        // ln(1) = 0
        assert_eq!(stake_factor(1000.0, 1000.0), 0.7);
    }

    #[test]
    fn stake_grows_logarithmically_above_minimum() {
        let factor = stake_factor(2000.0, 1000.0);
        let expected = 0.7 + 0.1 * 2.0_f64.ln();
        assert!((factor - expected).abs() < 1e-12);
    }

    #[test]
    fn stake_factor_caps_at_one_for_whales() {
        // 0.7 + 0.1 * ln(ratio) hits 1.0 at ratio = e^3 ~ 20.09.
        assert_eq!(stake_factor(1_000_000.0, 1000.0), 1.0);
    }

    #[test]
    fn stake_factor_is_monotonic_above_minimum() {
        let mut prev = 0.0;
        for stake in [1000.0, 1500.0, 3000.0, 10_000.0, 100_000.0] {
            let factor = stake_factor(stake, 1000.0);
            assert!(factor >= prev);
            prev = factor;
        }
    }

    #[test]
    fn decay_is_one_at_depth_zero_and_shrinks_with_depth() {
        assert_eq!(delegation_decay(0.9, 0), 1.0);
        let mut prev = 1.0;
        for depth in 1..=10 {
            let decay = delegation_decay(0.9, depth);
            assert!(decay < prev);
            prev = decay;
        }
    }
}
