// crates/zippytrust-engine/src/scoring.rs
//
// The trust formula: weakest delegator, decayed by depth, scaled by the
// three bounded factors, clamped to [0, 100].

use serde::Serialize;

use zippytrust_core::{Wallet, MAX_TRUST_SCORE};

use crate::config::EngineConfig;
use crate::factors;

/// The per-wallet multipliers of the trust formula, exposed for the CLI
/// inspect command and for diagnostics.
#[derive(Debug, Clone, Serialize)]
pub struct FactorBreakdown {
    /// `decay_factor ^ delegation_depth`.
    pub delegation_decay: f64,
    /// Reputation factor, in [0.5, 1.0].
    pub reputation: f64,
    /// Network-effect factor, in [0.5, 1.0].
    pub network_effect: f64,
    /// Stake factor, in [0.7, 1.0].
    pub stake: f64,
}

/// Stateless trust scorer parameterized by an [`EngineConfig`].
///
/// Holds no state between calls; wallets and the delegation graph are
/// supplied wholesale for each scoring pass.
#[derive(Debug, Clone, Default)]
pub struct TrustEngine {
    config: EngineConfig,
}

impl TrustEngine {
    /// Create an engine with the given configuration.
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// The engine's configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Compute the wallet's factor multipliers without scoring it.
    pub fn factor_breakdown(&self, wallet: &Wallet) -> FactorBreakdown {
        FactorBreakdown {
            delegation_decay: factors::delegation_decay(
                self.config.decay_factor,
                wallet.delegation_depth,
            ),
            reputation: factors::reputation_factor(
                &wallet.reputation_metrics,
                &self.config.reputation_weights,
            ),
            network_effect: factors::network_effect_factor(
                wallet.delegation_count,
                self.config.network_effect_step,
            ),
            stake: factors::stake_factor(wallet.stake_amount, self.config.min_stake),
        }
    }

    /// Compute the trust score for a wallet given its delegators' scores.
    ///
    /// Terminal cases first: origin wallets score exactly 100 and a
    /// wallet nobody delegates to scores exactly 0. Otherwise the base
    /// trust is the minimum delegator score — a wallet can never be more
    /// trustworthy than the weakest wallet vouching for it — decayed per
    /// delegation hop and scaled by the bounded factors.
    ///
    /// Always returns a number; out-of-domain inputs (negative stake,
    /// non-finite delegator scores) propagate through the arithmetic
    /// rather than raising an error.
    pub fn trust_score(&self, wallet: &Wallet, delegator_scores: &[f64]) -> f64 {
        if wallet.is_origin_wallet {
            return MAX_TRUST_SCORE;
        }
        if delegator_scores.is_empty() {
            return 0.0;
        }

        let base_trust = delegator_scores
            .iter()
            .copied()
            .fold(f64::INFINITY, f64::min);

        let breakdown = self.factor_breakdown(wallet);
        let score = base_trust
            * breakdown.delegation_decay
            * breakdown.reputation
            * breakdown.network_effect
            * breakdown.stake;

        tracing::debug!(
            wallet = %wallet.id,
            base_trust,
            decay = breakdown.delegation_decay,
            reputation = breakdown.reputation,
            network_effect = breakdown.network_effect,
            stake = breakdown.stake,
            score,
            "computed trust score"
        );

        score.clamp(0.0, MAX_TRUST_SCORE)
    }
}
