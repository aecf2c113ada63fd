// crates/zippytrust-engine/src/propagation.rs
//
// Network-wide trust update.
//
// Walks the supplied wallet set in input order, resolves each wallet's
// delegators from the graph snapshot, and writes the computed score
// back. Delegators are resolved to a flat neutral score of 50 rather
// than recursively scored; the real multi-hop propagation (with cycle
// policy) is an open question tracked in DESIGN.md.

use zippytrust_core::{DelegationGraph, Wallet, WalletId, NEUTRAL_TRUST_SCORE};

use crate::scoring::TrustEngine;

/// Resolve a wallet's delegators to trust scores.
///
/// Every known delegator is assigned `NEUTRAL_TRUST_SCORE` (50). This is
/// the documented simplification of recursive trust propagation: the
/// returned vector's length still drives the no-delegators terminal
/// case, but its values are flat.
pub fn resolve_delegators(graph: &DelegationGraph, id: &WalletId) -> Vec<f64> {
    graph
        .delegators_of(id)
        .iter()
        .map(|_| NEUTRAL_TRUST_SCORE)
        .collect()
}

impl TrustEngine {
    /// Recompute and write back the trust score of every wallet.
    ///
    /// Each wallet is processed exactly once, in input order; no
    /// dependency-aware topological ordering is attempted. Returns the
    /// number of wallets scored.
    pub fn update_network_trust(
        &self,
        wallets: &mut [Wallet],
        graph: &DelegationGraph,
    ) -> usize {
        for wallet in wallets.iter_mut() {
            if wallet.delegation_depth > self.config().max_delegation_depth {
                tracing::warn!(
                    wallet = %wallet.id,
                    depth = wallet.delegation_depth,
                    max = self.config().max_delegation_depth,
                    "wallet exceeds the configured maximum delegation depth"
                );
            }
            let delegator_scores = resolve_delegators(graph, &wallet.id);
            wallet.trust_score = self.trust_score(wallet, &delegator_scores);
        }
        wallets.len()
    }
}
