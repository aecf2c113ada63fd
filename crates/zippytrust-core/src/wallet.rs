// crates/zippytrust-core/src/wallet.rs
//
// Wallet record for the ZippyCoin trust engine.
//
// Wallets are supplied wholesale by the caller for each scoring pass.
// The engine reads every field except `trust_score`, which it writes
// back during a network-wide update.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::metrics::ReputationMetrics;

/// Maximum trust score; origin wallets always hold exactly this value.
pub const MAX_TRUST_SCORE: f64 = 100.0;

/// Neutral trust score assigned to unresolved delegators.
pub const NEUTRAL_TRUST_SCORE: f64 = 50.0;

/// Opaque wallet identifier, unique within a scoring run.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WalletId(pub String);

impl WalletId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WalletId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WalletId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for WalletId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A wallet participating in the delegated trust network.
///
/// Field names serialize as the camelCase keys used in wallet documents.
/// Missing numeric fields default to zero and missing metrics default to
/// an empty (all-neutral) map, matching how sparse upstream documents
/// are written.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    /// Unique wallet identifier.
    pub id: WalletId,

    /// Origin wallets are trust anchors and always score 100.
    #[serde(default)]
    pub is_origin_wallet: bool,

    /// Number of delegation hops from the nearest origin wallet.
    #[serde(default)]
    pub delegation_depth: u32,

    /// Number of other wallets that delegate trust to this one.
    #[serde(default)]
    pub delegation_count: u32,

    /// Staked value in ZPC units.
    #[serde(default)]
    pub stake_amount: f64,

    /// Sparse reputation metric values; absent metrics read as 50.
    #[serde(default)]
    pub reputation_metrics: ReputationMetrics,

    /// Computed trust score in [0, 100]. Output only, never an input
    /// to this wallet's own score.
    #[serde(default)]
    pub trust_score: f64,
}

impl Wallet {
    /// Create a wallet with default (zero/empty) attributes.
    pub fn new(id: impl Into<WalletId>) -> Self {
        Self {
            id: id.into(),
            is_origin_wallet: false,
            delegation_depth: 0,
            delegation_count: 0,
            stake_amount: 0.0,
            reputation_metrics: ReputationMetrics::new(),
            trust_score: 0.0,
        }
    }

    /// Create an origin wallet (trust anchor) with the maximum score.
    pub fn origin(id: impl Into<WalletId>) -> Self {
        Self {
            is_origin_wallet: true,
            trust_score: MAX_TRUST_SCORE,
            ..Self::new(id)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_wallet_starts_at_max_trust() {
        let wallet = Wallet::origin("origin-1");
        assert!(wallet.is_origin_wallet);
        assert_eq!(wallet.trust_score, MAX_TRUST_SCORE);
    }

    #[test]
    fn parses_sparse_wallet_document() {
        let wallet: Wallet = serde_json::from_str(
            r#"{
                "id": "wallet-1",
                "delegationDepth": 1,
                "delegationCount": 2,
                "stakeAmount": 2000,
                "reputationMetrics": {"transactionSuccess": 95}
            }"#,
        )
        .unwrap();
        assert_eq!(wallet.id.as_str(), "wallet-1");
        assert!(!wallet.is_origin_wallet);
        assert_eq!(wallet.delegation_depth, 1);
        assert_eq!(wallet.delegation_count, 2);
        assert_eq!(wallet.stake_amount, 2000.0);
        assert_eq!(wallet.trust_score, 0.0);
    }
}
