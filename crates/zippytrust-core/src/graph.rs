// crates/zippytrust-core/src/graph.rs
//
// Delegation graph: wallet id -> the wallets that delegate trust to it.
//
// The graph is an input snapshot; the engine never mutates it. No cycle
// detection is performed. The engine never recurses through the graph,
// so a cycle cannot cause non-termination; cycle policy for a recursive
// resolver is an open question tracked in DESIGN.md.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::wallet::WalletId;

/// Maps each wallet to the set of wallets delegating trust to it.
///
/// Serializes as a plain object, matching the upstream delegation
/// documents: `{ "wallet-1": ["origin-1"] }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DelegationGraph {
    delegators: HashMap<WalletId, Vec<WalletId>>,
}

impl DelegationGraph {
    /// Create an empty delegation graph.
    pub fn new() -> Self {
        Self {
            delegators: HashMap::new(),
        }
    }

    /// Record that `delegator` delegates trust to `target`.
    pub fn add_delegation(&mut self, delegator: WalletId, target: WalletId) {
        self.delegators.entry(target).or_default().push(delegator);
    }

    /// The wallets delegating trust to `id`, empty if none are known.
    pub fn delegators_of(&self, id: &WalletId) -> &[WalletId] {
        self.delegators.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of wallets that have at least one delegator.
    pub fn len(&self) -> usize {
        self.delegators.len()
    }

    /// Whether the graph records any delegations.
    pub fn is_empty(&self) -> bool {
        self.delegators.is_empty()
    }
}
