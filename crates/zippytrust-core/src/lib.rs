// crates/zippytrust-core/src/lib.rs
//
// zippytrust-core: Core types for the ZippyCoin delegated trust engine.
//
// This is the leaf crate the engine and CLI depend on. It defines the
// wallet record, the closed set of reputation metrics, the delegation
// graph, and the shared error type.

pub mod error;
pub mod graph;
pub mod metrics;
pub mod wallet;

// Re-export key types for ergonomic access from downstream crates.
// Usage: `use zippytrust_core::Wallet;`

pub use error::TrustError;
pub use graph::DelegationGraph;
pub use metrics::{ReputationMetric, ReputationMetrics, NEUTRAL_METRIC_VALUE};
pub use wallet::{Wallet, WalletId, MAX_TRUST_SCORE, NEUTRAL_TRUST_SCORE};
