// crates/zippytrust-engine/src/lib.rs
//
// zippytrust-engine: Delegated trust scoring for the ZippyCoin network.
//
// Implements the trust formula
//   T(w) = min(T(p1), ..., T(pn)) * decay^depth * rho(w) * eta(w) * sigma(w)
// where rho, eta, and sigma are the bounded reputation, network-effect,
// and stake factors. Scoring is pure and deterministic; the only write
// the engine performs is the trust score assigned during a network-wide
// update pass.

pub mod config;
pub mod factors;
pub mod propagation;
pub mod scoring;
pub mod weights;

pub use config::EngineConfig;
pub use factors::{
    delegation_decay, network_effect_factor, reputation_factor, stake_factor,
};
pub use propagation::resolve_delegators;
pub use scoring::{FactorBreakdown, TrustEngine};
pub use weights::ReputationWeights;
