// crates/zippytrust-cli/src/input.rs
//
// Loaders for the two JSON document shapes the CLI consumes: a wallet
// array and a delegation object mapping wallet id to delegator ids.

use std::fs;
use std::path::Path;

use zippytrust_core::{DelegationGraph, TrustError, Wallet};
use zippytrust_engine::EngineConfig;

/// Load a wallet array from a JSON file.
pub fn load_wallets(path: impl AsRef<Path>) -> Result<Vec<Wallet>, TrustError> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// Load a delegation graph from a JSON file.
///
/// The document is a plain object: `{ "wallet-1": ["origin-1"] }`.
pub fn load_delegations(path: impl AsRef<Path>) -> Result<DelegationGraph, TrustError> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// Load the engine configuration, or the defaults when no path is given.
pub fn load_config(path: Option<&str>) -> Result<EngineConfig, TrustError> {
    match path {
        Some(p) => EngineConfig::load(p),
        None => Ok(EngineConfig::default()),
    }
}
