// crates/zippytrust-cli/src/commands/score.rs
//
// `zippytrust score` — run a network-wide trust update over a wallet
// file and a delegation file, printing a table or JSON.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use zippytrust_core::{DelegationGraph, Wallet};
use zippytrust_engine::TrustEngine;

use crate::input;
use crate::output;

/// Arguments for the score subcommand.
#[derive(Debug, Args)]
pub struct ScoreCmd {
    /// Path to the wallet JSON file (an array of wallet documents).
    #[arg(long)]
    pub wallets: String,

    /// Path to the delegation JSON file ({"wallet-id": ["delegator-id"]}).
    #[arg(long)]
    pub delegations: String,

    /// Optional engine configuration TOML; defaults apply when omitted.
    #[arg(long)]
    pub config: Option<String>,

    /// Emit JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

/// One row of the score table.
#[derive(Debug, Serialize, Tabled)]
struct ScoreRow {
    #[tabled(rename = "Wallet")]
    id: String,
    #[tabled(rename = "Origin")]
    origin: bool,
    #[tabled(rename = "Depth")]
    depth: u32,
    #[tabled(rename = "Delegators")]
    delegators: usize,
    #[tabled(rename = "Stake (ZPC)")]
    stake: f64,
    #[tabled(rename = "Trust Score")]
    trust_score: String,
}

fn rows(wallets: &[Wallet], graph: &DelegationGraph) -> Vec<ScoreRow> {
    wallets
        .iter()
        .map(|w| ScoreRow {
            id: w.id.to_string(),
            origin: w.is_origin_wallet,
            depth: w.delegation_depth,
            delegators: graph.delegators_of(&w.id).len(),
            stake: w.stake_amount,
            trust_score: format!("{:.2}", w.trust_score),
        })
        .collect()
}

/// Run the score subcommand.
pub fn run(cmd: &ScoreCmd) -> Result<(), Box<dyn std::error::Error>> {
    let config = input::load_config(cmd.config.as_deref())?;
    let mut wallets = input::load_wallets(&cmd.wallets)?;
    let graph = input::load_delegations(&cmd.delegations)?;

    let engine = TrustEngine::new(config);
    let scored = engine.update_network_trust(&mut wallets, &graph);
    tracing::info!(scored, "network trust update complete");

    if cmd.json {
        println!("{}", output::format_json(&wallets));
    } else {
        println!("{}", output::format_table(&rows(&wallets, &graph)));
    }

    Ok(())
}
