// crates/zippytrust-cli/src/commands/inspect.rs
//
// `zippytrust inspect` — show the factor breakdown for one wallet.

use clap::Args;

use zippytrust_core::TrustError;
use zippytrust_engine::TrustEngine;

use crate::input;
use crate::output;

/// Arguments for the inspect subcommand.
#[derive(Debug, Args)]
pub struct InspectCmd {
    /// Path to the wallet JSON file.
    #[arg(long)]
    pub wallets: String,

    /// Id of the wallet to inspect.
    #[arg(long)]
    pub id: String,

    /// Optional engine configuration TOML; defaults apply when omitted.
    #[arg(long)]
    pub config: Option<String>,

    /// Emit JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Run the inspect subcommand.
pub fn run(cmd: &InspectCmd) -> Result<(), Box<dyn std::error::Error>> {
    let config = input::load_config(cmd.config.as_deref())?;
    let wallets = input::load_wallets(&cmd.wallets)?;

    let wallet = wallets
        .iter()
        .find(|w| w.id.as_str() == cmd.id)
        .ok_or_else(|| TrustError::NotFound(format!("wallet '{}'", cmd.id)))?;

    let engine = TrustEngine::new(config);
    let breakdown = engine.factor_breakdown(wallet);

    if cmd.json {
        println!("{}", output::format_json(&breakdown));
        return Ok(());
    }

    println!("Wallet {}", wallet.id);
    println!("-----------------------------");
    if wallet.is_origin_wallet {
        println!("  Origin wallet: trust score is pinned at 100.");
        return Ok(());
    }
    println!("  Delegation depth:      {}", wallet.delegation_depth);
    println!("  Delegation count:      {}", wallet.delegation_count);
    println!("  Stake:                 {} ZPC", wallet.stake_amount);
    println!();
    println!("  Delegation decay:      {:.4}", breakdown.delegation_decay);
    println!("  Reputation factor:     {:.4}", breakdown.reputation);
    println!("  Network-effect factor: {:.4}", breakdown.network_effect);
    println!("  Stake factor:          {:.4}", breakdown.stake);

    Ok(())
}
