// crates/zippytrust-cli/src/commands/config.rs
//
// `zippytrust config` — print the default engine configuration as TOML,
// ready to be saved and tuned.

use zippytrust_engine::EngineConfig;

/// Run the config subcommand.
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = EngineConfig::default();
    print!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}
