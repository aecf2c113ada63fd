// crates/zippytrust-cli/src/commands/mod.rs

pub mod config;
pub mod inspect;
pub mod score;
