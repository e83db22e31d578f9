mod check;
mod decode;
mod encode;

use anyhow::{Context, Result};
use assumption_core::config::load_config;
use assumption_core::Config;
use clap::ArgMatches;

pub fn dispatch(matches: &ArgMatches) -> Result<()> {
    let config = load_config().context("Failed to load configuration")?;
    tracing::debug!(?config, "configuration loaded");

    match matches.subcommand() {
        Some(("encode", sub_m)) => encode::handle(sub_m, config),
        Some(("decode", sub_m)) => decode::handle(sub_m, config),
        Some(("check", sub_m)) => check::handle(sub_m, config),
        _ => anyhow::bail!("Unknown command. Run 'assumption --help' for usage."),
    }
}

/// Apply flags shared by the reading commands on top of the loaded config.
fn apply_strict_flag(matches: &ArgMatches, mut config: Config) -> Config {
    if matches.get_flag("strict") {
        config.codec.strict_keys = true;
    }
    config
}
