use std::path::PathBuf;

use anyhow::{Context, Result};
use assumption_core::{Codec, Config, Tag};
use clap::ArgMatches;

use crate::commands::encode::{self, EncodeOptions};

pub fn handle(matches: &ArgMatches, config: Config) -> Result<()> {
    let tag = matches
        .get_one::<Tag>("tag")
        .copied()
        .context("--tag is required")?;
    let name = matches
        .get_one::<String>("name")
        .context("--name is required")?;
    let value = matches
        .get_one::<String>("value")
        .context("--value is required")?;

    let options = EncodeOptions {
        tag,
        id: matches.get_one::<String>("id").cloned(),
        name: name.clone(),
        value: value.clone(),
        output: matches.get_one::<PathBuf>("output").cloned(),
    };

    encode::run(&options, &Codec::new(config.codec))
}
