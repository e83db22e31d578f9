use std::path::PathBuf;

use anyhow::Result;
use assumption_core::{Codec, Config, OutputFormat};
use clap::ArgMatches;

use super::apply_strict_flag;
use crate::commands::decode::{self, DecodeOptions};

pub fn handle(matches: &ArgMatches, config: Config) -> Result<()> {
    let mut config = apply_strict_flag(matches, config);
    if let Some(format) = matches.get_one::<OutputFormat>("format") {
        config.output.format = *format;
    }

    let options = DecodeOptions {
        input: matches.get_one::<PathBuf>("file").cloned(),
        format: config.output.format,
    };

    decode::run(&options, &Codec::new(config.codec))
}
