use std::path::PathBuf;

use anyhow::Result;
use assumption_core::{Codec, Config};
use clap::ArgMatches;

use super::apply_strict_flag;
use crate::commands::check::{self, CheckOptions};

pub fn handle(matches: &ArgMatches, config: Config) -> Result<()> {
    let config = apply_strict_flag(matches, config);
    let options = CheckOptions {
        input: matches.get_one::<PathBuf>("file").cloned(),
    };

    check::run(&options, &Codec::new(config.codec))
}
