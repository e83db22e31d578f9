pub mod handlers;

use std::path::PathBuf;

use assumption_core::{OutputFormat, Tag};
use clap::{value_parser, Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("assumption")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Encode and decode tagged groups as YAML documents")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(cmd_encode())
        .subcommand(cmd_decode())
        .subcommand(cmd_check())
}

fn cmd_encode() -> Command {
    Command::new("encode")
        .about("Build a group from flags and write its document")
        .arg(
            Arg::new("tag")
                .long("tag")
                .short('t')
                .required(true)
                .value_parser(value_parser!(Tag))
                .help("Group tag: A (text value) or B (integer value)"),
        )
        .arg(
            Arg::new("id")
                .long("id")
                .help("Group id; the document has no id key when omitted"),
        )
        .arg(
            Arg::new("name")
                .long("name")
                .short('n')
                .required(true)
                .help("Item name"),
        )
        .arg(
            Arg::new("value")
                .long("value")
                .short('v')
                .required(true)
                .allow_hyphen_values(true)
                .help("Item value; must be an integer for tag B"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .value_parser(value_parser!(PathBuf))
                .help("Write the document to FILE instead of stdout"),
        )
}

fn cmd_decode() -> Command {
    Command::new("decode")
        .about("Decode a document and print the group")
        .arg(arg_input())
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .value_parser(value_parser!(OutputFormat))
                .help("Output format: yaml or json [default: from config]"),
        )
        .arg(arg_strict())
}

fn cmd_check() -> Command {
    Command::new("check")
        .about("Validate a document and print its tag")
        .arg(arg_input())
        .arg(arg_strict())
}

fn arg_input() -> Arg {
    Arg::new("file")
        .value_parser(value_parser!(PathBuf))
        .help("Document to read; stdin when omitted")
}

fn arg_strict() -> Arg {
    Arg::new("strict")
        .long("strict")
        .action(ArgAction::SetTrue)
        .help("Reject keys that the tag's shape does not declare")
}
