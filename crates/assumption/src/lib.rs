//! Assumption - command line front-end for the tagged group codec
//!
//! Builds groups from flags and decodes or checks documents read from files
//! or stdin.

pub mod cli;
pub mod commands;
