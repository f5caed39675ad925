//! Subcommand implementations for the `paxconv` binary

pub mod batch;
pub mod convert;
pub mod selftest;
