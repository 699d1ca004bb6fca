//! CLI support for the `selset` binary.

pub mod commands;
