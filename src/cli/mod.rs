//! CLI support for the `relg` binary.

pub mod commands;
