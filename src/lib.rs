//! depscan: dependency analysis CLI
//!
//! The library side exposes configuration resolution: command-line flags and
//! the persisted `.depscan.yml` file merged into one [`domain::ResolvedConfig`].

pub mod cli;
pub mod config;
pub mod domain;
pub mod logging;
