//! depscan: analyze project dependencies
//!
//! Resolves the run's configuration from flags and `.depscan.yml`, then hands it
//! to the selected command.

use anyhow::Result;

fn main() -> Result<()> {
    depscan::cli::run()
}
