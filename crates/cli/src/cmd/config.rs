//! Print a sample config file

use anyhow::Result;

use crate::config::DemoConfig;

pub async fn run() -> Result<()> {
    print!("{}", DemoConfig::example());
    Ok(())
}
