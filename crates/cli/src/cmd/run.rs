//! Run one or all canned demos

use anyhow::{bail, Result};
use owo_colors::OwoColorize;

use crate::config::DemoConfig;
use crate::demos;

pub async fn run(name: Option<&str>, all: bool, config: &DemoConfig) -> Result<()> {
    if all {
        for demo in demos::DEMOS {
            println!("{}", format!("── {} ──", demo.name).bold());
            (demo.run)(config)?;
            println!();
        }
        return Ok(());
    }

    let Some(name) = name else {
        bail!("Provide a demo name or --all; see 'drill list'");
    };
    match demos::DEMOS.iter().find(|demo| demo.name == name) {
        Some(demo) => (demo.run)(config),
        None => bail!("Unknown demo '{name}'; see 'drill list'"),
    }
}
