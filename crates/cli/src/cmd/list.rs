//! List available demos

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::demos;

pub async fn run() -> Result<()> {
    println!("{}", "Available demos".bold());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    for demo in demos::DEMOS {
        println!("  {} {}", format!("{:<14}", demo.name).cyan(), demo.summary);
    }
    println!();
    println!("  {}", "Tip: run one with 'drill run <name>'".dimmed());
    Ok(())
}
