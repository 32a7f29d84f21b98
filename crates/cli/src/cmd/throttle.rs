//! Interactive throttle demo over stdin

use std::time::Duration;

use anyhow::Result;
use owo_colors::OwoColorize;
use tokio::io::AsyncBufReadExt;

pub async fn run(delay: Duration) -> Result<()> {
    println!("{}", "Throttle demo".bold());
    println!("Type lines quickly; at most one per interval is echoed, the rest drop.");
    println!(
        "Interval: {} ms. End with Ctrl-D.",
        delay.as_millis().to_string().cyan()
    );
    println!();

    let printer = pace::throttle(
        move |line: String| println!("  {} {}", "echo:".green(), line),
        delay,
    );

    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        printer.call(line);
    }

    println!();
    println!("Lines echoed:  {}", printer.executed_count());
    println!("Lines dropped: {}", printer.dropped_count());
    Ok(())
}
