//! Interactive debounce demo over stdin

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use owo_colors::OwoColorize;
use tokio::io::AsyncBufReadExt;

pub async fn run(delay: Duration) -> Result<()> {
    println!("{}", "Debounce demo".bold());
    println!("Type lines quickly; only the last line of a quiet burst is echoed.");
    println!(
        "Quiet period: {} ms. End with Ctrl-D.",
        delay.as_millis().to_string().cyan()
    );
    println!();

    // 1. Wire the debounced printer
    let echoed = Arc::new(AtomicU64::new(0));
    let counter = Arc::clone(&echoed);
    let printer = pace::debounce(
        move |line: String| {
            counter.fetch_add(1, Ordering::Relaxed);
            println!("  {} {}", "echo:".green(), line);
        },
        delay,
    );

    // 2. Feed it from stdin
    let mut typed = 0u64;
    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        typed += 1;
        printer.call(line);
    }

    // 3. Let a trailing pending call fire before summarizing
    tokio::time::sleep(delay + Duration::from_millis(50)).await;

    println!();
    println!("Lines typed:  {typed}");
    println!("Lines echoed: {}", echoed.load(Ordering::Relaxed));
    Ok(())
}
