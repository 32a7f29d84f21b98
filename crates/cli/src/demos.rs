//! Canned demonstrations of the library crates

use std::time::Instant;

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::config::DemoConfig;

/// A runnable demo: a name for the CLI, a summary for listings, and
/// the runner itself.
pub struct Demo {
    pub name: &'static str,
    pub summary: &'static str,
    pub run: fn(&DemoConfig) -> Result<()>,
}

/// Every canned demo, in listing order.
pub const DEMOS: &[Demo] = &[
    Demo {
        name: "duplicates",
        summary: "Report repeated values in first-seen order",
        run: duplicates,
    },
    Demo {
        name: "longest-word",
        summary: "First longest token of a sentence",
        run: longest_word,
    },
    Demo {
        name: "flatten",
        summary: "Flatten nested sequences, fully or by depth",
        run: flatten,
    },
    Demo {
        name: "kth-largest",
        summary: "Rank selection over distinct values",
        run: kth_largest,
    },
    Demo {
        name: "fibonacci",
        summary: "Leading fibonacci numbers",
        run: fibonacci,
    },
    Demo {
        name: "palindrome",
        summary: "Text and integer palindrome checks",
        run: palindrome,
    },
    Demo {
        name: "anagram",
        summary: "Character-frequency anagram check",
        run: anagram,
    },
    Demo {
        name: "ipv4",
        summary: "Dotted-quad address validation",
        run: ipv4,
    },
    Demo {
        name: "group-by",
        summary: "Bucket records by a key",
        run: group_by,
    },
    Demo {
        name: "memoize",
        summary: "Cache a slow function and measure the speedup",
        run: memoize,
    },
];

fn duplicates(_config: &DemoConfig) -> Result<()> {
    let values = [1, 2, 3, 1, 1, 1];
    println!("values:     {values:?}");
    println!("duplicates: {:?}", algo::find_duplicates(&values));

    let names = ["ana", "raj", "ana", "li", "raj"];
    println!("values:     {names:?}");
    println!("duplicates: {:?}", algo::find_duplicates(&names));
    Ok(())
}

fn longest_word(_config: &DemoConfig) -> Result<()> {
    let sentence = "The quick brown fox jumped over the lazy dog";
    println!("sentence: {}", sentence.cyan());
    println!("longest:  {}", algo::longest_word(sentence)?.bold());
    Ok(())
}

fn flatten(_config: &DemoConfig) -> Result<()> {
    use algo::{nested, Nested};

    let items = nested![1, 2, 3, [4, 5, [6, 7]], 8];
    println!("nested:  {}", Nested::List(items.clone()));
    println!("flat:    {:?}", algo::flatten(items.clone()));
    println!("depth 1: {}", Nested::List(algo::flatten_to_depth(items, 1)));
    Ok(())
}

fn kth_largest(_config: &DemoConfig) -> Result<()> {
    let values = [88, 63, 45, 99, 99];
    println!("values: {values:?}");
    println!("second largest distinct: {}", algo::second_largest(&values)?);
    println!("third largest distinct:  {}", algo::third_largest(&values)?);
    Ok(())
}

fn fibonacci(config: &DemoConfig) -> Result<()> {
    let len = config.run.fibonacci_len;
    println!("first {len} fibonacci numbers:");
    println!("{:?}", algo::fibonacci(len)?);
    Ok(())
}

fn palindrome(_config: &DemoConfig) -> Result<()> {
    for text in ["madam", "A man, a plan, a canal: Panama", "hello"] {
        println!("{:40} -> {}", format!("{text:?}"), algo::is_palindrome(text));
    }
    for number in [121, 10, -121] {
        println!("{number:<40} -> {}", algo::is_palindrome_number(number));
    }
    Ok(())
}

fn anagram(_config: &DemoConfig) -> Result<()> {
    for (a, b) in [("listen", "silent"), ("rail safety", "fairy tales"), ("hello", "world")] {
        println!("{a:?} / {b:?} -> {}", algo::is_anagram(a, b));
    }
    Ok(())
}

fn ipv4(_config: &DemoConfig) -> Result<()> {
    for addr in ["192.168.1.1", "192..1.1", "256.1.1.1", "01.2.3.4"] {
        let verdict = if algo::is_valid_ipv4(addr) {
            "valid".green().to_string()
        } else {
            "invalid".red().to_string()
        };
        println!("{addr:<16} {verdict}");
    }
    Ok(())
}

fn group_by(_config: &DemoConfig) -> Result<()> {
    #[derive(serde::Serialize)]
    struct Traveler {
        name: &'static str,
        city: &'static str,
    }

    let travelers = vec![
        Traveler { name: "Arya", city: "Hyderabad" },
        Traveler { name: "Fatima", city: "Delhi" },
        Traveler { name: "Vivek", city: "Hyderabad" },
        Traveler { name: "Rohan", city: "Delhi" },
    ];
    let by_city = algo::group_by(travelers, |t| t.city);
    println!("{}", serde_json::to_string_pretty(&by_city)?);
    Ok(())
}

fn memoize(config: &DemoConfig) -> Result<()> {
    fn fib_naive(n: u64) -> u64 {
        if n < 2 {
            n
        } else {
            fib_naive(n - 1) + fib_naive(n - 2)
        }
    }

    let depth = config.run.memo_fib_depth;
    let mut memoized = memo::memoize(fib_naive);

    let started = Instant::now();
    let cold_result = memoized.call(depth);
    let cold = started.elapsed();

    let started = Instant::now();
    let warm_result = memoized.call(depth);
    let warm = started.elapsed();

    println!("cold: fib({depth}) = {cold_result} in {cold:?}");
    println!("warm: fib({depth}) = {warm_result} in {warm:?} {}", "(cached)".dimmed());

    let stats = memoized.stats();
    println!("misses: {}  hits: {}", stats.misses, stats.hits);
    Ok(())
}
