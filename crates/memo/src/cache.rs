//! Single-owner memoization

use std::hash::Hash;

use ahash::AHashMap;
use tracing::trace;

/// Hit/miss totals for a memoizer.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MemoStats {
    pub hits: u64,
    pub misses: u64,
}

/// Wraps `f` with an unbounded result cache keyed by its argument.
///
/// Multi-argument callables take a tuple, so keys compare structurally
/// and distinct argument combinations can never collide. Entries are
/// never evicted.
pub fn memoize<A, R, F>(f: F) -> Memoized<A, R, F>
where
    A: Eq + Hash + Clone,
    R: Clone,
    F: FnMut(A) -> R,
{
    Memoized {
        f,
        cache: AHashMap::new(),
        stats: MemoStats::default(),
    }
}

/// Memoizing wrapper around a callable, for a single owner.
pub struct Memoized<A, R, F> {
    f: F,
    cache: AHashMap<A, R>,
    stats: MemoStats,
}

impl<A, R, F> Memoized<A, R, F>
where
    A: Eq + Hash + Clone,
    R: Clone,
    F: FnMut(A) -> R,
{
    /// Returns the cached result for `args`, computing it on first use.
    ///
    /// Results are cloned out of the cache; pick an `Arc`/`Rc` result
    /// type when hits must stay pointer-identical to the first
    /// computation.
    pub fn call(&mut self, args: A) -> R {
        if let Some(result) = self.cache.get(&args) {
            self.stats.hits += 1;
            trace!("memoized hit");
            return result.clone();
        }
        self.stats.misses += 1;
        let result = (self.f)(args.clone());
        self.cache.insert(args, result.clone());
        result
    }

    /// Cached entry count.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// True before the first computation.
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Hit/miss totals so far.
    pub fn stats(&self) -> MemoStats {
        self.stats
    }
}
