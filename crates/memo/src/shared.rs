//! Thread-shared memoization

use std::hash::Hash;

use dashmap::DashMap;
use tracing::trace;

/// Wraps `f` with a concurrently shareable unbounded cache.
pub fn shared<A, R, F>(f: F) -> SharedMemoized<A, R, F>
where
    A: Eq + Hash + Clone,
    R: Clone,
    F: Fn(A) -> R + Send + Sync,
{
    SharedMemoized {
        f,
        cache: DashMap::new(),
    }
}

/// Memoizing wrapper that takes `&self`, for use behind an `Arc` or
/// across scoped threads.
///
/// The callable runs outside any cache lock, so two threads racing on
/// the same cold key may both compute it; for a pure callable both
/// results are equal and the last write wins. Sequential callers see
/// every repeat served from cache.
pub struct SharedMemoized<A, R, F> {
    f: F,
    cache: DashMap<A, R>,
}

impl<A, R, F> SharedMemoized<A, R, F>
where
    A: Eq + Hash + Clone,
    R: Clone,
    F: Fn(A) -> R + Send + Sync,
{
    /// Returns the cached result for `args`, computing it on first use.
    pub fn call(&self, args: A) -> R {
        if let Some(result) = self.cache.get(&args) {
            trace!("shared memoized hit");
            return result.clone();
        }
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
}
