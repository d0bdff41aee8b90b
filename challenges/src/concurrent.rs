//! Thread-safe counterparts of [`CallLimit`](crate::CallLimit) and [`Memo`](crate::Memo).
//!
//! Both types are `Send + Sync` whenever their callback and data are, so they
//! can be shared by reference across `std::thread::scope` or behind an `Arc`.
//! The check-then-act step of each wrapper is a single atomic unit:
//!
//! ```text
//! SyncCallLimit:  fetch_update(calls < limit => calls + 1)  -> run callback
//! SyncMemo:       shard write lock { lookup, else run callback and insert }
//! ```
//!
//! # Example
//!
//! ```
//! use std::thread;
//! use challenges::SyncCallLimit;
//!
//! let limited = SyncCallLimit::new(|x: u32| x + 1, 3);
//! thread::scope(|s| {
//!     for _ in 0..4 {
//!         s.spawn(|| {
//!             for i in 0..10 {
//!                 limited.call(i);
//!             }
//!         });
//!     }
//! });
//! assert_eq!(limited.calls(), 3);
//! ```

use std::hash::Hash;
use std::marker::PhantomData;
use std::sync::atomic::{AtomicUsize, Ordering};

use dashmap::DashMap;
use tracing::{debug, trace};

/// A callback that runs at most `limit` times across all threads.
pub struct SyncCallLimit<F, A, R>
where
    F: Fn(A) -> R,
{
    callback: F,
    limit: usize,
    calls: AtomicUsize,
    _phantom: PhantomData<fn(A) -> R>,
}

impl<F, A, R> SyncCallLimit<F, A, R>
where
    F: Fn(A) -> R,
{
    pub fn new(callback: F, limit: usize) -> Self {
        Self {
            callback,
            limit,
            calls: AtomicUsize::new(0),
            _phantom: PhantomData,
        }
    }

    /// Claims a call slot and runs the callback, or returns `None` when none are left.
    pub fn call(&self, args: A) -> Option<R> {
        let claimed = self
            .calls
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |calls| {
                (calls < self.limit).then_some(calls + 1)
            });
        if claimed.is_err() {
            debug!(limit = self.limit, "call limit reached, callback skipped");
            return None;
        }
        Some((self.callback)(args))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Acquire)
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn is_exhausted(&self) -> bool {
        self.calls() >= self.limit
    }
}

/// A shared memoizing cache. The callback runs at most once per distinct argument,
/// even when several threads ask for the same argument at the same time.
///
/// A miss runs the callback while holding the write lock of the key's shard,
/// so the callback must not call back into the same `SyncMemo`.
pub struct SyncMemo<F, A, R>
where
    F: Fn(&A) -> R,
    A: Eq + Hash + Clone,
    R: Clone,
{
    callback: F,
    cache: DashMap<A, R>,
    hits: AtomicUsize,
}

impl<F, A, R> SyncMemo<F, A, R>
where
    F: Fn(&A) -> R,
    A: Eq + Hash + Clone,
    R: Clone,
{
    pub fn new(callback: F) -> Self {
        SyncMemo {
            callback,
            cache: DashMap::new(),
            hits: AtomicUsize::new(0),
        }
    }

    pub fn call(&self, args: &A) -> R {
        if let Some(cached) = self.cache.get(args) {
            self.record_hit();
            return cached.value().clone();
        }

        // Another thread may have filled the entry since the lookup above;
        // or_insert_with only runs the callback when it is still vacant.
        let mut computed = false;
        let result = self
            .cache
            .entry(args.clone())
            .or_insert_with(|| {
                computed = true;
                (self.callback)(args)
            })
            .value()
            .clone();
        if computed {
            trace!("cache miss");
        } else {
            self.record_hit();
        }
        result
    }

    fn record_hit(&self) {
        let hits = self.hits.fetch_add(1, Ordering::Relaxed) + 1;
        trace!(hits, "cache hit");
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    pub fn contains(&self, args: &A) -> bool {
        self.cache.contains_key(args)
    }

    /// Number of calls answered from the cache without running the callback.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_sync_limit_across_threads() {
        let runs = AtomicUsize::new(0);
        let limited = SyncCallLimit::new(
            |x: usize| {
                runs.fetch_add(1, Ordering::SeqCst);
                x
            },
            5,
        );

        let produced = AtomicUsize::new(0);
        thread::scope(|s| {
            for _ in 0..8 {
                s.spawn(|| {
                    for i in 0..50 {
                        if limited.call(i).is_some() {
                            produced.fetch_add(1, Ordering::SeqCst);
                        }
                    }
                });
            }
        });

        assert_eq!(runs.load(Ordering::SeqCst), 5);
        assert_eq!(produced.load(Ordering::SeqCst), 5);
        assert_eq!(limited.calls(), 5);
        assert!(limited.is_exhausted());
    }

    #[test]
    fn test_sync_limit_zero() {
        let limited = SyncCallLimit::new(|_: ()| 1, 0);
        assert_eq!(limited.call(()), None);
        assert_eq!(limited.limit(), 0);
    }

    #[test]
    fn test_sync_memo_runs_once_per_key() {
        let runs = AtomicUsize::new(0);
        let memo = SyncMemo::new(|n: &u64| {
            runs.fetch_add(1, Ordering::SeqCst);
            n * n
        });

        thread::scope(|s| {
            for _ in 0..8 {
                s.spawn(|| {
                    for n in 0..20u64 {
                        assert_eq!(memo.call(&n), n * n);
                    }
                });
            }
        });

        assert_eq!(runs.load(Ordering::SeqCst), 20);
        assert_eq!(memo.len(), 20);
        // Every call either ran the callback or was served from the cache
        assert_eq!(memo.hits(), 8 * 20 - 20);
        assert!(memo.contains(&19));
        assert!(!memo.contains(&20));
    }

    #[test]
    fn test_sync_memo_hits() {
        let memo = SyncMemo::new(|s: &String| s.len());
        assert!(memo.is_empty());
        assert_eq!(memo.call(&"abc".to_string()), 3);
        assert_eq!(memo.call(&"abc".to_string()), 3);
        assert_eq!(memo.hits(), 1);
    }
}
