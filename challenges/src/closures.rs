//! Closures: wrappers that keep private state between calls.
//!
//! Each wrapper is an owned struct holding the callback and its state, so the
//! state lives exactly as long as the wrapper. The factory functions
//! `limit_function_call_count` and `cache_function` return plain closures that
//! own such a struct.
//!
//! # Arguments
//!
//! Callbacks take a single argument. Several positional arguments travel as
//! one tuple, and no arguments as `()`:
//!
//! ```
//! use challenges::cache_function;
//!
//! let area = cache_function(|&(w, h): &(u32, u32)| w * h);
//! assert_eq!(area((3, 4)), 12);
//! ```
//!
//! | State          | Held in |
//! |----------------|---------|
//! | call counter   | `CallLimit::calls` |
//! | result cache   | `Memo::cache` (`RefCell<HashMap>`) |
//! | "not run"      | `None` |

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::hash::Hash;
use std::marker::PhantomData;

use tracing::{debug, trace};

use crate::error::{Error, Result};

// ============================================================================
// Call limiting
// ============================================================================

/// A callback that may run at most `limit` times.
///
/// # Example
///
/// ```
/// use challenges::CallLimit;
///
/// let mut shout = CallLimit::new(|s: &str| s.to_uppercase(), 1);
/// assert_eq!(shout.call("hi"), Some("HI".to_string()));
/// assert_eq!(shout.call("again"), None);
/// assert!(shout.is_exhausted());
/// ```
pub struct CallLimit<F, A, R>
where
    F: FnMut(A) -> R,
{
    callback: F,
    limit: usize,
    calls: usize,
    _phantom: PhantomData<fn(A) -> R>,
}

impl<F, A, R> CallLimit<F, A, R>
where
    F: FnMut(A) -> R,
{
    pub fn new(callback: F, limit: usize) -> Self {
        Self {
            callback,
            limit,
            calls: 0,
            _phantom: PhantomData,
        }
    }

    /// Like [`CallLimit::new`], for limits arriving as signed integers.
    pub fn try_new(callback: F, limit: i64) -> Result<Self> {
        if limit < 0 {
            return Err(Error::NegativeCallLimit(limit));
        }
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);
        Ok(Self::new(callback, limit))
    }

    /// Runs the callback if calls remain, otherwise returns `None` without running it.
    pub fn call(&mut self, args: A) -> Option<R> {
        if self.calls >= self.limit {
            debug!(limit = self.limit, "call limit reached, callback skipped");
            return None;
        }
        self.calls += 1;
        Some((self.callback)(args))
    }

    /// Number of times the callback has run.
    pub fn calls(&self) -> usize {
        self.calls
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn remaining(&self) -> usize {
        self.limit - self.calls
    }

    pub fn is_exhausted(&self) -> bool {
        self.calls >= self.limit
    }
}

/// Returns a closure that runs `callback` for its first `n` calls and
/// returns `None` from then on.
///
/// # Example
/// ```
/// use challenges::limit_function_call_count;
///
/// let mut add = limit_function_call_count(|(a, b): (i32, i32)| a + b, 2);
/// assert_eq!(add((1, 2)), Some(3));
/// assert_eq!(add((3, 4)), Some(7));
/// assert_eq!(add((5, 6)), None);
/// ```
pub fn limit_function_call_count<F, A, R>(callback: F, n: usize) -> impl FnMut(A) -> Option<R>
where
    F: FnMut(A) -> R,
{
    let mut limited = CallLimit::new(callback, n);
    move |args| limited.call(args)
}

// ============================================================================
// Memoization
// ============================================================================

/// A callback with an unbounded cache keyed by its argument.
///
/// The callback runs at most once per distinct argument; keys compare with
/// the argument type's own `Eq` and `Hash`. Entries are never evicted.
///
/// The callback must not call back into the same `Memo`.
pub struct Memo<F, A, R>
where
    F: FnMut(&A) -> R,
    A: Eq + Hash + Clone,
    R: Clone,
{
    callback: RefCell<F>,
    cache: RefCell<HashMap<A, R>>,
    hits: Cell<usize>,
}

impl<F, A, R> Memo<F, A, R>
where
    F: FnMut(&A) -> R,
    A: Eq + Hash + Clone,
    R: Clone,
{
    pub fn new(callback: F) -> Self {
        Memo {
            callback: RefCell::new(callback),
            cache: RefCell::new(HashMap::new()),
            hits: Cell::new(0),
        }
    }

    pub fn call(&self, args: &A) -> R {
        match self.lookup(args) {
            Some(cached) => cached,
            None => {
                let computed = (self.callback.borrow_mut())(args);
                self.store(args, computed)
            }
        }
    }

    /// Cached result for `args`, counted as a hit when present.
    fn lookup(&self, args: &A) -> Option<R> {
        let cached = self.cache.borrow().get(args).cloned()?;
        self.hits.set(self.hits.get() + 1);
        trace!(hits = self.hits.get(), "cache hit");
        Some(cached)
    }

    fn store(&self, args: &A, computed: R) -> R {
        let stored = self
            .cache
            .borrow_mut()
            .entry(args.clone())
            .or_insert(computed)
            .clone();
        trace!(entries = self.len(), "cache miss");
        stored
    }

    /// Number of cached arguments, which equals the number of callback runs.
    pub fn len(&self) -> usize {
        self.cache.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.borrow().is_empty()
    }

    pub fn contains(&self, args: &A) -> bool {
        self.cache.borrow().contains_key(args)
    }

    /// Number of calls answered from the cache.
    pub fn hits(&self) -> usize {
        self.hits.get()
    }
}

/// Returns a closure that caches `callback`'s result for every argument it sees.
///
/// # Example
/// ```
/// use std::cell::Cell;
/// use challenges::cache_function;
///
/// let runs = Cell::new(0);
/// let double = cache_function(|x: &i32| {
///     runs.set(runs.get() + 1);
///     x * 2
/// });
/// assert_eq!(double(3), 6);
/// assert_eq!(double(3), 6);
/// assert_eq!(runs.get(), 1);
/// ```
pub fn cache_function<F, A, R>(callback: F) -> impl Fn(A) -> R
where
    F: FnMut(&A) -> R,
    A: Eq + Hash + Clone,
    R: Clone,
{
    let memo = Memo::new(callback);
    move |args| memo.call(&args)
}
