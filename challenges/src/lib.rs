//! Callback, closure and recursion utilities.
//!
//! - Callbacks: iterating a sequence with a callback (`each`, `map`)
//! - Closures: wrappers with private state (`limit_function_call_count`, `cache_function`)
//! - Concurrency: thread-safe counterparts of the closure wrappers
//! - Recursion: `reverse_str`, `check_matching_leaves`, `flatten`

pub mod callbacks; // Callbacks
pub mod closures; // Closures with local state
pub mod concurrent; // Thread-safe wrappers
pub mod error;
pub mod recursion; // Recursive algorithms

// The seven core operations and the types they hand out.
pub use callbacks::{each, map};
pub use closures::{cache_function, limit_function_call_count, CallLimit, Memo};
pub use concurrent::{SyncCallLimit, SyncMemo};
pub use error::{Error, Result};
pub use recursion::{check_matching_leaves, flatten, reverse_str};

pub use challenges_common::{nested, Nested, Record, Value};
