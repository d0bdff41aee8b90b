//! # Challenges Common Types
//!
//! Shared data types for the challenge utilities.
//!
//! ## Modules
//!
//! - [`tree`]: Arbitrarily nested sequences (`Nested<T>`) and the [`nested!`] literal macro
//! - [`value`]: Dynamic key/value documents (`Value`) with leaf traversal and JSON conversion
//! - [`error`]: Error type for document parsing
//!
//! ## Design Principles
//!
//! 1. **Owned trees**: Nesting is expressed with enums owning their children, so
//!    cyclic structures cannot be built and traversal always terminates
//! 2. **Borrowing traversal**: Walks hand out references into the input instead of cloning
//! 3. **Typed leaves**: Leaf equality never coerces between variants

pub mod error;
pub mod tree;
pub mod value;

// Re-export main types for convenience
pub use error::{Error, Result};
pub use tree::Nested;
pub use value::{Record, Value};
