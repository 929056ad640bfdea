//! Data collection: normalize, count and aggregate.
//!
//! This module handles the second stage of the pipeline:
//!
//! - **Normalization**: lowercase text and delete ASCII punctuation
//! - **Counting**: tally whitespace-separated words per text or file
//! - **Aggregation**: walk a tree and collect per-file counts and a total
//!
//! ## Example
//!
//! ```rust
//! use mdwclib::data::count_words;
//!
//! let counts = count_words("Hello, world! Hello.");
//! assert_eq!(counts.total, 3);
//! assert_eq!(counts.get("hello"), 2);
//! ```

pub mod aggregate;
pub mod counter;
pub mod normalize;

pub use aggregate::{aggregate, AggregateOptions, AggregationResult, FileEntry};
pub use counter::{count_file, count_words, WordCounts};
pub use normalize::normalize;
