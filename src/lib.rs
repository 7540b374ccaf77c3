//! Shortest word ladders over a fixed dictionary.
//!
//! Two words are neighbors when they have the same length and differ in
//! exactly one position. [`build`] turns a word list into a [`NeighborMap`]
//! in parallel; [`find_path`] runs a breadth-first search over it.
//!
//! ```
//! use word_ladder::{build, find_path};
//!
//! let words: Vec<String> = ["cat", "cot", "cog", "dog"].iter().map(|w| w.to_string()).collect();
//! let map = build(&words);
//! let path = find_path(&map, "cat", "dog").unwrap().unwrap();
//! assert_eq!(path.to_string(), "cat -> cot -> cog -> dog");
//! ```

pub mod config;
pub mod error;
pub mod graph_builder;
pub mod ladder;
pub mod path_finder;
pub mod snapshot;
pub mod word;
pub mod word_source;

pub use config::LadderConfig;
pub use error::{LadderError, Result};
pub use graph_builder::{build, build_with_workers, NeighborMap, DEFAULT_WORKERS};
pub use ladder::{Ladder, MapOrigin};
pub use path_finder::{find_path, Path};
pub use snapshot::{FileSnapshotStore, SnapshotStore};
pub use word::{one_step, Word};
pub use word_source::{FileWordSource, VecWordSource, WordSource};
