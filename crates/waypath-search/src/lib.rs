//! Best-first route search over a bounded 2D grid.
//!
//! This crate implements the search engine behind *waypath*: an A*-style
//! best-first expansion over 8-connected neighbors, with explicit open and
//! closed node sets and per-step board snapshots.
//!
//! The entry point is [`run_search`] (or [`run_search_with`] to observe each
//! step). The engine consumes a finished [`waypath_core::Grid`] — markers
//! placed, obstacles scattered, invariants validated by the builder — and
//! annotates explored cells onto it as it runs.
//!
//! Two deliberate behaviors distinguish this engine from textbook A*:
//!
//! - a frontier coordinate is never updated in place; a rediscovery that is
//!   not strictly worse is inserted *alongside* the existing entry, and
//! - the annotated route is the entire explored region, not a backtracked
//!   minimal path.

mod annotate;
mod distance;
mod driver;
mod error;
mod neighbors;
mod nodeset;

pub use annotate::stamp;
pub use distance::euclidean;
pub use driver::{SearchOutcome, run_search, run_search_with};
pub use error::SearchError;
pub use neighbors::Neighbors;
pub use nodeset::{NodeSet, SearchNode};
