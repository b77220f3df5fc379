//! Generic shortest-path search: a binary min-heap priority queue and an
//! A*/Dijkstra engine over an abstract, caller-defined graph.
//!
//! Callers implement [`graph::Graph`] over their own node representation and
//! ask [`search::create_path`] for a single-shot path query. The heap is
//! exposed as a standalone utility.

// Internals
// ---------
pub mod heap_primitives;

// Data structures
// ---------------
pub mod heap;

// Search space contract
// ---------------------
pub mod cost;
pub mod graph;

// Algorithms
// ----------
pub mod search;

pub use graph::Graph;
pub use heap::Heap;
pub use search::SearchError;
pub use search::create_path;
pub use search::create_path_within;
