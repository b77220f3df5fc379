//! Single-shot A*/Dijkstra search over a caller-supplied [`Graph`].
//!
//! Each call owns a private frontier, record arena and visited map; nothing
//! persists across calls and the graph is only ever queried read-only.
//!
//! Superseded frontier entries are invalidated lazily: finding a cheaper
//! route to a node replaces its visited-map entry but leaves the old heap
//! entry in place. A stale entry that pops later is re-expanded redundantly
//! and every relaxation it attempts is rejected by the visited map. This
//! trades a few wasted expansions for not needing a decrease-key heap.

use std::cmp::Ordering;

use log::debug;
use log::trace;
use num_traits::Zero;
use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::cost::Cost;
use crate::graph::Graph;
use crate::heap::Heap;

/// A configuration problem detected before any search work begins.
///
/// An unreachable goal is NOT an error; it is the `Ok(None)` outcome.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("at least one goal node is required")]
    EmptyGoalSet,
}

/// One discovered route to a node. Never mutated after creation; a cheaper
/// route to the same node gets a fresh record.
#[derive(Debug)]
struct Record<N, C> {
    node: N,
    /// Arena index of the record this one was reached from. A back-reference
    /// for path reconstruction only, absent on the start record.
    previous: Option<usize>,
    /// Accumulated cost from the start (g).
    cost: C,
    /// `cost` plus the cheapest heuristic to any goal (f).
    total: C,
}

/// What the frontier actually orders: the record's total estimate and where
/// the record lives. Heap operations move as little data as possible.
#[derive(Copy, Clone, Debug)]
struct FrontierEntry<C> {
    total: C,
    record: usize,
}

#[inline(always)]
fn by_total<C: Cost>(a: &FrontierEntry<C>, b: &FrontierEntry<C>) -> Ordering {
    a.total.cmp(&b.total)
}

/// The cheapest heuristic estimate from `node` to any goal.
#[inline(always)]
#[must_use]
fn best_heuristic<G: Graph>(graph: &G, node: &G::Node, goals: &[G::Node]) -> G::Cost {
    debug_assert!(!goals.is_empty());
    goals
        .iter()
        .map(|goal| graph.heuristic(node, goal))
        .min()
        .unwrap_or_else(G::Cost::zero)
}

/// Finds a cheapest path from `start` to the closest of `goals`.
///
/// - `Ok(Some(path))`: the nodes from the step after `start` up to and
///   including the reached goal, in travel order. Empty when `start` already
///   satisfies the goal test.
/// - `Ok(None)`: no goal is reachable from `start`. A normal outcome.
/// - `Err(_)`: `goals` was empty. Fails before any heap work.
///
/// With an admissible heuristic the first goal extracted from the frontier is
/// reached via a minimum-cost route, so the search stops there instead of
/// draining the frontier.
pub fn create_path<G: Graph>(
    graph: &G,
    start: G::Node,
    goals: &[G::Node],
) -> Result<Option<Vec<G::Node>>, SearchError> {
    create_path_within(graph, start, goals, None)
}

/// Like [`create_path`], but discards any route whose accumulated cost
/// exceeds `limit` during relaxation. `None` means unbounded.
///
/// A limit below the true shortest-path cost yields `Ok(None)`.
pub fn create_path_within<G: Graph>(
    graph: &G,
    start: G::Node,
    goals: &[G::Node],
    limit: Option<G::Cost>,
) -> Result<Option<Vec<G::Node>>, SearchError> {
    if goals.is_empty() {
        return Err(SearchError::EmptyGoalSet);
    }

    let mut records: Vec<Record<G::Node, G::Cost>> = Vec::new();
    let mut visited: FxHashMap<G::Index, usize> = FxHashMap::default();
    let mut frontier: Heap<FrontierEntry<G::Cost>, _> = Heap::new_by(by_total::<G::Cost>);

    let start_total = best_heuristic(graph, &start, goals);
    visited.insert(graph.node_index(&start), records.len());
    frontier.push(FrontierEntry {
        total: start_total,
        record: records.len(),
    });
    records.push(Record {
        node: start,
        previous: None,
        cost: G::Cost::zero(),
        total: start_total,
    });

    let mut expansions = 0usize;
    let mut found: Option<usize> = None;
    while let Some(entry) = frontier.pop() {
        let current = entry.record;
        debug_assert!(current < records.len());

        if goals
            .iter()
            .any(|goal| graph.same_node(&records[current].node, goal))
        {
            found = Some(current);
            break;
        }

        expansions += 1;
        trace!(
            "expanding {:?} (g={}, f={})",
            records[current].node, records[current].cost, records[current].total,
        );

        let current_node = records[current].node.clone();
        let current_cost = records[current].cost;
        graph.for_each_neighbor(&current_node, |neighbor| {
            let cost = current_cost + graph.cost(&neighbor, &current_node);
            if let Some(limit) = limit {
                if cost > limit {
                    return;
                }
            }

            let index = graph.node_index(&neighbor);
            let improves = match visited.get(&index) {
                Some(&best) => records[best].cost > cost,
                None => true,
            };
            if !improves {
                // The known route is at least as cheap. Nothing changes; any
                // older frontier entry stays where it is.
                return;
            }

            let total = cost + best_heuristic(graph, &neighbor, goals);
            visited.insert(index, records.len());
            frontier.push(FrontierEntry {
                total,
                record: records.len(),
            });
            records.push(Record {
                node: neighbor,
                previous: Some(current),
                cost,
                total,
            });
        });
    }

    match found {
        Some(goal_record) => {
            debug!(
                "goal reached at cost {} after {} expansions ({} records)",
                records[goal_record].cost,
                expansions,
                records.len(),
            );
            Ok(Some(unwind(&records, goal_record)))
        }
        None => {
            debug!(
                "frontier exhausted after {} expansions, no path",
                expansions
            );
            Ok(None)
        }
    }
}

/// Builds the path back from the confirmed goal record, excluding the start.
#[must_use]
fn unwind<N: Clone, C>(records: &[Record<N, C>], mut record: usize) -> Vec<N> {
    let mut path = Vec::new();
    while let Some(previous) = records[record].previous {
        path.push(records[record].node.clone());
        debug_assert!(previous < record);
        record = previous;
    }
    path.reverse();
    path
}
