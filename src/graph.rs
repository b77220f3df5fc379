//! The graph capability contract consumed by the search engine.
//!
//! Callers implement [`Graph`] over their own node representation. The engine
//! never inspects a node's structure; it only asks for neighbors, a stable
//! index, and (optionally) equality, edge costs and a heuristic.

use std::fmt::Debug;
use std::hash::Hash;

use num_traits::One;
use num_traits::Zero;

use crate::cost::Cost;
use crate::search::SearchError;

/// An abstract graph that paths can be found over.
///
/// `for_each_neighbor` and `node_index` are required; the rest default to
/// sane behavior. Leaving `heuristic` at its zero default degrades the search
/// to Dijkstra's algorithm.
///
/// Contracts the engine relies on but does not check:
/// - `node_index` maps distinct nodes to distinct indices, and the same
///   logical node always to the same index,
/// - `cost` is non-negative,
/// - `heuristic` never overestimates the true remaining cost (admissible).
///
/// Violating any of these silently degrades the result to a suboptimal or
/// incorrect path rather than raising an error.
pub trait Graph {
    /// An opaque, caller-defined position in the graph.
    type Node: Clone + Debug;
    /// A stable key identifying a node for equality and map lookups.
    type Index: Eq + Hash + Debug;
    type Cost: Cost;

    /// Invokes `visit` once per node reachable from `node`.
    ///
    /// A push-style visitor rather than a collected list, so graphs generated
    /// on demand never materialize a neighborhood allocation.
    fn for_each_neighbor<F>(&self, node: &Self::Node, visit: F)
    where
        F: FnMut(Self::Node);

    /// The stable key for `node`.
    fn node_index(&self, node: &Self::Node) -> Self::Index;

    /// Whether two nodes are the same position. Used only for goal tests.
    #[inline(always)]
    fn same_node(&self, a: &Self::Node, b: &Self::Node) -> bool {
        self.node_index(a) == self.node_index(b)
    }

    /// The cost of travelling from `previous` to `node`. Must be non-negative.
    #[inline(always)]
    fn cost(&self, _node: &Self::Node, _previous: &Self::Node) -> Self::Cost {
        Self::Cost::one()
    }

    /// An admissible estimate of the remaining cost from `node` to `goal`.
    ///
    /// The zero default turns the search into Dijkstra's algorithm.
    #[inline(always)]
    fn heuristic(&self, _node: &Self::Node, _goal: &Self::Node) -> Self::Cost {
        Self::Cost::zero()
    }

    /// Finds a cheapest path from `start` to the closest of `goals`.
    ///
    /// See [`crate::search::create_path`].
    fn create_path(
        &self,
        start: Self::Node,
        goals: &[Self::Node],
    ) -> Result<Option<Vec<Self::Node>>, SearchError>
    where
        Self: Sized,
    {
        crate::search::create_path(self, start, goals)
    }

    /// Like [`Graph::create_path`], pruning any route costing more than `limit`.
    fn create_path_within(
        &self,
        start: Self::Node,
        goals: &[Self::Node],
        limit: Option<Self::Cost>,
    ) -> Result<Option<Vec<Self::Node>>, SearchError>
    where
        Self: Sized,
    {
        crate::search::create_path_within(self, start, goals, limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A two-node graph with a single directed edge, all defaults kept.
    #[derive(Debug)]
    struct TwoNodes;

    impl Graph for TwoNodes {
        type Node = u8;
        type Index = u8;
        type Cost = u32;

        fn for_each_neighbor<F>(&self, node: &u8, mut visit: F)
        where
            F: FnMut(u8),
        {
            if *node == 0 {
                visit(1);
            }
        }

        fn node_index(&self, node: &u8) -> u8 {
            *node
        }
    }

    #[test]
    fn default_cost_is_one() {
        assert_eq!(TwoNodes.cost(&1, &0), 1);
    }

    #[test]
    fn default_heuristic_is_zero() {
        assert_eq!(TwoNodes.heuristic(&0, &1), 0);
    }

    #[test]
    fn default_equality_compares_indices() {
        assert!(TwoNodes.same_node(&1, &1));
        assert!(!TwoNodes.same_node(&0, &1));
    }

    #[test]
    fn provided_create_path_delegates() {
        let path = TwoNodes.create_path(0, &[1]).unwrap();
        assert_eq!(path, Some(vec![1]));
    }
}
