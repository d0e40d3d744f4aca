//! Traversal over the flow graph: shortest paths and bounded reachability.
//!
//! Provides generic traversal via the [`FlowTraversal`] trait, enabling any
//! graph store to support path queries without reimplementation.

use std::collections::{HashSet, VecDeque};

use crate::error::{Error, Result};
use crate::graph::store::FlowStore;

/// Trait for flow traversal — any graph store can implement this.
pub trait FlowTraversal {
    /// Returns the outgoing flow targets of an entity, in stored order.
    fn outgoing_flows(&self, id: &str) -> &[String];

    /// Returns true if the entity exists in the graph.
    fn has_entity(&self, id: &str) -> bool;
}

impl FlowTraversal for FlowStore {
    fn outgoing_flows(&self, id: &str) -> &[String] {
        self.outgoing(id).unwrap_or(&[])
    }

    fn has_entity(&self, id: &str) -> bool {
        self.contains(id)
    }
}

/// A single step in a bounded traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalStep {
    /// The entity reached at this step.
    pub entity: String,
    /// Number of flows walked from the source.
    pub depth: usize,
    /// Entities walked to reach this one, source first.
    pub path: Vec<String>,
}

/// Bounds for [`reachable`].
#[derive(Debug, Clone)]
pub struct TraversalConfig {
    /// Maximum traversal depth.
    pub max_depth: usize,
    /// Maximum number of results.
    pub limit: usize,
}

impl Default for TraversalConfig {
    fn default() -> Self {
        Self {
            max_depth: 3,
            limit: 100,
        }
    }
}

impl TraversalConfig {
    /// Creates a config with the given max depth and limit.
    #[must_use]
    pub fn new(max_depth: usize, limit: usize) -> Self {
        Self { max_depth, limit }
    }
}

/// Finds a shortest path from `start` to `end` by breadth-first search.
///
/// The queue holds complete paths rather than backpointers, so the first
/// path that reaches `end` is returned as-is: shortest by flow count, with
/// ties resolved by neighbor insertion order. Each entity is marked visited
/// when first enqueued, so it is expanded at most once and the search always
/// terminates. `start == end` yields the single-entity path.
///
/// # Errors
///
/// Returns `Error::PathEndpointsMissing` if either endpoint is absent, and
/// `Error::PathNotFound` if `end` is unreachable from `start`.
pub fn shortest_path<G: FlowTraversal>(graph: &G, start: &str, end: &str) -> Result<Vec<String>> {
    if !graph.has_entity(start) || !graph.has_entity(end) {
        return Err(Error::PathEndpointsMissing {
            start: start.to_string(),
            end: end.to_string(),
        });
    }

    let mut visited: HashSet<String> = HashSet::new();
    let mut queue: VecDeque<(String, Vec<String>)> = VecDeque::new();

    visited.insert(start.to_string());
    queue.push_back((start.to_string(), vec![start.to_string()]));

    while let Some((current, path)) = queue.pop_front() {
        if current == end {
            return Ok(path);
        }

        for next in graph.outgoing_flows(&current) {
            if visited.insert(next.clone()) {
                let mut extended = path.clone();
                extended.push(next.clone());
                queue.push_back((next.clone(), extended));
            }
        }
    }

    Err(Error::PathNotFound {
        start: start.to_string(),
        end: end.to_string(),
    })
}

/// Breadth-first expansion from `source`, bounded by depth and result count.
///
/// Returns every entity reachable within `config.max_depth` flows, up to
/// `config.limit` results. An entity reachable along several frontiers may
/// appear more than once. An unknown source yields no results.
#[must_use]
pub fn reachable<G: FlowTraversal>(
    graph: &G,
    source: &str,
    config: &TraversalConfig,
) -> Vec<TraversalStep> {
    let mut results = Vec::new();
    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();

    visited.insert(source.to_string());
    queue.push_back((source.to_string(), 0usize, vec![source.to_string()]));

    while let Some((current, depth, path)) = queue.pop_front() {
        if results.len() >= config.limit {
            break;
        }

        for next in graph.outgoing_flows(&current) {
            let new_depth = depth + 1;
            if new_depth > config.max_depth {
                continue;
            }

            let mut new_path = path.clone();
            new_path.push(next.clone());

            results.push(TraversalStep {
                entity: next.clone(),
                depth: new_depth,
                path: new_path.clone(),
            });

            if results.len() >= config.limit {
                break;
            }

            if new_depth < config.max_depth && !visited.contains(next) {
                visited.insert(next.clone());
                queue.push_back((next.clone(), new_depth, new_path));
            }
        }
    }

    results
}
