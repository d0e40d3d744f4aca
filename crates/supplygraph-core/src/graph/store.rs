//! Adjacency-list storage for the supply-chain graph.
//!
//! Entities are string-identified; each maps to its ordered sequence of
//! outgoing flow targets. Identity is plain value equality with no
//! normalization, so callers must pass exactly matching strings.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One entity and its outgoing flows, as captured by [`FlowStore::snapshot`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowRecord {
    /// Entity identifier.
    pub entity: String,
    /// Outgoing flow targets in insertion order, duplicates preserved.
    pub outgoing: Vec<String>,
}

/// In-memory directed graph of supply-chain entities.
///
/// Insertion order is preserved for both entities and flows, so listings and
/// traversals are deterministic for a fixed mutation history. Parallel
/// duplicate flows between the same pair are permitted; [`FlowStore::remove_flow`]
/// removes one occurrence per call. Flows may only connect entities that
/// already exist, and removing an entity strips every flow that references it.
#[derive(Debug, Default, Clone)]
pub struct FlowStore {
    /// Entity id -> outgoing flow targets, in insertion order.
    flows: IndexMap<String, Vec<String>>,
}

impl FlowStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(expected_entities: usize) -> Self {
        Self {
            flows: IndexMap::with_capacity(expected_entities),
        }
    }

    // ── Entity CRUD ────────────────────────────────────────────────────

    /// Adds an entity with no outgoing flows.
    ///
    /// # Errors
    ///
    /// Returns `Error::EntityExists` if the id is already present; the store
    /// is unchanged in that case.
    pub fn add_entity(&mut self, id: &str) -> Result<()> {
        if self.flows.contains_key(id) {
            return Err(Error::EntityExists(id.to_string()));
        }
        self.flows.insert(id.to_string(), Vec::new());
        tracing::debug!(entity = id, "entity added");
        Ok(())
    }

    /// Removes an entity and every flow that references it.
    ///
    /// All occurrences of `id` are stripped from the remaining neighbor
    /// sequences, so no dangling inbound flows survive. The relative order
    /// of the remaining entities is preserved.
    ///
    /// # Errors
    ///
    /// Returns `Error::EntityNotFound` if the id is not present.
    pub fn remove_entity(&mut self, id: &str) -> Result<()> {
        if self.flows.shift_remove(id).is_none() {
            return Err(Error::EntityNotFound(id.to_string()));
        }
        for targets in self.flows.values_mut() {
            targets.retain(|target| target != id);
        }
        tracing::debug!(entity = id, "entity removed");
        Ok(())
    }

    /// Returns true if an entity with the given id exists.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.flows.contains_key(id)
    }

    /// Returns the number of entities.
    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.flows.len()
    }

    /// Returns true if the store holds no entities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flows.is_empty()
    }

    // ── Flow CRUD ──────────────────────────────────────────────────────

    /// Adds a directed flow from `from` to `to`.
    ///
    /// Both endpoints must already exist. No de-duplication is performed:
    /// repeated calls append parallel flows.
    ///
    /// # Errors
    ///
    /// Returns `Error::FlowEndpointsMissing` if either endpoint is missing;
    /// nothing is mutated in that case.
    pub fn add_flow(&mut self, from: &str, to: &str) -> Result<()> {
        if !self.flows.contains_key(to) {
            return Err(Error::FlowEndpointsMissing {
                from: from.to_string(),
                to: to.to_string(),
            });
        }
        let Some(targets) = self.flows.get_mut(from) else {
            return Err(Error::FlowEndpointsMissing {
                from: from.to_string(),
                to: to.to_string(),
            });
        };
        targets.push(to.to_string());
        tracing::debug!(from, to, "flow added");
        Ok(())
    }

    /// Removes one occurrence of the flow from `from` to `to`.
    ///
    /// Only the first occurrence is removed; parallel duplicates require one
    /// call each.
    ///
    /// # Errors
    ///
    /// Returns `Error::SourceNotFound` if `from` is missing and
    /// `Error::FlowNotFound` if no occurrence of `to` exists in `from`'s
    /// neighbor sequence.
    pub fn remove_flow(&mut self, from: &str, to: &str) -> Result<()> {
        let Some(targets) = self.flows.get_mut(from) else {
            return Err(Error::SourceNotFound(from.to_string()));
        };
        let Some(position) = targets.iter().position(|target| target == to) else {
            return Err(Error::FlowNotFound {
                from: from.to_string(),
                to: to.to_string(),
            });
        };
        targets.remove(position);
        tracing::debug!(from, to, "flow removed");
        Ok(())
    }

    // ── Queries ────────────────────────────────────────────────────────

    /// Returns the outgoing flow targets of an entity, or `None` if the
    /// entity does not exist.
    #[must_use]
    pub fn outgoing(&self, id: &str) -> Option<&[String]> {
        self.flows.get(id).map(Vec::as_slice)
    }

    /// Returns the out-degree of an entity, counting duplicate flows.
    #[must_use]
    pub fn out_degree(&self, id: &str) -> Option<usize> {
        self.flows.get(id).map(Vec::len)
    }

    /// Returns the in-degree of an entity, counting duplicate flows.
    #[must_use]
    pub fn in_degree(&self, id: &str) -> Option<usize> {
        if !self.flows.contains_key(id) {
            return None;
        }
        Some(
            self.flows
                .values()
                .map(|targets| targets.iter().filter(|target| *target == id).count())
                .sum(),
        )
    }

    /// Returns the total number of flows, duplicates counted.
    #[must_use]
    pub fn flow_count(&self) -> usize {
        self.flows.values().map(Vec::len).sum()
    }

    /// Iterates over every entity and its outgoing flows, in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.flows
            .iter()
            .map(|(id, targets)| (id.as_str(), targets.as_slice()))
    }

    /// Produces an owned snapshot of the whole graph for display or export.
    #[must_use]
    pub fn snapshot(&self) -> Vec<FlowRecord> {
        self.flows
            .iter()
            .map(|(entity, outgoing)| FlowRecord {
                entity: entity.clone(),
                outgoing: outgoing.clone(),
            })
            .collect()
    }

    /// Removes all entities and flows.
    pub fn clear(&mut self) {
        self.flows.clear();
    }
}
