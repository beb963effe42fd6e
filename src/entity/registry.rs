//! Session-owned element registry
//!
//! The registry is the single source of truth for element state. It is
//! owned by one interpreter session and processing is strictly sequential,
//! so mutual exclusion is structural rather than enforced.

use ahash::AHashMap;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::error::{Result, ShellError};
use crate::core::types::NodeId;
use crate::entity::element::{Element, ElementKind};

/// Mapping from element id to element for one session
///
/// Insertion order is preserved for the presentation layer; correctness
/// does not depend on it.
pub struct Registry {
    elements: AHashMap<NodeId, Element>,
    order: Vec<NodeId>,
    rng: StdRng,
}

impl Registry {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Deterministic id allocation, for tests and replayable sessions
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            elements: AHashMap::new(),
            order: Vec::new(),
            rng,
        }
    }

    /// Create an element with a fresh id and empty kind state
    ///
    /// The generated id always matches the id pattern and is unique within
    /// this registry. Fails only when the id space is fully allocated.
    pub fn create(&mut self, kind: ElementKind, title: &str) -> Result<&Element> {
        let id = self.allocate_id()?;
        let element = Element::new(id, kind, title);
        tracing::debug!(id = %id, role = %element.role, "element created");
        self.order.push(id);
        Ok(self.elements.entry(id).or_insert(element))
    }

    /// Random start, linear probe over the 16-bit id space
    ///
    /// Terminates with a free id unless every id is taken.
    fn allocate_id(&mut self) -> Result<NodeId> {
        let start: u16 = self.rng.gen();
        for offset in 0..=u16::MAX {
            let candidate = NodeId::new(start.wrapping_add(offset));
            if !self.elements.contains_key(&candidate) {
                return Ok(candidate);
            }
        }
        Err(ShellError::RegistryExhausted)
    }

    pub fn get(&self, id: NodeId) -> Option<&Element> {
        self.elements.get(&id)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Element> {
        self.elements.get_mut(&id)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.elements.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Elements in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Element> + '_ {
        self.order.iter().filter_map(|id| self.elements.get(id))
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
