use std::collections::BTreeMap;
use std::sync::Arc;

use crate::server::{error::flow::FlowError, flow::Flow};

/// Registry of named flows.
///
/// Populated with [`FlowRegistry::register`] during startup, then shared read-only.
/// Names are kept in a `BTreeMap` so listings come out sorted.
#[derive(Default)]
pub struct FlowRegistry {
    flows: BTreeMap<String, Arc<dyn Flow>>,
}

impl FlowRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a flow under its own name.
    ///
    /// # Returns
    /// - `Ok(())` - The flow was added
    /// - `Err(FlowError::InvalidName)` - The name is empty or padded with whitespace
    /// - `Err(FlowError::DuplicateName)` - A flow with that name already exists; the
    ///   registry is left unchanged
    pub fn register(&mut self, flow: Arc<dyn Flow>) -> Result<(), FlowError> {
        let name = flow.name().to_string();
        if name.is_empty() || name.trim() != name {
            return Err(FlowError::InvalidName(name));
        }
        if self.flows.contains_key(&name) {
            return Err(FlowError::DuplicateName(name));
        }

        self.flows.insert(name, flow);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Flow>> {
        self.flows.get(name).cloned()
    }

    /// Registered flow names in ascending order.
    pub fn names(&self) -> Vec<&str> {
        self.flows.keys().map(String::as_str).collect()
    }

    /// Iterates the registered flows ordered by name.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn Flow>> {
        self.flows.values()
    }

    pub fn len(&self) -> usize {
        self.flows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flows.is_empty()
    }
}
