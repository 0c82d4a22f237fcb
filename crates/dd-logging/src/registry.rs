//! The named logger hierarchy.
//!
//! A [`Registry`] maps dotted names (`app`, `app.nodes.text2spl`) to
//! nodes, creating them on first reference. The empty name is the root.
//! Most callers use the process-wide instance from [`Registry::global`];
//! tests and embedders can create isolated ones with [`Registry::new`].

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use crate::logger::{Logger, Node};

/// Registry of logger nodes keyed by dotted name.
#[derive(Clone)]
pub struct Registry {
    nodes: Arc<RwLock<HashMap<String, Arc<Node>>>>,
    root: Arc<Node>,
}

impl Registry {
    /// Create an empty, isolated hierarchy.
    pub fn new() -> Self {
        Self {
            nodes: Arc::new(RwLock::new(HashMap::new())),
            root: Node::root(),
        }
    }

    /// Get the process-wide registry.
    pub fn global() -> &'static Registry {
        static INSTANCE: Lazy<Registry> = Lazy::new(Registry::new);
        &INSTANCE
    }

    /// Handle to the hierarchy root.
    pub fn root(&self) -> Logger {
        Logger::new(self.clone(), self.root.clone())
    }

    /// Handle to the node named `name`, creating it and any missing
    /// ancestors. The empty name yields the root.
    pub fn logger(&self, name: &str) -> Logger {
        Logger::new(self.clone(), self.node(name))
    }

    /// Whether a node named `name` has been created.
    pub fn contains(&self, name: &str) -> bool {
        name.is_empty() || self.nodes.read().contains_key(name)
    }

    /// Names of all created nodes (root excluded), sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.nodes.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Restore `name` to a pristine node: no sinks, no own threshold,
    /// propagation on. Does nothing if the node was never created.
    pub fn reset(&self, name: &str) {
        if name.is_empty() {
            self.root.reset();
        } else if let Some(node) = self.nodes.read().get(name) {
            node.reset();
        }
    }

    fn node(&self, name: &str) -> Arc<Node> {
        if name.is_empty() {
            return self.root.clone();
        }
        if let Some(node) = self.nodes.read().get(name) {
            return node.clone();
        }
        let mut nodes = self.nodes.write();
        Self::get_or_create(&mut nodes, &self.root, name)
    }

    fn get_or_create(
        nodes: &mut HashMap<String, Arc<Node>>,
        root: &Arc<Node>,
        name: &str,
    ) -> Arc<Node> {
        if name.is_empty() {
            return root.clone();
        }
        if let Some(node) = nodes.get(name) {
            return node.clone();
        }
        let parent = Self::get_or_create(nodes, root, parent_name(name));
        let node = Node::child_of(parent, name);
        nodes.insert(name.to_string(), node.clone());
        node
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

/// The name with its last dotted segment removed (`""` for top level).
pub(crate) fn parent_name(name: &str) -> &str {
    name.rsplit_once('.').map(|(parent, _)| parent).unwrap_or("")
}
