//! Host document: the uniquely identified containers a UI tree can be mounted into

use crate::types::Node;
use std::collections::BTreeMap;

/// A mount point holding the currently rendered tree
#[derive(Debug, Default)]
pub struct Container {
    children: Vec<Node>,
}

impl Container {
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Replace everything in the container with `children`
    pub fn replace_children(&mut self, children: Vec<Node>) {
        self.children = children;
    }
}

#[derive(Debug, Default)]
pub struct Document {
    containers: BTreeMap<String, Container>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Document with a single empty container
    pub fn with_container(id: &str) -> Self {
        let mut doc = Self::new();
        doc.add_container(id);
        doc
    }

    /// Add an empty container. Ids are unique, so an existing container is kept.
    pub fn add_container(&mut self, id: &str) -> &mut Container {
        self.containers.entry(id.to_string()).or_default()
    }

    pub fn get_element_by_id(&self, id: &str) -> Option<&Container> {
        self.containers.get(id)
    }

    pub fn get_element_by_id_mut(&mut self, id: &str) -> Option<&mut Container> {
        self.containers.get_mut(id)
    }
}
