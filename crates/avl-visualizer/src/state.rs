//! Build/reset state of a visualizer session.
//!
//! A state is created empty, has its tree replaced wholesale by every
//! successful build, keeps the previous tree when a build is rejected, and
//! is cleared by [`VisualizerState::reset`].

use avl_forest::AvlTree;
use log::{debug, trace, warn};

use crate::input::{BuildRequest, InputError};

#[derive(Debug, Default)]
pub struct VisualizerState {
    node_count: String,
    values: String,
    tree: Option<AvlTree<i32>>,
}

impl VisualizerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text last entered in the node-count field.
    pub fn node_count(&self) -> &str {
        &self.node_count
    }

    /// Text last entered in the values field.
    pub fn values(&self) -> &str {
        &self.values
    }

    pub fn tree(&self) -> Option<&AvlTree<i32>> {
        self.tree.as_ref()
    }

    /// Validates the two fields and, on success, rebuilds the tree from
    /// empty by inserting the values in order.
    pub fn build(&mut self, node_count: &str, values: &str) -> Result<&AvlTree<i32>, InputError> {
        self.node_count = node_count.to_string();
        self.values = values.to_string();
        let request = BuildRequest::parse(node_count, values).map_err(|e| {
            warn!("build rejected: {e:?}");
            e
        })?;
        Ok(self.install(request.values))
    }

    /// Builds from already-validated keys, filling the fields to match.
    pub fn build_from_keys(&mut self, keys: Vec<i32>) -> &AvlTree<i32> {
        self.node_count = keys.len().to_string();
        self.values = keys
            .iter()
            .map(i32::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        self.install(keys)
    }

    pub fn reset(&mut self) {
        debug!("reset");
        self.node_count.clear();
        self.values.clear();
        self.tree = None;
    }

    fn install(&mut self, keys: Vec<i32>) -> &AvlTree<i32> {
        let mut tree = AvlTree::with_capacity(keys.len());
        for key in keys {
            if tree.insert(key) {
                trace!("inserted {key}, root is now {:?}", tree.root().map(|r| *tree.key(r)));
            } else {
                debug!("duplicate key {key} ignored");
            }
        }
        debug!("built tree: {} nodes, height {}", tree.len(), tree.height());
        self.tree.insert(tree)
    }
}
