use crate::types::{AvlNodeLike, Node};

/// AVL tree node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AvlNode<K> {
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub k: K,
    /// Cached height, `1 + max(height(l), height(r))`.
    pub h: u32,
}

impl<K> AvlNode<K> {
    /// Creates a detached leaf.
    pub fn new(k: K) -> Self {
        Self {
            l: None,
            r: None,
            k,
            h: 1,
        }
    }
}

impl<K> Node for AvlNode<K> {
    fn l(&self) -> Option<u32> {
        self.l
    }

    fn r(&self) -> Option<u32> {
        self.r
    }

    fn set_l(&mut self, v: Option<u32>) {
        self.l = v;
    }

    fn set_r(&mut self, v: Option<u32>) {
        self.r = v;
    }
}

impl<K> AvlNodeLike<K> for AvlNode<K> {
    fn key(&self) -> &K {
        &self.k
    }

    fn height(&self) -> u32 {
        self.h
    }

    fn set_height(&mut self, h: u32) {
        self.h = h;
    }
}
