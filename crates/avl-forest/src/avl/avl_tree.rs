use std::fmt::Debug;

use super::types::AvlNode;
use super::util::{self, AvlError, InOrder};

/// AVL tree owning its node arena.
///
/// Nodes are addressed by stable `u32` arena indices. The root index is
/// replaced by every [`insert`](Self::insert), since rotations can move a
/// different node to the top.
#[derive(Clone, Debug)]
pub struct AvlTree<K> {
    root: Option<u32>,
    arena: Vec<AvlNode<K>>,
}

impl<K> AvlTree<K> {
    pub fn new() -> Self {
        Self {
            root: None,
            arena: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            root: None,
            arena: Vec::with_capacity(capacity),
        }
    }

    /// Drops every node; the tree is empty afterwards.
    pub fn clear(&mut self) {
        self.root = None;
        self.arena.clear();
    }

    pub fn root(&self) -> Option<u32> {
        self.root
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height of the whole tree, 0 when empty.
    pub fn height(&self) -> u32 {
        util::height(&self.arena, self.root)
    }

    pub fn key(&self, idx: u32) -> &K {
        &self.arena[idx as usize].k
    }

    pub fn left(&self, idx: u32) -> Option<u32> {
        self.arena[idx as usize].l
    }

    pub fn right(&self, idx: u32) -> Option<u32> {
        self.arena[idx as usize].r
    }

    pub fn node_height(&self, idx: u32) -> u32 {
        self.arena[idx as usize].h
    }

    pub fn balance(&self, idx: u32) -> i32 {
        util::balance_factor(&self.arena, Some(idx))
    }

    pub fn nodes(&self) -> &[AvlNode<K>] {
        &self.arena
    }

    pub fn first(&self) -> Option<u32> {
        let mut curr = self.root?;
        while let Some(l) = self.left(curr) {
            curr = l;
        }
        Some(curr)
    }

    pub fn last(&self) -> Option<u32> {
        let mut curr = self.root?;
        while let Some(r) = self.right(curr) {
            curr = r;
        }
        Some(curr)
    }

    /// Arena indices in key order.
    pub fn indices(&self) -> InOrder<'_, K, AvlNode<K>> {
        InOrder::new(&self.arena, self.root)
    }

    /// Keys in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &K> + '_ {
        self.indices().map(move |i| self.key(i))
    }
}

impl<K: Ord> AvlTree<K> {
    /// Inserts `key`. Returns `false`, leaving the tree untouched, when the
    /// key is already present.
    pub fn insert(&mut self, key: K) -> bool {
        if self.find(&key).is_some() {
            return false;
        }
        self.arena.push(AvlNode::new(key));
        let node = (self.arena.len() - 1) as u32;
        self.root = Some(util::insert(&mut self.arena, self.root, node));
        true
    }

    pub fn find(&self, key: &K) -> Option<u32> {
        let mut curr = self.root;
        while let Some(i) = curr {
            let n = &self.arena[i as usize];
            curr = match key.cmp(&n.k) {
                std::cmp::Ordering::Less => n.l,
                std::cmp::Ordering::Greater => n.r,
                std::cmp::Ordering::Equal => return Some(i),
            };
        }
        None
    }

    pub fn has(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    pub fn assert_valid(&self) -> Result<(), AvlError> {
        util::check_avl_tree(&self.arena, self.root)
    }
}

impl<K: Debug> AvlTree<K> {
    pub fn print(&self) -> String {
        util::print(&self.arena, self.root, "")
    }
}

impl<K> Default for AvlTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord> Extend<K> for AvlTree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K: Ord> FromIterator<K> for AvlTree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tree() {
        let tree = AvlTree::<i32>::new();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.height(), 0);
        assert_eq!(tree.first(), None);
        assert_eq!(tree.last(), None);
        assert_eq!(tree.print(), "∅");
        tree.assert_valid().unwrap();
    }

    #[test]
    fn duplicate_does_not_grow_arena() {
        let mut tree: AvlTree<i32> = [5, 3, 8].into_iter().collect();
        assert!(!tree.insert(3));
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.nodes().len(), 3);
    }

    #[test]
    fn first_and_last() {
        let tree: AvlTree<i32> = [10, 4, 17, -2, 9].into_iter().collect();
        assert_eq!(tree.first().map(|i| *tree.key(i)), Some(-2));
        assert_eq!(tree.last().map(|i| *tree.key(i)), Some(17));
    }

    #[test]
    fn clear_resets_root() {
        let mut tree: AvlTree<i32> = (0..10).collect();
        tree.clear();
        assert!(tree.is_empty());
        assert_eq!(tree.root(), None);
        assert!(tree.insert(1));
        assert_eq!(tree.root(), Some(0));
    }
}
