//! Node trait definitions.
//!
//! Nodes are stored in a caller-owned [`Vec`] arena and refer to their
//! children by `Option<u32>` index. A node is linked from exactly one slot
//! (a parent's `l`/`r` or the external root), so no parent link is kept.

/// Child links (`l`, `r`).
pub trait Node {
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}

/// Keyed node carrying a cached subtree height.
///
/// The height of a leaf is 1; an absent child counts as 0.
pub trait AvlNodeLike<K>: Node {
    fn key(&self) -> &K;
    fn height(&self) -> u32;
    fn set_height(&mut self, h: u32);
}
