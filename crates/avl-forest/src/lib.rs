//! Arena-based AVL tree.
//!
//! Nodes live in a caller-owned `Vec<N>` and refer to their children through
//! `Option<u32>` indices. Every node caches the height of its subtree, so
//! balance factors are O(1) queries. Insertion is a recursive descent that
//! repairs the balance on the way back up with single and double rotations,
//! and returns the new subtree root for the caller to store.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | [`Node`] and [`AvlNodeLike`] traits |
//! [`avl::types`] | [`AvlNode`](avl::AvlNode) |
//! [`avl::util`] | `height`, `balance_factor`, rotations, `insert`, checks |
//! [`avl::avl_tree`] | [`AvlTree`], an owning wrapper around arena + root |
//!
//! ```
//! use avl_forest::AvlTree;
//!
//! let tree: AvlTree<i32> = [3, 2, 1].into_iter().collect();
//! let root = tree.root().unwrap();
//! assert_eq!(*tree.key(root), 2);
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
//! ```

pub mod avl;
pub mod types;

pub use avl::{AvlError, AvlTree};
pub use types::{AvlNodeLike, Node};
