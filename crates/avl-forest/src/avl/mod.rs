//! Height-cached AVL tree over an index arena.

pub mod avl_tree;
pub mod types;
pub mod util;

pub use avl_tree::AvlTree;
pub use types::AvlNode;
pub use util::{
    balance_factor, check_avl_tree, height, insert, refresh_height, rotate_left, rotate_right,
    AvlError, InOrder,
};
