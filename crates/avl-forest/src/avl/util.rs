use std::cmp::Ordering;
use std::fmt::Debug;

use thiserror::Error;

use crate::types::AvlNodeLike;

/// Structural defects reported by [`check_avl_tree`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AvlError {
    #[error("link to node {node} points outside the arena")]
    DanglingLink { node: u32 },
    #[error("node {node} is reachable from more than one slot")]
    NodeAliased { node: u32 },
    #[error("node {node} caches height {cached}, actual height is {actual}")]
    HeightMismatch { node: u32, cached: u32, actual: u32 },
    #[error("node {node} has balance factor {balance}")]
    Unbalanced { node: u32, balance: i32 },
    #[error("node {node} is out of order")]
    OrderViolated { node: u32 },
}

#[inline]
fn get_l<K, N>(arena: &[N], i: u32) -> Option<u32>
where
    N: AvlNodeLike<K>,
{
    arena[i as usize].l()
}

#[inline]
fn get_r<K, N>(arena: &[N], i: u32) -> Option<u32>
where
    N: AvlNodeLike<K>,
{
    arena[i as usize].r()
}

#[inline]
fn set_l<K, N>(arena: &mut [N], i: u32, v: Option<u32>)
where
    N: AvlNodeLike<K>,
{
    arena[i as usize].set_l(v);
}

#[inline]
fn set_r<K, N>(arena: &mut [N], i: u32, v: Option<u32>)
where
    N: AvlNodeLike<K>,
{
    arena[i as usize].set_r(v);
}

#[inline]
fn cmp_keys<K, N>(arena: &[N], a: u32, b: u32) -> Ordering
where
    K: Ord,
    N: AvlNodeLike<K>,
{
    arena[a as usize].key().cmp(arena[b as usize].key())
}

/// Cached height of `node`, 0 for an absent node.
#[inline]
pub fn height<K, N>(arena: &[N], node: Option<u32>) -> u32
where
    N: AvlNodeLike<K>,
{
    match node {
        None => 0,
        Some(i) => arena[i as usize].height(),
    }
}

/// `height(left) - height(right)`; positive when left-heavy, 0 for an
/// absent node.
#[inline]
pub fn balance_factor<K, N>(arena: &[N], node: Option<u32>) -> i32
where
    N: AvlNodeLike<K>,
{
    match node {
        None => 0,
        Some(i) => {
            let lh = height(arena, get_l(arena, i)) as i32;
            let rh = height(arena, get_r(arena, i)) as i32;
            lh - rh
        }
    }
}

/// Recomputes the cached height of `node` from its children's caches.
#[inline]
pub fn refresh_height<K, N>(arena: &mut [N], node: u32)
where
    N: AvlNodeLike<K>,
{
    let lh = height(arena, get_l(arena, node));
    let rh = height(arena, get_r(arena, node));
    arena[node as usize].set_height(1 + lh.max(rh));
}

/// Promotes the left child of `y`. Returns the new subtree root, which the
/// caller must store in the slot that held `y`.
pub fn rotate_right<K, N>(arena: &mut [N], y: u32) -> u32
where
    N: AvlNodeLike<K>,
{
    let x = get_l(arena, y).expect("left child exists");
    let t2 = get_r(arena, x);

    set_r(arena, x, Some(y));
    set_l(arena, y, t2);

    // `y` is now below `x`, refresh it first.
    refresh_height(arena, y);
    refresh_height(arena, x);
    x
}

/// Promotes the right child of `x`. Mirror image of [`rotate_right`].
pub fn rotate_left<K, N>(arena: &mut [N], x: u32) -> u32
where
    N: AvlNodeLike<K>,
{
    let y = get_r(arena, x).expect("right child exists");
    let t2 = get_l(arena, y);

    set_l(arena, y, Some(x));
    set_r(arena, x, t2);

    refresh_height(arena, x);
    refresh_height(arena, y);
    y
}

/// Links the detached leaf `n` into the subtree rooted at `root` and
/// rebalances on the way back up.
///
/// Returns the new subtree root. When `root` is `None` that is `n` itself.
/// If a node with an equal key already exists nothing is modified and `n`
/// stays unlinked; the caller decides what to do with its arena slot.
pub fn insert<K, N>(arena: &mut [N], root: Option<u32>, n: u32) -> u32
where
    K: Ord,
    N: AvlNodeLike<K>,
{
    let Some(node) = root else {
        return n;
    };

    match cmp_keys(arena, n, node) {
        Ordering::Less => {
            let child = insert(arena, get_l(arena, node), n);
            set_l(arena, node, Some(child));
        }
        Ordering::Greater => {
            let child = insert(arena, get_r(arena, node), n);
            set_r(arena, node, Some(child));
        }
        Ordering::Equal => return node,
    }

    refresh_height(arena, node);
    let b = balance_factor(arena, Some(node));

    if b > 1 {
        let l = get_l(arena, node).expect("left child exists");
        match cmp_keys(arena, n, l) {
            Ordering::Less => return rotate_right(arena, node),
            Ordering::Greater => {
                let nl = rotate_left(arena, l);
                set_l(arena, node, Some(nl));
                return rotate_right(arena, node);
            }
            Ordering::Equal => {}
        }
    } else if b < -1 {
        let r = get_r(arena, node).expect("right child exists");
        match cmp_keys(arena, n, r) {
            Ordering::Greater => return rotate_left(arena, node),
            Ordering::Less => {
                let nr = rotate_right(arena, r);
                set_r(arena, node, Some(nr));
                return rotate_left(arena, node);
            }
            Ordering::Equal => {}
        }
    }

    node
}

/// Validates links, cached heights, balance and key order of the tree
/// rooted at `root`. Heights are recomputed from scratch.
pub fn check_avl_tree<K, N>(arena: &[N], root: Option<u32>) -> Result<(), AvlError>
where
    K: Ord,
    N: AvlNodeLike<K>,
{
    fn validate<K, N>(arena: &[N], node: u32, seen: &mut [bool]) -> Result<u32, AvlError>
    where
        N: AvlNodeLike<K>,
    {
        let Some(slot) = seen.get_mut(node as usize) else {
            return Err(AvlError::DanglingLink { node });
        };
        if *slot {
            return Err(AvlError::NodeAliased { node });
        }
        *slot = true;

        let lh = match get_l(arena, node) {
            Some(l) => validate(arena, l, seen)?,
            None => 0,
        };
        let rh = match get_r(arena, node) {
            Some(r) => validate(arena, r, seen)?,
            None => 0,
        };

        let actual = 1 + lh.max(rh);
        let cached = arena[node as usize].height();
        if cached != actual {
            return Err(AvlError::HeightMismatch {
                node,
                cached,
                actual,
            });
        }
        let balance = lh as i32 - rh as i32;
        if !(-1..=1).contains(&balance) {
            return Err(AvlError::Unbalanced { node, balance });
        }
        Ok(actual)
    }

    let Some(root) = root else {
        return Ok(());
    };

    let mut seen = vec![false; arena.len()];
    validate(arena, root, &mut seen)?;

    let mut prev: Option<u32> = None;
    for i in InOrder::new(arena, Some(root)) {
        if let Some(p) = prev {
            if cmp_keys(arena, p, i) != Ordering::Less {
                return Err(AvlError::OrderViolated { node: i });
            }
        }
        prev = Some(i);
    }

    Ok(())
}

/// In-order walk over arena indices using an explicit stack.
pub struct InOrder<'a, K, N>
where
    N: AvlNodeLike<K>,
{
    arena: &'a [N],
    stack: Vec<u32>,
    _key: std::marker::PhantomData<K>,
}

impl<'a, K, N> InOrder<'a, K, N>
where
    N: AvlNodeLike<K>,
{
    pub fn new(arena: &'a [N], root: Option<u32>) -> Self {
        let mut it = Self {
            arena,
            stack: Vec::new(),
            _key: std::marker::PhantomData,
        };
        it.push_left(root);
        it
    }

    fn push_left(&mut self, mut curr: Option<u32>) {
        while let Some(i) = curr {
            self.stack.push(i);
            curr = get_l(self.arena, i);
        }
    }
}

impl<K, N> Iterator for InOrder<'_, K, N>
where
    N: AvlNodeLike<K>,
{
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        let i = self.stack.pop()?;
        self.push_left(get_r(self.arena, i));
        Some(i)
    }
}

/// Debug printer for AVL trees.
pub fn print<K, N>(arena: &[N], node: Option<u32>, tab: &str) -> String
where
    K: Debug,
    N: AvlNodeLike<K>,
{
    match node {
        None => "∅".to_string(),
        Some(i) => {
            let n = &arena[i as usize];
            let left = print::<K, N>(arena, n.l(), &format!("{tab}  "));
            let right = print::<K, N>(arena, n.r(), &format!("{tab}  "));
            format!(
                "Node[{i}] [h={}] {{ {:?} }}\n{tab}L={left}\n{tab}R={right}",
                n.height(),
                n.key()
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::avl::types::AvlNode;

    fn leaves(keys: &[i32]) -> Vec<AvlNode<i32>> {
        keys.iter().copied().map(AvlNode::new).collect()
    }

    #[test]
    fn height_and_balance_of_absent_node_are_zero() {
        let arena: Vec<AvlNode<i32>> = Vec::new();
        assert_eq!(height(&arena, None), 0);
        assert_eq!(balance_factor(&arena, None), 0);
    }

    #[test]
    fn refresh_height_uses_taller_child() {
        let mut arena = leaves(&[2, 1, 0]);
        arena[1].l = Some(2);
        arena[1].h = 2;
        arena[0].l = Some(1);
        refresh_height(&mut arena, 0);
        assert_eq!(arena[0].h, 3);
        assert_eq!(balance_factor(&arena, Some(0)), 2);
        assert_eq!(balance_factor(&arena, Some(1)), 1);
    }

    #[test]
    fn rotate_right_promotes_left_child_and_moves_inner_subtree() {
        // 4(2(1, 3), 5) -> 2(1, 4(3, 5))
        let mut arena = leaves(&[4, 2, 5, 1, 3]);
        arena[0].l = Some(1);
        arena[0].r = Some(2);
        arena[1].l = Some(3);
        arena[1].r = Some(4);
        refresh_height(&mut arena, 1);
        refresh_height(&mut arena, 0);

        let root = rotate_right(&mut arena, 0);
        assert_eq!(root, 1);
        assert_eq!(arena[1].l, Some(3));
        assert_eq!(arena[1].r, Some(0));
        assert_eq!(arena[0].l, Some(4));
        assert_eq!(arena[0].r, Some(2));
        assert_eq!(arena[0].h, 2);
        assert_eq!(arena[1].h, 3);
        check_avl_tree(&arena, Some(root)).unwrap();
    }

    #[test]
    fn rotate_left_is_mirror_of_rotate_right() {
        let mut arena = leaves(&[1, 2, 3]);
        arena[0].r = Some(1);
        arena[1].r = Some(2);
        refresh_height(&mut arena, 1);
        refresh_height(&mut arena, 0);

        let root = rotate_left(&mut arena, 0);
        assert_eq!(root, 1);
        assert_eq!(arena[1].l, Some(0));
        assert_eq!(arena[1].r, Some(2));
        assert_eq!(arena[0].r, None);
        assert_eq!((arena[0].h, arena[1].h, arena[2].h), (1, 2, 1));
    }

    #[test]
    fn insert_into_empty_returns_the_leaf() {
        let mut arena = leaves(&[7]);
        assert_eq!(insert(&mut arena, None, 0), 0);
    }

    #[test]
    fn insert_duplicate_leaves_node_unlinked() {
        let mut arena = leaves(&[2, 1, 3, 1]);
        let mut root = None;
        for n in 0..3 {
            root = Some(insert(&mut arena, root, n));
        }
        let before = arena.clone();
        let after = insert(&mut arena, root, 3);
        assert_eq!(Some(after), root);
        assert_eq!(&arena[..3], &before[..3]);
        assert_eq!(InOrder::new(&arena, root).count(), 3);
    }

    #[test]
    fn check_reports_stale_height() {
        let mut arena = leaves(&[2, 1]);
        arena[0].l = Some(1);
        assert_eq!(
            check_avl_tree(&arena, Some(0)),
            Err(AvlError::HeightMismatch {
                node: 0,
                cached: 1,
                actual: 2
            })
        );
    }

    #[test]
    fn check_reports_imbalance_and_order() {
        let mut arena = leaves(&[3, 2, 1]);
        arena[0].l = Some(1);
        arena[1].l = Some(2);
        refresh_height(&mut arena, 1);
        refresh_height(&mut arena, 0);
        assert_eq!(
            check_avl_tree(&arena, Some(0)),
            Err(AvlError::Unbalanced {
                node: 0,
                balance: 2
            })
        );

        let mut arena = leaves(&[1, 2]);
        arena[0].l = Some(1);
        refresh_height(&mut arena, 0);
        assert_eq!(
            check_avl_tree(&arena, Some(0)),
            Err(AvlError::OrderViolated { node: 0 })
        );
    }

    #[test]
    fn check_reports_aliased_and_dangling_links() {
        let mut arena = leaves(&[2, 1]);
        arena[0].l = Some(1);
        arena[0].r = Some(1);
        refresh_height(&mut arena, 0);
        assert_eq!(
            check_avl_tree(&arena, Some(0)),
            Err(AvlError::NodeAliased { node: 1 })
        );

        let mut arena = leaves(&[2]);
        arena[0].l = Some(9);
        assert_eq!(
            check_avl_tree(&arena, Some(0)),
            Err(AvlError::DanglingLink { node: 9 })
        );
    }

    #[test]
    fn print_marks_absent_children() {
        let mut arena = leaves(&[2, 1]);
        let root = insert(&mut arena, None, 0);
        let root = insert(&mut arena, Some(root), 1);
        let out = print(&arena, Some(root), "");
        assert_eq!(out, "Node[0] [h=2] { 2 }\nL=Node[1] [h=1] { 1 }\n  L=∅\n  R=∅\nR=∅");
    }
}
