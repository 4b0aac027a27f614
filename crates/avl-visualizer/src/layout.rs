//! Canvas coordinates for each node of a tree.
//!
//! The root sits horizontally centred at `top_margin`. Each level moves
//! `vertical_gap` down; the horizontal offset to a child starts at
//! `width / 4` and halves (integer division) per level, so deep trees
//! eventually stack children directly below their parent.

use std::fmt::Display;

use avl_forest::AvlTree;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub width: i32,
    pub height: i32,
    pub top_margin: i32,
    pub vertical_gap: i32,
    pub node_radius: i32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 630,
            top_margin: 60,
            vertical_gap: 80,
            node_radius: 25,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlacedNode {
    pub label: String,
    #[serde(flatten)]
    pub at: Point,
    pub depth: u32,
    pub height: u32,
    pub balance: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub from: Point,
    pub to: Point,
}

/// Everything a renderer needs; nodes are in pre-order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scene {
    pub width: i32,
    pub height: i32,
    pub node_radius: i32,
    pub nodes: Vec<PlacedNode>,
    pub edges: Vec<Edge>,
}

impl Scene {
    fn empty(config: &LayoutConfig) -> Self {
        Self {
            width: config.width,
            height: config.height,
            node_radius: config.node_radius,
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }
}

pub fn layout<K: Display>(tree: Option<&AvlTree<K>>, config: &LayoutConfig) -> Scene {
    let mut scene = Scene::empty(config);
    let Some((tree, root)) = tree.and_then(|t| t.root().map(|r| (t, r))) else {
        return scene;
    };
    let at = Point {
        x: config.width / 2,
        y: config.top_margin,
    };
    place(tree, root, at, config.width / 4, 0, config, &mut scene);
    scene
}

fn place<K: Display>(
    tree: &AvlTree<K>,
    idx: u32,
    at: Point,
    gap: i32,
    depth: u32,
    config: &LayoutConfig,
    scene: &mut Scene,
) {
    scene.nodes.push(PlacedNode {
        label: tree.key(idx).to_string(),
        at,
        depth,
        height: tree.node_height(idx),
        balance: tree.balance(idx),
    });

    let children = [(tree.left(idx), -gap), (tree.right(idx), gap)];
    for (child, dx) in children {
        let Some(child) = child else {
            continue;
        };
        // Configs built in code skip validation; never overflow.
        let to = Point {
            x: at.x.saturating_add(dx),
            y: at.y.saturating_add(config.vertical_gap),
        };
        scene.edges.push(Edge { from: at, to });
        place(tree, child, to, gap / 2, depth + 1, config, scene);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tree_has_no_nodes() {
        let scene = layout::<i32>(None, &LayoutConfig::default());
        assert!(scene.nodes.is_empty());
        assert!(scene.edges.is_empty());
        assert_eq!((scene.width, scene.height), (1000, 630));
    }

    #[test]
    fn three_node_tree_positions() {
        let tree: AvlTree<i32> = [3, 2, 1].into_iter().collect();
        let scene = layout(Some(&tree), &LayoutConfig::default());
        let placed: Vec<(&str, i32, i32)> = scene
            .nodes
            .iter()
            .map(|n| (n.label.as_str(), n.at.x, n.at.y))
            .collect();
        assert_eq!(placed, vec![("2", 500, 60), ("1", 250, 140), ("3", 750, 140)]);
        assert_eq!(
            scene.edges,
            vec![
                Edge {
                    from: Point { x: 500, y: 60 },
                    to: Point { x: 250, y: 140 }
                },
                Edge {
                    from: Point { x: 500, y: 60 },
                    to: Point { x: 750, y: 140 }
                },
            ]
        );
    }

    #[test]
    fn gap_halves_per_level() {
        let tree: AvlTree<i32> = (1..=7).collect();
        let config = LayoutConfig {
            width: 800,
            ..LayoutConfig::default()
        };
        let scene = layout(Some(&tree), &config);
        let xs: Vec<i32> = scene.nodes.iter().map(|n| n.at.x).collect();
        // pre-order of 4(2(1,3),6(5,7))
        assert_eq!(xs, vec![400, 200, 100, 300, 600, 500, 700]);
        let depths: Vec<u32> = scene.nodes.iter().map(|n| n.depth).collect();
        assert_eq!(depths, vec![0, 1, 2, 2, 1, 2, 2]);
        assert_eq!(scene.edges.len(), 6);
    }

    #[test]
    fn huge_gaps_saturate_instead_of_overflowing() {
        let tree: AvlTree<i32> = (1..=7).collect();
        let config = LayoutConfig {
            width: i32::MAX,
            top_margin: i32::MAX - 10,
            vertical_gap: 1_500_000_000,
            ..LayoutConfig::default()
        };
        let scene = layout(Some(&tree), &config);
        assert_eq!(scene.nodes.len(), 7);
        assert!(scene.nodes[1..].iter().all(|n| n.at.y == i32::MAX));
        assert!(scene.nodes.iter().all(|n| n.at.x > 0));
        assert_eq!(scene.edges.len(), 6);
    }
}
