//! Scene renderers.

pub mod svg;

use serde::{Deserialize, Serialize};

use crate::layout::Scene;

pub use svg::render_svg;

/// An sRGB colour, serialized as `[r, g, b]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "rgb({},{},{})", self.0, self.1, self.2)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub title: String,
    pub background: Rgb,
    pub edge: Rgb,
    pub edge_width: u32,
    pub node_fill: Rgb,
    pub node_outline: Rgb,
    pub label: Rgb,
    pub font_family: String,
    pub font_size: u32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            title: "AVL Tree Visualizer".to_string(),
            background: Rgb(10, 15, 35),
            edge: Rgb(255, 255, 255),
            edge_width: 2,
            node_fill: Rgb(100, 150, 255),
            node_outline: Rgb(255, 255, 255),
            label: Rgb(255, 255, 255),
            font_family: "Arial".to_string(),
            font_size: 14,
        }
    }
}

/// Serializes a scene as pretty-printed JSON.
pub fn render_json(scene: &Scene) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(scene)
}
