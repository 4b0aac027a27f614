//! Builds AVL trees from typed input and draws them.
//!
//! | Module | Contents |
//! |--------|----------|
//! [`input`] | node-count / values validation |
//! [`state`] | [`VisualizerState`]: build and reset |
//! [`layout`] | canvas coordinates for every node and edge |
//! [`render`] | SVG and JSON renderers, colour [`Theme`](render::Theme) |
//! [`config`] | JSON-loaded [`VisualizerConfig`] |
//! [`fuzzer`] | seeded demo key generation |
//! [`cli`] | output formats and the interactive [`Session`](cli::Session) |

pub mod cli;
pub mod config;
pub mod fuzzer;
pub mod input;
pub mod layout;
pub mod render;
pub mod state;

pub use config::VisualizerConfig;
pub use input::{BuildRequest, InputError};
pub use state::VisualizerState;
