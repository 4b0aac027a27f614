//! Command-line front end logic.
//!
//! Provides the pieces used by the `avl-visualizer` binary:
//! - output [`Format`] selection and [`render`]
//! - [`Session`], a line-oriented build/reset/show loop

use std::io::{BufRead, Write};
use std::str::FromStr;

use avl_forest::AvlTree;
use log::debug;
use thiserror::Error;

use crate::config::VisualizerConfig;
use crate::layout::layout;
use crate::render::{render_json, render_svg};
use crate::state::VisualizerState;

// ── Errors ────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Unknown format: {0}")]
    UnknownFormat(String),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

// ── Output ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Svg,
    Json,
    Text,
}

impl FromStr for Format {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "svg" => Ok(Format::Svg),
            "json" => Ok(Format::Json),
            "text" | "txt" => Ok(Format::Text),
            other => Err(CliError::UnknownFormat(other.to_string())),
        }
    }
}

/// Renders `tree` (or an empty canvas) in the requested format.
pub fn render(
    tree: Option<&AvlTree<i32>>,
    format: Format,
    config: &VisualizerConfig,
) -> Result<String, CliError> {
    match format {
        Format::Svg => Ok(render_svg(&layout(tree, &config.layout), &config.theme)),
        Format::Json => Ok(render_json(&layout(tree, &config.layout))?),
        Format::Text => Ok(tree.map_or_else(|| "∅".to_string(), AvlTree::print)),
    }
}

// ── Session ───────────────────────────────────────────────────────────────

const HELP: &str = "\
commands:
  build <count> | <values...>   build a tree, e.g. `build 3 | 3 2 1`
  show [svg|json|text]          render the current tree
  reset                         clear the tree and inputs
  help                          show this message
  quit                          leave the session";

/// Result of one session command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    None,
    Message(String),
    Output(String),
    Quit,
}

/// Interactive build/reset loop over a line-oriented reader.
///
/// Rejected input is reported and leaves the state unchanged; it never ends
/// the session.
pub struct Session {
    pub state: VisualizerState,
    pub config: VisualizerConfig,
    pub format: Format,
}

impl Session {
    pub fn new(config: VisualizerConfig, format: Format) -> Self {
        Self {
            state: VisualizerState::new(),
            config,
            format,
        }
    }

    pub fn execute(&mut self, line: &str) -> Result<Reply, CliError> {
        let line = line.trim();
        let (command, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(c, r)| (c, r.trim()));
        debug!("session command: {command:?}");

        match command {
            "" => Ok(Reply::None),
            "build" => {
                let Some((count, values)) = rest.split_once('|') else {
                    return Ok(Reply::Message(
                        "usage: build <count> | <values...>".to_string(),
                    ));
                };
                match self.state.build(count, values) {
                    Ok(tree) => Ok(Reply::Message(format!(
                        "Built tree: nodes {}, height {}.",
                        tree.len(),
                        tree.height()
                    ))),
                    Err(e) => Ok(Reply::Message(e.to_string())),
                }
            }
            "reset" => {
                self.state.reset();
                Ok(Reply::Message("Tree reset.".to_string()))
            }
            "show" => {
                let format = if rest.is_empty() {
                    self.format
                } else {
                    match rest.parse::<Format>() {
                        Ok(format) => format,
                        Err(e) => return Ok(Reply::Message(e.to_string())),
                    }
                };
                Ok(Reply::Output(render(self.state.tree(), format, &self.config)?))
            }
            "help" => Ok(Reply::Message(HELP.to_string())),
            "quit" | "exit" => Ok(Reply::Quit),
            other => Ok(Reply::Message(format!("Unknown command: {other}"))),
        }
    }

    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> Result<(), CliError> {
        for line in input.lines() {
            match self.execute(&line?)? {
                Reply::None => {}
                Reply::Message(msg) | Reply::Output(msg) => {
                    writeln!(out, "{}", msg.trim_end())?;
                }
                Reply::Quit => break,
            }
        }
        out.flush()?;
        Ok(())
    }
}
