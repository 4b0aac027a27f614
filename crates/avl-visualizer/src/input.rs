//! Validation of the two text fields a build is requested with: the
//! declared node count and the whitespace-separated values.
//!
//! The count is checked against the number of tokens before any token is
//! parsed, so a short list of garbage reports a count mismatch first.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Invalid input! Enter integers only.")]
    InvalidInteger { token: String },
    #[error("Number of values must match node count!")]
    CountMismatch { expected: i32, actual: usize },
}

/// Parses the node-count field.
pub fn parse_node_count(text: &str) -> Result<i32, InputError> {
    let text = text.trim();
    text.parse::<i32>().map_err(|_| InputError::InvalidInteger {
        token: text.to_string(),
    })
}

/// Splits `text` on whitespace and parses exactly `count` integers.
pub fn parse_values(count: i32, text: &str) -> Result<Vec<i32>, InputError> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if usize::try_from(count).ok() != Some(tokens.len()) {
        return Err(InputError::CountMismatch {
            expected: count,
            actual: tokens.len(),
        });
    }
    tokens
        .into_iter()
        .map(|token| {
            token.parse::<i32>().map_err(|_| InputError::InvalidInteger {
                token: token.to_string(),
            })
        })
        .collect()
}

/// A validated build request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildRequest {
    pub values: Vec<i32>,
}

impl BuildRequest {
    pub fn parse(count_text: &str, values_text: &str) -> Result<Self, InputError> {
        let count = parse_node_count(count_text)?;
        let values = parse_values(count, values_text)?;
        Ok(Self { values })
    }
}
