use std::fmt;

/// Which side of a mapping rule a key path belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Input,
    Output,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Input => f.write_str("input"),
            Side::Output => f.write_str("output"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransformError {
    #[error("JSON input must not be empty")]
    EmptyInput,
    #[error("JSON input is malformed or cannot be processed: {0}")]
    Parse(String),
    #[error("rule {id}: input key and output key must not be empty")]
    EmptyKey { id: u32 },
    #[error("rule {id}: key path {path:?} contains an empty segment")]
    InvalidPath { id: u32, path: String },
    #[error("{side} key {path} not found in JSON")]
    PathNotFound { side: Side, path: String },
    #[error("duplicate rule id {0}")]
    DuplicateRuleId(u32),
    #[error("no rule with id {0}")]
    UnknownRuleId(u32),
    #[error("no rule id left after {0}")]
    RuleIdExhausted(u32),
    #[error("cannot render result JSON: {0}")]
    Serialize(String),
}

pub type Result<T> = std::result::Result<T, TransformError>;
