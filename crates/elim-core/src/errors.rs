//! Structured error types shared across the elimination crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`ElimError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (vertices, ranks, sizes).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.context.insert(key.into(), value.to_string());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for graph, ordering and partition operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum ElimError {
    /// Graph construction and lookup errors.
    #[error("graph error: {0}")]
    Graph(ErrorInfo),
    /// Rank bijection and elimination ordering errors.
    #[error("ordering error: {0}")]
    Ordering(ErrorInfo),
    /// Ordered partition errors.
    #[error("partition error: {0}")]
    Partition(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

impl ElimError {
    /// Builds a graph-family error.
    pub fn graph(code: impl Into<String>, message: impl Into<String>) -> Self {
        ElimError::Graph(ErrorInfo::new(code, message))
    }

    /// Builds an ordering-family error.
    pub fn ordering(code: impl Into<String>, message: impl Into<String>) -> Self {
        ElimError::Ordering(ErrorInfo::new(code, message))
    }

    /// Builds a partition-family error.
    pub fn partition(code: impl Into<String>, message: impl Into<String>) -> Self {
        ElimError::Partition(ErrorInfo::new(code, message))
    }

    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            ElimError::Graph(info) | ElimError::Ordering(info) | ElimError::Partition(info) => {
                info
            }
        }
    }

    /// Returns the stable error code.
    pub fn code(&self) -> &str {
        &self.info().code
    }

    /// Adds a context entry to the payload, keeping the family.
    pub fn with_context(self, key: impl Into<String>, value: impl ToString) -> Self {
        match self {
            ElimError::Graph(info) => ElimError::Graph(info.with_context(key, value)),
            ElimError::Ordering(info) => ElimError::Ordering(info.with_context(key, value)),
            ElimError::Partition(info) => ElimError::Partition(info.with_context(key, value)),
        }
    }

    /// Attaches a remediation hint, keeping the family.
    pub fn with_hint(self, hint: impl Into<String>) -> Self {
        match self {
            ElimError::Graph(info) => ElimError::Graph(info.with_hint(hint)),
            ElimError::Ordering(info) => ElimError::Ordering(info.with_hint(hint)),
            ElimError::Partition(info) => ElimError::Partition(info.with_hint(hint)),
        }
    }
}
