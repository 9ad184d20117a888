use thiserror::Error;

/// Failure of a single tool invocation, tagged with the operation that failed.
#[derive(Error, Debug)]
pub enum ToolError {
    #[error("{operation} failed: {reason}")]
    Decode {
        operation: &'static str,
        reason: String,
    },

    #[error("{operation} failed: {reason}")]
    Compression {
        operation: &'static str,
        reason: String,
    },

    #[error("{operation} failed: {reason}")]
    Decompression {
        operation: &'static str,
        reason: String,
    },

    #[error("{operation} failed: {reason}")]
    Format {
        operation: &'static str,
        reason: String,
    },
}

impl ToolError {
    pub fn operation(&self) -> &'static str {
        match self {
            ToolError::Decode { operation, .. }
            | ToolError::Compression { operation, .. }
            | ToolError::Decompression { operation, .. }
            | ToolError::Format { operation, .. } => operation,
        }
    }
}

pub type Result<T> = std::result::Result<T, ToolError>;
