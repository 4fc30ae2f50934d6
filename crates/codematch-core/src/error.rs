//! Internal invariant errors shared across the codematch workspace.

/// An internal assertion failed. Per spec this should be unreachable in
/// correct code; seeing one means a bug, not a caller mistake.
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}
