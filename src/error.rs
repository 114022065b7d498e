//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur while resolving a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TurnError {
    /// A winner has already been decided.
    #[error("game is already over")]
    GameOver,
}
