//! Error types for request validation

use thiserror::Error;

/// Reason a request was rejected before any movement.
///
/// Variants are listed in the order the validator checks them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Room width needs to be more than 0 ({0})")]
    InvalidRoomWidth(i64),

    #[error("Room depth needs to be more than 0 ({0})")]
    InvalidRoomDepth(i64),

    #[error("Robot width position cannot be negative ({0})")]
    InvalidRobotColumn(i64),

    #[error(
        "Robot start width position ({column}) cannot be equal or larger than room width ({width})"
    )]
    RobotColumnOutOfBounds { column: i64, width: i64 },

    #[error("Robot depth position cannot be negative ({0})")]
    InvalidRobotRow(i64),

    #[error("Robot start depth position ({row}) cannot be equal or larger than room depth ({depth})")]
    RobotRowOutOfBounds { row: i64, depth: i64 },

    #[error("Invalid orientation ({0}). Allowed orientations: N,E,S,W")]
    InvalidOrientation(String),

    #[error("Instructions cannot be empty")]
    EmptyInstructions,

    #[error("Invalid instruction ({0}). Instructions can only contain following characters: F,L,R")]
    InvalidInstructionCharacters(char),
}

pub type Result<T> = std::result::Result<T, ValidationError>;
