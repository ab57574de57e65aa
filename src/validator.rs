//! Structural validation of a raw request.
//!
//! [`validate`] is the only way to obtain a [`SimulationRequest`], so every request the
//! simulator sees has a usable room, an in-bounds start pose and at least one instruction.

use crate::error::{Result, ValidationError};
use crate::instruction::InstructionSequence;
use crate::pose::{Orientation, Pose, Room};
use log::debug;
use serde::{Deserialize, Serialize};

/// Unvalidated robot start as supplied by a caller.
///
/// Field names follow the wire contract: `width` is the column and `depth` is the row.
/// The orientation is kept as text so an unknown value can be reported verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    #[serde(rename = "width")]
    pub column: i64,
    #[serde(rename = "depth")]
    pub row: i64,
    pub orientation: String,
}

impl Placement {
    pub fn new(column: i64, row: i64, orientation: impl Into<String>) -> Self {
        Self {
            column,
            row,
            orientation: orientation.into(),
        }
    }
}

impl From<Pose> for Placement {
    fn from(pose: Pose) -> Self {
        Self::new(pose.column(), pose.row(), pose.orientation.symbol())
    }
}

/// A request that passed validation. Immutable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulationRequest {
    room: Room,
    start_pose: Pose,
    instructions: InstructionSequence,
}

impl SimulationRequest {
    pub fn room(&self) -> &Room {
        &self.room
    }

    pub fn start_pose(&self) -> &Pose {
        &self.start_pose
    }

    pub fn instructions(&self) -> &InstructionSequence {
        &self.instructions
    }
}

/// Checks a room, robot start and instruction text, in that order.
///
/// The first failing check is reported:
/// 1. room width and depth are at least 1,
/// 2. the start column, then the start row, are non-negative and inside the room,
/// 3. the orientation is one of `N`, `E`, `S`, `W` (case-sensitive),
/// 4. the instructions are non-empty and consist only of `F`, `L`, `R` in any case.
///
/// On success the instruction text is parsed into an [`InstructionSequence`].
pub fn validate(
    room: Room,
    placement: &Placement,
    instructions: &str,
) -> Result<SimulationRequest> {
    let request = check(room, placement, instructions);
    if let Err(err) = &request {
        debug!("[Validator] rejected: {err}");
    }
    request
}

fn check(room: Room, placement: &Placement, instructions: &str) -> Result<SimulationRequest> {
    if room.width < 1 {
        return Err(ValidationError::InvalidRoomWidth(room.width));
    }
    if room.depth < 1 {
        return Err(ValidationError::InvalidRoomDepth(room.depth));
    }

    let Placement {
        column,
        row,
        orientation,
    } = placement;

    if *column < 0 {
        return Err(ValidationError::InvalidRobotColumn(*column));
    }
    if *column > room.width - 1 {
        return Err(ValidationError::RobotColumnOutOfBounds {
            column: *column,
            width: room.width,
        });
    }
    if *row < 0 {
        return Err(ValidationError::InvalidRobotRow(*row));
    }
    if *row > room.depth - 1 {
        return Err(ValidationError::RobotRowOutOfBounds {
            row: *row,
            depth: room.depth,
        });
    }

    let orientation = Orientation::from_symbol(orientation)
        .ok_or_else(|| ValidationError::InvalidOrientation(orientation.clone()))?;

    if instructions.is_empty() {
        return Err(ValidationError::EmptyInstructions);
    }
    let instructions = InstructionSequence::parse(instructions)
        .map_err(ValidationError::InvalidInstructionCharacters)?;

    Ok(SimulationRequest {
        room,
        start_pose: Pose::new(*column, *row, orientation),
        instructions,
    })
}
