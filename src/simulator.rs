//! Replays an instruction sequence against the robot pose.
//!
//! The entry point is [`simulate`]. It never fails: [`crate::validate`] has already
//! guaranteed a legal start, and a forward step into a wall is a no-op rather than an error.

use crate::instruction::Instruction;
use crate::pose::{Pose, Room};
use crate::validator::SimulationRequest;
use log::{debug, trace};
use serde::{Deserialize, Serialize};

/// Outcome of a simulation. Only the final pose is kept.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub final_pose: Pose,
}

/// Applies one instruction to `pose` inside `room`.
///
/// Rotations always succeed. `Forward` moves one cell along the facing direction
/// (North decreases the row, East increases the column) unless the target cell lies
/// outside the room, in which case the pose is left unchanged.
///
/// Returns `false` only for a blocked forward step.
pub fn step(pose: &mut Pose, instruction: Instruction, room: &Room) -> bool {
    match instruction {
        Instruction::RotateLeft => {
            pose.rotate_left();
            true
        }
        Instruction::RotateRight => {
            pose.rotate_right();
            true
        }
        Instruction::Forward => pose.advance(room),
    }
}

/// Runs every instruction of `request` in order, starting from its start pose.
pub fn simulate(request: &SimulationRequest) -> SimulationResult {
    let room = request.room();
    let mut pose = *request.start_pose();

    for (i, instruction) in request.instructions().iter().enumerate() {
        let moved = step(&mut pose, instruction, room);
        if !moved {
            debug!(
                "[Simulator] step {}: forward from ({}, {}) facing {} blocked by wall",
                i,
                pose.column(),
                pose.row(),
                pose.orientation
            );
        }
        trace!("[Simulator] step {} {} -> {}", i, instruction.symbol(), pose);
    }

    SimulationResult { final_pose: pose }
}
