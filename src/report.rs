//! JSON request/response contract.
//!
//! A request carries the room, the robot start and the instruction text. The response
//! either carries a `report` shaped exactly like the input robot, or `error: true` with
//! the validator's message.
//!
//! ```json
//! {"room": {"width": 5, "depth": 5},
//!  "robot": {"width": 1, "depth": 2, "orientation": "N"},
//!  "instructions": "RFRF"}
//! ```

use crate::error::ValidationError;
use crate::pose::{Pose, Room};
use crate::simulator::simulate;
use crate::validator::{Placement, validate};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Message returned when the request body cannot be decoded.
pub const DECODE_ERROR_MESSAGE: &str = "Could not parse incoming data";

/// Incoming simulation request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RobotRequest {
    pub room: Room,
    pub robot: Placement,
    pub instructions: String,
}

impl RobotRequest {
    /// Validates the request and, if it passes, simulates it.
    pub fn evaluate(&self) -> Result<Pose, ValidationError> {
        let request = validate(self.room, &self.robot, &self.instructions)?;
        Ok(simulate(&request).final_pose)
    }
}

/// Final robot position, using the same field names as [`RobotRequest::robot`].
pub type RobotReport = Placement;

/// Outgoing response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RobotResponse {
    pub error: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report: Option<RobotReport>,
}

impl RobotResponse {
    pub fn success(pose: Pose) -> Self {
        Self {
            error: false,
            message: String::new(),
            report: Some(pose.into()),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            error: true,
            message: message.into(),
            report: None,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl From<Result<Pose, ValidationError>> for RobotResponse {
    fn from(outcome: Result<Pose, ValidationError>) -> Self {
        match outcome {
            Ok(pose) => Self::success(pose),
            Err(err) => Self::failure(err.to_string()),
        }
    }
}

/// Decodes `body`, evaluates it and builds the response. Never fails.
pub fn handle_json(body: &str) -> RobotResponse {
    let request: RobotRequest = match serde_json::from_str(body) {
        Ok(request) => request,
        Err(err) => {
            warn!("[Report] could not decode request: {err}");
            return RobotResponse::failure(DECODE_ERROR_MESSAGE);
        }
    };
    debug!("[Report] received {request:?}");
    request.evaluate().into()
}
