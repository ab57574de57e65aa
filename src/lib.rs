//! # robot-room
//!
//! A small movement engine for a robot living on a rectangular grid.
//!
//! A request is a [`Room`], a start [`Placement`] and an instruction string made of
//! `F` (forward), `L` (rotate left) and `R` (rotate right), case-insensitive.
//! [`validate`] turns the raw request into a [`SimulationRequest`] or reports the first
//! structural problem as a [`ValidationError`]. [`simulate`] then folds the instructions
//! over the start [`Pose`] and returns the final one. Forward steps that would leave the
//! room are ignored.
//!
//! The two stages never call each other. [`report`] composes them for the JSON wire
//! contract and [`console`] does the same for the interactive front end.

pub mod console;
pub mod error;
pub mod instruction;
pub mod pose;
pub mod report;
pub mod simulator;
pub mod validator;

pub use error::ValidationError;
pub use instruction::*;
pub use pose::*;
pub use simulator::*;
pub use validator::*;
