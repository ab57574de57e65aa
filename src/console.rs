//! Line-oriented interactive front end.
//!
//! Asks for the room, the robot start and the instructions on three lines, then validates,
//! simulates and prints `Report: <column> <row> <orientation>`. Reading and writing go
//! through generic [`BufRead`] / [`Write`] handles so a session can run in memory.

use crate::error::ValidationError;
use crate::pose::{Pose, Room};
use crate::simulator::simulate;
use crate::validator::{Placement, validate};
use log::debug;
use std::io::{self, BufRead, Write};
use thiserror::Error;

pub const ROOM_PROMPT: &str = "Please provide room size (<width> <depth>):";
pub const ROBOT_PROMPT: &str =
    "Please provide starting position for the robot (<width> <depth> <orientation>):";
pub const INSTRUCTIONS_PROMPT: &str = "Please provide navigation instructions (<INSTRUCTIONS>):";

#[derive(Error, Debug)]
pub enum ConsoleError {
    #[error("Problem with reading input: {0}")]
    Io(#[from] io::Error),

    #[error("Input ended before the {0} line")]
    UnexpectedEof(&'static str),

    #[error("Expecting {expected} params, but got {got}")]
    ParamCount { expected: usize, got: usize },

    #[error("Problem parsing {field} ({value}): {source}")]
    ParseInt {
        field: &'static str,
        value: String,
        source: std::num::ParseIntError,
    },

    #[error("Navigation cannot contain spaces ({0})")]
    InstructionSpaces(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Everything collected from one session, not yet validated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConsoleInput {
    pub room: Room,
    pub placement: Placement,
    pub instructions: String,
}

impl ConsoleInput {
    /// Validates and simulates the collected input.
    pub fn evaluate(&self) -> Result<Pose, ValidationError> {
        let request = validate(self.room, &self.placement, &self.instructions)?;
        Ok(simulate(&request).final_pose)
    }
}

/// Splits a line on whitespace, dropping empty tokens and uppercasing the rest.
pub fn split_params(line: &str) -> Vec<String> {
    line.split_whitespace().map(str::to_uppercase).collect()
}

/// Formats the final line printed by a session.
pub fn format_report(pose: &Pose) -> String {
    format!("Report: {pose}")
}

fn parse_int(field: &'static str, value: &str) -> Result<i64, ConsoleError> {
    value.parse().map_err(|source| ConsoleError::ParseInt {
        field,
        value: value.to_string(),
        source,
    })
}

fn expect_count(params: &[String], expected: usize) -> Result<(), ConsoleError> {
    if params.len() == expected {
        Ok(())
    } else {
        Err(ConsoleError::ParamCount {
            expected,
            got: params.len(),
        })
    }
}

/// Prompts on `output` and reads the three input lines from `input`.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn ask(&mut self, prompt: &str, what: &'static str) -> Result<Vec<String>, ConsoleError> {
        writeln!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ConsoleError::UnexpectedEof(what));
        }
        Ok(split_params(&line))
    }

    /// Reads room, robot and instruction lines. Only line shape and integers are checked.
    pub fn read_input(&mut self) -> Result<ConsoleInput, ConsoleError> {
        let params = self.ask(ROOM_PROMPT, "room size")?;
        expect_count(&params, 2)?;
        let room = Room::new(
            parse_int("room width", &params[0])?,
            parse_int("room depth", &params[1])?,
        );

        let params = self.ask(ROBOT_PROMPT, "robot position")?;
        expect_count(&params, 3)?;
        let placement = Placement::new(
            parse_int("width position", &params[0])?,
            parse_int("depth position", &params[1])?,
            params[2].clone(),
        );

        let mut params = self.ask(INSTRUCTIONS_PROMPT, "instructions")?;
        if params.len() > 1 {
            return Err(ConsoleError::InstructionSpaces(params.join(" ")));
        }
        // A blank line is left for the validator to reject as empty.
        let instructions = params.pop().unwrap_or_default();

        Ok(ConsoleInput {
            room,
            placement,
            instructions,
        })
    }

    /// Runs one full session and writes the report line.
    pub fn run(&mut self) -> Result<Pose, ConsoleError> {
        let input = self.read_input()?;
        debug!("[Console] collected {input:?}");
        let pose = input.evaluate()?;
        writeln!(self.output, "{}", format_report(&pose))?;
        Ok(pose)
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
