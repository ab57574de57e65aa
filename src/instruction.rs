//! Movement instructions and their parsing from text.

use serde::{Deserialize, Serialize};

/// A single atomic command for the robot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Instruction {
    /// Step one cell in the facing direction (`F`).
    Forward,
    /// Quarter turn counter-clockwise (`L`).
    RotateLeft,
    /// Quarter turn clockwise (`R`).
    RotateRight,
}

impl Instruction {
    /// Maps one instruction character, ignoring case. Anything else yields `None`.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'F' => Some(Instruction::Forward),
            'L' => Some(Instruction::RotateLeft),
            'R' => Some(Instruction::RotateRight),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Instruction::Forward => 'F',
            Instruction::RotateLeft => 'L',
            Instruction::RotateRight => 'R',
        }
    }
}

/// An ordered, non-empty list of instructions.
///
/// Built by the validator; [`InstructionSequence::parse`] is the only constructor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstructionSequence(Vec<Instruction>);

impl InstructionSequence {
    /// Parses `text` character by character, keeping order.
    ///
    /// Returns `Err(c)` with the first character that is not an instruction, or `Ok` of an
    /// empty sequence for empty input. Emptiness is rejected by the validator, not here.
    pub(crate) fn parse(text: &str) -> Result<Self, char> {
        text.chars()
            .map(|c| Instruction::from_char(c).ok_or(c))
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Instruction> + '_ {
        self.0.iter().copied()
    }

    pub fn as_slice(&self) -> &[Instruction] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a InstructionSequence {
    type Item = &'a Instruction;
    type IntoIter = std::slice::Iter<'a, Instruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
