use crate::error::{HormodularError, Result};
use crate::types::{Angle, Face, TopologyToken};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Digit reserved for a terminated branch
pub const TERMINATOR_DIGIT: u8 = 16;

/// Number of distinct digits a single level can take
pub const RADIX: u8 = 17;

/// One level of a module chain: a connector/rotation pair, or the end of the branch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Level {
    Joint { face: Face, angle: Angle },
    Terminator,
}

impl Level {
    /// Positional digit of this level, in `0..=16`
    pub fn digit(&self) -> u8 {
        match self {
            Self::Joint { face, angle } => face.code() + 4 * angle.code(),
            Self::Terminator => TERMINATOR_DIGIT,
        }
    }

    pub fn from_digit(digit: u8) -> Option<Self> {
        if digit == TERMINATOR_DIGIT {
            return Some(Self::Terminator);
        }
        let face = Face::from_code(digit % 4)?;
        let angle = Angle::from_code(digit / 4)?;
        Some(Self::Joint { face, angle })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WalkState {
    AwaitingConnector,
    AwaitingRotation(Face),
    Terminated,
}

/// Folds a token stream into levels, rejecting any ordering the level grammar does not allow
struct LevelWalker {
    state: WalkState,
    levels: Vec<Level>,
}

impl LevelWalker {
    fn new() -> Self {
        Self {
            state: WalkState::AwaitingConnector,
            levels: Vec::new(),
        }
    }

    fn push(&mut self, position: usize, token: TopologyToken) -> Result<()> {
        let level = self.levels.len();
        self.state = match (self.state, token) {
            (WalkState::AwaitingConnector, TopologyToken::Connector(face)) => {
                WalkState::AwaitingRotation(face)
            }
            (WalkState::AwaitingConnector, TopologyToken::Terminator) => {
                self.levels.push(Level::Terminator);
                WalkState::Terminated
            }
            (WalkState::AwaitingConnector, TopologyToken::Rotation(angle)) => {
                return Err(HormodularError::MalformedDescription(format!(
                    "rotation {} at position {} has no connector (level {})",
                    angle.degrees(),
                    position,
                    level
                )));
            }
            (WalkState::AwaitingRotation(face), TopologyToken::Rotation(angle)) => {
                self.levels.push(Level::Joint { face, angle });
                WalkState::AwaitingConnector
            }
            (WalkState::AwaitingRotation(face), other) => {
                return Err(HormodularError::MalformedDescription(format!(
                    "connector {} at level {} is followed by {} instead of a rotation",
                    face.symbol(),
                    level,
                    other
                )));
            }
            (WalkState::Terminated, other) => {
                return Err(HormodularError::MalformedDescription(format!(
                    "token {} at position {} follows the terminator",
                    other, position
                )));
            }
        };
        Ok(())
    }

    fn finish(self) -> Result<Vec<Level>> {
        match self.state {
            WalkState::AwaitingRotation(face) => Err(HormodularError::MalformedDescription(
                format!(
                    "connector {} at level {} is missing its rotation",
                    face.symbol(),
                    self.levels.len()
                ),
            )),
            _ if self.levels.is_empty() => Err(HormodularError::EmptyPath),
            _ => Ok(self.levels),
        }
    }
}

/// A well-formed module chain.
///
/// Each level is either a connector immediately followed by its rotation, or a
/// terminator, which must be the last token of the path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TopologyPath {
    levels: Vec<Level>,
}

impl TopologyPath {
    pub fn from_tokens(tokens: &[TopologyToken]) -> Result<Self> {
        if tokens.is_empty() {
            return Err(HormodularError::EmptyPath);
        }

        let mut walker = LevelWalker::new();
        for (position, token) in tokens.iter().enumerate() {
            walker.push(position, *token)?;
        }

        Ok(Self {
            levels: walker.finish()?,
        })
    }

    pub fn from_levels(levels: Vec<Level>) -> Result<Self> {
        if levels.is_empty() {
            return Err(HormodularError::EmptyPath);
        }
        if let Some(position) = levels[..levels.len() - 1]
            .iter()
            .position(|level| *level == Level::Terminator)
        {
            return Err(HormodularError::MalformedDescription(format!(
                "terminator at level {} is not the last level",
                position
            )));
        }
        Ok(Self { levels })
    }

    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    pub fn is_terminated(&self) -> bool {
        self.levels.last() == Some(&Level::Terminator)
    }

    pub fn tokens(&self) -> Vec<TopologyToken> {
        let mut tokens = Vec::with_capacity(self.levels.len() * 2);
        for level in &self.levels {
            match level {
                Level::Joint { face, angle } => {
                    tokens.push(TopologyToken::Connector(*face));
                    tokens.push(TopologyToken::Rotation(*angle));
                }
                Level::Terminator => tokens.push(TopologyToken::Terminator),
            }
        }
        tokens
    }

    /// Drop trailing `(F, 0)` levels, which add nothing to the identifier.
    ///
    /// At least one level is always kept.
    pub fn canonical(&self) -> Self {
        let mut levels = self.levels.clone();
        while levels.len() > 1 && levels.last().map(Level::digit) == Some(0) {
            levels.pop();
        }
        Self { levels }
    }

    pub fn is_canonical(&self) -> bool {
        self.canonical().levels.len() == self.levels.len()
    }
}

impl fmt::Display for TopologyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tokens: Vec<String> = self.tokens().iter().map(|t| t.to_string()).collect();
        write!(f, "({})", tokens.join(", "))
    }
}
