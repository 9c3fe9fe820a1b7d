use serde::{Deserialize, Serialize};
use std::fmt;

/// Connector face of a module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Face {
    Front, // F
    Right, // R
    Back,  // B
    Left,  // L
}

impl Face {
    pub fn all() -> [Self; 4] {
        [Self::Front, Self::Right, Self::Back, Self::Left]
    }

    pub fn code(&self) -> u8 {
        match self {
            Self::Front => 0,
            Self::Right => 1,
            Self::Back => 2,
            Self::Left => 3,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Front),
            1 => Some(Self::Right),
            2 => Some(Self::Back),
            3 => Some(Self::Left),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Front => "F",
            Self::Right => "R",
            Self::Back => "B",
            Self::Left => "L",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "F" => Some(Self::Front),
            "R" => Some(Self::Right),
            "B" => Some(Self::Back),
            "L" => Some(Self::Left),
            _ => None,
        }
    }
}

/// Rotation of a module around its connector axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Angle {
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Angle {
    pub fn all() -> [Self; 4] {
        [Self::Deg0, Self::Deg90, Self::Deg180, Self::Deg270]
    }

    pub fn code(&self) -> u8 {
        match self {
            Self::Deg0 => 0,
            Self::Deg90 => 1,
            Self::Deg180 => 2,
            Self::Deg270 => 3,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Deg0),
            1 => Some(Self::Deg90),
            2 => Some(Self::Deg180),
            3 => Some(Self::Deg270),
            _ => None,
        }
    }

    pub fn degrees(&self) -> u16 {
        u16::from(self.code()) * 90
    }

    pub fn from_degrees(degrees: &str) -> Option<Self> {
        match degrees {
            "0" => Some(Self::Deg0),
            "90" => Some(Self::Deg90),
            "180" => Some(Self::Deg180),
            "270" => Some(Self::Deg270),
            _ => None,
        }
    }
}

/// One step along a module-tree path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TopologyToken {
    Connector(Face),
    Rotation(Angle),
    Terminator,
}

impl fmt::Display for TopologyToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Connector(face) => write!(f, "{}", face.symbol()),
            Self::Rotation(angle) => write!(f, "{}", angle.degrees()),
            Self::Terminator => write!(f, "X"),
        }
    }
}

/// Physical actuator parameters of one module, in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GaitEntry {
    pub amplitude: f64, // [0, 90]
    pub offset: f64,    // [-90, 90]
    pub phase: f64,     // [0, 360]
}

impl GaitEntry {
    pub fn zero() -> Self {
        Self {
            amplitude: 0.0,
            offset: 0.0,
            phase: 0.0,
        }
    }
}
