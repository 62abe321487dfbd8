//! Single yin/yang lines and the six-line stack.
//!
//! Lines serialize as the bare integers `0` (yin) and `1` (yang) so that the
//! result record matches the binary line contract consumed by presentation.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One line of a trigram or hexagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Line {
    /// Broken line, value 0.
    Yin,
    /// Solid line, value 1.
    Yang,
}

/// Six lines ordered bottom-to-top: positions 1-3 are the lower trigram,
/// positions 4-6 the upper trigram.
pub type HexagramLines = [Line; 6];

impl Line {
    /// The binary value of this line.
    pub const fn bit(self) -> u8 {
        match self {
            Self::Yin => 0,
            Self::Yang => 1,
        }
    }

    /// Build a line from its binary value. Anything other than 0 or 1 is rejected.
    pub const fn from_bit(bit: u8) -> Option<Self> {
        match bit {
            0 => Some(Self::Yin),
            1 => Some(Self::Yang),
            _ => None,
        }
    }

    /// The opposite line.
    pub const fn flip(self) -> Self {
        match self {
            Self::Yin => Self::Yang,
            Self::Yang => Self::Yin,
        }
    }

    /// Whether this is a solid line.
    pub const fn is_yang(self) -> bool {
        matches!(self, Self::Yang)
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Yin => write!(f, "陰"),
            Self::Yang => write!(f, "陽"),
        }
    }
}

impl Serialize for Line {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.bit())
    }
}

impl<'de> Deserialize<'de> for Line {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let bit = u8::deserialize(deserializer)?;
        Self::from_bit(bit).ok_or_else(|| {
            serde::de::Error::custom(format!("line value must be 0 or 1, got {bit}"))
        })
    }
}

/// Render lines as their binary values, e.g. `[1, 0, 1]`.
pub fn bits(lines: &[Line]) -> Vec<u8> {
    lines.iter().map(|l| l.bit()).collect()
}
