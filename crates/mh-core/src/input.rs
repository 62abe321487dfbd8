//! Divination input: the casting method, its data, and an optional inquiry.
//!
//! Missing numeric fields deserialize as 0. Whether the input is complete is
//! checked by [`DivinationInput::validate`], which callers run before
//! derivation; the engine itself never rejects input.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Highest number accepted by the number method.
pub const MAX_NUMBER: u32 = 99;

/// How a hexagram is cast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Method {
    /// A single character and its stroke count.
    Consciousness,
    /// Two freely chosen numbers.
    Number,
}

impl Method {
    /// Parse a method from a user-supplied string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "consciousness" | "char" | "character" | "字" => Some(Self::Consciousness),
            "number" | "numbers" | "num" | "數" => Some(Self::Number),
            _ => None,
        }
    }

    /// Traditional label for the method.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Consciousness => "字占",
            Self::Number => "數占",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Consciousness => write!(f, "CONSCIOUSNESS"),
            Self::Number => write!(f, "NUMBER"),
        }
    }
}

/// Method-specific casting data, tagged by `method` when serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Casting {
    /// A character the querent felt drawn to, with its stroke count.
    Consciousness {
        /// The character.
        #[serde(default)]
        character: String,
        /// Stroke count of the character.
        #[serde(default)]
        strokes: u32,
    },
    /// Two numbers, conventionally 1-99.
    Number {
        /// The pair, first number first.
        #[serde(default)]
        numbers: [u32; 2],
    },
}

impl Casting {
    /// The method this data belongs to.
    pub const fn method(&self) -> Method {
        match self {
            Self::Consciousness { .. } => Method::Consciousness,
            Self::Number { .. } => Method::Number,
        }
    }

    /// One-line description of the input, as shown to the querent.
    pub fn summary(&self) -> String {
        match self {
            Self::Consciousness { character, strokes } => {
                format!("所占之字：{character}（{strokes}畫）")
            }
            Self::Number {
                numbers: [first, second],
            } => format!("所占數字：{first}, {second}"),
        }
    }

    /// Check that the data is complete and in range.
    pub fn validate(&self) -> CoreResult<()> {
        match self {
            Self::Consciousness { character, strokes } => {
                let glyphs = character.trim().chars().count();
                if glyphs != 1 {
                    return Err(CoreError::InvalidInput(format!(
                        "expected a single character, got \"{character}\""
                    )));
                }
                if *strokes == 0 {
                    return Err(CoreError::InvalidInput(
                        "stroke count must be at least 1".to_string(),
                    ));
                }
                Ok(())
            }
            Self::Number { numbers } => {
                for n in numbers {
                    if !(1..=MAX_NUMBER).contains(n) {
                        return Err(CoreError::InvalidInput(format!(
                            "numbers must be between 1 and {MAX_NUMBER}, got {n}"
                        )));
                    }
                }
                Ok(())
            }
        }
    }
}

/// Everything the querent supplies for one divination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DivinationInput {
    /// Method and its data.
    #[serde(flatten)]
    pub casting: Casting,
    /// The question being asked, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inquiry: Option<String>,
}

impl DivinationInput {
    /// Input for the character method.
    pub fn consciousness(character: impl Into<String>, strokes: u32) -> Self {
        Self {
            casting: Casting::Consciousness {
                character: character.into(),
                strokes,
            },
            inquiry: None,
        }
    }

    /// Input for the number method.
    pub fn number(first: u32, second: u32) -> Self {
        Self {
            casting: Casting::Number {
                numbers: [first, second],
            },
            inquiry: None,
        }
    }

    /// Attach an inquiry. Blank text clears it.
    pub fn with_inquiry(mut self, inquiry: impl Into<String>) -> Self {
        let text = inquiry.into();
        let trimmed = text.trim();
        self.inquiry = (!trimmed.is_empty()).then(|| trimmed.to_string());
        self
    }

    /// The casting method.
    pub const fn method(&self) -> Method {
        self.casting.method()
    }

    /// Check the casting data; see [`Casting::validate`].
    pub fn validate(&self) -> CoreResult<()> {
        self.casting.validate()
    }
}
