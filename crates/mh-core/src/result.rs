//! The result record produced by one divination.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::input::Casting;
use crate::line::{HexagramLines, Line};
use crate::trigram::{self, Trigram};

/// An original hexagram, its changed hexagram, and the context they were cast in.
///
/// Serialized field names follow the camelCase output contract
/// (`originalLines`, `changingLine`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HexagramResult {
    /// Upper trigram index (1-8) of the original hexagram.
    pub upper: u8,
    /// Lower trigram index (1-8) of the original hexagram.
    pub lower: u8,
    /// Upper trigram index of the changed hexagram.
    pub changed_upper: u8,
    /// Lower trigram index of the changed hexagram.
    pub changed_lower: u8,
    /// Original lines, bottom-to-top.
    pub original_lines: HexagramLines,
    /// Changed lines; differs from `original_lines` only at `changing_line`.
    pub changed_lines: HexagramLines,
    /// Position (1-6) of the moving line.
    pub changing_line: u8,
    /// Composite name of the original hexagram.
    pub name: String,
    /// Composite name of the changed hexagram.
    pub changed_name: String,
    /// Glyph of the original hexagram, empty if unknown.
    pub original_symbol: String,
    /// Glyph of the changed hexagram, empty if unknown.
    pub changed_symbol: String,
    /// The moment of divination as supplied by the caller.
    pub cast_at: NaiveDateTime,
    /// Localized display form of `cast_at`.
    pub divination_time: String,
    /// Earthly branch index (1-12) of `cast_at`.
    pub branch_index: u8,
    /// Earthly branch name of `cast_at`.
    pub earthly_branch: String,
    /// The querent's question.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inquiry: Option<String>,
    /// The casting input, kept for display.
    pub input_details: Casting,
}

impl HexagramResult {
    /// Upper trigram of the original hexagram.
    pub fn upper_trigram(&self) -> Option<&'static Trigram> {
        trigram::by_index(self.upper)
    }

    /// Lower trigram of the original hexagram.
    pub fn lower_trigram(&self) -> Option<&'static Trigram> {
        trigram::by_index(self.lower)
    }

    /// Upper trigram of the changed hexagram.
    pub fn changed_upper_trigram(&self) -> Option<&'static Trigram> {
        trigram::by_index(self.changed_upper)
    }

    /// Lower trigram of the changed hexagram.
    pub fn changed_lower_trigram(&self) -> Option<&'static Trigram> {
        trigram::by_index(self.changed_lower)
    }

    /// The original line at a 1-based position.
    pub fn original_line(&self, position: u8) -> Option<Line> {
        let slot = usize::from(position).checked_sub(1)?;
        self.original_lines.get(slot).copied()
    }

    /// 1-based positions where the original and changed lines differ.
    pub fn differing_positions(&self) -> Vec<u8> {
        self.original_lines
            .iter()
            .zip(self.changed_lines.iter())
            .zip(1u8..)
            .filter(|((a, b), _)| a != b)
            .map(|(_, pos)| pos)
            .collect()
    }

    /// Whether the moving line turns from yang to yin (老陽) or yin to yang (老陰).
    pub fn changing_line_label(&self) -> &'static str {
        match self.original_line(self.changing_line) {
            Some(Line::Yang) => "老陽",
            Some(Line::Yin) => "老陰",
            None => "",
        }
    }
}

impl std::fmt::Display for HexagramResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} → {}（動爻：第 {} 爻）",
            self.name, self.changed_name, self.changing_line
        )
    }
}
