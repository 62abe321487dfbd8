//! The eight trigrams (bagua) in their fixed 1-8 ordering.
//!
//! The ordering is the one the number method counts with: 乾1 兌2 離3 震4
//! 巽5 坎6 艮7 坤8. Lines are listed bottom-to-top.

use serde::Serialize;

use crate::line::Line::{self, Yang, Yin};

/// A three-line symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Trigram {
    /// Position in the fixed ordering (1-8).
    pub id: u8,
    /// Trigram name, e.g. 乾.
    pub name: &'static str,
    /// Unicode trigram glyph, e.g. ☰.
    pub symbol: &'static str,
    /// Lines bottom-to-top.
    pub lines: [Line; 3],
    /// Nature word used when composing hexagram names, e.g. 天.
    pub nature: &'static str,
}

/// All trigrams, indexed by `id - 1`.
pub static TRIGRAMS: [Trigram; 8] = [
    Trigram {
        id: 1,
        name: "乾",
        symbol: "☰",
        lines: [Yang, Yang, Yang],
        nature: "天",
    },
    Trigram {
        id: 2,
        name: "兌",
        symbol: "☱",
        lines: [Yang, Yang, Yin],
        nature: "澤",
    },
    Trigram {
        id: 3,
        name: "離",
        symbol: "☲",
        lines: [Yang, Yin, Yang],
        nature: "火",
    },
    Trigram {
        id: 4,
        name: "震",
        symbol: "☳",
        lines: [Yang, Yin, Yin],
        nature: "雷",
    },
    Trigram {
        id: 5,
        name: "巽",
        symbol: "☴",
        lines: [Yin, Yang, Yang],
        nature: "風",
    },
    Trigram {
        id: 6,
        name: "坎",
        symbol: "☵",
        lines: [Yin, Yang, Yin],
        nature: "水",
    },
    Trigram {
        id: 7,
        name: "艮",
        symbol: "☶",
        lines: [Yin, Yin, Yang],
        nature: "山",
    },
    Trigram {
        id: 8,
        name: "坤",
        symbol: "☷",
        lines: [Yin, Yin, Yin],
        nature: "地",
    },
];

/// Look up a trigram by its 1-based index.
pub fn by_index(index: u8) -> Option<&'static Trigram> {
    let slot = usize::from(index).checked_sub(1)?;
    TRIGRAMS.get(slot)
}

/// Reverse lookup: the trigram whose lines match exactly, in order.
pub fn by_lines(lines: &[Line]) -> Option<&'static Trigram> {
    TRIGRAMS.iter().find(|t| t.lines.as_slice() == lines)
}

impl std::fmt::Display for Trigram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}（{}）", self.symbol, self.name, self.nature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_match_positions() {
        for (i, t) in TRIGRAMS.iter().enumerate() {
            assert_eq!(usize::from(t.id), i + 1, "{}", t.name);
        }
    }

    #[test]
    fn line_patterns_are_distinct() {
        let patterns: HashSet<_> = TRIGRAMS.iter().map(|t| t.lines).collect();
        assert_eq!(patterns.len(), 8);
    }

    #[test]
    fn by_index_bounds() {
        assert!(by_index(0).is_none());
        assert_eq!(by_index(1).unwrap().name, "乾");
        assert_eq!(by_index(8).unwrap().name, "坤");
        assert!(by_index(9).is_none());
    }

    #[test]
    fn reverse_lookup_round_trips() {
        for t in &TRIGRAMS {
            assert_eq!(by_lines(&t.lines).unwrap().id, t.id);
        }
    }

    #[test]
    fn reverse_lookup_rejects_wrong_length() {
        assert!(by_lines(&[Yang, Yang]).is_none());
        assert!(by_lines(&[Yang, Yang, Yang, Yang]).is_none());
    }

    #[test]
    fn display() {
        assert_eq!(TRIGRAMS[4].to_string(), "☴ 巽（風）");
    }
}
