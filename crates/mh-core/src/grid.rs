//! Hexagram naming: the 8×8 base-name grid and the glyph table.
//!
//! The grid is indexed `[upper - 1][lower - 1]` using the trigram ordering in
//! [`crate::trigram`]. Diagonal entries are the eight pure hexagrams, whose
//! base name is the trigram's own name.

use crate::trigram;

/// Base names keyed by `[upper - 1][lower - 1]`.
pub static NAME_GRID: [[&str; 8]; 8] = [
    // upper 乾
    ["乾", "履", "同人", "无妄", "姤", "訟", "遯", "否"],
    // upper 兌
    ["夬", "兌", "革", "隨", "大過", "困", "咸", "萃"],
    // upper 離
    ["大有", "睽", "離", "噬嗑", "鼎", "未濟", "旅", "晉"],
    // upper 震
    ["大壯", "歸妹", "豐", "震", "恆", "解", "小過", "豫"],
    // upper 巽
    ["小畜", "中孚", "家人", "益", "巽", "渙", "漸", "觀"],
    // upper 坎
    ["需", "節", "既濟", "屯", "井", "坎", "蹇", "比"],
    // upper 艮
    ["大畜", "損", "賁", "頤", "蠱", "蒙", "艮", "剝"],
    // upper 坤
    ["泰", "臨", "明夷", "復", "升", "師", "謙", "坤"],
];

/// `(base name, glyph)` pairs in King Wen order; the King Wen number of an
/// entry is its position plus one.
pub static HEXAGRAM_SYMBOLS: [(&str, &str); 64] = [
    ("乾", "䷀"), ("坤", "䷁"), ("屯", "䷂"), ("蒙", "䷃"),
    ("需", "䷄"), ("訟", "䷅"), ("師", "䷆"), ("比", "䷇"),
    ("小畜", "䷈"), ("履", "䷉"), ("泰", "䷊"), ("否", "䷋"),
    ("同人", "䷌"), ("大有", "䷍"), ("謙", "䷎"), ("豫", "䷏"),
    ("隨", "䷐"), ("蠱", "䷑"), ("臨", "䷒"), ("觀", "䷓"),
    ("噬嗑", "䷔"), ("賁", "䷕"), ("剝", "䷖"), ("復", "䷗"),
    ("无妄", "䷘"), ("大畜", "䷙"), ("頤", "䷚"), ("大過", "䷛"),
    ("坎", "䷜"), ("離", "䷝"), ("咸", "䷞"), ("恆", "䷟"),
    ("遯", "䷠"), ("大壯", "䷡"), ("晉", "䷢"), ("明夷", "䷣"),
    ("家人", "䷤"), ("睽", "䷥"), ("蹇", "䷦"), ("解", "䷧"),
    ("損", "䷨"), ("益", "䷩"), ("夬", "䷪"), ("姤", "䷫"),
    ("萃", "䷬"), ("升", "䷭"), ("困", "䷮"), ("井", "䷯"),
    ("革", "䷰"), ("鼎", "䷱"), ("震", "䷲"), ("艮", "䷳"),
    ("漸", "䷴"), ("歸妹", "䷵"), ("豐", "䷶"), ("旅", "䷷"),
    ("巽", "䷸"), ("兌", "䷹"), ("渙", "䷺"), ("節", "䷻"),
    ("中孚", "䷼"), ("小過", "䷽"), ("既濟", "䷾"), ("未濟", "䷿"),
];

/// The base name for an upper/lower trigram pair (both 1-based).
pub fn base_name(upper: u8, lower: u8) -> Option<&'static str> {
    let row = NAME_GRID.get(usize::from(upper).checked_sub(1)?)?;
    row.get(usize::from(lower).checked_sub(1)?).copied()
}

/// The composite hexagram name for an upper/lower trigram pair.
///
/// Pure hexagrams read `<base>為<nature>` (乾為天); all others read
/// `<upper nature><lower nature><base>` (天地否).
pub fn hexagram_name(upper: u8, lower: u8) -> Option<String> {
    let base = base_name(upper, lower)?;
    let upper_gua = trigram::by_index(upper)?;
    let lower_gua = trigram::by_index(lower)?;

    if upper == lower {
        Some(format!("{base}為{}", upper_gua.nature))
    } else {
        Some(format!("{}{}{base}", upper_gua.nature, lower_gua.nature))
    }
}

/// The display glyph for a base name, or `""` when the table has no entry.
pub fn symbol_for(base: &str) -> &'static str {
    HEXAGRAM_SYMBOLS
        .iter()
        .find(|(name, _)| *name == base)
        .map(|(_, glyph)| *glyph)
        .unwrap_or("")
}

/// The King Wen sequence number (1-64) of a base name.
pub fn king_wen_number(base: &str) -> Option<u8> {
    HEXAGRAM_SYMBOLS
        .iter()
        .position(|(name, _)| *name == base)
        .and_then(|pos| u8::try_from(pos + 1).ok())
}
