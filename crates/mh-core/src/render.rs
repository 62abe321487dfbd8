//! Plain-text rendering of hexagram diagrams.
//!
//! Rows are printed top (line 6) to bottom (line 1). Nothing here emits
//! colour; frontends decorate the output themselves.

use crate::line::{HexagramLines, Line};
use crate::result::HexagramResult;

/// Drawing of a solid line.
pub const YANG_BAR: &str = "━━━━━━━";
/// Drawing of a broken line.
pub const YIN_BAR: &str = "━━━ ━━━";
/// Marker placed after the changing line.
pub const CHANGING_MARKER: &str = "◀";

/// The drawing for one line.
pub const fn bar(line: Line) -> &'static str {
    match line {
        Line::Yang => YANG_BAR,
        Line::Yin => YIN_BAR,
    }
}

/// One row per line, top first, e.g. `6 ━━━━━━━` or `1 ━━━ ━━━ ◀`.
pub fn rows(lines: &HexagramLines, changing: Option<u8>) -> Vec<String> {
    (1u8..=6)
        .rev()
        .zip(lines.iter().rev())
        .map(|(pos, line)| {
            if changing == Some(pos) {
                format!("{pos} {} {CHANGING_MARKER}", bar(*line))
            } else {
                format!("{pos} {}", bar(*line))
            }
        })
        .collect()
}

/// Original and changed hexagrams next to each other, the moving line marked.
pub fn side_by_side(result: &HexagramResult) -> String {
    (1u8..=6)
        .rev()
        .zip(result.original_lines.iter().rev())
        .zip(result.changed_lines.iter().rev())
        .map(|((pos, original), changed)| {
            let marker = if pos == result.changing_line {
                format!(" {CHANGING_MARKER}")
            } else {
                "  ".to_string()
            };
            format!("{pos} {}{marker}  {}", bar(*original), bar(*changed))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Trigram composition of a hexagram, e.g. `上巽下離`.
pub fn composition(upper: u8, lower: u8) -> String {
    match (crate::trigram::by_index(upper), crate::trigram::by_index(lower)) {
        (Some(u), Some(l)) => format!("上{}下{}", u.name, l.name),
        _ => String::new(),
    }
}

/// Multi-line textual summary of a result.
pub fn summary(result: &HexagramResult) -> String {
    let mut out = format!(
        "起卦時間：{}（{}時）\n{}\n",
        result.divination_time,
        result.earthly_branch,
        result.input_details.summary()
    );
    if let Some(inquiry) = &result.inquiry {
        out.push_str(&format!("所問之事：{inquiry}\n"));
    }
    out.push_str(&format!(
        "本卦：{} {}（{}）\n",
        result.original_symbol,
        result.name,
        composition(result.upper, result.lower)
    ));
    out.push_str(&format!(
        "之卦：{} {}（{}）\n",
        result.changed_symbol,
        result.changed_name,
        composition(result.changed_upper, result.changed_lower)
    ));
    out.push_str(&format!(
        "動爻：第 {} 爻（{}）",
        result.changing_line,
        result.changing_line_label()
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::derive_hexagram;
    use crate::input::DivinationInput;
    use chrono::NaiveDate;

    fn scenario() -> HexagramResult {
        let at = NaiveDate::from_ymd_opt(2026, 10, 18)
            .unwrap()
            .and_hms_opt(10, 5, 9)
            .unwrap();
        derive_hexagram(&DivinationInput::consciousness("字", 13), at).unwrap()
    }

    #[test]
    fn rows_top_to_bottom() {
        let r = scenario();
        let rows = rows(&r.original_lines, Some(1));
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[0], "6 ━━━━━━━");
        assert_eq!(rows[2], "4 ━━━ ━━━");
        assert_eq!(rows[5], "1 ━━━━━━━ ◀");
    }

    #[test]
    fn rows_without_marker() {
        let r = scenario();
        assert!(rows(&r.changed_lines, None).iter().all(|row| !row.contains('◀')));
    }

    #[test]
    fn side_by_side_diagram() {
        insta::assert_snapshot!(side_by_side(&scenario()), @r"
        6 ━━━━━━━    ━━━━━━━
        5 ━━━━━━━    ━━━━━━━
        4 ━━━ ━━━    ━━━ ━━━
        3 ━━━━━━━    ━━━━━━━
        2 ━━━ ━━━    ━━━ ━━━
        1 ━━━━━━━ ◀  ━━━ ━━━
        ");
    }

    #[test]
    fn composition_names_trigrams() {
        assert_eq!(composition(5, 3), "上巽下離");
        assert_eq!(composition(0, 3), "");
    }

    #[test]
    fn summary_lists_both_hexagrams() {
        let text = summary(&scenario());
        assert!(text.contains("起卦時間：2026/10/18 上午10:05:09（巳時）"));
        assert!(text.contains("所占之字：字（13畫）"));
        assert!(text.contains("本卦：䷤ 風火家人（上巽下離）"));
        assert!(text.contains("之卦：䷴ 風山漸（上巽下艮）"));
        assert!(text.contains("動爻：第 1 爻（老陽）"));
        assert!(!text.contains("所問之事"));
    }
}
