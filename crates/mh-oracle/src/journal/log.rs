//! Journal storage and export.

use serde::{Deserialize, Serialize};

use mh_core::render;

use super::entry::JournalEntry;
use crate::interpret::InterpretationSource;

/// A chronological log of session events.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Journal {
    entries: Vec<JournalEntry>,
}

impl Journal {
    /// Create an empty journal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry to the journal.
    pub fn append(&mut self, entry: JournalEntry) {
        self.entries.push(entry);
    }

    /// Get all entries.
    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the journal is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Export the journal as markdown.
    pub fn export_markdown(&self) -> String {
        let mut out = String::from("# 梅花易數占卜紀錄\n\n");
        for entry in &self.entries {
            match entry {
                JournalEntry::Reading { number, result, .. } => {
                    out.push_str(&format!("## 第 {number} 卦：{result}\n\n"));
                    for line in render::summary(result).lines() {
                        out.push_str(&format!("- {line}\n"));
                    }
                    out.push_str("\n```text\n");
                    out.push_str(&render::side_by_side(result));
                    out.push_str("\n```\n\n");
                }
                JournalEntry::Interpretation {
                    reading,
                    text,
                    source,
                    ..
                } => {
                    out.push_str(&format!("**解析**（第 {reading} 卦）"));
                    if *source == InterpretationSource::Fallback {
                        out.push_str(" *未能取得*");
                    }
                    out.push_str(&format!("\n\n{}\n\n", text.trim()));
                }
                JournalEntry::Note { text, .. } => {
                    out.push_str(&format!("> {text}\n\n"));
                }
            }
        }
        out
    }

    /// Export the journal as plain text.
    pub fn export_text(&self) -> String {
        let mut out = String::from("梅花易數占卜紀錄\n================\n\n");
        for entry in &self.entries {
            match entry {
                JournalEntry::Reading { number, result, .. } => {
                    out.push_str(&format!("--- 第 {number} 卦 ---\n"));
                    out.push_str(&render::summary(result));
                    out.push('\n');
                    out.push_str(&render::side_by_side(result));
                    out.push_str("\n\n");
                }
                JournalEntry::Interpretation { reading, text, .. } => {
                    out.push_str(&format!("解析（第 {reading} 卦）：\n{}\n\n", text.trim()));
                }
                JournalEntry::Note { text, .. } => {
                    out.push_str(&format!("備註：{text}\n\n"));
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};
    use mh_core::{DivinationInput, derive_hexagram};

    fn at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 18)
            .unwrap()
            .and_hms_opt(10, 5, 9)
            .unwrap()
    }

    fn reading_entry() -> JournalEntry {
        let result = derive_hexagram(&DivinationInput::consciousness("字", 13), at()).unwrap();
        JournalEntry::Reading {
            number: 1,
            result: Box::new(result),
            timestamp: at(),
        }
    }

    #[test]
    fn new_journal_is_empty() {
        let j = Journal::new();
        assert!(j.is_empty());
        assert_eq!(j.len(), 0);
    }

    #[test]
    fn append_entries() {
        let mut j = Journal::new();
        j.append(reading_entry());
        j.append(JournalEntry::Note {
            text: "問的是搬家".to_string(),
            timestamp: at(),
        });
        assert_eq!(j.len(), 2);
        assert_eq!(j.entries()[1].timestamp(), at());
    }

    #[test]
    fn export_markdown_reading() {
        let mut j = Journal::new();
        j.append(reading_entry());
        let md = j.export_markdown();
        assert!(md.starts_with("# 梅花易數占卜紀錄"));
        assert!(md.contains("## 第 1 卦：風火家人 → 風山漸（動爻：第 1 爻）"));
        assert!(md.contains("- 本卦：䷤ 風火家人（上巽下離）"));
        assert!(md.contains("```text\n6 ━━━━━━━"));
    }

    #[test]
    fn export_markdown_interpretation_and_note() {
        let mut j = Journal::new();
        j.append(reading_entry());
        j.append(JournalEntry::Interpretation {
            reading: 1,
            text: "家人，利女貞。\n".to_string(),
            source: InterpretationSource::Generated,
            timestamp: at(),
        });
        j.append(JournalEntry::Note {
            text: "再觀察一週".to_string(),
            timestamp: at(),
        });
        let md = j.export_markdown();
        assert!(md.contains("**解析**（第 1 卦）\n\n家人，利女貞。\n\n"));
        assert!(md.contains("> 再觀察一週"));
    }

    #[test]
    fn export_markdown_marks_fallback() {
        let mut j = Journal::new();
        j.append(JournalEntry::Interpretation {
            reading: 2,
            text: crate::interpret::FALLBACK_MESSAGE.to_string(),
            source: InterpretationSource::Fallback,
            timestamp: at(),
        });
        assert!(j.export_markdown().contains("（第 2 卦） *未能取得*"));
    }

    #[test]
    fn export_text_reading() {
        let mut j = Journal::new();
        j.append(reading_entry());
        j.append(JournalEntry::Note {
            text: "note".to_string(),
            timestamp: at(),
        });
        let txt = j.export_text();
        assert!(txt.contains("--- 第 1 卦 ---"));
        assert!(txt.contains("動爻：第 1 爻（老陽）"));
        assert!(txt.contains("1 ━━━━━━━ ◀  ━━━ ━━━"));
        assert!(txt.contains("備註：note"));
    }

    #[test]
    fn journal_serde_roundtrip() {
        let mut j = Journal::new();
        j.append(reading_entry());
        j.append(JournalEntry::Note {
            text: "test".to_string(),
            timestamp: at(),
        });
        let json = serde_json::to_string(&j).unwrap();
        let j2: Journal = serde_json::from_str(&json).unwrap();
        assert_eq!(j2.len(), 2);
        assert_eq!(j2.export_text(), j.export_text());
    }
}
