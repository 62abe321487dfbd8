//! Interactive reading sessions.
//!
//! `ReadingSession` keeps every reading cast during a sitting in memory and
//! records it, together with interpretations and notes, in a [`Journal`].
//! The current time is supplied with each command so sessions stay
//! deterministic under test.

use chrono::{NaiveDateTime, Timelike};
use tracing::debug;

use mh_core::{DivinationInput, HexagramResult, Method, branch, derive_hexagram, render};

use crate::error::{OracleError, OracleResult};
use crate::interpret::Interpretation;
use crate::journal::{Journal, JournalEntry};

const RECENT_ENTRIES: usize = 10;
const QUIT_WORDS: [&str; 3] = ["quit", "q", "exit"];

/// Whether a line of input ends the session; only the first word counts.
pub fn is_quit(input: &str) -> bool {
    let (cmd, _) = split_word(input);
    QUIT_WORDS.contains(&cmd.to_lowercase().as_str())
}

/// An in-memory divination session.
#[derive(Debug, Default)]
pub struct ReadingSession {
    readings: Vec<HexagramResult>,
    journal: Journal,
}

impl ReadingSession {
    /// Create an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// All readings, oldest first.
    pub fn readings(&self) -> &[HexagramResult] {
        &self.readings
    }

    /// The most recent reading.
    pub fn last_reading(&self) -> Option<&HexagramResult> {
        self.readings.last()
    }

    /// Get the journal.
    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    /// Validate and derive a reading, then record it.
    pub fn cast(
        &mut self,
        input: &DivinationInput,
        at: NaiveDateTime,
    ) -> OracleResult<&HexagramResult> {
        input.validate()?;
        let result = derive_hexagram(input, at)?;
        let number = self.readings.len() + 1;
        debug!(number, hexagram = %result.name, changed = %result.changed_name, "reading cast");

        self.journal.append(JournalEntry::Reading {
            number,
            result: Box::new(result.clone()),
            timestamp: at,
        });
        self.readings.push(result);
        self.readings.last().ok_or(OracleError::NoReadings)
    }

    /// Attach an interpretation to the latest reading, returning its number.
    pub fn attach_interpretation(
        &mut self,
        interpretation: &Interpretation,
        at: NaiveDateTime,
    ) -> OracleResult<usize> {
        if self.readings.is_empty() {
            return Err(OracleError::NoReadings);
        }
        let reading = self.readings.len();
        self.journal.append(JournalEntry::Interpretation {
            reading,
            text: interpretation.text.clone(),
            source: interpretation.source,
            timestamp: at,
        });
        Ok(reading)
    }

    /// Process a line of user input and return a response.
    pub fn process(&mut self, input: &str, now: NaiveDateTime) -> OracleResult<String> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(String::new());
        }

        let (cmd, rest) = split_word(trimmed);
        match cmd.to_lowercase().as_str() {
            "branch" | "時辰" => Ok(do_branch(now)),
            "history" => Ok(self.do_history()),
            "show" => self.do_show(rest),
            "note" => self.do_note(rest, now),
            "journal" => Ok(self.do_journal_show()),
            "export" => self.do_journal_export(rest),
            "help" | "?" => Ok(HELP.to_string()),
            word if QUIT_WORDS.contains(&word) => Ok("再會！".to_string()),
            other => match Method::parse(other) {
                Some(Method::Consciousness) => self.do_char(rest, now),
                Some(Method::Number) => self.do_number(rest, now),
                None => Err(OracleError::InvalidCommand(format!(
                    "unknown command '{other}', type 'help' for a list"
                ))),
            },
        }
    }

    fn do_char(&mut self, rest: &str, now: NaiveDateTime) -> OracleResult<String> {
        let (character, rest) = split_word(rest);
        let (strokes, inquiry) = split_word(rest);
        if character.is_empty() || strokes.is_empty() {
            return Err(OracleError::InvalidCommand(
                "usage: char <字> <strokes> [inquiry]".to_string(),
            ));
        }
        let strokes: u32 = strokes.parse().map_err(|_| {
            OracleError::InvalidCommand(format!("stroke count must be a number, got '{strokes}'"))
        })?;

        let input = DivinationInput::consciousness(character, strokes).with_inquiry(inquiry);
        self.cast_and_describe(&input, now)
    }

    fn do_number(&mut self, rest: &str, now: NaiveDateTime) -> OracleResult<String> {
        let (first, rest) = split_word(rest);
        let (second, inquiry) = split_word(rest);
        if first.is_empty() || second.is_empty() {
            return Err(OracleError::InvalidCommand(
                "usage: number <n1> <n2> [inquiry]".to_string(),
            ));
        }
        let input = DivinationInput::number(parse_number(first)?, parse_number(second)?)
            .with_inquiry(inquiry);
        self.cast_and_describe(&input, now)
    }

    fn cast_and_describe(
        &mut self,
        input: &DivinationInput,
        now: NaiveDateTime,
    ) -> OracleResult<String> {
        let result = self.cast(input, now)?;
        let mut out = render::summary(result);
        out.push_str("\n\n");
        out.push_str(&render::side_by_side(result));
        Ok(out)
    }

    fn do_history(&self) -> String {
        if self.readings.is_empty() {
            return "尚無占卜紀錄。".to_string();
        }
        let mut out = format!("占卜紀錄（{} 卦）：\n", self.readings.len());
        for (i, r) in self.readings.iter().enumerate() {
            out.push_str(&format!("  {}. {r}  [{}]\n", i + 1, r.divination_time));
        }
        out.trim_end().to_string()
    }

    fn do_show(&self, rest: &str) -> OracleResult<String> {
        let number: usize = match rest {
            "" => self.readings.len(),
            n => n.parse().map_err(|_| {
                OracleError::InvalidCommand(format!("reading number expected, got '{n}'"))
            })?,
        };
        if self.readings.is_empty() {
            return Err(OracleError::NoReadings);
        }
        let result = number
            .checked_sub(1)
            .and_then(|i| self.readings.get(i))
            .ok_or(OracleError::UnknownReading(number))?;
        Ok(format!(
            "第 {number} 卦\n{}\n\n{}",
            render::summary(result),
            render::side_by_side(result)
        ))
    }

    fn do_note(&mut self, text: &str, now: NaiveDateTime) -> OracleResult<String> {
        if text.is_empty() {
            return Err(OracleError::InvalidCommand("usage: note <text>".to_string()));
        }
        self.journal.append(JournalEntry::Note {
            text: text.to_string(),
            timestamp: now,
        });
        Ok("已記下。".to_string())
    }

    fn do_journal_show(&self) -> String {
        if self.journal.is_empty() {
            return "紀錄簿尚無內容。".to_string();
        }
        let entries = self.journal.entries();
        let start = entries.len().saturating_sub(RECENT_ENTRIES);
        let recent = &entries[start..];

        let mut out = format!(
            "紀錄簿（共 {} 筆，顯示最近 {} 筆）：\n\n",
            entries.len(),
            recent.len()
        );
        let mut mini = Journal::new();
        for e in recent {
            mini.append(e.clone());
        }
        out.push_str(&mini.export_text());
        out.trim_end().to_string()
    }

    fn do_journal_export(&self, format: &str) -> OracleResult<String> {
        match format.to_lowercase().as_str() {
            "markdown" | "md" | "" => Ok(self.journal.export_markdown()),
            "text" | "txt" => Ok(self.journal.export_text()),
            other => Err(OracleError::InvalidCommand(format!(
                "unknown format '{other}', use: markdown, text"
            ))),
        }
    }
}

fn do_branch(now: NaiveDateTime) -> String {
    format!("目前時辰：{}", branch::resolve(now.hour()))
}

fn parse_number(raw: &str) -> OracleResult<u32> {
    raw.parse()
        .map_err(|_| OracleError::InvalidCommand(format!("expected a number, got '{raw}'")))
}

/// Split off the first whitespace-delimited word.
fn split_word(s: &str) -> (&str, &str) {
    match s.trim_start().split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (s.trim(), ""),
    }
}

const HELP: &str = "\
Reading Commands:
  char <字> <strokes> [inquiry]   Cast by character and stroke count (字占)
  number <n1> <n2> [inquiry]      Cast by two numbers 1-99 (數占)
  branch                          Show the current earthly branch
  history                         List readings of this session
  show [n]                        Show reading n (default: latest)

Journal Commands:
  note <text>                     Add a journal note
  journal                         Show recent entries
  export [markdown|text]          Export full journal

  help                            Show this help
  quit                            Exit";
