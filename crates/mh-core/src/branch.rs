//! Earthly branches: the twelve two-hour periods of the day.
//!
//! Each period starts on an odd hour. 子 runs from 23:00 to 01:00 and is the
//! only window that wraps past midnight.

use serde::Serialize;

/// One two-hour period of the day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EarthlyBranch {
    /// Sequence number, 1 (子) to 12 (亥).
    pub index: u8,
    /// Branch glyph.
    pub name: &'static str,
    /// First hour of the window (inclusive).
    pub start_hour: u32,
}

/// All branches in order, starting from 子.
pub static BRANCHES: [EarthlyBranch; 12] = [
    EarthlyBranch { index: 1, name: "子", start_hour: 23 },
    EarthlyBranch { index: 2, name: "丑", start_hour: 1 },
    EarthlyBranch { index: 3, name: "寅", start_hour: 3 },
    EarthlyBranch { index: 4, name: "卯", start_hour: 5 },
    EarthlyBranch { index: 5, name: "辰", start_hour: 7 },
    EarthlyBranch { index: 6, name: "巳", start_hour: 9 },
    EarthlyBranch { index: 7, name: "午", start_hour: 11 },
    EarthlyBranch { index: 8, name: "未", start_hour: 13 },
    EarthlyBranch { index: 9, name: "申", start_hour: 15 },
    EarthlyBranch { index: 10, name: "酉", start_hour: 17 },
    EarthlyBranch { index: 11, name: "戌", start_hour: 19 },
    EarthlyBranch { index: 12, name: "亥", start_hour: 21 },
];

impl EarthlyBranch {
    /// Last hour of the window (exclusive), on a 24-hour clock.
    pub const fn end_hour(&self) -> u32 {
        (self.start_hour + 2) % 24
    }

    /// Whether `hour` (0-23) falls inside this window.
    pub const fn contains(&self, hour: u32) -> bool {
        if self.start_hour == 23 {
            hour >= 23 || hour < 1
        } else {
            hour >= self.start_hour && hour < self.start_hour + 2
        }
    }
}

impl std::fmt::Display for EarthlyBranch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}時 ({:02}:00-{:02}:00)",
            self.name,
            self.start_hour,
            self.end_hour()
        )
    }
}

/// Resolve the branch for an hour of the day.
///
/// Hours outside 0-23 match no window and fall back to 子.
pub fn resolve(hour: u32) -> &'static EarthlyBranch {
    BRANCHES
        .iter()
        .find(|b| b.contains(hour))
        .unwrap_or(&BRANCHES[0])
}
