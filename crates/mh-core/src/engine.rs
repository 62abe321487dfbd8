//! Hexagram derivation.
//!
//! All index arithmetic is 1-based: a remainder of zero wraps to the modulus,
//! so there is no 0th trigram and no 0th line. The only time-derived input is
//! the hour of the supplied timestamp, which selects the earthly branch.
//!
//! | quantity      | consciousness               | number               |
//! |---------------|-----------------------------|----------------------|
//! | upper         | `wrap8(strokes)`            | `wrap8(n1)`          |
//! | lower         | upper rotated by `branch % 8` | same               |
//! | changing line | `wrap6(strokes + branch)`   | `wrap6(n1 + n2)`     |

use chrono::{Datelike, NaiveDateTime, Timelike};

use crate::branch;
use crate::error::{CoreError, CoreResult};
use crate::grid;
use crate::input::{Casting, DivinationInput};
use crate::line::HexagramLines;
use crate::result::HexagramResult;
use crate::trigram::{self, Trigram};

/// `x mod modulus`, with a zero remainder mapped to `modulus`.
pub const fn wrap(x: u64, modulus: u64) -> u64 {
    match x % modulus {
        0 => modulus,
        r => r,
    }
}

/// Wrap onto the trigram ring, 1-8.
pub const fn wrap8(x: u64) -> u8 {
    wrap(x, 8) as u8
}

/// Wrap onto the line positions, 1-6.
pub const fn wrap6(x: u64) -> u8 {
    wrap(x, 6) as u8
}

/// Rotate the upper trigram index forward by `offset` positions on the 1-8 ring.
///
/// Equal to `((upper + offset - 1) % 8) + 1` for every index on the ring;
/// adding 7 instead of subtracting 1 keeps index 0 from underflowing.
pub const fn rotate(upper: u8, offset: u8) -> u8 {
    ((upper as u16 + offset as u16 + 7) % 8 + 1) as u8
}

/// Stack a lower and upper trigram into six lines.
pub fn stack(lower: &Trigram, upper: &Trigram) -> HexagramLines {
    let [l1, l2, l3] = lower.lines;
    let [u1, u2, u3] = upper.lines;
    [l1, l2, l3, u1, u2, u3]
}

/// Flip the line at a 1-based position; out-of-range positions change nothing.
pub fn flip(lines: HexagramLines, position: u8) -> HexagramLines {
    let mut changed = lines;
    if let Some(line) = usize::from(position)
        .checked_sub(1)
        .and_then(|slot| changed.get_mut(slot))
    {
        *line = line.flip();
    }
    changed
}

/// Split six lines back into their (upper, lower) trigrams.
pub fn split(lines: &HexagramLines) -> CoreResult<(&'static Trigram, &'static Trigram)> {
    let (lower_lines, upper_lines) = lines.split_at(3);
    let lower = trigram::by_lines(lower_lines).ok_or_else(|| {
        CoreError::Invariant(format!("no trigram matches lower lines {lower_lines:?}"))
    })?;
    let upper = trigram::by_lines(upper_lines).ok_or_else(|| {
        CoreError::Invariant(format!("no trigram matches upper lines {upper_lines:?}"))
    })?;
    Ok((upper, lower))
}

/// Format a timestamp the way a zh-TW locale prints it: `2026/10/18 下午2:05:09`.
pub fn format_divination_time(at: NaiveDateTime) -> String {
    let (pm, hour) = at.hour12();
    format!(
        "{}/{}/{} {}{}:{:02}:{:02}",
        at.year(),
        at.month(),
        at.day(),
        if pm { "下午" } else { "上午" },
        hour,
        at.minute(),
        at.second()
    )
}

/// Derive the original and changed hexagrams for one divination.
///
/// `at` is the moment of divination; it is read once and used for both the
/// earthly branch and the display timestamp. Input is not validated here.
pub fn derive_hexagram(input: &DivinationInput, at: NaiveDateTime) -> CoreResult<HexagramResult> {
    let branch = branch::resolve(at.hour());
    let branch_index = u64::from(branch.index);
    // Raw offset, not wrapped: 8 rotates by zero.
    let branch_rem = branch.index % 8;

    let (upper, changing_line) = match &input.casting {
        Casting::Consciousness { strokes, .. } => {
            let strokes = u64::from(*strokes);
            (wrap8(strokes), wrap6(strokes + branch_index))
        }
        Casting::Number {
            numbers: [first, second],
        } => {
            let (first, second) = (u64::from(*first), u64::from(*second));
            (wrap8(first), wrap6(first + second))
        }
    };
    let lower = rotate(upper, branch_rem);

    let upper_gua = trigram::by_index(upper)
        .ok_or_else(|| CoreError::Invariant(format!("upper trigram {upper} out of range")))?;
    let lower_gua = trigram::by_index(lower)
        .ok_or_else(|| CoreError::Invariant(format!("lower trigram {lower} out of range")))?;

    let original_lines = stack(lower_gua, upper_gua);
    let changed_lines = flip(original_lines, changing_line);
    let (changed_upper_gua, changed_lower_gua) = split(&changed_lines)?;
    let (changed_upper, changed_lower) = (changed_upper_gua.id, changed_lower_gua.id);

    let name = composite_name(upper, lower)?;
    let changed_name = composite_name(changed_upper, changed_lower)?;
    let original_symbol = grid::base_name(upper, lower)
        .map(grid::symbol_for)
        .unwrap_or_default();
    let changed_symbol = grid::base_name(changed_upper, changed_lower)
        .map(grid::symbol_for)
        .unwrap_or_default();

    Ok(HexagramResult {
        upper,
        lower,
        changed_upper,
        changed_lower,
        original_lines,
        changed_lines,
        changing_line,
        name,
        changed_name,
        original_symbol: original_symbol.to_string(),
        changed_symbol: changed_symbol.to_string(),
        cast_at: at,
        divination_time: format_divination_time(at),
        branch_index: branch.index,
        earthly_branch: branch.name.to_string(),
        inquiry: input.inquiry.clone(),
        input_details: input.casting.clone(),
    })
}

fn composite_name(upper: u8, lower: u8) -> CoreResult<String> {
    grid::hexagram_name(upper, lower)
        .ok_or_else(|| CoreError::Invariant(format!("no grid entry for {upper}/{lower}")))
}
