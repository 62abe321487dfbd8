//! Core tables and hexagram derivation for Meihua.
//!
//! This crate turns a divination input (a character with its stroke count, or
//! two numbers) plus the moment of divination into an original hexagram and
//! its changed hexagram. It performs no I/O and reads no clock: the caller
//! passes the timestamp in, so every derivation is reproducible.

/// Earthly branch periods of the day.
pub mod branch;
/// The derivation engine and its modulo helpers.
pub mod engine;
/// Error types used throughout the crate.
pub mod error;
/// Hexagram name grid and glyph table.
pub mod grid;
/// Divination input and caller-side validation.
pub mod input;
/// Yin/yang lines.
pub mod line;
/// Plain-text hexagram diagrams.
pub mod render;
/// The divination result record.
pub mod result;
/// The eight trigrams.
pub mod trigram;

/// Re-export the branch resolver.
pub use branch::EarthlyBranch;
/// Re-export the engine entry point.
pub use engine::derive_hexagram;
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export input types.
pub use input::{Casting, DivinationInput, Method};
/// Re-export line types.
pub use line::{HexagramLines, Line};
/// Re-export the result record.
pub use result::HexagramResult;
/// Re-export the trigram type.
pub use trigram::Trigram;
