//! Interpretation and reading sessions for Meihua.
//!
//! Builds interpretation prompts from derived hexagrams, sends them to a
//! configurable text-generation backend, and falls back to a fixed message
//! whenever that fails. Also provides an in-memory reading session with a
//! journal for interactive use.

pub mod backend;
pub mod config;
pub mod error;
pub mod interpret;
pub mod journal;
pub mod prompt;
pub mod session;

pub use backend::{LlmBackend, TextGenerator, create_backend};
pub use config::{BackendKind, OracleConfig};
pub use error::{OracleError, OracleResult};
pub use interpret::{FALLBACK_MESSAGE, Interpretation, InterpretationSource, interpret};
pub use journal::{Journal, JournalEntry};
pub use prompt::{Prompt, PromptEngine};
pub use session::{ReadingSession, is_quit};
