//! Prompt template loading and rendering via `minijinja`.
//!
//! The built-in template ships inside the crate. A replacement can be loaded
//! from disk (see [`OracleConfig::template_path`]) to tune the interpretation
//! style without recompiling.

use std::path::Path;

use minijinja::Environment;
use serde::Serialize;

use mh_core::HexagramResult;

use crate::config::OracleConfig;
use crate::error::{OracleError, OracleResult};

const TEMPLATE_NAME: &str = "interpretation";
const DEFAULT_TEMPLATE: &str = include_str!("../templates/interpretation.j2");

/// System message establishing the interpreter's persona.
pub const SYSTEM_PROMPT: &str =
    "你是一位精通《易經》的國學大師，擅長以白話講解卦辭與爻辭，並結合問卦者的處境給出建議。";

/// The complete prompt ready to send to a backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    /// Persona / instructions.
    pub system: String,
    /// The reading and the requested answer structure.
    pub user: String,
}

#[derive(Serialize)]
struct PromptContext<'a> {
    name: &'a str,
    changed_name: &'a str,
    changing_line: u8,
    divination_time: &'a str,
    earthly_branch: &'a str,
    input_summary: String,
    inquiry: Option<&'a str>,
}

impl<'a> PromptContext<'a> {
    fn from_result(result: &'a HexagramResult) -> Self {
        Self {
            name: &result.name,
            changed_name: &result.changed_name,
            changing_line: result.changing_line,
            divination_time: &result.divination_time,
            earthly_branch: &result.earthly_branch,
            input_summary: result.input_details.summary(),
            inquiry: result.inquiry.as_deref(),
        }
    }
}

impl Prompt {
    /// Render a result with the built-in template.
    pub fn from_result(result: &HexagramResult) -> OracleResult<Self> {
        PromptEngine::new()?.render(result)
    }
}

/// Renders interpretation prompts from divination results.
pub struct PromptEngine {
    env: Environment<'static>,
}

impl PromptEngine {
    /// Engine using the built-in template.
    pub fn new() -> OracleResult<Self> {
        Self::with_template(DEFAULT_TEMPLATE.to_string())
    }

    /// Engine using a template file.
    pub fn from_file(path: &Path) -> OracleResult<Self> {
        let source = std::fs::read_to_string(path).map_err(|e| {
            OracleError::Template(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::with_template(source)
    }

    /// Engine for a configuration: the configured file, else the built-in template.
    pub fn from_config(config: &OracleConfig) -> OracleResult<Self> {
        match &config.template_path {
            Some(path) => Self::from_file(path),
            None => Self::new(),
        }
    }

    fn with_template(source: String) -> OracleResult<Self> {
        let mut env = Environment::new();
        env.add_template_owned(TEMPLATE_NAME, source)
            .map_err(|e| OracleError::Template(format!("failed to add template: {e}")))?;
        Ok(Self { env })
    }

    /// Render the prompt for a result.
    pub fn render(&self, result: &HexagramResult) -> OracleResult<Prompt> {
        let user = self
            .env
            .get_template(TEMPLATE_NAME)
            .map_err(|e| OracleError::Template(format!("missing template: {e}")))?
            .render(PromptContext::from_result(result))
            .map_err(|e| OracleError::Template(format!("render failed: {e}")))?;

        Ok(Prompt {
            system: SYSTEM_PROMPT.to_string(),
            user: user.trim().to_string(),
        })
    }
}
