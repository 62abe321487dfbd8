//! Turning a divination result into a textual interpretation.
//!
//! Interpretation never fails from the caller's point of view: any error in
//! prompt rendering or generation is logged and replaced by
//! [`FALLBACK_MESSAGE`].

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use mh_core::HexagramResult;

use crate::backend::TextGenerator;
use crate::error::OracleResult;
use crate::prompt::PromptEngine;

/// Returned whenever interpretation could not be produced.
pub const FALLBACK_MESSAGE: &str = "抱歉，目前解析服務暫時無法連線，請稍後再試。";

/// Where an interpretation came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterpretationSource {
    /// Produced by the backend.
    Generated,
    /// The fixed fallback message.
    Fallback,
}

/// Interpretation text plus its provenance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interpretation {
    /// Text shown to the user.
    pub text: String,
    /// Whether the text is generated or the fallback.
    pub source: InterpretationSource,
}

impl Interpretation {
    /// The fallback interpretation.
    pub fn fallback() -> Self {
        Self {
            text: FALLBACK_MESSAGE.to_string(),
            source: InterpretationSource::Fallback,
        }
    }

    /// True if this is the fallback message.
    pub fn is_fallback(&self) -> bool {
        self.source == InterpretationSource::Fallback
    }
}

/// Interpret a result with the built-in prompt template.
pub async fn interpret<G: TextGenerator>(generator: &G, result: &HexagramResult) -> Interpretation {
    match PromptEngine::new() {
        Ok(engine) => interpret_with(generator, &engine, result).await,
        Err(e) => {
            warn!(error = %e, "prompt template unavailable");
            Interpretation::fallback()
        }
    }
}

/// Interpret a result with a specific prompt engine.
pub async fn interpret_with<G: TextGenerator>(
    generator: &G,
    engine: &PromptEngine,
    result: &HexagramResult,
) -> Interpretation {
    match try_interpret(generator, engine, result).await {
        Ok(text) => Interpretation {
            text,
            source: InterpretationSource::Generated,
        },
        Err(e) => {
            warn!(error = %e, hexagram = %result.name, "interpretation failed, using fallback");
            Interpretation::fallback()
        }
    }
}

async fn try_interpret<G: TextGenerator>(
    generator: &G,
    engine: &PromptEngine,
    result: &HexagramResult,
) -> OracleResult<String> {
    let prompt = engine.render(result)?;
    debug!(
        hexagram = %result.name,
        changed = %result.changed_name,
        changing_line = result.changing_line,
        prompt_chars = prompt.user.chars().count(),
        "requesting interpretation"
    );
    let text = generator.generate(&prompt).await?;
    debug!(chars = text.chars().count(), "interpretation received");
    Ok(text)
}
