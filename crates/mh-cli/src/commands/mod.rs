pub mod branch;
pub mod cast;
pub mod grid;
pub mod session;
pub mod trigrams;

use chrono::{Local, NaiveDateTime};
use colored::Colorize;
use tracing::warn;

use mh_core::HexagramResult;
use mh_core::render::{self, CHANGING_MARKER};
use mh_oracle::interpret::interpret_with;
use mh_oracle::{Interpretation, OracleConfig, OracleError, PromptEngine, create_backend};

/// The local wall-clock time.
fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Print the summary and the side-by-side diagram of a reading.
fn print_reading(result: &HexagramResult) {
    println!("  {}", result.to_string().bold());
    println!();
    for line in render::summary(result).lines() {
        println!("  {line}");
    }
    println!();
    let marker = CHANGING_MARKER.red().bold().to_string();
    for row in render::side_by_side(result).lines() {
        println!("  {}", row.replace(CHANGING_MARKER, &marker));
    }
}

/// Print an interpretation under a heading.
fn print_interpretation(interpretation: &Interpretation) {
    println!();
    println!("  {}", "解析".bold());
    println!();
    if interpretation.is_fallback() {
        println!("  {}", interpretation.text.yellow());
    } else {
        for line in interpretation.text.trim().lines() {
            println!("  {line}");
        }
    }
}

/// Ask the configured backend for an interpretation.
///
/// Never fails: any configuration, template or runtime error is logged and
/// replaced by the fallback message.
fn interpret_reading(result: &HexagramResult) -> Interpretation {
    match try_interpret_reading(result) {
        Ok(interpretation) => interpretation,
        Err(e) => {
            warn!(error = %e, "interpretation unavailable, using fallback");
            Interpretation::fallback()
        }
    }
}

fn try_interpret_reading(result: &HexagramResult) -> Result<Interpretation, OracleError> {
    let config = OracleConfig::from_env()?;
    let engine = PromptEngine::from_config(&config)?;
    let backend = create_backend(&config)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| OracleError::Backend(format!("failed to start async runtime: {e}")))?;
    Ok(runtime.block_on(interpret_with(&backend, &engine, result)))
}
