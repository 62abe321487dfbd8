use chrono::NaiveDateTime;
use clap::Args;

use mh_core::{DivinationInput, HexagramResult, derive_hexagram};
use mh_oracle::{Prompt, PromptEngine};

/// Flags shared by both casting methods.
#[derive(Args)]
pub struct CastOptions {
    /// The question being asked (所問之事)
    #[arg(short, long)]
    pub inquiry: Option<String>,

    /// Moment of divination, "YYYY-MM-DD HH:MM[:SS]" (default: now)
    #[arg(long)]
    pub at: Option<String>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Also print the interpretation prompt
    #[arg(long)]
    pub prompt: bool,

    /// Request an interpretation from the configured backend
    #[arg(long)]
    pub interpret: bool,
}

pub fn run(input: DivinationInput, opts: &CastOptions) -> Result<(), String> {
    let input = match &opts.inquiry {
        Some(inquiry) => input.with_inquiry(inquiry.as_str()),
        None => input,
    };
    input.validate().map_err(|e| e.to_string())?;

    let at = match &opts.at {
        Some(raw) => parse_moment(raw)?,
        None => super::now(),
    };
    let result = derive_hexagram(&input, at).map_err(|e| e.to_string())?;

    if opts.json {
        let mut value = serde_json::to_value(&result).map_err(|e| e.to_string())?;
        if opts.prompt {
            let prompt = render_prompt(&result)?;
            value["prompt"] = serde_json::json!({
                "system": prompt.system,
                "user": prompt.user,
            });
        }
        if opts.interpret {
            let interpretation = super::interpret_reading(&result);
            value["interpretation"] =
                serde_json::to_value(&interpretation).map_err(|e| e.to_string())?;
        }
        let json = serde_json::to_string_pretty(&value).map_err(|e| e.to_string())?;
        println!("{json}");
        return Ok(());
    }

    super::print_reading(&result);
    if opts.interpret {
        super::print_interpretation(&super::interpret_reading(&result));
    }
    if opts.prompt {
        let prompt = render_prompt(&result)?;
        println!();
        println!("{}", prompt.system);
        println!();
        println!("{}", prompt.user);
    }

    Ok(())
}

fn render_prompt(result: &HexagramResult) -> Result<Prompt, String> {
    mh_oracle::OracleConfig::from_env()
        .and_then(|config| PromptEngine::from_config(&config))
        .and_then(|engine| engine.render(result))
        .map_err(|e| e.to_string())
}

/// Parse `YYYY-MM-DD HH:MM[:SS]` (a `T` separator is accepted too).
fn parse_moment(raw: &str) -> Result<NaiveDateTime, String> {
    let normalized = raw.trim().replacen('T', " ", 1);
    ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(&normalized, fmt).ok())
        .ok_or_else(|| format!("invalid --at '{raw}', expected YYYY-MM-DD HH:MM[:SS]"))
}
