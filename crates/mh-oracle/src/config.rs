//! Configuration for the text-generation backend.
//!
//! Values come from `MEIHUA_*` environment variables; builder methods cover
//! programmatic use and tests.

use std::path::PathBuf;

use crate::error::{OracleError, OracleResult};

/// Supported text-generation APIs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    /// Google Gemini `generateContent`.
    Gemini,
    /// Any OpenAI-compatible chat completions endpoint.
    OpenAi,
}

impl BackendKind {
    /// Parse a backend name.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "gemini" | "google" => Some(Self::Gemini),
            "openai" | "open-ai" | "openai-compatible" => Some(Self::OpenAi),
            _ => None,
        }
    }

    /// Base URL used when none is configured.
    pub const fn default_api_url(self) -> &'static str {
        match self {
            Self::Gemini => "https://generativelanguage.googleapis.com/v1beta",
            Self::OpenAi => "https://api.openai.com/v1",
        }
    }

    /// Model used when none is configured.
    pub const fn default_model(self) -> &'static str {
        match self {
            Self::Gemini => "gemini-3-flash-preview",
            Self::OpenAi => "gpt-4o-mini",
        }
    }
}

impl std::fmt::Display for BackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Gemini => write!(f, "gemini"),
            Self::OpenAi => write!(f, "openai"),
        }
    }
}

/// Settings for interpretation requests.
#[derive(Debug, Clone, PartialEq)]
pub struct OracleConfig {
    /// Which API to talk to.
    pub backend: BackendKind,
    /// Base API URL.
    pub api_url: String,
    /// API key; only needed once an interpretation is requested.
    pub api_key: Option<String>,
    /// Model identifier.
    pub model: String,
    /// Sampling temperature (0.0-2.0).
    pub temperature: f32,
    /// Nucleus sampling cutoff (0.0-1.0).
    pub top_p: f32,
    /// Prompt template file replacing the built-in template.
    pub template_path: Option<PathBuf>,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self::for_backend(BackendKind::Gemini)
    }
}

impl OracleConfig {
    /// Defaults for a given backend.
    pub fn for_backend(backend: BackendKind) -> Self {
        Self {
            backend,
            api_url: backend.default_api_url().to_string(),
            api_key: None,
            model: backend.default_model().to_string(),
            temperature: 0.7,
            top_p: 0.95,
            template_path: None,
        }
    }

    /// Load configuration from the process environment.
    ///
    /// Recognised variables:
    /// - `MEIHUA_LLM_BACKEND`: `gemini` (default) or `openai`
    /// - `MEIHUA_LLM_API_URL`: base URL (backend default)
    /// - `MEIHUA_LLM_API_KEY`: API key
    /// - `MEIHUA_LLM_MODEL`: model identifier (backend default)
    /// - `MEIHUA_LLM_TEMPERATURE`: default 0.7
    /// - `MEIHUA_LLM_TOP_P`: default 0.95
    /// - `MEIHUA_PROMPT_TEMPLATE`: path to a custom prompt template
    pub fn from_env() -> OracleResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> OracleResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let backend = match get("MEIHUA_LLM_BACKEND") {
            Some(name) => BackendKind::parse(&name).ok_or_else(|| {
                OracleError::Config(format!(
                    "unknown backend \"{name}\", use: gemini, openai"
                ))
            })?,
            None => BackendKind::Gemini,
        };

        let mut config = Self::for_backend(backend);
        if let Some(url) = get("MEIHUA_LLM_API_URL") {
            config.api_url = url.trim_end_matches('/').to_string();
        }
        config.api_key = get("MEIHUA_LLM_API_KEY");
        if let Some(model) = get("MEIHUA_LLM_MODEL") {
            config.model = model;
        }
        if let Some(raw) = get("MEIHUA_LLM_TEMPERATURE") {
            config.temperature = parse_float("MEIHUA_LLM_TEMPERATURE", &raw, 0.0, 2.0)?;
        }
        if let Some(raw) = get("MEIHUA_LLM_TOP_P") {
            config.top_p = parse_float("MEIHUA_LLM_TOP_P", &raw, 0.0, 1.0)?;
        }
        config.template_path = get("MEIHUA_PROMPT_TEMPLATE").map(PathBuf::from);

        Ok(config)
    }

    /// Set the API key.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the base API URL.
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the temperature (clamped to 0.0-2.0).
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature.clamp(0.0, 2.0);
        self
    }

    /// Set the custom template path.
    pub fn with_template_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.template_path = Some(path.into());
        self
    }

    /// The API key, or a config error naming the variable to set.
    pub fn require_api_key(&self) -> OracleResult<&str> {
        self.api_key.as_deref().ok_or_else(|| {
            OracleError::Config("MEIHUA_LLM_API_KEY is not set".to_string())
        })
    }
}

fn parse_float(name: &str, raw: &str, min: f32, max: f32) -> OracleResult<f32> {
    let value: f32 = raw
        .trim()
        .parse()
        .map_err(|e| OracleError::Config(format!("invalid {name}: {e}")))?;
    if !(min..=max).contains(&value) {
        return Err(OracleError::Config(format!(
            "{name} must be between {min} and {max}, got {value}"
        )));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn default_config() {
        let cfg = OracleConfig::default();
        assert_eq!(cfg.backend, BackendKind::Gemini);
        assert_eq!(cfg.model, "gemini-3-flash-preview");
        assert!((cfg.temperature - 0.7).abs() < f32::EPSILON);
        assert!((cfg.top_p - 0.95).abs() < f32::EPSILON);
        assert!(cfg.api_key.is_none());
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let cfg = OracleConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg, OracleConfig::default());
    }

    #[test]
    fn openai_backend_from_env() {
        let cfg = OracleConfig::from_lookup(lookup(&[
            ("MEIHUA_LLM_BACKEND", "openai"),
            ("MEIHUA_LLM_API_KEY", "sk-test"),
            ("MEIHUA_LLM_API_URL", "http://localhost:11434/v1/"),
            ("MEIHUA_LLM_TEMPERATURE", "0.3"),
        ]))
        .unwrap();
        assert_eq!(cfg.backend, BackendKind::OpenAi);
        assert_eq!(cfg.model, "gpt-4o-mini");
        assert_eq!(cfg.api_url, "http://localhost:11434/v1");
        assert_eq!(cfg.require_api_key().unwrap(), "sk-test");
        assert!((cfg.temperature - 0.3).abs() < f32::EPSILON);
    }

    #[test]
    fn unknown_backend_is_rejected() {
        let err = OracleConfig::from_lookup(lookup(&[("MEIHUA_LLM_BACKEND", "oracle-bones")]))
            .unwrap_err();
        assert!(err.to_string().contains("unknown backend"));
    }

    #[test]
    fn out_of_range_top_p_is_rejected() {
        let err =
            OracleConfig::from_lookup(lookup(&[("MEIHUA_LLM_TOP_P", "1.5")])).unwrap_err();
        assert!(matches!(err, OracleError::Config(_)));
    }

    #[test]
    fn unparsable_temperature_is_rejected() {
        let err = OracleConfig::from_lookup(lookup(&[("MEIHUA_LLM_TEMPERATURE", "warm")]))
            .unwrap_err();
        assert!(err.to_string().contains("MEIHUA_LLM_TEMPERATURE"));
    }

    #[test]
    fn missing_key_is_a_config_error() {
        let err = OracleConfig::default().require_api_key().unwrap_err();
        assert!(err.to_string().contains("MEIHUA_LLM_API_KEY"));
    }

    #[test]
    fn builder_methods() {
        let cfg = OracleConfig::default()
            .with_api_key("k")
            .with_api_url("http://example.test/")
            .with_model("m")
            .with_temperature(9.0)
            .with_template_path("prompt.j2");
        assert_eq!(cfg.api_key.as_deref(), Some("k"));
        assert_eq!(cfg.api_url, "http://example.test");
        assert_eq!(cfg.model, "m");
        assert!((cfg.temperature - 2.0).abs() < f32::EPSILON);
        assert_eq!(cfg.template_path, Some(PathBuf::from("prompt.j2")));
    }

    #[test]
    fn backend_parse_and_display() {
        assert_eq!(BackendKind::parse("Gemini"), Some(BackendKind::Gemini));
        assert_eq!(BackendKind::parse("openai"), Some(BackendKind::OpenAi));
        assert_eq!(BackendKind::parse("bard"), None);
        assert_eq!(BackendKind::OpenAi.to_string(), "openai");
    }
}
