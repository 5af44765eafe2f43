use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::VigilError;

/// Top-level configuration loaded from `.vigil.toml`.
///
/// # Examples
///
/// ```
/// use vigil_core::VigilConfig;
///
/// let config = VigilConfig::default();
/// assert_eq!(config.llm.model, "gpt-4o");
/// assert_eq!(config.triage.unassigned_label, "Unassigned");
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VigilConfig {
    /// LLM provider settings for the advisor.
    #[serde(default)]
    pub llm: LlmConfig,
    /// Triage roster settings.
    #[serde(default)]
    pub triage: TriageConfig,
}

impl VigilConfig {
    /// Load configuration from a TOML file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`VigilError::Io`] if the file cannot be read, or
    /// [`VigilError::Toml`] if the content is not valid TOML.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use vigil_core::VigilConfig;
    /// use std::path::Path;
    ///
    /// let config = VigilConfig::from_file(Path::new(".vigil.toml")).unwrap();
    /// ```
    pub fn from_file(path: &Path) -> Result<Self, VigilError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns [`VigilError::Toml`] if parsing fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use vigil_core::VigilConfig;
    ///
    /// let toml = r#"
    /// [triage]
    /// analysts = ["Erin"]
    /// "#;
    /// let config = VigilConfig::from_toml(toml).unwrap();
    /// assert_eq!(config.triage.analysts, vec!["Erin"]);
    /// ```
    pub fn from_toml(content: &str) -> Result<Self, VigilError> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }
}

/// LLM provider configuration for the advisor.
///
/// # Examples
///
/// ```
/// use vigil_core::LlmConfig;
///
/// let config = LlmConfig::default();
/// assert_eq!(config.provider, "openai");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Provider name (e.g. `"openai"`, `"anthropic"`, `"ollama"`).
    #[serde(default = "default_provider")]
    pub provider: String,
    /// Model identifier.
    #[serde(default = "default_model")]
    pub model: String,
    /// API key for the provider.
    pub api_key: Option<String>,
    /// Custom base URL for API requests.
    pub base_url: Option<String>,
}

fn default_provider() -> String {
    "openai".into()
}

fn default_model() -> String {
    "gpt-4o".into()
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            model: default_model(),
            api_key: None,
            base_url: None,
        }
    }
}

/// Triage roster configuration.
///
/// The analyst roster and the unassigned sentinel are process-wide
/// configuration, not code constants: they are passed into the aggregation
/// layer explicitly so the core stays testable without global state.
///
/// # Examples
///
/// ```
/// use vigil_core::TriageConfig;
///
/// let config = TriageConfig::default();
/// assert!(config.analysts.contains(&"Alice".to_string()));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriageConfig {
    /// Analysts available for assignment, in display order.
    #[serde(default = "default_analysts")]
    pub analysts: Vec<String>,
    /// Label for the unassigned sentinel. Selecting it maps to no assignee,
    /// never to the literal string.
    #[serde(default = "default_unassigned_label")]
    pub unassigned_label: String,
}

fn default_analysts() -> Vec<String> {
    vec![
        "Alice".into(),
        "Bob".into(),
        "Charlie".into(),
        "Dana".into(),
    ]
}

fn default_unassigned_label() -> String {
    "Unassigned".into()
}

impl Default for TriageConfig {
    fn default() -> Self {
        Self {
            analysts: default_analysts(),
            unassigned_label: default_unassigned_label(),
        }
    }
}

impl TriageConfig {
    /// Returns `true` if `name` is a configured analyst identity.
    pub fn is_known_analyst(&self, name: &str) -> bool {
        self.analysts.iter().any(|a| a == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_expected_values() {
        let config = VigilConfig::default();
        assert_eq!(config.llm.provider, "openai");
        assert_eq!(config.llm.model, "gpt-4o");
        assert!(config.llm.api_key.is_none());
        assert_eq!(
            config.triage.analysts,
            vec!["Alice", "Bob", "Charlie", "Dana"]
        );
        assert_eq!(config.triage.unassigned_label, "Unassigned");
    }

    #[test]
    fn parse_minimal_toml() {
        let toml = r#"
[llm]
model = "gpt-4o-mini"
"#;
        let config = VigilConfig::from_toml(toml).unwrap();
        assert_eq!(config.llm.model, "gpt-4o-mini");
        assert_eq!(config.llm.provider, "openai");
        assert_eq!(config.triage.unassigned_label, "Unassigned");
    }

    #[test]
    fn parse_full_toml() {
        let toml = r#"
[llm]
provider = "ollama"
model = "llama3.2"
base_url = "http://localhost:11434"

[triage]
analysts = ["Erin", "Frank"]
unassigned_label = "Nobody"
"#;
        let config = VigilConfig::from_toml(toml).unwrap();
        assert_eq!(config.llm.provider, "ollama");
        assert_eq!(config.llm.base_url.as_deref(), Some("http://localhost:11434"));
        assert_eq!(config.triage.analysts, vec!["Erin", "Frank"]);
        assert_eq!(config.triage.unassigned_label, "Nobody");
    }

    #[test]
    fn empty_toml_gives_defaults() {
        let config = VigilConfig::from_toml("").unwrap();
        assert_eq!(config.llm.model, "gpt-4o");
        assert_eq!(config.triage.analysts.len(), 4);
    }

    #[test]
    fn invalid_toml_returns_error() {
        let result = VigilConfig::from_toml("{{invalid}}");
        assert!(result.is_err());
    }

    #[test]
    fn known_analyst_lookup() {
        let config = TriageConfig::default();
        assert!(config.is_known_analyst("Bob"));
        assert!(!config.is_known_analyst("Mallory"));
        assert!(!config.is_known_analyst("Unassigned"));
    }
}
