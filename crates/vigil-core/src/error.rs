/// Errors that can occur across the Vigil platform.
///
/// Each variant wraps a specific error domain. Library crates use this type
/// directly; the binary crate converts to `miette` diagnostics at the boundary.
///
/// # Examples
///
/// ```
/// use vigil_core::VigilError;
///
/// let err = VigilError::Config("missing API key".into());
/// assert!(err.to_string().contains("missing API key"));
/// ```
#[derive(Debug, thiserror::Error)]
pub enum VigilError {
    /// Filesystem I/O failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid or missing configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// Input rejected before entering the suggestion pipeline.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Threat intelligence service failure. Recovered inside the
    /// orchestrator by falling back to the advisor; never surfaced to
    /// callers of `suggest_threats`.
    #[error("threat intelligence error: {0}")]
    Source(String),

    /// Advisor failure: the model call failed, produced no output, or its
    /// output did not validate against the threat list schema. Fatal for
    /// the current suggestion request.
    #[error("generation error: {0}")]
    Generation(String),

    /// JSON serialization / deserialization failure.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML deserialization failure.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}
